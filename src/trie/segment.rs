#![forbid(unsafe_code)]

use std::borrow::Cow;

pub(super) struct PatternSegment {
    pub(super) segment: String,
    pub(super) spec: String,
    pub(super) fuzzy: bool,
}

pub(super) fn pop_pattern(path: &mut &str) -> PatternSegment {
    let src = *path;
    let bytes = src.as_bytes();

    let mut segment = String::new();
    let mut spec = String::new();
    let mut labels = 0usize;

    let mut run = 0usize;
    let mut open: Option<usize> = None;
    let mut close: Option<usize> = None;

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'/' => {
                if segment.is_empty() && run == i {
                    run = i + 1;
                    i += 1;
                    continue;
                }
                push_folded(&mut segment, &src[run..i]);
                *path = &src[i + 1..];
                return finish(segment, spec, labels);
            }
            b'{' => open = Some(i),
            b'}' => close = Some(i),
            _ => {}
        }
        if let (Some(o), Some(c)) = (open, close) {
            if o >= run && c > o {
                spec.push(';');
                push_folded(&mut spec, &src[o + 1..c]);
                push_folded(&mut segment, &src[run..o]);
                segment.push('*');
                labels += 1;
                run = c + 1;
                open = None;
                close = None;
            }
        }
        i += 1;
    }

    push_folded(&mut segment, &src[run..]);
    *path = "";
    finish(segment, spec, labels)
}

fn finish(segment: String, mut spec: String, labels: usize) -> PatternSegment {
    if labels == 1 {
        spec.remove(0);
    }
    let fuzzy = segment.contains('*');
    PatternSegment {
        segment,
        spec,
        fuzzy,
    }
}

fn push_folded(out: &mut String, part: &str) {
    out.extend(part.chars().map(|c| c.to_ascii_lowercase()));
}

pub(super) fn pop_path<'a>(path: &mut &'a str) -> Cow<'a, str> {
    let src = *path;
    let bytes = src.as_bytes();

    let mut run = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'/' {
            if run == i {
                run = i + 1;
                continue;
            }
            *path = &src[i + 1..];
            return fold(&src[run..i]);
        }
    }
    *path = "";
    fold(&src[run..])
}

fn fold(segment: &str) -> Cow<'_, str> {
    if segment.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(segment.to_ascii_lowercase())
    } else {
        Cow::Borrowed(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(mut seg: &str) -> (String, String, bool) {
        let popped = pop_pattern(&mut seg);
        assert_eq!(seg, "");
        (popped.segment, popped.spec, popped.fuzzy)
    }

    #[test]
    fn plain_segments() {
        let mut path = "//a/B//c/";
        let mut got = Vec::new();
        while !path.is_empty() {
            let popped = pop_pattern(&mut path);
            got.push((popped.segment, popped.spec, popped.fuzzy));
        }
        let got: Vec<_> = got
            .iter()
            .map(|(s, w, f)| (s.as_str(), w.as_str(), *f))
            .collect();
        assert_eq!(got, [("a", "", false), ("b", "", false), ("c", "", false)]);
    }

    #[test]
    fn label_segments() {
        assert_eq!(one("{x}"), ("*".into(), "x".into(), true));
        assert_eq!(one("foo{X}bar"), ("foo*bar".into(), "x".into(), true));
        assert_eq!(one("{a}-{b}"), ("*-*".into(), ";a;b".into(), true));
        assert_eq!(one("a{v}b{w}c"), ("a*b*c".into(), ";v;w".into(), true));
    }

    #[test]
    fn literal_star_is_fuzzy() {
        assert_eq!(one("foo*"), ("foo*".into(), "".into(), true));
        assert_eq!(one("*"), ("*".into(), "".into(), true));
    }

    #[test]
    fn unbalanced_braces_are_literal() {
        assert_eq!(one("{x"), ("{x".into(), "".into(), false));
        assert_eq!(one("x}y{z"), ("x}y{z".into(), "".into(), false));
    }

    #[test]
    fn braces_never_span_separators() {
        let mut path = "a{b/c}d";
        let first = pop_pattern(&mut path);
        assert_eq!(first.segment, "a{b");
        let second = pop_pattern(&mut path);
        assert_eq!(second.segment, "c}d");
        assert!(!first.fuzzy && !second.fuzzy);
    }

    #[test]
    fn path_segments_skip_separators() {
        let mut path = "//x//Y/";
        assert_eq!(pop_path(&mut path), "x");
        assert_eq!(pop_path(&mut path), "y");
        assert_eq!(path, "");
    }

    #[test]
    fn path_segments_borrow_without_upper_case() {
        let mut path = "/a/Bc";
        assert!(matches!(pop_path(&mut path), Cow::Borrowed("a")));
        assert!(matches!(pop_path(&mut path), Cow::Owned(_)));
    }
}
