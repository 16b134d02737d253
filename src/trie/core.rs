use super::segment::{pop_path, pop_pattern, PatternSegment};
use super::{InsertError, Node};

use crate::userset::UserSet;

use std::collections::HashMap;
use std::fmt;

use regex::Regex;

pub(super) type LabelHits<'t> = Vec<(&'t str, String)>;

impl Node {
    pub(super) fn insert_at(
        &mut self,
        mut path: &str,
        user_ids: &[u32],
        key: &str,
        wildcards: &mut HashMap<usize, String>,
        depth: usize,
    ) -> Result<(), InsertError> {
        loop {
            if path.is_empty() {
                self.mark_leaf(user_ids, key, wildcards);
                return Ok(());
            }
            let PatternSegment {
                segment,
                spec,
                fuzzy,
            } = pop_pattern(&mut path);
            if segment.is_empty() {
                continue;
            }
            if !spec.is_empty() {
                wildcards.insert(depth, spec);
            }
            let child_key = if fuzzy && segment != "*" {
                self.fuzzy_child_key(&segment)?
            } else {
                segment
            };
            return self
                .children
                .entry(child_key)
                .or_default()
                .insert_at(path, user_ids, key, wildcards, depth + 1);
        }
    }

    fn fuzzy_child_key(&mut self, segment: &str) -> Result<String, InsertError> {
        let source = format!("^{}$", segment.replace('*', "(.+?)"));
        if !self.regexps.iter().any(|(s, _)| s == &source) {
            let regex =
                Regex::new(&source).map_err(|e| InsertError::new(source.clone(), e))?;
            self.regexps.push((source.clone(), regex));
        }
        Ok(source)
    }

    fn mark_leaf(&mut self, user_ids: &[u32], key: &str, wildcards: &HashMap<usize, String>) {
        let was_leaf = self.leaf;
        self.leaf = true;
        if let Some(&first) = user_ids.first() {
            if !was_leaf {
                if first != 0 {
                    self.members = Some(UserSet::from_sorted(user_ids));
                }
            } else if let Some(mut set) = self.members.take() {
                if first != 0 {
                    set.merge_sorted(user_ids);
                    self.members = Some(set);
                }
            }
        }
        for (&depth, spec) in wildcards {
            self.labels
                .entry(depth)
                .or_default()
                .insert(spec.clone(), key.to_owned());
        }
    }

    pub(super) fn match_at<'t>(
        &'t self,
        mut path: &str,
        user_id: u32,
        depth: usize,
        captured: &mut HashMap<usize, String>,
    ) -> (bool, bool, LabelHits<'t>) {
        loop {
            if path.is_empty() {
                if !self.leaf {
                    return (false, false, Vec::new());
                }
                return (true, self.permits(user_id), self.label_hits(captured));
            }

            let segment = pop_path(&mut path);
            if segment.is_empty() {
                continue;
            }

            for (source, regex) in &self.regexps {
                let caps = match regex.captures(&segment) {
                    Some(caps) => caps,
                    None => continue,
                };
                captured.insert(depth, join_groups(&caps));
                if let Some(child) = self.children.get(source) {
                    let hit = child.match_at(path, user_id, depth + 1, captured);
                    if hit.0 {
                        return hit;
                    }
                }
            }

            if let Some(child) = self.children.get(segment.as_ref()) {
                let hit = child.match_at(path, user_id, depth + 1, captured);
                if hit.0 {
                    return hit;
                }
            }

            if let Some(child) = self.children.get("*") {
                captured.insert(depth, segment.into_owned());
                let hit = child.match_at(path, user_id, depth + 1, captured);
                if hit.0 {
                    return hit;
                }
            }

            return (false, false, Vec::new());
        }
    }

    fn permits(&self, user_id: u32) -> bool {
        match (&self.members, user_id) {
            (None, _) => true,
            (Some(_), 0) => false,
            (Some(set), id) => set.contains(id),
        }
    }

    fn label_hits<'t>(&'t self, captured: &HashMap<usize, String>) -> LabelHits<'t> {
        let mut hits = Vec::new();
        for (depth, inner) in &self.labels {
            let value = captured.get(depth).map(String::as_str).unwrap_or("");
            for spec in inner.keys() {
                hits.push((spec.as_str(), value.to_owned()));
            }
        }
        hits
    }

    pub(super) fn dump_into(&self, f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
        if self.leaf {
            if prefix.is_empty() {
                f.write_str("/")?;
            } else {
                f.write_str(prefix)?;
            }
            let mut depths: Vec<_> = self.labels.iter().collect();
            depths.sort_by_key(|(depth, _)| **depth);
            for (depth, inner) in depths {
                let mut specs: Vec<_> = inner.iter().collect();
                specs.sort();
                for (spec, key) in specs {
                    write!(f, " {}:{}<={}", depth, spec, key)?;
                }
            }
            match &self.members {
                None => f.write_str(" -")?,
                Some(set) => write!(f, " {:?}", set.ids())?,
            }
            f.write_str("\n")?;
        }
        let mut entries: Vec<_> = self.children.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (key, child) in entries {
            child.dump_into(f, &format!("{}/{}", prefix, key))?;
        }
        Ok(())
    }
}

fn join_groups(caps: &regex::Captures<'_>) -> String {
    let mut joined = String::new();
    for group in caps.iter().skip(1) {
        joined.push(';');
        if let Some(m) = group {
            joined.push_str(m.as_str());
        }
    }
    joined
}
