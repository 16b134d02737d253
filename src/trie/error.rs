#[derive(Debug, thiserror::Error)]
#[error("failed to compile fuzzy segment {regex:?}: {source}")]
pub struct InsertError {
    regex: String,
    source: regex::Error,
}

impl InsertError {
    pub(super) fn new(regex: String, source: regex::Error) -> Self {
        Self { regex, source }
    }

    pub fn regex(&self) -> &str {
        &self.regex
    }
}
