// file: src/models/query.rs
// description: user supplied search text, trimmed and guaranteed non-empty

use serde::Serialize;
use std::fmt;

/// Search text as sent to the API. Construction trims the input and refuses
/// empty or whitespace-only text, so holding a `Query` means a request may be
/// issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
