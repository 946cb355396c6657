// file: src/models/result_item.rs
// description: Search API request and response payloads
// reference: POST /search and POST /download/{format} bodies

use super::Query;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of both the search and the download requests.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a Query,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ranked hits in server order. A missing or null field is an empty
    /// result set.
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<ResultItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Display position assigned by the server, not checked for gaps
    pub rank: i64,

    /// Link target; empty when the server sent none
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub snippet: Option<String>,
}

impl ResultItem {
    pub fn new(rank: i64, url: impl Into<String>) -> Self {
        Self {
            rank,
            url: url.into(),
            title: None,
            snippet: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Title, or `placeholder` when the server sent none or an empty one.
    pub fn title_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => placeholder,
        }
    }

    pub fn snippet_or_empty(&self) -> &str {
        self.snippet.as_deref().unwrap_or("")
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
