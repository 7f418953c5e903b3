use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One synthetic article as the search UI renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub id: String,
    pub title: String,
    pub snippet: String,
    pub long: String,
    pub source: String,
    /// Human readable local time, e.g. `3/14/2026, 9:05:00 AM`.
    pub date: String,
    pub published_at: DateTime<Utc>,
    /// Numeric relevance, kept as a string for the UI.
    pub score: String,
}

/// A page of results plus the metadata needed to render a pager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope {
    pub items: Vec<ResultRecord>,
    pub page: i64,
    pub page_size: i64,
    pub total: usize,
}

impl PageEnvelope {
    pub fn empty(page_size: i64) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size,
            total: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Raw query string of `GET /api/search`. Numbers stay strings here so that
/// malformed values can be coerced instead of rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopResultsParams {
    #[serde(default)]
    pub q: String,
}
