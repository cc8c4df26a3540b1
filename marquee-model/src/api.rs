//! Response envelopes served by the content API.

use crate::catalog::{ContentCatalog, ContentItem};

/// Body of `GET /api/content`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentResponse {
    pub success: bool,
    pub data: ContentCatalog,
}

impl ContentResponse {
    pub fn ok(data: ContentCatalog) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body of `GET /api/search`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub results: Vec<ContentItem>,
    pub count: usize,
}

impl SearchResponse {
    /// Builds a successful envelope; `count` always mirrors `results`.
    pub fn ok(query: impl Into<String>, results: Vec<ContentItem>) -> Self {
        Self {
            success: true,
            query: query.into(),
            count: results.len(),
            results,
        }
    }
}
