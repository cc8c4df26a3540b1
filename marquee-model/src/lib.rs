//! Catalog data model shared across Marquee crates.
#![allow(missing_docs)]

pub mod api;
pub mod catalog;
pub mod error;
pub mod ids;

// Intentionally curated re-exports for downstream consumers.
pub use api::{ContentResponse, SearchResponse};
pub use catalog::{ContentCatalog, ContentItem, Section};
pub use error::{ModelError, Result as ModelResult};
pub use ids::ItemId;
