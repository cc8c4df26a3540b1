//! Title search over the catalog and the search overlay state.

pub mod history;
pub mod overlay;

pub use history::RecentSearches;
pub use overlay::{
    OverlayView, ResultSection, SearchOverlay, SearchResults, SearchTicket,
};

use marquee_model::{ContentCatalog, ContentItem};

/// Items whose title contains `query`, ignoring case, in catalog order.
///
/// An empty query matches everything.
pub fn filter_items(catalog: &ContentCatalog, query: &str) -> Vec<ContentItem> {
    if query.is_empty() {
        return catalog.items().cloned().collect();
    }
    let needle = query.to_lowercase();
    catalog
        .items()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
