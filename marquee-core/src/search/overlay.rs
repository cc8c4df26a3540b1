//! Search overlay state: open/close, debounced input, grouped results.

use std::ops::{RangeInclusive, RangeToInclusive};
use std::time::Duration;
use tracing::{debug, warn};

use marquee_model::{ContentItem, SearchResponse};

use super::history::RecentSearches;
use crate::client::ClientError;

/// Ids of the ranked row and below; never shown in search results.
const RANKED_IDS: RangeToInclusive<u32> = ..=10;
/// Ids of the curated picks row.
const CURATED_IDS: RangeInclusive<u32> = 11..=25;

pub const CURATED_TITLE: &str = "Today's Picks For You";
pub const KOREAN_TITLE: &str = "Made in Korea";

/// Identifies one debounced search request. Only the latest ticket may
/// update the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSection {
    pub title: &'static str,
    pub items: Vec<ContentItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub query: String,
    /// Items shown across all sections.
    pub total: usize,
    pub sections: Vec<ResultSection>,
}

impl SearchResults {
    /// Drops ranked entries and groups the rest by row.
    pub fn group(query: &str, results: Vec<ContentItem>) -> Self {
        let (curated, korean): (Vec<_>, Vec<_>) = results
            .into_iter()
            .filter(|item| !RANKED_IDS.contains(&item.id.get()))
            .partition(|item| CURATED_IDS.contains(&item.id.get()));

        let total = curated.len() + korean.len();
        let sections = [(CURATED_TITLE, curated), (KOREAN_TITLE, korean)]
            .into_iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(title, items)| ResultSection { title, items })
            .collect();

        Self {
            query: query.to_string(),
            total,
            sections,
        }
    }
}

/// What the page shows while the overlay is in use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayView {
    /// Regular catalog rows.
    #[default]
    MainContent,
    Results(SearchResults),
    NoResults { query: String },
    /// The search request failed; the page stays usable.
    Error,
}

#[derive(Debug, Clone)]
pub struct SearchOverlay {
    open: bool,
    input: String,
    generation: u64,
    view: OverlayView,
    history: RecentSearches,
    debounce: Duration,
}

impl Default for SearchOverlay {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEBOUNCE)
    }
}

impl SearchOverlay {
    /// Typing pause before a search is issued.
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

    pub fn new(debounce: Duration) -> Self {
        Self {
            open: false,
            input: String::new(),
            generation: 0,
            view: OverlayView::MainContent,
            history: RecentSearches::default(),
            debounce,
        }
    }

    pub fn with_history(mut self, history: RecentSearches) -> Self {
        self.history = history;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn view(&self) -> &OverlayView {
        &self.view
    }

    pub fn history(&self) -> &RecentSearches {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut RecentSearches {
        &mut self.history
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the overlay, clears the input and returns to the catalog.
    /// Any in-flight ticket becomes stale.
    pub fn close(&mut self) {
        self.open = false;
        self.input.clear();
        self.generation += 1;
        self.view = OverlayView::MainContent;
    }

    /// Escape closes an open overlay. Returns whether it did.
    pub fn escape(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.close();
        true
    }

    /// Records new input. Returns a ticket to run after [`Self::debounce`]
    /// unless the trimmed input is empty, which returns to the catalog.
    pub fn input_changed(&mut self, text: &str) -> Option<SearchTicket> {
        self.input = text.to_string();
        self.generation += 1;
        let query = text.trim();
        if query.is_empty() {
            self.view = OverlayView::MainContent;
            return None;
        }
        Some(SearchTicket {
            generation: self.generation,
            query: query.to_string(),
        })
    }

    /// Re-issues a query from history as if it had been typed.
    pub fn recall(&mut self, query: &str) -> Option<SearchTicket> {
        self.open();
        self.input_changed(query)
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Applies a search outcome. Stale tickets and unsuccessful envelopes
    /// are ignored. Returns whether the view changed.
    pub fn apply(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<SearchResponse, ClientError>,
    ) -> bool {
        if !self.is_current(&ticket) {
            debug!(query = %ticket.query, "dropping stale search result");
            return false;
        }
        match outcome {
            Ok(response) if response.success => {
                self.history.push(&ticket.query);
                let grouped = SearchResults::group(&ticket.query, response.results);
                self.view = if grouped.total == 0 {
                    OverlayView::NoResults {
                        query: ticket.query,
                    }
                } else {
                    OverlayView::Results(grouped)
                };
                true
            }
            Ok(_) => {
                debug!(query = %ticket.query, "search envelope reported failure");
                false
            }
            Err(err) => {
                warn!(query = %ticket.query, error = %err, "search request failed");
                self.view = OverlayView::Error;
                true
            }
        }
    }
}
