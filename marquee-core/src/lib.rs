//! Core library for Marquee.
//!
//! The centerpiece is [`carousel`]: a headless infinite carousel that builds
//! an endless-looking strip out of a finite list of cards by tripling the
//! content and snapping the scroll offset back into the real band whenever it
//! drifts into a cloned one. Hosts plug in through
//! [`carousel::ScrollSurface`] and drive animation frames explicitly.
//!
//! Around it sit the UI-state collaborators of the catalog page: the card
//! slider and its pagination dots, the search overlay with recent-search
//! history, header chrome and dropdown modals, plus a typed client for the
//! content API.

#![allow(missing_docs)]

pub mod carousel;
pub mod client;
pub mod search;
pub mod ui;

pub use carousel::{
    Band, BandGeometry, CardSlider, CarouselController, CarouselOptions,
    Direction, MoveOutcome, PaginationMirror, ScrollBehavior, ScrollSurface,
    SliderOptions, Track, WrapMode,
};
pub use client::{CatalogClient, ClientError};
pub use search::{RecentSearches, SearchOverlay, filter_items};
