//! Host boundary for a carousel: the scrollable strip the engine drives.

use futures::future::BoxFuture;

use super::measure::ItemBox;
use super::track::Track;
use super::types::ScrollBehavior;

/// Terminal state of one card image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLoad {
    Loaded,
    Errored,
}

/// A horizontally scrollable strip that renders a [`Track`].
///
/// Implementations wrap whatever actually lays out the cards (a DOM list, a
/// retained-mode widget, a test double). Every method is called from the
/// carousel's single logical thread; implementations only need interior
/// mutability, not ordering guarantees.
pub trait ScrollSurface: Send + Sync {
    type Item: Clone + Send + Sync;

    /// Replace the strip's content with `track`, in order.
    fn mount(&self, track: &Track<Self::Item>);

    /// Boxes of the cards currently laid out, in track order.
    fn item_boxes(&self) -> Vec<ItemBox>;

    fn scroll_offset(&self) -> f64;

    /// Write the offset using the current scroll behavior.
    fn set_scroll_offset(&self, offset: f64);

    fn scroll_behavior(&self) -> ScrollBehavior;

    fn set_scroll_behavior(&self, behavior: ScrollBehavior);

    /// Scroll relative to the current offset.
    fn scroll_by(&self, delta: f64, behavior: ScrollBehavior);

    /// A future resolving when the next scroll motion comes to rest, if the
    /// surface can report that. `None` selects the timer fallback.
    ///
    /// Requested before the motion starts so the signal cannot be missed.
    fn scroll_end_signal(&self) -> Option<BoxFuture<'static, ()>> {
        None
    }

    /// One future per card image that has not finished loading yet.
    fn pending_images(&self) -> Vec<BoxFuture<'static, ImageLoad>> {
        Vec::new()
    }
}
