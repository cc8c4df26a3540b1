//! Card slider: a carousel row with prev/next buttons and page dots.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use super::controller::CarouselController;
use super::pagination::PaginationMirror;
use super::surface::ScrollSurface;
use super::types::{CarouselOptions, Direction, MoveOutcome};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SliderError {
    #[error("carousel row has no items")]
    EmptyTrack,
}

/// Kind of row a slider is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowKind {
    #[default]
    Standard,
    /// Ranked row with oversized cards.
    TopTen,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderOptions {
    pub carousel: CarouselOptions,
    /// Cards represented by one pagination dot.
    pub items_per_page: usize,
    pub pagination: bool,
}

impl SliderOptions {
    pub const fn standard() -> Self {
        Self {
            carousel: CarouselOptions::standard(),
            items_per_page: 5,
            pagination: true,
        }
    }

    pub const fn top_ten() -> Self {
        Self {
            carousel: CarouselOptions::top_ten(),
            items_per_page: 4,
            pagination: true,
        }
    }

    /// Picks the preset for the row the slider is mounted on.
    pub const fn for_row(kind: RowKind) -> Self {
        match kind {
            RowKind::Standard => Self::standard(),
            RowKind::TopTen => Self::top_ten(),
        }
    }
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Optional chrome around the row. A missing piece silently disables the
/// matching feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub prev_button: bool,
    pub next_button: bool,
    pub indicator: bool,
}

impl Affordances {
    pub const fn all() -> Self {
        Self {
            prev_button: true,
            next_button: true,
            indicator: true,
        }
    }

    fn has_button(&self, direction: Direction) -> bool {
        match direction {
            Direction::Prev => self.prev_button,
            Direction::Next => self.next_button,
        }
    }
}

impl Default for Affordances {
    fn default() -> Self {
        Self::all()
    }
}

/// Emitted for every slide the carousel accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideEvent {
    pub direction: Direction,
    /// Page after the slide, when pagination is enabled.
    pub page: Option<usize>,
    pub outcome: MoveOutcome,
}

pub struct CardSlider<S: ScrollSurface> {
    controller: CarouselController<S>,
    pagination: Option<PaginationMirror>,
    affordances: Affordances,
    options: SliderOptions,
}

impl<S: ScrollSurface> CardSlider<S> {
    pub async fn init(
        surface: Arc<S>,
        items: Vec<S::Item>,
        options: SliderOptions,
        affordances: Affordances,
    ) -> Result<Self, SliderError> {
        let controller =
            CarouselController::setup(surface, items, options.carousel)
                .await
                .ok_or(SliderError::EmptyTrack)?;

        let pagination = options.pagination.then(|| {
            PaginationMirror::new(
                controller.original_count(),
                options.items_per_page,
            )
        });

        info!(
            items = controller.original_count(),
            pages = pagination.map(|p| p.total_pages()),
            "card slider initialized"
        );

        Ok(Self {
            controller,
            pagination,
            affordances,
            options,
        })
    }

    pub fn controller(&self) -> &CarouselController<S> {
        &self.controller
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn current_page(&self) -> usize {
        self.pagination.map_or(0, |p| p.current_page())
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.map_or(0, |p| p.total_pages())
    }

    /// Indicator dots, empty when the row has no indicator.
    pub fn dots(&self) -> Vec<bool> {
        match (self.affordances.indicator, self.pagination) {
            (true, Some(pages)) => pages.dots(),
            _ => Vec::new(),
        }
    }

    /// Slides one step. The page only changes when the carousel accepts the
    /// move; a rejected move returns `None`.
    pub async fn slide(&mut self, direction: Direction) -> Option<SlideEvent> {
        let pending = match self.controller.begin_move(direction) {
            Ok(pending) => pending,
            Err(reason) => {
                debug!(?direction, ?reason, "slide rejected");
                return None;
            }
        };
        let page = self.pagination.as_mut().map(|p| p.advance(direction));
        let outcome = pending.settle().await;
        Some(SlideEvent {
            direction,
            page,
            outcome,
        })
    }

    /// Button entry point. Ignored when the row has no such button.
    pub async fn press(&mut self, direction: Direction) -> Option<SlideEvent> {
        if !self.affordances.has_button(direction) {
            return None;
        }
        self.slide(direction).await
    }

    /// Slides one page at a time until `page` is current.
    ///
    /// Stops early if a slide is rejected. Returns the slides performed.
    pub async fn go_to_page(&mut self, page: usize) -> Vec<SlideEvent> {
        let Some((direction, steps)) =
            self.pagination.and_then(|p| p.plan_jump(page))
        else {
            return Vec::new();
        };
        let mut events = Vec::with_capacity(steps);
        for _ in 0..steps {
            match self.slide(direction).await {
                Some(event) => events.push(event),
                None => break,
            }
        }
        events
    }

    /// Tears the slider down and hands the surface back.
    pub fn destroy(self) -> Arc<S> {
        debug!("card slider destroyed");
        Arc::clone(self.controller.surface())
    }
}

impl<S: ScrollSurface> std::fmt::Debug for CardSlider<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardSlider")
            .field("controller", &self.controller)
            .field("pagination", &self.pagination)
            .field("affordances", &self.affordances)
            .finish_non_exhaustive()
    }
}
