//! Infinite carousel engine
//!
//! A carousel owns a horizontally scrolling strip of fixed-width cards. In
//! [`WrapMode::Infinite`] the strip is tripled into a [`Track`]
//! (`[reversed clones] + [originals] + [clones]`) and the scroll offset is
//! kept inside the middle band by [`BandGeometry::normalize`], so paging in
//! either direction never reaches an edge.
//!
//! The module separates pure geometry (track, measurement, band math) from
//! the stateful [`CarouselController`], which talks to the host through
//! [`ScrollSurface`] and is driven by scroll, resize and frame callbacks.

pub mod band;
pub mod controller;
pub mod frame;
pub mod images;
pub mod measure;
pub mod pagination;
pub mod settle;
pub mod slider;
pub mod surface;
pub mod track;
pub mod tween;
pub mod types;

pub use band::{Band, BandGeometry};
pub use controller::{CarouselController, FrameReport, PendingMove};
pub use frame::FrameGate;
pub use images::{ImageSettlement, wait_for_images};
pub use measure::{ItemBox, measure_step_width};
pub use pagination::PaginationMirror;
pub use settle::{MotionSettle, SettleStrategy};
pub use slider::{
    Affordances, CardSlider, RowKind, SlideEvent, SliderError, SliderOptions,
};
pub use surface::{ImageLoad, ScrollSurface};
pub use track::{Track, TrackItem};
pub use tween::{Easing, ScrollTween};
pub use types::*;
