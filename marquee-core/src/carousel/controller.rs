//! CarouselController: owns the scroll model of one carousel widget.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, trace};

use super::band::BandGeometry;
use super::frame::FrameGate;
use super::images::wait_for_images;
use super::measure::measure_step_width;
use super::settle::{MotionSettle, SettleStrategy};
use super::surface::ScrollSurface;
use super::track::Track;
use super::types::{
    CarouselOptions, Direction, IgnoreReason, MoveOutcome, ScrollBehavior,
};

#[derive(Debug, Default)]
struct ControllerState {
    geometry: BandGeometry,
    is_animating: bool,
    scroll_check: FrameGate,
    resize: FrameGate,
}

/// What a call to [`CarouselController::run_frame`] did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    /// A pending resize was processed.
    pub resized: bool,
    /// Offset the strip was snapped to, if any.
    pub snapped: Option<f64>,
}

/// Scroll model of one carousel.
///
/// Created by [`CarouselController::setup`] once the track is mounted and
/// its images have settled. Hosts forward scroll and resize events to
/// [`handle_scroll`](Self::handle_scroll) and
/// [`handle_resize`](Self::handle_resize), call
/// [`run_frame`](Self::run_frame) once per animation frame, and page with
/// [`advance`](Self::advance).
pub struct CarouselController<S: ScrollSurface> {
    surface: Arc<S>,
    options: CarouselOptions,
    original_count: usize,
    state: Mutex<ControllerState>,
}

impl<S: ScrollSurface> CarouselController<S> {
    /// Builds the track, mounts it, waits for every card image to load or
    /// fail, measures, and parks the strip at the start of the real band.
    ///
    /// Returns `None` when `items` is empty.
    pub async fn setup(
        surface: Arc<S>,
        items: Vec<S::Item>,
        options: CarouselOptions,
    ) -> Option<Self> {
        let track = if options.wrap_mode.is_looping() {
            Track::build(items)
        } else {
            Track::flat(items)
        };
        let Some(track) = track else {
            debug!("carousel has no items; no controller created");
            return None;
        };

        surface.mount(&track);
        let images = wait_for_images(surface.pending_images()).await;
        debug!(
            loaded = images.loaded,
            errored = images.errored,
            "carousel images settled"
        );

        let controller = Self {
            surface,
            options,
            original_count: track.original_count(),
            state: Mutex::new(ControllerState::default()),
        };

        let geometry = controller.measure();
        controller.state.lock().geometry = geometry;
        if options.wrap_mode.is_looping() {
            controller.jump_to(geometry.real_start().round());
        }

        debug!(
            items = controller.original_count,
            step_width = geometry.step_width,
            original_width = geometry.original_width(),
            wrap_mode = ?options.wrap_mode,
            "carousel ready"
        );
        Some(controller)
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    /// Number of original (non-clone) items.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    pub fn geometry(&self) -> BandGeometry {
        self.state.lock().geometry
    }

    pub fn step_width(&self) -> f64 {
        self.geometry().step_width
    }

    pub fn original_width(&self) -> f64 {
        self.geometry().original_width()
    }

    pub fn is_animating(&self) -> bool {
        self.state.lock().is_animating
    }

    pub fn offset(&self) -> f64 {
        self.surface.scroll_offset()
    }

    /// Pages by `items_per_step` cards and waits for the motion to settle.
    ///
    /// Ignored while another move is in flight or while the measured step
    /// width is zero.
    pub async fn advance(&self, direction: Direction) -> MoveOutcome {
        match self.begin_move(direction) {
            Ok(pending) => pending.settle().await,
            Err(reason) => MoveOutcome::Ignored(reason),
        }
    }

    /// Starts a move without waiting for it.
    ///
    /// On success the strip is already scrolling and the returned
    /// [`PendingMove`] must be settled for normalization to run.
    pub fn begin_move(
        &self,
        direction: Direction,
    ) -> Result<PendingMove<'_, S>, IgnoreReason> {
        let delta = {
            let mut state = self.state.lock();
            if state.is_animating {
                trace!(?direction, "move ignored: animation in flight");
                return Err(IgnoreReason::Animating);
            }
            if state.geometry.step_width <= 0.0 {
                trace!(?direction, "move ignored: zero step width");
                return Err(IgnoreReason::ZeroStep);
            }
            state.is_animating = true;
            direction.sign()
                * self.options.items_per_step as f64
                * state.geometry.step_width
        };

        let settle =
            MotionSettle::detect(&*self.surface, self.options.settle_fallback);
        debug!(
            ?direction,
            delta,
            strategy = ?settle.strategy(),
            "carousel move started"
        );
        self.surface.scroll_by(delta, ScrollBehavior::Smooth);

        Ok(PendingMove {
            controller: self,
            settle: Some(settle),
            finished: false,
            direction,
            delta,
        })
    }

    /// Records a user scroll. Returns `true` when this event scheduled a
    /// normalization check for the next frame.
    pub fn handle_scroll(&self) -> bool {
        if !self.options.wrap_mode.is_looping() {
            return false;
        }
        let mut state = self.state.lock();
        if state.is_animating {
            return false;
        }
        state.scroll_check.request()
    }

    /// Records a viewport resize; processed on the next frame. Returns
    /// `true` when this event scheduled the re-measure.
    pub fn handle_resize(&self) -> bool {
        self.state.lock().resize.request()
    }

    /// Runs the work coalesced since the previous frame.
    pub fn run_frame(&self) -> FrameReport {
        let (resize, check) = {
            let mut state = self.state.lock();
            let check = state.scroll_check.take();
            if state.is_animating {
                // The move's own completion normalizes; a pending resize
                // stays queued until the first frame after it.
                return FrameReport::default();
            }
            (state.resize.take(), check)
        };

        let mut report = FrameReport::default();
        if resize {
            report.snapped = self.reanchor();
            report.resized = true;
        }
        if check && report.snapped.is_none() {
            report.snapped = self.normalize();
        }
        report
    }

    /// Snaps the offset into the real band when it has drifted into a clone
    /// band. Returns the new offset if a snap happened.
    pub fn normalize(&self) -> Option<f64> {
        if !self.options.wrap_mode.is_looping() {
            return None;
        }
        let geometry = {
            let state = self.state.lock();
            if state.is_animating {
                return None;
            }
            state.geometry
        };
        let offset = self.surface.scroll_offset();
        let target = geometry.normalize(offset)?;
        self.jump_to(target);
        trace!(from = offset, to = target, "carousel offset normalized");
        Some(target)
    }

    /// Re-measures and restores the same fractional position in the real
    /// band against the new geometry.
    fn reanchor(&self) -> Option<f64> {
        let before = self.geometry();
        let offset = self.surface.scroll_offset();
        let ratio = before.position_ratio(offset);

        let after = self.measure();
        self.state.lock().geometry = after;
        debug!(
            step_before = before.step_width,
            step_after = after.step_width,
            ratio,
            "carousel re-measured after resize"
        );

        if !self.options.wrap_mode.is_looping() || !after.is_measurable() {
            return None;
        }
        let target = after.offset_for_ratio(ratio).round();
        self.jump_to(target);
        Some(self.normalize().unwrap_or(target))
    }

    fn measure(&self) -> BandGeometry {
        let step_width = measure_step_width(&self.surface.item_boxes());
        BandGeometry::new(step_width, self.original_count)
    }

    /// Writes `offset` without animation, then restores the prior behavior.
    fn jump_to(&self, offset: f64) {
        let previous = self.surface.scroll_behavior();
        self.surface.set_scroll_behavior(ScrollBehavior::Auto);
        self.surface.set_scroll_offset(offset);
        self.surface.set_scroll_behavior(previous);
    }

    fn finish_move(&self) {
        self.state.lock().is_animating = false;
    }
}

impl<S: ScrollSurface> std::fmt::Debug for CarouselController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("CarouselController")
            .field("options", &self.options)
            .field("original_count", &self.original_count)
            .field("geometry", &state.geometry)
            .field("is_animating", &state.is_animating)
            .finish_non_exhaustive()
    }
}

/// A move in flight. Settle it to clear the animation flag and normalize.
///
/// Dropping it unsettled clears the flag without normalizing.
pub struct PendingMove<'a, S: ScrollSurface> {
    controller: &'a CarouselController<S>,
    settle: Option<MotionSettle>,
    finished: bool,
    direction: Direction,
    delta: f64,
}

impl<S: ScrollSurface> PendingMove<'_, S> {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub async fn settle(mut self) -> MoveOutcome {
        let strategy = match self.settle.take() {
            Some(settle) => settle.wait().await,
            None => SettleStrategy::Timeout(self.controller.options.settle_fallback),
        };
        self.controller.finish_move();
        self.finished = true;
        let snapped = self.controller.normalize();
        debug!(
            direction = ?self.direction,
            delta = self.delta,
            ?strategy,
            ?snapped,
            "carousel move settled"
        );
        MoveOutcome::Moved { delta: self.delta }
    }
}

impl<S: ScrollSurface> Drop for PendingMove<'_, S> {
    fn drop(&mut self) {
        if !self.finished {
            self.controller.finish_move();
        }
    }
}

impl<S: ScrollSurface> std::fmt::Debug for PendingMove<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingMove")
            .field("direction", &self.direction)
            .field("delta", &self.delta)
            .finish_non_exhaustive()
    }
}
