//! In-memory scroll surface that lays cards out on a fixed grid.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio::time::Instant;

use marquee_core::carousel::{
    Easing, ImageLoad, ItemBox, ScrollBehavior, ScrollSurface, ScrollTween,
    Track, TrackItem,
};

/// One card image that finishes after `delay`.
#[derive(Debug, Clone, Copy)]
pub struct ImageSpec {
    pub delay: Duration,
    pub load: ImageLoad,
}

impl ImageSpec {
    pub fn loaded(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
            load: ImageLoad::Loaded,
        }
    }

    pub fn errored(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
            load: ImageLoad::Errored,
        }
    }
}

#[derive(Debug)]
struct Inner {
    mounted: Vec<TrackItem<u32>>,
    step: f64,
    offset: f64,
    behavior: ScrollBehavior,
    /// Behavior in effect for each direct offset write.
    writes: Vec<(f64, ScrollBehavior)>,
    scroll_by_calls: Vec<f64>,
    tween: Option<ScrollTween>,
    /// Largest reachable offset; `None` scrolls without bounds.
    max_offset: Option<f64>,
    scroll_end: Option<oneshot::Sender<()>>,
    images: Vec<ImageSpec>,
}

/// Cards sit at `left = index * step`. Smooth scrolls land instantly unless
/// the surface animates them with a tween, in which case the test drives
/// frames through [`FakeSurface::tick`].
#[derive(Debug)]
pub struct FakeSurface {
    inner: Mutex<Inner>,
    reports_scroll_end: bool,
}

impl FakeSurface {
    pub fn new(step: f64) -> Self {
        Self {
            inner: Mutex::new(Inner {
                mounted: Vec::new(),
                step,
                offset: 0.0,
                behavior: ScrollBehavior::Smooth,
                writes: Vec::new(),
                scroll_by_calls: Vec::new(),
                tween: None,
                max_offset: None,
                scroll_end: None,
                images: Vec::new(),
            }),
            reports_scroll_end: false,
        }
    }

    /// Animates smooth scrolls over `duration` and reports scroll end.
    pub fn animated(step: f64, duration: Duration) -> Self {
        let surface = Self {
            reports_scroll_end: true,
            ..Self::new(step)
        };
        surface.inner.lock().tween =
            Some(ScrollTween::new(duration, Easing::EaseInOut));
        surface
    }

    /// Lands smooth scrolls instantly, clamped to `[0, max_offset]`, and
    /// reports scroll end only when the offset actually changed.
    pub fn clamped(step: f64, max_offset: f64) -> Self {
        let surface = Self {
            reports_scroll_end: true,
            ..Self::new(step)
        };
        surface.inner.lock().max_offset = Some(max_offset);
        surface
    }

    pub fn with_images(self, images: Vec<ImageSpec>) -> Self {
        self.inner.lock().images = images;
        self
    }

    /// Relayout at a new card step, as a viewport resize would.
    pub fn set_step(&self, step: f64) {
        self.inner.lock().step = step;
    }

    /// Simulates the user dragging the strip.
    pub fn user_scroll_to(&self, offset: f64) {
        self.inner.lock().offset = offset;
    }

    pub fn mounted(&self) -> Vec<TrackItem<u32>> {
        self.inner.lock().mounted.clone()
    }

    pub fn writes(&self) -> Vec<(f64, ScrollBehavior)> {
        self.inner.lock().writes.clone()
    }

    pub fn scroll_by_calls(&self) -> Vec<f64> {
        self.inner.lock().scroll_by_calls.clone()
    }

    pub fn is_scrolling(&self) -> bool {
        self.inner
            .lock()
            .tween
            .as_ref()
            .is_some_and(ScrollTween::is_active)
    }

    /// Advances the running tween to `now`. Returns true on the frame the
    /// motion ends.
    pub fn tick(&self, now: Instant) -> bool {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let Some(tween) = inner.tween.as_mut() else {
            return false;
        };
        let Some(offset) = tween.sample(now) else {
            return false;
        };
        let finished = !tween.is_active();
        inner.offset = offset;
        if finished && let Some(tx) = inner.scroll_end.take() {
            let _ = tx.send(());
        }
        finished
    }
}

impl ScrollSurface for FakeSurface {
    type Item = u32;

    fn mount(&self, track: &Track<u32>) {
        self.inner.lock().mounted = track.items().to_vec();
    }

    fn item_boxes(&self) -> Vec<ItemBox> {
        let inner = self.inner.lock();
        (0..inner.mounted.len())
            .map(|i| ItemBox::new(i as f64 * inner.step, inner.step))
            .collect()
    }

    fn scroll_offset(&self) -> f64 {
        self.inner.lock().offset
    }

    fn set_scroll_offset(&self, offset: f64) {
        let mut inner = self.inner.lock();
        let behavior = inner.behavior;
        inner.writes.push((offset, behavior));
        inner.offset = offset;
    }

    fn scroll_behavior(&self) -> ScrollBehavior {
        self.inner.lock().behavior
    }

    fn set_scroll_behavior(&self, behavior: ScrollBehavior) {
        self.inner.lock().behavior = behavior;
    }

    fn scroll_by(&self, delta: f64, behavior: ScrollBehavior) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        inner.scroll_by_calls.push(delta);
        let current = inner.offset;
        match (behavior, inner.tween.as_mut()) {
            (ScrollBehavior::Smooth, Some(tween)) => {
                tween.start(current, current + delta, Instant::now());
            }
            _ => {
                let target = match inner.max_offset {
                    Some(max) => (current + delta).clamp(0.0, max),
                    None => current + delta,
                };
                inner.offset = target;
                if target != current
                    && let Some(tx) = inner.scroll_end.take()
                {
                    let _ = tx.send(());
                }
            }
        }
    }

    fn scroll_end_signal(&self) -> Option<BoxFuture<'static, ()>> {
        if !self.reports_scroll_end {
            return None;
        }
        let (tx, rx) = oneshot::channel();
        self.inner.lock().scroll_end = Some(tx);
        Some(rx.map(|_| ()).boxed())
    }

    fn pending_images(&self) -> Vec<BoxFuture<'static, ImageLoad>> {
        self.inner
            .lock()
            .images
            .iter()
            .map(|spec| {
                let spec = *spec;
                async move {
                    tokio::time::sleep(spec.delay).await;
                    spec.load
                }
                .boxed()
            })
            .collect()
    }
}
