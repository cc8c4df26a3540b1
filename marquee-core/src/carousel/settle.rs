//! "Motion settled" detection for programmatic scrolls.

use futures::future::BoxFuture;
use std::time::Duration;

use super::surface::ScrollSurface;

/// Which backing strategy a [`MotionSettle`] ended up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleStrategy {
    /// The surface reported the end of the scroll.
    ScrollEnd,
    /// Fixed delay; may resolve before a slow animation actually finishes.
    Timeout(Duration),
}

/// Awaitable end of one scroll motion.
///
/// Created before the motion starts, awaited after. Callers do not need to
/// know which strategy backs it. The fallback timer is always armed, so a
/// scroll-end signal that never fires (no motion happened, the strip was
/// already at its edge) still settles.
pub struct MotionSettle {
    fallback: Duration,
    signal: Option<BoxFuture<'static, ()>>,
}

impl MotionSettle {
    /// Uses the surface's scroll-end signal when it has one, bounded by
    /// `fallback`.
    pub fn detect<S>(surface: &S, fallback: Duration) -> Self
    where
        S: ScrollSurface + ?Sized,
    {
        Self {
            fallback,
            signal: surface.scroll_end_signal(),
        }
    }

    /// Timer only.
    pub fn timeout(fallback: Duration) -> Self {
        Self {
            fallback,
            signal: None,
        }
    }

    /// The strategy expected to finish the wait.
    pub fn strategy(&self) -> SettleStrategy {
        match self.signal {
            Some(_) => SettleStrategy::ScrollEnd,
            None => SettleStrategy::Timeout(self.fallback),
        }
    }

    /// Resolves with the strategy that actually finished the wait.
    pub async fn wait(self) -> SettleStrategy {
        let timer = tokio::time::sleep(self.fallback);
        match self.signal {
            Some(signal) => tokio::select! {
                () = signal => SettleStrategy::ScrollEnd,
                () = timer => SettleStrategy::Timeout(self.fallback),
            },
            None => {
                timer.await;
                SettleStrategy::Timeout(self.fallback)
            }
        }
    }
}

impl std::fmt::Debug for MotionSettle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionSettle")
            .field("strategy", &self.strategy())
            .finish_non_exhaustive()
    }
}
