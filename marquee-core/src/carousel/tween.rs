//! Simple time-based tween for surfaces without native smooth scrolling

use std::time::Duration;
use tokio::time::Instant;

/// Easing curve applied to tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// Animates a scroll offset from `start` to `target`.
///
/// Hosts sample it once per frame; the sample that reaches the end returns
/// the exact target and deactivates the tween, which is the moment to fire a
/// scroll-end signal.
#[derive(Debug, Clone)]
pub struct ScrollTween {
    active: bool,
    start: f64,
    target: f64,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Default for ScrollTween {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration: Duration::from_millis(300),
            easing: Easing::EaseOut,
        }
    }
}

impl ScrollTween {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Begins a motion from `current` to `target`, replacing any running one.
    pub fn start(&mut self, current: f64, target: f64, now: Instant) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = now;
    }

    /// Returns `Some(next_offset)` while animating, `None` once inactive.
    pub fn sample(&mut self, now: Instant) -> Option<f64> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        let eased = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * eased)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}
