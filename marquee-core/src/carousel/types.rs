//! Shared types for the carousel module

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Paging direction requested by buttons, keys or pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// `-1.0` for [`Direction::Prev`], `+1.0` for [`Direction::Next`].
    pub const fn sign(self) -> f64 {
        match self {
            Direction::Prev => -1.0,
            Direction::Next => 1.0,
        }
    }

    pub const fn reverse(self) -> Self {
        match self {
            Direction::Prev => Direction::Next,
            Direction::Next => Direction::Prev,
        }
    }
}

/// Carousel paging and boundary behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Finite (clamped) carousel. No clones, no band normalization.
    Finite,
    /// Infinite wrap-around carousel built from a tripled track.
    #[default]
    Infinite,
}

impl WrapMode {
    pub const fn is_looping(self) -> bool {
        matches!(self, WrapMode::Infinite)
    }
}

/// How the surface animates offset writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    /// Jump immediately.
    Auto,
    #[default]
    Smooth,
}

/// Static configuration for a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    /// Items travelled per `advance` call.
    pub items_per_step: usize,
    pub wrap_mode: WrapMode,
    /// Used when the surface cannot report that a smooth scroll has ended.
    #[serde(with = "millis")]
    pub settle_fallback: Duration,
}

impl CarouselOptions {
    /// Default fallback matching a typical smooth-scroll duration.
    pub const DEFAULT_SETTLE_FALLBACK: Duration = Duration::from_millis(400);

    /// Standard poster rows page five cards at a time.
    pub const fn standard() -> Self {
        Self {
            items_per_step: 5,
            wrap_mode: WrapMode::Infinite,
            settle_fallback: Self::DEFAULT_SETTLE_FALLBACK,
        }
    }

    /// The ranked row uses wider cards and pages four at a time.
    pub const fn top_ten() -> Self {
        Self {
            items_per_step: 4,
            wrap_mode: WrapMode::Infinite,
            settle_fallback: Self::DEFAULT_SETTLE_FALLBACK,
        }
    }

    pub const fn with_wrap_mode(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }

    pub const fn with_items_per_step(mut self, items_per_step: usize) -> Self {
        self.items_per_step = items_per_step;
        self
    }

    pub const fn with_settle_fallback(mut self, fallback: Duration) -> Self {
        self.settle_fallback = fallback;
        self
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Result of an `advance` request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// The strip scrolled by `delta` and has settled.
    Moved { delta: f64 },
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Another move is still in flight.
    Animating,
    /// Measured step width is zero.
    ZeroStep,
}

pub(crate) mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_deserialize_with_defaults() {
        let options: CarouselOptions =
            serde_json::from_str(r#"{ "items_per_step": 4, "settle_fallback": 350 }"#)
                .expect("valid options");
        assert_eq!(options.items_per_step, 4);
        assert_eq!(options.wrap_mode, WrapMode::Infinite);
        assert_eq!(options.settle_fallback, Duration::from_millis(350));
    }

    #[test]
    fn direction_sign_and_reverse() {
        assert_eq!(Direction::Next.sign(), 1.0);
        assert_eq!(Direction::Prev.sign(), -1.0);
        assert_eq!(Direction::Next.reverse(), Direction::Prev);
    }
}
