//! Step-width measurement from laid-out item boxes

/// On-axis box of a laid-out card, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemBox {
    /// Left edge relative to the surface.
    pub left: f64,
    pub width: f64,
    pub margin_left: f64,
    pub margin_right: f64,
}

impl ItemBox {
    pub fn new(left: f64, width: f64) -> Self {
        Self {
            left,
            width,
            ..Self::default()
        }
    }

    pub fn with_margins(mut self, left: f64, right: f64) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self
    }

    /// Width plus both margins.
    pub fn footprint(&self) -> f64 {
        self.width + self.margin_left + self.margin_right
    }
}

/// Distance from the start of one card to the start of the next, including
/// spacing, rounded to whole pixels.
///
/// With a single card its footprint is used instead; with none, `0`.
pub fn measure_step_width(boxes: &[ItemBox]) -> f64 {
    let step = match boxes {
        [] => 0.0,
        [only] => only.footprint(),
        [first, second, ..] => second.left - first.left,
    };
    step.round().max(0.0)
}
