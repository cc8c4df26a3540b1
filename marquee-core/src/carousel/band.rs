//! Band geometry and the wraparound projection that keeps the offset in the
//! real band.

/// One of the three equal thirds of a tripled track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Reversed clones before the originals.
    Leading,
    /// The originals.
    Real,
    /// Forward clones after the originals.
    Trailing,
}

/// Snaps smaller than this are skipped to avoid sub-pixel jitter.
pub const SNAP_TOLERANCE: f64 = 1.0;

/// Measured geometry of a tripled track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BandGeometry {
    /// Distance between the starts of adjacent cards; `0` when unmeasurable.
    pub step_width: f64,
    /// Cards per band, `N`.
    pub original_count: usize,
}

impl BandGeometry {
    pub fn new(step_width: f64, original_count: usize) -> Self {
        Self {
            step_width: step_width.max(0.0),
            original_count,
        }
    }

    /// Width of one band: `step_width * N`.
    #[inline]
    pub fn original_width(&self) -> f64 {
        self.step_width * self.original_count as f64
    }

    /// `false` when nothing has measurable width and paging must be disabled.
    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.original_width() > 0.0
    }

    /// Offset of the real band's first card.
    #[inline]
    pub fn real_start(&self) -> f64 {
        self.original_width()
    }

    /// Projects any offset onto the real band, `[W, 2W)`.
    ///
    /// The result differs from `offset` by an exact multiple of `W`. With
    /// `W == 0` the offset is returned unchanged.
    pub fn project(&self, offset: f64) -> f64 {
        let width = self.original_width();
        if width <= 0.0 {
            return offset;
        }
        let within = (offset - width).rem_euclid(width);
        // rem_euclid can round up to `width` for tiny negative inputs
        let within = if within >= width { 0.0 } else { within };
        width + within
    }

    /// Target to snap to, or `None` when `offset` is already within
    /// [`SNAP_TOLERANCE`] of its projection.
    pub fn normalize(&self, offset: f64) -> Option<f64> {
        if !self.is_measurable() {
            return None;
        }
        let target = self.project(offset);
        ((target - offset).abs() > SNAP_TOLERANCE).then_some(target)
    }

    /// Which band `offset` falls in; offsets past either end clamp to the
    /// outer bands.
    pub fn band_of(&self, offset: f64) -> Band {
        let width = self.original_width();
        if offset < width {
            Band::Leading
        } else if offset < 2.0 * width {
            Band::Real
        } else {
            Band::Trailing
        }
    }

    /// Fractional position inside the real band, measured from its start.
    ///
    /// Unbounded: offsets outside the real band give ratios outside
    /// `[0, 1)`, which round-trip through [`Self::offset_for_ratio`].
    pub fn position_ratio(&self, offset: f64) -> f64 {
        let width = self.original_width();
        let divisor = if width > 0.0 { width } else { 1.0 };
        (offset - width) / divisor
    }

    pub fn offset_for_ratio(&self, ratio: f64) -> f64 {
        let width = self.original_width();
        width + ratio * width
    }
}
