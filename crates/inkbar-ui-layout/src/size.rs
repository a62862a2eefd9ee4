//! Size value types used by the input bar sizing pipeline.

/// A single text measurement: the natural height the content needs at the
/// width it was measured against.
///
/// Natural height is always floored to a whole display unit. Fractional
/// heights oscillate between layout passes (a measurement of 57.9 rounded up
/// to 58 re-measures as 58.0 next pass), so round-down is the only stable
/// choice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeMeasurement {
    /// Content's required height at `width`, floored, never negative.
    pub natural_height: f32,
    /// The containing width the measurement was taken at. Natural height is
    /// meaningless without it.
    pub width: f32,
}

impl SizeMeasurement {
    /// Creates a measurement, flooring the raw height to a display-safe unit.
    pub fn floored(raw_height: f32, width: f32) -> Self {
        Self {
            natural_height: raw_height.max(0.0).floor(),
            width,
        }
    }
}

/// The size the input bar reports to its host layout system.
///
/// Width is always the [`IntrinsicSize::WIDTH_UNSPECIFIED`] sentinel: the bar
/// stretches to whatever width the host gives it and only the height carries
/// information.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntrinsicSize {
    pub width: f32,
    pub height: f32,
}

impl IntrinsicSize {
    /// Sentinel meaning "no preference" on the width axis.
    pub const WIDTH_UNSPECIFIED: f32 = -1.0;

    /// An intrinsic size with unspecified width and the given height.
    pub fn from_height(height: f32) -> Self {
        Self {
            width: Self::WIDTH_UNSPECIFIED,
            height,
        }
    }

    /// Returns true if the width axis carries no preference.
    #[inline]
    pub fn is_width_unspecified(&self) -> bool {
        self.width == Self::WIDTH_UNSPECIFIED
    }
}
