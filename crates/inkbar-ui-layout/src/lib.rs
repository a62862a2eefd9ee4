//! Sizing contracts & clamp policies for Inkbar

mod display;
mod size;
mod threshold;

pub use display::*;
pub use size::*;
pub use threshold::*;

pub mod prelude {
    pub use crate::display::{DisplayMetrics, VerticalSizeClass, WindowInsets};
    pub use crate::size::{IntrinsicSize, SizeMeasurement};
    pub use crate::threshold::{decide, ThresholdDecision, ThresholdState};
}
