//! Content state, text measurement, and gesture types for Inkbar

mod gestures;
pub mod text;

pub use gestures::SwipeDirection;
pub use text::{ContentState, ListenerId, MonospacedTextMeasurer, TextMeasurer, TextMetrics};
