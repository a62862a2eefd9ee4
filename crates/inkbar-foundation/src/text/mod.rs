//! Text content state and measurement.

mod measure;
mod state;

pub use measure::{MonospacedTextMeasurer, TextMeasurer, TextMetrics};
pub use state::{ContentState, ListenerId};
