//! Text measurement contract.
//!
//! The input bar never measures text itself; it asks an injected
//! [`TextMeasurer`] how tall the content would be at a given width, as if
//! height were unbounded. Hosts plug in their real text engine; the
//! monospaced fallback keeps the component usable headless.

use inkbar_ui_layout::SizeMeasurement;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Height of a single line of text.
    pub line_height: f32,
    /// Number of visual lines after wrapping.
    pub line_count: usize,
}

impl TextMetrics {
    /// Degenerate metrics for measurements taken before the first layout
    /// pass (no usable width yet).
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
        line_height: 0.0,
        line_count: 0,
    };
}

pub trait TextMeasurer {
    /// Measures `text` wrapped at `available_width`, with unbounded height.
    ///
    /// Must have no side effects, and must tolerate being called before any
    /// layout pass: a non-positive width yields [`TextMetrics::ZERO`].
    fn measure(&self, text: &str, available_width: f32) -> TextMetrics;

    /// Natural height of `text` at `available_width`, floored to a whole
    /// display unit.
    fn natural_height(&self, text: &str, available_width: f32) -> SizeMeasurement {
        let metrics = self.measure(text, available_width);
        SizeMeasurement::floored(metrics.height, available_width)
    }
}

/// Fixed-advance text measurer with greedy character wrapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospacedTextMeasurer;

impl MonospacedTextMeasurer {
    const CHAR_WIDTH: f32 = 8.0;
    const LINE_HEIGHT: f32 = 20.0;
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, available_width: f32) -> TextMetrics {
        if available_width <= 0.0 {
            return TextMetrics::ZERO;
        }

        let chars_per_line = ((available_width / Self::CHAR_WIDTH).floor() as usize).max(1);

        let mut line_count = 0usize;
        let mut widest = 0usize;
        for line in text.split('\n') {
            let chars = line.chars().count();
            // An empty hard line still occupies one row.
            let rows = chars.div_ceil(chars_per_line).max(1);
            line_count += rows;
            widest = widest.max(chars.min(chars_per_line));
        }

        TextMetrics {
            width: widest as f32 * Self::CHAR_WIDTH,
            height: line_count as f32 * Self::LINE_HEIGHT,
            line_height: Self::LINE_HEIGHT,
            line_count,
        }
    }
}
