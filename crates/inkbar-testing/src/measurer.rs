//! Scriptable text measurer.

use inkbar_foundation::{TextMeasurer, TextMetrics};

type HeightFn = Box<dyn Fn(&str, f32) -> f32>;

/// Measurer whose reported height is a function of the text, so scenario
/// tests can drive exact natural heights without a real text engine.
pub struct ScriptedMeasurer {
    height_fn: HeightFn,
    line_height: f32,
}

impl ScriptedMeasurer {
    /// Height depends on text and available width.
    pub fn new(height_fn: impl Fn(&str, f32) -> f32 + 'static) -> Self {
        Self {
            height_fn: Box::new(height_fn),
            line_height: 20.0,
        }
    }

    /// Height depends on the text alone.
    pub fn from_height_fn(height_fn: impl Fn(&str) -> f32 + 'static) -> Self {
        Self::new(move |text, _width| height_fn(text))
    }

    /// The text is the height: `"40"` measures 40 units tall. Convenient for
    /// step-by-step growth scenarios.
    pub fn text_is_height() -> Self {
        Self::from_height_fn(|text| text.trim().parse().unwrap_or(0.0))
    }
}

impl TextMeasurer for ScriptedMeasurer {
    fn measure(&self, text: &str, available_width: f32) -> TextMetrics {
        if available_width <= 0.0 {
            return TextMetrics::ZERO;
        }
        let height = (self.height_fn)(text, available_width);
        TextMetrics {
            width: available_width,
            height,
            line_height: self.line_height,
            line_count: ((height / self.line_height).ceil() as usize).max(1),
        }
    }
}
