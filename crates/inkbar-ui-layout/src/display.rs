//! Display context inputs: size classes, metrics, insets, and the
//! device-dependent maximum bar height.

/// Vertical size class of the current orientation context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalSizeClass {
    /// Portrait-like: vertical space is plentiful.
    Regular,
    /// Landscape-like: vertical space is scarce.
    Compact,
}

/// Snapshot of the active display the bar is attached to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Total height of the display, in display units.
    pub height: f32,
    pub vertical_size_class: VerticalSizeClass,
}

impl DisplayMetrics {
    pub fn new(height: f32, vertical_size_class: VerticalSizeClass) -> Self {
        Self {
            height,
            vertical_size_class,
        }
    }
}

/// Maximum height the bar may grow to on the given display.
///
/// A third of the screen in vertically-regular contexts, a fifth in compact
/// ones, floored. The cap keeps the input surface from dominating the screen;
/// landscape tightens it further because vertical space is scarcer there.
pub fn max_bar_height(metrics: DisplayMetrics) -> f32 {
    match metrics.vertical_size_class {
        VerticalSizeClass::Regular => (metrics.height / 3.0).floor(),
        VerticalSizeClass::Compact => (metrics.height / 5.0).floor(),
    }
}

/// Window safe-area insets relevant to the bar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowInsets {
    /// Bottom safe-area inset (home indicator, navigation bar).
    pub bottom: f32,
}

impl WindowInsets {
    pub fn bottom(bottom: f32) -> Self {
        Self { bottom }
    }
}

/// Constraint priority for host layout systems that rank constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(pub u16);

impl Priority {
    /// Hard layout constraints the solver must satisfy.
    pub const REQUIRED: Self = Self(1000);
    /// Supplementary constraints that yield to the hard ones, e.g. the
    /// bottom safe-inset adjustment.
    pub const SOFT: Self = Self(250);
}
