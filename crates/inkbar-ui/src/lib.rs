//! Auto-resizing chat input bar component for Inkbar
//!
//! [`InputBar`] owns the intrinsic-size computation and layout-invalidation
//! engine: it measures its content through an injected
//! [`TextMeasurer`](inkbar_foundation::TextMeasurer), decides clamp mode
//! through the threshold policy in `inkbar-ui-layout`, memoizes the reported
//! size, and only notifies its observer when something observable changed.
//! Everything toolkit-specific sits behind the [`LayoutBinding`] seam.

mod binding;
mod cache;
mod input_bar;
mod items;
mod observer;
mod queue;

pub use binding::{LayoutBinding, LayoutChanges};
pub use input_bar::{InputBar, InputBarConfig};
pub use observer::InputBarObserver;
pub use queue::{InlineQueue, MainQueue};

#[cfg(test)]
mod tests;
