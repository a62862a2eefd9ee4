//! Observer delegate for host integration.

use inkbar_foundation::SwipeDirection;
use inkbar_ui_layout::IntrinsicSize;

/// Delegate the host registers to hear about bar events.
///
/// At most one observer is registered at a time, held weakly: the host may
/// drop it without unregistering and every notification becomes a no-op.
/// All methods default to no-ops so hosts implement only what they need.
pub trait InputBarObserver {
    /// Fired on every content change, with the trimmed content.
    fn on_content_changed(&self, trimmed: &str) {
        let _ = trimmed;
    }

    /// Fired only when the computed intrinsic size differs from the last
    /// one delivered. Two consecutive identical notifications never happen.
    fn on_size_changed(&self, new_size: IntrinsicSize) {
        let _ = new_size;
    }

    /// Fired when the host invokes the send action.
    fn on_send_requested(&self, content: &str) {
        let _ = content;
    }

    /// Fired when a swipe is recognized on the content surface.
    fn on_swipe(&self, direction: SwipeDirection) {
        let _ = direction;
    }
}
