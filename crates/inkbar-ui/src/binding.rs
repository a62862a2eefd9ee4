//! Host-toolkit seam.
//!
//! The bar never touches constraint objects or scroll views directly; it
//! expresses every decision as a call on [`LayoutBinding`], which each target
//! toolkit implements natively. This is the only outward-facing piece of the
//! sizing engine.

use inkbar_animation::AnimationSpec;
use inkbar_ui_layout::Priority;

/// The toggles a threshold decision wants applied to the host, as one value
/// so application (and change detection against the previous application)
/// stays atomic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutChanges {
    /// Internal scrolling on the content surface.
    pub scroll_enabled: bool,
    /// Height cap the capping constraint should hold.
    pub cap: f32,
    /// Whether the capping constraint is active.
    pub cap_active: bool,
}

/// Capability interface the surrounding UI toolkit implements.
///
/// All operations are side effects on the host view system; none return
/// values. Implementations must be idempotent: the bar may re-apply the same
/// state after an animated transition.
pub trait LayoutBinding {
    /// Toggles internal scrolling on the content surface.
    fn set_scroll_enabled(&mut self, enabled: bool);

    /// Updates the height-capping constraint's constant and active flag.
    fn set_height_cap(&mut self, cap: f32, active: bool);

    /// Installs the supplementary bottom safe-inset constraint. Called at
    /// most once, and only with a nonzero inset.
    fn set_soft_bottom_inset(&mut self, inset: f32, priority: Priority);

    /// Enables or disables the send affordance.
    fn set_send_enabled(&mut self, enabled: bool);

    /// Applies `changes` inside an animated transaction driven by the host.
    ///
    /// The default implementation applies immediately, for hosts without an
    /// animation system.
    fn apply_animated(&mut self, spec: AnimationSpec, changes: LayoutChanges) {
        let _ = spec;
        self.set_scroll_enabled(changes.scroll_enabled);
        self.set_height_cap(changes.cap, changes.cap_active);
    }
}
