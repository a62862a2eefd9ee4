//! Recording layout binding.

use std::cell::RefCell;
use std::rc::Rc;

use inkbar_animation::AnimationSpec;
use inkbar_ui::{LayoutBinding, LayoutChanges};
use inkbar_ui_layout::Priority;

/// Every call the component pushed to the host, in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BindingCall {
    ScrollEnabled(bool),
    HeightCap { cap: f32, active: bool },
    SoftBottomInset { inset: f32, priority: Priority },
    SendEnabled(bool),
    Animated { spec: AnimationSpec, changes: LayoutChanges },
}

/// Layout binding that records every call for later assertions.
///
/// Clones share the same call log, so tests keep one handle and hand a clone
/// to the bar.
#[derive(Clone, Default)]
pub struct RecordingBinding {
    calls: Rc<RefCell<Vec<BindingCall>>>,
}

impl RecordingBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded calls.
    pub fn calls(&self) -> Vec<BindingCall> {
        self.calls.borrow().clone()
    }

    /// Clears the log, so a test can assert only over the calls a specific
    /// step produced.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// The most recent scroll-enabled value pushed, if any.
    pub fn last_scroll_enabled(&self) -> Option<bool> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            BindingCall::ScrollEnabled(enabled) => Some(*enabled),
            _ => None,
        })
    }

    /// The most recent height-cap application, if any.
    pub fn last_height_cap(&self) -> Option<(f32, bool)> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            BindingCall::HeightCap { cap, active } => Some((*cap, *active)),
            _ => None,
        })
    }

    /// The most recent send-enabled value pushed, if any.
    pub fn last_send_enabled(&self) -> Option<bool> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            BindingCall::SendEnabled(enabled) => Some(*enabled),
            _ => None,
        })
    }
}

impl LayoutBinding for RecordingBinding {
    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.calls.borrow_mut().push(BindingCall::ScrollEnabled(enabled));
    }

    fn set_height_cap(&mut self, cap: f32, active: bool) {
        self.calls
            .borrow_mut()
            .push(BindingCall::HeightCap { cap, active });
    }

    fn set_soft_bottom_inset(&mut self, inset: f32, priority: Priority) {
        self.calls
            .borrow_mut()
            .push(BindingCall::SoftBottomInset { inset, priority });
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.calls.borrow_mut().push(BindingCall::SendEnabled(enabled));
    }

    fn apply_animated(&mut self, spec: AnimationSpec, changes: LayoutChanges) {
        self.calls
            .borrow_mut()
            .push(BindingCall::Animated { spec, changes });
    }
}

/// Layout binding that drops everything. For benches and tests that only
/// care about the observer side.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullBinding;

impl LayoutBinding for NullBinding {
    fn set_scroll_enabled(&mut self, _enabled: bool) {}
    fn set_height_cap(&mut self, _cap: f32, _active: bool) {}
    fn set_soft_bottom_inset(&mut self, _inset: f32, _priority: Priority) {}
    fn set_send_enabled(&mut self, _enabled: bool) {}
}
