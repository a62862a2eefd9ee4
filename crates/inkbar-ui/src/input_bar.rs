//! The auto-resizing input bar component.
//!
//! `InputBar` reacts to three external event classes: content changes (via a
//! listener on its [`ContentState`]), display/orientation context changes,
//! and window attachment. Each one funnels into the same recompute step:
//! measure natural height, run the threshold decision, memoize the intrinsic
//! size, push toggles to the [`LayoutBinding`] only when they changed, and
//! notify the observer only when the reported size changed.
//!
//! # Thread Safety
//!
//! Like the rest of the component, `InputBar` uses `Rc<RefCell<...>>`
//! internally and must only be used from the main thread. `invalidate` and
//! measurement are synchronous; the one asynchronous path is the animated
//! transition in [`set_force_clamped`](InputBar::set_force_clamped), which
//! posts the visual change to the [`MainQueue`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use inkbar_animation::AnimationSpec;
use inkbar_foundation::{ContentState, ListenerId, SwipeDirection, TextMeasurer};
use inkbar_ui_layout::{
    decide, max_bar_height, DisplayMetrics, IntrinsicSize, Priority, SizeMeasurement,
    VerticalSizeClass, WindowInsets,
};

use crate::binding::{LayoutBinding, LayoutChanges};
use crate::cache::CachedState;
use crate::items::ItemRegistry;
use crate::observer::InputBarObserver;
use crate::queue::MainQueue;

/// Construction-time configuration.
#[derive(Clone, Copy, Debug)]
pub struct InputBarConfig {
    /// Fixed padding above the content surface, part of every reported
    /// intrinsic height.
    pub padding_top: f32,
    /// Fixed padding below the content surface.
    pub padding_bottom: f32,
    /// Track the display context: recompute the height cap on every
    /// orientation/trait change. Off means the host pins the cap itself.
    pub auto_update_max_height: bool,
    /// Derive the send affordance from trimmed-content emptiness. Off means
    /// the host drives [`InputBar::set_send_enabled`] manually.
    pub auto_manage_send_enabled: bool,
    /// Transition used by the animated force-clamp path.
    pub transition: AnimationSpec,
}

impl Default for InputBarConfig {
    fn default() -> Self {
        Self {
            padding_top: 6.0,
            padding_bottom: 6.0,
            auto_update_max_height: true,
            auto_manage_send_enabled: true,
            transition: AnimationSpec::default(),
        }
    }
}

struct BarInner {
    config: InputBarConfig,
    content: ContentState,
    measurer: Box<dyn TextMeasurer>,
    binding: Rc<RefCell<dyn LayoutBinding>>,
    queue: Rc<dyn MainQueue>,
    observer: Option<Weak<dyn InputBarObserver>>,
    cache: CachedState,
    items: ItemRegistry,
    /// Width from the host's last layout pass; 0 before the first one.
    layout_width: f32,
    size_class: VerticalSizeClass,
    /// The safe-inset adjustment happens once per window attachment cycle.
    inset_adjusted: bool,
    send_enabled: bool,
}

/// Auto-resizing chat input bar.
///
/// Grows and shrinks with its content up to a device-dependent maximum, then
/// clamps and scrolls internally. See the crate docs for the overall flow.
pub struct InputBar {
    inner: Rc<RefCell<BarInner>>,
    content_listener: ListenerId,
}

impl InputBar {
    pub fn new(
        content: ContentState,
        measurer: Box<dyn TextMeasurer>,
        binding: Rc<RefCell<dyn LayoutBinding>>,
        queue: Rc<dyn MainQueue>,
        metrics: DisplayMetrics,
        config: InputBarConfig,
    ) -> Self {
        let max_height = max_bar_height(metrics);
        let inner = Rc::new(RefCell::new(BarInner {
            config,
            content: content.clone(),
            measurer,
            binding,
            queue,
            observer: None,
            cache: CachedState::new(max_height),
            items: ItemRegistry::default(),
            layout_width: 0.0,
            size_class: metrics.vertical_size_class,
            inset_adjusted: false,
            send_enabled: false,
        }));

        // Initial computation so the cache is never empty; there is no
        // observer yet, so the changed flag goes nowhere.
        {
            let mut bar = inner.borrow_mut();
            let _ = Self::recompute(&mut bar);
            if bar.config.auto_manage_send_enabled {
                let enabled = !bar.content.is_blank();
                bar.send_enabled = enabled;
                bar.binding.borrow_mut().set_send_enabled(enabled);
            }
        }

        let inner_weak = Rc::downgrade(&inner);
        let content_listener = content.add_listener(move |text| {
            if let Some(inner) = inner_weak.upgrade() {
                Self::content_changed(&inner, text);
            }
        });

        Self {
            inner,
            content_listener,
        }
    }

    // ---- Host queries ------------------------------------------------

    /// The memoized intrinsic size. O(1); never triggers a measurement.
    pub fn intrinsic_size(&self) -> IntrinsicSize {
        self.inner.borrow().cache.current()
    }

    pub fn is_clamped(&self) -> bool {
        self.inner.borrow().cache.threshold.is_clamped
    }

    pub fn is_force_clamped(&self) -> bool {
        self.inner.borrow().cache.threshold.force_clamped
    }

    pub fn max_height(&self) -> f32 {
        self.inner.borrow().cache.threshold.max_height
    }

    pub fn is_send_enabled(&self) -> bool {
        self.inner.borrow().send_enabled
    }

    pub fn content(&self) -> ContentState {
        self.inner.borrow().content.clone()
    }

    // ---- Observer ----------------------------------------------------

    /// Registers the observer. Held weakly: dropping the host silently
    /// silences notifications.
    pub fn set_observer(&self, observer: Weak<dyn InputBarObserver>) {
        self.inner.borrow_mut().observer = Some(observer);
    }

    pub fn clear_observer(&self) {
        self.inner.borrow_mut().observer = None;
    }

    // ---- Invalidation entry points -------------------------------------

    /// Forces a recompute of the intrinsic size, notifying the observer if
    /// the result differs from the last notified value. Calling this twice
    /// with no intervening input change notifies at most once.
    pub fn invalidate_intrinsic_size(&self) {
        let changed = Self::recompute(&mut self.inner.borrow_mut());
        self.emit_size_changed(changed);
    }

    /// Host layout informs the bar of the width it was given. Natural height
    /// depends on it, so a new width invalidates.
    pub fn set_layout_width(&self, width: f32) {
        let changed = {
            let mut bar = self.inner.borrow_mut();
            if bar.layout_width == width {
                None
            } else {
                bar.layout_width = width;
                Self::recompute(&mut bar)
            }
        };
        self.emit_size_changed(changed);
    }

    /// Orientation or trait change. With auto tracking on, the height cap is
    /// recomputed from the new metrics and the size invalidated; with it
    /// off, a host-pinned cap is preserved and invalidation happens only if
    /// the vertical size class actually changed.
    pub fn display_context_changed(&self, metrics: DisplayMetrics) {
        let changed = {
            let mut bar = self.inner.borrow_mut();
            let class_changed = bar.size_class != metrics.vertical_size_class;
            bar.size_class = metrics.vertical_size_class;

            if bar.config.auto_update_max_height {
                let max = max_bar_height(metrics);
                if max != bar.cache.threshold.max_height {
                    debug!(
                        "input bar max height {} -> {}",
                        bar.cache.threshold.max_height, max
                    );
                    bar.cache.threshold.max_height = max;
                }
                Self::recompute(&mut bar)
            } else if class_changed {
                Self::recompute(&mut bar)
            } else {
                None
            }
        };
        self.emit_size_changed(changed);
    }

    /// One-time adjustment after the bar lands in a window: honor a nonzero
    /// bottom safe-inset with a supplementary soft constraint. Further calls
    /// are no-ops until the flag is reset by re-attachment.
    pub fn window_attached(&self, insets: WindowInsets) {
        let bar = &mut *self.inner.borrow_mut();
        if bar.inset_adjusted {
            return;
        }
        bar.inset_adjusted = true;
        if insets.bottom > 0.0 {
            bar.binding
                .borrow_mut()
                .set_soft_bottom_inset(insets.bottom, Priority::SOFT);
        }
    }

    // ---- Host-driven configuration -------------------------------------

    /// Pins the height cap to a host-chosen value and invalidates.
    pub fn set_max_height(&self, max_height: f32) {
        let changed = {
            let mut bar = self.inner.borrow_mut();
            bar.cache.threshold.max_height = max_height;
            Self::recompute(&mut bar)
        };
        self.emit_size_changed(changed);
    }

    pub fn set_auto_update_max_height(&self, enabled: bool) {
        self.inner.borrow_mut().config.auto_update_max_height = enabled;
    }

    pub fn set_auto_manage_send_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().config.auto_manage_send_enabled = enabled;
    }

    /// Manually toggles the send affordance. Meaningful when auto management
    /// is disabled; an auto-managed bar will overwrite this on the next
    /// content change.
    pub fn set_send_enabled(&self, enabled: bool) {
        let binding = {
            let mut bar = self.inner.borrow_mut();
            bar.send_enabled = enabled;
            bar.binding.clone()
        };
        binding.borrow_mut().set_send_enabled(enabled);
    }

    /// Pins or releases clamped mode independent of measurement.
    ///
    /// This is purely a scroll/constraint override: it never alters the
    /// natural or effective height. The animated path deactivates the cap
    /// synchronously, schedules the visual change on the main queue inside
    /// an animated transaction, then reactivates synchronously; callers must
    /// not assume the visual change has completed on return.
    pub fn set_force_clamped(&self, value: bool, animated: bool) {
        let (binding, queue, spec, changes) = {
            let mut bar = self.inner.borrow_mut();
            bar.cache.threshold.force_clamped = value;
            let threshold = bar.cache.threshold;
            let decision = decide(
                bar.cache.last_natural_height,
                threshold.max_height,
                threshold.is_clamped,
                value,
            );
            let changes = LayoutChanges {
                scroll_enabled: decision.scroll_enabled,
                cap: threshold.max_height,
                cap_active: decision.cap_active,
            };
            bar.cache.applied = Some(changes);
            (
                bar.binding.clone(),
                bar.queue.clone(),
                bar.config.transition,
                changes,
            )
        };

        if animated {
            binding.borrow_mut().set_height_cap(changes.cap, false);
            let binding_for_queue = binding.clone();
            queue.post(Box::new(move || {
                binding_for_queue.borrow_mut().apply_animated(spec, changes);
            }));
            binding
                .borrow_mut()
                .set_height_cap(changes.cap, changes.cap_active);
            binding.borrow_mut().set_scroll_enabled(changes.scroll_enabled);
        } else {
            let mut binding = binding.borrow_mut();
            binding.set_scroll_enabled(changes.scroll_enabled);
            binding.set_height_cap(changes.cap, changes.cap_active);
        }
    }

    // ---- Actions -------------------------------------------------------

    /// Host-invoked send action: forwards the current content.
    pub fn request_send(&self) {
        let (observer, text) = {
            let bar = self.inner.borrow();
            (Self::observer_of(&bar), bar.content.text())
        };
        if let Some(observer) = observer {
            observer.on_send_requested(&text);
        }
    }

    /// Swipe recognized on the content surface; forwarded to the observer.
    pub fn notify_swipe(&self, direction: SwipeDirection) {
        let observer = Self::observer_of(&self.inner.borrow());
        if let Some(observer) = observer {
            observer.on_swipe(direction);
        }
    }

    // ---- Plugin items ----------------------------------------------------

    /// Registers a plugin item. Re-registering an id replaces its action.
    pub fn add_item(&self, id: impl Into<String>, on_tap: impl Fn() + 'static) {
        self.inner
            .borrow_mut()
            .items
            .insert(id.into(), Rc::new(on_tap));
    }

    /// Removes a plugin item; returns false if it was never registered.
    pub fn remove_item(&self, id: &str) -> bool {
        self.inner.borrow_mut().items.remove(id)
    }

    /// Invokes an item's tap action. The action runs outside any internal
    /// borrow, so it may call back into the bar.
    pub fn activate_item(&self, id: &str) -> bool {
        let action = self.inner.borrow().items.action(id);
        match action {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }

    /// Registered item ids in insertion order.
    pub fn item_ids(&self) -> Vec<String> {
        self.inner.borrow().items.ids()
    }

    pub fn item_count(&self) -> usize {
        self.inner.borrow().items.len()
    }

    // ---- Internals -------------------------------------------------------

    /// Full recompute: measure, decide, memoize, apply binding toggles on
    /// change. Returns the new size if it differs from the last notified one.
    fn recompute(bar: &mut BarInner) -> Option<IntrinsicSize> {
        let text = bar.content.text();
        let measurement = bar.measurer.natural_height(&text, bar.layout_width);
        Self::recompute_with(bar, measurement)
    }

    /// Recompute from an existing measurement (content events measure once
    /// for the cheap check and reuse the result here).
    fn recompute_with(bar: &mut BarInner, measurement: SizeMeasurement) -> Option<IntrinsicSize> {
        let threshold = bar.cache.threshold;
        let decision = decide(
            measurement.natural_height,
            threshold.max_height,
            threshold.is_clamped,
            threshold.force_clamped,
        );

        if decision.is_transition {
            debug!(
                "input bar clamp {} -> {} (natural {}, max {})",
                threshold.is_clamped, decision.clamped, measurement.natural_height, threshold.max_height
            );
        }
        bar.cache.threshold.is_clamped = decision.clamped;
        bar.cache.last_natural_height = measurement.natural_height;

        // The decision's toggles are always computed; the host only hears
        // about edges.
        let changes = LayoutChanges {
            scroll_enabled: decision.scroll_enabled,
            cap: threshold.max_height,
            cap_active: decision.cap_active,
        };
        if bar.cache.applied != Some(changes) {
            let mut binding = bar.binding.borrow_mut();
            binding.set_scroll_enabled(changes.scroll_enabled);
            binding.set_height_cap(changes.cap, changes.cap_active);
            bar.cache.applied = Some(changes);
        }

        let size = IntrinsicSize::from_height(
            decision.effective_height + bar.config.padding_top + bar.config.padding_bottom,
        );
        let changed = bar.cache.store(size);
        trace!(
            "input bar recompute: natural {} effective {} -> height {} (changed: {})",
            measurement.natural_height,
            decision.effective_height,
            size.height,
            changed
        );
        changed.then_some(size)
    }

    /// Content listener: cheap natural-height check, send management, then
    /// the unconditional trimmed-content notification.
    fn content_changed(inner: &Rc<RefCell<BarInner>>, text: &str) {
        let (observer, changed, trimmed) = {
            let mut bar = inner.borrow_mut();

            let measurement = bar.measurer.natural_height(text, bar.layout_width);
            let changed = if measurement.natural_height != bar.cache.last_natural_height {
                Self::recompute_with(&mut bar, measurement)
            } else {
                None
            };

            let trimmed = text.trim().to_string();
            if bar.config.auto_manage_send_enabled {
                let enabled = !trimmed.is_empty();
                if enabled != bar.send_enabled {
                    bar.send_enabled = enabled;
                    bar.binding.borrow_mut().set_send_enabled(enabled);
                }
            }

            (Self::observer_of(&bar), changed, trimmed)
        };

        if let Some(observer) = observer {
            observer.on_content_changed(&trimmed);
            if let Some(size) = changed {
                observer.on_size_changed(size);
            }
        }
    }

    fn observer_of(bar: &BarInner) -> Option<Rc<dyn InputBarObserver>> {
        bar.observer.as_ref().and_then(Weak::upgrade)
    }

    fn emit_size_changed(&self, changed: Option<IntrinsicSize>) {
        let Some(size) = changed else {
            return;
        };
        let observer = Self::observer_of(&self.inner.borrow());
        if let Some(observer) = observer {
            observer.on_size_changed(size);
        }
    }
}

impl Drop for InputBar {
    fn drop(&mut self) {
        // Deterministic teardown of the content subscription.
        let content = self.inner.borrow().content.clone();
        content.remove_listener(self.content_listener);
    }
}
