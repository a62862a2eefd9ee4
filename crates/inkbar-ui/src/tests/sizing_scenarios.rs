//! End-to-end sizing scenarios: growth to the cap, rotation, force-clamp,
//! and notification anti-chatter, driven through headless doubles.

use std::cell::RefCell;
use std::rc::Rc;

use inkbar_foundation::ContentState;
use inkbar_testing::{
    BindingCall, DeferredQueue, RecordingBinding, RecordingObserver, ScriptedMeasurer,
};
use inkbar_ui_layout::{DisplayMetrics, VerticalSizeClass};

use inkbar_ui::{InputBar, InputBarConfig, InputBarObserver};

struct Fixture {
    bar: InputBar,
    content: ContentState,
    binding: RecordingBinding,
    observer: Rc<RecordingObserver>,
    queue: DeferredQueue,
}

/// Bar over a 300-unit regular display (cap = 100), width 300, default
/// padding (6, 6), with a measurer that reads the natural height straight
/// out of the text.
fn fixture() -> Fixture {
    fixture_on(DisplayMetrics::new(300.0, VerticalSizeClass::Regular))
}

fn fixture_on(metrics: DisplayMetrics) -> Fixture {
    let content = ContentState::new("");
    let binding = RecordingBinding::new();
    let queue = DeferredQueue::new();
    let bar = InputBar::new(
        content.clone(),
        Box::new(ScriptedMeasurer::text_is_height()),
        Rc::new(RefCell::new(binding.clone())),
        Rc::new(queue.clone()),
        metrics,
        InputBarConfig::default(),
    );
    bar.set_layout_width(300.0);

    let observer = RecordingObserver::new();
    let observer_dyn: Rc<dyn InputBarObserver> = observer.clone();
    bar.set_observer(Rc::downgrade(&observer_dyn));

    // Scenarios assert over what happens after setup.
    binding.clear();
    Fixture {
        bar,
        content,
        binding,
        observer,
        queue,
    }
}

#[test]
fn grows_with_content_then_clamps_at_the_cap() {
    let f = fixture();

    for natural in (20..=90).step_by(10) {
        f.content.set_text(natural.to_string());
        assert!(!f.bar.is_clamped(), "natural {natural} is below the cap");
        assert_eq!(f.bar.intrinsic_size().height, natural as f32 + 12.0);
    }

    // No clamp transition yet, so the host saw no scroll/cap toggles (only
    // the send affordance flipping on).
    assert!(!f.binding.calls().iter().any(|call| matches!(
        call,
        BindingCall::ScrollEnabled(_) | BindingCall::HeightCap { .. }
    )));

    // Natural height reaches the cap: clamp flips, scroll turns on, and the
    // reported height pins at cap + padding.
    f.content.set_text("100");
    assert!(f.bar.is_clamped());
    assert_eq!(f.bar.intrinsic_size().height, 112.0);
    assert_eq!(f.binding.last_scroll_enabled(), Some(true));
    assert_eq!(f.binding.last_height_cap(), Some((100.0, true)));

    // Growing further changes nothing observable.
    f.binding.clear();
    f.observer.clear();
    f.content.set_text("140");
    assert_eq!(f.bar.intrinsic_size().height, 112.0);
    assert_eq!(f.binding.calls(), vec![]);
    assert_eq!(f.observer.sizes(), vec![]);
}

#[test]
fn size_notifications_track_every_growth_step() {
    let f = fixture();
    for natural in (20..=100).step_by(10) {
        f.content.set_text(natural.to_string());
    }
    let heights: Vec<f32> = f.observer.sizes().iter().map(|size| size.height).collect();
    assert_eq!(
        heights,
        vec![32.0, 42.0, 52.0, 62.0, 72.0, 82.0, 92.0, 102.0, 112.0]
    );
}

#[test]
fn rotation_to_compact_can_flip_the_clamp() {
    // 900-unit display: regular cap 300, compact cap 180. A natural height
    // between the two caps clamps only after rotation.
    let f = fixture_on(DisplayMetrics::new(900.0, VerticalSizeClass::Regular));
    f.content.set_text("240");
    assert!(!f.bar.is_clamped());
    assert_eq!(f.bar.intrinsic_size().height, 252.0);

    f.observer.clear();
    f.bar
        .display_context_changed(DisplayMetrics::new(900.0, VerticalSizeClass::Compact));
    assert!(f.bar.is_clamped());
    assert_eq!(f.bar.max_height(), 180.0);
    assert_eq!(f.bar.intrinsic_size().height, 192.0);

    // Exactly one size notification for the whole rotation.
    assert_eq!(f.observer.sizes().len(), 1);
    assert_eq!(f.observer.sizes()[0].height, 192.0);

    // Re-reporting the same context is quiet.
    f.observer.clear();
    f.bar
        .display_context_changed(DisplayMetrics::new(900.0, VerticalSizeClass::Compact));
    assert_eq!(f.observer.sizes(), vec![]);
}

#[test]
fn rotation_updates_the_applied_cap_even_without_a_clamp_transition() {
    // Already clamped in both orientations; the constraint constant still
    // has to follow the cap.
    let f = fixture_on(DisplayMetrics::new(900.0, VerticalSizeClass::Regular));
    f.content.set_text("500");
    assert!(f.bar.is_clamped());
    assert_eq!(f.binding.last_height_cap(), Some((300.0, true)));

    f.bar
        .display_context_changed(DisplayMetrics::new(900.0, VerticalSizeClass::Compact));
    assert!(f.bar.is_clamped());
    assert_eq!(f.binding.last_height_cap(), Some((180.0, true)));
}

#[test]
fn host_pinned_cap_survives_rotation_when_auto_tracking_is_off() {
    let f = fixture_on(DisplayMetrics::new(900.0, VerticalSizeClass::Regular));
    f.bar.set_auto_update_max_height(false);
    f.bar.set_max_height(150.0);
    assert_eq!(f.bar.max_height(), 150.0);

    f.bar
        .display_context_changed(DisplayMetrics::new(900.0, VerticalSizeClass::Compact));
    assert_eq!(f.bar.max_height(), 150.0, "pinned cap must be preserved");
}

#[test]
fn force_clamped_overrides_scroll_and_cap_below_the_threshold() {
    let f = fixture();
    f.content.set_text("40");
    assert!(!f.bar.is_clamped());

    f.bar.set_force_clamped(true, false);
    assert!(!f.bar.is_clamped(), "force never fakes a measurement clamp");
    assert!(f.bar.is_force_clamped());
    assert_eq!(f.binding.last_scroll_enabled(), Some(true));
    assert_eq!(f.binding.last_height_cap(), Some((100.0, true)));
    // Height is untouched: the override is constraint/scroll only.
    assert_eq!(f.bar.intrinsic_size().height, 52.0);

    // Content changes below the cap keep the forced toggles without churn.
    f.binding.clear();
    f.content.set_text("60");
    assert!(!f.binding.calls().iter().any(|call| matches!(
        call,
        BindingCall::ScrollEnabled(_) | BindingCall::HeightCap { .. }
    )));

    f.bar.set_force_clamped(false, false);
    assert_eq!(f.binding.last_scroll_enabled(), Some(false));
    assert_eq!(f.binding.last_height_cap(), Some((100.0, false)));
}

#[test]
fn animated_force_clamp_defers_the_visual_change() {
    let f = fixture();
    f.content.set_text("40");
    f.binding.clear();

    f.bar.set_force_clamped(true, true);

    // Synchronous part: deactivate, reactivate with the new flags, scroll.
    assert_eq!(
        f.binding.calls(),
        vec![
            BindingCall::HeightCap {
                cap: 100.0,
                active: false
            },
            BindingCall::HeightCap {
                cap: 100.0,
                active: true
            },
            BindingCall::ScrollEnabled(true),
        ]
    );
    assert_eq!(f.queue.pending(), 1, "visual change waits on the main queue");

    f.binding.clear();
    f.queue.drain();
    let calls = f.binding.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(
        calls[0],
        BindingCall::Animated { changes, .. }
            if changes.scroll_enabled && changes.cap_active && changes.cap == 100.0
    ));
}

#[test]
fn identical_content_events_notify_content_but_not_size() {
    let f = fixture();
    f.content.set_text("40");
    f.observer.clear();

    // Trailing whitespace changes the raw text but neither the trimmed
    // content nor the measured height.
    f.content.set_text("40 ");
    f.content.set_text("40  ");

    assert_eq!(f.observer.contents(), vec!["40", "40"]);
    assert_eq!(f.observer.sizes(), vec![]);
}

#[test]
fn repeated_invalidation_notifies_at_most_once() {
    let f = fixture();
    f.content.set_text("40");
    f.observer.clear();

    f.bar.invalidate_intrinsic_size();
    f.bar.invalidate_intrinsic_size();

    assert_eq!(f.bar.intrinsic_size().height, 52.0);
    assert_eq!(f.observer.sizes(), vec![]);
}

#[test]
fn observer_never_sees_consecutive_identical_sizes() {
    let f = fixture();
    for text in ["20", "30", "30 ", "20", "20 ", "100", "140", "100"] {
        f.content.set_text(text);
    }
    let sizes = f.observer.sizes();
    assert!(!sizes.is_empty());
    for pair in sizes.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}
