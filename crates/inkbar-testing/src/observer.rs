//! Recording observer.

use std::cell::RefCell;
use std::rc::Rc;

use inkbar_foundation::SwipeDirection;
use inkbar_ui::InputBarObserver;
use inkbar_ui_layout::IntrinsicSize;

#[derive(Clone, Debug, PartialEq)]
pub enum ObserverEvent {
    ContentChanged(String),
    SizeChanged(IntrinsicSize),
    SendRequested(String),
    Swipe(SwipeDirection),
}

/// Observer that collects every delegate callback.
///
/// Tests hold it in an `Rc` (the bar only keeps a `Weak`) and assert over
/// the collected events.
#[derive(Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<ObserverEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn events(&self) -> Vec<ObserverEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// All size notifications, in delivery order.
    pub fn sizes(&self) -> Vec<IntrinsicSize> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ObserverEvent::SizeChanged(size) => Some(*size),
                _ => None,
            })
            .collect()
    }

    /// All trimmed-content notifications, in delivery order.
    pub fn contents(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ObserverEvent::ContentChanged(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl InputBarObserver for RecordingObserver {
    fn on_content_changed(&self, trimmed: &str) {
        self.events
            .borrow_mut()
            .push(ObserverEvent::ContentChanged(trimmed.to_string()));
    }

    fn on_size_changed(&self, new_size: IntrinsicSize) {
        self.events
            .borrow_mut()
            .push(ObserverEvent::SizeChanged(new_size));
    }

    fn on_send_requested(&self, content: &str) {
        self.events
            .borrow_mut()
            .push(ObserverEvent::SendRequested(content.to_string()));
    }

    fn on_swipe(&self, direction: SwipeDirection) {
        self.events.borrow_mut().push(ObserverEvent::Swipe(direction));
    }
}
