//! Observable state holder for the input bar's text content.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

type ChangeListener = Box<dyn Fn(&str)>;

/// Handle returned by [`ContentState::add_listener`], used to remove the
/// listener again. Removal is deterministic teardown: components register at
/// construction and remove in `Drop`, so nothing leaks past the component's
/// lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(usize);

struct ContentStateInner {
    text: String,
    /// Listener slots; removal leaves a tombstone so ids stay stable.
    listeners: SmallVec<[Option<ChangeListener>; 2]>,
}

/// Observable state holder for text content.
///
/// This is the single source of truth for what the user has typed. Edits go
/// through [`set_text`](Self::set_text); registered listeners are notified
/// after every actual change (setting identical text is a no-op).
///
/// # Thread Safety
///
/// `ContentState` uses `Rc<RefCell<...>>` internally and is not thread-safe.
/// It should only be used from the main thread.
#[derive(Clone)]
pub struct ContentState {
    inner: Rc<RefCell<ContentStateInner>>,
}

impl std::fmt::Debug for ContentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentState")
            .field("text", &self.inner.borrow().text)
            .finish()
    }
}

impl ContentState {
    /// Creates a new content state with the given initial text.
    pub fn new(initial_text: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ContentStateInner {
                text: initial_text.into(),
                listeners: SmallVec::new(),
            })),
        }
    }

    /// Returns the current text content.
    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    /// Returns the content with leading/trailing whitespace removed.
    pub fn trimmed(&self) -> String {
        self.inner.borrow().text.trim().to_string()
    }

    /// Returns true if the trimmed content is empty.
    pub fn is_blank(&self) -> bool {
        self.inner.borrow().text.trim().is_empty()
    }

    /// Replaces the text content and notifies listeners if it changed.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.text == text {
                return;
            }
            log::trace!("content changed: {} -> {} bytes", inner.text.len(), text.len());
            inner.text = text;
        }
        self.notify();
    }

    /// Adds a listener called after every content change.
    pub fn add_listener(&self, listener: impl Fn(&str) + 'static) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.listeners.len());
        inner.listeners.push(Some(Box::new(listener)));
        id
    }

    /// Removes a previously added listener. Removing twice is a no-op.
    pub fn remove_listener(&self, id: ListenerId) {
        let mut inner = self.inner.borrow_mut();
        if let Some(slot) = inner.listeners.get_mut(id.0) {
            *slot = None;
        }
    }

    // Listeners may read state, so each iteration takes a fresh immutable
    // borrow instead of holding one across all calls.
    fn notify(&self) {
        let text = self.inner.borrow().text.clone();
        let listener_count = self.inner.borrow().listeners.len();
        for i in 0..listener_count {
            let inner = self.inner.borrow();
            if let Some(Some(listener)) = inner.listeners.get(i) {
                listener(&text);
            }
        }
    }
}

impl Default for ContentState {
    fn default() -> Self {
        Self::new("")
    }
}

impl PartialEq for ContentState {
    fn eq(&self, other: &Self) -> bool {
        // Pointer identity: same state instance.
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
