//! Deferred main queue.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use inkbar_ui::MainQueue;

type Task = Box<dyn FnOnce()>;

/// Queue that holds posted work until the test drains it.
///
/// Lets tests assert the synchronous part of an animated transition happened
/// before the scheduled part runs.
#[derive(Clone, Default)]
pub struct DeferredQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Runs every pending task in post order. Tasks posted while draining
    /// run in the same pass.
    pub fn drain(&self) {
        loop {
            let task = self.tasks.borrow_mut().pop_front();
            match task {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl MainQueue for DeferredQueue {
    fn post(&self, task: Task) {
        self.tasks.borrow_mut().push_back(task);
    }
}
