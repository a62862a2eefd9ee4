//! Main-queue scheduling seam for the animated transition path.

/// Posts work to run later on the main event queue.
///
/// The bar uses this for exactly one thing: scheduling the visual part of an
/// animated constraint transition after the synchronous deactivate step.
/// Platforms hand in their real main-queue; tests use a deferred queue to
/// assert ordering.
pub trait MainQueue {
    fn post(&self, task: Box<dyn FnOnce()>);
}

/// Runs posted work immediately.
///
/// Degenerate queue for hosts without an event loop (and for benches). With
/// this queue the "asynchronous" animated apply completes before
/// `set_force_clamped` returns, which callers must not rely on in general.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineQueue;

impl MainQueue for InlineQueue {
    fn post(&self, task: Box<dyn FnOnce()>) {
        task();
    }
}
