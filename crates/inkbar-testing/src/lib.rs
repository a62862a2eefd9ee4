//! Headless test doubles for exercising the input bar without a windowing
//! backend: a recording layout binding, a recording observer, a deferred
//! main queue, and a scriptable text measurer.

mod binding;
mod measurer;
mod observer;
mod queue;

pub use binding::{BindingCall, NullBinding, RecordingBinding};
pub use measurer::ScriptedMeasurer;
pub use observer::{ObserverEvent, RecordingObserver};
pub use queue::DeferredQueue;
