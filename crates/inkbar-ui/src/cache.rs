//! Memoized intrinsic size with change detection.
//!
//! Intrinsic-size queries arrive potentially once per host layout pass while
//! recomputation needs a text-measurement pass, so the last result is
//! memoized and recomputed only on invalidating events. Change detection
//! against the last *notified* value is what keeps the observer free of
//! duplicate size notifications.

use crate::binding::LayoutChanges;
use inkbar_ui_layout::{IntrinsicSize, ThresholdState};

pub(crate) struct CachedState {
    intrinsic: IntrinsicSize,
    /// Last value reported as changed to the notification path. Unset until
    /// the first recompute.
    last_notified: Option<IntrinsicSize>,
    pub threshold: ThresholdState,
    /// Natural height from the last measurement, for the cheap
    /// did-anything-move check on content events.
    pub last_natural_height: f32,
    /// Last toggles pushed to the layout binding; application is skipped
    /// while they match, so the host only sees edges.
    pub applied: Option<LayoutChanges>,
}

impl CachedState {
    pub fn new(max_height: f32) -> Self {
        Self {
            intrinsic: IntrinsicSize::from_height(0.0),
            last_notified: None,
            threshold: ThresholdState::new(max_height),
            last_natural_height: 0.0,
            applied: None,
        }
    }

    /// The memoized size. O(1), no recomputation.
    pub fn current(&self) -> IntrinsicSize {
        self.intrinsic
    }

    /// Stores a freshly computed size. Returns true if it differs from the
    /// last notified value, in which case it becomes the notified value.
    pub fn store(&mut self, size: IntrinsicSize) -> bool {
        self.intrinsic = size;
        let changed = self.last_notified != Some(size);
        if changed {
            self.last_notified = Some(size);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_store_counts_as_changed() {
        let mut cache = CachedState::new(100.0);
        assert!(cache.store(IntrinsicSize::from_height(32.0)));
        assert_eq!(cache.current().height, 32.0);
    }

    #[test]
    fn storing_the_same_size_is_not_a_change() {
        let mut cache = CachedState::new(100.0);
        let size = IntrinsicSize::from_height(32.0);
        assert!(cache.store(size));
        assert!(!cache.store(size));
        assert!(!cache.store(size));
    }

    #[test]
    fn change_detection_is_against_the_notified_value() {
        let mut cache = CachedState::new(100.0);
        assert!(cache.store(IntrinsicSize::from_height(32.0)));
        assert!(cache.store(IntrinsicSize::from_height(42.0)));
        assert!(cache.store(IntrinsicSize::from_height(32.0)));
    }
}
