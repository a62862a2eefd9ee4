//! Plugin item registry.
//!
//! Hosts attach auxiliary items (attachment pickers, emoji buttons) to the
//! bar by id. The registry keeps insertion order so the host can lay items
//! out deterministically.

use indexmap::IndexMap;
use std::rc::Rc;

type ItemAction = Rc<dyn Fn()>;

#[derive(Default)]
pub(crate) struct ItemRegistry {
    items: IndexMap<String, ItemAction>,
}

impl ItemRegistry {
    /// Registers an item, replacing any existing item with the same id.
    pub fn insert(&mut self, id: String, action: ItemAction) {
        self.items.insert(id, action);
    }

    /// Removes an item, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> bool {
        self.items.shift_remove(id).is_some()
    }

    /// Clones the action for `id` so it can be invoked outside any borrow.
    pub fn action(&self, id: &str) -> Option<ItemAction> {
        self.items.get(id).cloned()
    }

    pub fn ids(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
