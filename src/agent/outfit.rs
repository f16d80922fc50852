//! Protective-loadout policy: what an agent is allowed to wear and drop

use crate::core::types::{DefId, ItemId};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// An agent's configured apparel policy
///
/// `disallowed` filters definitions out of automatic selection. `forced`
/// items were ordered worn by the player and may not be auto-removed;
/// `locked` items may not be removed at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutfitPolicy {
    disallowed: AHashSet<DefId>,
    forced: AHashSet<ItemId>,
    locked: AHashSet<ItemId>,
}

impl OutfitPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disallow(&mut self, def: DefId) {
        self.disallowed.insert(def);
    }

    pub fn force(&mut self, item: ItemId) {
        self.forced.insert(item);
    }

    pub fn lock(&mut self, item: ItemId) {
        self.locked.insert(item);
    }

    pub fn allows(&self, def: DefId) -> bool {
        !self.disallowed.contains(&def)
    }

    pub fn is_locked(&self, item: ItemId) -> bool {
        self.locked.contains(&item)
    }

    /// Whether automatic selection may strip this item to wear something else
    pub fn allowed_to_auto_remove(&self, item: ItemId) -> bool {
        !self.forced.contains(&item) && !self.locked.contains(&item)
    }
}
