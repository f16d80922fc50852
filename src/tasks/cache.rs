//! Bounded task -> item decision cache

use crate::core::config::config;
use crate::core::types::{ItemId, TaskId};
use ahash::AHashMap;
use std::collections::VecDeque;

/// Remembers which item was chosen for a task, so later steps reuse the
/// decision instead of re-searching
///
/// Bounded: at capacity the oldest surviving entry is dropped. The host is
/// expected to call `forget` when a task completes or is cancelled, which
/// keeps the population at one entry per in-flight task; the cap is the
/// backstop for hosts that never do.
#[derive(Debug)]
pub struct DecisionCache {
    entries: AHashMap<TaskId, ItemId>,
    order: VecDeque<TaskId>,
    capacity: usize,
}

impl DecisionCache {
    pub fn new() -> Self {
        Self::with_capacity(config().decision_cache_capacity)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: AHashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn insert(&mut self, task: TaskId, item: ItemId) {
        if self.entries.insert(task, item).is_none() {
            self.order.push_back(task);
            if self.order.len() > self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.entries.remove(&oldest);
                }
            }
        }
    }

    pub fn get(&self, task: TaskId) -> Option<ItemId> {
        self.entries.get(&task).copied()
    }

    /// Evict on task completion or cancellation
    pub fn forget(&mut self, task: TaskId) {
        if self.entries.remove(&task).is_some() {
            self.order.retain(|id| *id != task);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DecisionCache {
    fn default() -> Self {
        Self::new()
    }
}
