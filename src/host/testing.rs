//! In-memory host doubles for tests
//!
//! A flat-map world with straight-line distances and a recording task
//! sink. Kept in the library (not behind cfg(test)) so integration tests
//! and downstream hosts can drive the engine without a full simulation.

use crate::agent::Agent;
use crate::core::error::{Result, WardenError};
use crate::core::types::{AgentId, DefId, ItemId};
use crate::host::{DangerTolerance, InterruptMode, TaskSink, WorldAccess};
use crate::items::Item;
use crate::tasks::TaskSpec;
use ahash::{AHashMap, AHashSet};
use ordered_float::OrderedFloat;

/// World double backed by plain maps
#[derive(Debug, Default)]
pub struct StubWorld {
    /// Placed items, grouped by definition
    pub placed: AHashMap<DefId, Vec<Item>>,
    /// Items that fail every reach/reserve check
    pub unreachable: AHashSet<ItemId>,
    /// When set, the agent counts as having no map at all
    pub no_map: bool,
}

impl StubWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, item: Item) {
        self.placed.entry(item.def).or_default().push(item);
    }
}

impl WorldAccess for StubWorld {
    fn has_map(&self, _agent: &Agent) -> bool {
        !self.no_map
    }

    fn items_of_def_near(&self, _agent: &Agent, def: DefId) -> Vec<Item> {
        self.placed.get(&def).cloned().unwrap_or_default()
    }

    fn apparel_on_map(&self, _agent: &Agent) -> Vec<Item> {
        self.placed.values().flatten().cloned().collect()
    }

    fn can_reserve_and_reach(
        &self,
        _agent: &Agent,
        item: &Item,
        _danger: DangerTolerance,
    ) -> bool {
        !self.unreachable.contains(&item.id)
    }

    fn closest_reachable(&self, agent: &Agent, candidates: &[Item]) -> Option<ItemId> {
        candidates
            .iter()
            .filter(|item| !self.unreachable.contains(&item.id))
            .filter_map(|item| {
                item.position
                    .map(|pos| (item.id, OrderedFloat(agent.position.distance(&pos))))
            })
            .min_by_key(|(_, distance)| *distance)
            .map(|(id, _)| id)
    }
}

/// Task sink that records every request
#[derive(Debug, Default)]
pub struct StubSink {
    pub started: Vec<(AgentId, TaskSpec, InterruptMode, bool)>,
    pub transfers: Vec<(AgentId, ItemId)>,
    /// Identity changes applied by container transfers
    pub transfer_remap: AHashMap<ItemId, ItemId>,
    /// Items whose transfer should fail outright
    pub failing_transfers: AHashSet<ItemId>,
}

impl StubSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskSink for StubSink {
    fn start_task(
        &mut self,
        agent: AgentId,
        spec: TaskSpec,
        mode: InterruptMode,
        resume_prior: bool,
    ) {
        self.started.push((agent, spec, mode, resume_prior));
    }

    fn transfer_to_hand(&mut self, agent: AgentId, item: ItemId) -> Result<ItemId> {
        if self.failing_transfers.contains(&item) {
            return Err(WardenError::TransferFailed(item));
        }
        self.transfers.push((agent, item));
        Ok(self.transfer_remap.get(&item).copied().unwrap_or(item))
    }
}
