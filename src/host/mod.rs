//! Narrow interfaces onto the host simulation
//!
//! Everything this crate needs from the host (spatial queries,
//! reachability, container mechanics, task starts) passes through these
//! traits. The host's single-threaded simulation turn is the only
//! concurrency guarantee; none of these calls may block or retain
//! references across ticks.

pub mod testing;

use crate::agent::Agent;
use crate::core::error::Result;
use crate::core::types::{AgentId, DefId, ItemId};
use crate::items::Item;
use crate::tasks::TaskSpec;
use serde::{Deserialize, Serialize};

/// How much danger an agent will path through to reach an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DangerTolerance {
    /// The agent's ordinary tolerance (mood- and situation-dependent host-side)
    Normal,
    /// Anything short of guaranteed death
    Deadly,
}

/// How a newly started task interacts with the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterruptMode {
    /// Forcibly interrupt whatever is running
    Forced,
    /// Queue after the current task finishes
    Ordered,
}

/// Read-only world queries
pub trait WorldAccess {
    /// Whether the agent is currently on a live map
    fn has_map(&self, agent: &Agent) -> bool;

    /// Placed items of one definition near the agent
    fn items_of_def_near(&self, agent: &Agent, def: DefId) -> Vec<Item>;

    /// Every placed wearable on the agent's map
    fn apparel_on_map(&self, agent: &Agent) -> Vec<Item>;

    /// Reachability plus claim check at the given danger tolerance
    fn can_reserve_and_reach(&self, agent: &Agent, item: &Item, danger: DangerTolerance) -> bool;

    /// The globally closest reachable candidate, or None if none is
    ///
    /// Candidates handed in are already filtered for policy and forbidden
    /// state; the host only resolves distance and pathing.
    fn closest_reachable(&self, agent: &Agent, candidates: &[Item]) -> Option<ItemId>;
}

/// Mutations requested of the host
pub trait TaskSink {
    /// Start a task, optionally interrupting and later resuming the current one
    fn start_task(
        &mut self,
        agent: AgentId,
        spec: TaskSpec,
        mode: InterruptMode,
        resume_prior: bool,
    );

    /// Move an item from the agent's carried container into hand state
    ///
    /// The returned id may differ from the input: the host is free to
    /// split stacks or respawn the object during the transfer.
    fn transfer_to_hand(&mut self, agent: AgentId, item: ItemId) -> Result<ItemId>;
}
