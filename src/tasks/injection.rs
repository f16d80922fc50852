//! Splicing apparel acquisition into freshly generated unit-of-work lists
//!
//! The host calls `post_generation_hook` exactly once per generated list,
//! immediately after generation. Whatever happens inside, the hook hands a
//! usable list back: task generation is a hot path and a selection fault
//! must never abort it.

use crate::agent::Agent;
use crate::core::types::{AgentId, ItemId, TaskId};
use crate::defs::DefDatabase;
use crate::host::{InterruptMode, TaskSink, WorldAccess};
use crate::scoring::SkillTask;
use crate::search::{find_apparel_for, ApparelAction};
use crate::tasks::cache::DecisionCache;
use crate::tasks::work::{active_skill_for, Task, TaskSpec, UnitOfWork};
use rand::Rng;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Post-generation hook state: the decision cache lives here
#[derive(Debug, Default)]
pub struct ApparelInjector {
    cache: DecisionCache,
}

impl ApparelInjector {
    pub fn new() -> Self {
        Self {
            cache: DecisionCache::new(),
        }
    }

    /// Post-process a task's freshly generated unit-of-work list
    ///
    /// When the task is eligible and a useful item is found, the chosen
    /// item is cached against the task and an equip unit is prepended.
    /// Inventory picks transfer container-to-hand first and re-cache the
    /// resulting reference, since the transfer may change item identity.
    /// On any fault the original list is returned unmodified.
    pub fn post_generation_hook(
        &mut self,
        defs: &DefDatabase,
        world: &dyn WorldAccess,
        sink: &mut dyn TaskSink,
        agent: &Agent,
        task: &Task,
        units: Vec<UnitOfWork>,
        rng: &mut impl Rng,
    ) -> Vec<UnitOfWork> {
        if !agent.humanlike || task.kind.is_ignored() || !world.has_map(agent) {
            return units;
        }

        let original = units.clone();
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            self.inject(defs, world, sink, agent, task, units, rng)
        }));

        match outcome {
            Ok(units) => units,
            Err(_) => {
                tracing::error!(
                    agent = %agent.name,
                    task = ?task.kind,
                    "apparel injection panicked; leaving unit list unmodified"
                );
                original
            }
        }
    }

    fn inject(
        &mut self,
        defs: &DefDatabase,
        world: &dyn WorldAccess,
        sink: &mut dyn TaskSink,
        agent: &Agent,
        task: &Task,
        mut units: Vec<UnitOfWork>,
        rng: &mut impl Rng,
    ) -> Vec<UnitOfWork> {
        let skill = active_skill_for(task, &units, defs.construction_skill);
        let ctx = SkillTask::new(skill, Some(task));

        let Some((item, action)) = find_apparel_for(defs, world, agent, &ctx, rng) else {
            return units;
        };

        match action {
            ApparelAction::DoNothing => {}
            ApparelAction::EquipFromInventory => {
                match sink.transfer_to_hand(agent.id, item.id) {
                    Ok(in_hand) => {
                        self.cache.insert(task.id, in_hand);
                        units.insert(0, UnitOfWork::equip(in_hand));
                        tracing::debug!(
                            agent = %agent.name,
                            item = ?in_hand,
                            "equipping from inventory before task"
                        );
                    }
                    Err(error) => {
                        tracing::warn!(
                            agent = %agent.name,
                            item = ?item.id,
                            %error,
                            "inventory transfer failed; skipping injection"
                        );
                    }
                }
            }
            ApparelAction::GoAndEquip => {
                self.cache.insert(task.id, item.id);
                units.insert(0, UnitOfWork::equip(item.id));
                tracing::debug!(
                    agent = %agent.name,
                    item = ?item.id,
                    "fetching apparel before task"
                );
            }
        }

        units
    }

    /// The item previously chosen for a task, if any
    pub fn cached_choice(&self, task: TaskId) -> Option<ItemId> {
        self.cache.get(task)
    }

    /// Host notification: the task finished or was cancelled
    pub fn on_task_finished(&mut self, task: TaskId) {
        self.cache.forget(task);
    }
}

/// Run an equip unit: start a forced wear-task, resuming the current task
/// after it completes
pub fn execute_equip(sink: &mut dyn TaskSink, agent: AgentId, item: ItemId) {
    sink.start_task(agent, TaskSpec::wear(item), InterruptMode::Forced, true);
}
