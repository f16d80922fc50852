//! Self-chaining armor upgrade after a completed wear

use crate::agent::Agent;
use crate::armor::pick_best_armor;
use crate::core::config::config;
use crate::core::types::ItemId;
use crate::defs::DefDatabase;
use crate::host::{InterruptMode, TaskSink, WorldAccess};
use crate::tasks::TaskSpec;

/// Bounded fixed-point loop: keep equipping better armor until none is left
///
/// The host drives it: create one per manual armor request, call
/// `on_wear_complete` when each wear-task finishes, stop when it returns
/// None. The iteration cap guards against a non-converging world (items
/// moving or spawning between queries).
#[derive(Debug)]
pub struct UpgradeLoop {
    remaining: u32,
}

impl UpgradeLoop {
    pub fn new() -> Self {
        Self {
            remaining: config().upgrade_iteration_cap,
        }
    }

    /// Re-query after a finished wear; queue the next equip if one exists
    pub fn on_wear_complete(
        &mut self,
        defs: &DefDatabase,
        world: &dyn WorldAccess,
        sink: &mut dyn TaskSink,
        agent: &Agent,
    ) -> Option<ItemId> {
        if self.remaining == 0 {
            tracing::debug!(agent = %agent.name, "armor upgrade chain hit iteration cap");
            return None;
        }
        self.remaining -= 1;

        let item = pick_best_armor(defs, world, agent)?;
        sink.start_task(
            agent.id,
            TaskSpec::equip_armor(item.id),
            InterruptMode::Ordered,
            false,
        );
        Some(item.id)
    }

    pub fn exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl Default for UpgradeLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DefId, Gender, Vec2};
    use crate::defs::{ApparelDef, BodySlot};
    use crate::host::testing::{StubSink, StubWorld};
    use crate::items::Item;

    #[test]
    fn test_stops_when_no_better_armor() {
        let defs = DefDatabase::new();
        let agent = Agent::new(Gender::Male);
        let world = StubWorld::new();
        let mut sink = StubSink::new();

        let mut chain = UpgradeLoop::new();
        assert!(chain.on_wear_complete(&defs, &world, &mut sink, &agent).is_none());
        assert!(sink.started.is_empty());
    }

    #[test]
    fn test_chains_while_upgrades_exist() {
        let mut defs = DefDatabase::new();
        defs.add_apparel(
            ApparelDef::new(DefId(1), "plate")
                .with_slots(vec![BodySlot::Torso])
                .with_armor(1.0, 0.4),
        );

        let agent = Agent::new(Gender::Male);
        let mut world = StubWorld::new();
        world.place(Item::new(DefId(1)).at(Vec2::new(1.0, 0.0)));

        let mut sink = StubSink::new();
        let mut chain = UpgradeLoop::new();
        assert!(chain.on_wear_complete(&defs, &world, &mut sink, &agent).is_some());
        assert_eq!(sink.started.len(), 1);
    }

    #[test]
    fn test_iteration_cap_bounds_the_chain() {
        let mut defs = DefDatabase::new();
        defs.add_apparel(
            ApparelDef::new(DefId(1), "plate")
                .with_slots(vec![BodySlot::Torso])
                .with_armor(1.0, 0.4),
        );

        // the world never changes, so the same upgrade keeps being found;
        // the cap must end the chain anyway
        let agent = Agent::new(Gender::Male);
        let mut world = StubWorld::new();
        world.place(Item::new(DefId(1)).at(Vec2::new(1.0, 0.0)));

        let mut sink = StubSink::new();
        let mut chain = UpgradeLoop::new();
        let mut issued = 0;
        while chain.on_wear_complete(&defs, &world, &mut sink, &agent).is_some() {
            issued += 1;
            assert!(issued <= 1000, "chain failed to terminate");
        }
        assert!(chain.exhausted());
        assert_eq!(issued as u32, crate::core::config::config().upgrade_iteration_cap);
    }
}
