//! Protective-item selection: the direct "pick best armor" path
//!
//! No task-relevance component; used for manual equip requests and the
//! auto-upgrade chain.

pub mod upgrade;

pub use upgrade::UpgradeLoop;

use crate::agent::Agent;
use crate::core::config::config;
use crate::core::types::ItemId;
use crate::defs::DefDatabase;
use crate::host::{DangerTolerance, InterruptMode, TaskSink, WorldAccess};
use crate::items::Item;
use crate::scoring::{protection_score_gain, worn_protection_scores};
use crate::tasks::TaskSpec;

/// Find the single best protective upgrade on the agent's map
///
/// Scans every placed wearable, scores the net gain against the worn set
/// (worn raw scores computed once for the whole scan), and keeps the best
/// candidate that clears the minimum-gain threshold and every legality
/// gate: not burning, loadout policy, not forbidden, gender match, biocode
/// match, body compatibility, and reach at the agent's normal danger
/// tolerance.
pub fn pick_best_armor(
    defs: &DefDatabase,
    world: &dyn WorldAccess,
    agent: &Agent,
) -> Option<Item> {
    let placed = world.apparel_on_map(agent);
    if placed.is_empty() {
        return None;
    }

    let worn_scores = worn_protection_scores(defs, agent);
    let mut best: Option<Item> = None;
    let mut best_gain = 0.0f32;

    for item in placed {
        let Some(def) = defs.apparel(item.def) else {
            continue;
        };
        if item.burning || item.forbidden || !agent.outfit.allows(item.def) {
            continue;
        }
        if let Some(required) = def.gender {
            if required != agent.gender {
                continue;
            }
        }
        let gain = protection_score_gain(defs, agent, &item, def, &worn_scores);
        if gain < config().min_upgrade_gain || gain < best_gain {
            continue;
        }
        if !item.biocode_allows(agent.id) {
            continue;
        }
        if !agent.can_wear(def) {
            continue;
        }
        if !world.can_reserve_and_reach(agent, &item, DangerTolerance::Normal) {
            continue;
        }
        best_gain = gain;
        best = Some(item);
    }

    best
}

/// Body-coverage-weighted protection of the agent's current worn set
///
/// Per rating: each layer's clamped half-rating stacks multiplicatively on
/// every body part it covers, parts contribute by coverage share, and the
/// per-rating value is scaled into [0, 2]. Sharp and blunt values are
/// summed at 100 points each, giving a UI-friendly 0-400 range.
pub fn overall_protection(defs: &DefDatabase, agent: &Agent) -> f32 {
    rating_value(defs, agent, |def| def.armor_sharp, agent.natural_armor_sharp) * 100.0
        + rating_value(defs, agent, |def| def.armor_blunt, agent.natural_armor_blunt) * 100.0
}

fn rating_value(
    defs: &DefDatabase,
    agent: &Agent,
    rating: impl Fn(&crate::defs::ApparelDef) -> f32,
    natural: f32,
) -> f32 {
    let natural_fraction = (natural / 2.0).clamp(0.0, 1.0);
    let mut total = 0.0;
    for part in &agent.body {
        let mut unprotected = 1.0 - natural_fraction;
        for worn in &agent.worn {
            let Some(def) = defs.apparel(worn.def) else {
                continue;
            };
            if def.covers(part.slot) {
                let layer = (rating(def) / 2.0).clamp(0.0, 1.0);
                unprotected *= 1.0 - layer;
            }
        }
        total += part.coverage * (1.0 - unprotected);
    }
    (total * 2.0).clamp(0.0, 2.0)
}

/// Outcome of a manual armor-equip request
#[derive(Debug, Clone, PartialEq)]
pub enum ArmorRequest {
    /// An equip task was queued for this item
    Equipping(ItemId),
    /// Nothing suitable on the map; message is ready for the host's UI
    NothingFound { message: String },
}

/// Manual entry point: find the best armor and queue an equip task for it
pub fn request_armor_equip(
    defs: &DefDatabase,
    world: &dyn WorldAccess,
    sink: &mut dyn TaskSink,
    agent: &Agent,
) -> ArmorRequest {
    match pick_best_armor(defs, world, agent) {
        Some(item) => {
            sink.start_task(
                agent.id,
                TaskSpec::equip_armor(item.id),
                InterruptMode::Ordered,
                false,
            );
            ArmorRequest::Equipping(item.id)
        }
        None => ArmorRequest::NothingFound {
            message: format!("No armour found to equip for {}", agent.name),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DefId, Gender, Vec2};
    use crate::defs::{ApparelDef, BodySlot};
    use crate::host::testing::{StubSink, StubWorld};
    use crate::tasks::TaskKind;

    fn plate_def(id: u32) -> ApparelDef {
        ApparelDef::new(DefId(id), "plate")
            .with_slots(vec![BodySlot::Torso])
            .with_armor(1.0, 0.4)
    }

    #[test]
    fn test_bare_agent_picks_reachable_armor() {
        let mut defs = DefDatabase::new();
        defs.add_apparel(plate_def(1));

        let agent = Agent::new(Gender::Male);
        let mut world = StubWorld::new();
        let placed = Item::new(DefId(1)).at(Vec2::new(4.0, 0.0));
        let placed_id = placed.id;
        world.place(placed);

        let best = pick_best_armor(&defs, &world, &agent).expect("armor");
        assert_eq!(best.id, placed_id);
    }

    #[test]
    fn test_burning_and_forbidden_excluded() {
        let mut defs = DefDatabase::new();
        defs.add_apparel(plate_def(1));

        let agent = Agent::new(Gender::Male);
        let mut world = StubWorld::new();
        let mut burning = Item::new(DefId(1)).at(Vec2::new(1.0, 0.0));
        burning.burning = true;
        let mut forbidden = Item::new(DefId(1)).at(Vec2::new(2.0, 0.0));
        forbidden.forbidden = true;
        world.place(burning);
        world.place(forbidden);

        assert!(pick_best_armor(&defs, &world, &agent).is_none());
    }

    #[test]
    fn test_locked_conflict_excluded_even_if_highest_raw() {
        let mut defs = DefDatabase::new();
        defs.add_apparel(
            ApparelDef::new(DefId(1), "jacket")
                .with_slots(vec![BodySlot::Torso])
                .with_armor(0.1, 0.1),
        );
        defs.add_apparel(plate_def(2));
        defs.add_apparel(
            ApparelDef::new(DefId(3), "helmet")
                .with_slots(vec![BodySlot::Head])
                .with_armor(0.3, 0.1),
        );

        let mut agent = Agent::new(Gender::Male);
        let worn = Item::new(DefId(1));
        agent.outfit.lock(worn.id);
        agent.worn.push(worn);

        let mut world = StubWorld::new();
        world.place(Item::new(DefId(2)).at(Vec2::new(1.0, 0.0)));
        let helmet = Item::new(DefId(3)).at(Vec2::new(2.0, 0.0));
        let helmet_id = helmet.id;
        world.place(helmet);

        // the plate would outscore the helmet but conflicts with the locked
        // jacket; the helmet is the only legal upgrade
        let best = pick_best_armor(&defs, &world, &agent).expect("armor");
        assert_eq!(best.id, helmet_id);
    }

    #[test]
    fn test_gender_restricted_armor_skipped() {
        let mut defs = DefDatabase::new();
        defs.add_apparel(plate_def(1).for_gender(Gender::Female));

        let agent = Agent::new(Gender::Male);
        let mut world = StubWorld::new();
        world.place(Item::new(DefId(1)).at(Vec2::new(1.0, 0.0)));

        assert!(pick_best_armor(&defs, &world, &agent).is_none());
    }

    #[test]
    fn test_biocoded_for_other_skipped() {
        let mut defs = DefDatabase::new();
        defs.add_apparel(plate_def(1));

        let agent = Agent::new(Gender::Male);
        let mut world = StubWorld::new();
        let mut coded = Item::new(DefId(1)).at(Vec2::new(1.0, 0.0));
        coded.biocoded_to = Some(crate::core::types::AgentId::new());
        world.place(coded);

        assert!(pick_best_armor(&defs, &world, &agent).is_none());
    }

    #[test]
    fn test_overall_protection_bare() {
        let defs = DefDatabase::new();
        let agent = Agent::new(Gender::Male);
        assert_eq!(overall_protection(&defs, &agent), 0.0);
    }

    #[test]
    fn test_overall_protection_increases_with_layers() {
        let mut defs = DefDatabase::new();
        defs.add_apparel(plate_def(1));

        let mut bare = Agent::new(Gender::Male);
        let before = overall_protection(&defs, &bare);
        bare.worn.push(Item::new(DefId(1)));
        let after = overall_protection(&defs, &bare);
        assert!(after > before);
        assert!(after <= 400.0);
    }

    #[test]
    fn test_request_queues_ordered_task() {
        let mut defs = DefDatabase::new();
        defs.add_apparel(plate_def(1));

        let agent = Agent::new(Gender::Male);
        let mut world = StubWorld::new();
        let placed = Item::new(DefId(1)).at(Vec2::new(1.0, 0.0));
        let placed_id = placed.id;
        world.place(placed);

        let mut sink = StubSink::new();
        let outcome = request_armor_equip(&defs, &world, &mut sink, &agent);
        assert_eq!(outcome, ArmorRequest::Equipping(placed_id));
        assert_eq!(sink.started.len(), 1);
        let (who, spec, mode, resume) = &sink.started[0];
        assert_eq!(*who, agent.id);
        assert_eq!(spec.kind, TaskKind::EquipArmor);
        assert_eq!(spec.target, Some(placed_id));
        assert_eq!(*mode, InterruptMode::Ordered);
        assert!(!*resume);
    }

    #[test]
    fn test_request_reports_nothing_found() {
        let defs = DefDatabase::new();
        let agent = Agent::new(Gender::Male).named("Kass");
        let world = StubWorld::new();
        let mut sink = StubSink::new();

        match request_armor_equip(&defs, &world, &mut sink, &agent) {
            ArmorRequest::NothingFound { message } => assert!(message.contains("Kass")),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(sink.started.is_empty());
    }
}
