//! Base eligibility filter shared by all three candidate sources

use crate::agent::Agent;
use crate::defs::DefDatabase;
use crate::host::{DangerTolerance, WorldAccess};
use crate::items::Item;

/// Whether an item may enter the task-relevance candidate pool at all
///
/// Registry membership, reach + claim at deadly tolerance, loadout policy,
/// and basic wearability. Source-specific rules (definition duplicates,
/// locked replacements) layer on top of this in the aggregator.
pub fn base_eligible(
    defs: &DefDatabase,
    world: &dyn WorldAccess,
    agent: &Agent,
    item: &Item,
) -> bool {
    if !defs.is_useful_apparel(item.def) {
        return false;
    }
    let Some(def) = defs.apparel(item.def) else {
        return false;
    };
    if !world.can_reserve_and_reach(agent, item, DangerTolerance::Deadly) {
        return false;
    }
    if !agent.outfit.allows(item.def) {
        return false;
    }
    agent.can_wear(def)
}
