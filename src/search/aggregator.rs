//! Three-source candidate aggregation and resolution
//!
//! Worn, carried, and ambient candidates are scored independently and
//! bucketed by exact score. Resolution repeatedly compares the top bucket
//! of each group: worn wins ties outright (nothing to do beats moving),
//! carried must strictly beat worn, and ambient must strictly beat both.
//! An ambient top bucket with no reachable item is discarded wholesale and
//! the comparison restarts, so a lower ambient bucket can never leapfrog a
//! better worn or carried candidate.

use crate::agent::Agent;
use crate::defs::DefDatabase;
use crate::host::WorldAccess;
use crate::items::Item;
use crate::scoring::{task_relevance_score, SkillTask};
use crate::search::eligibility::base_eligible;
use crate::search::ApparelAction;
use ahash::AHashMap;
use ordered_float::OrderedFloat;
use rand::seq::SliceRandom;
use rand::Rng;

/// Candidates grouped by exact score
///
/// Equal scores share one bucket, which makes the random tie-break uniform
/// over the union of equally-scored items.
type ScoreBuckets = AHashMap<OrderedFloat<f32>, Vec<Item>>;

fn bucket_by_score<'a>(
    defs: &DefDatabase,
    items: impl Iterator<Item = &'a Item>,
    ctx: &SkillTask,
) -> ScoreBuckets {
    let mut buckets = ScoreBuckets::new();
    for item in items {
        let Some(def) = defs.apparel(item.def) else {
            continue;
        };
        let (is_useful, score) = task_relevance_score(defs, def, ctx);
        if is_useful {
            buckets
                .entry(OrderedFloat(score))
                .or_default()
                .push(item.clone());
        }
    }
    buckets
}

fn top_score(buckets: &ScoreBuckets) -> Option<OrderedFloat<f32>> {
    buckets.keys().copied().max()
}

/// Find the best task-relevant apparel across all three sources
///
/// Returns the chosen item and the action needed to get it on the agent,
/// or None when nothing eligible scores as useful.
pub fn find_apparel_for(
    defs: &DefDatabase,
    world: &dyn WorldAccess,
    agent: &Agent,
    ctx: &SkillTask,
    rng: &mut impl Rng,
) -> Option<(Item, ApparelAction)> {
    let worn = agent
        .worn
        .iter()
        .filter(|item| base_eligible(defs, world, agent, item));
    let carried = agent
        .carried
        .iter()
        .filter(|item| base_eligible(defs, world, agent, item));

    let mut ambient: Vec<Item> = Vec::new();
    for def_id in defs.useful_apparel() {
        let Some(def) = defs.apparel(def_id) else {
            continue;
        };
        for item in world.items_of_def_near(agent, def_id) {
            if agent.wears_def(item.def) || agent.carries_def(item.def) {
                continue;
            }
            if agent.would_replace_locked(defs, def) {
                continue;
            }
            if base_eligible(defs, world, agent, &item) {
                ambient.push(item);
            }
        }
    }

    let worn_buckets = bucket_by_score(defs, worn, ctx);
    let carried_buckets = bucket_by_score(defs, carried, ctx);
    let ambient_buckets = bucket_by_score(defs, ambient.iter(), ctx);

    resolve(world, agent, worn_buckets, carried_buckets, ambient_buckets, rng)
}

fn resolve(
    world: &dyn WorldAccess,
    agent: &Agent,
    worn: ScoreBuckets,
    carried: ScoreBuckets,
    mut ambient: ScoreBuckets,
    rng: &mut impl Rng,
) -> Option<(Item, ApparelAction)> {
    loop {
        let worn_max = top_score(&worn);
        let carried_max = top_score(&carried);
        let ambient_max = top_score(&ambient);

        if worn_max.is_none() && carried_max.is_none() && ambient_max.is_none() {
            return None;
        }

        let beats = |lhs: Option<OrderedFloat<f32>>, rhs: Option<OrderedFloat<f32>>| match rhs {
            None => true,
            Some(r) => lhs.map(|l| l >= r).unwrap_or(false),
        };
        let strictly_beats =
            |lhs: Option<OrderedFloat<f32>>, rhs: Option<OrderedFloat<f32>>| match rhs {
                None => true,
                Some(r) => lhs.map(|l| l > r).unwrap_or(false),
            };

        if let Some(score) = worn_max {
            if beats(worn_max, carried_max) && beats(worn_max, ambient_max) {
                let bucket = &worn[&score];
                let item = bucket.choose(rng).cloned()?;
                return Some((item, ApparelAction::DoNothing));
            }
        }

        if let Some(score) = carried_max {
            if strictly_beats(carried_max, worn_max) && beats(carried_max, ambient_max) {
                let bucket = &carried[&score];
                let item = bucket.choose(rng).cloned()?;
                return Some((item, ApparelAction::EquipFromInventory));
            }
        }

        if let Some(score) = ambient_max {
            if strictly_beats(ambient_max, worn_max) && strictly_beats(ambient_max, carried_max) {
                let bucket = &ambient[&score];
                let allowed: Vec<Item> = bucket
                    .iter()
                    .filter(|item| !item.forbidden)
                    .cloned()
                    .collect();
                if let Some(found) = world.closest_reachable(agent, &allowed) {
                    if let Some(item) = allowed.into_iter().find(|item| item.id == found) {
                        return Some((item, ApparelAction::GoAndEquip));
                    }
                }
                // No reachable item at this score: drop the whole bucket
                // and re-compare against worn and carried.
                ambient.remove(&score);
                continue;
            }
        }

        return None;
    }
}
