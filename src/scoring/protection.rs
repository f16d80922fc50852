//! Protective-value scoring for armor selection

use crate::agent::{Agent, MaterialSentiment};
use crate::core::config::config;
use crate::core::curve::{CurvePoint, PiecewiseCurve};
use crate::defs::{ApparelDef, ApparelKind, DefDatabase};
use crate::items::Item;
use std::sync::OnceLock;

/// Base desirability of any wearable before ratings and offsets
const BASE_SCORE: f32 = 0.1;

/// Flat penalty for emotionally tainted gear, applied before shrinking
const TAINT_PENALTY: f32 = 0.5;

/// Shrink factor for whatever positive score survives the taint penalty
const TAINT_SHRINK: f32 = 0.1;

/// Bonus for agents who actively like grim materials
const GRIM_PLEASED_BONUS: f32 = 0.12;

/// Scale for gear restricted to the other gender; near-zero keeps it as a
/// last resort rather than excluding it outright
const GENDER_MISMATCH_FACTOR: f32 = 0.01;

/// Score discount over remaining durability
///
/// Near-destroyed items are worth almost nothing, full value returns above
/// ~52%, with a sharp ramp between 20% and 52%.
fn durability_curve() -> &'static PiecewiseCurve {
    static CURVE: OnceLock<PiecewiseCurve> = OnceLock::new();
    CURVE.get_or_init(|| {
        PiecewiseCurve::new(vec![
            CurvePoint::new(0.0, 0.0),
            CurvePoint::new(0.2, 0.2),
            CurvePoint::new(0.22, 0.6),
            CurvePoint::new(0.5, 0.6),
            CurvePoint::new(0.52, 1.0),
        ])
    })
}

/// Raw protective value of one item for one agent
///
/// Pure over the (agent, item, def) snapshot.
pub fn protection_score_raw(agent: &Agent, item: &Item, def: &ApparelDef) -> f32 {
    let mut score = BASE_SCORE + def.score_offset;
    score += def.armor_sharp + def.armor_blunt;

    if def.uses_durability {
        score *= durability_curve().evaluate(item.durability_fraction());
    }

    score += item.special_score_offset;

    if item.worn_by_corpse && agent.disturbed_by_corpse_gear {
        score -= TAINT_PENALTY;
        if score > 0.0 {
            score *= TAINT_SHRINK;
        }
    }

    if item.grim_material {
        match agent.grim_material_sentiment {
            MaterialSentiment::Saddened => {
                score -= TAINT_PENALTY;
                if score > 0.0 {
                    score *= TAINT_SHRINK;
                }
            }
            MaterialSentiment::Pleased => score += GRIM_PLEASED_BONUS,
            MaterialSentiment::Indifferent => {}
        }
    }

    if let Some(required) = def.gender {
        if required != agent.gender {
            score *= GENDER_MISMATCH_FACTOR;
        }
    }

    score
}

/// Raw scores of the agent's current worn set, in worn order
///
/// Computed once per scan and reused across `protection_score_gain` calls.
/// Worn items with a missing definition score zero.
pub fn worn_protection_scores(defs: &DefDatabase, agent: &Agent) -> Vec<f32> {
    agent
        .worn
        .iter()
        .map(|item| match defs.apparel(item.def) {
            Some(def) => protection_score_raw(agent, item, def),
            None => 0.0,
        })
        .collect()
}

/// Net protective gain of putting on `item`, given what is already worn
///
/// Hard blocks (shield with a projectile weapon, or displacing a worn item
/// the policy refuses to remove) return the configured hard-block score.
/// Replaced items subtract their own raw score; a candidate that conflicts
/// with nothing has its gain multiplied by the addition preference.
pub fn protection_score_gain(
    defs: &DefDatabase,
    agent: &Agent,
    item: &Item,
    def: &ApparelDef,
    worn_scores: &[f32],
) -> f32 {
    let cfg = config();

    if def.kind == ApparelKind::Shield && agent.wields_projectile_weapon() {
        return cfg.hard_block_score;
    }

    let mut gain = protection_score_raw(agent, item, def);
    let mut swaps = false;

    for (index, worn) in agent.worn.iter().enumerate() {
        let Some(worn_def) = defs.apparel(worn.def) else {
            continue;
        };
        if worn_def.can_wear_together(def) {
            continue;
        }
        if !agent.outfit.allowed_to_auto_remove(worn.id) {
            return cfg.hard_block_score;
        }
        gain -= worn_scores.get(index).copied().unwrap_or(0.0);
        swaps = true;
    }

    if !swaps {
        gain *= cfg.addition_preference;
    }

    gain
}
