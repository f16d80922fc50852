//! Task-relevance scoring: how much an item helps the work at hand

use crate::core::types::SkillId;
use crate::defs::{ApparelDef, DefDatabase};
use crate::tasks::Task;

/// Ephemeral scoring context tying an active skill to the current task
///
/// Built fresh per decision, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct SkillTask<'a> {
    pub skill: Option<SkillId>,
    pub task: Option<&'a Task>,
}

impl<'a> SkillTask<'a> {
    pub fn new(skill: Option<SkillId>, task: Option<&'a Task>) -> Self {
        Self { skill, task }
    }
}

/// Score an item definition against a skill/task pairing
///
/// Sums every equipped stat offset whose stat affects the pairing's skill,
/// plus every offset matching the task's declared work-speed stat. Returns
/// `(is_useful, score)`: useful iff at least one matching offset is
/// positive. The score is summed regardless: a net-negative but useful
/// item still scores low, and callers must discard items that are not
/// useful at all.
pub fn task_relevance_score(defs: &DefDatabase, def: &ApparelDef, ctx: &SkillTask) -> (bool, f32) {
    let mut is_useful = false;
    let mut score = 0.0;

    if let Some(skill) = ctx.skill {
        for offset in &def.equipped_stat_offsets {
            let affects = defs
                .stat(offset.stat)
                .map(|stat| stat.affects_skill(skill))
                .unwrap_or(false);
            if affects {
                if offset.value > 0.0 {
                    is_useful = true;
                }
                score += offset.value;
            }
        }
    }

    if let Some(task) = ctx.task {
        if let Some(work_stat) = task.work_speed_stat {
            for offset in &def.equipped_stat_offsets {
                if offset.stat == work_stat {
                    if offset.value > 0.0 {
                        is_useful = true;
                    }
                    score += offset.value;
                }
            }
        }
    }

    (is_useful, score)
}
