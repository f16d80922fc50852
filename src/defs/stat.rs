//! Statistic definitions and the offsets items attach to them

use crate::core::types::{SkillId, StatId};
use serde::{Deserialize, Serialize};

/// A statistic definition
///
/// The skill lists mirror the host's stat system: a stat is relevant to a
/// skill when that skill appears in the stat's need-offset or need-factor
/// list. Work-speed stats carry no skill lists and are matched by identity
/// against a task's declared work-speed stat instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatDef {
    pub id: StatId,
    pub name: String,
    pub skill_need_offsets: Vec<SkillId>,
    pub skill_need_factors: Vec<SkillId>,
}

impl StatDef {
    pub fn new(id: StatId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            skill_need_offsets: Vec::new(),
            skill_need_factors: Vec::new(),
        }
    }

    pub fn with_skill_offset(mut self, skill: SkillId) -> Self {
        self.skill_need_offsets.push(skill);
        self
    }

    pub fn with_skill_factor(mut self, skill: SkillId) -> Self {
        self.skill_need_factors.push(skill);
        self
    }

    /// Whether this stat feeds into the given skill
    pub fn affects_skill(&self, skill: SkillId) -> bool {
        self.skill_need_offsets.contains(&skill) || self.skill_need_factors.contains(&skill)
    }
}

/// A (stat, value) pair attached to an item definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatOffset {
    pub stat: StatId,
    pub value: f32,
}

impl StatOffset {
    pub fn new(stat: StatId, value: f32) -> Self {
        Self { stat, value }
    }
}
