//! Tasks and their unit-of-work sequences

use crate::core::types::{ItemId, SkillId, StatId, TaskId};
use serde::{Deserialize, Serialize};

/// High-level assigned activity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    GotoWander,
    Ingest,
    LayDown,
    Wait,
    WaitMaintainPosture,
    WaitDowned,
    WaitWander,
    WaitCombat,
    HaulToCell,
    TakeInventory,
    FleeAndCower,
    Goto,
    /// Finish a construction frame
    FinishFrame,
    /// Put on a piece of apparel
    Wear,
    /// Manual armor-equip request
    EquipArmor,
    /// Any other host-defined work task
    Custom(String),
}

impl TaskKind {
    /// Tasks for which no apparel search or injection ever happens
    ///
    /// Idle, reflexive, and logistics tasks: outfitting for them would
    /// thrash the queue for no gain.
    pub fn is_ignored(&self) -> bool {
        matches!(
            self,
            TaskKind::GotoWander
                | TaskKind::Ingest
                | TaskKind::LayDown
                | TaskKind::Wait
                | TaskKind::WaitMaintainPosture
                | TaskKind::WaitDowned
                | TaskKind::WaitWander
                | TaskKind::WaitCombat
                | TaskKind::HaulToCell
                | TaskKind::TakeInventory
                | TaskKind::FleeAndCower
                | TaskKind::Goto
        )
    }
}

/// A task instance assigned to an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub kind: TaskKind,
    pub target: Option<ItemId>,
    /// Work-speed stat declared by the task's bill/recipe, if any
    pub work_speed_stat: Option<StatId>,
    /// Relevant skills of the work-giver that issued this task
    pub work_giver_skills: Vec<SkillId>,
}

impl Task {
    pub fn new(kind: TaskKind) -> Self {
        Self {
            id: TaskId::new(),
            kind,
            target: None,
            work_speed_stat: None,
            work_giver_skills: Vec::new(),
        }
    }

    pub fn with_target(mut self, item: ItemId) -> Self {
        self.target = Some(item);
        self
    }

    pub fn with_work_speed_stat(mut self, stat: StatId) -> Self {
        self.work_speed_stat = Some(stat);
        self
    }

    pub fn with_work_giver_skills(mut self, skills: Vec<SkillId>) -> Self {
        self.work_giver_skills = skills;
        self
    }
}

/// Specification for a task the host should start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub kind: TaskKind,
    pub target: Option<ItemId>,
}

impl TaskSpec {
    pub fn wear(item: ItemId) -> Self {
        Self {
            kind: TaskKind::Wear,
            target: Some(item),
        }
    }

    pub fn equip_armor(item: ItemId) -> Self {
        Self {
            kind: TaskKind::EquipArmor,
            target: Some(item),
        }
    }
}

/// What a unit of work does when the sequencer reaches it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkStep {
    /// Start a forced, resumable wear-task for the item
    Equip(ItemId),
    /// Host-defined step; the payload handle is opaque to this crate
    Host(u32),
}

/// One step in a task's executable sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitOfWork {
    /// Skill exercised while this unit runs, when the host knows it
    pub active_skill: Option<SkillId>,
    pub step: WorkStep,
}

impl UnitOfWork {
    pub fn host(payload: u32) -> Self {
        Self {
            active_skill: None,
            step: WorkStep::Host(payload),
        }
    }

    pub fn host_with_skill(payload: u32, skill: SkillId) -> Self {
        Self {
            active_skill: Some(skill),
            step: WorkStep::Host(payload),
        }
    }

    pub fn equip(item: ItemId) -> Self {
        Self {
            active_skill: None,
            step: WorkStep::Equip(item),
        }
    }
}

/// Resolve the skill most relevant to a task's current work
///
/// First non-empty skill of any already-generated unit wins; a
/// frame-finishing task falls back to the construction skill; otherwise the
/// first relevant skill of the originating work-giver. None when the task
/// exercises no skill at all.
pub fn active_skill_for(
    task: &Task,
    units: &[UnitOfWork],
    construction_skill: Option<SkillId>,
) -> Option<SkillId> {
    if let Some(skill) = units.iter().find_map(|unit| unit.active_skill) {
        return Some(skill);
    }
    if task.kind == TaskKind::FinishFrame {
        if let Some(skill) = construction_skill {
            return Some(skill);
        }
    }
    task.work_giver_skills.first().copied()
}
