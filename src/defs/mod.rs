//! Definition database and the useful-apparel registry

pub mod apparel;
pub mod stat;

pub use apparel::{ApparelDef, ApparelKind, BodySlot};
pub use stat::{StatDef, StatOffset};

use crate::core::types::{DefId, SkillId, StatId};
use ahash::{AHashMap, AHashSet};

/// Host-loaded definition tables
///
/// Built once at startup. The useful-apparel registry is maintained as
/// apparel defs are added: a def registers when at least one of its
/// equipped stat offsets is positive, mirroring what task-relevance
/// scoring could ever select.
#[derive(Debug, Default)]
pub struct DefDatabase {
    stats: AHashMap<StatId, StatDef>,
    apparel: AHashMap<DefId, ApparelDef>,
    useful: AHashSet<DefId>,
    /// Skill credited for frame-finishing construction tasks
    pub construction_skill: Option<SkillId>,
}

impl DefDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stat(&mut self, def: StatDef) {
        self.stats.insert(def.id, def);
    }

    pub fn add_apparel(&mut self, def: ApparelDef) {
        if def.equipped_stat_offsets.iter().any(|o| o.value > 0.0) {
            self.useful.insert(def.id);
        }
        self.apparel.insert(def.id, def);
    }

    pub fn stat(&self, id: StatId) -> Option<&StatDef> {
        self.stats.get(&id)
    }

    pub fn apparel(&self, id: DefId) -> Option<&ApparelDef> {
        self.apparel.get(&id)
    }

    /// Whether the def has any positive equipped stat offset
    pub fn is_useful_apparel(&self, id: DefId) -> bool {
        self.useful.contains(&id)
    }

    /// Defs eligible for the ambient task-relevance search
    pub fn useful_apparel(&self) -> impl Iterator<Item = DefId> + '_ {
        self.useful.iter().copied()
    }
}
