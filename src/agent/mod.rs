//! Agent snapshot: the entity making equipment decisions

pub mod outfit;

pub use outfit::OutfitPolicy;

use crate::core::types::{AgentId, DefId, Gender, Vec2};
use crate::defs::{ApparelDef, BodySlot, DefDatabase};
use crate::items::Item;
use serde::{Deserialize, Serialize};

/// How an agent feels about wearing grim-material apparel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaterialSentiment {
    #[default]
    Saddened,
    Indifferent,
    Pleased,
}

/// A body part the agent still has, with its share of total coverage
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyPart {
    pub slot: BodySlot,
    pub coverage: f32,
}

impl BodyPart {
    pub fn new(slot: BodySlot, coverage: f32) -> Self {
        Self { slot, coverage }
    }
}

/// Currently equipped weapon, as far as apparel selection cares
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub uses_projectiles: bool,
}

/// Read-only snapshot of an agent at decision time
///
/// Host-owned state; the snapshot must not be retained across simulation
/// ticks. Mutations (equipping, container transfers, task starts) go
/// through the host traits in `host`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub gender: Gender,
    pub humanlike: bool,
    pub position: Vec2,
    pub body: Vec<BodyPart>,
    /// Natural (unclothed) protection ratings
    pub natural_armor_sharp: f32,
    pub natural_armor_blunt: f32,
    pub worn: Vec<Item>,
    pub carried: Vec<Item>,
    pub primary_weapon: Option<Weapon>,
    pub outfit: OutfitPolicy,
    /// Reaction to grim materials; `Pleased` and `Saddened` are exclusive
    pub grim_material_sentiment: MaterialSentiment,
    /// Whether corpse-worn gear disturbs this agent
    pub disturbed_by_corpse_gear: bool,
}

impl Agent {
    pub fn new(gender: Gender) -> Self {
        Self {
            id: AgentId::new(),
            name: "agent".into(),
            gender,
            humanlike: true,
            position: Vec2::default(),
            body: standard_body(),
            natural_armor_sharp: 0.0,
            natural_armor_blunt: 0.0,
            worn: Vec::new(),
            carried: Vec::new(),
            primary_weapon: None,
            outfit: OutfitPolicy::new(),
            grim_material_sentiment: MaterialSentiment::Saddened,
            disturbed_by_corpse_gear: true,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn wears_def(&self, def: DefId) -> bool {
        self.worn.iter().any(|item| item.def == def)
    }

    pub fn carries_def(&self, def: DefId) -> bool {
        self.carried.iter().any(|item| item.def == def)
    }

    /// Whether the agent's body can hold this piece at all
    pub fn can_wear(&self, def: &ApparelDef) -> bool {
        def.slots
            .iter()
            .all(|slot| self.body.iter().any(|part| part.slot == *slot))
    }

    /// Whether wearing `candidate` would displace a locked worn item
    pub fn would_replace_locked(&self, defs: &DefDatabase, candidate: &ApparelDef) -> bool {
        self.worn.iter().any(|worn| {
            if !self.outfit.is_locked(worn.id) {
                return false;
            }
            match defs.apparel(worn.def) {
                Some(worn_def) => !worn_def.can_wear_together(candidate),
                None => false,
            }
        })
    }

    pub fn wields_projectile_weapon(&self) -> bool {
        self.primary_weapon
            .as_ref()
            .map(|weapon| weapon.uses_projectiles)
            .unwrap_or(false)
    }
}

/// Full humanlike body with part coverage shares
pub fn standard_body() -> Vec<BodyPart> {
    vec![
        BodyPart::new(BodySlot::Head, 0.12),
        BodyPart::new(BodySlot::Torso, 0.40),
        BodyPart::new(BodySlot::Arms, 0.14),
        BodyPart::new(BodySlot::Hands, 0.06),
        BodyPart::new(BodySlot::Waist, 0.04),
        BodyPart::new(BodySlot::Legs, 0.16),
        BodyPart::new(BodySlot::Feet, 0.08),
    ]
}
