//! Apparel definitions: body slots, stat offsets, protective ratings

use crate::core::types::{DefId, Gender};
use crate::defs::stat::StatOffset;
use serde::{Deserialize, Serialize};

/// Body slot an apparel piece occupies
///
/// Two pieces conflict when their slot sets intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodySlot {
    Head,
    Torso,
    Arms,
    Hands,
    Waist,
    Legs,
    Feet,
}

/// Broad apparel class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApparelKind {
    /// Ordinary worn garment or armor piece
    Garment,
    /// Projected-energy shield; incompatible with projectile weapons
    Shield,
}

/// Definition of a wearable item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApparelDef {
    pub id: DefId,
    pub name: String,
    pub kind: ApparelKind,
    pub slots: Vec<BodySlot>,
    /// Stat offsets granted while equipped
    pub equipped_stat_offsets: Vec<StatOffset>,
    /// Intrinsic desirability offset, independent of armor ratings
    pub score_offset: f32,
    /// Protection against piercing damage
    pub armor_sharp: f32,
    /// Protection against blunt damage
    pub armor_blunt: f32,
    /// Whether the item degrades and its score discounts with damage
    pub uses_durability: bool,
    /// None = wearable by anyone
    pub gender: Option<Gender>,
}

impl ApparelDef {
    pub fn new(id: DefId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ApparelKind::Garment,
            slots: vec![BodySlot::Torso],
            equipped_stat_offsets: Vec::new(),
            score_offset: 0.0,
            armor_sharp: 0.0,
            armor_blunt: 0.0,
            uses_durability: true,
            gender: None,
        }
    }

    pub fn with_slots(mut self, slots: Vec<BodySlot>) -> Self {
        self.slots = slots;
        self
    }

    pub fn with_offset(mut self, offset: StatOffset) -> Self {
        self.equipped_stat_offsets.push(offset);
        self
    }

    pub fn with_armor(mut self, sharp: f32, blunt: f32) -> Self {
        self.armor_sharp = sharp;
        self.armor_blunt = blunt;
        self
    }

    pub fn with_kind(mut self, kind: ApparelKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn for_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Whether this piece can be worn at the same time as another
    pub fn can_wear_together(&self, other: &ApparelDef) -> bool {
        !self.slots.iter().any(|slot| other.slots.contains(slot))
    }

    /// Whether this piece covers the given body slot
    pub fn covers(&self, slot: BodySlot) -> bool {
        self.slots.contains(&slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_conflict() {
        let helmet = ApparelDef::new(DefId(1), "helmet").with_slots(vec![BodySlot::Head]);
        let hood = ApparelDef::new(DefId(2), "hood").with_slots(vec![BodySlot::Head]);
        let boots = ApparelDef::new(DefId(3), "boots").with_slots(vec![BodySlot::Feet]);

        assert!(!helmet.can_wear_together(&hood));
        assert!(helmet.can_wear_together(&boots));
    }

    #[test]
    fn test_multi_slot_conflict() {
        let duster = ApparelDef::new(DefId(1), "duster")
            .with_slots(vec![BodySlot::Torso, BodySlot::Arms, BodySlot::Legs]);
        let pants = ApparelDef::new(DefId(2), "pants").with_slots(vec![BodySlot::Legs]);
        assert!(!duster.can_wear_together(&pants));
    }
}
