//! Physical item state
//!
//! Items are owned by the host simulation; this crate only reads snapshots
//! of them and requests mutations through the host traits.

use crate::core::types::{AgentId, DefId, ItemId, Vec2};
use serde::{Deserialize, Serialize};

/// Snapshot of a single physical item
///
/// Location is implied by which collection the host hands the item over in
/// (worn list, carried container, or a map query); an item appears in
/// exactly one of those at a time. `position` is set for placed items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub def: DefId,
    pub hit_points: u32,
    pub max_hit_points: u32,
    /// Agent this item is keyed to, if biocoded
    pub biocoded_to: Option<AgentId>,
    pub burning: bool,
    /// Stripped from a corpse at some point
    pub worn_by_corpse: bool,
    /// Made of a material most agents find grim (e.g. human leather)
    pub grim_material: bool,
    /// Item-specific bonus (charged shields and the like)
    pub special_score_offset: f32,
    /// Marked untouchable by the player
    pub forbidden: bool,
    pub position: Option<Vec2>,
}

impl Item {
    pub fn new(def: DefId) -> Self {
        Self {
            id: ItemId::new(),
            def,
            hit_points: 100,
            max_hit_points: 100,
            biocoded_to: None,
            burning: false,
            worn_by_corpse: false,
            grim_material: false,
            special_score_offset: 0.0,
            forbidden: false,
            position: None,
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_hit_points(mut self, hit_points: u32, max_hit_points: u32) -> Self {
        self.hit_points = hit_points;
        self.max_hit_points = max_hit_points;
        self
    }

    /// Remaining durability as a fraction of maximum
    pub fn durability_fraction(&self) -> f32 {
        if self.max_hit_points == 0 {
            return 0.0;
        }
        self.hit_points as f32 / self.max_hit_points as f32
    }

    /// Whether the given agent may use this item despite biocoding
    pub fn biocode_allows(&self, agent: AgentId) -> bool {
        match self.biocoded_to {
            None => true,
            Some(owner) => owner == agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durability_fraction() {
        let item = Item::new(DefId(1)).with_hit_points(40, 80);
        assert!((item.durability_fraction() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_max_hit_points() {
        let item = Item::new(DefId(1)).with_hit_points(0, 0);
        assert_eq!(item.durability_fraction(), 0.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        // hosts persist item snapshots in save games
        let item = Item::new(DefId(3)).at(Vec2::new(1.0, 2.0));
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, item.id);
        assert_eq!(back.position, item.position);
    }

    #[test]
    fn test_biocode() {
        let owner = AgentId::new();
        let other = AgentId::new();
        let mut item = Item::new(DefId(1));
        assert!(item.biocode_allows(other));

        item.biocoded_to = Some(owner);
        assert!(item.biocode_allows(owner));
        assert!(!item.biocode_allows(other));
    }
}
