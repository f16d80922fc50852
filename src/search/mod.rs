//! Candidate search: eligibility, aggregation, and the follow-up action

pub mod aggregator;
pub mod eligibility;

pub use aggregator::find_apparel_for;

use serde::{Deserialize, Serialize};

/// What the agent must do to end up wearing the selected item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApparelAction {
    /// Best candidate is already worn
    DoNothing,
    /// Best candidate sits in the agent's own inventory
    EquipFromInventory,
    /// Best candidate lies somewhere on the map
    GoAndEquip,
}
