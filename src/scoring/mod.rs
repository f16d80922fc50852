//! Suitability scoring for candidate items
//!
//! Two independent paths: task-relevance (stat offsets against the work at
//! hand) and protective value (armor ratings with durability and social
//! penalties). Both are pure functions over snapshots.

pub mod protection;
pub mod task_relevance;

pub use protection::{protection_score_gain, protection_score_raw, worn_protection_scores};
pub use task_relevance::{task_relevance_score, SkillTask};
