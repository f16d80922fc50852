//! Selection configuration with documented constants
//!
//! All tunable magic numbers are collected here with explanations of their
//! purpose and how they interact with each other. The raw scoring formula
//! constants (curve control points, penalty shapes) live next to the
//! formulas in `scoring`; this struct holds the values a host would tune.

/// Configuration for apparel selection and task injection
#[derive(Debug, Clone)]
pub struct WardenConfig {
    // === ARMOR UPGRADE ===
    /// Minimum protection gain before an armor swap is worth issuing
    ///
    /// Below this threshold the agent keeps what it wears. At the default
    /// (0.05) a candidate must beat the worn set by a twentieth of a point
    /// of raw score, which filters out churn between near-identical items.
    pub min_upgrade_gain: f32,

    /// Maximum chained equip tasks per manual armor request
    ///
    /// The auto-upgrade loop re-queries after every completed wear and
    /// would run forever if world mutation kept producing "better" items.
    /// Eight iterations is far above anything a sane map produces.
    pub upgrade_iteration_cap: u32,

    // === SCORING ===
    /// Multiplier applied to a candidate's net gain when it replaces nothing
    ///
    /// Strict additions are strongly preferred over swaps: a candidate that
    /// conflicts with no worn item has its gain multiplied by this value.
    pub addition_preference: f32,

    /// Score assigned to hard-blocked candidates
    ///
    /// Candidates that would force removal of a locked item, or pair a
    /// shield with a projectile weapon, get this score. Any value far below
    /// every reachable legitimate score works; -1000 matches the magnitude
    /// of real scores (single digits) with a wide margin.
    pub hard_block_score: f32,

    // === DECISION CACHE ===
    /// Maximum number of task -> item decisions kept
    ///
    /// One entry per in-flight task is the expected population; the cap
    /// only matters when the host forgets to report task completion.
    /// Oldest entries are dropped first at capacity.
    pub decision_cache_capacity: usize,
}

impl Default for WardenConfig {
    fn default() -> Self {
        Self {
            min_upgrade_gain: 0.05,
            upgrade_iteration_cap: 8,
            addition_preference: 10.0,
            hard_block_score: -1000.0,
            decision_cache_capacity: 128,
        }
    }
}

impl WardenConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.min_upgrade_gain < 0.0 {
            return Err(format!(
                "min_upgrade_gain ({}) must be non-negative",
                self.min_upgrade_gain
            ));
        }

        if self.upgrade_iteration_cap == 0 {
            return Err("upgrade_iteration_cap must be at least 1".into());
        }

        if self.addition_preference < 1.0 {
            return Err(format!(
                "addition_preference ({}) must not penalize additions (>= 1.0)",
                self.addition_preference
            ));
        }

        // The hard block must sort below any real score
        if self.hard_block_score >= 0.0 {
            return Err(format!(
                "hard_block_score ({}) must be negative",
                self.hard_block_score
            ));
        }

        if self.decision_cache_capacity == 0 {
            return Err("decision_cache_capacity must be at least 1".into());
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<WardenConfig> = OnceLock::new();

/// Get the global config (initializes with defaults if not set)
pub fn config() -> &'static WardenConfig {
    CONFIG.get_or_init(WardenConfig::default)
}

/// Set the global config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: WardenConfig) -> Result<(), WardenConfig> {
    CONFIG.set(config)
}
