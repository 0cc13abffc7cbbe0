//! Dashboard configuration
//!
//! Loaded once at startup and copied into the `DashboardContext`.

use serde::{Deserialize, Serialize};

use crate::constants::{
    get_forest_seed, get_forest_trees, get_timer_minutes, DEFAULT_FOREST_SEED,
    DEFAULT_FOREST_TREES, DEFAULT_TIMER_MINUTES,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Seed for bootstrap sampling and split-feature sampling
    pub forest_seed: u64,

    /// Number of trees in the ensemble
    pub forest_trees: usize,

    /// Meditation duration used when the caller gives none
    pub timer_minutes: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            forest_seed: DEFAULT_FOREST_SEED,
            forest_trees: DEFAULT_FOREST_TREES,
            timer_minutes: DEFAULT_TIMER_MINUTES,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            forest_seed: get_forest_seed(),
            forest_trees: get_forest_trees(),
            timer_minutes: get_timer_minutes(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.forest_seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-wide, so every env case lives in one test.
    #[test]
    fn test_from_env_overrides_and_fallbacks() {
        std::env::set_var("HEALTH_FOREST_SEED", "7");
        std::env::set_var("HEALTH_FOREST_TREES", "0");
        std::env::set_var("HEALTH_TIMER_MINUTES", "not-a-number");

        let config = DashboardConfig::from_env();
        assert_eq!(config.forest_seed, 7);
        assert_eq!(config.forest_trees, DEFAULT_FOREST_TREES);
        assert_eq!(config.timer_minutes, DEFAULT_TIMER_MINUTES);

        std::env::set_var("HEALTH_TIMER_MINUTES", "11");
        assert_eq!(DashboardConfig::from_env().timer_minutes, DEFAULT_TIMER_MINUTES);

        std::env::set_var("HEALTH_TIMER_MINUTES", "5");
        std::env::set_var("HEALTH_FOREST_TREES", "25");
        let config = DashboardConfig::from_env();
        assert_eq!(config.timer_minutes, 5);
        assert_eq!(config.forest_trees, 25);

        std::env::remove_var("HEALTH_FOREST_SEED");
        std::env::remove_var("HEALTH_FOREST_TREES");
        std::env::remove_var("HEALTH_TIMER_MINUTES");
        assert_eq!(DashboardConfig::from_env(), DashboardConfig::default());
    }

    #[test]
    fn test_with_seed() {
        let config = DashboardConfig::default().with_seed(1);
        assert_eq!(config.forest_seed, 1);
        assert_eq!(config.forest_trees, DEFAULT_FOREST_TREES);
    }
}
