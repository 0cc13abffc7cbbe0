//! Dashboard defaults
//!
//! Forest and timer defaults, each overridable through a HEALTH_* variable.

/// Default random seed for the forest (bootstrap + feature sampling)
pub const DEFAULT_FOREST_SEED: u64 = 42;

/// Default number of trees in the forest
pub const DEFAULT_FOREST_TREES: usize = 100;

/// Default meditation duration (minutes)
pub const DEFAULT_TIMER_MINUTES: u32 = 2;

/// Shortest / longest meditation the timer accepts (minutes)
pub const MIN_TIMER_MINUTES: u32 = 1;
pub const MAX_TIMER_MINUTES: u32 = 10;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Sleep & Lifestyle Health Dashboard";

// ============================================
// Env overrides (invalid values fall back)
// ============================================

/// Get forest seed from environment or use default
pub fn get_forest_seed() -> u64 {
    std::env::var("HEALTH_FOREST_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FOREST_SEED)
}

/// Get tree count from environment or use default
pub fn get_forest_trees() -> usize {
    std::env::var("HEALTH_FOREST_TREES")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|&n: &usize| n > 0)
        .unwrap_or(DEFAULT_FOREST_TREES)
}

/// Get default meditation minutes from environment or use default
pub fn get_timer_minutes() -> u32 {
    std::env::var("HEALTH_TIMER_MINUTES")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|m| (MIN_TIMER_MINUTES..=MAX_TIMER_MINUTES).contains(m))
        .unwrap_or(DEFAULT_TIMER_MINUTES)
}
