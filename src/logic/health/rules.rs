//! Health Score Rules
//!
//! Penalty weights, comparison thresholds and badge thresholds.
//! Constants only, evaluation lives in `scorer`.

use serde::{Deserialize, Serialize};

// ============================================================================
// SCORE
// ============================================================================

/// Every score starts here
pub const BASE_SCORE: i32 = 100;

// ============================================================================
// PENALTY THRESHOLDS (strict comparisons)
// ============================================================================

/// sleep_hours < 7
pub const MIN_SLEEP_HOURS: u8 = 7;

/// exercise_hours < 0.5
pub const MIN_EXERCISE_HOURS: f32 = 0.5;

/// screen_time > 8
pub const MAX_SCREEN_HOURS: f32 = 8.0;

/// water_intake < 2
pub const MIN_WATER_LITRES: f32 = 2.0;

/// caffeine_intake > 4
pub const MAX_CAFFEINE_CUPS: u32 = 4;

// ============================================================================
// PENALTY WEIGHTS
// ============================================================================

pub const SLEEP_PENALTY: i32 = 15;
pub const EXERCISE_PENALTY: i32 = 10;
pub const SCREEN_PENALTY: i32 = 10;
pub const WATER_PENALTY: i32 = 10;
pub const CAFFEINE_PENALTY: i32 = 5;
pub const ALCOHOL_PENALTY: i32 = 5;
pub const JUNK_FOOD_PENALTY: i32 = 5;
pub const SMOKING_PENALTY: i32 = 15;
pub const STRESS_PENALTY: i32 = 10;

// ============================================================================
// BADGE THRESHOLDS (inclusive)
// ============================================================================

/// sleep_hours >= 8 → Sleep Champion
pub const SLEEP_CHAMPION_HOURS: u8 = 8;

/// water_intake >= 3 → Hydration Hero
pub const HYDRATION_HERO_LITRES: f32 = 3.0;

/// exercise_hours >= 0.5 → Step Starter
pub const STEP_STARTER_HOURS: f32 = 0.5;

// ============================================================================
// RULE IDENTIFIERS
// ============================================================================

/// The nine penalty rules, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyRule {
    ShortSleep,
    LowExercise,
    HighScreenTime,
    LowWater,
    HighCaffeine,
    Alcohol,
    JunkFood,
    Smoking,
    Stress,
}

impl PenaltyRule {
    pub const ALL: [PenaltyRule; 9] = [
        PenaltyRule::ShortSleep,
        PenaltyRule::LowExercise,
        PenaltyRule::HighScreenTime,
        PenaltyRule::LowWater,
        PenaltyRule::HighCaffeine,
        PenaltyRule::Alcohol,
        PenaltyRule::JunkFood,
        PenaltyRule::Smoking,
        PenaltyRule::Stress,
    ];

    pub fn penalty(&self) -> i32 {
        match self {
            PenaltyRule::ShortSleep => SLEEP_PENALTY,
            PenaltyRule::LowExercise => EXERCISE_PENALTY,
            PenaltyRule::HighScreenTime => SCREEN_PENALTY,
            PenaltyRule::LowWater => WATER_PENALTY,
            PenaltyRule::HighCaffeine => CAFFEINE_PENALTY,
            PenaltyRule::Alcohol => ALCOHOL_PENALTY,
            PenaltyRule::JunkFood => JUNK_FOOD_PENALTY,
            PenaltyRule::Smoking => SMOKING_PENALTY,
            PenaltyRule::Stress => STRESS_PENALTY,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PenaltyRule::ShortSleep => "Less than 7 hours of sleep",
            PenaltyRule::LowExercise => "Less than 30 minutes of exercise",
            PenaltyRule::HighScreenTime => "More than 8 hours of screen time",
            PenaltyRule::LowWater => "Less than 2 litres of water",
            PenaltyRule::HighCaffeine => "More than 4 cups of caffeine",
            PenaltyRule::Alcohol => "Drinks alcohol",
            PenaltyRule::JunkFood => "Eats junk food regularly",
            PenaltyRule::Smoking => "Smokes",
            PenaltyRule::Stress => "Elevated stress",
        }
    }
}
