//! Health Score Types
//!
//! Data structures only.

use serde::{Deserialize, Serialize};

use super::rules::PenaltyRule;

// ============================================================================
// BADGES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "Sleep Champion")]
    SleepChampion,
    #[serde(rename = "Hydration Hero")]
    HydrationHero,
    #[serde(rename = "Step Starter")]
    StepStarter,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::SleepChampion => "Sleep Champion",
            Badge::HydrationHero => "Hydration Hero",
            Badge::StepStarter => "Step Starter",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Badge::SleepChampion => "🥇",
            Badge::HydrationHero => "💧",
            Badge::StepStarter => "🚶",
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// PENALTY HIT
// ============================================================================

/// One rule that fired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyHit {
    pub rule: PenaltyRule,
    pub penalty: i32,
    pub reason: String,
}

// ============================================================================
// SCORE RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 100 minus every fired penalty, not clamped
    pub score: i32,
    /// Earned badges, in rule order
    pub badges: Vec<Badge>,
    /// Fired penalties, in rule order
    pub penalties: Vec<PenaltyHit>,
}

impl ScoreResult {
    pub fn badge_names(&self) -> Vec<&'static str> {
        self.badges.iter().map(Badge::as_str).collect()
    }

    pub fn total_penalty(&self) -> i32 {
        self.penalties.iter().map(|p| p.penalty).sum()
    }
}
