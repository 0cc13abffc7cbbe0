//! Health Scorer
//!
//! Input: validated AttributeRecord
//! Output: ScoreResult (score, badges, fired penalties)
//!
//! Every rule is evaluated independently and penalties add up. Overlapping
//! conditions are charged twice and the total is never clamped.

use super::rules::*;
use super::types::{Badge, PenaltyHit, ScoreResult};
use crate::logic::features::{AttributeRecord, Level};

// ============================================================================
// MAIN SCORING FUNCTION
// ============================================================================

pub fn score(record: &AttributeRecord) -> ScoreResult {
    let penalties: Vec<PenaltyHit> = PenaltyRule::ALL
        .into_iter()
        .filter(|rule| rule_fires(*rule, record))
        .map(|rule| PenaltyHit {
            rule,
            penalty: rule.penalty(),
            reason: reason(rule, record),
        })
        .collect();

    let score = BASE_SCORE - penalties.iter().map(|p| p.penalty).sum::<i32>();

    log::debug!(
        "Health score {} ({} penalties fired)",
        score,
        penalties.len()
    );

    ScoreResult {
        score,
        badges: earned_badges(record),
        penalties,
    }
}

pub fn rule_fires(rule: PenaltyRule, record: &AttributeRecord) -> bool {
    match rule {
        PenaltyRule::ShortSleep => record.sleep_hours < MIN_SLEEP_HOURS,
        PenaltyRule::LowExercise => record.exercise_hours < MIN_EXERCISE_HOURS,
        PenaltyRule::HighScreenTime => record.screen_time > MAX_SCREEN_HOURS,
        PenaltyRule::LowWater => record.water_intake < MIN_WATER_LITRES,
        PenaltyRule::HighCaffeine => record.caffeine_intake > MAX_CAFFEINE_CUPS,
        PenaltyRule::Alcohol => record.alcohol_consumption.is_yes(),
        PenaltyRule::JunkFood => record.junk_food_frequency != Level::Low,
        PenaltyRule::Smoking => record.smoking.is_yes(),
        PenaltyRule::Stress => record.stress_level != Level::Low,
    }
}

pub fn earned_badges(record: &AttributeRecord) -> Vec<Badge> {
    let mut badges = Vec::new();
    if record.sleep_hours >= SLEEP_CHAMPION_HOURS {
        badges.push(Badge::SleepChampion);
    }
    if record.water_intake >= HYDRATION_HERO_LITRES {
        badges.push(Badge::HydrationHero);
    }
    if record.exercise_hours >= STEP_STARTER_HOURS {
        badges.push(Badge::StepStarter);
    }
    badges
}

fn reason(rule: PenaltyRule, record: &AttributeRecord) -> String {
    match rule {
        PenaltyRule::ShortSleep => {
            format!("Sleep {}h < {}h", record.sleep_hours, MIN_SLEEP_HOURS)
        }
        PenaltyRule::LowExercise => {
            format!("Exercise {}h < {}h", record.exercise_hours, MIN_EXERCISE_HOURS)
        }
        PenaltyRule::HighScreenTime => {
            format!("Screen time {}h > {}h", record.screen_time, MAX_SCREEN_HOURS)
        }
        PenaltyRule::LowWater => {
            format!("Water {}L < {}L", record.water_intake, MIN_WATER_LITRES)
        }
        PenaltyRule::HighCaffeine => {
            format!("Caffeine {} cups > {}", record.caffeine_intake, MAX_CAFFEINE_CUPS)
        }
        PenaltyRule::JunkFood => format!("Junk food frequency {}", record.junk_food_frequency),
        PenaltyRule::Stress => format!("Stress level {}", record.stress_level),
        PenaltyRule::Alcohol | PenaltyRule::Smoking => rule.description().to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
