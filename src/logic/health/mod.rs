//! Health Module - rule-based wellness score and badges
//!
//! ## Structure
//! - `types`: Badge, PenaltyHit, ScoreResult
//! - `rules`: thresholds, weights, rule identifiers
//! - `scorer`: evaluation
//!
//! ## Usage
//! ```ignore
//! let result = health::score(&record);
//! println!("{}/100 {:?}", result.score, result.badge_names());
//! ```

pub mod rules;
pub mod scorer;
pub mod types;

pub use rules::{PenaltyRule, BASE_SCORE};
pub use scorer::{earned_badges, rule_fires, score};
pub use types::{Badge, PenaltyHit, ScoreResult};
