//! Feature Layout - column order of the model input
//!
//! The forest is trained and queried with vectors in exactly this order.
//! Add, remove or reorder a column → increment FEATURE_VERSION.

use crc32fast::Hasher;

use crate::logic::error::HealthError;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Bumped on any column change
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// COLUMNS
// ============================================================================

/// Column names in the exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    "sleep_hours",         // 0: hours of sleep per night
    "exercise_hours",      // 1: hours of exercise per day
    "screen_time",         // 2: screen hours per day
    "stress_level",        // 3: encoded Low/Medium/High
    "caffeine_intake",     // 4: cups per day
    "alcohol_consumption", // 5: encoded Yes/No
    "work_hours",          // 6: work hours per day
    "water_intake",        // 7: litres per day
    "junk_food_frequency", // 8: encoded Low/Medium/High
    "smoking",             // 9: encoded Yes/No
];

/// Must equal FEATURE_LAYOUT.len()
pub const FEATURE_COUNT: usize = 10;

/// Columns whose values go through a `CategoryEncoding`
pub const CATEGORICAL_FEATURES: &[&str] = &[
    "stress_level",
    "alcohol_consumption",
    "junk_food_frequency",
    "smoking",
];

/// Name of the label column
pub const LABEL_COLUMN: &str = "disorder";

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over version + column names, used to detect layout mismatches
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Validate that a vector was built against the current layout
pub fn validate_layout(version: u8, hash: u32) -> Result<(), HealthError> {
    let current_hash = layout_hash();

    if version != FEATURE_VERSION || hash != current_hash {
        return Err(HealthError::CorpusMismatch(format!(
            "feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            FEATURE_VERSION, current_hash, version, hash
        )));
    }

    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}


// ============================================================================
// TESTS
// ============================================================================
