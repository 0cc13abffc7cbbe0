//! Feature Vector - model input
//!
//! Versioned feature vector carrying the layout hash it was built against.

use serde::{Deserialize, Serialize};

use super::layout::{feature_index, layout_hash, validate_layout, FEATURE_COUNT, FEATURE_VERSION};
use crate::logic::error::HealthResult;

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 of the layout
    pub layout_hash: u32,
    /// Values in FEATURE_LAYOUT order
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn new(values: [f32; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        feature_index(name).map(|i| self.values[i])
    }

    /// Fails when the vector was built against another layout
    pub fn validate(&self) -> HealthResult<()> {
        validate_layout(self.version, self.layout_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vector_is_valid() {
        let v = FeatureVector::new([1.0; FEATURE_COUNT]);
        assert!(v.validate().is_ok());
        assert_eq!(v.get("water_intake"), Some(1.0));
        assert_eq!(v.get("disorder"), None);
    }

    #[test]
    fn test_foreign_layout_rejected() {
        let mut v = FeatureVector::new([0.0; FEATURE_COUNT]);
        v.layout_hash ^= 1;
        assert!(v.validate().is_err());
    }
}
