//! Error handling

use thiserror::Error;

pub type HealthResult<T> = Result<T, HealthError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HealthError {
    /// Categorical value outside the corpus-derived domain
    #[error("unknown category for {field}: {value:?}")]
    UnknownCategory { field: String, value: String },

    /// Missing field or numeric value outside its domain
    #[error("schema mismatch on {field}: {reason}")]
    SchemaMismatch { field: String, reason: String },

    /// Calculator / timer input outside the accepted range
    #[error("{name} = {value} is outside [{min}, {max}]")]
    InvalidMeasurement {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Corpus-derived tables disagree with the compiled-in schema
    #[error("corpus mismatch: {0}")]
    CorpusMismatch(String),
}

impl HealthError {
    pub fn unknown_category(field: &str, value: &str) -> Self {
        HealthError::UnknownCategory {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn schema(field: &str, reason: impl Into<String>) -> Self {
        HealthError::SchemaMismatch {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn measurement(name: &str, value: f64, min: f64, max: f64) -> Self {
        HealthError::InvalidMeasurement {
            name: name.to_string(),
            value,
            min,
            max,
        }
    }
}
