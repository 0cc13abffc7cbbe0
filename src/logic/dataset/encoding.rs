//! Category Encodings
//!
//! Each categorical column gets a bijection `value <-> 0..n`. Indices are
//! assigned in order of first appearance while scanning the corpus rows in
//! index order, so the table is fully determined by the embedded rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::corpus::TrainingCorpus;
use super::label::DisorderLabel;
use crate::logic::error::{HealthError, HealthResult};
use crate::logic::features::{
    AttributeRecord, FeatureVector, Level, YesNo, FEATURE_COUNT, LABEL_COLUMN,
};

// ============================================================================
// SINGLE COLUMN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEncoding {
    field: String,
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

impl CategoryEncoding {
    /// Build from observed values, first sight wins the next index
    pub fn from_observed<'a, I>(field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut classes = Vec::new();
        let mut index = HashMap::new();

        for value in values {
            if !index.contains_key(value) {
                index.insert(value.to_string(), classes.len());
                classes.push(value.to_string());
            }
        }

        Self {
            field: field.to_string(),
            classes,
            index,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn encode(&self, value: &str) -> HealthResult<usize> {
        self.index
            .get(value)
            .copied()
            .ok_or_else(|| HealthError::unknown_category(&self.field, value))
    }

    pub fn decode(&self, index: usize) -> HealthResult<&str> {
        self.classes
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| HealthError::unknown_category(&self.field, &index.to_string()))
    }

    /// Observed values must be exactly the compiled-in domain
    pub fn validate_domain(&self, domain: &[&str]) -> HealthResult<()> {
        let missing: Vec<&str> = domain
            .iter()
            .copied()
            .filter(|d| !self.index.contains_key(*d))
            .collect();
        let extra: Vec<&str> = self
            .classes
            .iter()
            .map(String::as_str)
            .filter(|c| !domain.contains(c))
            .collect();

        if !missing.is_empty() || !extra.is_empty() {
            return Err(HealthError::CorpusMismatch(format!(
                "{}: missing {:?}, unexpected {:?}",
                self.field, missing, extra
            )));
        }
        Ok(())
    }
}

// ============================================================================
// ALL COLUMNS
// ============================================================================

/// The five encodings derived from the corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEncodings {
    pub stress_level: CategoryEncoding,
    pub alcohol_consumption: CategoryEncoding,
    pub junk_food_frequency: CategoryEncoding,
    pub smoking: CategoryEncoding,
    pub disorder: CategoryEncoding,
}

impl CategoryEncodings {
    pub fn from_corpus(corpus: &TrainingCorpus) -> HealthResult<Self> {
        let build = |field: &str| CategoryEncoding::from_observed(field, corpus.column(field));

        let encodings = Self {
            stress_level: build("stress_level"),
            alcohol_consumption: build("alcohol_consumption"),
            junk_food_frequency: build("junk_food_frequency"),
            smoking: build("smoking"),
            disorder: build(LABEL_COLUMN),
        };

        let levels = Level::ALL.map(|l| l.as_str());
        let yes_no = YesNo::ALL.map(|v| v.as_str());
        let labels = DisorderLabel::ALL.map(|l| l.as_str());

        encodings.stress_level.validate_domain(&levels)?;
        encodings.alcohol_consumption.validate_domain(&yes_no)?;
        encodings.junk_food_frequency.validate_domain(&levels)?;
        encodings.smoking.validate_domain(&yes_no)?;
        encodings.disorder.validate_domain(&labels)?;

        log::debug!(
            "Category encodings: stress={:?} alcohol={:?} junk={:?} smoking={:?} disorder={:?}",
            encodings.stress_level.classes(),
            encodings.alcohol_consumption.classes(),
            encodings.junk_food_frequency.classes(),
            encodings.smoking.classes(),
            encodings.disorder.classes(),
        );

        Ok(encodings)
    }

    pub fn get(&self, field: &str) -> Option<&CategoryEncoding> {
        match field {
            "stress_level" => Some(&self.stress_level),
            "alcohol_consumption" => Some(&self.alcohol_consumption),
            "junk_food_frequency" => Some(&self.junk_food_frequency),
            "smoking" => Some(&self.smoking),
            LABEL_COLUMN => Some(&self.disorder),
            _ => None,
        }
    }

    /// Encode a validated record into layout order
    pub fn encode_record(&self, record: &AttributeRecord) -> HealthResult<FeatureVector> {
        record.validate()?;

        let values: [f32; FEATURE_COUNT] = [
            f32::from(record.sleep_hours),
            record.exercise_hours,
            record.screen_time,
            self.stress_level.encode(record.stress_level.as_str())? as f32,
            record.caffeine_intake as f32,
            self.alcohol_consumption.encode(record.alcohol_consumption.as_str())? as f32,
            record.work_hours,
            record.water_intake,
            self.junk_food_frequency.encode(record.junk_food_frequency.as_str())? as f32,
            self.smoking.encode(record.smoking.as_str())? as f32,
        ];

        Ok(FeatureVector::new(values))
    }

    pub fn decode_label(&self, index: usize) -> HealthResult<DisorderLabel> {
        DisorderLabel::parse(self.disorder.decode(index)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::CATEGORICAL_FEATURES;

    fn encodings() -> CategoryEncodings {
        CategoryEncodings::from_corpus(&TrainingCorpus::embedded()).unwrap()
    }

    #[test]
    fn test_first_appearance_order() {
        let enc = encodings();
        assert_eq!(enc.stress_level.classes(), ["High", "Low", "Medium"]);
        assert_eq!(enc.alcohol_consumption.classes(), ["Yes", "No"]);
        assert_eq!(enc.junk_food_frequency.classes(), ["High", "Low", "Medium"]);
        assert_eq!(enc.smoking.classes(), ["Yes", "No"]);
        assert_eq!(
            enc.disorder.classes(),
            ["Insomnia", "Healthy", "Mild Sleep Apnea", "Severe Sleep Apnea"]
        );
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let enc = encodings();
        let fields = CATEGORICAL_FEATURES.iter().copied().chain([LABEL_COLUMN]);
        for field in fields {
            let e = enc.get(field).unwrap();
            for value in TrainingCorpus::embedded().column(field) {
                let idx = e.encode(value).unwrap();
                assert_eq!(e.decode(idx).unwrap(), value, "{} round trip", field);
            }
        }
    }

    #[test]
    fn test_unknown_category_is_error() {
        let enc = encodings();
        assert_eq!(
            enc.stress_level.encode("Extreme"),
            Err(HealthError::unknown_category("stress_level", "Extreme"))
        );
        assert!(enc.disorder.decode(4).is_err());
    }

    #[test]
    fn test_validate_domain_detects_gap() {
        let partial = CategoryEncoding::from_observed("stress_level", ["High", "Low"]);
        let err = partial.validate_domain(&["Low", "Medium", "High"]).unwrap_err();
        assert!(matches!(err, HealthError::CorpusMismatch(_)));

        let extra = CategoryEncoding::from_observed("smoking", ["Yes", "No", "Sometimes"]);
        assert!(extra.validate_domain(&["Yes", "No"]).is_err());
    }

    #[test]
    fn test_decode_label() {
        let enc = encodings();
        assert_eq!(enc.decode_label(3).unwrap(), DisorderLabel::SevereSleepApnea);
        assert_eq!(enc.decode_label(1).unwrap(), DisorderLabel::Healthy);
    }
}
