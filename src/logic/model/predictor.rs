//! Category Predictor
//!
//! Owns the corpus, the category encodings and the trained forest. Built once
//! at startup, read-only afterwards.

use serde::{Deserialize, Serialize};

use super::forest::{ForestParams, RandomForest};
use super::Classifier;
use crate::logic::config::DashboardConfig;
use crate::logic::dataset::{CategoryEncodings, DisorderLabel, TrainingCorpus};
use crate::logic::error::{HealthError, HealthResult};
use crate::logic::features::layout::layout_hash;
use crate::logic::features::{AttributeRecord, FeatureVector, FEATURE_COUNT};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_type: String,
    pub n_trees: usize,
    pub seed: u64,
    pub features: usize,
    pub classes: usize,
    pub training_rows: usize,
    pub layout_hash: u32,
    /// SHA-256 of the fitted forest
    pub fingerprint: String,
    pub trained_at: chrono::DateTime<chrono::Utc>,
}

/// Vote share for one label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassShare {
    pub label: DisorderLabel,
    pub share: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: DisorderLabel,
    /// Share of the winning label
    pub confidence: f32,
    /// In encoding index order
    pub shares: Vec<ClassShare>,
}

#[derive(Debug, Clone)]
pub struct CategoryPredictor {
    corpus: TrainingCorpus,
    encodings: CategoryEncodings,
    forest: RandomForest,
    metadata: ModelMetadata,
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl CategoryPredictor {
    /// Encode the corpus and fit the forest
    pub fn train(corpus: TrainingCorpus, config: &DashboardConfig) -> HealthResult<Self> {
        let encodings = CategoryEncodings::from_corpus(&corpus)?;
        let (x, y) = corpus.to_matrix(&encodings)?;

        let params = ForestParams {
            n_trees: config.forest_trees,
            seed: config.forest_seed,
            ..Default::default()
        };
        let forest = RandomForest::fit(&x, &y, params)?;

        let metadata = ModelMetadata {
            model_type: "random_forest".to_string(),
            n_trees: forest.trees().len(),
            seed: config.forest_seed,
            features: FEATURE_COUNT,
            classes: encodings.disorder.len(),
            training_rows: corpus.len(),
            layout_hash: layout_hash(),
            fingerprint: forest.fingerprint(),
            trained_at: chrono::Utc::now(),
        };

        log::info!(
            "Category predictor trained: {} trees on {} rows (seed {}, fingerprint {})",
            metadata.n_trees,
            metadata.training_rows,
            metadata.seed,
            &metadata.fingerprint[..12]
        );

        Ok(Self {
            corpus,
            encodings,
            forest,
            metadata,
        })
    }

    pub fn corpus(&self) -> &TrainingCorpus {
        &self.corpus
    }

    pub fn encodings(&self) -> &CategoryEncodings {
        &self.encodings
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    // ========================================================================
    // ENCODING
    // ========================================================================

    pub fn encode(&self, record: &AttributeRecord) -> HealthResult<FeatureVector> {
        self.encodings.encode_record(record)
    }

    /// Encode one raw categorical value, e.g. ("stress_level", "High")
    pub fn encode_value(&self, field: &str, value: &str) -> HealthResult<usize> {
        self.encodings
            .get(field)
            .ok_or_else(|| HealthError::schema(field, "not a categorical field"))?
            .encode(value)
    }

    // ========================================================================
    // PREDICTION
    // ========================================================================

    pub fn predict(&self, record: &AttributeRecord) -> HealthResult<DisorderLabel> {
        Ok(self.predict_detailed(record)?.label)
    }

    pub fn predict_detailed(&self, record: &AttributeRecord) -> HealthResult<Prediction> {
        let vector = self.encode(record)?;
        self.predict_vector(&vector)
    }

    pub fn predict_vector(&self, vector: &FeatureVector) -> HealthResult<Prediction> {
        vector.validate()?;

        let proba = self.forest.predict_proba(vector.as_array());
        let index = self.forest.predict(vector.as_array());
        let label = self.encodings.decode_label(index)?;

        let shares = proba
            .iter()
            .enumerate()
            .map(|(i, &share)| {
                Ok(ClassShare {
                    label: self.encodings.decode_label(i)?,
                    share,
                })
            })
            .collect::<HealthResult<Vec<_>>>()?;

        log::debug!("Prediction: {} ({:.2})", label, proba[index]);

        Ok(Prediction {
            label,
            confidence: proba[index],
            shares,
        })
    }
}
