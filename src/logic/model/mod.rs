//! Model Module - Category Predictor
//!
//! Training and inference are split so the forest can be swapped without
//! touching encoding or the dashboard commands.

pub mod forest;
pub mod predictor;
pub mod tree;

#[cfg(test)]
mod tests;

pub use forest::{ForestParams, RandomForest};
pub use predictor::{CategoryPredictor, ClassShare, ModelMetadata, Prediction};
pub use tree::{DecisionTree, TreeNode};

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Anything that maps a feature row to class probabilities
pub trait Classifier {
    fn n_classes(&self) -> usize;

    fn predict_proba(&self, row: &[f32]) -> Vec<f32>;

    /// Arg-max class, lowest index wins ties
    fn predict(&self, row: &[f32]) -> usize {
        let proba = self.predict_proba(row);
        let mut best = 0;
        for (i, &p) in proba.iter().enumerate() {
            if p > proba[best] {
                best = i;
            }
        }
        best
    }
}
