//! Random Forest - bagged CART ensemble
//!
//! One `StdRng` seeded from `ForestParams::seed` drives every bootstrap draw
//! and every split-feature shuffle, trees are fit in order, so the same seed
//! always yields the same forest.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::tree::{DecisionTree, TreeNode};
use super::Classifier;
use crate::logic::error::{HealthError, HealthResult};

// ============================================================================
// PARAMETERS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestParams {
    pub n_trees: usize,
    /// Candidate columns per split; `None` = ⌊√n_features⌋
    pub max_features: Option<usize>,
    pub bootstrap: bool,
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_trees: crate::constants::DEFAULT_FOREST_TREES,
            max_features: None,
            bootstrap: true,
            seed: crate::constants::DEFAULT_FOREST_SEED,
        }
    }
}

impl ForestParams {
    pub fn resolved_max_features(&self, n_features: usize) -> usize {
        self.max_features
            .unwrap_or_else(|| (n_features as f64).sqrt().floor() as usize)
            .clamp(1, n_features.max(1))
    }
}

// ============================================================================
// FOREST
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_classes: usize,
    n_features: usize,
    params: ForestParams,
}

impl RandomForest {
    pub fn fit(x: &Array2<f32>, y: &[usize], params: ForestParams) -> HealthResult<Self> {
        let (n_rows, n_features) = x.dim();

        if n_rows == 0 || n_features == 0 {
            return Err(HealthError::schema("training_matrix", "empty"));
        }
        if y.len() != n_rows {
            return Err(HealthError::schema(
                "training_labels",
                format!("{} labels for {} rows", y.len(), n_rows),
            ));
        }
        if params.n_trees == 0 {
            return Err(HealthError::schema("n_trees", "must be at least 1"));
        }

        let n_classes = y.iter().copied().max().map_or(0, |m| m + 1);
        let max_features = params.resolved_max_features(n_features);
        let mut rng = StdRng::seed_from_u64(params.seed);

        let trees = (0..params.n_trees)
            .map(|_| {
                let samples: Vec<usize> = if params.bootstrap {
                    (0..n_rows).map(|_| rng.gen_range(0..n_rows)).collect()
                } else {
                    (0..n_rows).collect()
                };
                DecisionTree::fit(x, y, &samples, n_classes, max_features, &mut rng)
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Forest fit: {} trees, {} classes, max_features={}, mean depth {:.1}",
            trees.len(),
            n_classes,
            max_features,
            trees.iter().map(|t| t.depth() as f32).sum::<f32>() / trees.len() as f32
        );

        Ok(Self {
            trees,
            n_classes,
            n_features,
            params,
        })
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn params(&self) -> &ForestParams {
        &self.params
    }

    /// SHA-256 over every node of every tree, hex encoded
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.trees.len() as u64).to_le_bytes());
        hasher.update((self.n_classes as u64).to_le_bytes());

        for tree in &self.trees {
            hasher.update((tree.nodes().len() as u64).to_le_bytes());
            for node in tree.nodes() {
                match node {
                    TreeNode::Leaf { distribution } => {
                        hasher.update([0u8]);
                        for p in distribution {
                            hasher.update(p.to_le_bytes());
                        }
                    }
                    TreeNode::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        hasher.update([1u8]);
                        hasher.update((*feature as u64).to_le_bytes());
                        hasher.update(threshold.to_le_bytes());
                        hasher.update((*left as u64).to_le_bytes());
                        hasher.update((*right as u64).to_le_bytes());
                    }
                }
            }
        }

        hex::encode(hasher.finalize())
    }
}

impl Classifier for RandomForest {
    fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Mean of the trees' leaf distributions (soft voting)
    fn predict_proba(&self, row: &[f32]) -> Vec<f32> {
        let mut sum = vec![0.0f32; self.n_classes];
        for tree in &self.trees {
            for (acc, p) in sum.iter_mut().zip(tree.predict_proba(row)) {
                *acc += p;
            }
        }
        let n = self.trees.len().max(1) as f32;
        sum.iter().map(|s| s / n).collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
