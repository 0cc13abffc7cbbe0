//! Decision Tree (CART, Gini impurity)
//!
//! Grown until every leaf is pure or the node's rows can no longer be told
//! apart. At each node a random subset of `max_features` columns is searched;
//! when none of them can split the node the remaining columns are searched
//! too, so a separable node is always split.

use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Classifier;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    /// Class proportions of the training rows that reached this leaf
    Leaf { distribution: Vec<f32> },
    /// `row[feature] <= threshold` goes left
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
    n_classes: usize,
}

/// Best split found for a node
#[derive(Debug, Clone, Copy)]
struct SplitCandidate {
    feature: usize,
    threshold: f32,
    impurity: f32,
}

struct Builder<'a, R: Rng> {
    x: &'a Array2<f32>,
    y: &'a [usize],
    n_classes: usize,
    max_features: usize,
    rng: &'a mut R,
    nodes: Vec<TreeNode>,
}

// ============================================================================
// FIT
// ============================================================================

impl DecisionTree {
    /// Fit on the rows listed in `samples` (duplicates = bootstrap weight)
    pub fn fit<R: Rng>(
        x: &Array2<f32>,
        y: &[usize],
        samples: &[usize],
        n_classes: usize,
        max_features: usize,
        rng: &mut R,
    ) -> Self {
        let mut builder = Builder {
            x,
            y,
            n_classes,
            max_features: max_features.clamp(1, x.ncols().max(1)),
            rng,
            nodes: Vec::new(),
        };
        builder.build(samples.to_vec());

        Self {
            nodes: builder.nodes,
            n_classes,
        }
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn depth(&self) -> usize {
        fn walk(nodes: &[TreeNode], idx: usize) -> usize {
            match &nodes[idx] {
                TreeNode::Leaf { .. } => 0,
                TreeNode::Split { left, right, .. } => {
                    1 + walk(nodes, *left).max(walk(nodes, *right))
                }
            }
        }
        if self.nodes.is_empty() {
            0
        } else {
            walk(&self.nodes, 0)
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, TreeNode::Leaf { .. }))
            .count()
    }

    fn leaf_for(&self, row: &[f32]) -> Option<&[f32]> {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx)? {
                TreeNode::Leaf { distribution } => return Some(distribution),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = row.get(*feature).copied().unwrap_or(0.0);
                    idx = if value <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

impl Classifier for DecisionTree {
    fn n_classes(&self) -> usize {
        self.n_classes
    }

    fn predict_proba(&self, row: &[f32]) -> Vec<f32> {
        self.leaf_for(row)
            .map(<[f32]>::to_vec)
            .unwrap_or_else(|| vec![0.0; self.n_classes])
    }
}

impl<'a, R: Rng> Builder<'a, R> {
    /// Push the subtree for `samples`, return its node index
    fn build(&mut self, samples: Vec<usize>) -> usize {
        let counts = self.class_counts(&samples);
        let node_idx = self.nodes.len();
        self.nodes.push(leaf(&counts));

        if counts.iter().filter(|&&c| c > 0).count() <= 1 {
            return node_idx;
        }

        let Some(split) = self.best_split(&samples) else {
            return node_idx;
        };

        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = samples
            .into_iter()
            .partition(|&s| self.x[[s, split.feature]] <= split.threshold);

        let left = self.build(left_rows);
        let right = self.build(right_rows);

        self.nodes[node_idx] = TreeNode::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        node_idx
    }

    fn class_counts(&self, samples: &[usize]) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_classes];
        for &s in samples {
            counts[self.y[s]] += 1;
        }
        counts
    }

    fn best_split(&mut self, samples: &[usize]) -> Option<SplitCandidate> {
        let mut features: Vec<usize> = (0..self.x.ncols()).collect();
        features.shuffle(&mut *self.rng);

        let mut best: Option<SplitCandidate> = None;
        let mut visited = 0;

        for feature in features {
            if visited >= self.max_features && best.is_some() {
                break;
            }
            let Some(candidate) = self.best_threshold(samples, feature) else {
                continue; // constant in this node
            };
            visited += 1;
            if best.map_or(true, |b| candidate.impurity < b.impurity) {
                best = Some(candidate);
            }
        }

        best
    }

    /// Lowest weighted child Gini over midpoints of `feature`
    fn best_threshold(&self, samples: &[usize], feature: usize) -> Option<SplitCandidate> {
        let mut pairs: Vec<(f32, usize)> = samples
            .iter()
            .map(|&s| (self.x[[s, feature]], self.y[s]))
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        let total = pairs.len();
        let mut right = vec![0usize; self.n_classes];
        for &(_, class) in &pairs {
            right[class] += 1;
        }
        let mut left = vec![0usize; self.n_classes];

        let mut best: Option<SplitCandidate> = None;
        for i in 0..total - 1 {
            let class = pairs[i].1;
            left[class] += 1;
            right[class] -= 1;

            if pairs[i].0 == pairs[i + 1].0 {
                continue;
            }

            let n_left = i + 1;
            let n_right = total - n_left;
            let impurity = (n_left as f32 * gini(&left, n_left)
                + n_right as f32 * gini(&right, n_right))
                / total as f32;

            if best.map_or(true, |b| impurity < b.impurity) {
                best = Some(SplitCandidate {
                    feature,
                    threshold: (pairs[i].0 + pairs[i + 1].0) / 2.0,
                    impurity,
                });
            }
        }

        best
    }
}

fn gini(counts: &[usize], n: usize) -> f32 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f32;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f32 / n;
            p * p
        })
        .sum::<f32>()
}

fn leaf(counts: &[usize]) -> TreeNode {
    let total: usize = counts.iter().sum();
    let distribution = counts
        .iter()
        .map(|&c| if total > 0 { c as f32 / total as f32 } else { 0.0 })
        .collect();
    TreeNode::Leaf { distribution }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gini() {
        assert_eq!(gini(&[4, 0], 4), 0.0);
        assert!((gini(&[2, 2], 4) - 0.5).abs() < 1e-6);
        assert_eq!(gini(&[0, 0], 0), 0.0);
    }

    #[test]
    fn test_perfect_fit_on_separable_data() {
        let x = Array2::from_shape_vec((4, 1), vec![0.0, 1.0, 10.0, 11.0]).unwrap();
        let y = vec![0, 0, 1, 1];
        let mut rng = StdRng::seed_from_u64(1);

        let tree = DecisionTree::fit(&x, &y, &[0, 1, 2, 3], 2, 1, &mut rng);

        assert_eq!(tree.predict(&[0.5]), 0);
        assert_eq!(tree.predict(&[10.5]), 1);
        assert_eq!(tree.depth(), 1);
        match &tree.nodes()[0] {
            TreeNode::Split { threshold, .. } => assert_eq!(*threshold, 5.5),
            other => panic!("expected split, got {:?}", other),
        }
    }

    #[test]
    fn test_constant_feature_falls_back_to_others() {
        // Column 0 constant, column 1 separates; max_features = 1
        let x = Array2::from_shape_vec((4, 2), vec![1.0, 0.0, 1.0, 0.0, 1.0, 5.0, 1.0, 5.0])
            .unwrap();
        let y = vec![0, 0, 1, 1];

        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let tree = DecisionTree::fit(&x, &y, &[0, 1, 2, 3], 2, 1, &mut rng);
            assert_eq!(tree.predict(&[1.0, 0.0]), 0);
            assert_eq!(tree.predict(&[1.0, 5.0]), 1);
        }
    }

    #[test]
    fn test_pure_node_is_single_leaf() {
        let x = Array2::from_shape_vec((3, 1), vec![1.0, 2.0, 3.0]).unwrap();
        let y = vec![2, 2, 2];
        let mut rng = StdRng::seed_from_u64(0);

        let tree = DecisionTree::fit(&x, &y, &[0, 1, 2], 3, 1, &mut rng);

        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.predict_proba(&[9.0]), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_indistinguishable_rows_keep_mixed_leaf() {
        let x = Array2::from_shape_vec((2, 1), vec![3.0, 3.0]).unwrap();
        let y = vec![0, 1];
        let mut rng = StdRng::seed_from_u64(0);

        let tree = DecisionTree::fit(&x, &y, &[0, 1], 2, 1, &mut rng);

        assert_eq!(tree.predict_proba(&[3.0]), vec![0.5, 0.5]);
        // Ties go to the lowest class index
        assert_eq!(tree.predict(&[3.0]), 0);
    }
}
