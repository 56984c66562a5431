use serde::{Deserialize, Serialize};

use super::FEATURE_COUNT;
use crate::repository::ModelError;

/// A node of a binary decision tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal node. Samples with `x[feature] <= threshold` go left.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },

    /// Terminal node holding the (weighted) class counts of its training samples
    Leaf { counts: [f64; 2] },
}

/// Decision tree stored as a flat node array; node 0 is the root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Check the tree is well formed.
    ///
    /// Children must have a higher index than their parent, which rules out
    /// cycles and guarantees `leaf_for` terminates.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::Invalid("decision tree has no nodes".to_string()));
        }

        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(ModelError::Invalid(format!(
                            "node {} splits on unknown feature {}",
                            index, feature
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(ModelError::Invalid(format!(
                            "node {} has a non-finite threshold",
                            index
                        )));
                    }
                    for child in [left, right] {
                        if *child <= index || *child >= self.nodes.len() {
                            return Err(ModelError::Invalid(format!(
                                "node {} has invalid child index {}",
                                index, child
                            )));
                        }
                    }
                }
                TreeNode::Leaf { counts } => {
                    if counts.iter().any(|c| !c.is_finite() || *c < 0.0) {
                        return Err(ModelError::Invalid(format!(
                            "leaf {} has negative or non-finite counts",
                            index
                        )));
                    }
                    if counts.iter().sum::<f64>() <= 0.0 {
                        return Err(ModelError::Invalid(format!("leaf {} is empty", index)));
                    }
                }
            }
        }

        Ok(())
    }

    /// Walk from the root to the leaf that `scaled` falls into
    pub fn leaf_for(&self, scaled: &[f64; FEATURE_COUNT]) -> Result<&[f64; 2], ModelError> {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    index = if scaled[*feature] <= *threshold { *left } else { *right };
                }
                Some(TreeNode::Leaf { counts }) => return Ok(counts),
                None => {
                    return Err(ModelError::Invalid(format!(
                        "tree walk reached missing node {}",
                        index
                    )))
                }
            }
        }
    }
}
