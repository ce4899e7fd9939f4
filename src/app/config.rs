//! Configuration for the game-tree search comparator.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    search::{Score, tree::validate_shape},
};

/// Configuration for a comparator run.
///
/// This type provides a builder-style API; [`ComparatorConfig::validate`]
/// checks it before any tree is generated.
///
/// # Examples
///
/// ```
/// use automata_search::app::ComparatorConfig;
///
/// let config = ComparatorConfig::new(4, 2)
///     .with_leaf_range(-10, 10)
///     .with_sample_size(5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparatorConfig {
    /// Tree depth; leaves sit at depth 0
    pub depth: u32,
    /// Children per internal node
    pub width: usize,
    /// Smallest leaf score (inclusive)
    pub leaf_min: Score,
    /// Largest leaf score (exclusive)
    pub leaf_max: Score,
    /// Number of leaf values to show
    pub sample_size: usize,
    /// Number of independent trees to compare
    pub trials: usize,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl ComparatorConfig {
    /// Create a configuration for a tree of the given shape.
    ///
    /// Uses default values for other parameters:
    /// - Leaf range: `[-100, 100)`
    /// - Sample size: 10
    /// - Trials: 1
    /// - Seed: None (non-deterministic)
    pub fn new(depth: u32, width: usize) -> Self {
        Self {
            depth,
            width,
            leaf_min: -100,
            leaf_max: 100,
            sample_size: 10,
            trials: 1,
            seed: None,
        }
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the leaf score range `[min, max)`.
    pub fn with_leaf_range(mut self, min: Score, max: Score) -> Self {
        self.leaf_min = min;
        self.leaf_max = max;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn leaf_range(&self) -> Range<Score> {
        self.leaf_min..self.leaf_max
    }

    /// Check the configuration describes a tree that can be generated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if trials is 0, width is 0 for
    /// a non-leaf tree, the leaf range is empty, the depth exceeds
    /// [`MAX_TREE_DEPTH`](crate::search::tree::MAX_TREE_DEPTH), or the tree is
    /// too large.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::InvalidConfiguration {
                message: "trials must be at least 1".to_string(),
            });
        }
        validate_shape(self.depth, self.width, &self.leaf_range())
    }
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self::new(5, 3)
    }
}
