//! Fixed-shape game trees with random leaf scores

use std::ops::Range;

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Evaluation score stored in leaves and returned by searches
pub type Score = i32;

/// Largest tree (in nodes) that [`GameTree::generate`] will build.
pub const MAX_TREE_NODES: usize = 5_000_000;

/// Deepest tree that [`GameTree::generate`] will build. Generation, counting,
/// searching and dropping all recurse once per level.
pub const MAX_TREE_DEPTH: u32 = 256;

/// A node of a game tree: a scored leaf or an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameNode {
    Leaf(Score),
    Branch(Vec<GameNode>),
}

impl GameNode {
    /// Build an internal node from its children.
    pub fn branch<I>(children: I) -> Self
    where
        I: IntoIterator<Item = GameNode>,
    {
        GameNode::Branch(children.into_iter().collect())
    }

    /// Recursively generate a subtree with `width` children per internal node
    /// and leaves drawn uniformly from `leaf_range`.
    ///
    /// Callers must ensure `leaf_range` is non-empty.
    fn generate<R: Rng + ?Sized>(
        depth: u32,
        width: usize,
        leaf_range: &Range<Score>,
        rng: &mut R,
    ) -> Self {
        if depth == 0 {
            return GameNode::Leaf(rng.random_range(leaf_range.clone()));
        }

        let children = (0..width)
            .map(|_| GameNode::generate(depth - 1, width, leaf_range, rng))
            .collect();
        GameNode::Branch(children)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, GameNode::Leaf(_))
    }

    pub fn children(&self) -> &[GameNode] {
        match self {
            GameNode::Leaf(_) => &[],
            GameNode::Branch(children) => children,
        }
    }

    /// Total number of nodes in this subtree, leaves and internal nodes alike.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(GameNode::node_count)
            .sum::<usize>()
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            GameNode::Leaf(_) => 1,
            GameNode::Branch(children) => children.iter().map(GameNode::leaf_count).sum(),
        }
    }

    /// Leaf scores in left-to-right order.
    pub fn leaves(&self) -> Vec<Score> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, out: &mut Vec<Score>) {
        match self {
            GameNode::Leaf(value) => out.push(*value),
            GameNode::Branch(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}

impl From<Score> for GameNode {
    fn from(value: Score) -> Self {
        GameNode::Leaf(value)
    }
}

/// Number of nodes in a complete tree of the given shape, or `None` on overflow.
///
/// # Examples
///
/// ```
/// use automata_search::search::node_count_for;
///
/// assert_eq!(node_count_for(0, 3), Some(1));
/// assert_eq!(node_count_for(2, 2), Some(7));
/// assert_eq!(node_count_for(5, 3), Some(364));
/// ```
pub fn node_count_for(depth: u32, width: usize) -> Option<usize> {
    let mut total: usize = 1;
    let mut level: usize = 1;
    for _ in 0..depth {
        level = level.checked_mul(width)?;
        total = total.checked_add(level)?;
    }
    Some(total)
}

/// Check that a tree of this shape can be generated.
pub(crate) fn validate_shape(depth: u32, width: usize, leaf_range: &Range<Score>) -> Result<()> {
    if depth > MAX_TREE_DEPTH {
        return Err(Error::InvalidConfiguration {
            message: format!("depth {depth} exceeds the limit of {MAX_TREE_DEPTH} levels"),
        });
    }
    if depth > 0 && width == 0 {
        return Err(Error::InvalidConfiguration {
            message: "width must be at least 1 when depth is greater than 0".to_string(),
        });
    }
    if leaf_range.is_empty() {
        return Err(Error::InvalidConfiguration {
            message: format!(
                "leaf range {}..{} is empty",
                leaf_range.start, leaf_range.end
            ),
        });
    }
    match node_count_for(depth, width) {
        Some(nodes) if nodes <= MAX_TREE_NODES => Ok(()),
        _ => Err(Error::InvalidConfiguration {
            message: format!(
                "depth {depth} with width {width} exceeds the limit of {MAX_TREE_NODES} nodes"
            ),
        }),
    }
}

/// A complete game tree together with its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTree {
    root: GameNode,
    depth: u32,
    width: usize,
}

impl GameTree {
    /// Wrap an existing root.
    ///
    /// Depth and width are read off the leftmost path and the root, so they
    /// only describe the whole tree when it is uniform (as generated trees
    /// are). Counts, leaves and searches are exact for any shape.
    pub fn new(root: GameNode) -> Self {
        let width = root.children().len();
        let mut depth = 0;
        let mut node = &root;
        while let Some(first) = node.children().first() {
            depth += 1;
            node = first;
        }
        Self { root, depth, width }
    }

    /// Generate a tree of fixed `depth` and `width` with leaf scores drawn
    /// uniformly from `leaf_range`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `width` is 0 for a non-leaf
    /// tree, `leaf_range` is empty, `depth` exceeds [`MAX_TREE_DEPTH`], or the
    /// tree would exceed [`MAX_TREE_NODES`].
    ///
    /// # Examples
    ///
    /// ```
    /// use automata_search::search::GameTree;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let tree = GameTree::generate(3, 2, -100..100, &mut rng).unwrap();
    /// assert_eq!(tree.node_count(), 15);
    /// assert_eq!(tree.leaf_count(), 8);
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        depth: u32,
        width: usize,
        leaf_range: Range<Score>,
        rng: &mut R,
    ) -> Result<Self> {
        validate_shape(depth, width, &leaf_range)?;
        let root = GameNode::generate(depth, width, &leaf_range, rng);
        log::debug!("generated tree depth={depth} width={width}");
        // A lone leaf has no children regardless of the requested width.
        let width = if depth == 0 { 0 } else { width };
        Ok(Self { root, depth, width })
    }

    pub fn root(&self) -> &GameNode {
        &self.root
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn leaves(&self) -> Vec<Score> {
        self.root.leaves()
    }

    /// Draw up to `count` leaf scores with replacement.
    ///
    /// The sample size is capped at the number of leaves in the tree.
    pub fn sample_leaves<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Score> {
        let leaves = self.leaves();
        let count = count.min(leaves.len());
        (0..count)
            .filter_map(|_| leaves.choose(rng).copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_generate_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let tree = GameTree::generate(5, 3, -100..100, &mut rng).unwrap();

        assert_eq!(tree.depth(), 5);
        assert_eq!(tree.width(), 3);
        assert_eq!(tree.node_count(), 364);
        assert_eq!(tree.leaf_count(), 243);
        assert!(tree.leaves().iter().all(|v| (-100..100).contains(v)));
    }

    #[test]
    fn test_depth_zero_is_single_leaf() {
        let mut rng = StdRng::seed_from_u64(2);
        let tree = GameTree::generate(0, 4, 5..6, &mut rng).unwrap();

        assert_eq!(tree.root(), &GameNode::Leaf(5));
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.width(), 0);
    }

    #[test]
    fn test_same_seed_same_tree() {
        let a = GameTree::generate(4, 3, -100..100, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = GameTree::generate(4, 3, -100..100, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_invalid_shapes() {
        let mut rng = StdRng::seed_from_u64(3);

        let err = GameTree::generate(2, 0, -10..10, &mut rng).unwrap_err();
        assert!(err.to_string().contains("width"));

        let err = GameTree::generate(2, 2, 10..10, &mut rng).unwrap_err();
        assert!(err.to_string().contains("empty"));

        let err = GameTree::generate(64, 2, -10..10, &mut rng).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_depth_limit_bounds_narrow_trees() {
        let mut rng = StdRng::seed_from_u64(5);

        let err = GameTree::generate(1_000_000, 1, -10..10, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("levels"));

        let err = GameTree::generate(MAX_TREE_DEPTH + 1, 1, -10..10, &mut rng).unwrap_err();
        assert!(err.to_string().contains("levels"));

        let tree = GameTree::generate(MAX_TREE_DEPTH, 1, -10..10, &mut rng).unwrap();
        assert_eq!(tree.node_count(), MAX_TREE_DEPTH as usize + 1);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_uneven_tree_counts_are_exact() {
        let tree = GameTree::new(GameNode::branch([
            GameNode::Leaf(1),
            GameNode::branch([GameNode::Leaf(2), GameNode::Leaf(3), GameNode::Leaf(4)]),
        ]));

        // Shape comes from the root and the leftmost path only.
        assert_eq!(tree.width(), 2);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.leaves(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_new_reads_shape_from_root() {
        let tree = GameTree::new(GameNode::branch([
            GameNode::branch([GameNode::Leaf(1), GameNode::Leaf(2)]),
            GameNode::branch([GameNode::Leaf(3), GameNode::Leaf(4)]),
        ]));

        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.width(), 2);
        assert_eq!(tree.leaves(), vec![1, 2, 3, 4]);
        assert_eq!(tree.node_count(), 7);
    }

    #[test]
    fn test_sample_is_capped_at_leaf_count() {
        let mut rng = StdRng::seed_from_u64(4);
        let tree = GameTree::generate(1, 3, 0..50, &mut rng).unwrap();
        let leaves = tree.leaves();

        let sample = tree.sample_leaves(10, &mut rng);
        assert_eq!(sample.len(), 3);
        assert!(sample.iter().all(|v| leaves.contains(v)));

        let sample = tree.sample_leaves(2, &mut rng);
        assert_eq!(sample.len(), 2);
    }

    #[test]
    fn test_node_count_for_overflow() {
        assert_eq!(node_count_for(3, 0), Some(1));
        assert_eq!(node_count_for(200, usize::MAX), None);
    }
}
