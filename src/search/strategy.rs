//! Minimax search strategies over a [`GameNode`] tree
//!
//! Both strategies count one node visit per recursive call, so the counters
//! can be compared directly: exhaustive minimax visits every node exactly
//! once, alpha-beta visits a subset.

use super::tree::{GameNode, Score};

/// Stand-in for negative infinity when no child has been scored yet.
pub const NEG_INF: Score = Score::MIN;
/// Stand-in for positive infinity when no child has been scored yet.
pub const POS_INF: Score = Score::MAX;

/// A search strategy that values the root of a game tree.
///
/// Implementations keep their own visit counters; [`SearchStrategy::reset`]
/// clears them so one instance can be reused across trees.
pub trait SearchStrategy {
    /// Human-readable name used in reports
    fn name(&self) -> &'static str;

    /// Value of `root` with the maximizing player to move if `maximizing`.
    fn search(&mut self, root: &GameNode, maximizing: bool) -> Score;

    /// Nodes visited since the last reset.
    fn nodes_visited(&self) -> usize;

    /// Times iteration over siblings was cut short since the last reset.
    fn cutoffs(&self) -> usize {
        0
    }

    fn reset(&mut self);
}

/// Exhaustive minimax.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    nodes: usize,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaf value, or the max (min) over children evaluated for the other side.
    pub fn evaluate(&mut self, node: &GameNode, maximizing: bool) -> Score {
        self.nodes += 1;

        let children = match node {
            GameNode::Leaf(value) => return *value,
            GameNode::Branch(children) => children,
        };

        if maximizing {
            children
                .iter()
                .fold(NEG_INF, |best, child| best.max(self.evaluate(child, false)))
        } else {
            children
                .iter()
                .fold(POS_INF, |best, child| best.min(self.evaluate(child, true)))
        }
    }
}

impl SearchStrategy for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn search(&mut self, root: &GameNode, maximizing: bool) -> Score {
        self.evaluate(root, maximizing)
    }

    fn nodes_visited(&self) -> usize {
        self.nodes
    }

    fn reset(&mut self) {
        self.nodes = 0;
    }
}

/// Minimax with alpha-beta pruning.
#[derive(Debug, Clone, Default)]
pub struct AlphaBeta {
    nodes: usize,
    cutoffs: usize,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimax value of `node` searched inside the window `(alpha, beta)`.
    ///
    /// `alpha` is the best value the maximizer is already assured of, `beta`
    /// the best the minimizer is assured of. Once `beta <= alpha` the
    /// remaining siblings cannot change the result and are skipped.
    pub fn evaluate(
        &mut self,
        node: &GameNode,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.nodes += 1;

        let children = match node {
            GameNode::Leaf(value) => return *value,
            GameNode::Branch(children) => children,
        };

        if maximizing {
            let mut best = NEG_INF;
            for (index, child) in children.iter().enumerate() {
                best = best.max(self.evaluate(child, false, alpha, beta));
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.record_cutoff(index, children.len());
                    break;
                }
            }
            best
        } else {
            let mut best = POS_INF;
            for (index, child) in children.iter().enumerate() {
                best = best.min(self.evaluate(child, true, alpha, beta));
                beta = beta.min(best);
                if beta <= alpha {
                    self.record_cutoff(index, children.len());
                    break;
                }
            }
            best
        }
    }

    // Only count a cutoff when it actually skips a sibling.
    fn record_cutoff(&mut self, index: usize, len: usize) {
        if index + 1 < len {
            self.cutoffs += 1;
        }
    }
}

impl SearchStrategy for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn search(&mut self, root: &GameNode, maximizing: bool) -> Score {
        self.evaluate(root, maximizing, NEG_INF, POS_INF)
    }

    fn nodes_visited(&self) -> usize {
        self.nodes
    }

    fn cutoffs(&self) -> usize {
        self.cutoffs
    }

    fn reset(&mut self) {
        self.nodes = 0;
        self.cutoffs = 0;
    }
}
