//! Game-tree search: synthetic tree generation and two minimax strategies
//!
//! A [`GameTree`] of fixed depth and width is filled with random leaf scores
//! and then evaluated with exhaustive [`Minimax`] and with [`AlphaBeta`]
//! pruning. [`comparison`] runs both over the same tree and reports values,
//! node visits and timings.

pub mod comparison;
pub mod strategy;
pub mod tree;

pub use comparison::{
    ComparisonReport, SearchOutcome, StrategySummary, TrialSummary, compare, measure, run,
    run_trials,
};
pub use strategy::{AlphaBeta, Minimax, SearchStrategy};
pub use tree::{GameNode, GameTree, Score, node_count_for};
