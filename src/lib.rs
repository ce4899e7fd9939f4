//! Two small search exercises
//!
//! This crate provides:
//! - A deterministic finite-state recognizer for the `(ab)+(cd)*` language
//! - Synthetic fixed-shape game trees with random leaf scores
//! - Exhaustive minimax and alpha-beta pruned minimax with node-visit counters
//! - A comparator reporting values, node counts and timings for both searches

pub mod app;
pub mod cli;
pub mod error;
pub mod recognizer;
pub mod search;
pub mod utils;

pub use app::ComparatorConfig;
pub use error::{Error, Result};
pub use recognizer::{State, accepts};
pub use search::{AlphaBeta, ComparisonReport, GameNode, GameTree, Minimax, SearchStrategy};
