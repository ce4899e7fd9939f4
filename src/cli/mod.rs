//! CLI infrastructure for the automata-search toolkit
//!
//! This module provides the command-line interface for running the pattern
//! recognizer and the game-tree search comparator.

pub mod commands;
pub mod output;
