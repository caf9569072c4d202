//! Query helpers over resolved type data
//!
//! This module provides the matchup scoring used to compare two creatures
//! once their types have been resolved for a generation.

mod matchup;

pub use matchup::{Matchup, compute_matchup};
