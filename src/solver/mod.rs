//! Pairwise-swap hill climbing with random restarts.
//!
//! A single-solution trajectory search: each trial starts from a fresh
//! random partition and repeatedly tries to swap the rooms of adjacent
//! persons in the current unhappiness ranking, keeping the first swap that
//! lowers the roster total. A trial converges when a pass brings no
//! improvement (or the pass ceiling is hit); independent restarts keep the
//! best converged partition.
//!
//! Only swaps among the currently unhappiest persons are tried, not all
//! C(N,2) pairs; this trades optimality for speed and is deliberately a
//! greedy heuristic, not an exact solver.
//!
//! # References
//!
//! - Hoos & Stützle (2004), *Stochastic Local Search: Foundations and
//!   Applications*, ch. 1 (iterative improvement, random restart)
//! - Russell & Norvig, *AIMA* §4.1 (hill climbing, random-restart variant)

mod climb;
mod config;
mod runner;

pub use climb::{HillClimb, SearchState};
pub use config::SolverConfig;
pub use runner::{SolverResult, SolverRunner};
