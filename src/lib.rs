//! Roommate assignment optimization.
//!
//! Assigns a fixed set of people to a fixed number of equally-sized rooms,
//! maximizing aggregate satisfaction with ranked roommate preferences. Each
//! person supplies an ordered list of preferred roommates; the solver searches
//! room assignments for one minimizing a summed "unhappiness" score.
//!
//! The search is a greedy heuristic, not an exact solver:
//!
//! - **Scoring**: a person's unhappiness is the sum over roommates of the
//!   roommate's rank in their preference list, with a fixed penalty for
//!   roommates they did not rank at all ([`scoring`]).
//! - **Local search**: pairwise-swap hill climbing over the currently
//!   unhappiest persons, with an unconditional anti-stall swap when no
//!   adjacent pair improves ([`solver::HillClimb`]).
//! - **Random restarts**: independent trials from fresh random partitions,
//!   retaining the best converged result ([`solver::SolverRunner`]).
//!
//! # Example
//!
//! ```
//! use roomsort::roster::Roster;
//! use roomsort::solver::{SolverConfig, SolverRunner};
//!
//! let roster = Roster::parse("ada, grace\ngrace, ada\nlin, ada\nmax, lin\n")?;
//! let config = SolverConfig::default()
//!     .with_rooms(2)
//!     .with_trials(20)
//!     .with_seed(42);
//!
//! let result = SolverRunner::run(&roster, &config)?;
//! println!("{}", roomsort::report::render(&roster, &result.best));
//! # Ok::<(), roomsort::error::RoomsortError>(())
//! ```

pub mod assignment;
pub mod error;
pub mod report;
pub mod roster;
pub mod scoring;
pub mod solver;
