//! Multi-restart execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::climb::HillClimb;
use super::config::SolverConfig;
use crate::assignment::Assignment;
use crate::error::Result;
use crate::roster::Roster;
use crate::scoring::{total_unhappiness, Score};

/// Result of a restart-solver run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult {
    /// The best partition found across all trials (a snapshot, not a live
    /// reference into any trial's state).
    pub best: Assignment,

    /// Total unhappiness of the best partition.
    pub best_score: Score,

    /// Trial that produced the best partition.
    pub best_trial: usize,

    /// Trials actually completed (less than configured when cancelled).
    pub trials_run: usize,

    /// Evolve passes executed across all trials.
    pub passes_total: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Each trial's converged score, in trial order.
    pub score_history: Vec<Score>,
}

/// Executes independent randomized trials and retains the best result.
pub struct SolverRunner;

impl SolverRunner {
    /// Runs the configured number of restart trials.
    ///
    /// # Errors
    ///
    /// [`RoomsortError::Config`](crate::error::RoomsortError::Config) if
    /// the configuration is invalid; rejected before any trial starts.
    pub fn run(roster: &Roster, config: &SolverConfig) -> Result<SolverResult> {
        Self::run_with_cancel(roster, config, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// The flag is checked at trial boundaries; when set, the best result
    /// so far is returned with `cancelled = true`. If no trial completed,
    /// the result holds the deterministic round-robin partition.
    pub fn run_with_cancel(
        roster: &Roster,
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolverResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };

        let mut best: Option<(Assignment, Score, usize)> = None;
        let mut score_history = Vec::with_capacity(config.trials);
        let mut passes_total = 0;
        let mut trials_run = 0;
        let mut cancelled = false;

        for trial in 0..config.trials {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let mut assignment = Assignment::new(roster.len(), config.rooms);
            assignment.randomize(&mut rng);

            let mut climb = HillClimb::new(roster, assignment);
            climb.run(config.max_passes);
            passes_total += climb.passes();

            let (converged, score) = climb.into_best();
            trials_run += 1;
            score_history.push(score);
            tracing::trace!(trial, score, "trial converged");

            if best.as_ref().is_none_or(|&(_, b, _)| score < b) {
                tracing::debug!(trial, score, "new best assignment");
                best = Some((converged, score, trial));
            }
        }

        let (best, best_score, best_trial) = best.unwrap_or_else(|| {
            // Cancelled before the first trial completed.
            let assignment = Assignment::new(roster.len(), config.rooms);
            let score = total_unhappiness(roster, &assignment);
            (assignment, score, 0)
        });

        tracing::debug!(
            best_score,
            best_trial,
            trials_run,
            passes_total,
            cancelled,
            "solver run finished"
        );

        Ok(SolverResult {
            best,
            best_score,
            best_trial,
            trials_run,
            passes_total,
            cancelled,
            score_history,
        })
    }
}
