//! Solver configuration.

use crate::error::{Result, RoomsortError};

/// Configuration for the restart solver.
///
/// # Examples
///
/// ```
/// use roomsort::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_rooms(4)
///     .with_trials(200)
///     .with_max_passes(500)
///     .with_seed(42);
/// assert_eq!(config.rooms, 4);
/// assert_eq!(config.trials, 200);
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Number of rooms to partition the roster into.
    pub rooms: usize,

    /// Number of independent random-restart trials.
    pub trials: usize,

    /// Maximum local-search passes per trial. Convergence usually stops a
    /// trial well before this ceiling; it bounds the anti-stall swaps.
    pub max_passes: usize,

    /// Random seed for reproducibility (None for entropy).
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rooms: 2,
            trials: 50,
            max_passes: 200,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the number of rooms.
    pub fn with_rooms(mut self, rooms: usize) -> Self {
        self.rooms = rooms;
        self
    }

    /// Sets the number of restart trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the per-trial pass ceiling.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`RoomsortError::Config`] if any count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.rooms == 0 {
            return Err(RoomsortError::Config("rooms must be at least 1".into()));
        }
        if self.trials == 0 {
            return Err(RoomsortError::Config("trials must be at least 1".into()));
        }
        if self.max_passes == 0 {
            return Err(RoomsortError::Config("max_passes must be at least 1".into()));
        }
        Ok(())
    }
}
