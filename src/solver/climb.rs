//! Pairwise-swap local search for a single trial.

use crate::assignment::Assignment;
use crate::roster::{PersonId, Roster};
use crate::scoring::{person_unhappiness, total_unhappiness, Score};

/// Lifecycle of one trial's search. `Converged` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Passes are still finding improvements.
    Running,
    /// A pass brought no improvement; the trial is done.
    Converged,
}

/// Hill climbing over one assignment.
///
/// Each pass ranks persons from unhappiest to happiest (ties broken by
/// roster order, so rankings are deterministic) and walks adjacent pairs in
/// that ranking, swapping their rooms and keeping the first swap that
/// lowers the roster total. A pass with no improving pair ends with one
/// unconditional swap of the two unhappiest persons, an anti-stall kick
/// that is not undone.
///
/// The climb tracks the best partition seen across pass boundaries, so a
/// trailing kick never worsens the trial's reported result.
pub struct HillClimb<'r> {
    roster: &'r Roster,
    assignment: Assignment,
    best: Assignment,
    best_score: Score,
    last_score: Score,
    passes: usize,
    state: SearchState,
}

impl<'r> HillClimb<'r> {
    /// Starts a climb on an already-populated assignment.
    ///
    /// # Panics
    ///
    /// Panics if the assignment does not cover the full roster.
    pub fn new(roster: &'r Roster, assignment: Assignment) -> Self {
        assert_eq!(
            assignment.person_count(),
            roster.len(),
            "assignment does not cover the roster"
        );

        let score = total_unhappiness(roster, &assignment);
        Self {
            roster,
            best: assignment.clone(),
            assignment,
            best_score: score,
            last_score: score,
            passes: 0,
            state: SearchState::Running,
        }
    }

    /// Runs one evolve pass and returns the resulting roster total.
    ///
    /// Marks the search [`SearchState::Converged`] when the returned total
    /// is not strictly below the previous pass's total.
    pub fn pass(&mut self) -> Score {
        let baseline = total_unhappiness(self.roster, &self.assignment);
        let order = self.unhappiness_ranking();

        let mut score = baseline;
        if order.len() >= 2 {
            let mut improved = false;
            for i in 0..order.len() - 1 {
                let (a, b) = (order[i], order[i + 1]);
                self.assignment.swap(a, b);
                let total = total_unhappiness(self.roster, &self.assignment);
                if total < baseline {
                    score = total;
                    improved = true;
                    break;
                }
                self.assignment.swap(a, b);
            }

            if !improved {
                // Anti-stall kick: swap the two unhappiest overall, kept.
                self.assignment.swap(order[0], order[1]);
                score = total_unhappiness(self.roster, &self.assignment);
            }
        }

        self.passes += 1;
        if score < self.best_score {
            self.best = self.assignment.clone();
            self.best_score = score;
        }
        if score >= self.last_score {
            self.state = SearchState::Converged;
        } else {
            self.last_score = score;
        }

        tracing::trace!(pass = self.passes, score, baseline, "evolve pass");
        score
    }

    /// Runs passes until convergence or the pass ceiling, returning the
    /// best total seen.
    pub fn run(&mut self, max_passes: usize) -> Score {
        while self.state == SearchState::Running && self.passes < max_passes {
            self.pass();
        }
        self.best_score
    }

    /// Consumes the climb, yielding the best partition and its total.
    pub fn into_best(self) -> (Assignment, Score) {
        (self.best, self.best_score)
    }

    /// Current search state.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Passes executed so far.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Best total seen so far.
    pub fn best_score(&self) -> Score {
        self.best_score
    }

    /// The assignment as currently evolved (including any kick).
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Person ids from unhappiest to happiest; equal scores keep roster
    /// order (stable sort).
    fn unhappiness_ranking(&self) -> Vec<PersonId> {
        let scores: Vec<Score> = (0..self.roster.len())
            .map(|p| person_unhappiness(self.roster, &self.assignment, p))
            .collect();

        let mut order: Vec<PersonId> = (0..self.roster.len()).collect();
        order.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
        order
    }
}
