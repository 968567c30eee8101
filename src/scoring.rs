//! Unhappiness scoring.
//!
//! A person's unhappiness is summed over everyone sharing their room:
//! nothing for themselves, the 0-based preference rank for a roommate they
//! ranked, and a fixed penalty of twice their preference-list length for a
//! roommate they did not rank. The penalty is strictly larger than any
//! achievable in-list rank, so an unranked roommate is always worse than
//! any ranked one, also when list lengths differ between persons.
//!
//! Ranks index the *effective* preference list (unresolved names skipped);
//! the penalty uses the preference list as loaded. Lower is better; all
//! functions are pure and recompute from the current assignment.

use crate::assignment::Assignment;
use crate::roster::{PersonId, Roster};

/// Non-negative unhappiness, summable per room or roster-wide.
pub type Score = u64;

/// One person's unhappiness with their current room.
pub fn person_unhappiness(roster: &Roster, assignment: &Assignment, person: PersonId) -> Score {
    let prefs = roster.resolved_preferences(person);
    let penalty = 2 * roster.person(person).preferences.len() as Score;

    assignment
        .room_members(assignment.room_of(person))
        .iter()
        .map(|&other| {
            if other == person {
                0
            } else if let Some(rank) = prefs.iter().position(|&p| p == other) {
                rank as Score
            } else {
                penalty
            }
        })
        .sum()
}

/// Summed unhappiness of one room's members.
pub fn room_unhappiness(roster: &Roster, assignment: &Assignment, room: usize) -> Score {
    assignment
        .room_members(room)
        .iter()
        .map(|&person| person_unhappiness(roster, assignment, person))
        .sum()
}

/// Summed unhappiness of the whole roster.
pub fn total_unhappiness(roster: &Roster, assignment: &Assignment) -> Score {
    (0..assignment.person_count())
        .map(|person| person_unhappiness(roster, assignment, person))
        .sum()
}
