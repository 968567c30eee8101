//! Human-readable rendering of a finished assignment.
//!
//! Formatting is for people reading a console, not for parsing; the exact
//! layout is not contractual.

use std::fmt::Write;

use crate::assignment::Assignment;
use crate::roster::Roster;
use crate::scoring::{person_unhappiness, room_unhappiness, total_unhappiness};

/// Renders room membership with per-person, per-room, and roster totals.
pub fn render(roster: &Roster, assignment: &Assignment) -> String {
    let mut out = String::new();

    for (room, members) in assignment.rooms().iter().enumerate() {
        let _ = write!(
            out,
            "room {room} (unhappiness {}):",
            room_unhappiness(roster, assignment, room)
        );

        if members.is_empty() {
            out.push_str(" (empty)");
        }
        for (i, &person) in members.iter().enumerate() {
            let _ = write!(
                out,
                "{} {} ({})",
                if i == 0 { "" } else { " |" },
                roster.person(person).name,
                person_unhappiness(roster, assignment, person)
            );
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "total unhappiness: {}",
        total_unhappiness(roster, assignment)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_rooms_and_totals() {
        let roster = Roster::parse("ada, grace\ngrace, ada\nlin\n").unwrap();
        let asg = Assignment::new(3, 2);
        // Room 0: ada + lin, room 1: grace.

        let text = render(&roster, &asg);

        assert!(text.contains("room 0 (unhappiness 2)"));
        assert!(text.contains("ada (2)"));
        assert!(text.contains("lin (0)"));
        assert!(text.contains("room 1 (unhappiness 0)"));
        assert!(text.contains("grace (0)"));
        assert!(text.contains("total unhappiness: 2"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_render_marks_empty_rooms() {
        let roster = Roster::parse("ada\n").unwrap();
        let asg = Assignment::new(1, 2);

        let text = render(&roster, &asg);

        assert!(text.contains("room 1 (unhappiness 0): (empty)"));
    }
}
