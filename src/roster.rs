//! Roster data model and preference loading.
//!
//! A [`Roster`] is the immutable-after-load collection of persons for one
//! optimization session. Persons are addressed by [`PersonId`] (their
//! position in roster order); room membership lives on the
//! [`Assignment`](crate::assignment::Assignment), never on the person.
//!
//! Preference names that do not resolve to a roster member are tolerated:
//! they are skipped when the effective preference list is built, so they
//! never contribute a rank and a roommate matching one is scored with the
//! unranked penalty. Duplicate person names and self-preferences are load
//! errors.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, RoomsortError};

/// Stable index of a person in roster order.
pub type PersonId = usize;

/// One individual to be housed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Unique name, used as the key in preference lists.
    pub name: String,

    /// Preferred roommate names, most preferred first. Fixed after load.
    pub preferences: Vec<String>,
}

/// The complete, ordered collection of persons for one session.
#[derive(Debug, Clone)]
pub struct Roster {
    persons: Vec<Person>,
    index: HashMap<String, PersonId>,
    /// Per person: preference list resolved to ids, unresolved names skipped.
    resolved: Vec<Vec<PersonId>>,
}

impl Roster {
    /// Builds a roster from `(name, preferences)` records.
    ///
    /// # Errors
    ///
    /// [`RoomsortError::DuplicateName`] if two records share a name,
    /// [`RoomsortError::SelfPreference`] if a record lists its own name.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut persons = Vec::new();
        let mut index = HashMap::new();

        for (name, preferences) in records {
            if preferences.contains(&name) {
                return Err(RoomsortError::SelfPreference(name));
            }
            if index.insert(name.clone(), persons.len()).is_some() {
                return Err(RoomsortError::DuplicateName(name));
            }
            persons.push(Person { name, preferences });
        }

        let resolved = persons
            .iter()
            .map(|p| {
                p.preferences
                    .iter()
                    .filter_map(|name| index.get(name).copied())
                    .collect()
            })
            .collect();

        Ok(Self {
            persons,
            index,
            resolved,
        })
    }

    /// Parses comma-delimited records, one person per line:
    /// `name, pref_1, pref_2, …, pref_k` with `k` variable per line.
    ///
    /// Fields are trimmed; blank lines and empty trailing fields are
    /// skipped. A record with an empty name is an error.
    pub fn parse(input: &str) -> Result<Self> {
        let mut records = Vec::new();

        for (n, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split(',').map(str::trim);
            let name = fields.next().unwrap_or("");
            if name.is_empty() {
                return Err(RoomsortError::Parse {
                    line: n + 1,
                    message: "record has no name".into(),
                });
            }

            let preferences = fields
                .filter(|f| !f.is_empty())
                .map(str::to_owned)
                .collect();
            records.push((name.to_owned(), preferences));
        }

        Self::from_records(records)
    }

    /// Reads and parses a roster file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Number of persons.
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Whether the roster has no persons.
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// The person with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn person(&self, id: PersonId) -> &Person {
        &self.persons[id]
    }

    /// All persons in roster order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Looks up a person by name.
    pub fn id_of(&self, name: &str) -> Option<PersonId> {
        self.index.get(name).copied()
    }

    /// The person's preference list resolved to ids, in preference order.
    /// Unresolved names are absent.
    pub fn resolved_preferences(&self, id: PersonId) -> &[PersonId] {
        &self.resolved[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let roster = Roster::parse("ada, grace, lin\ngrace, ada\nlin\n").unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.person(0).name, "ada");
        assert_eq!(roster.person(0).preferences, vec!["grace", "lin"]);
        assert_eq!(roster.person(2).preferences, Vec::<String>::new());
        assert_eq!(roster.id_of("grace"), Some(1));
        assert_eq!(roster.id_of("nobody"), None);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_empty_fields() {
        let roster = Roster::parse("ada, grace,\n\n  \ngrace, ada\n").unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.person(0).preferences, vec!["grace"]);
    }

    #[test]
    fn test_parse_empty_name_rejected() {
        let err = Roster::parse("ada, grace\n, ada\n").unwrap_err();
        assert!(matches!(
            err,
            RoomsortError::Parse { line: 2, .. }
        ));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = Roster::parse("ada, grace\nada, lin\n").unwrap_err();
        assert!(matches!(err, RoomsortError::DuplicateName(name) if name == "ada"));
    }

    #[test]
    fn test_self_preference_rejected() {
        let err = Roster::parse("ada, ada\n").unwrap_err();
        assert!(matches!(err, RoomsortError::SelfPreference(name) if name == "ada"));
    }

    #[test]
    fn test_unresolved_preferences_skipped() {
        let roster = Roster::parse("ada, ghost, grace\ngrace, ada\n").unwrap();

        // "ghost" resolves to nobody; grace keeps her effective rank 0.
        assert_eq!(roster.resolved_preferences(0), &[1]);
        assert_eq!(roster.person(0).preferences.len(), 2);
    }

    #[test]
    fn test_empty_roster_allowed() {
        let roster = Roster::parse("").unwrap();
        assert!(roster.is_empty());
    }
}
