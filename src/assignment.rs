//! The room partition: random initialization and single-person moves.
//!
//! An [`Assignment`] partitions a roster into a fixed number of rooms. It
//! maintains two synchronized views (per-room member lists and a
//! person-to-room index) and keeps them consistent after every operation:
//! at all times every person is in exactly one room.
//!
//! Misuse (an unknown person id, a room index out of range) is a
//! programming error and panics; a silently corrupted partition would
//! invalidate all subsequent scoring.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::roster::PersonId;

/// A partition of persons into rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    rooms: Vec<Vec<PersonId>>,
    room_of: Vec<usize>,
}

impl Assignment {
    /// Creates a partition of `person_count` persons into `room_count`
    /// rooms, distributed round-robin (person `i` into room `i % R`).
    ///
    /// # Panics
    ///
    /// Panics if `room_count` is zero.
    pub fn new(person_count: usize, room_count: usize) -> Self {
        assert!(room_count > 0, "room_count must be at least 1");

        let mut rooms = vec![Vec::new(); room_count];
        let mut room_of = Vec::with_capacity(person_count);
        for person in 0..person_count {
            let room = person % room_count;
            rooms[room].push(person);
            room_of.push(room);
        }
        Self { rooms, room_of }
    }

    /// Reassigns everyone at random: shuffles a permutation of all persons
    /// and distributes it round-robin, so room sizes differ by at most one.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for room in &mut self.rooms {
            room.clear();
        }

        let mut order: Vec<PersonId> = (0..self.room_of.len()).collect();
        order.shuffle(rng);

        for (i, &person) in order.iter().enumerate() {
            let room = i % self.rooms.len();
            self.rooms[room].push(person);
            self.room_of[person] = room;
        }
    }

    /// Moves one person to the given room, updating both views.
    ///
    /// Moving a person to the room they already occupy is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `person` is not tracked by this assignment or `room` is
    /// out of range.
    pub fn move_person(&mut self, person: PersonId, room: usize) {
        assert!(
            person < self.room_of.len(),
            "unknown person id {person} (roster has {})",
            self.room_of.len()
        );
        assert!(
            room < self.rooms.len(),
            "room index {room} out of range (0..{})",
            self.rooms.len()
        );

        let from = self.room_of[person];
        if from == room {
            return;
        }

        let pos = self.rooms[from]
            .iter()
            .position(|&p| p == person)
            .unwrap_or_else(|| panic!("partition corrupted: person {person} not in room {from}"));
        self.rooms[from].remove(pos);
        self.room_of[person] = room;
        self.rooms[room].push(person);
    }

    /// Exchanges two persons' rooms.
    pub fn swap(&mut self, a: PersonId, b: PersonId) {
        let room_a = self.room_of(a);
        let room_b = self.room_of(b);
        self.move_person(a, room_b);
        self.move_person(b, room_a);
    }

    /// Number of persons in the partition.
    pub fn person_count(&self) -> usize {
        self.room_of.len()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// The room the person currently occupies.
    ///
    /// # Panics
    ///
    /// Panics if `person` is out of range.
    pub fn room_of(&self, person: PersonId) -> usize {
        self.room_of[person]
    }

    /// Members of the given room.
    ///
    /// # Panics
    ///
    /// Panics if `room` is out of range.
    pub fn room_members(&self, room: usize) -> &[PersonId] {
        &self.rooms[room]
    }

    /// All rooms with their members.
    pub fn rooms(&self) -> &[Vec<PersonId>] {
        &self.rooms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Every person in exactly one room, and `room_of` agrees with it.
    fn assert_partition(asg: &Assignment) {
        let mut seen = vec![0usize; asg.person_count()];
        for (room, members) in asg.rooms().iter().enumerate() {
            for &person in members {
                seen[person] += 1;
                assert_eq!(asg.room_of(person), room);
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_new_round_robin() {
        let asg = Assignment::new(7, 3);

        assert_partition(&asg);
        assert_eq!(asg.room_members(0), &[0, 3, 6]);
        assert_eq!(asg.room_members(1), &[1, 4]);
        assert_eq!(asg.room_members(2), &[2, 5]);
    }

    #[test]
    #[should_panic(expected = "room_count must be at least 1")]
    fn test_new_zero_rooms_panics() {
        Assignment::new(4, 0);
    }

    #[test]
    fn test_randomize_preserves_partition_and_balance() {
        let mut asg = Assignment::new(10, 4);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20 {
            asg.randomize(&mut rng);
            assert_partition(&asg);
            for room in asg.rooms() {
                // 10 persons over 4 rooms: every room holds 2 or 3.
                assert!(room.len() == 2 || room.len() == 3);
            }
        }
    }

    #[test]
    fn test_move_updates_both_views() {
        let mut asg = Assignment::new(4, 2);

        asg.move_person(0, 1);

        assert_partition(&asg);
        assert_eq!(asg.room_of(0), 1);
        assert!(asg.room_members(1).contains(&0));
        assert!(!asg.room_members(0).contains(&0));
    }

    #[test]
    fn test_move_to_same_room_is_noop() {
        let mut asg = Assignment::new(4, 2);
        let before = asg.clone();

        asg.move_person(0, 0);

        assert_eq!(asg, before);
    }

    #[test]
    #[should_panic(expected = "unknown person id")]
    fn test_move_unknown_person_panics() {
        Assignment::new(4, 2).move_person(9, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_move_bad_room_panics() {
        Assignment::new(4, 2).move_person(0, 5);
    }

    #[test]
    fn test_swap_exchanges_rooms() {
        let mut asg = Assignment::new(4, 2);
        // 0 and 2 in room 0; 1 and 3 in room 1.

        asg.swap(0, 1);

        assert_partition(&asg);
        assert_eq!(asg.room_of(0), 1);
        assert_eq!(asg.room_of(1), 0);
    }

    #[test]
    fn test_swap_within_room_is_noop() {
        let mut asg = Assignment::new(4, 2);
        let before = asg.clone();

        asg.swap(0, 2);

        assert_eq!(asg, before);
    }

    proptest! {
        #[test]
        fn prop_moves_preserve_partition(
            moves in prop::collection::vec((0usize..12, 0usize..3), 0..64),
        ) {
            let mut asg = Assignment::new(12, 3);
            for (person, room) in moves {
                asg.move_person(person, room);
                assert_partition(&asg);
            }
        }
    }
}
