//! The session's on-screen roster of recently generated characters.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use pg_core::Character;

/// How many characters the roster shows.
pub const ROSTER_CAPACITY: usize = 6;

/// A character and when it was generated.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub character: Character,
    pub generated_at: DateTime<Local>,
}

/// Most-recent-first list of characters, oldest evicted past capacity.
#[derive(Debug)]
pub struct Roster {
    entries: VecDeque<RosterEntry>,
    capacity: usize,
}

impl Default for Roster {
    fn default() -> Self {
        Self::with_capacity(ROSTER_CAPACITY)
    }
}

impl Roster {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a generated batch in front of the existing entries, keeping the
    /// batch's own order. Returns how many old entries were evicted.
    pub fn add(&mut self, batch: Vec<Character>) -> usize {
        let now = Local::now();
        for character in batch.into_iter().rev() {
            self.entries.push_front(RosterEntry {
                character,
                generated_at: now,
            });
        }
        let evicted = self.entries.len().saturating_sub(self.capacity);
        self.entries.truncate(self.capacity);
        evicted
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_generator::Generator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn characters(n: usize, seed: u64) -> Vec<Character> {
        let g = Generator::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n).map(|_| g.individual(&mut rng)).collect()
    }

    #[test]
    fn newest_first_batch_order_kept() {
        let mut roster = Roster::default();
        let first = characters(2, 1);
        let second = characters(3, 2);
        roster.add(first.clone());
        roster.add(second.clone());

        let ids: Vec<_> = roster.entries().map(|e| e.character.id).collect();
        let expected: Vec<_> = second.iter().chain(first.iter()).map(|c| c.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut roster = Roster::default();
        let old = characters(4, 3);
        let new = characters(4, 4);
        assert_eq!(roster.add(old.clone()), 0);
        assert_eq!(roster.add(new.clone()), 2);
        assert_eq!(roster.len(), ROSTER_CAPACITY);

        let ids: Vec<_> = roster.entries().map(|e| e.character.id).collect();
        assert_eq!(&ids[..4], &new.iter().map(|c| c.id).collect::<Vec<_>>()[..]);
        assert_eq!(ids[4], old[0].id);
        assert_eq!(ids[5], old[1].id);
    }

    #[test]
    fn oversized_batch_keeps_its_first_members() {
        let mut roster = Roster::with_capacity(2);
        let batch = characters(3, 5);
        roster.add(batch.clone());
        let ids: Vec<_> = roster.entries().map(|e| e.character.id).collect();
        assert_eq!(ids, vec![batch[0].id, batch[1].id]);
    }

    #[test]
    fn clear_empties() {
        let mut roster = Roster::default();
        roster.add(characters(1, 6));
        assert!(!roster.is_empty());
        roster.clear();
        assert!(roster.is_empty());
    }
}
