//! Memo table for the solver.
//!
//! ## Key
//!
//! A position's value depends on both remaining hands, the score, the
//! threshold, the pending holds (banked points), and the most recent round
//! (general lookback and spy visibility). Older resolved rounds cannot affect
//! the future and are left out, so transpositions share one entry.
//!
//! ## Lifetime
//!
//! The table belongs to one `Solver` and lives as long as it does. Entries
//! are only ever added; a hit always returns the value computed the first
//! time.

use rustc_hash::FxHashMap;

use super::search::Solution;
use crate::core::{Color, GameState, Hand, PendingHolds, RoundRecord};

/// Everything about a position that can influence its value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    red: Hand,
    blue: Hand,
    red_points: u32,
    blue_points: u32,
    points_to_win: u32,
    pending_holds: PendingHolds,
    previous: Option<RoundRecord>,
}

impl StateKey {
    #[must_use]
    pub fn new(red: Hand, blue: Hand, state: &GameState) -> Self {
        Self {
            red,
            blue,
            red_points: state.points(Color::Red),
            blue_points: state.points(Color::Blue),
            points_to_win: state.points_to_win(),
            pending_holds: state.pending_holds().iter().copied().collect(),
            previous: state.most_recent_round(),
        }
    }
}

/// Append-only position cache.
#[derive(Debug, Default)]
pub struct SolveCache {
    entries: FxHashMap<StateKey, Solution>,
}

impl SolveCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &StateKey) -> Option<Solution> {
        self.entries.get(key).copied()
    }

    /// Record a solved position. An existing entry is kept as is.
    pub fn insert(&mut self, key: StateKey, solution: Solution) {
        self.entries.entry(key).or_insert(solution);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry (start a new session).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;

    #[test]
    fn test_key_ignores_old_history() {
        let hand = Hand::from_cards([Card::Spy, Card::Prince]).unwrap();

        let mut a = GameState::new(4);
        a.resolve_round(Card::Musician, Card::Spy);
        a.resolve_round(Card::Wizard, Card::Princess);
        a.resolve_round(Card::General, Card::Ambassador);

        let mut b = GameState::new(4);
        b.resolve_round(Card::Prince, Card::Assassin);
        b.resolve_round(Card::Wizard, Card::Spy);
        b.resolve_round(Card::General, Card::Ambassador);

        // Same score (red 3, blue 0) and same last round.
        assert_eq!(a.red_points(), b.red_points());
        assert_eq!(StateKey::new(hand, hand, &a), StateKey::new(hand, hand, &b));
    }

    #[test]
    fn test_key_sees_last_round() {
        let hand = Hand::from_cards([Card::Spy]).unwrap();
        let a = GameState::new(4).with_history([RoundRecord::new(Card::General, Card::Spy)]);
        let b = GameState::new(4).with_history([RoundRecord::new(Card::Spy, Card::General)]);
        assert_ne!(StateKey::new(hand, hand, &a), StateKey::new(hand, hand, &b));
    }

    #[test]
    fn test_insert_is_append_only() {
        let mut cache = SolveCache::new();
        let key = StateKey::new(Hand::full(), Hand::full(), &GameState::default());

        cache.insert(key.clone(), Solution::RED_WON);
        cache.insert(key.clone(), Solution::BLUE_WON);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&key), Some(Solution::RED_WON));

        cache.clear();
        assert!(cache.is_empty());
    }
}
