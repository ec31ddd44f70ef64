//! Match configuration.
//!
//! A `GameConfig` describes how a match starts: the score threshold, the
//! starting hands, and what strategies are allowed to see. Analysis setups
//! (short hands, low thresholds, open hands) are built from the defaults with
//! the `with_*` methods.

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorMap};
use super::hand::Hand;
use super::state::GameState;

/// Points needed to win a standard match.
pub const DEFAULT_POINTS_TO_WIN: u32 = 4;

/// Match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Points needed to win (default 4).
    pub points_to_win: u32,

    /// Starting hands (default: the full deck for both sides).
    pub hands: ColorMap<Hand>,

    /// Show each strategy the opponent's remaining hand.
    /// Off in a real match; analysis strategies need it.
    pub reveal_hands: bool,

    /// Seed for match-level randomness.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_to_win: DEFAULT_POINTS_TO_WIN,
            hands: ColorMap::with_value(Hand::full()),
            reveal_hands: false,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the score threshold.
    #[must_use]
    pub fn with_points_to_win(mut self, points: u32) -> Self {
        assert!(points > 0, "points_to_win must be at least 1");
        self.points_to_win = points;
        self
    }

    /// Set one side's starting hand.
    #[must_use]
    pub fn with_hand(mut self, color: Color, hand: Hand) -> Self {
        assert!(!hand.is_empty(), "starting hand must not be empty");
        self.hands[color] = hand;
        self
    }

    /// Reveal hands to strategies.
    #[must_use]
    pub fn with_revealed_hands(mut self) -> Self {
        self.reveal_hands = true;
        self
    }

    /// Set the match seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fresh state for a game under this configuration.
    #[must_use]
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.points_to_win)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.points_to_win, 4);
        assert_eq!(config.hands[Color::Red], Hand::full());
        assert_eq!(config.hands[Color::Blue], Hand::full());
        assert!(!config.reveal_hands);
    }

    #[test]
    fn test_builder_pattern() {
        let short = Hand::from_cards([Card::Spy, Card::Prince]).unwrap();
        let config = GameConfig::default()
            .with_points_to_win(2)
            .with_hand(Color::Blue, short)
            .with_revealed_hands()
            .with_seed(123);

        assert_eq!(config.points_to_win, 2);
        assert_eq!(config.hands[Color::Blue], short);
        assert_eq!(config.hands[Color::Red], Hand::full());
        assert!(config.reveal_hands);
        assert_eq!(config.seed, 123);
        assert_eq!(config.initial_state().points_to_win(), 2);
    }

    #[test]
    #[should_panic(expected = "points_to_win must be at least 1")]
    fn test_zero_points_rejected() {
        let _ = GameConfig::default().with_points_to_win(0);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
