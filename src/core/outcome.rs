//! Fight outcomes.
//!
//! Outcomes are ordered ascending from the best result for blue to the best
//! result for red. Searches and heuristics compare outcomes directly: red
//! prefers larger, blue prefers smaller. There is deliberately no "mirror"
//! operation; a blue-side caller flips the comparison, not the outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::Color;

/// Result of a single round, from a fixed red/blue perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Outcome {
    BlueWinsGame = 0,
    BlueWinsDouble = 1,
    BlueWins = 2,
    OnHold = 3,
    RedWins = 4,
    RedWinsDouble = 5,
    RedWinsGame = 6,
}

impl Outcome {
    /// Every outcome in ascending order.
    pub const ALL: [Outcome; 7] = [
        Outcome::BlueWinsGame,
        Outcome::BlueWinsDouble,
        Outcome::BlueWins,
        Outcome::OnHold,
        Outcome::RedWins,
        Outcome::RedWinsDouble,
        Outcome::RedWinsGame,
    ];

    /// The side this outcome favors, or `None` for a hold.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::BlueWinsGame | Outcome::BlueWinsDouble | Outcome::BlueWins => Some(Color::Blue),
            Outcome::OnHold => None,
            Outcome::RedWins | Outcome::RedWinsDouble | Outcome::RedWinsGame => Some(Color::Red),
        }
    }

    /// Round won with a powered ambassador.
    #[must_use]
    pub const fn is_double(self) -> bool {
        matches!(self, Outcome::RedWinsDouble | Outcome::BlueWinsDouble)
    }

    /// Princess beat prince: the match is over.
    #[must_use]
    pub const fn is_game_win(self) -> bool {
        matches!(self, Outcome::RedWinsGame | Outcome::BlueWinsGame)
    }

    /// Base points for the winner of this round, before any held-round bonus.
    #[must_use]
    pub const fn base_points(self) -> u32 {
        match self {
            Outcome::OnHold => 0,
            Outcome::RedWinsDouble | Outcome::BlueWinsDouble => 2,
            _ => 1,
        }
    }

    /// `true` if `self` is strictly better than `other` for `color`.
    #[must_use]
    pub fn better_for(self, other: Outcome, color: Color) -> bool {
        match color {
            Color::Red => self > other,
            Color::Blue => self < other,
        }
    }

    /// Worst possible outcome for `color`.
    #[must_use]
    pub const fn worst_for(color: Color) -> Outcome {
        match color {
            Color::Red => Outcome::BlueWinsGame,
            Color::Blue => Outcome::RedWinsGame,
        }
    }

    /// One- or two-character label used by the outcome grid.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Outcome::BlueWinsGame => "B!",
            Outcome::BlueWinsDouble => "b2",
            Outcome::BlueWins => "b",
            Outcome::OnHold => "h",
            Outcome::RedWins => "r",
            Outcome::RedWinsDouble => "r2",
            Outcome::RedWinsGame => "R!",
        }
    }

    /// Snake-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Outcome::BlueWinsGame => "blue_wins_game",
            Outcome::BlueWinsDouble => "blue_wins_double",
            Outcome::BlueWins => "blue_wins",
            Outcome::OnHold => "on_hold",
            Outcome::RedWins => "red_wins",
            Outcome::RedWinsDouble => "red_wins_double",
            Outcome::RedWinsGame => "red_wins_game",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
