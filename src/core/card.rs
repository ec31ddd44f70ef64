//! The eight Brave Rats cards.
//!
//! Each card has a fixed base strength equal to its discriminant, from the
//! musician (0) up to the prince (7). The derived ordering follows strength,
//! which is also the "hand order" used whenever a search has to break ties.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::RatsError;

/// One of the eight cards in a Brave Rats deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Card {
    Musician = 0,
    Princess = 1,
    Spy = 2,
    Assassin = 3,
    Ambassador = 4,
    Wizard = 5,
    General = 6,
    Prince = 7,
}

impl Card {
    /// Number of distinct cards; also the size of a full hand.
    pub const COUNT: usize = 8;

    /// Every card in ascending strength.
    pub const ALL: [Card; Card::COUNT] = [
        Card::Musician,
        Card::Princess,
        Card::Spy,
        Card::Assassin,
        Card::Ambassador,
        Card::Wizard,
        Card::General,
        Card::Prince,
    ];

    /// Base strength, 0 through 7.
    #[must_use]
    pub const fn strength(self) -> u8 {
        self as u8
    }

    /// Index into per-card tables (identical to strength).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Card with the given index, if it is in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Card> {
        Card::ALL.get(index).copied()
    }

    /// Lowercase card name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::Musician => "musician",
            Card::Princess => "princess",
            Card::Spy => "spy",
            Card::Assassin => "assassin",
            Card::Ambassador => "ambassador",
            Card::Wizard => "wizard",
            Card::General => "general",
            Card::Prince => "prince",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses either a card name (case-insensitive) or its strength digit.
impl FromStr for Card {
    type Err = RatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Card::from_index(index).ok_or_else(|| RatsError::UnknownCard(s.to_string()));
        }
        Card::ALL
            .iter()
            .copied()
            .find(|card| card.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RatsError::UnknownCard(s.to_string()))
    }
}
