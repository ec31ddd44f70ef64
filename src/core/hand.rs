//! Hands as card sets.
//!
//! A hand never holds duplicates (the deck has one of each card), so it is
//! stored as an 8-bit set. That makes it `Copy`, hashable, and directly usable
//! as part of a memo key. Iteration is always in ascending card strength.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use super::card::Card;
use super::error::RatsError;

/// An unordered set of distinct cards held by one side.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand(u8);

impl Hand {
    /// Hand with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The full eight-card deck.
    #[must_use]
    pub const fn full() -> Self {
        Self(u8::MAX)
    }

    /// Build a hand from cards, rejecting duplicates.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, RatsError> {
        let mut hand = Hand::empty();
        for card in cards {
            if hand.contains(card) {
                return Err(RatsError::DuplicateCard(card));
            }
            hand.insert(card);
        }
        Ok(hand)
    }

    const fn bit(card: Card) -> u8 {
        1 << card.index()
    }

    /// Raw bit set, one bit per card index.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Hand from a raw bit set.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn contains(self, card: Card) -> bool {
        self.0 & Self::bit(card) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Add a card. Returns false if it was already held.
    pub fn insert(&mut self, card: Card) -> bool {
        let had = self.contains(card);
        self.0 |= Self::bit(card);
        !had
    }

    /// Remove a card. Returns false if it was not held.
    pub fn remove(&mut self, card: Card) -> bool {
        let had = self.contains(card);
        self.0 &= !Self::bit(card);
        had
    }

    /// Copy of this hand without `card`.
    #[must_use]
    pub const fn without(self, card: Card) -> Self {
        Self(self.0 & !Self::bit(card))
    }

    /// Iterate cards in ascending strength.
    pub fn iter(self) -> impl Iterator<Item = Card> {
        Card::ALL.into_iter().filter(move |&card| self.contains(card))
    }

    /// Cards in ascending strength.
    #[must_use]
    pub fn cards(self) -> SmallVec<[Card; Card::COUNT]> {
        self.iter().collect()
    }

    /// Every hand of exactly `size` cards, in ascending bit order.
    pub fn combinations(size: usize) -> impl Iterator<Item = Hand> {
        (0..=u8::MAX)
            .filter(move |bits| bits.count_ones() as usize == size)
            .map(Hand)
    }
}

impl FromIterator<Card> for Hand {
    /// Collects cards into a hand; duplicates collapse.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Hand::empty();
        for card in iter {
            hand.insert(card);
        }
        hand
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// Parses either a string of strength digits (`"0123456"`) or a comma
/// separated list of card names (`"spy, prince"`).
impl FromStr for Hand {
    type Err = RatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Hand::from_cards(
                trimmed
                    .chars()
                    .map(|c| c.to_string().parse::<Card>())
                    .collect::<Result<Vec<_>, _>>()?,
            );
        }
        Hand::from_cards(
            trimmed
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .map(str::parse::<Card>)
                .collect::<Result<Vec<_>, _>>()?,
        )
    }
}
