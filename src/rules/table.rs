//! Precomputed outcome table.
//!
//! Every reachable fight is a 4-tuple of (red card, blue card, previous red
//! card or none, previous blue card or none): 8 x 8 x 9 x 9 = 5184 keys. The
//! table stores `resolve` for each of them so the state machine and the solver
//! pay one array index per round.

use once_cell::sync::Lazy;
use std::fmt::Write as _;

use super::fight::resolve;
use crate::core::{Card, Outcome, RatsError, RatsResult};

/// Index standing for "no previous round" in the lookback slots.
pub const NO_CARD: u8 = Card::COUNT as u8;

const LOOKBACK_SLOTS: usize = Card::COUNT + 1;

/// Number of entries in the table.
pub const TABLE_SIZE: usize = Card::COUNT * Card::COUNT * LOOKBACK_SLOTS * LOOKBACK_SLOTS;

static OUTCOMES: Lazy<OutcomeTable> = Lazy::new(OutcomeTable::build);

/// Exhaustive lookup table over the fight resolver.
pub struct OutcomeTable {
    entries: Box<[Outcome; TABLE_SIZE]>,
}

impl OutcomeTable {
    /// Build the table by resolving every key.
    #[must_use]
    pub fn build() -> Self {
        let mut entries = Box::new([Outcome::OnHold; TABLE_SIZE]);
        let lookback = || std::iter::once(None).chain(Card::ALL.into_iter().map(Some));

        for red in Card::ALL {
            for blue in Card::ALL {
                for prev_red in lookback() {
                    for prev_blue in lookback() {
                        entries[slot(red, blue, prev_red, prev_blue)] =
                            resolve(red, blue, prev_red, prev_blue);
                    }
                }
            }
        }

        Self { entries }
    }

    /// Process-wide table, built on first use.
    #[must_use]
    pub fn global() -> &'static OutcomeTable {
        &OUTCOMES
    }

    /// Outcome of a fight. Agrees with [`resolve`] for every key.
    #[must_use]
    pub fn lookup(
        &self,
        red: Card,
        blue: Card,
        prev_red: Option<Card>,
        prev_blue: Option<Card>,
    ) -> Outcome {
        self.entries[slot(red, blue, prev_red, prev_blue)]
    }

    /// Lookup by raw card indices, with [`NO_CARD`] for "no previous round".
    ///
    /// Fails with [`RatsError::TableDomain`] if any index is out of range.
    pub fn lookup_raw(&self, red: u8, blue: u8, prev_red: u8, prev_blue: u8) -> RatsResult<Outcome> {
        let card = |index: u8| Card::from_index(index as usize);
        let lookback = |index: u8| match index {
            NO_CARD => Some(None),
            _ => card(index).map(Some),
        };

        match (card(red), card(blue), lookback(prev_red), lookback(prev_blue)) {
            (Some(r), Some(b), Some(pr), Some(pb)) => Ok(self.lookup(r, b, pr, pb)),
            _ => Err(RatsError::TableDomain {
                red,
                blue,
                prev_red,
                prev_blue,
            }),
        }
    }

    /// Red-versus-blue grid of short outcome labels, rows red, columns blue.
    ///
    /// With `prev_red` set, every fight is resolved as if red had played that
    /// card last round (and blue had not played).
    #[must_use]
    pub fn grid(&self, prev_red: Option<Card>) -> String {
        let mut out = String::from(" ");
        for blue in Card::ALL {
            let _ = write!(out, "\tb={}", blue.strength());
        }
        out.push('\n');

        for red in Card::ALL {
            let _ = write!(out, "r={}", red.strength());
            for blue in Card::ALL {
                let _ = write!(out, "\t{}", self.lookup(red, blue, prev_red, None).short_label());
            }
            out.push('\n');
        }
        out
    }
}

fn lookback_index(card: Option<Card>) -> usize {
    card.map_or(NO_CARD as usize, Card::index)
}

fn slot(red: Card, blue: Card, prev_red: Option<Card>, prev_blue: Option<Card>) -> usize {
    ((red.index() * Card::COUNT + blue.index()) * LOOKBACK_SLOTS + lookback_index(prev_red))
        * LOOKBACK_SLOTS
        + lookback_index(prev_blue)
}
