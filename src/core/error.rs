//! Crate error type.
//!
//! Every failure in this crate is local and deterministic: a caller bug, a
//! misbehaving strategy, or bad text input. Nothing here is retryable.

use thiserror::Error;

use super::card::Card;
use super::color::Color;
use super::hand::Hand;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatsError {
    /// A strategy picked a card its side does not hold.
    #[error("{color} tried to play {card}, which is not in hand {hand}")]
    IllegalMove { color: Color, card: Card, hand: Hand },

    /// A strategy was asked to choose from an empty hand.
    #[error("{color} was asked to choose a card from an empty hand")]
    EmptyHand { color: Color },

    /// Raw outcome-table lookup outside the 8x8x9x9 domain.
    #[error(
        "outcome table has no entry for red={red} blue={blue} prev_red={prev_red} prev_blue={prev_blue}"
    )]
    TableDomain {
        red: u8,
        blue: u8,
        prev_red: u8,
        prev_blue: u8,
    },

    /// Solver or driver handed a state that no legal game can reach.
    #[error("inconsistent game state: {0}")]
    InconsistentState(String),

    #[error("unknown card: {0:?}")]
    UnknownCard(String),

    #[error("card {0} listed more than once")]
    DuplicateCard(Card),
}

pub type RatsResult<T> = Result<T, RatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RatsError::IllegalMove {
            color: Color::Blue,
            card: Card::Prince,
            hand: Hand::from_cards([Card::Spy]).unwrap(),
        };
        assert_eq!(err.to_string(), "blue tried to play prince, which is not in hand [spy]");

        let err = RatsError::EmptyHand { color: Color::Red };
        assert_eq!(err.to_string(), "red was asked to choose a card from an empty hand");

        assert_eq!(
            RatsError::UnknownCard("jester".into()).to_string(),
            "unknown card: \"jester\""
        );
    }
}
