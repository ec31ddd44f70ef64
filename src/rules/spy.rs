//! Spy visibility.
//!
//! A spy that lands lets its owner see the opponent's card for the next
//! round before committing. It lands unless the opponent answered it with the
//! musician, the wizard, or a spy of their own.

use crate::core::{Card, Color, RoundRecord};

/// Cards that stop a spy from landing.
pub const SPY_NULLIFIERS: [Card; 3] = [Card::Musician, Card::Wizard, Card::Spy];

/// Side that peeks in the round after `previous`, if any.
#[must_use]
pub fn peeking_color(previous: Option<RoundRecord>) -> Option<Color> {
    let round = previous?;
    Color::BOTH.into_iter().find(|&color| {
        round.card(color) == Card::Spy && !SPY_NULLIFIERS.contains(&round.card(color.opponent()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peek(red: Card, blue: Card) -> Option<Color> {
        peeking_color(Some(RoundRecord::new(red, blue)))
    }

    #[test]
    fn test_no_previous_round() {
        assert_eq!(peeking_color(None), None);
    }

    #[test]
    fn test_spy_lands() {
        assert_eq!(peek(Card::Spy, Card::Princess), Some(Color::Red));
        assert_eq!(peek(Card::Prince, Card::Spy), Some(Color::Blue));
    }

    #[test]
    fn test_spy_nullified() {
        assert_eq!(peek(Card::Spy, Card::Musician), None);
        assert_eq!(peek(Card::Wizard, Card::Spy), None);
        assert_eq!(peek(Card::Spy, Card::Spy), None);
    }

    #[test]
    fn test_without_spy() {
        for red in Card::ALL {
            for blue in Card::ALL {
                if red != Card::Spy && blue != Card::Spy {
                    assert_eq!(peek(red, blue), None);
                }
            }
        }
    }
}
