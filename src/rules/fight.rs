//! Fight resolution.
//!
//! `resolve` turns the two cards of a round, plus the cards of the round
//! before it, into an [`Outcome`]. Rules are applied in a fixed priority
//! order and the first rule that decides the round wins:
//!
//! 1. Wizard: the opponent's power is suppressed.
//! 2. Musician: the round is put on hold.
//! 3. Princess: wins the game against the prince.
//! 4. Prince: wins the round against anything but the prince.
//! 5. General: +2 strength next round, unless answered by wizard or musician.
//! 6. Assassin: the lower strength wins.
//! 7. Strength; a win with the ambassador counts double, a tie is a hold.

use crate::core::{Card, Color, ColorMap, Outcome};

/// Strength bonus carried over from a general played the round before.
pub const GENERAL_BONUS: u8 = 2;

/// Resolve one round.
///
/// Total and pure over every combination of current cards and optional
/// previous cards.
#[must_use]
pub fn resolve(red: Card, blue: Card, prev_red: Option<Card>, prev_blue: Option<Card>) -> Outcome {
    let played = ColorMap::new(|color| match color {
        Color::Red => red,
        Color::Blue => blue,
    });
    let has_power = ColorMap::new(|color| played[color.opponent()] != Card::Wizard);
    let powered = |color: Color, card: Card| has_power[color] && played[color] == card;

    for color in Color::BOTH {
        if powered(color, Card::Musician) {
            return Outcome::OnHold;
        }
    }

    for color in Color::BOTH {
        if powered(color, Card::Princess) && played[color.opponent()] == Card::Prince {
            return wins_game(color);
        }
    }

    for color in Color::BOTH {
        if powered(color, Card::Prince) && played[color.opponent()] != Card::Prince {
            return wins_round(color);
        }
    }

    let previous = ColorMap::new(|color| match color {
        Color::Red => prev_red,
        Color::Blue => prev_blue,
    });
    let strength = ColorMap::new(|color| {
        let base = played[color].strength();
        if general_carries_over(previous[color], previous[color.opponent()]) {
            base + GENERAL_BONUS
        } else {
            base
        }
    });

    let reversed = Color::BOTH.into_iter().any(|color| powered(color, Card::Assassin));
    let (red_strength, blue_strength) = (strength[Color::Red], strength[Color::Blue]);
    let winner = match red_strength.cmp(&blue_strength) {
        std::cmp::Ordering::Equal => return Outcome::OnHold,
        std::cmp::Ordering::Greater if !reversed => Color::Red,
        std::cmp::Ordering::Less if reversed => Color::Red,
        _ => Color::Blue,
    };

    if powered(winner, Card::Ambassador) {
        wins_double(winner)
    } else {
        wins_round(winner)
    }
}

/// A general played last round boosts this round unless the opponent
/// answered it with the wizard or the musician.
fn general_carries_over(own_previous: Option<Card>, opponent_previous: Option<Card>) -> bool {
    own_previous == Some(Card::General)
        && !matches!(opponent_previous, Some(Card::Wizard | Card::Musician))
}

const fn wins_round(color: Color) -> Outcome {
    match color {
        Color::Red => Outcome::RedWins,
        Color::Blue => Outcome::BlueWins,
    }
}

const fn wins_double(color: Color) -> Outcome {
    match color {
        Color::Red => Outcome::RedWinsDouble,
        Color::Blue => Outcome::BlueWinsDouble,
    }
}

const fn wins_game(color: Color) -> Outcome {
    match color {
        Color::Red => Outcome::RedWinsGame,
        Color::Blue => Outcome::BlueWinsGame,
    }
}
