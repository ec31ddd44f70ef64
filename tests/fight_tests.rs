//! Fight resolution and outcome table tests.
//!
//! These tests check the resolver against the literal rule scenarios and
//! verify that the precomputed table agrees with it on the whole domain.

use brave_rats::core::{Card, Color, Outcome, RoundRecord};
use brave_rats::rules::{peeking_color, resolve, OutcomeTable, NO_CARD};
use proptest::prelude::*;

fn lookback() -> impl Iterator<Item = Option<Card>> {
    std::iter::once(None).chain(Card::ALL.into_iter().map(Some))
}

// =============================================================================
// Rule priority
// =============================================================================

#[test]
fn test_literal_scenarios() {
    assert_eq!(resolve(Card::Musician, Card::Prince, None, None), Outcome::OnHold);
    assert_eq!(resolve(Card::Princess, Card::Prince, None, None), Outcome::RedWinsGame);
    assert_eq!(resolve(Card::Assassin, Card::General, None, None), Outcome::RedWins);
    assert_eq!(resolve(Card::Musician, Card::Wizard, None, None), Outcome::BlueWins);
}

#[test]
fn test_resolver_is_color_symmetric() {
    // Swapping sides mirrors the outcome.
    let mirror = |outcome: Outcome| match outcome {
        Outcome::RedWins => Outcome::BlueWins,
        Outcome::RedWinsDouble => Outcome::BlueWinsDouble,
        Outcome::RedWinsGame => Outcome::BlueWinsGame,
        Outcome::BlueWins => Outcome::RedWins,
        Outcome::BlueWinsDouble => Outcome::RedWinsDouble,
        Outcome::BlueWinsGame => Outcome::RedWinsGame,
        Outcome::OnHold => Outcome::OnHold,
    };

    for red in Card::ALL {
        for blue in Card::ALL {
            for prev_red in lookback() {
                for prev_blue in lookback() {
                    assert_eq!(
                        resolve(blue, red, prev_blue, prev_red),
                        mirror(resolve(red, blue, prev_red, prev_blue)),
                        "red {red} blue {blue} prev {prev_red:?}/{prev_blue:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_mirror_fights_hold() {
    for card in Card::ALL {
        assert_eq!(resolve(card, card, None, None), Outcome::OnHold, "{card} vs {card}");
    }
}

#[test]
fn test_musician_row_without_lookback() {
    for blue in Card::ALL {
        let expected = if blue == Card::Wizard {
            Outcome::BlueWins
        } else {
            Outcome::OnHold
        };
        assert_eq!(resolve(Card::Musician, blue, None, None), expected);
    }
}

#[test]
fn test_game_wins_only_from_princess() {
    for red in Card::ALL {
        for blue in Card::ALL {
            for prev_red in lookback() {
                for prev_blue in lookback() {
                    let outcome = resolve(red, blue, prev_red, prev_blue);
                    if outcome.is_game_win() {
                        let winner = outcome.winner();
                        let (winning, losing) = match winner {
                            Some(Color::Red) => (red, blue),
                            _ => (blue, red),
                        };
                        assert_eq!((winning, losing), (Card::Princess, Card::Prince));
                    }
                }
            }
        }
    }
}

// =============================================================================
// Outcome table
// =============================================================================

#[test]
fn test_table_agrees_with_resolver() {
    let table = OutcomeTable::global();
    for red in Card::ALL {
        for blue in Card::ALL {
            for prev_red in lookback() {
                for prev_blue in lookback() {
                    assert_eq!(
                        table.lookup(red, blue, prev_red, prev_blue),
                        resolve(red, blue, prev_red, prev_blue)
                    );
                }
            }
        }
    }
}

#[test]
fn test_raw_lookup_domain() {
    let table = OutcomeTable::global();
    let mut ok = 0;
    for red in 0..=9u8 {
        for blue in 0..=9u8 {
            for prev_red in 0..=9u8 {
                for prev_blue in 0..=9u8 {
                    let in_domain = red < 8 && blue < 8 && prev_red <= NO_CARD && prev_blue <= NO_CARD;
                    let result = table.lookup_raw(red, blue, prev_red, prev_blue);
                    assert_eq!(result.is_ok(), in_domain);
                    if in_domain {
                        ok += 1;
                    }
                }
            }
        }
    }
    assert_eq!(ok, 5184);
}

#[test]
fn test_grid_with_general_lookback() {
    let table = OutcomeTable::global();
    let plain = table.grid(None);
    let boosted = table.grid(Some(Card::General));
    assert_ne!(plain, boosted);
    // Red's princess (1+2) now beats the spy (2).
    let princess_row = boosted.lines().nth(2).unwrap_or_default();
    let cells: Vec<&str> = princess_row.split('\t').collect();
    assert_eq!(cells[0], "r=1");
    assert_eq!(cells[3], "r");
}

// =============================================================================
// Spy visibility
// =============================================================================

#[test]
fn test_spy_visibility() {
    assert_eq!(peeking_color(None), None);
    assert_eq!(
        peeking_color(Some(RoundRecord::new(Card::Spy, Card::Princess))),
        Some(Color::Red)
    );
    assert_eq!(
        peeking_color(Some(RoundRecord::new(Card::General, Card::Spy))),
        Some(Color::Blue)
    );
    assert_eq!(peeking_color(Some(RoundRecord::new(Card::Spy, Card::Spy))), None);
    assert_eq!(peeking_color(Some(RoundRecord::new(Card::Spy, Card::Wizard))), None);
    assert_eq!(peeking_color(Some(RoundRecord::new(Card::Musician, Card::Spy))), None);
}

// =============================================================================
// Properties
// =============================================================================

fn card() -> impl Strategy<Value = Card> {
    (0..Card::COUNT).prop_map(|index| Card::ALL[index])
}

fn maybe_card() -> impl Strategy<Value = Option<Card>> {
    prop::option::of(card())
}

proptest! {
    /// The prince wins every round except against the princess, the musician,
    /// another prince, or a wizard.
    #[test]
    fn prop_prince_dominates(blue in card(), prev_red in maybe_card(), prev_blue in maybe_card()) {
        let outcome = resolve(Card::Prince, blue, prev_red, prev_blue);
        match blue {
            Card::Musician => prop_assert_eq!(outcome, Outcome::OnHold),
            Card::Prince => prop_assert!(!outcome.is_game_win()),
            Card::Princess => prop_assert_eq!(outcome, Outcome::BlueWinsGame),
            Card::Wizard => prop_assert_ne!(outcome.winner(), Some(Color::Blue)),
            _ => prop_assert_eq!(outcome.winner(), Some(Color::Red)),
        }
    }

    /// Double wins always come from a powered ambassador.
    #[test]
    fn prop_double_needs_ambassador(
        red in card(),
        blue in card(),
        prev_red in maybe_card(),
        prev_blue in maybe_card(),
    ) {
        let outcome = resolve(red, blue, prev_red, prev_blue);
        if outcome.is_double() {
            let winner_card = match outcome.winner() {
                Some(Color::Red) => red,
                _ => blue,
            };
            prop_assert_eq!(winner_card, Card::Ambassador);
            prop_assert!(red != Card::Wizard && blue != Card::Wizard);
        }
    }
}
