//! Round driver: plays strategies against each other.
//!
//! ## Turn order
//!
//! Each round the driver asks the spy rule who peeks. A peeking side chooses
//! second and is shown the card its opponent committed to; otherwise red is
//! asked first and neither side sees the other's card.
//!
//! ## Validation
//!
//! A strategy must answer with a card from its hand. Anything else ends the
//! game with [`RatsError::IllegalMove`]; the driver never substitutes a card.
//! The game stops as soon as a side has won or either hand is empty, so no
//! strategy is ever asked to choose from an empty hand.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::strategy::{Strategy, TurnContext};
use crate::core::{Card, Color, ColorMap, GameConfig, GameRng, GameState, RatsError, RatsResult};

/// Play one game.
pub fn play_game<'s>(
    red: &'s mut dyn Strategy,
    blue: &'s mut dyn Strategy,
    config: &GameConfig,
    rng: &mut GameRng,
) -> RatsResult<GameState> {
    let mut strategies = ColorMap::from_pair(red, blue);
    let mut hands = config.hands.clone();
    let mut state = config.initial_state();

    while !state.is_over() && Color::BOTH.into_iter().all(|color| !hands[color].is_empty()) {
        let peeking = state.peeking_color();
        let order = match peeking {
            Some(peeker) => [peeker.opponent(), peeker],
            None => [Color::Red, Color::Blue],
        };

        let mut played: ColorMap<Option<Card>> = ColorMap::with_value(None);
        for color in order {
            let hand = hands[color];
            if hand.is_empty() {
                return Err(RatsError::EmptyHand { color });
            }

            let ctx = TurnContext {
                color,
                hand,
                state: &state,
                spied_card: if peeking == Some(color) {
                    played[color.opponent()]
                } else {
                    None
                },
                opponent_hand: config.reveal_hands.then(|| hands[color.opponent()]),
            };
            let strategy = &mut strategies[color];
            let card = strategy.choose(&ctx, rng)?;

            if !hand.contains(card) {
                tracing::warn!(%color, strategy = strategy.name(), %card, %hand, "rejected illegal card");
                return Err(RatsError::IllegalMove { color, card, hand });
            }
            played[color] = Some(card);
        }

        let (Some(red_card), Some(blue_card)) = (played[Color::Red], played[Color::Blue]) else {
            return Err(RatsError::InconsistentState(
                "a side did not play this round".to_string(),
            ));
        };
        state.resolve_round(red_card, blue_card);
        hands[Color::Red].remove(red_card);
        hands[Color::Blue].remove(blue_card);
    }

    tracing::info!(
        red = strategies[Color::Red].name(),
        blue = strategies[Color::Blue].name(),
        winner = ?state.winner(),
        rounds = state.rounds_played(),
        %state,
        "game finished"
    );
    Ok(state)
}

/// Win/tie counts of a match, from red's side of the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub red_wins: u32,
    pub blue_wins: u32,
    pub ties: u32,
}

impl MatchSummary {
    /// Count one finished game.
    pub fn record(&mut self, winner: Option<Color>) {
        match winner {
            Some(Color::Red) => self.red_wins += 1,
            Some(Color::Blue) => self.blue_wins += 1,
            None => self.ties += 1,
        }
    }

    #[must_use]
    pub fn games(&self) -> u32 {
        self.red_wins + self.blue_wins + self.ties
    }

    /// Share of games red won.
    #[must_use]
    pub fn red_win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => f64::from(self.red_wins) / f64::from(games),
        }
    }
}

/// `red/ties/blue`.
impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.red_wins, self.ties, self.blue_wins)
    }
}

/// Play `games` games between the same two strategies.
///
/// Every game draws from its own fork of a generator seeded with
/// `config.seed`, so a match is reproducible from its configuration.
pub fn play_match(
    red: &mut dyn Strategy,
    blue: &mut dyn Strategy,
    config: &GameConfig,
    games: usize,
) -> RatsResult<MatchSummary> {
    let mut rng = GameRng::new(config.seed);
    let mut summary = MatchSummary::default();
    for _ in 0..games {
        let mut game_rng = rng.fork();
        let state = play_game(red, blue, config, &mut game_rng)?;
        summary.record(state.winner());
    }
    Ok(summary)
}
