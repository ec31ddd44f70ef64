//! Exact game-value search.
//!
//! With both hands known, a Brave Rats position has a pure-strategy minimax
//! value: the probability that red wins (a tie counts one half) when both
//! sides play optimally. The shape of a round depends on the spy rule:
//!
//! - **Red peeks**: blue commits first. For each blue card red picks its best
//!   reply; blue picks the card that leaves red the least.
//! - **Blue peeks**: red commits first. For each red card blue picks its best
//!   reply; red picks the card that leaves blue the least.
//! - **Simultaneous**: red picks the card whose worst case over blue's replies
//!   is best.
//!
//! Whenever several cards are equally good, the first one in hand order
//! (ascending strength) is chosen.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::cache::{SolveCache, StateKey};
use super::stats::SearchStats;
use crate::core::{Card, Color, GameState, Hand, RatsError, RatsResult};

/// Value of a position and red's best card in it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Probability that red wins, ties counted as one half.
    pub value: f64,

    /// Red's optimal card; `None` at terminal positions.
    pub best: Option<Card>,
}

impl Solution {
    pub const RED_WON: Solution = Solution { value: 1.0, best: None };
    pub const BLUE_WON: Solution = Solution { value: 0.0, best: None };
    pub const TIE: Solution = Solution { value: 0.5, best: None };
}

/// Memoized minimax solver.
///
/// The memo table lives as long as the solver; reuse one solver across calls
/// to share work between related positions.
#[derive(Debug, Default)]
pub struct Solver {
    cache: SolveCache,
    stats: SearchStats,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Number of memoized positions.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Forget every memoized position.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Value of the position and red's optimal card.
    pub fn solve(&mut self, red: Hand, blue: Hand, state: &GameState) -> RatsResult<Solution> {
        let start = Instant::now();
        self.stats.reset();

        if let Some(done) = terminal(red, blue, state) {
            return Ok(done);
        }
        check_consistent(red, blue, state)?;

        let solution = self.value(red, blue, state);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        tracing::debug!(
            red = %red,
            blue = %blue,
            value = solution.value,
            best = ?solution.best,
            nodes = self.stats.nodes_expanded,
            hits = self.stats.cache_hits,
            "solved position"
        );
        Ok(solution)
    }

    /// Optimal card for `color`.
    ///
    /// `spied` is the opponent's committed card when `color` is peeking this
    /// round. Returns `None` if the position is already decided.
    pub fn best_card(
        &mut self,
        color: Color,
        red: Hand,
        blue: Hand,
        state: &GameState,
        spied: Option<Card>,
    ) -> RatsResult<Option<Card>> {
        let start = Instant::now();
        self.stats.reset();

        if terminal(red, blue, state).is_some() {
            return Ok(None);
        }
        check_consistent(red, blue, state)?;

        let choice = match (color, spied) {
            (Color::Red, Some(blue_card)) => {
                require_held(Color::Blue, blue, blue_card)?;
                self.red_reply(red, blue, state, blue_card).map(|(_, card)| card)
            }
            (Color::Blue, Some(red_card)) => {
                require_held(Color::Red, red, red_card)?;
                self.blue_reply(red, blue, state, red_card).map(|(_, card)| card)
            }
            (Color::Red, None) => self.value(red, blue, state).best,
            (Color::Blue, None) => self.blue_commit(red, blue, state).map(|(_, card)| card),
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        tracing::debug!(%color, ?spied, ?choice, nodes = self.stats.nodes_expanded, "chose card");
        Ok(choice)
    }

    // === Recursion ===

    pub(crate) fn value(&mut self, red: Hand, blue: Hand, state: &GameState) -> Solution {
        if let Some(done) = terminal(red, blue, state) {
            self.stats.terminal_leaves += 1;
            return done;
        }

        let key = StateKey::new(red, blue, state);
        if let Some(hit) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            return hit;
        }
        self.stats.nodes_expanded += 1;
        debug_assert_eq!(red.len(), blue.len(), "hands diverged during search");

        let best = match state.peeking_color() {
            Some(Color::Red) => {
                // Blue commits to the card that limits red's best reply.
                best_for(Color::Blue, blue, |b| self.red_reply_value(red, blue, state, b)).and_then(
                    |(value, blue_card)| {
                        self.red_reply(red, blue, state, blue_card)
                            .map(|(_, red_card)| (value, red_card))
                    },
                )
            }
            Some(Color::Blue) => {
                best_for(Color::Red, red, |r| self.blue_reply_value(red, blue, state, r))
            }
            None => best_for(Color::Red, red, |r| {
                best_for(Color::Blue, blue, |b| self.child(red, blue, state, r, b))
                    .map_or(Solution::TIE.value, |(value, _)| value)
            }),
        };

        let solution = best.map_or(Solution::TIE, |(value, card)| Solution {
            value,
            best: Some(card),
        });
        self.cache.insert(key, solution);
        solution
    }

    /// Value after `red_card` and `blue_card` are played.
    pub(crate) fn child(
        &mut self,
        red: Hand,
        blue: Hand,
        state: &GameState,
        red_card: Card,
        blue_card: Card,
    ) -> f64 {
        let mut next = state.clone();
        next.resolve_round(red_card, blue_card);
        self.value(red.without(red_card), blue.without(blue_card), &next).value
    }

    /// Red's best answer to a committed blue card.
    pub(crate) fn red_reply(
        &mut self,
        red: Hand,
        blue: Hand,
        state: &GameState,
        blue_card: Card,
    ) -> Option<(f64, Card)> {
        best_for(Color::Red, red, |r| self.child(red, blue, state, r, blue_card))
    }

    /// Blue's best answer to a committed red card.
    pub(crate) fn blue_reply(
        &mut self,
        red: Hand,
        blue: Hand,
        state: &GameState,
        red_card: Card,
    ) -> Option<(f64, Card)> {
        best_for(Color::Blue, blue, |b| self.child(red, blue, state, red_card, b))
    }

    fn red_reply_value(&mut self, red: Hand, blue: Hand, state: &GameState, blue_card: Card) -> f64 {
        self.red_reply(red, blue, state, blue_card)
            .map_or(Solution::TIE.value, |(value, _)| value)
    }

    fn blue_reply_value(&mut self, red: Hand, blue: Hand, state: &GameState, red_card: Card) -> f64 {
        self.blue_reply(red, blue, state, red_card)
            .map_or(Solution::TIE.value, |(value, _)| value)
    }

    /// Blue's card when it has to commit without seeing red's.
    fn blue_commit(&mut self, red: Hand, blue: Hand, state: &GameState) -> Option<(f64, Card)> {
        if state.peeking_color() == Some(Color::Red) {
            return best_for(Color::Blue, blue, |b| self.red_reply_value(red, blue, state, b));
        }
        best_for(Color::Blue, blue, |b| {
            best_for(Color::Red, red, |r| self.child(red, blue, state, r, b))
                .map_or(Solution::TIE.value, |(value, _)| value)
        })
    }
}

/// The card in `cards` whose evaluation is best for `color` (red maximizes,
/// blue minimizes). Only a strictly better card displaces the incumbent, so
/// ties go to the first card in hand order.
fn best_for(
    color: Color,
    cards: Hand,
    mut evaluate: impl FnMut(Card) -> f64,
) -> Option<(f64, Card)> {
    let mut best: Option<(f64, Card)> = None;
    for card in cards.iter() {
        let value = evaluate(card);
        let better = match (color, best) {
            (_, None) => true,
            (Color::Red, Some((incumbent, _))) => value > incumbent,
            (Color::Blue, Some((incumbent, _))) => value < incumbent,
        };
        if better {
            best = Some((value, card));
        }
    }
    best
}

/// Value of a decided position, if it is decided.
pub(crate) fn terminal(red: Hand, blue: Hand, state: &GameState) -> Option<Solution> {
    match state.winner() {
        Some(Color::Red) => Some(Solution::RED_WON),
        Some(Color::Blue) => Some(Solution::BLUE_WON),
        None if red.is_empty() || blue.is_empty() => Some(Solution::TIE),
        None => None,
    }
}

/// Reject positions no legal game can reach.
pub(crate) fn check_consistent(red: Hand, blue: Hand, state: &GameState) -> RatsResult<()> {
    if red.len() != blue.len() {
        return Err(RatsError::InconsistentState(format!(
            "red holds {} cards but blue holds {}",
            red.len(),
            blue.len()
        )));
    }
    if state.rounds_played() + red.len() > Card::COUNT {
        return Err(RatsError::InconsistentState(format!(
            "{} rounds played with {} cards still in hand",
            state.rounds_played(),
            red.len()
        )));
    }
    for (color, hand) in [(Color::Red, red), (Color::Blue, blue)] {
        let replayed: Hand = state
            .played_cards(color)
            .iter()
            .filter(|&card| hand.contains(card))
            .collect();
        if !replayed.is_empty() {
            return Err(RatsError::InconsistentState(format!(
                "{color} still holds already played cards {replayed}"
            )));
        }
    }
    Ok(())
}

fn require_held(color: Color, hand: Hand, card: Card) -> RatsResult<()> {
    if hand.contains(card) {
        Ok(())
    } else {
        Err(RatsError::InconsistentState(format!(
            "spied card {card} is not in {color}'s hand {hand}"
        )))
    }
}
