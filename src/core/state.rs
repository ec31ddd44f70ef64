//! Game state: score, resolved rounds, and rounds on hold.
//!
//! ## Rounds
//!
//! Every completed round is a `RoundRecord`. A round whose outcome is a hold
//! goes to `pending_holds`; the next round that resolves moves the whole run
//! of holds (and itself) into `resolved_history` and banks their points to
//! its winner.
//!
//! ## Winner
//!
//! The winner is derived from the points, never stored. A game-winning
//! outcome sets the winner's points to [`GAME_WON_POINTS`], which no
//! threshold can exceed.
//!
//! ## Cloning
//!
//! The solver clones a state per explored branch. The resolved history is an
//! `im::Vector`, so the clone is O(1) while remaining a fully independent
//! value; pending holds never exceed eight entries and live inline in a
//! `SmallVec`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::card::Card;
use super::color::{Color, ColorMap};
use super::config::DEFAULT_POINTS_TO_WIN;
use super::hand::Hand;
use super::outcome::Outcome;
use crate::rules::{spy, OutcomeTable};

/// Points assigned to the winner of a game-winning outcome.
pub const GAME_WON_POINTS: u32 = u32::MAX;

/// The two cards played in one completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundRecord {
    pub red: Card,
    pub blue: Card,
}

impl RoundRecord {
    #[must_use]
    pub const fn new(red: Card, blue: Card) -> Self {
        Self { red, blue }
    }

    /// Card played by `color`.
    #[must_use]
    pub const fn card(self, color: Color) -> Card {
        match color {
            Color::Red => self.red,
            Color::Blue => self.blue,
        }
    }

    /// Both sides played the ambassador; such a hold is worth two points.
    #[must_use]
    pub fn is_ambassador_standoff(self) -> bool {
        self.red == Card::Ambassador && self.blue == Card::Ambassador
    }
}

impl fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "red {} vs blue {}", self.red, self.blue)
    }
}

/// Pending holds. A game has at most eight rounds.
pub type PendingHolds = SmallVec<[RoundRecord; Card::COUNT]>;

/// Score and round history of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    points: ColorMap<u32>,
    points_to_win: u32,
    resolved_history: Vector<RoundRecord>,
    pending_holds: PendingHolds,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_POINTS_TO_WIN)
    }
}

impl GameState {
    /// Fresh state: no points, no rounds played.
    #[must_use]
    pub fn new(points_to_win: u32) -> Self {
        assert!(points_to_win > 0, "points_to_win must be at least 1");
        Self {
            points: ColorMap::with_value(0),
            points_to_win,
            resolved_history: Vector::new(),
            pending_holds: PendingHolds::new(),
        }
    }

    /// Start from the given score (analysis of late-game positions).
    #[must_use]
    pub fn with_points(mut self, red: u32, blue: u32) -> Self {
        self.points[Color::Red] = red;
        self.points[Color::Blue] = blue;
        self
    }

    /// Append already-resolved rounds without scoring them.
    ///
    /// Used to set up lookback context, e.g. "red's spy just succeeded".
    #[must_use]
    pub fn with_history(mut self, rounds: impl IntoIterator<Item = RoundRecord>) -> Self {
        self.resolved_history.extend(rounds);
        self
    }

    // === Score ===

    #[must_use]
    pub fn points(&self, color: Color) -> u32 {
        self.points[color]
    }

    #[must_use]
    pub fn red_points(&self) -> u32 {
        self.points[Color::Red]
    }

    #[must_use]
    pub fn blue_points(&self) -> u32 {
        self.points[Color::Blue]
    }

    #[must_use]
    pub fn points_to_win(&self) -> u32 {
        self.points_to_win
    }

    /// Side that has reached the threshold (red is checked first).
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        Color::BOTH
            .into_iter()
            .find(|&color| self.points[color] >= self.points_to_win)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    // === Rounds ===

    #[must_use]
    pub fn resolved_history(&self) -> &Vector<RoundRecord> {
        &self.resolved_history
    }

    #[must_use]
    pub fn pending_holds(&self) -> &[RoundRecord] {
        &self.pending_holds
    }

    /// Every round played so far, in play order.
    pub fn rounds(&self) -> impl Iterator<Item = RoundRecord> + '_ {
        self.resolved_history
            .iter()
            .copied()
            .chain(self.pending_holds.iter().copied())
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.resolved_history.len() + self.pending_holds.len()
    }

    /// Cards `color` has already played.
    #[must_use]
    pub fn played_cards(&self, color: Color) -> Hand {
        self.rounds().map(|round| round.card(color)).collect()
    }

    /// The round that serves as lookback for the next one: the last hold if
    /// any are pending, else the last resolved round.
    #[must_use]
    pub fn most_recent_round(&self) -> Option<RoundRecord> {
        self.pending_holds
            .last()
            .or_else(|| self.resolved_history.last())
            .copied()
    }

    /// Points banked by the pending holds for the next round's winner.
    #[must_use]
    pub fn pending_bonus(&self) -> u32 {
        self.pending_holds
            .iter()
            .map(|round| if round.is_ambassador_standoff() { 2 } else { 1 })
            .sum()
    }

    /// Side that sees its opponent's card before committing this round.
    #[must_use]
    pub fn peeking_color(&self) -> Option<Color> {
        spy::peeking_color(self.most_recent_round())
    }

    // === Play ===

    /// Resolve one round and update the score.
    pub fn resolve_round(&mut self, red: Card, blue: Card) -> Outcome {
        let previous = self.most_recent_round();
        let outcome = OutcomeTable::global().lookup(
            red,
            blue,
            previous.map(|round| round.red),
            previous.map(|round| round.blue),
        );
        let round = RoundRecord::new(red, blue);

        let Some(winner) = outcome.winner() else {
            self.pending_holds.push(round);
            tracing::debug!(%round, holds = self.pending_holds.len(), "round on hold");
            return outcome;
        };

        let bonus = self.pending_bonus();
        self.resolved_history.extend(self.pending_holds.drain(..));
        self.resolved_history.push_back(round);

        if outcome.is_game_win() {
            self.points[winner] = GAME_WON_POINTS;
        } else {
            let award = outcome.base_points() + bonus;
            self.points[winner] = self.points[winner].saturating_add(award);
        }

        tracing::debug!(%round, %outcome, red = self.red_points(), blue = self.blue_points(), "round resolved");
        outcome
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "points: red {} to blue {}",
            self.red_points(),
            self.blue_points()
        )?;
        let bonus = self.pending_bonus();
        if bonus > 0 {
            write!(f, " with {bonus} points on hold")?;
        }
        Ok(())
    }
}
