//! # brave-rats
//!
//! Rules engine and exact solver for the two-player card duel Brave Rats.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Fight resolution is a pure function of the two cards
//!    played and the round before. Every combination is precomputed once into
//!    a fixed table.
//!
//! 2. **Derived Winner**: The score is the only source of truth; a game win
//!    is encoded as an unreachable point total rather than a separate flag.
//!
//! 3. **Cheap Branching**: `GameState` clones in O(1) (persistent history via
//!    `im-rs`), so the solver can explore every branch by value.
//!
//! ## Modules
//!
//! - `core`: Cards, colors, outcomes, hands, game state, errors, configuration, RNG
//! - `rules`: Fight resolver, outcome table, spy visibility
//! - `solver`: Memoized minimax solver, plan explorer, deal survey
//! - `play`: Strategies, round driver, matches, and tournaments

pub mod core;
pub mod play;
pub mod rules;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, ColorMap, GameConfig, GameRng, GameState, Hand, Outcome, RatsError,
    RatsResult, RoundRecord, GAME_WON_POINTS,
};

pub use crate::rules::{peeking_color, resolve, OutcomeTable};

pub use crate::solver::{PlanNode, SearchStats, Solution, Solver, SurveyEntry};

pub use crate::play::{
    best_card_against, play_game, play_match, round_robin, Entrant, MatchSummary, Standings,
    Strategy, TurnContext,
};
