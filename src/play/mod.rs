//! Playing games: strategies, the round driver, and tournaments.
//!
//! ## Usage
//!
//! ```rust
//! use brave_rats::core::{GameConfig, GameRng};
//! use brave_rats::play::{play_game, BeatSpiedStrategy, RandomStrategy};
//!
//! let config = GameConfig::default();
//! let mut rng = GameRng::new(config.seed);
//! let state = play_game(&mut RandomStrategy, &mut BeatSpiedStrategy, &config, &mut rng).unwrap();
//! assert!(state.rounds_played() <= 8);
//! ```

pub mod driver;
pub mod strategy;
pub mod tournament;

pub use driver::{play_game, play_match, MatchSummary};
pub use strategy::{
    best_card_against, BeatOpponentRandomStrategy, BeatSpiedStrategy, RandomStrategy,
    SolverStrategy, Strategy, TurnContext,
};
pub use tournament::{round_robin, Entrant, Standings};
