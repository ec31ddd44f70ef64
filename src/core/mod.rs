//! Core model types: cards, colors, outcomes, hands, game state, errors,
//! configuration, and RNG.

pub mod card;
pub mod color;
pub mod config;
pub mod error;
pub mod hand;
pub mod outcome;
pub mod rng;
pub mod state;

pub use card::Card;
pub use color::{Color, ColorMap};
pub use config::{GameConfig, DEFAULT_POINTS_TO_WIN};
pub use error::{RatsError, RatsResult};
pub use hand::Hand;
pub use outcome::Outcome;
pub use rng::GameRng;
pub use state::{GameState, PendingHolds, RoundRecord, GAME_WON_POINTS};
