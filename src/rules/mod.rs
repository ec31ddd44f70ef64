//! Game rules: fight resolution, the precomputed outcome table, and the spy
//! visibility rule.
//!
//! Everything here is pure. `GameState` and the solver reach fights through
//! [`OutcomeTable::global`], which agrees with [`resolve`] on every key.

pub mod fight;
pub mod spy;
pub mod table;

pub use fight::{resolve, GENERAL_BONUS};
pub use spy::{peeking_color, SPY_NULLIFIERS};
pub use table::{OutcomeTable, NO_CARD, TABLE_SIZE};
