//! Exact game-tree solver.
//!
//! ## Overview
//!
//! With both hands visible, a position's value is the probability that red
//! wins under optimal play by both sides (ties count one half). The solver
//! enumerates every card combination, applying the spy rule to decide which
//! side commits first, and memoizes every position it visits.
//!
//! ## Usage
//!
//! ```rust
//! use brave_rats::core::{Card, GameState, Hand};
//! use brave_rats::solver::Solver;
//!
//! let red: Hand = "princess, general".parse().unwrap();
//! let blue: Hand = "general, prince".parse().unwrap();
//!
//! let mut solver = Solver::new();
//! let solution = solver.solve(red, blue, &GameState::new(2)).unwrap();
//! assert_eq!(solution.value, 0.0);
//! assert_eq!(solution.best, Some(Card::Princess));
//! ```

pub mod cache;
pub mod plan;
pub mod search;
pub mod stats;
pub mod survey;

pub use cache::{SolveCache, StateKey};
pub use plan::{PlanBranch, PlanNode, PlanStep};
pub use search::{Solution, Solver};
pub use stats::SearchStats;
pub use survey::{survey_points_to_win, SurveyEntry};
