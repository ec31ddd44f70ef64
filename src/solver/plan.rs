//! Expansion of the solver's play into a readable tree.
//!
//! A plan starts at a position and follows red's optimal choices forward:
//! when red peeks, one branch per blue card with red's reply; otherwise red's
//! chosen card followed by one branch per possible blue card. Branches end in
//! a finished leaf (win for either side, or a tie when hands run out).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::search::{check_consistent, terminal, Solver};
use crate::core::{Card, Color, GameState, Hand, Outcome, RatsResult};

/// One position in a plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanNode {
    /// Solver value of the position.
    pub value: f64,
    pub step: PlanStep,
}

/// What happens at a plan position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlanStep {
    /// Game over; `None` is a tie.
    Finished(Option<Color>),

    /// Red sees blue's card: one branch per blue card.
    RedSpies(Vec<PlanBranch>),

    /// Red commits to `red`; one branch per blue reply.
    RedCommits { red: Card, replies: Vec<PlanBranch> },
}

/// A round played out of a plan position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanBranch {
    pub red: Card,
    pub blue: Card,
    pub outcome: Outcome,
    pub next: PlanNode,
}

impl PlanNode {
    /// Number of finished leaves under this node.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match &self.step {
            PlanStep::Finished(_) => 1,
            PlanStep::RedSpies(branches) | PlanStep::RedCommits { replies: branches, .. } => {
                branches.iter().map(|branch| branch.next.leaf_count()).sum()
            }
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match &self.step {
            PlanStep::Finished(Some(color)) => writeln!(f, "{indent}{color} wins"),
            PlanStep::Finished(None) => writeln!(f, "{indent}tie"),
            PlanStep::RedSpies(branches) => {
                writeln!(f, "{indent}red spies ({:.3})", self.value)?;
                for branch in branches {
                    writeln!(
                        f,
                        "{indent}- blue {} -> red {}: {}",
                        branch.blue, branch.red, branch.outcome
                    )?;
                    branch.next.write_indented(f, depth + 1)?;
                }
                Ok(())
            }
            PlanStep::RedCommits { red, replies } => {
                writeln!(f, "{indent}red plays {red} ({:.3})", self.value)?;
                for branch in replies {
                    writeln!(f, "{indent}- blue {}: {}", branch.blue, branch.outcome)?;
                    branch.next.write_indented(f, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for PlanNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

impl Solver {
    /// Expand red's optimal play from a position into a [`PlanNode`] tree.
    pub fn plan(&mut self, red: Hand, blue: Hand, state: &GameState) -> RatsResult<PlanNode> {
        if terminal(red, blue, state).is_none() {
            check_consistent(red, blue, state)?;
        }
        self.stats_mut().reset();
        let plan = self.expand(red, blue, state);
        tracing::debug!(leaves = plan.leaf_count(), value = plan.value, "expanded plan");
        Ok(plan)
    }

    fn expand(&mut self, red: Hand, blue: Hand, state: &GameState) -> PlanNode {
        let solution = self.value(red, blue, state);
        let Some(red_card) = solution.best else {
            return PlanNode {
                value: solution.value,
                step: PlanStep::Finished(state.winner()),
            };
        };

        let step = if state.peeking_color() == Some(Color::Red) {
            let mut branches = Vec::with_capacity(blue.len());
            for blue_card in blue.iter() {
                if let Some((_, red_card)) = self.red_reply(red, blue, state, blue_card) {
                    branches.push(self.branch(red, blue, state, red_card, blue_card));
                }
            }
            PlanStep::RedSpies(branches)
        } else {
            let replies = blue
                .iter()
                .map(|blue_card| self.branch(red, blue, state, red_card, blue_card))
                .collect();
            PlanStep::RedCommits {
                red: red_card,
                replies,
            }
        };

        PlanNode {
            value: solution.value,
            step,
        }
    }

    fn branch(
        &mut self,
        red: Hand,
        blue: Hand,
        state: &GameState,
        red_card: Card,
        blue_card: Card,
    ) -> PlanBranch {
        let mut next = state.clone();
        let outcome = next.resolve_round(red_card, blue_card);
        PlanBranch {
            red: red_card,
            blue: blue_card,
            outcome,
            next: self.expand(red.without(red_card), blue.without(blue_card), &next),
        }
    }
}
