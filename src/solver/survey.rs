//! Survey of opening deals.
//!
//! Solves every pairing of equal-sized hands from a fresh state and keeps the
//! deals that favor red.

use serde::{Deserialize, Serialize};

use super::search::Solver;
use crate::core::{Card, GameState, Hand};

/// A deal whose value cleared the survey threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyEntry {
    pub red: Hand,
    pub blue: Hand,
    pub value: f64,
    pub best: Option<Card>,
}

/// Points needed to win a game dealt `cards_per_hand` cards each.
#[must_use]
pub const fn survey_points_to_win(cards_per_hand: usize) -> u32 {
    (cards_per_hand / 2 + 1) as u32
}

impl Solver {
    /// Solve every deal of `cards_per_hand` cards to each side and return the
    /// ones worth at least `threshold` to red, in enumeration order.
    pub fn survey(&mut self, cards_per_hand: usize, threshold: f64) -> Vec<SurveyEntry> {
        assert!(
            (1..=Card::COUNT).contains(&cards_per_hand),
            "cards_per_hand must be between 1 and {}",
            Card::COUNT
        );
        let fresh = GameState::new(survey_points_to_win(cards_per_hand));

        let mut kept = Vec::new();
        let mut deals = 0usize;
        for red in Hand::combinations(cards_per_hand) {
            for blue in Hand::combinations(cards_per_hand) {
                deals += 1;
                let solution = self.value(red, blue, &fresh);
                if solution.value >= threshold {
                    kept.push(SurveyEntry {
                        red,
                        blue,
                        value: solution.value,
                        best: solution.best,
                    });
                }
            }
        }

        tracing::info!(cards_per_hand, deals, kept = kept.len(), threshold, "survey finished");
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::rules::OutcomeTable;

    #[test]
    fn test_points_to_win() {
        assert_eq!(survey_points_to_win(1), 1);
        assert_eq!(survey_points_to_win(3), 2);
        assert_eq!(survey_points_to_win(8), 5);
    }

    #[test]
    fn test_single_card_survey_matches_table() {
        let table = OutcomeTable::global();
        let red_wins = Card::ALL
            .into_iter()
            .flat_map(|red| Card::ALL.into_iter().map(move |blue| (red, blue)))
            .filter(|&(red, blue)| table.lookup(red, blue, None, None).winner() == Some(Color::Red))
            .count();

        let mut solver = Solver::new();
        let entries = solver.survey(1, 1.0);
        assert_eq!(entries.len(), red_wins);
        assert!(entries.iter().all(|entry| entry.value == 1.0 && entry.best.is_some()));
    }

    #[test]
    fn test_zero_threshold_keeps_everything() {
        let mut solver = Solver::new();
        assert_eq!(solver.survey(7, 0.0).len(), 64);
    }

    #[test]
    #[should_panic(expected = "cards_per_hand must be between")]
    fn test_rejects_empty_hands() {
        Solver::new().survey(0, 0.5);
    }
}
