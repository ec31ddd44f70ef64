//! Round-robin tournaments between strategies.
//!
//! Every entrant plays every entrant, itself included, once as red and once
//! as blue. Each pairing gets fresh strategy instances and its own seed drawn
//! from the tournament seed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::driver::{play_match, MatchSummary};
use super::strategy::{
    BeatOpponentRandomStrategy, BeatSpiedStrategy, RandomStrategy, SolverStrategy, Strategy,
};
use crate::core::{GameConfig, GameRng, RatsResult};

/// A named strategy factory.
#[derive(Clone, Copy, Debug)]
pub struct Entrant {
    pub name: &'static str,
    pub build: fn() -> Box<dyn Strategy>,
}

impl Entrant {
    pub const fn new(name: &'static str, build: fn() -> Box<dyn Strategy>) -> Self {
        Self { name, build }
    }

    /// The built-in strategies.
    #[must_use]
    pub fn builtin() -> Vec<Entrant> {
        vec![
            Entrant::new("random", || Box::new(RandomStrategy)),
            Entrant::new("beat-spied", || Box::new(BeatSpiedStrategy)),
            Entrant::new("beat-opponent-random", || Box::new(BeatOpponentRandomStrategy)),
            Entrant::new("solver", || Box::new(SolverStrategy::new())),
        ]
    }
}

/// Results of a round robin: `results[red][blue]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    names: Vec<String>,
    results: Vec<Vec<MatchSummary>>,
}

impl Standings {
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Summary of the pairing with entrant `red` as red and `blue` as blue.
    #[must_use]
    pub fn get(&self, red: usize, blue: usize) -> MatchSummary {
        self.results[red][blue]
    }

    /// Games won by an entrant across both colors.
    #[must_use]
    pub fn total_wins(&self, entrant: usize) -> u32 {
        let as_red: u32 = self.results[entrant].iter().map(|summary| summary.red_wins).sum();
        let as_blue: u32 = self.results.iter().map(|row| row[entrant].blue_wins).sum();
        as_red + as_blue
    }
}

/// Rows are red, columns are blue, cells are `red/ties/blue`.
impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .results
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        let width = self
            .names
            .iter()
            .map(String::len)
            .chain(cells.iter().flatten().map(String::len))
            .max()
            .unwrap_or(1);

        write!(f, "{:width$} |", "*")?;
        for name in &self.names {
            write!(f, " {name:width$} |")?;
        }
        writeln!(f)?;

        for (name, row) in self.names.iter().zip(&cells) {
            write!(f, "{name:width$} |")?;
            for cell in row {
                write!(f, " {cell:width$} |")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Play `games` games for every ordered pair of entrants.
pub fn round_robin(
    entrants: &[Entrant],
    config: &GameConfig,
    games: usize,
    seed: u64,
) -> RatsResult<Standings> {
    let mut rng = GameRng::new(seed);
    let mut results = Vec::with_capacity(entrants.len());

    for red in entrants {
        let mut row = Vec::with_capacity(entrants.len());
        for blue in entrants {
            let pairing = config.clone().with_seed(rng.fork().seed());
            let mut red_strategy = (red.build)();
            let mut blue_strategy = (blue.build)();

            let summary = play_match(red_strategy.as_mut(), blue_strategy.as_mut(), &pairing, games)?;
            tracing::info!(red = red.name, blue = blue.name, %summary, "pairing finished");
            row.push(summary);
        }
        results.push(row);
    }

    Ok(Standings {
        names: entrants.iter().map(|entrant| entrant.name.to_string()).collect(),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_robin_shape() {
        let entrants = [
            Entrant::new("random", || Box::new(RandomStrategy)),
            Entrant::new("beat-spied", || Box::new(BeatSpiedStrategy)),
        ];
        let standings = round_robin(&entrants, &GameConfig::default(), 10, 5).unwrap();

        assert_eq!(standings.names(), ["random", "beat-spied"]);
        for red in 0..2 {
            for blue in 0..2 {
                assert_eq!(standings.get(red, blue).games(), 10);
            }
        }
    }

    #[test]
    fn test_round_robin_is_reproducible() {
        let entrants = Entrant::builtin();
        let config = GameConfig::default();
        let first = round_robin(&entrants[..3], &config, 5, 11).unwrap();
        let second = round_robin(&entrants[..3], &config, 5, 11).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_standings_table() {
        let entrants = [Entrant::new("random", || Box::new(RandomStrategy))];
        let standings = round_robin(&entrants, &GameConfig::default(), 4, 1).unwrap();
        let table = standings.to_string();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("*"));
        assert!(lines[1].starts_with("random"));
        assert!(lines[1].contains(&standings.get(0, 0).to_string()));
        assert_eq!(
            standings.total_wins(0),
            standings.get(0, 0).red_wins + standings.get(0, 0).blue_wins
        );
    }
}
