//! Strategies: how a side picks its card each round.
//!
//! A strategy sees only what the driver shows it in a [`TurnContext`]: its
//! own hand, the game state, the opponent's card if it is peeking this round,
//! and the opponent's remaining hand when the match reveals hands. It must
//! return a card from its own hand; the driver rejects anything else.

use crate::core::{Card, Color, GameRng, GameState, Hand, Outcome, RatsError, RatsResult, RoundRecord};
use crate::rules::OutcomeTable;
use crate::solver::Solver;

/// What a side knows when it picks a card.
#[derive(Clone, Copy, Debug)]
pub struct TurnContext<'a> {
    /// Side to play.
    pub color: Color,

    /// Cards still in hand.
    pub hand: Hand,

    pub state: &'a GameState,

    /// Opponent's committed card, present exactly when this side peeks.
    pub spied_card: Option<Card>,

    /// Opponent's remaining hand, present only when hands are revealed.
    pub opponent_hand: Option<Hand>,
}

impl TurnContext<'_> {
    /// Round the coming fight looks back on.
    #[must_use]
    pub fn previous_round(&self) -> Option<RoundRecord> {
        self.state.most_recent_round()
    }

    /// Red's and blue's hands, if the opponent's hand is visible.
    #[must_use]
    pub fn both_hands(&self) -> Option<(Hand, Hand)> {
        self.opponent_hand.map(|opponent| match self.color {
            Color::Red => (self.hand, opponent),
            Color::Blue => (opponent, self.hand),
        })
    }
}

/// A card-picking policy.
pub trait Strategy: Send {
    /// Short name for logs and standings.
    fn name(&self) -> &str;

    /// Pick a card from `ctx.hand`.
    fn choose(&mut self, ctx: &TurnContext<'_>, rng: &mut GameRng) -> RatsResult<Card>;
}

// =============================================================================
// Heuristics
// =============================================================================

/// The card in `hand` whose fight against `opponent_card` ends best for
/// `color`, looking one round ahead. Ties go to the first card in hand order.
///
/// Returns `None` for an empty hand.
#[must_use]
pub fn best_card_against(
    hand: Hand,
    color: Color,
    previous_round: Option<RoundRecord>,
    opponent_card: Card,
) -> Option<Card> {
    let table = OutcomeTable::global();
    let prev_red = previous_round.map(|round| round.red);
    let prev_blue = previous_round.map(|round| round.blue);

    let mut best: Option<(Outcome, Card)> = None;
    for card in hand.iter() {
        let outcome = match color {
            Color::Red => table.lookup(card, opponent_card, prev_red, prev_blue),
            Color::Blue => table.lookup(opponent_card, card, prev_red, prev_blue),
        };
        if best.map_or(true, |(incumbent, _)| outcome.better_for(incumbent, color)) {
            best = Some((outcome, card));
        }
    }
    best.map(|(_, card)| card)
}

fn random_card(ctx: &TurnContext<'_>, rng: &mut GameRng) -> RatsResult<Card> {
    rng.choose_card(ctx.hand)
        .ok_or(RatsError::EmptyHand { color: ctx.color })
}

fn beat(ctx: &TurnContext<'_>, opponent_card: Card) -> RatsResult<Card> {
    best_card_against(ctx.hand, ctx.color, ctx.previous_round(), opponent_card)
        .ok_or(RatsError::EmptyHand { color: ctx.color })
}

// =============================================================================
// Built-in strategies
// =============================================================================

/// Uniformly random card.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose(&mut self, ctx: &TurnContext<'_>, rng: &mut GameRng) -> RatsResult<Card> {
        random_card(ctx, rng)
    }
}

/// Random, except that a peeking side with a real choice beats the spied card.
#[derive(Clone, Debug, Default)]
pub struct BeatSpiedStrategy;

impl Strategy for BeatSpiedStrategy {
    fn name(&self) -> &str {
        "beat-spied"
    }

    fn choose(&mut self, ctx: &TurnContext<'_>, rng: &mut GameRng) -> RatsResult<Card> {
        match ctx.spied_card {
            Some(spied) if ctx.hand.len() > 1 => beat(ctx, spied),
            _ => random_card(ctx, rng),
        }
    }
}

/// Guess the opponent's card uniformly from its visible hand (or use the
/// spied card) and beat it. Plays randomly when hands are hidden.
#[derive(Clone, Debug, Default)]
pub struct BeatOpponentRandomStrategy;

impl Strategy for BeatOpponentRandomStrategy {
    fn name(&self) -> &str {
        "beat-opponent-random"
    }

    fn choose(&mut self, ctx: &TurnContext<'_>, rng: &mut GameRng) -> RatsResult<Card> {
        if ctx.hand.len() == 1 {
            return random_card(ctx, rng);
        }
        if let Some(spied) = ctx.spied_card {
            return beat(ctx, spied);
        }
        match ctx.opponent_hand.and_then(|opponent| rng.choose_card(opponent)) {
            Some(guess) => beat(ctx, guess),
            None => random_card(ctx, rng),
        }
    }
}

/// Exact play from the solver when hands are revealed; random otherwise.
///
/// Keeps its solver (and memo table) across games.
#[derive(Debug, Default)]
pub struct SolverStrategy {
    solver: Solver,
}

impl SolverStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn solver(&self) -> &Solver {
        &self.solver
    }
}

impl Strategy for SolverStrategy {
    fn name(&self) -> &str {
        "solver"
    }

    fn choose(&mut self, ctx: &TurnContext<'_>, rng: &mut GameRng) -> RatsResult<Card> {
        let Some((red, blue)) = ctx.both_hands() else {
            return random_card(ctx, rng);
        };
        match self
            .solver
            .best_card(ctx.color, red, blue, ctx.state, ctx.spied_card)?
        {
            Some(card) => Ok(card),
            None => random_card(ctx, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: &[Card]) -> Hand {
        Hand::from_cards(cards.iter().copied()).unwrap()
    }

    fn context(color: Color, hand: Hand, state: &GameState) -> TurnContext<'_> {
        TurnContext {
            color,
            hand,
            state,
            spied_card: None,
            opponent_hand: None,
        }
    }

    #[test]
    fn test_best_card_against() {
        let cards = hand(&[Card::Musician, Card::Princess, Card::Wizard]);
        // Princess wins the game against the prince.
        assert_eq!(
            best_card_against(cards, Color::Red, None, Card::Prince),
            Some(Card::Princess)
        );
        // As blue against a red musician, the wizard is the only win.
        assert_eq!(
            best_card_against(cards, Color::Blue, None, Card::Musician),
            Some(Card::Wizard)
        );
        assert_eq!(best_card_against(Hand::empty(), Color::Red, None, Card::Spy), None);
    }

    #[test]
    fn test_best_card_against_ties_go_first() {
        // Wizard, general and prince all win the round against the spy.
        let cards = hand(&[Card::Wizard, Card::General, Card::Prince]);
        assert_eq!(
            best_card_against(cards, Color::Red, None, Card::Spy),
            Some(Card::Wizard)
        );
    }

    #[test]
    fn test_best_card_against_uses_lookback() {
        // Red played the general last round: princess 1+2 beats the spy.
        let cards = hand(&[Card::Musician, Card::Princess]);
        let previous = Some(RoundRecord::new(Card::General, Card::Ambassador));
        assert_eq!(
            best_card_against(cards, Color::Red, previous, Card::Spy),
            Some(Card::Princess)
        );
    }

    #[test]
    fn test_random_stays_in_hand() {
        let state = GameState::default();
        let cards = hand(&[Card::Spy, Card::General]);
        let mut rng = GameRng::new(7);
        let mut strategy = RandomStrategy;
        for _ in 0..50 {
            let card = strategy.choose(&context(Color::Red, cards, &state), &mut rng).unwrap();
            assert!(cards.contains(card));
        }
    }

    #[test]
    fn test_random_empty_hand() {
        let state = GameState::default();
        let mut rng = GameRng::new(7);
        let err = RandomStrategy
            .choose(&context(Color::Blue, Hand::empty(), &state), &mut rng)
            .unwrap_err();
        assert_eq!(err, RatsError::EmptyHand { color: Color::Blue });
    }

    #[test]
    fn test_beat_spied() {
        let state = GameState::default();
        let mut ctx = context(Color::Blue, hand(&[Card::Musician, Card::Princess]), &state);
        ctx.spied_card = Some(Card::Prince);
        let card = BeatSpiedStrategy.choose(&ctx, &mut GameRng::new(1)).unwrap();
        assert_eq!(card, Card::Princess);
    }

    #[test]
    fn test_solver_strategy_uses_spied_card() {
        let state = GameState::new(2).with_history([RoundRecord::new(Card::Spy, Card::Princess)]);
        let mut ctx = context(Color::Red, hand(&[Card::Princess, Card::General]), &state);
        ctx.opponent_hand = Some(hand(&[Card::General, Card::Prince]));

        ctx.spied_card = Some(Card::Prince);
        let mut strategy = SolverStrategy::new();
        assert_eq!(strategy.choose(&ctx, &mut GameRng::new(1)).unwrap(), Card::Princess);

        ctx.spied_card = Some(Card::General);
        assert_eq!(strategy.choose(&ctx, &mut GameRng::new(1)).unwrap(), Card::General);
    }

    #[test]
    fn test_solver_strategy_hidden_hands_is_random() {
        let state = GameState::default();
        let cards = hand(&[Card::Spy, Card::General]);
        let mut strategy = SolverStrategy::new();
        let card = strategy
            .choose(&context(Color::Red, cards, &state), &mut GameRng::new(3))
            .unwrap();
        assert!(cards.contains(card));
        assert_eq!(strategy.solver().cache_len(), 0);
    }
}
