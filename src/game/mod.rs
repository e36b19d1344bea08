//! Game engine and round state machine.

use alloc::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::{DrawRng, UsedCards};
use crate::error::{ActionError, DeckError};
use crate::event::{Outcome, StepEvent};
use crate::hand::{DealerHand, Hand};
use crate::rules::Rules;
use crate::sync::Mutex;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::Phase;

/// The round aggregate owned exclusively by the state machine.
///
/// Built fresh for each round and discarded at its end; only the rules carry
/// forward when the player keeps them.
#[derive(Debug)]
pub(crate) struct RoundState {
    pub(crate) phase: Phase,
    pub(crate) player: Hand,
    pub(crate) dealer: DealerHand,
    pub(crate) used: UsedCards,
    pub(crate) dealer_stood: bool,
    pub(crate) rules: Rules,
}

impl RoundState {
    pub(crate) fn new(rules: Rules) -> Self {
        Self {
            phase: Phase::Idle,
            player: Hand::new(),
            dealer: DealerHand::new(),
            used: UsedCards::new(),
            dealer_stood: false,
            rules,
        }
    }

    /// Draws one fresh card for this round.
    pub(crate) fn draw(&mut self, rng: &mut impl DrawRng) -> Result<Card, DeckError> {
        self.used.draw(rng)
    }
}

/// A single-player blackjack engine.
///
/// The engine mutates its [round state](Phase) synchronously on every call
/// and queues an ordered list of [`StepEvent`]s describing what happened.
/// The presentation layer drains that queue with [`Game::acknowledge_step`],
/// one event per call, pacing card animations however it likes; the queue
/// guarantees the displayed state can never get ahead of the logical state.
///
/// All operations take `&self`, so a shared handle can be driven from
/// presentation callbacks. The draw source defaults to a seeded
/// [`ChaCha8Rng`]; tests inject a scripted source through
/// [`Game::with_draw_source`].
pub struct Game<S: DrawRng = ChaCha8Rng> {
    /// Current round. Exclusively owned; the public accessors hand out
    /// clones, never mutable access.
    round: Mutex<RoundState>,
    /// Steps queued for disclosure, oldest first.
    steps: Mutex<VecDeque<StepEvent>>,
    /// Candidate-card source for rejection sampling.
    rng: Mutex<S>,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given rules and random seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pontoon::{Game, Rules};
    ///
    /// let game = Game::new(Rules::default(), 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(rules: Rules, seed: u64) -> Self {
        Self::with_draw_source(rules, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<S: DrawRng> Game<S> {
    /// Creates a new game drawing candidate cards from `source`.
    #[must_use]
    pub fn with_draw_source(rules: Rules, source: S) -> Self {
        Self {
            round: Mutex::new(RoundState::new(rules)),
            steps: Mutex::new(VecDeque::new()),
            rng: Mutex::new(source),
        }
    }

    /// Replaces the rules for subsequent rounds.
    ///
    /// Legal only between rounds; the new rules apply from the next
    /// [`start_round`](Game::start_round).
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in flight.
    pub fn configure_rules(&self, rules: Rules) -> Result<(), ActionError> {
        let mut round = self.round.lock();
        match round.phase {
            Phase::Idle | Phase::Resolved => {
                round.rules = rules;
                Ok(())
            }
            _ => Err(ActionError::IllegalPhase),
        }
    }

    /// Returns the rules currently in effect.
    pub fn rules(&self) -> Rules {
        self.round.lock().rules
    }

    /// Returns the current round phase.
    pub fn phase(&self) -> Phase {
        self.round.lock().phase
    }

    /// Returns whether `player_hit` / `player_stand` are currently legal.
    pub fn controls_enabled(&self) -> bool {
        self.round.lock().phase == Phase::PlayerTurn
    }

    /// Returns a clone of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.round.lock().player.clone()
    }

    /// Returns a clone of the dealer's hand.
    pub fn dealer_hand(&self) -> DealerHand {
        self.round.lock().dealer.clone()
    }

    /// Returns the player's current score.
    pub fn player_score(&self) -> u8 {
        self.round.lock().player.score()
    }

    /// Returns the dealer's current score, hidden cards included.
    pub fn dealer_score(&self) -> u8 {
        self.round.lock().dealer.score()
    }

    /// Returns whether the dealer has voluntarily stood this round.
    pub fn dealer_stood(&self) -> bool {
        self.round.lock().dealer_stood
    }

    /// Returns the outcome of the round once it is resolved.
    pub fn outcome(&self) -> Option<Outcome> {
        let round = self.round.lock();
        (round.phase == Phase::Resolved)
            .then(|| Outcome::from_scores(round.player.score(), round.dealer.score()))
    }

    /// Signals that the previous step has been presented and discloses the
    /// next queued step, or `None` if the stream is drained.
    ///
    /// Steps must be consumed in the order returned; the engine hands them
    /// out one at a time precisely so the caller cannot reorder them.
    pub fn acknowledge_step(&self) -> Option<StepEvent> {
        self.steps.lock().pop_front()
    }

    /// Returns the number of steps still awaiting acknowledgement.
    pub fn pending_steps(&self) -> usize {
        self.steps.lock().len()
    }
}
