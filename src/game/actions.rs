use crate::card::Card;
use crate::deck::DrawRng;
use crate::error::ActionError;
use crate::event::{Seat, StepEvent};
use crate::rules::DealerPlayMode;

use super::{Game, Phase};

impl<S: DrawRng> Game<S> {
    /// Player action: Hit (draw one card into the player's hand).
    ///
    /// Hitting to 21 or beyond ends the player's turn and plays out the
    /// dealer's hand regardless of mode. Otherwise, under
    /// [`WithPlayer`](DealerPlayMode::WithPlayer) the dealer reacts with at
    /// most one face-down draw before control returns to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for a player action, or
    /// if the deck is exhausted. An illegal action leaves the round
    /// unchanged.
    pub fn player_hit(&self) -> Result<Card, ActionError> {
        let mut round = self.round.lock();
        let mut steps = self.steps.lock();
        let mut rng = self.rng.lock();

        if round.phase != Phase::PlayerTurn {
            return Err(ActionError::IllegalPhase);
        }

        // Draw before queueing anything: a failed draw must not leave a
        // dangling disable step behind while the phase stays `PlayerTurn`.
        let card = round.draw(&mut *rng)?;
        round.player.add_card(card);
        steps.push_back(StepEvent::ControlsEnabled(false));
        steps.push_back(StepEvent::CardDealt {
            seat: Seat::Player,
            card,
            face_up: true,
        });

        if round.player.score() >= 21 {
            // Exactly 21 counts as an implicit stand; over 21 is a bust.
            // Either way the dealer's turn follows.
            round.dealer_finish(&mut steps, &mut *rng)?;
        } else if round.rules.mode() == DealerPlayMode::WithPlayer {
            round.phase = Phase::DealerReaction;
            round.dealer_react(&mut steps, &mut *rng)?;
            round.phase = Phase::PlayerTurn;
            steps.push_back(StepEvent::ControlsEnabled(true));
        } else {
            steps.push_back(StepEvent::ControlsEnabled(true));
        }

        Ok(card)
    }

    /// Player action: Stand (end the player's turn and play out the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for a player action, or
    /// if the deck is exhausted while the dealer must draw. An illegal
    /// action leaves the round unchanged.
    pub fn player_stand(&self) -> Result<(), ActionError> {
        let mut round = self.round.lock();
        let mut steps = self.steps.lock();
        let mut rng = self.rng.lock();

        if round.phase != Phase::PlayerTurn {
            return Err(ActionError::IllegalPhase);
        }

        steps.push_back(StepEvent::ControlsEnabled(false));
        round.dealer_finish(&mut steps, &mut *rng)?;

        Ok(())
    }
}
