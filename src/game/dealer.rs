use alloc::collections::VecDeque;

use crate::deck::DrawRng;
use crate::error::DeckError;
use crate::event::{Outcome, Seat, StepEvent};
use crate::rules::DealerPlayMode;

use super::{Phase, RoundState};

impl RoundState {
    /// Dealer reaction to one player hit, under `WithPlayer` mode only.
    ///
    /// Draws at most one card, face-down, while below the stand threshold;
    /// once at or above it the dealer stands for the rest of the round and
    /// says so. After standing, reactions are no-ops.
    pub(crate) fn dealer_react(
        &mut self,
        steps: &mut VecDeque<StepEvent>,
        rng: &mut impl DrawRng,
    ) -> Result<(), DeckError> {
        if self.dealer_stood {
            return Ok(());
        }

        if self.dealer.score() < self.rules.stand_threshold() {
            let card = self.draw(rng)?;
            self.dealer.add_card(card, false);
            steps.push_back(StepEvent::CardDealt {
                seat: Seat::Dealer,
                card,
                face_up: false,
            });
        } else {
            self.dealer_stood = true;
            steps.push_back(StepEvent::DealerStood);
        }

        Ok(())
    }

    /// Plays out the dealer's turn and resolves the round.
    ///
    /// Reveals every face-down dealer card in hand order, then draws to the
    /// stand threshold unless the hand is already final (`AutoStart`
    /// pre-played it; under `WithPlayer` the dealer may have stood
    /// mid-hand). Finally computes the outcome and queues the terminal
    /// `RoundResolved` step.
    pub(crate) fn dealer_finish(
        &mut self,
        steps: &mut VecDeque<StepEvent>,
        rng: &mut impl DrawRng,
    ) -> Result<(), DeckError> {
        self.phase = Phase::DealerTurn;

        for card in self.dealer.reveal_all() {
            steps.push_back(StepEvent::CardRevealed {
                seat: Seat::Dealer,
                card,
            });
        }

        let hand_is_final = match self.rules.mode() {
            DealerPlayMode::AutoStart => true,
            DealerPlayMode::WithPlayer => self.dealer_stood,
            DealerPlayMode::AutoEnd => false,
        };

        if !hand_is_final {
            while self.dealer.score() < self.rules.stand_threshold() {
                let card = self.draw(rng)?;
                self.dealer.add_card(card, true);
                steps.push_back(StepEvent::CardDealt {
                    seat: Seat::Dealer,
                    card,
                    face_up: true,
                });
            }
        }

        self.phase = Phase::Revealing;

        let player_score = self.player.score();
        let dealer_score = self.dealer.score();
        steps.push_back(StepEvent::RoundResolved {
            outcome: Outcome::from_scores(player_score, dealer_score),
            player_score,
            dealer_score,
        });

        self.phase = Phase::Resolved;

        Ok(())
    }
}
