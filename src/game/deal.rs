use crate::deck::DrawRng;
use crate::error::DeckError;
use crate::event::{Seat, StepEvent};
use crate::rules::DealerPlayMode;

use super::{Game, Phase, RoundState};

impl<S: DrawRng> Game<S> {
    /// Starts a new round, discarding any round in flight.
    ///
    /// Deals two dealer cards (first face-up, second face-down) and two
    /// face-up player cards. Under
    /// [`AutoStart`](DealerPlayMode::AutoStart) the dealer additionally
    /// pre-plays its whole hand face-down before the player acts. A natural
    /// two-card 21 skips the player's turn entirely, as if the player had
    /// stood.
    ///
    /// This is also how a stalled or abandoned round is cancelled: its state
    /// and any unacknowledged steps are simply discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the 52-card universe is exhausted mid-deal
    /// (defensive; cannot happen from a fresh round).
    pub fn start_round(&self) -> Result<(), DeckError> {
        let mut round = self.round.lock();
        let mut steps = self.steps.lock();
        let mut rng = self.rng.lock();

        *round = RoundState::new(round.rules);
        steps.clear();

        round.phase = Phase::Dealing;
        steps.push_back(StepEvent::ControlsEnabled(false));

        // Dealer: up card, then the hole card.
        let up = round.draw(&mut *rng)?;
        round.dealer.add_card(up, true);
        steps.push_back(StepEvent::CardDealt {
            seat: Seat::Dealer,
            card: up,
            face_up: true,
        });

        let hole = round.draw(&mut *rng)?;
        round.dealer.add_card(hole, false);
        steps.push_back(StepEvent::CardDealt {
            seat: Seat::Dealer,
            card: hole,
            face_up: false,
        });

        // Pre-play the dealer's hand face-down before the player ever acts.
        if round.rules.mode() == DealerPlayMode::AutoStart {
            while round.dealer.score() < round.rules.stand_threshold() {
                let card = round.draw(&mut *rng)?;
                round.dealer.add_card(card, false);
                steps.push_back(StepEvent::CardDealt {
                    seat: Seat::Dealer,
                    card,
                    face_up: false,
                });
            }
        }

        // Player: two cards, both face-up.
        for _ in 0..2 {
            let card = round.draw(&mut *rng)?;
            round.player.add_card(card);
            steps.push_back(StepEvent::CardDealt {
                seat: Seat::Player,
                card,
                face_up: true,
            });
        }

        if round.player.is_blackjack() {
            // Natural: straight to the dealer's turn, as if the player stood.
            round.dealer_finish(&mut steps, &mut *rng)?;
        } else {
            round.phase = Phase::PlayerTurn;
            steps.push_back(StepEvent::ControlsEnabled(true));
        }

        Ok(())
    }
}
