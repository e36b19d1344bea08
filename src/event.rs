//! Step events: the ordered disclosure stream the engine emits for a
//! presentation layer.

use crate::card::Card;

/// Whose hand a step event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Player,
    /// The dealer.
    Dealer,
}

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins with the higher total.
    PlayerWin,
    /// Dealer busted; player wins.
    DealerBust,
    /// Dealer wins with the higher total.
    DealerWin,
    /// Player busted; player loses.
    PlayerBust,
    /// Equal totals.
    Push,
    /// Both hands busted; the round is a draw.
    BothBust,
}

impl Outcome {
    /// Computes the outcome from two final scores.
    #[must_use]
    pub const fn from_scores(player: u8, dealer: u8) -> Self {
        match (player > 21, dealer > 21) {
            (true, true) => Self::BothBust,
            (true, false) => Self::PlayerBust,
            (false, true) => Self::DealerBust,
            (false, false) => {
                if player > dealer {
                    Self::PlayerWin
                } else if player < dealer {
                    Self::DealerWin
                } else {
                    Self::Push
                }
            }
        }
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_won(&self) -> bool {
        matches!(self, Self::PlayerWin | Self::DealerBust)
    }

    /// Returns whether the round was a draw.
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        matches!(self, Self::Push | Self::BothBust)
    }
}

/// One unit of the ordered disclosure stream.
///
/// Engine state is already final when an event is queued; the queue only
/// paces *visibility*. Consuming events out of order is a protocol violation,
/// which is why the queue hands them out one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// A card was dealt to a hand, face-up or face-down.
    CardDealt {
        /// Whose hand received the card.
        seat: Seat,
        /// The card dealt.
        card: Card,
        /// Whether the card arrived face-up.
        face_up: bool,
    },
    /// A previously face-down card was turned face-up.
    CardRevealed {
        /// Whose hand holds the card.
        seat: Seat,
        /// The card revealed.
        card: Card,
    },
    /// The dealer voluntarily stood mid-hand and will not draw again.
    DealerStood,
    /// Whether the player's hit/stand controls are currently legal.
    ControlsEnabled(bool),
    /// The round is over. Terminal for the round's stream.
    RoundResolved {
        /// The outcome from the player's point of view.
        outcome: Outcome,
        /// The player's final score.
        player_score: u8,
        /// The dealer's final score.
        dealer_score: u8,
    },
}
