//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur while building a rules configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The dealer stand threshold is outside
    /// [`STAND_THRESHOLD_MIN`](crate::rules::STAND_THRESHOLD_MIN)..=[`STAND_THRESHOLD_MAX`](crate::rules::STAND_THRESHOLD_MAX).
    #[error("stand threshold {0} is outside 12..=21")]
    ThresholdOutOfRange(u8),
}

/// Errors that can occur while drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// All 52 cards have already been drawn this round.
    ///
    /// Defensive: a normal round uses far fewer than 52 cards, so this is
    /// not expected to occur in correct operation.
    #[error("all 52 cards have already been drawn")]
    Exhausted,
}

/// Errors that can occur during player actions and round control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not legal in the current phase. Round state is left
    /// unchanged; the caller may issue a different action.
    #[error("action is not legal in the current phase")]
    IllegalPhase,
    /// The deck ran out of cards mid-action. Fatal to the current round.
    #[error("the deck is exhausted")]
    DeckExhausted,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Exhausted => Self::DeckExhausted,
        }
    }
}
