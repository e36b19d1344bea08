//! House rules configuration.

use crate::error::RulesError;

/// Lowest accepted dealer stand threshold.
pub const STAND_THRESHOLD_MIN: u8 = 12;
/// Highest accepted dealer stand threshold.
pub const STAND_THRESHOLD_MAX: u8 = 21;

/// When the dealer draws to reach its stand threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DealerPlayMode {
    /// The dealer plays out its whole hand face-down during the deal, before
    /// the player ever acts. Its own turn only reveals the cards.
    AutoStart,
    /// The dealer reacts to each player hit with at most one face-down draw,
    /// and may voluntarily stand mid-hand once at its threshold.
    #[default]
    WithPlayer,
    /// The dealer does nothing until the player finishes, then draws to its
    /// threshold.
    AutoEnd,
}

/// Immutable per-round rules: the dealer play-timing mode and the minimum
/// score at which the dealer stops drawing.
///
/// Validated at construction; changing rules means building a new value and
/// starting a fresh round.
///
/// ```
/// use pontoon::{DealerPlayMode, Rules};
///
/// let rules = Rules::new(DealerPlayMode::AutoEnd, 16).unwrap();
/// assert_eq!(rules.stand_threshold(), 16);
/// assert!(Rules::new(DealerPlayMode::AutoEnd, 11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    mode: DealerPlayMode,
    stand_threshold: u8,
}

impl Rules {
    /// Creates a validated rules configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `stand_threshold` is outside
    /// [`STAND_THRESHOLD_MIN`]..=[`STAND_THRESHOLD_MAX`].
    pub const fn new(mode: DealerPlayMode, stand_threshold: u8) -> Result<Self, RulesError> {
        if stand_threshold < STAND_THRESHOLD_MIN || stand_threshold > STAND_THRESHOLD_MAX {
            return Err(RulesError::ThresholdOutOfRange(stand_threshold));
        }
        Ok(Self {
            mode,
            stand_threshold,
        })
    }

    /// The dealer play-timing mode.
    #[must_use]
    pub const fn mode(&self) -> DealerPlayMode {
        self.mode
    }

    /// The minimum score at which the dealer stops drawing.
    #[must_use]
    pub const fn stand_threshold(&self) -> u8 {
        self.stand_threshold
    }
}

impl Default for Rules {
    /// Classic table rules: the dealer reacts alongside the player and stands
    /// at 17.
    fn default() -> Self {
        Self {
            mode: DealerPlayMode::WithPlayer,
            stand_threshold: 17,
        }
    }
}
