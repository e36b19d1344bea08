//! Round phase types.

/// The phase of the current round.
///
/// A round moves `Dealing → PlayerTurn ⇄ DealerReaction → DealerTurn →
/// Revealing → Resolved`. `DealerReaction` is entered only under
/// [`DealerPlayMode::WithPlayer`](crate::DealerPlayMode::WithPlayer),
/// interleaved with the player's turn. `Idle` precedes the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No round has been started yet.
    Idle,
    /// Opening cards are being dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The dealer is reacting to a player hit.
    DealerReaction,
    /// The dealer's face-down cards are being revealed and its hand played
    /// out.
    DealerTurn,
    /// Both hands are final; the outcome is being computed and disclosed.
    Revealing,
    /// The round is over and immutable. Terminal.
    Resolved,
}
