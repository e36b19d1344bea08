//! Draw-without-replacement over the 52-card universe.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::{Rng, RngCore};
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// Source of candidate cards for rejection sampling.
///
/// Every [`RngCore`] is a `DrawRng` that picks uniformly among the 52
/// distinct cards; tests can implement the trait directly to script the exact
/// cards a round will draw.
pub trait DrawRng {
    /// Picks one candidate card. The candidate may already have been drawn;
    /// [`UsedCards::draw`] keeps asking until it gets a fresh one.
    fn candidate(&mut self) -> Card;
}

impl<R: RngCore> DrawRng for R {
    fn candidate(&mut self) -> Card {
        let rank: u8 = self.random_range(1..=13);
        let suit = Suit::ALL[self.random_range(0..Suit::ALL.len())];
        Card::new(suit, rank)
    }
}

/// The set of cards already drawn this round.
///
/// Scoped to a single round and discarded with it; within a round no card is
/// ever drawn twice, across both hands.
#[derive(Debug, Clone, Default)]
pub struct UsedCards {
    cards: HashSet<Card>,
}

impl UsedCards {
    /// Creates an empty used-card set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: HashSet::new(),
        }
    }

    /// Draws one card not yet used this round and records it as used.
    ///
    /// Rejection-samples candidates from `rng` until an unused card comes up;
    /// with at most 52 cards in play this terminates quickly in practice.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if all 52 cards have been drawn.
    pub fn draw(&mut self, rng: &mut impl DrawRng) -> Result<Card, DeckError> {
        if self.cards.len() >= DECK_SIZE {
            return Err(DeckError::Exhausted);
        }

        loop {
            let card = rng.candidate();
            if self.cards.insert(card) {
                return Ok(card);
            }
        }
    }

    /// Returns whether the card has already been drawn this round.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards drawn so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no card has been drawn yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
