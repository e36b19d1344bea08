//! Player and dealer hand representations and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Scores a set of cards under standard soft/hard Ace resolution.
///
/// Each card contributes its pip value (Aces 1, face cards 10); then Aces are
/// promoted to 11 one at a time for as long as the running total stays at or
/// below 21. Order-insensitive and deterministic.
///
/// ```
/// use pontoon::{Card, Suit, score};
///
/// let cards = [Card::new(Suit::Hearts, 1), Card::new(Suit::Spades, 13)];
/// assert_eq!(score(&cards), 21);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.pip_value());
    }

    // `total <= 11` rather than `total + 10 <= 21`: the pip sum saturates
    // for absurdly large hands, and the comparison must not re-overflow.
    while aces > 0 && total <= 11 {
        total += 10;
        aces -= 1;
    }

    total
}

/// The player's hand: an ordered, append-only sequence of cards.
///
/// The score is always derived from the current cards, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is a natural: exactly two cards scoring 21.
    ///
    /// Only meaningful at the moment the opening deal completes; a 3+-card 21
    /// is never a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
///
/// Unlike the player's hand, dealer cards can sit face-down: the hole card,
/// every mid-hand reaction draw, and all pre-played cards arrive hidden and
/// are revealed together when the dealer's own turn begins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
    face_up: Vec<bool>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            face_up: Vec::new(),
        }
    }

    /// Adds a card to the hand, face-up or face-down.
    pub fn add_card(&mut self, card: Card, face_up: bool) {
        self.cards.push(card);
        self.face_up.push(face_up);
    }

    /// Returns all cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the card at `index` is face-up.
    #[must_use]
    pub fn is_face_up(&self, index: usize) -> bool {
        self.face_up.get(index).copied().unwrap_or(false)
    }

    /// Turns every face-down card face-up and returns the newly revealed
    /// cards in hand order.
    pub fn reveal_all(&mut self) -> Vec<Card> {
        let mut revealed = Vec::new();
        for (card, face_up) in self.cards.iter().zip(self.face_up.iter_mut()) {
            if !*face_up {
                *face_up = true;
                revealed.push(*card);
            }
        }
        revealed
    }

    /// Calculates the full value of the hand, hidden cards included.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Calculates the value of the face-up cards only, as a spectator sees it.
    #[must_use]
    pub fn visible_score(&self) -> u8 {
        let visible: Vec<Card> = self
            .cards
            .iter()
            .zip(self.face_up.iter())
            .filter(|(_, face_up)| **face_up)
            .map(|(card, _)| *card)
            .collect();
        score(&visible)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
