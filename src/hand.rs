//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DrawError;
use crate::play::{Playable, TopCard};

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in pick-up order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Draws one card from `deck` and adds it to the end of the hand.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck has no cards left; the
    /// hand is left unchanged.
    pub fn pick_up(&mut self, deck: &mut Deck) -> Result<(), DrawError> {
        let card = deck.draw()?;
        self.cards.push(card);
        Ok(())
    }

    /// Returns the held cards that may be played on `top`, in hand order.
    ///
    /// The result is lazy and borrows the hand; an empty iterator means
    /// nothing is playable.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::{Card, Colour, Deck, Hand};
    ///
    /// let mut deck = Deck::from_cards(vec![
    ///     Card::Wild,
    ///     Card::Skip(Colour::Green),
    ///     Card::normal(Colour::Red, 7).unwrap(),
    /// ]);
    /// let mut hand = Hand::new();
    /// for _ in 0..3 {
    ///     hand.pick_up(&mut deck).unwrap();
    /// }
    ///
    /// let top = Card::normal(Colour::Red, 5).unwrap();
    /// let playable: Vec<_> = hand.can_play_on(top).copied().collect();
    /// assert_eq!(playable, [Card::normal(Colour::Red, 7).unwrap(), Card::Wild]);
    /// ```
    #[must_use]
    pub fn can_play_on(&self, top: impl Into<TopCard>) -> Playable<'_> {
        Playable::new(&self.cards, top.into())
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
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
