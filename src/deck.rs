//! Deck composition, shuffling and drawing.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Colour, Digit};
use crate::error::DrawError;
use crate::options::DeckOptions;

/// Number of cards in one standard set.
pub const DECK_SIZE: usize = 108;

/// Returns one standard set in composition order, unshuffled.
///
/// Per colour: one 0, two of each 1 to 9, and two each of skip, draw two and
/// reverse. Then four wild and four wild draw-four cards.
#[must_use]
pub fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    push_standard_set(&mut cards);
    cards
}

fn push_standard_set(cards: &mut Vec<Card>) {
    for colour in Colour::ALL {
        for number in Digit::all() {
            let copies = if number.get() == 0 { 1 } else { 2 };
            for _ in 0..copies {
                cards.push(Card::Normal { colour, number });
            }
        }

        for _ in 0..2 {
            cards.push(Card::Skip(colour));
            cards.push(Card::DrawTwo(colour));
            cards.push(Card::Reverse(colour));
        }
    }

    for _ in 0..4 {
        cards.push(Card::Wild);
        cards.push(Card::WildDrawFour);
    }
}

/// A shuffled, depletable source of cards.
///
/// Cards are drawn from the end of the current order. The deck never grows;
/// replenishing it (for example from a discard pile) means building a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds one standard set and shuffles it with `rng`.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use unors::{DECK_SIZE, Deck};
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::standard(&mut rng);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn standard<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_options(&DeckOptions::default(), rng)
    }

    /// Builds the configured number of standard sets and shuffles them
    /// together with `rng`.
    #[must_use]
    pub fn with_options<R: Rng + ?Sized>(options: &DeckOptions, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(options.total_cards());
        for _ in 0..options.decks {
            push_standard_set(&mut cards);
        }
        cards.shuffle(rng);

        tracing::debug!(cards = cards.len(), decks = options.decks, "built deck");
        Self { cards }
    }

    /// Builds one standard set shuffled by a `ChaCha8` generator seeded with
    /// `seed`. The same seed always yields the same order.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::standard(&mut rng)
    }

    /// Creates a deck holding `cards` in the given order, without shuffling.
    ///
    /// The last card in `cards` is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the card at the end of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        let Some(card) = self.cards.pop() else {
            tracing::debug!("draw from empty deck");
            return Err(DrawError::EmptyDeck);
        };
        tracing::trace!(%card, remaining = self.cards.len(), "drew card");
        Ok(card)
    }

    /// Returns the remaining cards; the last one is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Counts the remaining copies of each distinct card.
    #[must_use]
    pub fn tally(&self) -> HashMap<Card, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }
}
