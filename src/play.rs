//! Play legality against the top of the discard pile.

use core::slice;

use crate::card::{Card, Colour};

/// The card on top of the discard pile, as seen by the legality check.
///
/// A wild card carries no colour of its own; the colour its player declared is
/// attached here by whoever placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopCard {
    card: Card,
    declared: Option<Colour>,
}

impl TopCard {
    /// Wraps a card with no declared colour.
    #[must_use]
    pub const fn new(card: Card) -> Self {
        Self {
            card,
            declared: None,
        }
    }

    /// Sets the colour declared for a wild card.
    ///
    /// Ignored for coloured cards, whose printed colour always applies.
    #[must_use]
    pub const fn declare(mut self, colour: Colour) -> Self {
        self.declared = Some(colour);
        self
    }

    /// Returns the underlying card.
    #[must_use]
    pub const fn card(&self) -> Card {
        self.card
    }

    /// Returns the colour to match: the declared one for wild cards, the
    /// printed one otherwise.
    #[must_use]
    pub const fn colour(&self) -> Option<Colour> {
        if self.card.is_wild() {
            self.declared
        } else {
            self.card.colour()
        }
    }
}

impl From<Card> for TopCard {
    fn from(card: Card) -> Self {
        Self::new(card)
    }
}

/// Returns whether `candidate` may be played on `top`.
///
/// - Wild cards are always playable.
/// - On a wild card with a declared colour, any card of that colour is
///   playable; with no declared colour, anything is.
/// - On a normal card, normal cards matching its colour or number are playable.
/// - On a skip, draw two or reverse, only cards of the same kind are playable.
///
/// ```
/// use unors::{Card, Colour, TopCard, is_playable};
///
/// let top = TopCard::new(Card::Skip(Colour::Yellow));
/// assert!(is_playable(&Card::Skip(Colour::Blue), &top));
/// assert!(!is_playable(&Card::DrawTwo(Colour::Yellow), &top));
/// ```
#[must_use]
pub fn is_playable(candidate: &Card, top: &TopCard) -> bool {
    if candidate.is_wild() {
        return true;
    }

    match top.card {
        Card::Wild | Card::WildDrawFour => top
            .colour()
            .is_none_or(|colour| candidate.colour() == Some(colour)),
        Card::Normal { colour, number } => matches!(
            *candidate,
            Card::Normal { colour: c, number: n } if c == colour || n == number
        ),
        Card::Skip(_) | Card::DrawTwo(_) | Card::Reverse(_) => candidate.kind() == top.card.kind(),
    }
}

/// Iterator over the playable cards of a hand, in hand order.
///
/// Created by [`Hand::can_play_on`](crate::Hand::can_play_on). Each call to
/// `can_play_on` starts a fresh pass over the hand.
#[derive(Debug, Clone)]
pub struct Playable<'a> {
    cards: slice::Iter<'a, Card>,
    top: TopCard,
}

impl<'a> Playable<'a> {
    pub(crate) fn new(cards: &'a [Card], top: TopCard) -> Self {
        Self {
            cards: cards.iter(),
            top,
        }
    }
}

impl<'a> Iterator for Playable<'a> {
    type Item = &'a Card;

    fn next(&mut self) -> Option<Self::Item> {
        let top = self.top;
        self.cards.find(|card| is_playable(card, &top))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.cards.size_hint().1)
    }
}

impl DoubleEndedIterator for Playable<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let top = self.top;
        self.cards.rfind(|card| is_playable(card, &top))
    }
}

impl core::iter::FusedIterator for Playable<'_> {}
