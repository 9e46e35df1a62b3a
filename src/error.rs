//! Error types for card construction and drawing.

use thiserror::Error;

use crate::card::{CardKind, Field};

/// Errors that can occur while constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Raw colour value does not name a colour.
    #[error("invalid colour value {0}: expected 1 (red), 2 (green), 3 (yellow) or 4 (blue)")]
    InvalidColour(u8),
    /// Number is outside the single-digit range.
    #[error("invalid card number {0}: expected a single digit from 0 to 9")]
    InvalidNumber(u8),
    /// Raw kind value does not name a card kind.
    #[error("invalid card kind value {0}: expected a value from 0 to 5")]
    InvalidKind(u8),
    /// A field the card kind requires was not supplied.
    #[error("missing {field}: {kind} cards require a {field}")]
    MissingField {
        /// The absent field.
        field: Field,
        /// Kind of the rejected card.
        kind: CardKind,
    },
    /// A field the card kind does not carry was supplied.
    #[error("unexpected {field}: {kind} cards must not have a {field}")]
    ForbiddenField {
        /// The offending field.
        field: Field,
        /// Kind of the rejected card.
        kind: CardKind,
    },
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}
