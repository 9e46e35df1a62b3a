//! Card, deck and play-legality core for a colour-matching card game, with
//! optional `no_std` support.
//!
//! The crate models the cards themselves, a shuffled [`Deck`] to draw from,
//! and the [`Hand`] a player holds, including which held cards may be played
//! on the top of the discard pile. Turn order and card effects are left to
//! the caller.
//!
//! # Example
//!
//! ```
//! use unors::{Card, Colour, Deck, Hand};
//!
//! let mut deck = Deck::from_seed(42);
//! let mut hand = Hand::new();
//! for _ in 0..7 {
//!     hand.pick_up(&mut deck).unwrap();
//! }
//!
//! let top = Card::normal(Colour::Red, 5).unwrap();
//! for card in hand.can_play_on(top) {
//!     let _ = card;
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod play;

// Re-export main types
pub use card::{Card, CardKind, Colour, Digit, Field};
pub use deck::{DECK_SIZE, Deck, standard_cards};
pub use error::{CardError, DrawError};
pub use hand::Hand;
pub use options::DeckOptions;
pub use play::{Playable, TopCard, is_playable};
