//! Deck configuration options.

/// Configuration options for building a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use unors::DeckOptions;
///
/// let options = DeckOptions::default().with_decks(2);
/// assert_eq!(options.decks, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of standard sets shuffled together.
    pub decks: u8,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self { decks: 1 }
    }
}

impl DeckOptions {
    /// Sets the number of standard sets.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(3);
    /// assert_eq!(options.decks, 3);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Returns the number of cards a deck built with these options holds.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.decks as usize * crate::deck::DECK_SIZE
    }
}
