//! Card types and construction rules.

use core::fmt;

use crate::error::CardError;

/// Card colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
}

impl Colour {
    /// Every colour, in the order sets are composed.
    pub const ALL: [Self; 4] = [Self::Red, Self::Green, Self::Yellow, Self::Blue];
}

impl TryFrom<u8> for Colour {
    type Error = CardError;

    /// Converts a raw colour value (1 = red, 2 = green, 3 = yellow, 4 = blue).
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Red),
            2 => Ok(Self::Green),
            3 => Ok(Self::Yellow),
            4 => Ok(Self::Blue),
            other => Err(CardError::InvalidColour(other)),
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
        })
    }
}

/// Card kind.
///
/// The kind decides which fields a card carries:
///
/// | kind | colour | number |
/// |---|---|---|
/// | `Normal` | required | required |
/// | `Skip`, `DrawTwo`, `Reverse` | required | absent |
/// | `Wild`, `WildDrawFour` | absent | absent |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// Coloured, numbered card.
    Normal,
    /// Skip the next player.
    Skip,
    /// Next player draws two.
    DrawTwo,
    /// Reverse the direction of play.
    Reverse,
    /// Wild card; the player declares a colour.
    Wild,
    /// Wild card that also makes the next player draw four.
    WildDrawFour,
}

impl CardKind {
    /// Returns whether cards of this kind carry a colour.
    #[must_use]
    pub const fn requires_colour(self) -> bool {
        !self.is_wild()
    }

    /// Returns whether cards of this kind carry a number.
    #[must_use]
    pub const fn requires_number(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Returns whether this is one of the wild kinds.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Self::Wild | Self::WildDrawFour)
    }
}

impl TryFrom<u8> for CardKind {
    type Error = CardError;

    /// Converts a raw kind value (0 = normal, 1 = skip, 2 = draw two,
    /// 3 = reverse, 4 = wild draw four, 5 = wild).
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Skip),
            2 => Ok(Self::DrawTwo),
            3 => Ok(Self::Reverse),
            4 => Ok(Self::WildDrawFour),
            5 => Ok(Self::Wild),
            other => Err(CardError::InvalidKind(other)),
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Skip => "skip",
            Self::DrawTwo => "draw two",
            Self::Reverse => "reverse",
            Self::Wild => "wild",
            Self::WildDrawFour => "wild draw four",
        })
    }
}

/// A card field, as named in construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The card colour.
    Colour,
    /// The card number.
    Number,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Colour => "colour",
            Self::Number => "number",
        })
    }
}

/// The number printed on a normal card, always in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Largest printed number.
    pub const MAX: u8 = 9;

    /// Creates a digit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidNumber`] if `value` is greater than 9.
    pub const fn new(value: u8) -> Result<Self, CardError> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(CardError::InvalidNumber(value))
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    pub(crate) fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX).map(Self)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A playing card.
///
/// Each variant carries exactly the fields its kind needs, so a built card
/// can never hold an illegal field combination. Cards compare structurally;
/// two cards of the same kind, colour and number are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// Coloured, numbered card.
    Normal {
        /// Card colour.
        colour: Colour,
        /// Printed number.
        number: Digit,
    },
    /// Skip card of the given colour.
    Skip(Colour),
    /// Draw-two card of the given colour.
    DrawTwo(Colour),
    /// Reverse card of the given colour.
    Reverse(Colour),
    /// Wild card.
    Wild,
    /// Wild draw-four card.
    WildDrawFour,
}

impl Card {
    /// Builds a card from a kind and optional fields.
    ///
    /// The number is range-checked first, then the fields are checked against
    /// what `kind` requires.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::{Card, CardError, CardKind, Colour, Field};
    ///
    /// let card = Card::new(CardKind::Skip, Some(Colour::Red), None).unwrap();
    /// assert_eq!(card, Card::Skip(Colour::Red));
    ///
    /// let err = Card::new(CardKind::Skip, Some(Colour::Red), Some(3)).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     CardError::ForbiddenField { field: Field::Number, kind: CardKind::Skip }
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidNumber`] for a number above 9,
    /// [`CardError::MissingField`] when a required field is absent and
    /// [`CardError::ForbiddenField`] when a field the kind does not carry is
    /// present.
    pub fn new(kind: CardKind, colour: Option<Colour>, number: Option<u8>) -> Result<Self, CardError> {
        number
            .map(Digit::new)
            .transpose()
            .and_then(|number| Self::assemble(kind, colour, number))
            .map_err(rejected)
    }

    /// Builds a card from raw values.
    ///
    /// Values are checked in order: colour, number, kind, then the fields
    /// against the kind. See [`Colour`] and [`CardKind`] for the raw encodings.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidColour`], [`CardError::InvalidNumber`] or
    /// [`CardError::InvalidKind`] for malformed values, and the same field
    /// errors as [`Card::new`].
    pub fn from_raw(kind: u8, colour: Option<u8>, number: Option<u8>) -> Result<Self, CardError> {
        Self::parse_raw(kind, colour, number).map_err(rejected)
    }

    fn parse_raw(kind: u8, colour: Option<u8>, number: Option<u8>) -> Result<Self, CardError> {
        let colour = colour.map(Colour::try_from).transpose()?;
        let number = number.map(Digit::new).transpose()?;
        let kind = CardKind::try_from(kind)?;
        Self::assemble(kind, colour, number)
    }

    /// Creates a normal card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidNumber`] if `number` is greater than 9.
    pub fn normal(colour: Colour, number: u8) -> Result<Self, CardError> {
        let number = Digit::new(number)?;
        Ok(Self::Normal { colour, number })
    }

    fn assemble(
        kind: CardKind,
        colour: Option<Colour>,
        number: Option<Digit>,
    ) -> Result<Self, CardError> {
        match kind {
            CardKind::Normal => match (colour, number) {
                (Some(colour), Some(number)) => Ok(Self::Normal { colour, number }),
                (None, _) => Err(CardError::MissingField {
                    field: Field::Colour,
                    kind,
                }),
                (Some(_), None) => Err(CardError::MissingField {
                    field: Field::Number,
                    kind,
                }),
            },
            CardKind::Skip => action_colour(kind, colour, number).map(Self::Skip),
            CardKind::DrawTwo => action_colour(kind, colour, number).map(Self::DrawTwo),
            CardKind::Reverse => action_colour(kind, colour, number).map(Self::Reverse),
            CardKind::Wild => colourless(kind, colour, number).map(|()| Self::Wild),
            CardKind::WildDrawFour => colourless(kind, colour, number).map(|()| Self::WildDrawFour),
        }
    }

    /// Returns the card kind.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self {
            Self::Normal { .. } => CardKind::Normal,
            Self::Skip(_) => CardKind::Skip,
            Self::DrawTwo(_) => CardKind::DrawTwo,
            Self::Reverse(_) => CardKind::Reverse,
            Self::Wild => CardKind::Wild,
            Self::WildDrawFour => CardKind::WildDrawFour,
        }
    }

    /// Returns the printed colour, or `None` for wild cards.
    #[must_use]
    pub const fn colour(&self) -> Option<Colour> {
        match *self {
            Self::Normal { colour, .. }
            | Self::Skip(colour)
            | Self::DrawTwo(colour)
            | Self::Reverse(colour) => Some(colour),
            Self::Wild | Self::WildDrawFour => None,
        }
    }

    /// Returns the printed number, or `None` for anything but normal cards.
    #[must_use]
    pub const fn number(&self) -> Option<u8> {
        match *self {
            Self::Normal { number, .. } => Some(number.get()),
            _ => None,
        }
    }

    /// Returns whether the card is wild.
    #[must_use]
    pub const fn is_wild(&self) -> bool {
        self.kind().is_wild()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal { colour, number } => write!(f, "{colour} {number}"),
            Self::Skip(colour) | Self::DrawTwo(colour) | Self::Reverse(colour) => {
                write!(f, "{colour} {}", self.kind())
            }
            Self::Wild | Self::WildDrawFour => write!(f, "{}", self.kind()),
        }
    }
}

/// Colour check shared by skip, draw-two and reverse cards.
fn action_colour(
    kind: CardKind,
    colour: Option<Colour>,
    number: Option<Digit>,
) -> Result<Colour, CardError> {
    let Some(colour) = colour else {
        return Err(CardError::MissingField {
            field: Field::Colour,
            kind,
        });
    };
    if number.is_some() {
        return Err(CardError::ForbiddenField {
            field: Field::Number,
            kind,
        });
    }
    Ok(colour)
}

fn colourless(kind: CardKind, colour: Option<Colour>, number: Option<Digit>) -> Result<(), CardError> {
    if colour.is_some() {
        return Err(CardError::ForbiddenField {
            field: Field::Colour,
            kind,
        });
    }
    if number.is_some() {
        return Err(CardError::ForbiddenField {
            field: Field::Number,
            kind,
        });
    }
    Ok(())
}

fn rejected(err: CardError) -> CardError {
    tracing::trace!(%err, "rejected card");
    err
}
