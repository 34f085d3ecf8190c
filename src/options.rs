//! Print configuration and display adapters.

use core::fmt;

use crate::card::Card;
use crate::card::Rank;
use crate::hand::Hand;

/// How individual cards are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CardStyle {
    /// Short code, e.g. `KS`.
    #[default]
    Code,
    /// Long name, e.g. `King of Spades`.
    Name,
}

/// Configuration options for printing decks and hands.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{CardStyle, PrintOptions};
///
/// let options = PrintOptions::default()
///     .with_row_len(4)
///     .with_style(CardStyle::Name);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Number of cards per printed row of a full deck.
    pub row_len: usize,
    /// Card rendering style.
    pub style: CardStyle,
    /// Separator between cards on the same line.
    pub separator: &'static str,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            row_len: Rank::ALL.len(),
            style: CardStyle::Code,
            separator: " ",
        }
    }
}

impl PrintOptions {
    /// Sets the number of cards per row.
    ///
    /// A row length of 0 is treated as 1.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::PrintOptions;
    ///
    /// let options = PrintOptions::default().with_row_len(26);
    /// assert_eq!(options.row_len, 26);
    /// ```
    #[must_use]
    pub const fn with_row_len(mut self, row_len: usize) -> Self {
        self.row_len = row_len;
        self
    }

    /// Sets the card rendering style.
    #[must_use]
    pub const fn with_style(mut self, style: CardStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the separator between cards on a line.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::PrintOptions;
    ///
    /// let options = PrintOptions::default().with_separator(", ");
    /// assert_eq!(options.separator, ", ");
    /// ```
    #[must_use]
    pub const fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    pub(crate) fn write_line(&self, f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
        for (index, card) in cards.iter().enumerate() {
            if index > 0 {
                f.write_str(self.separator)?;
            }
            match self.style {
                CardStyle::Code => write!(f, "{card}")?,
                CardStyle::Name => f.write_str(&card.name())?,
            }
        }
        Ok(())
    }
}

/// Renders a full deck as rows of cards, see [`crate::Deck::display`].
#[derive(Debug, Clone, Copy)]
pub struct DeckDisplay<'a> {
    cards: &'a [Card],
    options: PrintOptions,
}

impl<'a> DeckDisplay<'a> {
    pub(crate) const fn new(cards: &'a [Card], options: PrintOptions) -> Self {
        Self { cards, options }
    }
}

impl fmt::Display for DeckDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cards.chunks(self.options.row_len.max(1)) {
            self.options.write_line(f, row)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Renders dealt hands one per line with a blank line between hands.
///
/// ```
/// use deckrs::{Deck, HandsDisplay, PrintOptions};
///
/// let deck = Deck::new();
/// let hands = deck.deal(2, 3).unwrap();
/// let text = HandsDisplay::new(&hands, PrintOptions::default()).to_string();
/// assert_eq!(text, "AH 2H 3H\n\n4H 5H 6H\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HandsDisplay<'a> {
    hands: &'a [Hand],
    options: PrintOptions,
}

impl<'a> HandsDisplay<'a> {
    /// Creates a display adapter for `hands`.
    #[must_use]
    pub const fn new(hands: &'a [Hand], options: PrintOptions) -> Self {
        Self { hands, options }
    }
}

impl fmt::Display for HandsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, hand) in self.hands.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            self.options.write_line(f, hand.cards())?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}
