//! Error types for deck operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deal asks for more cards than the deck holds.
    ///
    /// `requested` saturates at `usize::MAX` when `sets * cards_per_set` overflows.
    #[error("insufficient cards: requested {requested}, available {available}")]
    InsufficientCards {
        /// Total number of cards requested.
        requested: usize,
        /// Number of cards in the deck.
        available: usize,
    },
    /// More hands were requested than there are cards in the deck.
    #[error("too many hands: requested {sets}, at most {max}")]
    TooManyHands {
        /// Number of hands requested.
        sets: usize,
        /// Largest number of hands a deal may produce.
        max: usize,
    },
}

/// Errors that can occur when building a deck from an explicit card order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The card list does not hold exactly one full deck.
    #[error("expected {expected} cards, found {found}")]
    WrongCardCount {
        /// Required number of cards.
        expected: usize,
        /// Number of cards supplied.
        found: usize,
    },
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur when parsing a card code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input is empty.
    #[error("empty card code")]
    Empty,
    /// The rank part is not one of `A`, `2`..`10`, `T`, `J`, `Q`, `K`.
    #[error("invalid card rank")]
    InvalidRank,
    /// The suit part is not one of `S`, `H`, `C`, `D`.
    #[error("invalid card suit")]
    InvalidSuit,
}
