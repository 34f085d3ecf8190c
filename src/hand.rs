//! Dealt hand representation.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;
use crate::options::PrintOptions;

/// A group of cards dealt from a deck.
///
/// Dealing copies cards out of the deck, so a hand never takes cards away
/// from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand holding a copy of `cards`.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
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

    /// Returns an iterator over the cards in the hand.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Hand {
    /// Formats the hand as space separated card codes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        PrintOptions::default().write_line(f, &self.cards)
    }
}
