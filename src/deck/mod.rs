//! Deck ownership, construction and ordering.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::options::{DeckDisplay, PrintOptions};
use crate::sort::{merge_sort_by, sorts_before};

mod deal;
mod shuffle;

/// A standard 52-card deck.
///
/// The deck always holds every (suit, rank) pair exactly once. Shuffling and
/// sorting reorder it in place; dealing and printing only read it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    /// Cards in their current order.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck in construction order.
    ///
    /// Suits follow [`Suit::ALL`] and within each suit ranks run from Ace to
    /// King.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck, Rank, Suit};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.cards()[0], Card::new(Suit::Hearts, Rank::Ace));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck holding `cards` in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` does not contain exactly [`DECK_SIZE`]
    /// cards or if a card appears more than once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            log::debug!("rejecting deck of {} cards", cards.len());
            return Err(DeckError::WrongCardCount {
                expected: DECK_SIZE,
                found: cards.len(),
            });
        }

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in &cards {
            if !seen.insert(*card) {
                log::debug!("rejecting deck with duplicate {card}");
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards })
    }

    /// Returns the cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current order split into rows of one suit length each.
    pub fn rows(&self) -> core::slice::Chunks<'_, Card> {
        self.cards.chunks(Rank::ALL.len())
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty, which never happens for a valid deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns an iterator over the cards in their current order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Sorts the deck with Spades first, then Hearts, Clubs and Diamonds,
    /// each suit running from King down to Ace.
    ///
    /// The result only depends on the cards in the deck, never on their
    /// order before sorting.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::new();
    /// deck.shuffle(7);
    /// deck.sort();
    /// assert_eq!(deck.cards()[0], Card::new(Suit::Spades, Rank::King));
    /// assert_eq!(deck.cards()[51], Card::new(Suit::Diamonds, Rank::Ace));
    /// ```
    pub fn sort(&mut self) {
        merge_sort_by(&mut self.cards, sorts_before);
        log::debug!("sorted deck");
    }

    /// Returns whether the deck is in sorted order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.cards
            .windows(2)
            .all(|pair| sorts_before(&pair[0], &pair[1]))
    }

    /// Returns a display adapter that prints the deck in rows.
    ///
    /// ```
    /// use deckrs::{Deck, PrintOptions};
    ///
    /// let deck = Deck::new();
    /// let text = deck.display(PrintOptions::default()).to_string();
    /// assert_eq!(text.lines().count(), 4);
    /// assert!(text.starts_with("AH 2H 3H"));
    /// ```
    #[must_use]
    pub fn display(&self, options: PrintOptions) -> DeckDisplay<'_> {
        DeckDisplay::new(&self.cards, options)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
