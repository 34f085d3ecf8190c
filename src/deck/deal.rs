use alloc::vec::Vec;

use crate::error::DealError;
use crate::hand::Hand;

use super::Deck;

impl Deck {
    /// Deals `sets` hands of `cards_per_set` cards from the top of the deck.
    ///
    /// Hands are contiguous runs of the current order. The deck is left
    /// untouched, so dealing twice without shuffling returns the same hands.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if `sets * cards_per_set`
    /// exceeds the number of cards in the deck, and [`DealError::TooManyHands`]
    /// if `sets` exceeds it, which only matters for empty hands.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DealError};
    ///
    /// let deck = Deck::new();
    /// let hands = deck.deal(2, 5).unwrap();
    /// assert_eq!(hands.len(), 2);
    /// assert_eq!(hands[1].len(), 5);
    ///
    /// assert!(matches!(
    ///     deck.deal(5, 11),
    ///     Err(DealError::InsufficientCards { requested: 55, available: 52 })
    /// ));
    /// ```
    pub fn deal(&self, sets: usize, cards_per_set: usize) -> Result<Vec<Hand>, DealError> {
        let available = self.cards.len();
        let requested = sets.saturating_mul(cards_per_set);

        if requested > available {
            log::debug!("cannot deal {sets} x {cards_per_set}, only {available} cards");
            return Err(DealError::InsufficientCards {
                requested,
                available,
            });
        }

        if sets > available {
            log::debug!("cannot deal {sets} hands from {available} cards");
            return Err(DealError::TooManyHands {
                sets,
                max: available,
            });
        }

        let hands: Vec<Hand> = (0..sets)
            .map(|set| {
                let start = set * cards_per_set;
                Hand::from_cards(&self.cards[start..start + cards_per_set])
            })
            .collect();

        log::trace!("dealt {sets} hands of {cards_per_set} cards");
        Ok(hands)
    }
}
