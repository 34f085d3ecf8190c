use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::Deck;

impl Deck {
    /// Reorders the deck into a pseudorandom permutation derived from `seed`.
    ///
    /// Cards are drawn one at a time from a random position of the remaining
    /// cards and appended to the new order, which then replaces the old one.
    /// Two decks in the same order shuffled with the same seed end up in the
    /// same order.
    ///
    /// The generator is a [`ChaCha8Rng`] seeded with the two's complement bits
    /// of `seed`, so a given seed yields the same order on every platform.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let mut a = Deck::new();
    /// let mut b = Deck::new();
    /// a.shuffle(-3);
    /// b.shuffle(-3);
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle(&mut self, seed: i64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
        let mut remaining = core::mem::take(&mut self.cards);
        let mut shuffled = Vec::with_capacity(remaining.len());

        while !remaining.is_empty() {
            let index = rng.random_range(0..remaining.len());
            shuffled.push(remaining.remove(index));
        }

        self.cards = shuffled;
        log::debug!("shuffled deck with seed {seed}");
    }
}
