//! A seeded, sortable 52-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that can be shuffled from a seed,
//! dealt into hands without losing cards, and sorted with Spades first and
//! a low Ace.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, HandsDisplay, PrintOptions};
//!
//! let mut deck = Deck::new();
//! deck.shuffle(42);
//!
//! let hands = deck.deal(2, 5).unwrap();
//! println!("{}", HandsDisplay::new(&hands, PrintOptions::default()));
//!
//! deck.sort();
//! assert!(deck.is_sorted());
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
pub mod sort;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, DeckError, ParseCardError};
pub use hand::Hand;
pub use options::{CardStyle, DeckDisplay, HandsDisplay, PrintOptions};
pub use sort::{merge_sort_by, sort_order, sorts_before};
