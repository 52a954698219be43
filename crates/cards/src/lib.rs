// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverbed Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use riverbed_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//! ```
//!
//! a [CardSet] bitmask to hold the distinct cards of a hand, and a [Deck]
//! type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use riverbed_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! or through their card sets:
//!
//! ```
//! # use riverbed_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each_set(3, |hand| {
//!     assert_eq!(hand.len(), 3);
//!     counter += 1;
//! });
//! assert_eq!(counter, 22_100);
//! ```
//!
//! The **`parallel`** feature enables parallel iteration with a given number
//! of tasks, the closure `task_id` can be used to store per task data to
//! reduce contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use riverbed_cards::Deck;
//! // Iterate through all 7 cards hands (133M hands).
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 7, |task_id, hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 133_784_560);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit, parse_cards};

mod error;
pub use error::{Error, Result};

mod set;
pub use set::{CardSet, Iter};
