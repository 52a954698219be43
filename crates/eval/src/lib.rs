// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverbed Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator reads the
//! per suit ranks masks of a [CardSet] and finds the best five cards category
//! directly, without going through the 21 five cards subsets of a 7 cards hand,
//! see the `stats` command of the CLI for measuring performance on your
//! hardware.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use riverbed_eval::*;
//! // 2S, 3S, .., JS
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]);
//! let v2 = HandValue::eval(&cards[5..]);
//! assert!(v2 > v1);
//! ```
//!
//! or evaluate 7 `(rank, suit)` pairs from untrusted input with
//! [evaluate_hand], invalid or duplicate cards are reported as errors:
//!
//! ```
//! # use riverbed_eval::*;
//! let hand = [(2, 3), (2, 2), (2, 1), (2, 0), (5, 3), (9, 2), (13, 1)];
//! assert_eq!(evaluate_hand(&hand).unwrap().rank(), HandRank::FourOfAKind);
//!
//! let hand = [(2, 3), (2, 3), (2, 1), (2, 0), (5, 3), (9, 2), (13, 1)];
//! assert!(matches!(evaluate_hand(&hand), Err(Error::DuplicateCard(_))));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{
    HandRank, HandValue, compare, evaluate_hand, evaluate_holding, evaluate_strings,
};

pub mod showdown;
pub use showdown::Showdown;

// Reexport cards types.
pub use riverbed_cards::{Card, CardSet, Deck, Error, Rank, Result, Suit, parse_cards};
