// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards validation errors.
use thiserror::Error;

use crate::Card;

/// Errors returned when building cards and card sets from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The rank is not in 2..=14 or the suit is not in 0..=3.
    #[error("invalid card rank={rank} suit={suit}")]
    InvalidCard {
        /// The rank value as given.
        rank: i32,
        /// The suit value as given.
        suit: i32,
    },
    /// The id is not the encoding of a card.
    #[error("invalid card id {0}")]
    InvalidCardId(u8),
    /// The value is not the encoding of a hand value.
    #[error("invalid hand value {0:#x}")]
    InvalidHandValue(u32),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A hand must have between 5 and 7 cards.
    #[error("invalid hand size {0}, expected 5 to 7 cards")]
    HandSize(usize),
    /// The text is not a valid card.
    #[error("invalid card string {0:?}")]
    ParseCard(String),
}

/// Cards result type.
pub type Result<T> = std::result::Result<T, Error>;
