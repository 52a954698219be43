// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown between holdings sharing the same board.
use serde::{Deserialize, Serialize};

use crate::{Card, CardSet, HandValue, Result};

/// The result of a showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    values: Vec<HandValue>,
    winners: Vec<usize>,
}

impl Showdown {
    /// Evaluates each holding with the board and finds the winners.
    ///
    /// All cards, board and holdings, must be distinct. More than one winner
    /// means a split pot.
    ///
    /// ```
    /// # use riverbed_eval::*;
    /// let board = [
    ///     "Qs".parse().unwrap(), "Js".parse().unwrap(), "Ts".parse().unwrap(),
    ///     "2h".parse().unwrap(), "3d".parse().unwrap(),
    /// ];
    /// let ak = ["As".parse().unwrap(), "Ks".parse().unwrap()];
    /// let qq = ["Qh".parse().unwrap(), "Qd".parse().unwrap()];
    ///
    /// let showdown = Showdown::new(&board, &[qq, ak]).unwrap();
    /// assert_eq!(showdown.winners(), &[1]);
    /// ```
    pub fn new(board: &[Card; 5], holdings: &[[Card; 2]]) -> Result<Showdown> {
        let mut used = CardSet::from_cards(board)?;
        let board = used;

        let values = holdings
            .iter()
            .map(|hole| -> Result<HandValue> {
                let mut hand = board;
                for &card in hole {
                    used.try_insert(card)?;
                    hand.insert(card);
                }

                Ok(HandValue::eval_set(hand))
            })
            .collect::<Result<Vec<_>>>()?;

        let winners = values
            .iter()
            .max()
            .map(|best| {
                values
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| *v == best)
                    .map(|(idx, _)| idx)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Showdown { values, winners })
    }

    /// The hand value of each holding, in the same order as the holdings.
    pub fn values(&self) -> &[HandValue] {
        &self.values
    }

    /// The indices of the winning holdings.
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }

    /// Checks if more than one holding wins.
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}
