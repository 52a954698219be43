// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use std::{
    sync::atomic::{AtomicUsize, Ordering},
    thread,
};

use super::{Deck, for_each_combination};
use crate::CardSet;

impl Deck {
    /// Parallel for each, calls the `f` closure with the card set of each
    /// k-cards hand.
    ///
    /// The closure takes the task identifier (0..num_tasks) and the hand.
    /// The hands are grouped by the deck position of their last card, tasks
    /// take the next group when they are done with the current one, starting
    /// from the largest groups.
    ///
    /// Panics if k is not 2 <= k <= 7 or if num_tasks is 0.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, CardSet) + Send + Sync,
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        // The last card position of the next group.
        let next = AtomicUsize::new(self.cards.len());

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let (f, next) = (&f, &next);
                s.spawn(move || {
                    while let Ok(end) =
                        next.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |m| m.checked_sub(1))
                    {
                        let last = end - 1;
                        if last + 1 < k {
                            break;
                        }

                        for_each_combination(last, k - 1, |positions| {
                            f(task_id, self.hand_set(positions | (1u64 << last)));
                        });
                    }
                });
            }
        });
    }
}
