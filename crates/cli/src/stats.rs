// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranks statistics over all hands.
use log::info;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant},
};

use riverbed_eval::{CardSet, Deck, HandRank, HandValue};

/// Statistics configuration.
#[derive(Debug)]
pub struct Config {
    /// Number of parallel tasks.
    pub tasks: usize,
    /// Number of cards in a hand.
    pub cards: usize,
}

/// Hand ranks counts.
#[derive(Debug)]
pub struct Stats {
    counts: [u64; HandRank::COUNT],
    elapsed: Duration,
}

impl Stats {
    /// Total number of evaluated hands.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of hands with the given rank.
    pub fn count(&self, rank: HandRank) -> u64 {
        self.counts[rank as usize]
    }

    /// Prints the counts and the evaluation speed.
    pub fn print(&self) {
        let elapsed = self.elapsed.as_secs_f64();
        let total = self.total();

        println!("Total hands      {total}");
        println!("Elapsed:         {elapsed:.3}s");
        println!("Hands/sec:       {:.0}\n", total as f64 / elapsed.max(1e-9));

        for rank in HandRank::ranks() {
            println!("{:<17}{}", format!("{rank}:"), self.count(rank));
        }
    }
}

/// Evaluates hands from `config.tasks` parallel tasks.
pub fn run(config: &Config) -> Stats {
    // Per task counters to avoid contention.
    let task_counters = (0..config.tasks)
        .map(|_| {
            (0..HandRank::COUNT)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let count = |task_id: usize, hand: CardSet| {
        let rank = HandValue::eval_set(hand).rank();
        task_counters[task_id][rank as usize].fetch_add(1, Ordering::Relaxed);
    };

    let deck = Deck::default();
    let now = Instant::now();

    info!(
        "Evaluating all {}-cards hands with {} tasks",
        config.cards, config.tasks
    );
    deck.par_for_each(config.tasks, config.cards, count);

    let elapsed = now.elapsed();

    let mut counts = [0; HandRank::COUNT];
    for (rank, total) in counts.iter_mut().enumerate() {
        *total = task_counters
            .iter()
            .map(|c| c[rank].load(Ordering::Relaxed))
            .sum();
    }

    Stats { counts, elapsed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_5cards_hands() {
        let stats = run(&Config { tasks: 3, cards: 5 });

        assert_eq!(stats.total(), 2_598_960);

        let expected = [
            1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 40,
        ];
        for (rank, count) in HandRank::ranks().zip(expected) {
            assert_eq!(stats.count(rank), count, "{rank}");
        }
    }

    // Goes through 133M hands, slow in debug mode.
    #[test]
    #[ignore]
    fn all_7cards_hands() {
        let stats = run(&Config { tasks: 4, cards: 7 });

        assert_eq!(stats.total(), 133_784_560);
        assert_eq!(stats.count(HandRank::StraightFlush), 41_584);
        assert_eq!(stats.count(HandRank::HighCard), 23_294_460);
    }
}
