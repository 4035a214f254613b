// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand sampling.
use log::debug;
use rand::prelude::*;
use std::thread;

use super::{Card, Deck};

impl Deck {
    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of size k.
    ///
    /// The closure takes an usize that is the task identifier (0..num_tasks)
    /// and a slice of cards of length k, each task has its own random number
    /// generator.
    ///
    /// Panics if `num_tasks` is zero.
    pub fn par_sample<F>(&self, num_tasks: usize, samples_per_task: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!(num_tasks > 0, "num_tasks must be positive");

        if k > self.cards.len() || samples_per_task == 0 {
            return;
        }

        debug!("Sampling {samples_per_task} {k}-cards hands on each of {num_tasks} tasks");

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut rng = SmallRng::from_os_rng();
                    self.sample_with_rng(&mut rng, samples_per_task, k, |hand| f(task_id, hand));
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn par_sample_counts() {
        const NUM_TASKS: usize = 4;

        let per_task = (0..NUM_TASKS)
            .map(|_| AtomicU64::new(0))
            .collect::<Vec<_>>();

        Deck::default().par_sample(NUM_TASKS, 250, 7, |task_id, hand| {
            assert_eq!(hand.len(), 7);
            per_task[task_id].fetch_add(1, Ordering::Relaxed);
        });

        for counter in &per_task {
            assert_eq!(counter.load(Ordering::Relaxed), 250);
        }
    }

    #[test]
    fn par_sample_excludes_removed_cards() {
        let removed = Card::new(Rank::Ace, Suit::Spades);
        let mut deck = Deck::default();
        deck.remove(removed);

        let counter = AtomicU64::new(0);
        deck.par_sample(2, 500, 5, |_, hand| {
            assert!(!hand.contains(&removed));
            counter.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(counter.load(Ordering::Relaxed), 1_000);
    }
}
