// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories statistics.
use anyhow::{Result, bail};
use log::info;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use bitrank_eval::{Deck, HandCategory, evaluate};

/// Statistics configuration.
#[derive(Debug)]
pub struct Config {
    /// Number of cards in a hand, the first two are the hole cards.
    pub cards: usize,
    /// Number of parallel sampling tasks.
    pub tasks: usize,
    /// Total number of samples.
    pub samples: usize,
    /// Evaluate all hands instead of sampling.
    pub all: bool,
}

/// Hands count for each category.
pub type Counts = [u64; HandCategory::COUNT];

/// Computes and prints the categories frequencies.
pub fn run(config: &Config) -> Result<()> {
    let now = Instant::now();
    let counts = category_counts(config)?;
    let elapsed = now.elapsed().as_secs_f64();

    let total = counts.iter().sum::<u64>();
    info!(
        "Evaluated {total} hands in {elapsed:.3}s ({:.0} hands/sec)",
        total as f64 / elapsed
    );

    println!("{:<17}{:>12}{:>10}", "Category", "Hands", "Freq");
    for category in HandCategory::categories().rev() {
        let count = counts[category as usize];
        let freq = if total > 0 {
            100.0 * count as f64 / total as f64
        } else {
            0.0
        };

        println!("{:<17}{count:>12}{freq:>9.4}%", category.to_string());
    }

    Ok(())
}

/// Counts the categories of all or sampled hands.
pub fn category_counts(config: &Config) -> Result<Counts> {
    if !(2..=7).contains(&config.cards) {
        bail!("hand size must be between 2 and 7 cards, got {}", config.cards);
    }

    if config.tasks == 0 {
        bail!("the number of tasks must be positive");
    }

    let deck = Deck::default();

    if config.all {
        let mut counts = Counts::default();
        deck.for_each(config.cards, |hand| {
            let (hole, community) = hand.split_at(2);
            counts[evaluate(hole, community).category() as usize] += 1;
        });

        return Ok(counts);
    }

    // Per task counters to avoid contention.
    let task_counters = (0..config.tasks)
        .map(|_| {
            (0..HandCategory::COUNT)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let samples_per_task = config.samples.div_ceil(config.tasks);
    deck.par_sample(config.tasks, samples_per_task, config.cards, |task_id, hand| {
        let (hole, community) = hand.split_at(2);
        let category = evaluate(hole, community).category();
        task_counters[task_id][category as usize].fetch_add(1, Ordering::Relaxed);
    });

    let mut counts = Counts::default();
    for counters in &task_counters {
        for (count, counter) in counts.iter_mut().zip(counters) {
            *count += counter.load(Ordering::Relaxed);
        }
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_counts() {
        let config = Config {
            cards: 7,
            tasks: 3,
            samples: 3_000,
            all: false,
        };

        let counts = category_counts(&config).unwrap();
        assert_eq!(counts.iter().sum::<u64>(), 3_000);
        assert!(counts[HandCategory::OnePair as usize] > 0);
    }

    #[test]
    fn samples_are_rounded_up_per_task() {
        let config = Config {
            cards: 5,
            tasks: 4,
            samples: 10,
            all: false,
        };

        let counts = category_counts(&config).unwrap();
        assert_eq!(counts.iter().sum::<u64>(), 12);
    }

    #[test]
    fn all_two_cards_hands() {
        let config = Config {
            cards: 2,
            tasks: 1,
            samples: 0,
            all: true,
        };

        let counts = category_counts(&config).unwrap();
        assert_eq!(counts.iter().sum::<u64>(), 1_326);
        assert_eq!(counts[HandCategory::OnePair as usize], 78);
        assert_eq!(counts[HandCategory::HighCard as usize], 1_248);
    }

    #[test]
    fn all_five_cards_hands() {
        let config = Config {
            cards: 5,
            tasks: 1,
            samples: 0,
            all: true,
        };

        let counts = category_counts(&config).unwrap();
        assert_eq!(counts.iter().sum::<u64>(), 2_598_960);
        assert_eq!(counts[HandCategory::FourOfAKind as usize], 624);
        assert_eq!(counts[HandCategory::FullHouse as usize], 3_744);
        assert_eq!(counts[HandCategory::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandCategory::TwoPair as usize], 123_552);
        assert_eq!(counts[HandCategory::OnePair as usize], 1_098_240);

        // Nine runs per suit without the wheel.
        assert_eq!(counts[HandCategory::StraightFlush as usize], 36);
        assert_eq!(counts[HandCategory::Straight as usize], 9 * 1_020);
    }

    #[test]
    fn invalid_config() {
        let config = Config {
            cards: 8,
            tasks: 1,
            samples: 1,
            all: false,
        };
        assert!(category_counts(&config).is_err());

        let config = Config {
            cards: 7,
            tasks: 0,
            samples: 1,
            all: false,
        };
        assert!(category_counts(&config).is_err());
    }
}
