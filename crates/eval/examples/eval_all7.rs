// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ```
//
// The first two cards of each hand are the hole cards.

use std::time::Instant;

use bitrank_eval::*;

fn main() {
    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandCategory::COUNT];

    Deck::default().for_each(7, |hand| {
        let (hole, community) = hand.split_at(2);
        let category = evaluate(hole, community).category();
        counts[category as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category as usize]);
    }
}
