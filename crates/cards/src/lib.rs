// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bitrank Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use bitrank_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert_eq!(ah.rank_value(), 14);
//! assert_eq!(kd.rank(), Rank::King);
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use bitrank_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to sample 10 random 7-cards hands:
//!
//! ```
//! # use bitrank_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(10, 7, |hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
//!
//! and to sample from 4 parallel tasks, the closure `task_id` can be used to
//! store per task data to reduce contention:
//!
//! ```
//! # use std::sync::atomic;
//! # use bitrank_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_sample(4, 10, 7, |_task_id, hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 40);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, InvalidCardId, Rank, Suit};

mod parse;
pub use parse::{ParseCardError, parse_cards};
