// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bitrank Poker hand strength evaluator.
//!
//! Computes the strength of the hole cards plus the community cards as a packed
//! integer that encodes the hand category and two tie-break ranks. Stronger
//! hands have larger values so comparing hands is an integer comparison.
//!
//! The evaluator is a pure function and can be called from many threads, see
//! the examples for evaluating all the 7 cards hands.
//!
//! ```
//! # use bitrank_eval::*;
//! let board = parse_cards("2C 9H QD JC 5S").unwrap();
//! let p1 = evaluate(&parse_cards("7S 3D").unwrap(), &board);
//! let p2 = evaluate(&parse_cards("QS 3H").unwrap(), &board);
//! assert_eq!(p1.category(), HandCategory::HighCard);
//! assert_eq!(p2.category(), HandCategory::OnePair);
//! assert!(p2 > p1);
//! ```
//!
//! Kickers are not part of the strength and the ace is only high in a
//! straight.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandCategory, HandStrength, evaluate};

// Reexport cards types.
pub use bitrank_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
