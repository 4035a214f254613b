// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand strength evaluator.
//!
//! The evaluator folds the cards into per rank counts and rank masks, then runs
//! the category detectors from the strongest (straight flush) to the weakest
//! (one pair) stopping at the first match, when nothing matches the hand is a
//! high card.
//!
//! The result is a [HandStrength] with the category flag in the high bits and
//! two tie-break ranks in the low bits, so that hands compare as integers.

mod cascade;
pub use cascade::evaluate;

mod strength;
pub use strength::{HandCategory, HandStrength};
