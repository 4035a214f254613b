// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Packed hand strength.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, Rank};

/// The category of a Poker hand, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The one-hot flag for this category, zero for a high card and `1 << 8`
    /// up to `1 << 15` for the other categories.
    pub const fn flag(self) -> u32 {
        match self {
            HandCategory::HighCard => 0,
            c => 1 << (HandStrength::CATEGORY_SHIFT + c as u32 - 1),
        }
    }

    /// Returns the category for a one-hot flag.
    pub fn from_flag(flag: u32) -> Option<HandCategory> {
        HandCategory::categories().find(|c| c.flag() == flag)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The strength of a Poker hand.
///
/// The strength is packed in an integer so that comparing two strengths
/// compares the hands:
///
/// ```text
///   +--------+--------+--------+
///   |xxxxxxxx|cccccccc|ppppssss|
///   +--------+--------+--------+
///   c = one-hot category flag (one pair=bit 8,...,straight flush=bit 15)
///   p = primary rank (0-14)
///   s = secondary rank (0-14)
/// ```
///
/// The meaning of the rank fields depends on the category, for example the
/// rank of the pair, the top card of a straight, or the trips and pair ranks of
/// a full house. Kickers are not encoded, hands that differ only by kickers
/// have the same strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandStrength(u32);

impl HandStrength {
    /// The shift of the category flags.
    pub const CATEGORY_SHIFT: u32 = 8;
    /// The mask of the category flags.
    pub const CATEGORY_MASK: u32 = 0x1ff << Self::CATEGORY_SHIFT;
    /// The shift of the primary rank.
    pub const PRIMARY_SHIFT: u32 = 4;
    /// The mask of a rank field once shifted down.
    pub const RANK_MASK: u32 = 0xf;

    /// Evaluates the strength of the hole cards plus the community cards.
    ///
    /// See [evaluate](crate::evaluate).
    #[inline]
    pub fn eval(hole: &[Card], community: &[Card]) -> Self {
        super::evaluate(hole, community)
    }

    /// Creates a strength given a category and the two rank fields, ranks
    /// larger than 15 are truncated to their low nibble.
    pub const fn new(category: HandCategory, primary: u8, secondary: u8) -> Self {
        let primary = (primary as u32 & Self::RANK_MASK) << Self::PRIMARY_SHIFT;
        let secondary = secondary as u32 & Self::RANK_MASK;
        Self(category.flag() | primary | secondary)
    }

    /// Creates a strength from its packed value.
    pub const fn from_value(value: u32) -> Self {
        Self(value)
    }

    /// The packed value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The category flag bits.
    pub fn category_bits(&self) -> u32 {
        self.0 & Self::CATEGORY_MASK
    }

    /// The hand category, given by the highest category flag.
    pub fn category(&self) -> HandCategory {
        let flags = self.category_bits() >> Self::CATEGORY_SHIFT;
        if flags == 0 {
            return HandCategory::HighCard;
        }

        // Bit 0 is one pair, bit 8 would be past straight flush.
        let top = (u32::BITS - flags.leading_zeros()) as usize;
        HandCategory::categories()
            .nth(top)
            .unwrap_or(HandCategory::StraightFlush)
    }

    /// The primary rank value.
    pub fn primary(&self) -> u8 {
        ((self.0 >> Self::PRIMARY_SHIFT) & Self::RANK_MASK) as u8
    }

    /// The secondary rank value.
    pub fn secondary(&self) -> u8 {
        (self.0 & Self::RANK_MASK) as u8
    }

    /// The primary rank, `None` if the field is not used.
    pub fn primary_rank(&self) -> Option<Rank> {
        Rank::from_value(self.primary())
    }

    /// The secondary rank, `None` if the field is not used.
    pub fn secondary_rank(&self) -> Option<Rank> {
        Rank::from_value(self.secondary())
    }
}

impl From<HandStrength> for u32 {
    fn from(strength: HandStrength) -> Self {
        strength.0
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category())?;

        match (self.primary_rank(), self.secondary_rank()) {
            (Some(p), Some(s)) => write!(f, " ({p}, {s})"),
            (Some(p), None) => write!(f, " ({p})"),
            _ => Ok(()),
        }
    }
}
