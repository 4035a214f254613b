// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Category detection.
use crate::{Card, Suit};

use super::{HandCategory, HandStrength};

/// Ranks and suits of a set of cards.
///
/// Rank masks have bit `r` set for a card of rank value `r`, so bits 2 to 14
/// are the only ones used.
struct Profile {
    /// Number of cards for each rank value.
    counts: [u8; 15],
    /// Ranks present in any suit.
    ranks: u16,
    /// Ranks present in each suit.
    suits: [u16; Suit::COUNT],
}

impl Profile {
    fn new<'a>(cards: impl Iterator<Item = &'a Card>) -> Self {
        let mut profile = Profile {
            counts: [0; 15],
            ranks: 0,
            suits: [0; Suit::COUNT],
        };

        for card in cards {
            let rank = card.rank_value();
            profile.counts[rank as usize] += 1;
            profile.ranks |= 1 << rank;
            profile.suits[card.suit().index()] |= 1 << rank;
        }

        profile
    }

    /// Returns the ranks with at least `n` cards from the highest.
    fn ranks_with(&self, n: u8) -> impl Iterator<Item = u8> + '_ {
        (2..=14u8).rev().filter(move |&r| self.counts[r as usize] >= n)
    }

    /// Returns the suits masks with at least five cards.
    fn flush_suits(&self) -> impl Iterator<Item = u16> + '_ {
        self.suits.iter().copied().filter(|m| m.count_ones() >= 5)
    }
}

/// A detector returns the primary and secondary ranks when it matches.
type Detector = fn(&Profile) -> Option<(u8, u8)>;

/// The detectors from the strongest category to the weakest, the first match
/// sets the hand category.
const CASCADE: [(HandCategory, Detector); 8] = [
    (HandCategory::StraightFlush, straight_flush),
    (HandCategory::FourOfAKind, four_of_a_kind),
    (HandCategory::FullHouse, full_house),
    (HandCategory::Flush, flush),
    (HandCategory::Straight, straight),
    (HandCategory::ThreeOfAKind, three_of_a_kind),
    (HandCategory::TwoPair, two_pair),
    (HandCategory::OnePair, one_pair),
];

/// Evaluates the strength of the hole cards plus the community cards.
///
/// Works for any number of cards, with less than five cards the categories
/// that need five cards never match. When nothing matches the strength is a
/// high card using the hole cards only. With more than two hole cards the two
/// highest hole ranks are kept, not the two lowest.
///
/// Cards are expected to be unique, duplicates are not checked.
///
/// ```
/// # use bitrank_eval::*;
/// let hole = parse_cards("9S 9H").unwrap();
/// let board = parse_cards("9D 9C 2C").unwrap();
/// let s = evaluate(&hole, &board);
/// assert_eq!(s.category(), HandCategory::FourOfAKind);
/// assert_eq!(s.primary_rank(), Some(Rank::Nine));
/// ```
pub fn evaluate(hole: &[Card], community: &[Card]) -> HandStrength {
    let profile = Profile::new(hole.iter().chain(community));

    CASCADE
        .iter()
        .find_map(|&(category, detect)| {
            detect(&profile).map(|(primary, secondary)| {
                HandStrength::new(category, primary, secondary)
            })
        })
        .unwrap_or_else(|| high_card(hole))
}

/// Returns the top card of the highest five ranks run in `mask`.
///
/// The ace is only high, A-2-3-4-5 is not a run.
fn top_of_run(mask: u16) -> Option<u8> {
    const RUN: u16 = 0b1_1111;

    (6..=14u8).rev().find(|&top| {
        let run = RUN << (top - 4);
        mask & run == run
    })
}

/// Returns the highest rank in a mask.
fn top_rank(mask: u16) -> u8 {
    (u16::BITS - 1 - mask.leading_zeros()) as u8
}

fn straight_flush(p: &Profile) -> Option<(u8, u8)> {
    p.flush_suits()
        .filter_map(top_of_run)
        .max()
        .map(|top| (top, 0))
}

fn four_of_a_kind(p: &Profile) -> Option<(u8, u8)> {
    p.ranks_with(4).next().map(|r| (r, 0))
}

fn full_house(p: &Profile) -> Option<(u8, u8)> {
    let mut trips = p.ranks_with(3);
    let top = trips.next()?;

    // A lower trips is the pair only when there are exactly two trips.
    let lower_trips = match (trips.next(), trips.next()) {
        (Some(lower), None) => Some(lower),
        _ => None,
    };

    let pair = p
        .ranks_with(2)
        .find(|&r| p.counts[r as usize] < 3)
        .max(lower_trips)?;

    Some((top, pair))
}

fn flush(p: &Profile) -> Option<(u8, u8)> {
    p.flush_suits().map(top_rank).max().map(|r| (r, 0))
}

fn straight(p: &Profile) -> Option<(u8, u8)> {
    top_of_run(p.ranks).map(|top| (top, 0))
}

fn three_of_a_kind(p: &Profile) -> Option<(u8, u8)> {
    p.ranks_with(3).next().map(|r| (r, 0))
}

fn two_pair(p: &Profile) -> Option<(u8, u8)> {
    let mut pairs = p.ranks_with(2);
    let high = pairs.next()?;
    let low = pairs.next()?;
    Some((high, low))
}

fn one_pair(p: &Profile) -> Option<(u8, u8)> {
    p.ranks_with(2).next().map(|r| (r, 0))
}

fn high_card(hole: &[Card]) -> HandStrength {
    let (mut high, mut low) = (0, 0);
    for r in hole.iter().map(Card::rank_value) {
        if r > high {
            low = high;
            high = r;
        } else if r > low {
            low = r;
        }
    }

    HandStrength::new(HandCategory::HighCard, high, low)
}
