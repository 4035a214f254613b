// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

mod parallel;

/// A Poker card.
///
/// A card is packed in a single byte with the rank value in the low nibble and
/// a one-hot suit bit in the high nibble:
///
/// ```text
///   +--------+
///   |cdhsrrrr|
///   +--------+
///   r = rank value of card (deuce=2,trey=3,...,king=13,ace=14)
///   cdhs = suit of card
/// ```
///
/// Deserialization checks the byte so that a card always has a valid rank and
/// suit.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self((rank as u8) | ((suit as u8) << 4))
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match Rank::from_value(self.rank_value()) {
            Some(rank) => rank,
            None => panic!("Invalid rank 0x{:x}", self.0),
        }
    }

    /// Returns the rank value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub fn rank_value(&self) -> u8 {
        self.0 & 0xf
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        self.0 >> 4
    }
}

impl TryFrom<u8> for Card {
    type Error = InvalidCardId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        let suit = id >> 4;
        if Rank::from_value(id & 0xf).is_none() || suit.count_ones() != 1 {
            return Err(InvalidCardId(id));
        }

        Ok(Self(id))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

/// Error returned for a byte that is not a card id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card id 0x{0:02x}")]
pub struct InvalidCardId(pub u8);

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank, the discriminant is the rank value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank for a value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        use Rank::*;
        let rank = match value {
            2 => Deuce,
            3 => Trey,
            4 => Four,
            5 => Five,
            6 => Six,
            7 => Seven,
            8 => Eight,
            9 => Nine,
            10 => Ten,
            11 => Jack,
            12 => Queen,
            13 => King,
            14 => Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// A dense index in 0..4 for lookup tables (spades=0,...,clubs=3).
    #[inline]
    pub fn index(self) -> usize {
        (self as u8).trailing_zeros() as usize
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` when the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Hands are visited in lexicographic order of the deck positions.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = [0, 1, 2, 3, 4, 5, 6];
        let mut hand = [self.cards[0]; 7];

        loop {
            for (card, &p) in hand.iter_mut().zip(&pos[..k]) {
                *card = self.cards[p];
            }

            f(&hand[..k]);

            // Find the rightmost position that can still move forward.
            let mut i = k;
            loop {
                if i == 0 {
                    return;
                }

                i -= 1;
                if pos[i] < n - k + i {
                    break;
                }
            }

            pos[i] += 1;
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }

    /// Calls the `f` closure for `n` random k-cards hands.
    pub fn sample<F>(&self, n: usize, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        self.sample_with_rng(&mut rand::rng(), n, k, f);
    }

    /// Calls the `f` closure for `n` random k-cards hands drawn using `rng`.
    pub fn sample_with_rng<R, F>(&self, rng: &mut R, n: usize, k: usize, mut f: F)
    where
        R: Rng + ?Sized,
        F: FnMut(&[Card]),
    {
        if k > self.cards.len() {
            return;
        }

        let mut hand = Vec::with_capacity(k);
        for _ in 0..n {
            hand.clear();
            hand.extend(self.cards.choose_multiple(rng, k).copied());
            f(&hand);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
