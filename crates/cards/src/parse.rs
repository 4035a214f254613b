// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards text notation.
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Error returned when parsing a card from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The card is missing its rank or its suit.
    #[error("invalid card `{0}`, expected a rank and a suit like `AS` or `Td`")]
    InvalidLength(String),
    /// Unknown rank symbol.
    #[error("invalid rank in card `{0}`")]
    InvalidRank(String),
    /// Unknown suit symbol.
    #[error("invalid suit in card `{0}`")]
    InvalidSuit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card like `AS`, `td`, `10h` or `Q♥`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars.next_back();
        let rank = chars.as_str();

        let Some(suit) = suit.filter(|_| !rank.is_empty()) else {
            return Err(ParseCardError::InvalidLength(s.to_string()));
        };

        let rank = parse_rank(rank).ok_or_else(|| ParseCardError::InvalidRank(s.to_string()))?;
        let suit = parse_suit(suit).ok_or_else(|| ParseCardError::InvalidSuit(s.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

fn parse_rank(s: &str) -> Option<Rank> {
    let rank = match s.to_ascii_uppercase().as_str() {
        "2" => Rank::Deuce,
        "3" => Rank::Trey,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "T" | "10" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        "A" => Rank::Ace,
        _ => return None,
    };

    Some(rank)
}

fn parse_suit(c: char) -> Option<Suit> {
    match c {
        'C' | 'c' | '♣' => Some(Suit::Clubs),
        'D' | 'd' | '♦' => Some(Suit::Diamonds),
        'H' | 'h' | '♥' => Some(Suit::Hearts),
        'S' | 's' | '♠' => Some(Suit::Spades),
        _ => None,
    }
}

/// Parses a list of cards separated by whitespace or commas.
///
/// ```
/// # use bitrank_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("AS, kd 10h").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Hearts));
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;

    #[test]
    fn parse_display_notation() {
        for card in Deck::default() {
            let parsed = card.to_string().parse::<Card>().unwrap();
            assert_eq!(parsed, card);
        }
    }

    #[test]
    fn parse_alternative_notation() {
        let qh = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!("qh".parse::<Card>().unwrap(), qh);
        assert_eq!("Q♥".parse::<Card>().unwrap(), qh);
        assert_eq!(" QH ".parse::<Card>().unwrap(), qh);

        let tc = Card::new(Rank::Ten, Suit::Clubs);
        assert_eq!("10c".parse::<Card>().unwrap(), tc);
        assert_eq!("T♣".parse::<Card>().unwrap(), tc);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "".parse::<Card>(),
            Err(ParseCardError::InvalidLength(String::new()))
        );
        assert_eq!(
            "S".parse::<Card>(),
            Err(ParseCardError::InvalidLength("S".to_string()))
        );
        assert_eq!(
            "1S".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1S".to_string()))
        );
        assert_eq!(
            "AX".parse::<Card>(),
            Err(ParseCardError::InvalidSuit("AX".to_string()))
        );
        assert_eq!(
            "11S".parse::<Card>(),
            Err(ParseCardError::InvalidRank("11S".to_string()))
        );
    }

    #[test]
    fn parse_card_lists() {
        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("  , ").unwrap().is_empty());

        let cards = parse_cards("9S,9H 9D\t9C").unwrap();
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().all(|c| c.rank() == Rank::Nine));

        let err = parse_cards("9S 9X").unwrap_err();
        assert_eq!(err, ParseCardError::InvalidSuit("9X".to_string()));
        assert_eq!(err.to_string(), "invalid suit in card `9X`");
    }
}
