// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Single hand evaluation.
use anyhow::{Context, Result, bail};
use log::debug;

use bitrank_eval::{Card, HandStrength, evaluate, parse_cards};

/// The cards of the hand to evaluate.
#[derive(Debug)]
pub struct Config {
    /// The player hole cards.
    pub hole: Vec<Card>,
    /// The community cards.
    pub board: Vec<Card>,
}

impl Config {
    /// Parses and validates the hole and community cards.
    pub fn parse(hole: &str, board: &str) -> Result<Self> {
        let hole = parse_cards(hole).context("invalid hole cards")?;
        let board = parse_cards(board).context("invalid community cards")?;

        if hole.len() + board.len() < 2 {
            bail!("a hand needs at least 2 cards");
        }

        let cards = hole.iter().chain(&board).collect::<Vec<_>>();
        for (idx, card) in cards.iter().enumerate() {
            if cards[..idx].contains(card) {
                bail!("duplicate card {card}");
            }
        }

        Ok(Self { hole, board })
    }

    /// Evaluates the hand strength.
    pub fn strength(&self) -> HandStrength {
        evaluate(&self.hole, &self.board)
    }
}

/// Evaluates the hand and prints its strength.
pub fn run(config: &Config) -> Result<()> {
    let strength = config.strength();
    debug!("Evaluated {:?} {:?}: {strength:?}", config.hole, config.board);

    println!(
        "Hand:      {} | {}",
        join_cards(&config.hole),
        join_cards(&config.board)
    );
    println!("Strength:  {strength}");
    println!("Category:  {}", strength.category());
    println!("Primary:   {}", strength.primary());
    println!("Secondary: {}", strength.secondary());
    println!("Value:     {} ({:#b})", strength.value(), strength.value());

    Ok(())
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitrank_eval::HandCategory;

    #[test]
    fn parse_and_evaluate() {
        let config = Config::parse("9S 9H", "9D 9C 2C").unwrap();
        assert_eq!(config.hole.len(), 2);
        assert_eq!(config.board.len(), 3);

        let strength = config.strength();
        assert_eq!(strength.category(), HandCategory::FourOfAKind);
        assert_eq!(strength.value(), (1 << 14) | (9 << 4));
    }

    #[test]
    fn hole_only() {
        let config = Config::parse("AS, KD", "").unwrap();
        assert!(config.board.is_empty());
        assert_eq!(config.strength().to_string(), "High Card (A, K)");
    }

    #[test]
    fn invalid_hands() {
        let err = Config::parse("AS", "").unwrap_err();
        assert_eq!(err.to_string(), "a hand needs at least 2 cards");

        let err = Config::parse("AS KD", "QS AS").unwrap_err();
        assert_eq!(err.to_string(), "duplicate card AS");

        let err = Config::parse("AS KX", "").unwrap_err();
        assert_eq!(err.to_string(), "invalid hole cards");
        assert_eq!(
            format!("{err:#}"),
            "invalid hole cards: invalid suit in card `KX`"
        );

        let err = Config::parse("AS KD", "ZZ").unwrap_err();
        assert_eq!(err.to_string(), "invalid community cards");
    }

    #[test]
    fn cards_formatting() {
        let config = Config::parse("ah td", "").unwrap();
        assert_eq!(join_cards(&config.hole), "AH TD");
        assert_eq!(join_cards(&[]), "");
    }
}
