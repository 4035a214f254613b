// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bitrank CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;

pub mod hand;
pub mod stats;

#[derive(Debug, Parser)]
#[clap(name = "bitrank", version, about = "Poker hand strength evaluator.")]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates the strength of a hand.
    Eval {
        /// The hole cards, for example "AS KD".
        #[clap(long)]
        hole: String,
        /// The community cards, for example "QS JS TS".
        #[clap(long, short, default_value = "")]
        board: String,
    },
    /// Counts the hand categories of random hands.
    Stats {
        /// Number of cards in a hand, the first two are the hole cards.
        #[clap(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(2..=7))]
        cards: u8,
        /// Number of sampling tasks.
        #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=256))]
        tasks: u16,
        /// Total number of sampled hands.
        #[clap(long, default_value_t = 100_000)]
        samples: usize,
        /// Evaluate all the hands in the deck instead of sampling.
        #[clap(long)]
        all: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli.command) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Eval { hole, board } => {
            let config = hand::Config::parse(&hole, &board)?;
            hand::run(&config)
        }
        Command::Stats {
            cards,
            tasks,
            samples,
            all,
        } => {
            let config = stats::Config {
                cards: cards as usize,
                tasks: tasks as usize,
                samples,
                all,
            };
            stats::run(&config)
        }
    }
}
