// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverbed Poker hand evaluator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use log::{error, info};

use riverbed_eval::{Card, HandValue, Showdown, evaluate_hand, parse_cards};

pub mod stats;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a 5, 6, or 7 cards hand like `As Ks Qs Js Ts 2h 3d`.
    Eval {
        /// The cards, or `rank,suit` pairs with --pairs.
        #[clap(required = true)]
        cards: Vec<String>,
        /// Read 7 `rank,suit` pairs, rank in 2..=14 and suit in 0..=3.
        #[clap(long)]
        pairs: bool,
    },
    /// Compares holdings on a shared board.
    Showdown {
        /// The five board cards.
        #[clap(long, short)]
        board: String,
        /// The two hole cards of each player like `"As Kd"`.
        #[clap(required = true)]
        holdings: Vec<String>,
    },
    /// Counts the hand ranks of all hands.
    Stats {
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=256))]
        tasks: u16,
        /// Number of cards in a hand.
        #[clap(long, short, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=7))]
        cards: u8,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Eval { cards, pairs } if pairs => {
            let pairs = cards
                .iter()
                .map(|s| parse_pair(s))
                .collect::<Result<Vec<_>>>()?;
            let pairs = <[(i32, i32); 7]>::try_from(pairs.as_slice())
                .map_err(|_| anyhow!("expected 7 pairs, got {}", pairs.len()))?;

            let value = evaluate_hand(&pairs)?;
            println!("{value} ({})", value.value());
        }
        Command::Eval { cards, .. } => {
            let cards = parse_cards(&cards.join(" "))?;
            let value = HandValue::try_eval(&cards)?;
            let (_, best) = HandValue::eval_with_best_hand(&cards);
            println!("{value} ({}) {}", value.value(), format_cards(&best));
        }
        Command::Showdown { board, holdings } => {
            let board = parse_cards(&board)?;
            let board = <[Card; 5]>::try_from(board.as_slice())
                .map_err(|_| anyhow!("the board must have 5 cards"))?;

            let holdings = holdings
                .iter()
                .map(|h| -> Result<[Card; 2]> {
                    let cards = parse_cards(h)?;
                    <[Card; 2]>::try_from(cards.as_slice())
                        .map_err(|_| anyhow!("holding {h:?} must have 2 cards"))
                })
                .collect::<Result<Vec<_>>>()?;

            let showdown = Showdown::new(&board, &holdings)?;
            for (idx, (hole, value)) in holdings.iter().zip(showdown.values()).enumerate() {
                let mark = if showdown.winners().contains(&idx) { "*" } else { " " };
                println!("{mark} {idx}: {} {value}", format_cards(hole));
            }

            if showdown.is_split() {
                info!("Split pot between {} players", showdown.winners().len());
            }
        }
        Command::Stats { tasks, cards } => {
            let config = stats::Config {
                tasks: tasks as usize,
                cards: cards as usize,
            };

            stats::run(&config).print();
        }
    }

    Ok(())
}

/// Parses a `rank,suit` pair, the card itself is validated by the evaluator.
fn parse_pair(s: &str) -> Result<(i32, i32)> {
    let Some((rank, suit)) = s.split_once(',') else {
        bail!("invalid pair {s:?}, expected rank,suit");
    };

    let rank = rank.trim().parse().with_context(|| format!("invalid rank in {s:?}"))?;
    let suit = suit.trim().parse().with_context(|| format!("invalid suit in {s:?}"))?;
    Ok((rank, suit))
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use riverbed_eval::Error;

    #[test]
    fn pairs_parsing() {
        assert_eq!(parse_pair("14,0").unwrap(), (14, 0));
        assert_eq!(parse_pair(" 2 , 3 ").unwrap(), (2, 3));
        assert!(parse_pair("14").is_err());
        assert!(parse_pair("x,0").is_err());
        assert_eq!(parse_pair("300,0").unwrap(), (300, 0));
        assert_eq!(parse_pair("14,-1").unwrap(), (14, -1));
        assert!(parse_pair("99999999999,0").is_err());
    }

    #[test]
    fn cli_args() {
        let cli = Cli::try_parse_from(["riverbed", "eval", "As", "Ks", "Qs", "Js", "Ts"]).unwrap();
        assert!(matches!(cli.command, Command::Eval { pairs: false, .. }));

        let cli = Cli::try_parse_from(["riverbed", "stats", "--cards", "5"]).unwrap();
        assert!(matches!(cli.command, Command::Stats { tasks: 4, cards: 5 }));

        assert!(Cli::try_parse_from(["riverbed", "stats", "--cards", "8"]).is_err());
        assert!(Cli::try_parse_from(["riverbed", "stats", "--tasks", "0"]).is_err());
    }

    #[test]
    fn run_commands() {
        let cards = ["As", "Ks", "Qs", "Js", "Ts", "2h", "3d"].map(String::from).to_vec();
        assert!(run(Command::Eval { cards, pairs: false }).is_ok());

        let cards = ["14,0", "13,0", "12,0", "11,0", "10,0", "2,1", "3,2"]
            .map(String::from)
            .to_vec();
        assert!(run(Command::Eval { cards, pairs: true }).is_ok());

        let cards = ["14,0", "14,0", "12,0", "11,0", "10,0", "2,1", "3,2"]
            .map(String::from)
            .to_vec();
        assert!(run(Command::Eval { cards, pairs: true }).is_err());

        // Out of range values are invalid cards, not parse errors.
        let cards = ["300,0", "13,0", "12,0", "11,0", "10,0", "2,1", "3,2"]
            .map(String::from)
            .to_vec();
        let err = run(Command::Eval { cards, pairs: true }).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InvalidCard { rank: 300, suit: 0 })
        );

        let showdown = Command::Showdown {
            board: "Qs Js Ts 2h 3d".to_string(),
            holdings: vec!["As Ks".to_string(), "Qh Qd".to_string()],
        };
        assert!(run(showdown).is_ok());

        let showdown = Command::Showdown {
            board: "Qs Js Ts 2h".to_string(),
            holdings: vec!["As Ks".to_string()],
        };
        assert!(run(showdown).is_err());
    }
}
