//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Heads-up Texas Hold'em against a rule-based computer opponent"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands against the computer, reading actions from stdin
    Play {
        #[arg(long, default_value_t = 1)]
        hands: u32,
        /// Seed for the deck and the opponent; overrides HOLDEM_SEED
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Let two computer players play each other
    Sim {
        #[arg(long, default_value_t = 100)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate cards: best hand, and outs when a board is given
    Eval {
        /// Hole cards, e.g. `As Kd`
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Community cards
        #[arg(long, num_args = 1..=5)]
        board: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcommand_parses() {
        for args in [
            vec!["holdem", "cfg"],
            vec!["holdem", "play", "--hands", "3", "--seed", "9"],
            vec!["holdem", "sim", "--json"],
            vec!["holdem", "eval", "As", "Kd", "--board", "2h", "7h", "9h"],
        ] {
            assert!(HoldemCli::try_parse_from(&args).is_ok(), "{:?}", args);
        }
    }

    #[test]
    fn eval_needs_cards() {
        assert!(HoldemCli::try_parse_from(["holdem", "eval"]).is_err());
    }

    #[test]
    fn play_defaults_to_one_hand() {
        let cli = HoldemCli::try_parse_from(["holdem", "play"]).unwrap();
        match cli.cmd {
            Commands::Play { hands, seed } => {
                assert_eq!(hands, 1);
                assert_eq!(seed, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
