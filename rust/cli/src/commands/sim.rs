//! Simulation command handler.
//!
//! Seats a [`PokerAI`] in both chairs and plays up to `hands` hands, stopping
//! early when a player runs out of chips. Chip conservation is checked after
//! every hand.

use std::io::Write;

use holdem_ai::poker_ai::PokerAI;
use holdem_engine::engine::Engine;
use serde::Serialize;
use tracing::info;

use crate::config;
use crate::error::CliError;
use crate::validation::validate_hands;

/// Totals reported by `holdem sim`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimSummary {
    pub seed: u64,
    pub hands_requested: u32,
    pub hands_played: u32,
    /// Pots won outright per seat
    pub wins: [u32; 2],
    pub splits: u32,
    pub final_stacks: [u32; 2],
}

pub fn handle_sim_command(
    hands: u32,
    seed: Option<u64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hands = validate_hands(hands).map_err(CliError::InvalidInput)?;
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let summary = simulate(&cfg, hands, seed)?;
    if json {
        let s = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
    } else {
        writeln!(out, "sim: hands={} seed={}", hands, seed)?;
        writeln!(out, "Hands played: {}", summary.hands_played)?;
        writeln!(
            out,
            "Wins: seat0={} seat1={} splits={}",
            summary.wins[0], summary.wins[1], summary.splits
        )?;
        writeln!(
            out,
            "Final stacks: seat0={} seat1={}",
            summary.final_stacks[0], summary.final_stacks[1]
        )?;
    }
    Ok(())
}

/// Play the hands and collect the totals.
pub fn simulate(cfg: &config::Config, hands: u32, seed: u64) -> Result<SimSummary, CliError> {
    let mut engine = Engine::new(cfg.engine_config(Some(seed)));
    let mut bots = [
        PokerAI::with_config(cfg.ai_config(), seed.wrapping_add(1)),
        PokerAI::with_config(cfg.ai_config(), seed.wrapping_add(2)),
    ];
    let expected_total = engine.total_chips();

    let mut summary = SimSummary {
        seed,
        hands_requested: hands,
        hands_played: 0,
        wins: [0; 2],
        splits: 0,
        final_stacks: [cfg.starting_stack; 2],
    };

    for _ in 0..hands {
        if engine.players().iter().any(|p| p.stack() == 0) {
            break;
        }
        engine.start_new_hand()?;
        while let Some(seat) = engine.to_act() {
            engine.take_turn(seat, &mut bots[seat])?;
        }
        summary.hands_played += 1;

        if let Some(result) = engine.get_result() {
            match result.winners.as_slice() {
                [winner] => summary.wins[*winner] += 1,
                _ => summary.splits += 1,
            }
        }
        let total = engine.total_chips();
        if total != expected_total {
            return Err(CliError::Invariant(format!(
                "chip total {} after hand {}, expected {}",
                total, summary.hands_played, expected_total
            )));
        }
    }

    summary.final_stacks = [engine.players()[0].stack(), engine.players()[1].stack()];
    info!(hands = summary.hands_played, wins = ?summary.wins, "simulation finished");
    Ok(summary)
}
