//! Card evaluation command.
//!
//! `holdem eval As Kd --board 2h 7h 9h` prints the best hand the cards make,
//! the preflop strength of a bare two-card hand, and the outs estimate when a
//! flop or turn is given.

use std::collections::HashSet;
use std::io::Write;

use holdem_ai::outs::{calculate_outs, improvement_probability};
use holdem_ai::poker_ai::preflop_strength;
use holdem_engine::cards::Card;
use holdem_engine::game::Phase;
use holdem_engine::hand::evaluate_hand;

use crate::error::CliError;
use crate::formatters::{format_board, format_hand};
use crate::validation::parse_cards;

pub fn handle_eval_command(
    cards: &[String],
    board: &[String],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let all: Vec<&String> = cards.iter().chain(board.iter()).collect();
    if all.len() > 7 {
        return Err(CliError::InvalidInput(format!(
            "at most 7 cards can be evaluated, got {}",
            all.len()
        )));
    }
    let parsed = parse_cards(&all).map_err(CliError::InvalidInput)?;
    let (hole, community) = parsed.split_at(cards.len());

    writeln!(out, "Cards: {} {}", format_board(hole), format_board(community))?;
    let strength = evaluate_hand(&parsed);
    writeln!(out, "Hand: {}", format_hand(&strength))?;

    if hole.len() == 2 && community.is_empty() {
        writeln!(out, "Preflop strength: {:.2}", preflop_strength(hole))?;
    }

    let phase = match community.len() {
        3 => Some(Phase::Flop),
        4 => Some(Phase::Turn),
        _ => None,
    };
    if let (Some(phase), 2) = (phase, hole.len()) {
        let known: HashSet<Card> = parsed.iter().copied().collect();
        let outs = calculate_outs(hole, community, &known);
        writeln!(
            out,
            "Outs: flush={} straight={} pair={} total={}",
            outs.flush,
            outs.straight,
            outs.pair,
            outs.total()
        )?;
        writeln!(
            out,
            "Improvement: {:.1}%",
            improvement_probability(outs.total(), phase) * 100.0
        )?;
    }
    Ok(())
}
