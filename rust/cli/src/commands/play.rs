//! # Play Command
//!
//! Interactive heads-up play: the user holds seat 0 and types actions on
//! stdin, the computer holds seat 1. Stacks carry over between hands and the
//! session ends after `hands` hands, on `q`, at end of input, or when a
//! player runs out of chips.

use std::io::{BufRead, Write};

use holdem_ai::poker_ai::PokerAI;
use holdem_engine::engine::{Engine, AI_SEAT, HUMAN_SEAT};
use holdem_engine::errors::GameError;
use holdem_engine::game::Phase;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_result};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_player_action, validate_hands, ParseResult};

const NAMES: [&str; 2] = ["You", "Computer"];

/// Handle the play command: interactive poker gameplay
///
/// # Examples
///
/// ```ignore
/// use holdem_cli::commands::handle_play_command;
/// use std::io::{stdin, stdout, stderr};
///
/// handle_play_command(1, None, &mut stdout(), &mut stderr(), &mut stdin().lock()).unwrap();
/// ```
pub fn handle_play_command(
    hands: u32,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let hands = validate_hands(hands).map_err(CliError::InvalidInput)?;
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    writeln!(out, "play: hands={} seed={}", hands, seed)?;
    writeln!(out, "Blinds: SB={} BB={}", cfg.small_blind, cfg.big_blind)?;

    let mut engine = Engine::new(cfg.engine_config(Some(seed)));
    let mut ai = PokerAI::with_config(cfg.ai_config(), seed.wrapping_add(1));

    let mut played = 0u32;
    'session: for i in 1..=hands {
        match engine.start_new_hand() {
            Ok(()) => {}
            Err(GameError::PlayerBusted { seat }) => {
                writeln!(out, "{} out of chips.", NAMES[seat])?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
        writeln!(out, "Hand {}", i)?;
        let you = if engine.button() == HUMAN_SEAT {
            "button"
        } else {
            "big blind"
        };
        writeln!(
            out,
            "Your cards: {} ({})",
            format_board(engine.players()[HUMAN_SEAT].hole_cards()),
            you
        )?;

        let mut shown_board = 0;
        while let Some(seat) = engine.to_act() {
            if engine.board().len() > shown_board {
                shown_board = engine.board().len();
                writeln!(out, "{:?}: {}", engine.phase(), format_board(engine.board()))?;
            }
            if seat == AI_SEAT {
                let action = engine.ai_take_turn(&mut ai)?;
                writeln!(out, "Computer {}", format_action(&action))?;
                continue;
            }

            let snap = engine.get_state();
            write!(
                out,
                "Pot {} | to call {} | stack {} > ",
                snap.pot, snap.to_call, snap.players[HUMAN_SEAT].stack
            )?;
            out.flush()?;

            let Some(line) = read_stdin_line(stdin) else {
                writeln!(out)?;
                ui::display_warning(err, "input ended before the hand finished")?;
                break 'session;
            };
            match parse_player_action(&line) {
                ParseResult::Action(action) => match engine.apply_player_action(action) {
                    Ok(applied) => writeln!(out, "You {}", format_action(&applied))?,
                    Err(e) => ui::write_error(err, &format!("Invalid action: {}", e))?,
                },
                ParseResult::Quit => break 'session,
                ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            }
        }

        if let Some(result) = engine.get_result() {
            if engine.board().len() > shown_board && result.showdown.is_some() {
                writeln!(out, "{:?}: {}", Phase::River, format_board(engine.board()))?;
            }
            if result.showdown.is_some() {
                writeln!(
                    out,
                    "Computer shows {}",
                    format_board(engine.players()[AI_SEAT].hole_cards())
                )?;
            }
            writeln!(out, "{}", format_result(result, NAMES))?;
        }
        played += 1;
    }

    let [you, computer] = engine.players();
    writeln!(
        out,
        "Session over: {} hand(s). Stacks: you={} computer={}",
        played,
        you.stack(),
        computer.stack()
    )?;
    Ok(())
}
