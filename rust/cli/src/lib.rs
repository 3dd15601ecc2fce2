//! # holdem CLI Library
//!
//! Command-line front-end for the heads-up Hold'em engine. The primary entry
//! point is [`run`], which parses arguments and dispatches to a subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against the computer over stdin
//! - `sim`: Computer vs computer, with a chip-conservation check
//! - `eval`: Evaluate cards and estimate outs
//! - `cfg`: Display the resolved configuration
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["holdem", "eval", "As", "Ks", "--board", "Qs", "Js", "10s"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use std::io::{BufRead, Write};

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{handle_cfg_command, handle_eval_command, handle_play_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "eval", "cfg"];

/// Main entry point for the CLI application.
///
/// `play` reads actions from the process's stdin; use [`run_with_input`] to
/// supply them from elsewhere.
///
/// Returns the exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`].
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// [`run`] with an explicit input stream for interactive commands.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("fold\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = holdem_cli::run_with_input(
///     ["holdem", "play", "--seed", "1"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: holdem <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: holdem --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play { hands, seed } => handle_play_command(hands, seed, out, err, input),
        Commands::Sim { hands, seed, json } => handle_sim_command(hands, seed, json, out),
        Commands::Eval { cards, board } => handle_eval_command(&cards, &board, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
