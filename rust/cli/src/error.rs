//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! any error to exit code [`crate::exit_code::ERROR`].

use holdem_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, reading stdin, config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Engine rejected an operation the command relied on
    #[error("Engine error: {0}")]
    Engine(#[from] GameError),

    /// A table invariant did not hold after a hand
    #[error("Invariant violated: {0}")]
    Invariant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_convert_with_context() {
        let err: CliError = GameError::DeckExhausted.into();
        assert!(err.to_string().starts_with("Engine error:"));
    }

    #[test]
    fn invalid_input_displays_message() {
        let err = CliError::InvalidInput("hands must be >= 1".to_string());
        assert_eq!(err.to_string(), "Invalid input: hands must be >= 1");
    }
}
