use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("Insufficient chips: requested {requested}, available {available}")]
    InsufficientChips { requested: u32, available: u32 },
    #[error("Illegal action: {0}")]
    IllegalAction(String),
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("A hand is already in progress")]
    HandInProgress,
    #[error("Player {seat} has no chips left")]
    PlayerBusted { seat: usize },
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Deck exhausted while dealing")]
    DeckExhausted,
    #[error("Chip count overflow: the table total must fit in {max}")]
    ChipOverflow { max: u32 },
}
