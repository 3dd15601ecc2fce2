//! Card, board, and action formatters for terminal display.
//!
//! Pure functions that turn engine values into display strings. Suits use
//! Unicode symbols where the terminal supports them and `c d h s` letters
//! otherwise.
//!
//! ## Example
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Suit::Spades, Rank::Ace);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Suit};
use holdem_engine::hand::HandStrength;
use holdem_engine::history::{HandResult, ResultReason};
use holdem_engine::rules::ValidatedAction;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Unix-like systems are
/// assumed to support Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// String like "A♠" (Unicode) or "As" (ASCII); tens print as "10".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit))
}

/// Format cards in bracket notation, e.g. `[A♠ K♦ 7♣]`.
pub fn format_board(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

pub fn format_action(action: &ValidatedAction) -> String {
    match action {
        ValidatedAction::Fold => "folds".to_string(),
        ValidatedAction::Check => "checks".to_string(),
        ValidatedAction::Call(n) => format!("calls {}", n),
        ValidatedAction::Bet(n) => format!("bets {}", n),
        ValidatedAction::Raise(n) => format!("raises {}", n),
        ValidatedAction::AllIn(n) => format!("goes all-in for {}", n),
    }
}

/// Category name followed by its tiebreak ranks.
pub fn format_hand(strength: &HandStrength) -> String {
    let ranks: Vec<String> = strength.tiebreakers.iter().map(u8::to_string).collect();
    format!("{} ({})", strength.name, ranks.join(" "))
}

/// One-line summary of a finished hand from `names`' point of view.
pub fn format_result(result: &HandResult, names: [&str; 2]) -> String {
    match (&result.reason, result.winners.as_slice()) {
        (ResultReason::Fold { folded_seat }, _) => format!(
            "{} folds; {} wins {}",
            names[*folded_seat],
            names[1 - *folded_seat],
            result.pot
        ),
        (ResultReason::Showdown, [winner]) => {
            let hand = result
                .showdown
                .as_ref()
                .map(|s| format_hand(&s.hands[*winner]))
                .unwrap_or_default();
            format!("{} wins {} with {}", names[*winner], result.pot, hand)
        }
        (ResultReason::Showdown, _) => format!(
            "Split pot {}: {} / {}",
            result.pot, result.payouts[0], result.payouts[1]
        ),
    }
}
