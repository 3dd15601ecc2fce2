//! Input parsing and validation for interactive commands.
//!
//! Handles player action parsing for `play` and card lists for `eval`.

use std::collections::HashSet;

use holdem_engine::cards::Card;
use holdem_engine::player::PlayerAction;

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c" or "check" → Check
/// - "call" → Call
/// - "bet X" → Bet with amount X
/// - "raise X" → Raise with amount X
/// - "allin" or "all-in" → All-in
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(PlayerAction::Fold)
/// );
///
/// assert_eq!(
///     parse_player_action("bet 100"),
///     ParseResult::Action(PlayerAction::Bet(100))
/// );
///
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("invalid") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "c" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call),
        "allin" | "all-in" => ParseResult::Action(PlayerAction::AllIn),
        "bet" => match parse_amount(&parts, "Bet", "bet 100") {
            Ok(amount) => ParseResult::Action(PlayerAction::Bet(amount)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "raise" => match parse_amount(&parts, "Raise", "raise 50") {
            Ok(amount) => ParseResult::Action(PlayerAction::Raise(amount)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet <amount>, raise <amount>, allin, q",
            parts[0]
        )),
    }
}

fn parse_amount(parts: &[&str], verb: &str, example: &str) -> Result<u32, String> {
    let Some(raw) = parts.get(1) else {
        return Err(format!("{} requires an amount (e.g., '{}')", verb, example));
    };
    match raw.parse::<u32>() {
        Ok(amount) if amount > 0 => Ok(amount),
        Ok(_) => Err(format!("{} amount must be positive", verb)),
        Err(_) => Err(format!("Invalid {} amount", verb.to_lowercase())),
    }
}

/// Parse card strings such as `As`, `10h` or `T♦`, rejecting duplicates.
///
/// ```rust
/// # use holdem_cli::validation::parse_cards;
/// let cards = parse_cards(&["As", "Kd"]).unwrap();
/// assert_eq!(cards.len(), 2);
/// assert!(parse_cards(&["As", "AS"]).is_err());
/// assert!(parse_cards(&["Xx"]).is_err());
/// ```
pub fn parse_cards<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Card>, String> {
    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(inputs.len());
    for raw in inputs {
        let card: Card = raw.as_ref().parse().map_err(|e| format!("{}", e))?;
        if !seen.insert(card) {
            return Err(format!("duplicate card '{}'", raw.as_ref()));
        }
        cards.push(card);
    }
    Ok(cards)
}

/// `hands` must be at least one.
pub fn validate_hands(hands: u32) -> Result<u32, String> {
    if hands == 0 {
        Err("hands must be >= 1".to_string())
    } else {
        Ok(hands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_actions() {
        assert_eq!(parse_player_action("f"), ParseResult::Action(PlayerAction::Fold));
        assert_eq!(parse_player_action(" C "), ParseResult::Action(PlayerAction::Check));
        assert_eq!(parse_player_action("ALL-IN"), ParseResult::Action(PlayerAction::AllIn));
        assert_eq!(parse_player_action("quit"), ParseResult::Quit);
    }

    #[test]
    fn amounts_are_required_and_positive() {
        assert!(matches!(parse_player_action("bet"), ParseResult::Invalid(m) if m.contains("requires")));
        assert!(matches!(parse_player_action("raise 0"), ParseResult::Invalid(m) if m.contains("positive")));
        assert!(matches!(parse_player_action("raise lots"), ParseResult::Invalid(m) if m.contains("Invalid raise")));
        assert_eq!(
            parse_player_action("raise 60"),
            ParseResult::Action(PlayerAction::Raise(60))
        );
    }

    #[test]
    fn empty_input_is_invalid() {
        assert_eq!(
            parse_player_action("   "),
            ParseResult::Invalid("Empty input".to_string())
        );
    }

    #[test]
    fn zero_hands_rejected() {
        assert!(validate_hands(0).is_err());
        assert_eq!(validate_hands(3), Ok(3));
    }
}
