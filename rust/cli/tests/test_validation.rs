use holdem_cli::validation::{parse_cards, parse_player_action, validate_hands, ParseResult};
use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::player::PlayerAction;

#[test]
fn cards_parse_in_either_case() {
    let cards = parse_cards(&["as", "10H", "Td"]).unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0], Card::new(Suit::Spades, Rank::Ace));
    assert_eq!(cards[1].rank, Rank::Ten);
    assert_eq!(cards[2].rank, Rank::Ten);
}

#[test]
fn duplicate_cards_are_named() {
    let err = parse_cards(&["Kc", "2d", "KC"]).unwrap_err();
    assert!(err.to_lowercase().contains("duplicate"), "{}", err);
}

#[test]
fn garbage_card_is_rejected() {
    assert!(parse_cards(&["1x"]).is_err());
}

#[test]
fn raise_with_amount() {
    assert_eq!(
        parse_player_action("RAISE 60"),
        ParseResult::Action(PlayerAction::Raise(60))
    );
    assert!(matches!(parse_player_action("raise"), ParseResult::Invalid(_)));
    assert!(matches!(parse_player_action("bet -5"), ParseResult::Invalid(_)));
}

#[test]
fn quit_words() {
    assert_eq!(parse_player_action("quit"), ParseResult::Quit);
    assert_eq!(parse_player_action("  Q "), ParseResult::Quit);
}

#[test]
fn hand_counts() {
    assert_eq!(validate_hands(3), Ok(3));
    assert!(validate_hands(0).is_err());
}
