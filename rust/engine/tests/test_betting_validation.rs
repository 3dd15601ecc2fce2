use holdem_engine::errors::GameError;
use holdem_engine::game::{GameState, Phase};
use holdem_engine::player::PlayerAction as A;
use holdem_engine::rules::{validate_action, ValidatedAction};

fn state(stack: u32, to_call: u32, current_bet: u32) -> GameState {
    GameState {
        pot: 100,
        to_call,
        stack,
        opponent_stack: 1_000,
        phase: Phase::Flop,
        opponent_last_bet: current_bet,
        current_bet,
        min_raise: 20,
        big_blind: 20,
    }
}

#[test]
fn bet_zero_is_invalid() {
    let err = validate_action(&state(1_000, 0, 0), A::Bet(0)).unwrap_err();
    match err {
        GameError::InvalidBetAmount { minimum, .. } => assert_eq!(minimum, 20),
        _ => panic!("expected InvalidBetAmount"),
    }
}

#[test]
fn bet_over_stack_is_insufficient_chips() {
    let err = validate_action(&state(50, 0, 0), A::Bet(100)).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientChips {
            requested: 100,
            available: 50
        }
    );
}

#[test]
fn bet_of_whole_stack_is_allin_even_below_minimum() {
    let va = validate_action(&state(15, 0, 0), A::Bet(15)).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(15));
}

#[test]
fn call_with_insufficient_stack_is_allin_call() {
    let va = validate_action(&state(60, 100, 100), A::Call).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(60));
}

#[test]
fn check_facing_bet_is_illegal() {
    let err = validate_action(&state(500, 40, 40), A::Check).unwrap_err();
    assert!(matches!(err, GameError::IllegalAction(_)));
}

#[test]
fn call_with_nothing_to_call_is_illegal() {
    let err = validate_action(&state(500, 0, 0), A::Call).unwrap_err();
    assert!(matches!(err, GameError::IllegalAction(_)));
}

#[test]
fn bet_into_open_round_is_illegal() {
    let err = validate_action(&state(500, 40, 40), A::Bet(100)).unwrap_err();
    assert!(matches!(err, GameError::IllegalAction(_)));
}

#[test]
fn raise_without_live_bet_is_illegal() {
    let err = validate_action(&state(500, 0, 0), A::Raise(100)).unwrap_err();
    assert!(matches!(err, GameError::IllegalAction(_)));
}

#[test]
fn raise_must_cover_call_plus_last_raise() {
    let st = state(500, 40, 40);
    let err = validate_action(&st, A::Raise(50)).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidBetAmount {
            amount: 50,
            minimum: 60
        }
    );
    assert_eq!(validate_action(&st, A::Raise(60)), Ok(ValidatedAction::Raise(60)));
}

#[test]
fn short_raise_of_whole_stack_is_allin() {
    let va = validate_action(&state(50, 40, 40), A::Raise(50)).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(50));
}

#[test]
fn big_blind_option_is_a_raise() {
    let mut st = state(980, 0, 20);
    st.phase = Phase::Preflop;
    assert_eq!(validate_action(&st, A::Check), Ok(ValidatedAction::Check));
    assert_eq!(validate_action(&st, A::Raise(20)), Ok(ValidatedAction::Raise(20)));
    assert!(validate_action(&st, A::Bet(40)).is_err());
}

#[test]
fn no_raise_against_allin_opponent() {
    let mut st = state(500, 100, 100);
    st.opponent_stack = 0;
    assert!(matches!(
        validate_action(&st, A::Raise(300)),
        Err(GameError::IllegalAction(_))
    ));
    assert_eq!(validate_action(&st, A::AllIn), Ok(ValidatedAction::Call(100)));
    assert_eq!(validate_action(&st, A::Call), Ok(ValidatedAction::Call(100)));
}

#[test]
fn allin_moves_whole_stack() {
    assert_eq!(
        validate_action(&state(320, 40, 40), A::AllIn),
        Ok(ValidatedAction::AllIn(320))
    );
    assert!(validate_action(&state(0, 0, 0), A::AllIn).is_err());
}

#[test]
fn fold_is_always_legal() {
    assert_eq!(validate_action(&state(0, 0, 0), A::Fold), Ok(ValidatedAction::Fold));
    assert_eq!(
        validate_action(&state(100, 50, 50), A::Fold),
        Ok(ValidatedAction::Fold)
    );
}

#[test]
fn validated_action_reports_chips_moved() {
    assert_eq!(ValidatedAction::Raise(60).chips(), 60);
    assert_eq!(ValidatedAction::Check.chips(), 0);
}
