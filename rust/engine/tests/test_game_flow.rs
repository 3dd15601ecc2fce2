use holdem_engine::cards::Card;
use holdem_engine::deck::Deck;
use holdem_engine::engine::{Engine, EngineConfig, AI_SEAT, HUMAN_SEAT};
use holdem_engine::errors::GameError;
use holdem_engine::game::{GameState, Phase};
use holdem_engine::opponent::AIOpponent;
use holdem_engine::player::PlayerAction;
use holdem_engine::rules::ValidatedAction;

struct CallingStation;

impl AIOpponent for CallingStation {
    fn decide(&mut self, state: &GameState, hole: &[Card], board: &[Card]) -> PlayerAction {
        assert_eq!(hole.len(), 2);
        assert_eq!(board.len(), state.phase.board_len());
        if state.to_call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        }
    }

    fn name(&self) -> &str {
        "CallingStation"
    }
}

fn deck_of(list: &[&str]) -> Deck {
    Deck::stacked(list.iter().map(|s| s.parse().expect("card")).collect())
}

#[test]
fn check_down_walks_every_street() {
    let mut eng = Engine::with_seed(1);
    let mut ai = CallingStation;
    eng.start_new_hand().expect("deal ok");
    assert_eq!(eng.phase(), Phase::Preflop);
    assert!(eng.board().is_empty());
    assert!(eng.players().iter().all(|p| p.hole_cards().len() == 2));
    assert_eq!(eng.deck_remaining(), 48);

    eng.apply_player_action(PlayerAction::Call).unwrap();
    assert_eq!(eng.to_act(), Some(AI_SEAT));
    eng.ai_take_turn(&mut ai).unwrap();

    for (phase, len) in [(Phase::Flop, 3), (Phase::Turn, 4), (Phase::River, 5)] {
        assert_eq!(eng.phase(), phase);
        assert_eq!(eng.board().len(), len);
        assert_eq!(eng.to_act(), Some(AI_SEAT), "big blind acts first after the flop");
        eng.ai_take_turn(&mut ai).unwrap();
        eng.apply_player_action(PlayerAction::Check).unwrap();
    }

    assert!(eng.is_hand_over());
    assert_eq!(eng.phase(), Phase::HandComplete);
    let result = eng.get_result().expect("result");
    assert_eq!(result.pot, 40);
    assert!(result.showdown.is_some());
    assert_eq!(eng.total_chips(), 2_000);
}

#[test]
fn big_blind_gets_an_option_after_a_limp() {
    let mut eng = Engine::with_seed(2);
    eng.start_new_hand().unwrap();
    eng.apply_player_action(PlayerAction::Call).unwrap();
    assert_eq!(eng.phase(), Phase::Preflop);
    assert!(!eng.is_round_closed());
    let gs = eng.game_state(AI_SEAT);
    assert_eq!(gs.to_call, 0);
    assert_eq!(gs.current_bet, 20);
    eng.apply_action(AI_SEAT, PlayerAction::Raise(40)).unwrap();
    assert_eq!(eng.phase(), Phase::Preflop);
    assert_eq!(eng.to_act(), Some(HUMAN_SEAT));
    assert_eq!(eng.to_call(HUMAN_SEAT), 40);
}

#[test]
fn raise_reopens_action_and_sets_minimum() {
    let mut eng = Engine::with_seed(5);
    eng.start_new_hand().unwrap();
    let applied = eng.apply_player_action(PlayerAction::Raise(50)).unwrap();
    assert_eq!(applied, ValidatedAction::Raise(50));
    assert_eq!(eng.pot(), 80);

    let gs = eng.game_state(AI_SEAT);
    assert_eq!(gs.to_call, 40);
    assert_eq!(gs.min_raise, 40);
    assert!(matches!(
        eng.apply_action(AI_SEAT, PlayerAction::Raise(60)),
        Err(GameError::InvalidBetAmount { minimum: 80, .. })
    ));

    eng.apply_action(AI_SEAT, PlayerAction::Call).unwrap();
    assert_eq!(eng.phase(), Phase::Flop);
    assert_eq!(eng.pot(), 120);
    assert!(eng.players().iter().all(|p| p.current_bet() == 0));
}

#[test]
fn rejected_action_leaves_state_untouched() {
    let mut eng = Engine::with_seed(6);
    eng.start_new_hand().unwrap();
    let before = eng.get_state();
    assert!(eng.apply_player_action(PlayerAction::Check).is_err());
    assert!(eng.apply_player_action(PlayerAction::Bet(100)).is_err());
    assert!(eng.apply_player_action(PlayerAction::Raise(5_000)).is_err());
    assert_eq!(eng.get_state(), before);
    assert!(eng.actions().is_empty());
}

#[test]
fn acting_out_of_turn_is_rejected() {
    let mut eng = Engine::with_seed(7);
    eng.start_new_hand().unwrap();
    assert_eq!(
        eng.apply_action(AI_SEAT, PlayerAction::Call),
        Err(GameError::NotPlayersTurn {
            expected: HUMAN_SEAT,
            actual: AI_SEAT
        })
    );
    let mut ai = CallingStation;
    assert!(eng.ai_take_turn(&mut ai).is_err());
}

#[test]
fn actions_need_a_hand_in_progress() {
    let mut eng = Engine::with_seed(8);
    assert!(eng.is_hand_over());
    assert!(eng.get_result().is_none());
    assert_eq!(
        eng.apply_player_action(PlayerAction::Check),
        Err(GameError::NoHandInProgress)
    );
    eng.start_new_hand().unwrap();
    assert_eq!(eng.start_new_hand(), Err(GameError::HandInProgress));
}

#[test]
fn busted_player_cannot_start_a_hand() {
    let mut eng = Engine::with_seed(9);
    eng.set_stacks([0, 2_000]).unwrap();
    assert_eq!(
        eng.start_new_hand(),
        Err(GameError::PlayerBusted { seat: HUMAN_SEAT })
    );
}

#[test]
fn short_deck_is_refused_before_the_hand_starts() {
    let deck = deck_of(&["2C", "3C", "4C", "5C", "6C", "7C", "8C", "9C"]);
    let mut eng = Engine::with_deck(EngineConfig::default(), deck);
    let before = eng.get_state();

    assert_eq!(eng.start_new_hand(), Err(GameError::DeckExhausted));
    assert_eq!(eng.get_state(), before);
    assert!(eng.is_hand_over());
    assert_eq!(eng.hands_played(), 0);
    assert_eq!(eng.players()[HUMAN_SEAT].stack(), 1_000);
    assert!(eng.players()[HUMAN_SEAT].hole_cards().is_empty());
}

#[test]
fn stacked_deck_deals_big_blind_first() {
    let deck = deck_of(&["AS", "KD", "AH", "KC", "2C", "7D", "9H", "JS", "3C"]);
    let mut eng = Engine::with_deck(EngineConfig::default(), deck);
    eng.start_new_hand().unwrap();
    let ai_hole: Vec<String> = eng.players()[AI_SEAT]
        .hole_cards()
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(ai_hole, ["A♠", "A♥"]);
}

#[test]
fn seeded_engines_deal_identical_hands() {
    let mut a = Engine::with_seed(42);
    let mut b = Engine::with_seed(42);
    for _ in 0..3 {
        a.start_new_hand().unwrap();
        b.start_new_hand().unwrap();
        assert_eq!(a.players()[0].hole_cards(), b.players()[0].hole_cards());
        assert_eq!(a.players()[1].hole_cards(), b.players()[1].hole_cards());
        let seat = a.to_act().unwrap();
        a.apply_action(seat, PlayerAction::Fold).unwrap();
        b.apply_action(seat, PlayerAction::Fold).unwrap();
    }
}

#[test]
fn computer_seats_can_play_both_sides() {
    let mut eng = Engine::with_seed(10);
    let mut ai = CallingStation;
    for _ in 0..20 {
        eng.start_new_hand().unwrap();
        while let Some(seat) = eng.to_act() {
            eng.take_turn(seat, &mut ai).unwrap();
        }
        assert!(eng.is_hand_over());
        assert_eq!(eng.total_chips(), 2_000);
        if eng.players().iter().any(|p| p.stack() == 0) {
            break;
        }
    }
}
