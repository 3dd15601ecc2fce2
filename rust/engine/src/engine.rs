use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{GameState, Phase};
use crate::hand::{compare_hands, evaluate_hand, HandStrength};
use crate::history::{ActionRecord, HandResult, ResultReason, ShowdownInfo};
use crate::opponent::AIOpponent;
use crate::player::{Player, PlayerAction, Position, STARTING_STACK};
use crate::rules::{validate_action, ValidatedAction, BIG_BLIND, SMALL_BLIND};

/// Seat driven through [`Engine::apply_player_action`]
pub const HUMAN_SEAT: usize = 0;
/// Seat driven through [`Engine::ai_take_turn`]
pub const AI_SEAT: usize = 1;

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Cards one hand can use: four hole cards and a five-card board.
const CARDS_PER_HAND: usize = 9;

/// Largest starting stack; two of them still fit in a `u32` chip count.
pub const MAX_STARTING_STACK: u32 = u32::MAX / 2;

/// Table parameters fixed for the lifetime of an [`Engine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// 52-card decks in the draw pile
    pub num_decks: usize,
    /// Deck shuffle seed; a fixed default is used when absent
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            num_decks: 1,
            seed: None,
        }
    }
}

/// Per-seat view inside a [`TableSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub id: usize,
    pub name: String,
    pub stack: u32,
    pub current_bet: u32,
    pub position: Position,
    pub folded: bool,
    pub all_in: bool,
}

/// Read-only picture of the table for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    pub hand_number: u32,
    pub phase: Phase,
    pub pot: u32,
    pub board: Vec<Card>,
    pub players: [PlayerSnapshot; 2],
    pub button: usize,
    /// Seat expected to act, `None` between hands
    pub to_act: Option<usize>,
    /// Chips the seat to act needs to call
    pub to_call: u32,
}

#[derive(Debug, Clone)]
struct BettingRound {
    acted: [bool; 2],
    // size of the last full bet or raise
    last_raise: u32,
}

impl BettingRound {
    fn new(big_blind: u32) -> Self {
        Self {
            acted: [false; 2],
            last_raise: big_blind,
        }
    }
}

fn other(seat: usize) -> usize {
    1 - seat
}

/// Heads-up betting state machine.
///
/// Owns the deck and both players. A hand runs
/// `Preflop → Flop → Turn → River → Showdown → HandComplete`, or jumps to
/// `HandComplete` on a fold. The button posts the small blind and acts first
/// preflop; the big blind acts first on every later street.
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::Engine;
/// use holdem_engine::player::PlayerAction;
///
/// let mut engine = Engine::with_seed(12345);
/// engine.start_new_hand().expect("both players have chips");
/// assert_eq!(engine.get_state().pot, 30);
///
/// engine.apply_player_action(PlayerAction::Fold).expect("seat 0 acts first");
/// assert!(engine.is_hand_over());
/// assert_eq!(engine.players()[1].stack(), 1_010);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    deck: Deck,
    /// Array of exactly 2 players (heads-up poker)
    players: [Player; 2],
    /// Community cards (up to 5 cards: flop, turn, river)
    board: Vec<Card>,
    /// Chips swept in from finished betting rounds
    collected: u32,
    phase: Phase,
    button: usize,
    to_act: Option<usize>,
    round: BettingRound,
    actions: Vec<ActionRecord>,
    result: Option<HandResult>,
    hands_played: u32,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let deck = Deck::new(config.num_decks, seed);
        Self::with_deck(config, deck)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        })
    }

    /// Build an engine around a prepared deck, e.g. [`Deck::stacked`].
    ///
    /// A `starting_stack` above [`MAX_STARTING_STACK`] is lowered to it.
    pub fn with_deck(mut config: EngineConfig, deck: Deck) -> Self {
        if config.starting_stack > MAX_STARTING_STACK {
            warn!(
                requested = config.starting_stack,
                max = MAX_STARTING_STACK,
                "starting stack capped"
            );
            config.starting_stack = MAX_STARTING_STACK;
        }
        let players = [
            Player::new(HUMAN_SEAT, "Player", config.starting_stack, Position::Button),
            Player::new(AI_SEAT, "Computer", config.starting_stack, Position::BigBlind),
        ];
        let round = BettingRound::new(config.big_blind);
        Self {
            config,
            deck,
            players,
            board: Vec::with_capacity(5),
            collected: 0,
            phase: Phase::HandComplete,
            button: 0,
            to_act: None,
            round,
            actions: Vec::new(),
            result: None,
            hands_played: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn button(&self) -> usize {
        self.button
    }
    pub fn to_act(&self) -> Option<usize> {
        self.to_act
    }
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Everything committed this hand, current-round bets included.
    pub fn pot(&self) -> u32 {
        self.collected + self.players.iter().map(Player::current_bet).sum::<u32>()
    }

    /// Both stacks plus the pot; constant while a hand is played.
    pub fn total_chips(&self) -> u32 {
        self.players.iter().map(Player::stack).sum::<u32>() + self.pot()
    }

    pub fn to_call(&self, seat: usize) -> u32 {
        self.players[other(seat)]
            .current_bet()
            .saturating_sub(self.players[seat].current_bet())
    }

    /// Restore chip counts kept by the caller between sessions. The two
    /// stacks together must fit in a `u32`.
    pub fn set_stacks(&mut self, stacks: [u32; 2]) -> Result<(), GameError> {
        if !self.is_hand_over() {
            return Err(GameError::HandInProgress);
        }
        if stacks[0].checked_add(stacks[1]).is_none() {
            return Err(GameError::ChipOverflow { max: u32::MAX });
        }
        for (player, stack) in self.players.iter_mut().zip(stacks) {
            player.set_stack(stack);
        }
        Ok(())
    }

    pub fn is_hand_over(&self) -> bool {
        self.phase == Phase::HandComplete
    }

    pub fn get_result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }

    /// Actions applied so far in the current hand.
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    pub fn get_state(&self) -> TableSnapshot {
        let snapshot = |p: &Player| PlayerSnapshot {
            id: p.id(),
            name: p.name().to_string(),
            stack: p.stack(),
            current_bet: p.current_bet(),
            position: p.position(),
            folded: p.is_folded(),
            all_in: p.is_all_in(),
        };
        TableSnapshot {
            hand_number: self.hands_played,
            phase: self.phase,
            pot: self.pot(),
            board: self.board.clone(),
            players: [snapshot(&self.players[0]), snapshot(&self.players[1])],
            button: self.button,
            to_act: self.to_act,
            to_call: self.to_act.map_or(0, |seat| self.to_call(seat)),
        }
    }

    /// The typed view handed to a decision maker for `seat`.
    pub fn game_state(&self, seat: usize) -> GameState {
        let me = &self.players[seat];
        let opp = &self.players[other(seat)];
        GameState {
            pot: self.pot(),
            to_call: self.to_call(seat),
            stack: me.stack(),
            opponent_stack: opp.stack(),
            phase: self.phase,
            opponent_last_bet: opp.current_bet(),
            current_bet: me.current_bet().max(opp.current_bet()),
            min_raise: self.round.last_raise,
            big_blind: self.config.big_blind,
        }
    }

    /// Betting-round closure guard: bets are level and either both players
    /// have acted since the last raise or someone is all-in.
    pub fn is_round_closed(&self) -> bool {
        let [a, b] = &self.players;
        let bets_equal = a.current_bet() == b.current_bet();
        let everyone_acted = self.round.acted.iter().all(|&acted| acted);
        let someone_all_in = a.is_all_in() || b.is_all_in();
        bets_equal && (everyone_acted || someone_all_in)
    }

    /// Reset hand-scoped state, post blinds and deal hole cards.
    ///
    /// Fails before touching any hand state, so a refused start leaves the
    /// previous result and the button where they were. A deck too short for
    /// a full hand is refused up front and dealing never runs dry mid-hand.
    pub fn start_new_hand(&mut self) -> Result<(), GameError> {
        if !self.is_hand_over() {
            return Err(GameError::HandInProgress);
        }
        if let Some(seat) = self.players.iter().position(|p| p.stack() == 0) {
            return Err(GameError::PlayerBusted { seat });
        }
        self.deck.reset();
        if self.deck.remaining() < CARDS_PER_HAND {
            error!(
                remaining = self.deck.remaining(),
                needed = CARDS_PER_HAND,
                "deck too short for a hand"
            );
            return Err(GameError::DeckExhausted);
        }
        if self.hands_played > 0 {
            self.rotate_button();
        }
        self.hands_played += 1;

        for p in &mut self.players {
            p.clear_hand();
        }
        self.board.clear();
        self.collected = 0;
        self.actions.clear();
        self.result = None;
        self.round = BettingRound::new(self.config.big_blind);

        let sb_seat = self.button;
        let bb_seat = other(sb_seat);
        self.post_blind(sb_seat, self.config.small_blind)?;
        self.post_blind(bb_seat, self.config.big_blind)?;
        self.settle_uncalled();

        for _ in 0..2 {
            for seat in [bb_seat, sb_seat] {
                let c = self.draw()?;
                self.players[seat].give_card(c)?;
            }
        }
        self.phase = Phase::Preflop;
        self.to_act = Some(sb_seat);
        info!(
            hand = self.hands_played,
            button = self.button,
            pot = self.pot(),
            "hand started"
        );

        if self.is_round_closed() {
            self.close_round()?;
        }
        Ok(())
    }

    /// Apply an action for the human seat.
    pub fn apply_player_action(
        &mut self,
        action: PlayerAction,
    ) -> Result<ValidatedAction, GameError> {
        self.apply_action(HUMAN_SEAT, action)
    }

    /// Ask `ai` for the AI seat's decision and apply it.
    pub fn ai_take_turn(
        &mut self,
        ai: &mut dyn AIOpponent,
    ) -> Result<ValidatedAction, GameError> {
        self.take_turn(AI_SEAT, ai)
    }

    /// Let `ai` act for any seat; used when both seats are computer-driven.
    pub fn take_turn(
        &mut self,
        seat: usize,
        ai: &mut dyn AIOpponent,
    ) -> Result<ValidatedAction, GameError> {
        self.ensure_turn(seat)?;
        let state = self.game_state(seat);
        let action = ai.decide(&state, self.players[seat].hole_cards(), &self.board);
        debug!(seat, ai = ai.name(), ?action, "ai decided");
        self.apply_action(seat, action)
    }

    /// Validate and apply `action` for `seat`.
    ///
    /// Rejected actions (`NotPlayersTurn`, `NoHandInProgress`,
    /// `IllegalAction`, `InvalidBetAmount`, `InsufficientChips`) leave the
    /// engine untouched and the caller may resubmit. `ChipOverflow` cannot
    /// occur while the table total fits in a `u32`, which
    /// [`Engine::set_stacks`] and [`MAX_STARTING_STACK`] guarantee.
    pub fn apply_action(
        &mut self,
        seat: usize,
        action: PlayerAction,
    ) -> Result<ValidatedAction, GameError> {
        self.ensure_turn(seat)?;
        let state = self.game_state(seat);
        let validated = validate_action(&state, action).inspect_err(|e| {
            debug!(seat, ?action, error = %e, "action rejected");
        })?;

        self.actions.push(ActionRecord {
            seat,
            phase: self.phase,
            action: validated,
        });
        debug!(seat, phase = ?self.phase, action = ?validated, "action applied");

        match validated {
            ValidatedAction::Fold => {
                self.players[seat].fold();
                self.finish_by_fold(seat)?;
                return Ok(validated);
            }
            ValidatedAction::Check => {}
            ValidatedAction::Call(n)
            | ValidatedAction::Bet(n)
            | ValidatedAction::Raise(n)
            | ValidatedAction::AllIn(n) => self.players[seat].place_bet(n)?,
        }
        self.round.acted[seat] = true;
        self.track_raise(seat, state.opponent_last_bet);
        self.settle_uncalled();

        if self.is_round_closed() {
            self.close_round()?;
        } else {
            self.to_act = Some(other(seat));
        }
        Ok(validated)
    }

    fn ensure_turn(&self, seat: usize) -> Result<(), GameError> {
        if !self.phase.is_betting() {
            return Err(GameError::NoHandInProgress);
        }
        match self.to_act {
            Some(expected) if expected == seat => Ok(()),
            Some(expected) => Err(GameError::NotPlayersTurn {
                expected,
                actual: seat,
            }),
            None => Err(GameError::NoHandInProgress),
        }
    }

    fn rotate_button(&mut self) {
        self.button = other(self.button);
        let button = self.button;
        self.players[button].set_position(Position::Button);
        self.players[other(button)].set_position(Position::BigBlind);
    }

    fn post_blind(&mut self, seat: usize, amount: u32) -> Result<(), GameError> {
        let amount = amount.min(self.players[seat].stack());
        self.players[seat].place_bet(amount)
    }

    fn draw(&mut self) -> Result<Card, GameError> {
        self.deck.deal_card().ok_or_else(|| {
            error!(hand = self.hands_played, "deck exhausted mid-hand");
            GameError::DeckExhausted
        })
    }

    // An increase over the opponent's bet reopens their action; only a full
    // raise moves the minimum raise size.
    fn track_raise(&mut self, seat: usize, opponent_bet: u32) {
        let new_bet = self.players[seat].current_bet();
        if new_bet > opponent_bet {
            let increment = new_bet - opponent_bet;
            if increment >= self.round.last_raise {
                self.round.last_raise = increment;
            }
            self.round.acted[other(seat)] = false;
        }
    }

    // Chips above an all-in player's bet can never be called.
    fn settle_uncalled(&mut self) {
        for short in [0, 1] {
            let long = other(short);
            let short_bet = self.players[short].current_bet();
            let long_bet = self.players[long].current_bet();
            if self.players[short].is_all_in() && short_bet < long_bet {
                let excess = long_bet - short_bet;
                self.players[long].refund(excess);
                debug!(seat = long, excess, "uncalled chips returned");
            }
        }
    }

    fn collect_bets(&mut self) {
        for p in &mut self.players {
            self.collected += p.current_bet();
            p.reset_bet();
        }
    }

    // Move to the next street, running the board out while a player is all-in.
    fn close_round(&mut self) -> Result<(), GameError> {
        loop {
            self.collect_bets();
            self.round = BettingRound::new(self.config.big_blind);
            let next = self.phase.next();
            let deal = match next {
                Phase::Flop => 3,
                Phase::Turn | Phase::River => 1,
                _ => {
                    self.phase = Phase::Showdown;
                    self.to_act = None;
                    return self.showdown();
                }
            };
            for _ in 0..deal {
                let c = self.draw()?;
                self.board.push(c);
            }
            self.phase = next;
            debug!(phase = ?next, board = self.board.len(), pot = self.pot(), "street dealt");

            if !self.players.iter().any(Player::is_all_in) {
                self.to_act = Some(other(self.button));
                return Ok(());
            }
        }
    }

    fn finish_by_fold(&mut self, folded_seat: usize) -> Result<(), GameError> {
        let winner = other(folded_seat);
        self.collect_bets();
        let pot = self.collected;
        let mut payouts = [0; 2];
        payouts[winner] = pot;
        self.award(payouts)?;
        info!(winner, pot, folded_seat, "hand won by fold");
        self.complete(HandResult {
            winners: vec![winner],
            pot,
            payouts,
            reason: ResultReason::Fold { folded_seat },
            showdown: None,
            actions: Vec::new(),
        });
        Ok(())
    }

    /// Compare both seven-card hands and distribute the pot.
    fn showdown(&mut self) -> Result<(), GameError> {
        let hands: [HandStrength; 2] = [0, 1].map(|seat| {
            let mut cards = self.players[seat].hole_cards().to_vec();
            cards.extend_from_slice(&self.board);
            evaluate_hand(&cards)
        });
        let pot = self.collected;
        let winners = match compare_hands(&hands[0], &hands[1]) {
            std::cmp::Ordering::Greater => vec![0],
            std::cmp::Ordering::Less => vec![1],
            std::cmp::Ordering::Equal => vec![0, 1],
        };
        let split = winners.len() == 2;
        let payouts = if split {
            split_pot(pot, self.button)
        } else {
            let mut payouts = [0; 2];
            payouts[winners[0]] = pot;
            payouts
        };
        self.award(payouts)?;
        info!(
            ?winners,
            pot,
            hand0 = hands[0].name,
            hand1 = hands[1].name,
            "showdown"
        );
        self.complete(HandResult {
            winners,
            pot,
            payouts,
            reason: ResultReason::Showdown,
            showdown: Some(ShowdownInfo { hands, split }),
            actions: Vec::new(),
        });
        Ok(())
    }

    fn award(&mut self, payouts: [u32; 2]) -> Result<(), GameError> {
        for (player, amount) in self.players.iter_mut().zip(payouts) {
            player.add_chips(amount)?;
        }
        self.collected = 0;
        Ok(())
    }

    fn complete(&mut self, mut result: HandResult) {
        result.actions = self.actions.clone();
        self.result = Some(result);
        self.phase = Phase::HandComplete;
        self.to_act = None;
    }
}

/// Halves of a tied pot; the odd chip goes to the big blind, the seat after
/// `button`. Heads-up contributions are matched before showdown so the pot
/// is normally even.
fn split_pot(pot: u32, button: usize) -> [u32; 2] {
    let half = pot / 2;
    let mut payouts = [half, half];
    payouts[other(button)] += pot % 2;
    payouts
}
