use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::cards::{ActionKind, Card, CardId, CardKind};
use crate::deck::Deck;
use crate::errors::{GameError, Illegal, Zone};
use crate::game::{PendingSelection, Phase, TurnTracker};
use crate::logger::{GameRecord, MoveRecord};
use crate::player::{Player, PlayerId, PlayerMove, HAND_LIMIT, NUM_PLAYERS, TABLE_LIMIT, WINNING_SCORE};
use crate::rules::{check_discard, check_draw, check_play};
use crate::strategy::Strategy;

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;
/// A strategy-driven turn is at most a play plus the selection it opens.
const MAX_AUTOPLAY_STEPS: usize = 2;

/// Who takes the first turn after the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FirstPlayer {
    Seat(PlayerId),
    /// Drawn from the engine's seeded RNG
    #[default]
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub seed: Option<u64>,
    pub first_player: FirstPlayer,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The move completed the turn and play passed to the other seat
    TurnAdvanced,
    /// An action card was played and now waits for its target
    SelectionPending(PendingSelection),
}

struct AiSeat {
    seat: PlayerId,
    strategy: Arc<dyn Strategy>,
}

impl fmt::Debug for AiSeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiSeat")
            .field("seat", &self.seat)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// One game session: deck, both players, turn tracking and the phase machine.
///
/// Every operation either applies completely or returns an error and leaves the
/// session untouched. Sessions share nothing, so any number can run side by side.
///
/// # Examples
///
/// ```
/// use petal_engine::engine::{Engine, EngineConfig, FirstPlayer};
/// use petal_engine::game::Phase;
///
/// let mut engine = Engine::new(EngineConfig {
///     seed: Some(7),
///     first_player: FirstPlayer::Seat(0),
/// });
/// engine.start_game().expect("fresh engine starts");
///
/// assert_eq!(engine.phase(), Phase::PlayerTurn);
/// assert_eq!(engine.players()[0].hand().len(), 5);
/// assert_eq!(engine.players()[1].hand().len(), 5);
/// assert_eq!(engine.deck_remaining(), 22);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    deck: Deck,
    /// Stacked decks are dealt in the order given
    shuffle_on_start: bool,
    seat_rng: ChaCha20Rng,
    players: [Player; 2],
    turn: TurnTracker,
    phase: Phase,
    starting_player: PlayerId,
    ai: Option<AiSeat>,
    autopilot: bool,
    history: Vec<MoveRecord>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        Self::build(config, Deck::standard(seed), true)
    }

    /// Engine over a stacked deck (first card on top) that is never shuffled.
    pub fn with_stacked_deck(config: EngineConfig, cards: Vec<Card>) -> Self {
        Self::build(config, Deck::from_top(cards), false)
    }

    fn build(config: EngineConfig, deck: Deck, shuffle_on_start: bool) -> Self {
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        Self {
            config,
            deck,
            shuffle_on_start,
            seat_rng: ChaCha20Rng::seed_from_u64(seed.rotate_left(17)),
            players: [Player::new(0), Player::new(1)],
            turn: TurnTracker::default(),
            phase: Phase::Idle,
            starting_player: 0,
            ai: None,
            autopilot: false,
            history: Vec::new(),
        }
    }

    /// Hands `seat` to a strategy. The engine moves for that seat whenever it becomes active.
    pub fn with_ai(mut self, seat: PlayerId, strategy: Arc<dyn Strategy>) -> Result<Self, GameError> {
        if seat >= NUM_PLAYERS {
            return Err(Illegal::UnknownPlayer(seat).into());
        }
        self.ai = Some(AiSeat { seat, strategy });
        Ok(self)
    }

    pub fn ai_seat(&self) -> Option<PlayerId> {
        self.ai.as_ref().map(|ai| ai.seat)
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn current_player(&self) -> PlayerId {
        self.turn.current()
    }
    pub fn turn_count(&self) -> u32 {
        self.turn.count()
    }
    pub fn starting_player(&self) -> PlayerId {
        self.starting_player
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
    pub fn pending_selection(&self) -> Option<PendingSelection> {
        self.phase.pending()
    }

    /// Seat that must submit the pending resolution, if any.
    pub fn pending_selection_owner(&self) -> Option<PlayerId> {
        self.phase.pending().map(|p| p.owner)
    }

    /// Player whose score reached the winning total, once the game is over.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.phase != Phase::GameOver {
            return None;
        }
        self.players
            .iter()
            .find(|p| p.score() >= WINNING_SCORE)
            .map(Player::id)
    }

    /// Deals both hands and opens the first turn. Only valid from `Idle`.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Idle {
            return Err(Illegal::AlreadyStarted.into());
        }
        let first = match self.config.first_player {
            FirstPlayer::Seat(s) if s >= NUM_PLAYERS => {
                return Err(Illegal::UnknownPlayer(s).into());
            }
            FirstPlayer::Seat(s) => s,
            FirstPlayer::Random => self.seat_rng.random_range(0..NUM_PLAYERS),
        };

        self.phase = Phase::Setup;
        if self.shuffle_on_start {
            self.deck.shuffle();
        }
        self.deal()?;
        self.turn = TurnTracker::starting_with(first);
        self.starting_player = first;
        self.phase = Phase::PlayerTurn;
        info!(
            first_player = first,
            deck_remaining = self.deck.remaining(),
            "game started"
        );
        self.verify_invariants()?;

        if self.ai_seat() == Some(first) {
            self.run_ai_turn()?;
        }
        Ok(())
    }

    /// Returns to `Idle` with every card back in the deck. The AI seat is kept.
    pub fn reset(&mut self) {
        for p in &mut self.players {
            p.clear();
        }
        self.deck.reset();
        self.turn = TurnTracker::default();
        self.phase = Phase::Idle;
        self.history.clear();
        debug!("engine reset");
    }

    // Round robin: deal index k goes to player k mod 2. A short deck ends the deal early.
    fn deal(&mut self) -> Result<(), GameError> {
        for k in 0..NUM_PLAYERS * HAND_LIMIT {
            let Ok(card) = self.deck.pop_top() else {
                break;
            };
            self.players[k % NUM_PLAYERS].add_to_hand(card)?;
        }
        Ok(())
    }

    /// Dispatches a submitted move to its operation.
    pub fn apply(&mut self, player: PlayerId, mv: PlayerMove) -> Result<Outcome, GameError> {
        let result = match mv {
            PlayerMove::Draw => self.draw(player),
            PlayerMove::Play { card } => self.play_card(card, player),
            PlayerMove::Discard { card } => self.discard_from_table(card, player),
            PlayerMove::Resolve { card } => self.resolve_selection(card, player),
            PlayerMove::Pass => self.pass(player),
        };
        if let Err(e) = &result {
            debug!(player, action = ?mv, error = %e, "move rejected");
        }
        result
    }

    pub fn draw(&mut self, player: PlayerId) -> Result<Outcome, GameError> {
        self.require_turn(player)?;
        check_draw(&self.players[player], self.deck.remaining())?;
        let card = self.deck.pop_top()?;
        self.players[player].add_to_hand(card)?;
        self.record(player, PlayerMove::Draw, Some(card));
        debug!(player, card = %card.id, deck_remaining = self.deck.remaining(), "card drawn");
        self.advance_turn()?;
        Ok(Outcome::TurnAdvanced)
    }

    pub fn play_card(&mut self, card: CardId, player: PlayerId) -> Result<Outcome, GameError> {
        self.require_turn(player)?;
        let played = *self.players[player]
            .hand_card(card)
            .ok_or(GameError::CardNotFound {
                card,
                player,
                zone: Zone::Hand,
            })?;
        check_play(&self.players, player, &played)?;

        match played.kind {
            CardKind::Flower { .. } => {
                self.players[player].move_hand_to_table(card)?;
                self.record(player, PlayerMove::Play { card }, Some(played));
                debug!(player, card = %card, points = played.points(), "flower planted");
                self.advance_turn()?;
                Ok(Outcome::TurnAdvanced)
            }
            CardKind::Action(kind) => {
                self.players[player].remove_from_hand(card)?;
                let pending = PendingSelection::new(kind, player);
                self.phase = Phase::Selection(pending);
                self.record(player, PlayerMove::Play { card }, Some(played));
                debug!(player, card = %card, action = ?kind, owner = pending.owner, "action played");
                self.verify_invariants()?;
                Ok(Outcome::SelectionPending(pending))
            }
        }
    }

    /// Forced discard: only when both the hand and the table are full.
    pub fn discard_from_table(&mut self, card: CardId, player: PlayerId) -> Result<Outcome, GameError> {
        self.require_turn(player)?;
        check_discard(&self.players[player])?;
        let discarded = self.players[player].remove_from_table(card)?;
        self.record(player, PlayerMove::Discard { card }, Some(discarded));
        debug!(player, card = %card, "flower discarded from table");
        self.advance_turn()?;
        Ok(Outcome::TurnAdvanced)
    }

    /// Completes the pending action card with `card` from the owner's table.
    /// `player` must be the pending selection's owner.
    pub fn resolve_selection(&mut self, card: CardId, player: PlayerId) -> Result<Outcome, GameError> {
        self.require_player(player)?;
        let Phase::Selection(pending) = self.phase else {
            return Err(Illegal::WrongPhase(self.phase.name()).into());
        };
        if player != pending.owner {
            return Err(Illegal::NotSelectionOwner {
                expected: pending.owner,
                actual: player,
            }
            .into());
        }
        if self.players[pending.owner].table_card(card).is_none() {
            return Err(GameError::CardNotFound {
                card,
                player: pending.owner,
                zone: Zone::Table,
            });
        }

        let touched = match pending.action {
            ActionKind::Prune | ActionKind::Pest => self.players[pending.owner].remove_from_table(card)?,
            ActionKind::Water => {
                if self.players[pending.actor].table_is_full() {
                    return Err(self.violation(format!(
                        "water target table of player {} filled while selection was pending",
                        pending.actor
                    )));
                }
                let stolen = self.players[pending.owner].remove_from_table(card)?;
                self.players[pending.actor].add_to_table(stolen)?;
                stolen
            }
            ActionKind::Fertilize => {
                self.players[pending.owner].double_on_table(card)?;
                *self.players[pending.owner]
                    .table_card(card)
                    .ok_or_else(|| self.violation(format!("fertilized card {} vanished", card)))?
            }
        };

        self.phase = Phase::PlayerTurn;
        self.record(player, PlayerMove::Resolve { card }, Some(touched));
        debug!(
            player,
            actor = pending.actor,
            action = ?pending.action,
            card = %card,
            points = touched.points(),
            "selection resolved"
        );
        self.advance_turn()?;
        Ok(Outcome::TurnAdvanced)
    }

    /// Gives up the turn. Only allowed when nothing else is legal.
    pub fn pass(&mut self, player: PlayerId) -> Result<Outcome, GameError> {
        self.require_turn(player)?;
        if self.legal_moves(player) != [PlayerMove::Pass] {
            return Err(Illegal::PassWithLegalMoves.into());
        }
        self.record(player, PlayerMove::Pass, None);
        debug!(player, "turn passed");
        self.advance_turn()?;
        Ok(Outcome::TurnAdvanced)
    }

    /// Every move `player` could submit right now without being rejected.
    pub fn legal_moves(&self, player: PlayerId) -> Vec<PlayerMove> {
        if player >= NUM_PLAYERS {
            return Vec::new();
        }
        match self.phase {
            Phase::PlayerTurn if player == self.turn.current() => {
                let me = &self.players[player];
                let mut moves = Vec::new();
                if check_draw(me, self.deck.remaining()).is_ok() {
                    moves.push(PlayerMove::Draw);
                }
                moves.extend(
                    me.hand()
                        .iter()
                        .filter(|c| check_play(&self.players, player, c).is_ok())
                        .map(|c| PlayerMove::Play { card: c.id }),
                );
                if check_discard(me).is_ok() {
                    moves.extend(me.table().iter().map(|c| PlayerMove::Discard { card: c.id }));
                }
                if moves.is_empty() {
                    moves.push(PlayerMove::Pass);
                }
                moves
            }
            Phase::Selection(pending) if player == pending.owner => self.players[pending.owner]
                .table()
                .iter()
                .map(|c| PlayerMove::Resolve { card: c.id })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Checks the win condition; once any score reaches the target the game is over for good.
    pub fn is_game_over(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return true;
        }
        if self.players.iter().any(|p| p.score() >= WINNING_SCORE) {
            self.phase = Phase::GameOver;
            info!(
                winner = ?self.winner(),
                score_0 = self.players[0].score(),
                score_1 = self.players[1].score(),
                turns = self.turn.count(),
                "game over"
            );
            return true;
        }
        false
    }

    /// Plays one full turn for `player` with `strategy`: its move, and the target of any
    /// selection that move opens. A pass or a rejected choice forfeits the turn, so the
    /// turn always advances.
    pub fn autoplay(&mut self, player: PlayerId, strategy: &dyn Strategy) -> Result<(), GameError> {
        self.require_turn(player)?;
        let prev = std::mem::replace(&mut self.autopilot, true);
        let result = self.autoplay_turn(player, strategy);
        self.autopilot = prev;
        result
    }

    fn autoplay_turn(&mut self, player: PlayerId, strategy: &dyn Strategy) -> Result<(), GameError> {
        for _ in 0..MAX_AUTOPLAY_STEPS {
            let mv = strategy.choose_move(self, player);
            if mv == PlayerMove::Pass {
                break;
            }
            // a selection opened by this seat is submitted under the owner's id
            let submit_as = match (self.phase, mv) {
                (Phase::Selection(p), PlayerMove::Resolve { .. }) => p.owner,
                _ => player,
            };
            match self.apply(submit_as, mv) {
                Ok(Outcome::TurnAdvanced) => return Ok(()),
                Ok(Outcome::SelectionPending(_)) => continue,
                Err(e) if e.is_recoverable() => {
                    debug!(player, strategy = strategy.name(), error = %e, "strategy move rejected");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        self.forfeit_turn(player)
    }

    fn forfeit_turn(&mut self, player: PlayerId) -> Result<(), GameError> {
        if let Phase::Selection(pending) = self.phase {
            debug!(player, action = ?pending.action, "pending selection abandoned");
        }
        self.phase = Phase::PlayerTurn;
        self.history.push(MoveRecord {
            turn: self.turn.count(),
            player_id: player,
            action: PlayerMove::Pass,
            card: None,
            by_ai: true,
            forfeit: true,
        });
        debug!(player, "turn forfeited");
        self.advance_turn()
    }

    fn run_ai_turn(&mut self) -> Result<(), GameError> {
        let Some(ai) = &self.ai else {
            return Ok(());
        };
        let (seat, strategy) = (ai.seat, Arc::clone(&ai.strategy));
        self.autoplay(seat, strategy.as_ref())
    }

    fn advance_turn(&mut self) -> Result<(), GameError> {
        self.verify_invariants()?;
        self.turn.advance();
        debug!(turn = self.turn.count(), active = self.turn.current(), "turn advanced");
        if self.is_game_over() {
            return Ok(());
        }
        self.phase = Phase::PlayerTurn;
        if self.ai_seat() == Some(self.turn.current()) {
            self.run_ai_turn()?;
        }
        Ok(())
    }

    fn record(&mut self, player: PlayerId, action: PlayerMove, card: Option<Card>) {
        self.history.push(MoveRecord {
            turn: self.turn.count(),
            player_id: player,
            action,
            card,
            by_ai: self.autopilot,
            forfeit: false,
        });
    }

    fn require_player(&self, player: PlayerId) -> Result<(), GameError> {
        if player >= NUM_PLAYERS {
            return Err(Illegal::UnknownPlayer(player).into());
        }
        Ok(())
    }

    fn require_turn(&self, player: PlayerId) -> Result<(), GameError> {
        self.require_player(player)?;
        if self.phase != Phase::PlayerTurn {
            return Err(Illegal::WrongPhase(self.phase.name()).into());
        }
        let expected = self.turn.current();
        if player != expected {
            return Err(Illegal::NotPlayersTurn {
                expected,
                actual: player,
            }
            .into());
        }
        Ok(())
    }

    /// Checks zone exclusivity, capacities and that the phase agrees with the turn.
    pub fn verify_invariants(&self) -> Result<(), GameError> {
        let mut seen = HashSet::new();
        let all_cards = self
            .deck
            .cards()
            .iter()
            .chain(self.players.iter().flat_map(|p| p.hand().iter().chain(p.table())));
        for c in all_cards {
            if !seen.insert(c.id) {
                return Err(self.violation(format!("card {} is in more than one zone", c.id)));
            }
        }
        for p in &self.players {
            if p.hand().len() > HAND_LIMIT {
                return Err(self.violation(format!("player {} holds {} cards", p.id(), p.hand().len())));
            }
            if p.table().len() > TABLE_LIMIT {
                return Err(self.violation(format!(
                    "player {} has {} cards on the table",
                    p.id(),
                    p.table().len()
                )));
            }
            if let Some(c) = p.table().iter().find(|c| !c.is_flower()) {
                return Err(self.violation(format!("action card {} on player {}'s table", c.id, p.id())));
            }
        }
        if let Phase::Selection(pending) = self.phase {
            if pending != PendingSelection::new(pending.action, pending.actor) {
                return Err(self.violation(format!(
                    "{} owned by player {} but played by player {}",
                    self.phase.name(),
                    pending.owner,
                    pending.actor
                )));
            }
            if pending.actor != self.turn.current() {
                return Err(self.violation(format!(
                    "{} opened by player {} during player {}'s turn",
                    self.phase.name(),
                    pending.actor,
                    self.turn.current()
                )));
            }
        }
        Ok(())
    }

    fn violation(&self, msg: String) -> GameError {
        error!(phase = self.phase.name(), turn = self.turn.count(), "{}", msg);
        GameError::InvariantViolation(msg)
    }

    /// Snapshot of the game so far.
    pub fn game_record(&self) -> GameRecord {
        GameRecord {
            seed: self.config.seed,
            first_player: self.starting_player,
            turns: self.turn.count(),
            scores: [self.players[0].score(), self.players[1].score()],
            winner: self.winner(),
            moves: self.history.clone(),
            ts: None,
        }
    }
}
