//! Greedy fixed-priority policy.
//!
//! Each turn the first applicable rule wins:
//! 1. Plant the highest-point flower in hand, if the table has room.
//! 2. Play Pest when the opponent has flowers, then discard their best one.
//! 3. Play Fertilize when the own table has flowers, then double the best one.
//! 4. Draw if drawing is legal; otherwise pass, which forfeits the turn.
//!
//! Prune and Water are never played. Targets are judged on current point value
//! only, first in table order on ties.

use crate::Strategy;
use petal_engine::cards::{ActionKind, Card};
use petal_engine::engine::Engine;
use petal_engine::game::{PendingSelection, Phase};
use petal_engine::player::{PlayerId, PlayerMove, opponent};
use petal_engine::rules::check_draw;

/// Deterministic greedy opponent.
///
/// # Example
///
/// ```rust
/// use petal_ai::greedy::GreedyAI;
/// use petal_ai::Strategy;
/// use petal_engine::engine::{Engine, EngineConfig, FirstPlayer};
///
/// let ai = GreedyAI::new();
/// let mut engine = Engine::new(EngineConfig {
///     seed: Some(3),
///     first_player: FirstPlayer::Seat(0),
/// });
/// engine.start_game().unwrap();
///
/// let mv = ai.choose_move(&engine, 0);
/// assert!(engine.legal_moves(0).contains(&mv) || mv == petal_engine::player::PlayerMove::Pass);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAI;

impl GreedyAI {
    pub fn new() -> Self {
        Self
    }

    fn turn_move(engine: &Engine, player_id: PlayerId) -> PlayerMove {
        let players = engine.players();
        let me = &players[player_id];
        let opp = &players[opponent(player_id)];

        if !me.table_is_full() {
            if let Some(best) = highest(me.hand().iter().filter(|c| c.is_flower())) {
                return PlayerMove::Play { card: best.id };
            }
        }
        if !opp.table().is_empty() {
            if let Some(pest) = find_action(me.hand(), ActionKind::Pest) {
                return PlayerMove::Play { card: pest.id };
            }
        }
        if !me.table().is_empty() {
            if let Some(fert) = find_action(me.hand(), ActionKind::Fertilize) {
                return PlayerMove::Play { card: fert.id };
            }
        }
        if check_draw(me, engine.deck_remaining()).is_ok() {
            return PlayerMove::Draw;
        }
        PlayerMove::Pass
    }

    fn selection_move(engine: &Engine, pending: PendingSelection) -> PlayerMove {
        match highest(engine.players()[pending.owner].table().iter()) {
            Some(target) => PlayerMove::Resolve { card: target.id },
            None => PlayerMove::Pass,
        }
    }
}

impl Strategy for GreedyAI {
    fn choose_move(&self, engine: &Engine, player_id: PlayerId) -> PlayerMove {
        let mv = match engine.phase() {
            Phase::Selection(pending) if pending.actor == player_id => {
                Self::selection_move(engine, pending)
            }
            Phase::PlayerTurn if engine.current_player() == player_id => {
                Self::turn_move(engine, player_id)
            }
            _ => PlayerMove::Pass,
        };
        tracing::debug!(player_id, action = ?mv, "greedy choice");
        mv
    }

    fn name(&self) -> &str {
        "GreedyAI"
    }
}

/// Highest point value, earliest card on ties.
fn highest<'a>(cards: impl Iterator<Item = &'a Card>) -> Option<&'a Card> {
    cards.fold(None, |best, c| match best {
        Some(b) if b.points() >= c.points() => Some(b),
        _ => Some(c),
    })
}

fn find_action(hand: &[Card], kind: ActionKind) -> Option<&Card> {
    hand.iter().find(|c| c.action_kind() == Some(kind))
}
