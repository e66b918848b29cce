use crate::cards::{ActionKind, Card, CardKind};
use crate::errors::{GameError, Illegal};
use crate::player::{opponent, Player, PlayerId};

/// Validates a draw for the active player.
///
/// # Errors
///
/// - [`GameError::EmptyDeck`] - no cards left to draw
/// - [`GameError::IllegalMove`] with [`Illegal::HandFull`] - hand already holds five cards
///
/// # Examples
///
/// ```
/// use petal_engine::errors::GameError;
/// use petal_engine::player::Player;
/// use petal_engine::rules::check_draw;
///
/// let p = Player::new(0);
/// assert!(check_draw(&p, 3).is_ok());
/// assert_eq!(check_draw(&p, 0), Err(GameError::EmptyDeck));
/// ```
pub fn check_draw(player: &Player, deck_remaining: usize) -> Result<(), GameError> {
    if deck_remaining == 0 {
        return Err(GameError::EmptyDeck);
    }
    if player.hand_is_full() {
        return Err(Illegal::HandFull.into());
    }
    Ok(())
}

/// Validates playing `card` (already known to be in `actor`'s hand) against both tables.
///
/// Flowers need room on the actor's table. Prune and Fertilize need a flower on the
/// actor's own table, Pest needs one on the opponent's, and Water needs both room on
/// the actor's table and a flower on the opponent's.
///
/// # Examples
///
/// ```
/// use petal_engine::cards::{ActionKind, Card, CardId};
/// use petal_engine::errors::{GameError, Illegal};
/// use petal_engine::player::Player;
/// use petal_engine::rules::check_play;
///
/// let players = [Player::new(0), Player::new(1)];
/// let pest = Card::action(CardId(21), ActionKind::Pest);
/// assert_eq!(
///     check_play(&players, 0, &pest),
///     Err(GameError::IllegalMove(Illegal::OpponentTableEmpty(ActionKind::Pest)))
/// );
/// ```
pub fn check_play(players: &[Player; 2], actor: PlayerId, card: &Card) -> Result<(), GameError> {
    let own = &players[actor];
    let opp = &players[opponent(actor)];
    match card.kind {
        CardKind::Flower { .. } => {
            if own.table_is_full() {
                return Err(Illegal::TableFull.into());
            }
        }
        CardKind::Action(kind @ (ActionKind::Prune | ActionKind::Fertilize)) => {
            if own.table().is_empty() {
                return Err(Illegal::OwnTableEmpty(kind).into());
            }
        }
        CardKind::Action(ActionKind::Pest) => {
            if opp.table().is_empty() {
                return Err(Illegal::OpponentTableEmpty(ActionKind::Pest).into());
            }
        }
        CardKind::Action(ActionKind::Water) => {
            if own.table_is_full() {
                return Err(Illegal::TableFull.into());
            }
            if opp.table().is_empty() {
                return Err(Illegal::OpponentTableEmpty(ActionKind::Water).into());
            }
        }
    }
    Ok(())
}

/// Discarding from the table is only allowed when both hand and table are full.
pub fn check_discard(player: &Player) -> Result<(), GameError> {
    if player.hand_is_full() && player.table_is_full() {
        Ok(())
    } else {
        Err(Illegal::DiscardNotForced.into())
    }
}
