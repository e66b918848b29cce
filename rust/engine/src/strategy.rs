use crate::engine::Engine;
use crate::player::{PlayerId, PlayerMove};

/// Decision procedure for a computer-controlled seat.
///
/// The engine asks for one move at a time while the seat is active: first the move
/// for the turn, then, if that move opened a selection, the target. The chosen move
/// goes through the same entry points a human caller uses. Returning
/// [`PlayerMove::Pass`], or a move the engine rejects, forfeits the turn.
///
/// # Example Implementation
///
/// ```rust
/// use petal_engine::engine::Engine;
/// use petal_engine::player::{PlayerId, PlayerMove};
/// use petal_engine::strategy::Strategy;
///
/// struct AlwaysDraw;
///
/// impl Strategy for AlwaysDraw {
///     fn choose_move(&self, _engine: &Engine, _player_id: PlayerId) -> PlayerMove {
///         PlayerMove::Draw
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysDraw"
///     }
/// }
/// ```
pub trait Strategy: Send + Sync {
    /// Choose the next move for `player_id` given the current engine state.
    fn choose_move(&self, engine: &Engine, player_id: PlayerId) -> PlayerMove;

    /// Identifier of this strategy.
    fn name(&self) -> &str;
}
