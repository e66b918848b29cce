use crate::cards::{ActionKind, CardId};
use crate::player::PlayerId;
use std::fmt;
use thiserror::Error;

/// Card zones a lookup can miss in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Deck,
    Hand,
    Table,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Deck => write!(f, "deck"),
            Zone::Hand => write!(f, "hand"),
            Zone::Table => write!(f, "table"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal move: {0}")]
    IllegalMove(Illegal),
    #[error("Card {card} not found in player {player}'s {zone}")]
    CardNotFound {
        card: CardId,
        player: PlayerId,
        zone: Zone,
    },
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

impl GameError {
    /// Rejected moves leave the game untouched and the caller may try something else.
    /// Invariant violations are defects and are not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::InvariantViolation(_))
    }
}

impl From<Illegal> for GameError {
    fn from(reason: Illegal) -> Self {
        GameError::IllegalMove(reason)
    }
}

/// Why a move was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Illegal {
    #[error("game has already started")]
    AlreadyStarted,
    #[error("operation not allowed during {0}")]
    WrongPhase(&'static str),
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("it's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: PlayerId, actual: PlayerId },
    #[error("player {expected} owes the selection, not player {actual}")]
    NotSelectionOwner { expected: PlayerId, actual: PlayerId },
    #[error("hand is full")]
    HandFull,
    #[error("table is full")]
    TableFull,
    #[error("own table is empty, nothing to {0:?}")]
    OwnTableEmpty(ActionKind),
    #[error("opponent's table is empty, nothing to {0:?}")]
    OpponentTableEmpty(ActionKind),
    #[error("discarding from the table requires a full hand and a full table")]
    DiscardNotForced,
    #[error("cannot pass while other moves are available")]
    PassWithLegalMoves,
}
