use crate::cards::{Card, CardId};
use crate::errors::{GameError, Illegal, Zone};
use serde::{Deserialize, Serialize};

/// Seat index, 0 or 1.
pub type PlayerId = usize;

pub const NUM_PLAYERS: usize = 2;
/// Cards a hand may hold through normal play
pub const HAND_LIMIT: usize = 5;
/// Flowers a table may hold
pub const TABLE_LIMIT: usize = 5;
/// Score that ends the game
pub const WINNING_SCORE: u32 = 20;

pub fn opponent(id: PlayerId) -> PlayerId {
    (id + 1) % NUM_PLAYERS
}

/// A move as a player (or a remote caller) submits it.
/// Each variant maps onto one public engine operation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PlayerMove {
    /// Take the top card of the deck
    Draw,
    /// Play a card from hand
    Play { card: CardId },
    /// Forced discard from a full table
    Discard { card: CardId },
    /// Choose the target of a pending action card
    Resolve { card: CardId },
    /// Give up the turn; only legal with no other move available
    Pass,
}

/// One player's hand and table. The score is derived from the table.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    hand: Vec<Card>,
    table: Vec<Card>,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Vec::with_capacity(HAND_LIMIT),
            table: Vec::with_capacity(TABLE_LIMIT),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn table(&self) -> &[Card] {
        &self.table
    }

    pub fn score(&self) -> u32 {
        self.table.iter().map(Card::points).sum()
    }

    pub fn hand_card(&self, card: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == card)
    }

    pub fn table_card(&self, card: CardId) -> Option<&Card> {
        self.table.iter().find(|c| c.id == card)
    }

    pub fn hand_is_full(&self) -> bool {
        self.hand.len() >= HAND_LIMIT
    }

    pub fn table_is_full(&self) -> bool {
        self.table.len() >= TABLE_LIMIT
    }

    /// Dealing and drawing only. Fails on a full hand.
    pub fn add_to_hand(&mut self, card: Card) -> Result<(), GameError> {
        if self.hand_is_full() {
            return Err(Illegal::HandFull.into());
        }
        self.hand.push(card);
        Ok(())
    }

    pub fn remove_from_hand(&mut self, card: CardId) -> Result<Card, GameError> {
        let idx = self.position(Zone::Hand, card)?;
        Ok(self.hand.remove(idx))
    }

    pub fn add_to_table(&mut self, card: Card) -> Result<(), GameError> {
        if self.table_is_full() {
            return Err(Illegal::TableFull.into());
        }
        self.table.push(card);
        Ok(())
    }

    pub fn remove_from_table(&mut self, card: CardId) -> Result<Card, GameError> {
        let idx = self.position(Zone::Table, card)?;
        Ok(self.table.remove(idx))
    }

    pub fn move_hand_to_table(&mut self, card: CardId) -> Result<(), GameError> {
        if self.table_is_full() {
            return Err(Illegal::TableFull.into());
        }
        let played = self.remove_from_hand(card)?;
        self.table.push(played);
        Ok(())
    }

    /// Doubles a table flower in place, returning its new value.
    pub fn double_on_table(&mut self, card: CardId) -> Result<u32, GameError> {
        let idx = self.position(Zone::Table, card)?;
        self.table[idx].double_points().ok_or_else(|| {
            GameError::InvariantViolation(format!("non-flower {} on player {}'s table", card, self.id))
        })
    }

    pub fn clear(&mut self) {
        self.hand.clear();
        self.table.clear();
    }

    fn position(&self, zone: Zone, card: CardId) -> Result<usize, GameError> {
        let cards: &[Card] = match zone {
            Zone::Hand => &self.hand,
            Zone::Table => &self.table,
            Zone::Deck => &[],
        };
        cards
            .iter()
            .position(|c| c.id == card)
            .ok_or(GameError::CardNotFound {
                card,
                player: self.id,
                zone,
            })
    }
}
