use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identity of a card within one deck.
/// Ids are stable for the lifetime of a game, whichever zone holds the card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u16);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Flower species in the standard deck.
/// Each species has a base point value printed on its cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Species {
    /// Daisy (2 points)
    Daisy,
    /// Tulip (3 points)
    Tulip,
    /// Iris (4 points)
    Iris,
    /// Rose (5 points)
    Rose,
}

impl Species {
    pub fn base_points(self) -> u32 {
        match self {
            Species::Daisy => 2,
            Species::Tulip => 3,
            Species::Iris => 4,
            Species::Rose => 5,
        }
    }
}

/// The four action cards. Each one opens a selection step when played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum ActionKind {
    /// Discard a flower from your own table
    Prune,
    /// Discard a flower from the opponent's table
    Pest,
    /// Move a flower from the opponent's table to yours
    Water,
    /// Double the points of a flower on your own table
    Fertilize,
}

impl ActionKind {
    /// True when the selection targets the opponent's table rather than the actor's.
    pub fn targets_opponent(self) -> bool {
        matches!(self, ActionKind::Pest | ActionKind::Water)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Flower { species: Species, points: u32 },
    Action(ActionKind),
}

/// A single card. Only a flower's point value ever changes (doubled by Fertilize).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
}

impl Card {
    pub fn flower(id: CardId, species: Species, points: u32) -> Self {
        Self {
            id,
            kind: CardKind::Flower { species, points },
        }
    }

    pub fn action(id: CardId, action: ActionKind) -> Self {
        Self {
            id,
            kind: CardKind::Action(action),
        }
    }

    pub fn is_flower(&self) -> bool {
        matches!(self.kind, CardKind::Flower { .. })
    }

    pub fn action_kind(&self) -> Option<ActionKind> {
        match self.kind {
            CardKind::Action(a) => Some(a),
            CardKind::Flower { .. } => None,
        }
    }

    /// Point value; action cards are worth nothing.
    pub fn points(&self) -> u32 {
        match self.kind {
            CardKind::Flower { points, .. } => points,
            CardKind::Action(_) => 0,
        }
    }

    /// Doubles a flower in place and returns the new value. Actions are left untouched.
    pub fn double_points(&mut self) -> Option<u32> {
        match &mut self.kind {
            CardKind::Flower { points, .. } => {
                *points = points.saturating_mul(2);
                Some(*points)
            }
            CardKind::Action(_) => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CardKind::Flower { species, points } => write!(f, "{:?}({}) {}", species, points, self.id),
            CardKind::Action(a) => write!(f, "{:?} {}", a, self.id),
        }
    }
}

pub const FLOWERS_PER_SPECIES: u16 = 5;
pub const CARDS_PER_ACTION: u16 = 3;
pub const STANDARD_DECK_SIZE: usize = 32;

pub fn all_species() -> [Species; 4] {
    [Species::Daisy, Species::Tulip, Species::Iris, Species::Rose]
}

pub fn all_actions() -> [ActionKind; 4] {
    [
        ActionKind::Prune,
        ActionKind::Pest,
        ActionKind::Water,
        ActionKind::Fertilize,
    ]
}

/// Builds the standard deck in id order: twenty flowers then twelve actions.
pub fn standard_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(STANDARD_DECK_SIZE);
    let mut next = 0u16;
    for s in all_species() {
        for _ in 0..FLOWERS_PER_SPECIES {
            v.push(Card::flower(CardId(next), s, s.base_points()));
            next += 1;
        }
    }
    for a in all_actions() {
        for _ in 0..CARDS_PER_ACTION {
            v.push(Card::action(CardId(next), a));
            next += 1;
        }
    }
    v
}
