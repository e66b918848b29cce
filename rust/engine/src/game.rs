use crate::cards::ActionKind;
use crate::player::{opponent, PlayerId, NUM_PLAYERS};
use serde::{Deserialize, Serialize};

/// An action card that has been played and is waiting for its target.
/// `owner` is the seat whose table the target is chosen from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PendingSelection {
    pub action: ActionKind,
    /// Player who played the action card
    pub actor: PlayerId,
    /// Player whose id the resolution must be submitted under
    pub owner: PlayerId,
}

impl PendingSelection {
    pub fn new(action: ActionKind, actor: PlayerId) -> Self {
        let owner = if action.targets_opponent() {
            opponent(actor)
        } else {
            actor
        };
        Self {
            action,
            actor,
            owner,
        }
    }
}

/// Game phase. A selection phase carries its owner so the two can never disagree.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Setup,
    PlayerTurn,
    Selection(PendingSelection),
    GameOver,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Setup => "Setup",
            Phase::PlayerTurn => "PlayerTurn",
            Phase::Selection(p) => match p.action {
                ActionKind::Prune => "PruneSelection",
                ActionKind::Pest => "PestSelection",
                ActionKind::Water => "WaterSelection",
                ActionKind::Fertilize => "FertilizeSelection",
            },
            Phase::GameOver => "GameOver",
        }
    }

    pub fn pending(&self) -> Option<PendingSelection> {
        match self {
            Phase::Selection(p) => Some(*p),
            _ => None,
        }
    }
}

/// Whose turn it is and how many turns have passed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct TurnTracker {
    active: PlayerId,
    count: u32,
}

impl TurnTracker {
    pub fn starting_with(active: PlayerId) -> Self {
        Self { active, count: 0 }
    }

    pub fn current(&self) -> PlayerId {
        self.active
    }
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn advance(&mut self) {
        self.active = (self.active + 1) % NUM_PLAYERS;
        self.count += 1;
    }
}
