use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::cards::Card;
use crate::player::{PlayerId, PlayerMove};

/// Records a single applied move.
/// Rejected moves are never recorded; forfeits are.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn counter value when the move was made
    pub turn: u32,
    /// Player identifier (0 or 1) the move was submitted under
    pub player_id: PlayerId,
    /// The move itself
    pub action: PlayerMove,
    /// Card the move touched, as it stood afterwards (a doubled flower shows its new value)
    #[serde(default)]
    pub card: Option<Card>,
    /// True when a strategy chose the move rather than an outside caller
    #[serde(default)]
    pub by_ai: bool,
    /// True when a strategy-driven turn was given up
    #[serde(default)]
    pub forfeit: bool,
}

/// Summary of one finished (or abandoned) game.
/// Serialized to JSONL by simulation runs.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Seed the deck was shuffled with, if any
    pub seed: Option<u64>,
    /// Player who moved first
    pub first_player: PlayerId,
    /// Turns played
    pub turns: u32,
    /// Final scores indexed by player id
    pub scores: [u32; 2],
    /// Player who reached the winning score, if the game ended
    pub winner: Option<PlayerId>,
    /// Chronological list of applied moves
    pub moves: Vec<MoveRecord>,
    /// Timestamp the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

/// Writes one JSON line per game.
pub struct RecordWriter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
