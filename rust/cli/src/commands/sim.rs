//! Simulation command: computer-vs-computer games in bulk.
//!
//! Seat 2 is driven by the engine's AI hook and seat 1 by
//! [`Engine::autoplay`] with the same strategy, so every game exercises the
//! same code paths an interactive game does. Game `i` uses `seed + i`.

use crate::config;
use crate::error::CliError;
use crate::io_utils::create_output;
use crate::ui;
use petal_ai::create_ai;
use petal_engine::engine::{Engine, EngineConfig, FirstPlayer};
use petal_engine::logger::{GameRecord, RecordWriter};
use std::io::Write;
use std::path::PathBuf;

/// Totals across a simulation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimSummary {
    pub games: u32,
    pub wins: [u32; 2],
    pub unfinished: u32,
    pub total_turns: u64,
}

impl SimSummary {
    fn add(&mut self, record: &GameRecord) {
        self.games += 1;
        self.total_turns += u64::from(record.turns);
        match record.winner {
            Some(w) => self.wins[w] += 1,
            None => self.unfinished += 1,
        }
    }

    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f64 / f64::from(self.games)
    }
}

/// Handle the sim command.
///
/// # Errors
///
/// `games == 0` or `max_turns == 0`, configuration and output failures, and
/// engine invariant violations.
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    max_turns: u32,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 || max_turns == 0 {
        ui::write_error(err, "games and max-turns must be >= 1")?;
        return Err(CliError::InvalidInput(
            "games and max-turns must be >= 1".to_string(),
        ));
    }
    let cfg = config::load_with_sources()?.config;
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut writer = match output {
        Some(path) => Some(RecordWriter::new(create_output(&PathBuf::from(path))?)),
        None => None,
    };

    let mut summary = SimSummary::default();
    for i in 0..games {
        let record = play_one(&cfg.ai, base_seed.wrapping_add(u64::from(i)), max_turns)?;
        summary.add(&record);
        if let Some(w) = writer.as_mut() {
            w.write(&record)?;
        }
    }
    tracing::info!(
        games = summary.games,
        p1_wins = summary.wins[0],
        p2_wins = summary.wins[1],
        unfinished = summary.unfinished,
        "simulation finished"
    );

    writeln!(out, "sim: games={} seed={} ai={}", games, base_seed, cfg.ai)?;
    writeln!(out, "P1 wins: {}", summary.wins[0])?;
    writeln!(out, "P2 wins: {}", summary.wins[1])?;
    writeln!(out, "Unfinished: {}", summary.unfinished)?;
    writeln!(out, "Average turns: {:.1}", summary.average_turns())?;
    if let Some(w) = writer {
        writeln!(out, "Records written: {}", w.written())?;
    }
    Ok(())
}

fn play_one(ai_name: &str, seed: u64, max_turns: u32) -> Result<GameRecord, CliError> {
    let ai = create_ai(ai_name)
        .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", ai_name)))?;
    let mut eng = Engine::new(EngineConfig {
        seed: Some(seed),
        first_player: FirstPlayer::Random,
    })
    .with_ai(1, ai.clone())?;
    eng.start_game()?;
    while !eng.is_game_over() && eng.turn_count() < max_turns {
        eng.autoplay(0, ai.as_ref())?;
    }
    Ok(eng.game_record())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn summary_adds_up() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(5, Some(3), 200, None, &mut out, &mut err).unwrap();
        let text = String::from_utf8(out).unwrap();

        let count = |label: &str| -> u32 {
            text.lines()
                .find_map(|l| l.strip_prefix(label))
                .and_then(|v| v.trim().parse().ok())
                .unwrap()
        };
        assert_eq!(
            count("P1 wins:") + count("P2 wins:") + count("Unfinished:"),
            5
        );
        assert!(text.starts_with("sim: games=5 seed=3 ai=greedy"));
    }

    #[test]
    #[serial]
    fn zero_games_is_invalid() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handle_sim_command(0, None, 200, None, &mut out, &mut err);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
        assert!(!err.is_empty());
    }

    #[test]
    fn one_game_is_deterministic() {
        let a = play_one("greedy", 11, 300).unwrap();
        let b = play_one("greedy", 11, 300).unwrap();
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.scores, b.scores);
        assert!(a.turns <= 300 + 2);
    }
}
