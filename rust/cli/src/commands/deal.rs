//! Deal command: shows the opening position for a seed without playing it.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_cards, seat_label};
use petal_engine::engine::{Engine, EngineConfig};
use std::io::Write;

/// Handle the deal command.
///
/// Uses `seed`, else the configured seed, else a random one, and prints the
/// seed so the deal can be reproduced.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load_with_sources()?.config;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut eng = Engine::new(EngineConfig {
        seed: Some(seed),
        first_player: cfg.first_player,
    });
    eng.start_game()?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "First: {}", seat_label(eng.current_player()))?;
    for p in eng.players() {
        writeln!(out, "Hand {}: {}", seat_label(p.id()), format_cards(p.hand()))?;
    }
    writeln!(out, "Deck: {} cards left", eng.deck_remaining())?;
    Ok(())
}
