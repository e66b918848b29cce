//! # Play Command
//!
//! One game in the terminal, either against the greedy computer player
//! (`--vs ai`, the human is P1) or hotseat between two people (`--vs human`).
//!
//! Commands are read line by line: `draw`, `play <id>`, `discard <id>`,
//! `pick <id>`, `pass`, `moves`, `q`. After playing an action card the same
//! player picks its target with `pick`, even when the target sits on the
//! opponent's table.
//!
//! The computer's reply is applied by the engine as soon as the human's move
//! completes; its moves are then revealed after `ai_delay_ms` through a
//! [`Pacer`].

use crate::cli::Vs;
use crate::config::{self, MAX_AI_DELAY_MS, first_player_label};
use crate::error::CliError;
use crate::formatters::{format_cards, format_move, format_record, format_table, seat_label};
use crate::io_utils::read_stdin_line;
use crate::pacing::Pacer;
use crate::ui;
use crate::validation::{ParseResult, parse_command};
use petal_ai::create_ai;
use petal_engine::engine::{Engine, EngineConfig, FirstPlayer};
use petal_engine::player::{PlayerId, PlayerMove};
use std::io::{BufRead, Write};
use std::time::Duration;

/// Seat the computer takes in `--vs ai` games.
pub const AI_SEAT: PlayerId = 1;

/// Command-line overrides for `play`; unset values fall back to the configuration.
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    pub vs: Vs,
    pub seed: Option<u64>,
    pub first: Option<FirstPlayer>,
    pub ai_delay_ms: Option<u64>,
}

/// Handle the play command: one interactive game.
///
/// # Errors
///
/// Configuration problems, output failures and engine invariant violations.
/// Rejected moves are reported on `err` and the player is asked again.
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()?.config;
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let first = opts.first.unwrap_or(cfg.first_player);
    let delay_ms = opts.ai_delay_ms.unwrap_or(cfg.ai_delay_ms);
    if delay_ms > MAX_AI_DELAY_MS {
        ui::write_error(err, &format!("ai-delay-ms must be <= {}", MAX_AI_DELAY_MS))?;
        return Err(CliError::InvalidInput(format!(
            "ai-delay-ms must be <= {}",
            MAX_AI_DELAY_MS
        )));
    }

    let mut eng = Engine::new(EngineConfig {
        seed: Some(seed),
        first_player: first,
    });
    if opts.vs == Vs::Ai {
        let ai = create_ai(&cfg.ai)
            .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", cfg.ai)))?;
        eng = eng.with_ai(AI_SEAT, ai)?;
    }

    writeln!(
        out,
        "play: vs={} seed={} first={}",
        opts.vs.as_str(),
        seed,
        first_player_label(first)
    )?;
    tracing::info!(vs = opts.vs.as_str(), seed, "interactive game");

    let pacer = Pacer::new(Duration::from_millis(delay_ms))?;
    let mut session = Session {
        eng,
        pacer,
        shown: 0,
    };
    session.eng.start_game()?;
    session.reveal_new_moves(out)?;
    session.run(out, err, stdin)
}

struct Session {
    eng: Engine,
    pacer: Pacer,
    /// History entries already printed
    shown: usize,
}

impl Session {
    fn run(
        &mut self,
        out: &mut dyn Write,
        err: &mut dyn Write,
        stdin: &mut dyn BufRead,
    ) -> Result<(), CliError> {
        let mut prompt_state = true;
        loop {
            if self.eng.is_game_over() {
                return self.print_result(out);
            }
            let actor = self.acting_seat();
            if prompt_state {
                self.print_state(actor, out)?;
            }
            ui::prompt(out, &self.prompt_text(actor))?;

            let Some(line) = read_stdin_line(stdin) else {
                writeln!(out)?;
                writeln!(out, "Game abandoned.")?;
                return Ok(());
            };
            prompt_state = false;
            match parse_command(&line) {
                ParseResult::Quit => {
                    writeln!(out, "Game abandoned.")?;
                    return Ok(());
                }
                ParseResult::ShowMoves => {
                    let moves: Vec<String> = self
                        .eng
                        .legal_moves(self.submit_seat(actor))
                        .iter()
                        .map(format_move)
                        .collect();
                    writeln!(out, "Moves: {}", moves.join(", "))?;
                }
                ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
                ParseResult::Move(mv) => {
                    let seat = match mv {
                        PlayerMove::Resolve { .. } => self.submit_seat(actor),
                        _ => actor,
                    };
                    match self.eng.apply(seat, mv) {
                        Ok(_) => {
                            self.reveal_new_moves(out)?;
                            prompt_state = true;
                        }
                        Err(e) if e.is_recoverable() => {
                            ui::write_error(err, &format!("Invalid move: {}", e))?;
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
            }
        }
    }

    /// The person at the keyboard: whoever played the pending action card, else the active seat.
    fn acting_seat(&self) -> PlayerId {
        self.eng
            .pending_selection()
            .map_or_else(|| self.eng.current_player(), |p| p.actor)
    }

    /// Seat a move is submitted under; selections are resolved under their owner.
    fn submit_seat(&self, actor: PlayerId) -> PlayerId {
        self.eng.pending_selection_owner().unwrap_or(actor)
    }

    fn prompt_text(&self, actor: PlayerId) -> String {
        match self.eng.pending_selection() {
            Some(p) => format!(
                "{}, pick a flower on {}'s table for {:?}: ",
                seat_label(actor),
                seat_label(p.owner),
                p.action
            ),
            None => format!("{}> ", seat_label(actor)),
        }
    }

    fn print_state(&self, actor: PlayerId, out: &mut dyn Write) -> Result<(), CliError> {
        writeln!(out)?;
        writeln!(
            out,
            "Turn {} | deck {} | {} to move",
            self.eng.turn_count() + 1,
            self.eng.deck_remaining(),
            seat_label(actor)
        )?;
        for p in self.eng.players() {
            writeln!(out, "{}", format_table(p))?;
        }
        let hand = self.eng.players()[actor].hand();
        writeln!(out, "Your hand: {}", format_cards(hand))?;
        Ok(())
    }

    /// Prints moves applied since the last call. The outside caller's moves show at
    /// once; the computer's follow after the pacing delay.
    fn reveal_new_moves(&mut self, out: &mut dyn Write) -> Result<(), CliError> {
        let fresh = &self.eng.history()[self.shown..];
        self.shown = self.eng.history().len();
        let split = fresh.iter().position(|r| r.by_ai).unwrap_or(fresh.len());
        for rec in &fresh[..split] {
            writeln!(out, "{}", format_record(rec))?;
        }
        let ai_lines: Vec<String> = fresh[split..].iter().map(format_record).collect();
        if ai_lines.is_empty() {
            return Ok(());
        }

        let mut reveal = self.pacer.schedule(ai_lines);
        if self.eng.is_game_over() {
            // the game is decided; show the final move without the pause
            reveal.cancel();
        }
        for line in self.pacer.wait(reveal).unwrap_or_default() {
            writeln!(out, "AI: {}", line)?;
        }
        Ok(())
    }

    fn print_result(&self, out: &mut dyn Write) -> Result<(), CliError> {
        writeln!(out)?;
        for p in self.eng.players() {
            writeln!(out, "{}", format_table(p))?;
        }
        match self.eng.winner() {
            Some(w) => writeln!(
                out,
                "Game over: {} wins after {} turns",
                seat_label(w),
                self.eng.turn_count()
            )?,
            None => writeln!(out, "Game over after {} turns", self.eng.turn_count())?,
        }
        Ok(())
    }
}
