//! Card, table and move formatters for terminal display.
//!
//! Pure functions; nothing here touches engine state. Flowers are marked with
//! a `✿` glyph where the terminal is likely to render it and `*` otherwise.
//!
//! ## Example
//!
//! ```rust
//! use petal_engine::cards::{Card, CardId, Species};
//! use petal_cli::formatters::{format_card, format_cards};
//!
//! let rose = Card::flower(CardId(17), Species::Rose, 5);
//! assert!(format_card(&rose).ends_with("Rose 5 [#17]"));
//! assert_eq!(format_cards(&[]), "(empty)");
//! ```

use petal_engine::cards::{Card, CardKind};
use petal_engine::logger::MoveRecord;
use petal_engine::player::{Player, PlayerId, PlayerMove};

/// Check if the terminal is likely to render the flower glyph.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere assumes Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

fn flower_mark() -> &'static str {
    if supports_unicode() { "✿" } else { "*" }
}

pub fn format_card(card: &Card) -> String {
    match card.kind {
        CardKind::Flower { species, points } => {
            format!("{} {:?} {} [{}]", flower_mark(), species, points, card.id)
        }
        CardKind::Action(kind) => format!("{:?} [{}]", kind, card.id),
    }
}

pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(", ")
}

/// Player label as shown to the user: seats are numbered from 1.
pub fn seat_label(id: PlayerId) -> String {
    format!("P{}", id + 1)
}

pub fn format_move(mv: &PlayerMove) -> String {
    match mv {
        PlayerMove::Draw => "draw".to_string(),
        PlayerMove::Play { card } => format!("play {}", card.0),
        PlayerMove::Discard { card } => format!("discard {}", card.0),
        PlayerMove::Resolve { card } => format!("pick {}", card.0),
        PlayerMove::Pass => "pass".to_string(),
    }
}

/// One history line, e.g. `P2 plays Pest [#23]`.
pub fn format_record(rec: &MoveRecord) -> String {
    let who = seat_label(rec.player_id);
    if rec.forfeit {
        return format!("{} forfeits the turn", who);
    }
    let card = rec.card.as_ref().map(format_card).unwrap_or_default();
    match rec.action {
        PlayerMove::Draw => format!("{} draws a card", who),
        PlayerMove::Play { .. } => format!("{} plays {}", who, card),
        PlayerMove::Discard { .. } => format!("{} discards {}", who, card),
        PlayerMove::Resolve { .. } => format!("{} targets {}", who, card),
        PlayerMove::Pass => format!("{} passes", who),
    }
}

/// Table and score summary for one player.
pub fn format_table(player: &Player) -> String {
    format!(
        "{} table ({} pts): {}",
        seat_label(player.id()),
        player.score(),
        format_cards(player.table())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_engine::cards::{ActionKind, CardId, Species};

    #[test]
    fn action_cards_have_no_glyph() {
        let pest = Card::action(CardId(23), ActionKind::Pest);
        assert_eq!(format_card(&pest), "Pest [#23]");
    }

    #[test]
    fn moves_echo_the_input_syntax() {
        assert_eq!(format_move(&PlayerMove::Resolve { card: CardId(4) }), "pick 4");
        assert_eq!(format_move(&PlayerMove::Draw), "draw");
    }

    #[test]
    fn records_name_the_seat_from_one() {
        let rec = MoveRecord {
            turn: 3,
            player_id: 1,
            action: PlayerMove::Play { card: CardId(2) },
            card: Some(Card::flower(CardId(2), Species::Daisy, 2)),
            by_ai: true,
            forfeit: false,
        };
        let line = format_record(&rec);
        assert!(line.starts_with("P2 plays"));
        assert!(line.contains("Daisy 2 [#2]"));
    }

    #[test]
    fn draws_do_not_reveal_the_card() {
        let rec = MoveRecord {
            turn: 0,
            player_id: 0,
            action: PlayerMove::Draw,
            card: Some(Card::flower(CardId(9), Species::Tulip, 3)),
            by_ai: false,
            forfeit: false,
        };
        assert_eq!(format_record(&rec), "P1 draws a card");
    }
}
