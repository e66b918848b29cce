//! Parsing of interactive player commands.
//!
//! Input is case-insensitive and surrounding whitespace is ignored. Card
//! arguments are the numeric ids shown next to each card, with or without the
//! leading `#`.

use petal_engine::cards::CardId;
use petal_engine::player::PlayerMove;

/// Outcome of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A move to submit to the engine
    Move(PlayerMove),
    /// List the legal moves
    ShowMoves,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a move or a session command.
///
/// Accepted forms:
/// - `draw` / `d`
/// - `play <id>` / `p <id>`
/// - `discard <id>`
/// - `pick <id>`: the target of a pending action card
/// - `pass`
/// - `moves` / `m`
/// - `q` / `quit`
///
/// # Example
///
/// ```rust
/// # use petal_cli::validation::{parse_command, ParseResult};
/// use petal_engine::cards::CardId;
/// use petal_engine::player::PlayerMove;
///
/// assert_eq!(parse_command("draw"), ParseResult::Move(PlayerMove::Draw));
/// assert_eq!(
///     parse_command("play #12"),
///     ParseResult::Move(PlayerMove::Play { card: CardId(12) })
/// );
/// assert_eq!(parse_command("q"), ParseResult::Quit);
///
/// match parse_command("plant 3") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "m" | "moves" => ParseResult::ShowMoves,
        "d" | "draw" => ParseResult::Move(PlayerMove::Draw),
        "pass" => ParseResult::Move(PlayerMove::Pass),
        "p" | "play" => with_card(&parts, "play", |card| PlayerMove::Play { card }),
        "discard" => with_card(&parts, "discard", |card| PlayerMove::Discard { card }),
        "pick" => with_card(&parts, "pick", |card| PlayerMove::Resolve { card }),
        _ => ParseResult::Invalid(format!(
            "Unrecognized command: {}. Try draw, play <id>, discard <id>, pick <id>, pass, moves or q",
            verb
        )),
    }
}

fn with_card(parts: &[&str], verb: &str, make: impl Fn(CardId) -> PlayerMove) -> ParseResult {
    let Some(arg) = parts.get(1) else {
        return ParseResult::Invalid(format!(
            "{} requires a card id (e.g., '{} 12')",
            verb, verb
        ));
    };
    match parse_card_id(arg) {
        Some(id) => ParseResult::Move(make(id)),
        None => ParseResult::Invalid(format!("Invalid card id: {}", arg)),
    }
}

pub fn parse_card_id(s: &str) -> Option<CardId> {
    s.trim_start_matches('#').parse::<u16>().ok().map(CardId)
}
