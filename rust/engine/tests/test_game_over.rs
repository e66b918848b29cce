mod common;

use common::{action, flower, small_flowers, started};
use petal_engine::cards::{ActionKind, Card, CardId};
use petal_engine::engine::Engine;
use petal_engine::errors::{GameError, Illegal};
use petal_engine::game::Phase;
use petal_engine::logger::{GameRecord, RecordWriter};

/// Four five-point flowers and a one-pointer.
fn four_fives() -> Vec<Card> {
    let mut hand: Vec<Card> = (0..4).map(|i| flower(i, 5)).collect();
    hand.push(flower(4, 1));
    hand
}

/// Player 0 plants four five-point flowers while player 1 plants ones.
fn play_to_twenty() -> Engine {
    let mut eng = started(0, &four_fives(), &small_flowers(10), &[]);
    for i in 0..4 {
        eng.play_card(CardId(i), 0).unwrap();
        if i < 3 {
            eng.play_card(CardId(10 + i), 1).unwrap();
        }
    }
    eng
}

#[test]
fn reaching_twenty_ends_the_game() {
    let mut eng = play_to_twenty();
    assert_eq!(eng.players()[0].score(), 20);
    assert_eq!(eng.phase(), Phase::GameOver);
    assert!(eng.is_game_over());
    assert_eq!(eng.winner(), Some(0));
    assert_eq!(eng.turn_count(), 7);
}

#[test]
fn nothing_is_accepted_after_game_over() {
    let mut eng = play_to_twenty();
    assert_eq!(
        eng.play_card(CardId(13), 1),
        Err(GameError::IllegalMove(Illegal::WrongPhase("GameOver")))
    );
    assert_eq!(
        eng.draw(0),
        Err(GameError::IllegalMove(Illegal::WrongPhase("GameOver")))
    );
    assert_eq!(eng.start_game(), Err(GameError::IllegalMove(Illegal::AlreadyStarted)));
    assert!(eng.legal_moves(0).is_empty());
    assert!(eng.legal_moves(1).is_empty());
    assert_eq!(eng.phase(), Phase::GameOver);
}

#[test]
fn below_twenty_is_not_over() {
    let mut eng = started(0, &four_fives(), &small_flowers(10), &[]);
    for i in 0..3 {
        eng.play_card(CardId(i), 0).unwrap();
        eng.play_card(CardId(10 + i), 1).unwrap();
    }
    assert_eq!(eng.players()[0].score(), 15);
    assert!(!eng.is_game_over());
    assert_eq!(eng.winner(), None);
}

#[test]
fn fertilize_can_finish_the_game() {
    let mut eng = started(
        0,
        &[flower(0, 10), flower(1, 6), action(23, ActionKind::Fertilize)],
        &small_flowers(10)[..3],
        &[],
    );
    eng.play_card(CardId(0), 0).unwrap();
    eng.play_card(CardId(10), 1).unwrap();
    eng.play_card(CardId(1), 0).unwrap();
    eng.play_card(CardId(11), 1).unwrap();
    eng.play_card(CardId(23), 0).unwrap();
    assert!(!eng.is_game_over());

    eng.resolve_selection(CardId(0), 0).unwrap();
    assert_eq!(eng.players()[0].score(), 26);
    assert_eq!(eng.phase(), Phase::GameOver);
    assert_eq!(eng.winner(), Some(0));
}

#[test]
fn reset_leaves_game_over() {
    let mut eng = play_to_twenty();
    eng.reset();
    assert_eq!(eng.phase(), Phase::Idle);
    assert_eq!(eng.winner(), None);
    eng.start_game().unwrap();
    assert_eq!(eng.phase(), Phase::PlayerTurn);
    assert_eq!(eng.players()[0].score(), 0);
}

#[test]
fn game_record_summarizes_the_game() {
    let eng = play_to_twenty();
    let record = eng.game_record();
    assert_eq!(record.seed, Some(1));
    assert_eq!(record.first_player, 0);
    assert_eq!(record.turns, 7);
    assert_eq!(record.scores, [20, 3]);
    assert_eq!(record.winner, Some(0));
    assert_eq!(record.moves.len(), 7);
    assert!(record.moves.iter().all(|m| !m.by_ai && !m.forfeit));

    let mut writer = RecordWriter::new(Vec::new());
    writer.write(&record).unwrap();
    let out = String::from_utf8(writer.into_inner()).unwrap();
    let parsed: GameRecord = serde_json::from_str(out.trim_end()).unwrap();
    assert_eq!(parsed.moves, record.moves);
    assert!(parsed.ts.is_some());
}
