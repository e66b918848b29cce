use std::sync::Arc;
use std::thread;

use petal_ai::Strategy;
use petal_ai::create_ai;
use petal_ai::greedy::GreedyAI;
use petal_engine::cards::{ActionKind, Card, CardId, Species};
use petal_engine::engine::{Engine, EngineConfig, FirstPlayer};
use petal_engine::game::Phase;
use petal_engine::player::PlayerMove;

const AI: usize = 1;
const HUMAN: usize = 0;

fn flower(id: u16, points: u32) -> Card {
    Card::flower(CardId(id), Species::Tulip, points)
}

fn action(id: u16, kind: ActionKind) -> Card {
    Card::action(CardId(id), kind)
}

/// Human in seat 0, greedy AI in seat 1, deck stacked so the hands deal as given.
fn vs_ai(first: usize, human: &[Card], ai: &[Card], rest: &[Card]) -> Engine {
    let mut cards = Vec::new();
    for (h, a) in human.iter().zip(ai) {
        cards.push(*h);
        cards.push(*a);
    }
    cards.extend_from_slice(rest);
    let config = EngineConfig {
        seed: Some(5),
        first_player: FirstPlayer::Seat(first),
    };
    let mut eng = Engine::with_stacked_deck(config, cards)
        .with_ai(AI, Arc::new(GreedyAI::new()))
        .unwrap();
    eng.start_game().unwrap();
    eng
}

fn ones(base: u16) -> Vec<Card> {
    (0..5).map(|i| flower(base + i, 1)).collect()
}

fn points(eng: &Engine, seat: usize) -> Vec<u32> {
    eng.players()[seat].table().iter().map(|c| c.points()).collect()
}

#[test]
fn ai_opening_plants_its_best_flower() {
    let ai_hand = [
        flower(10, 2),
        flower(11, 4),
        flower(12, 3),
        flower(13, 4),
        action(20, ActionKind::Pest),
    ];
    let eng = vs_ai(AI, &ones(0), &ai_hand, &[]);

    assert_eq!(eng.current_player(), HUMAN);
    assert_eq!(eng.turn_count(), 1);
    assert_eq!(eng.players()[AI].table()[0].id, CardId(11));
    let rec = &eng.history()[0];
    assert!(rec.by_ai);
    assert_eq!(rec.action, PlayerMove::Play { card: CardId(11) });
}

#[test]
fn ai_pests_the_highest_human_flower() {
    let human = [
        flower(0, 3),
        flower(1, 5),
        flower(2, 1),
        flower(3, 1),
        flower(4, 1),
    ];
    let ai_hand = [
        flower(10, 2),
        action(21, ActionKind::Pest),
        action(22, ActionKind::Water),
        action(23, ActionKind::Water),
        action(20, ActionKind::Prune),
    ];
    let mut eng = vs_ai(HUMAN, &human, &ai_hand, &[flower(50, 1)]);

    eng.play_card(CardId(0), HUMAN).unwrap();
    assert_eq!(points(&eng, AI), vec![2]);
    eng.play_card(CardId(1), HUMAN).unwrap();

    assert_eq!(points(&eng, HUMAN), vec![3]);
    assert!(eng.players()[AI].hand_card(CardId(21)).is_none());
    assert_eq!(eng.phase(), Phase::PlayerTurn);
    assert_eq!(eng.current_player(), HUMAN);
    assert_eq!(eng.turn_count(), 4);

    let resolve = eng.history().last().unwrap();
    assert_eq!(resolve.action, PlayerMove::Resolve { card: CardId(1) });
    assert_eq!(resolve.player_id, HUMAN);
    assert!(resolve.by_ai);
}

#[test]
fn ai_fertilizes_its_best_flower_once_out_of_flowers() {
    let ai_hand = [
        flower(10, 2),
        flower(11, 4),
        action(23, ActionKind::Fertilize),
        action(22, ActionKind::Water),
        action(20, ActionKind::Prune),
    ];
    let mut eng = vs_ai(HUMAN, &ones(0), &ai_hand, &[]);

    for i in 0..3 {
        eng.play_card(CardId(i), HUMAN).unwrap();
    }
    assert_eq!(points(&eng, AI), vec![8, 2]);
    assert_eq!(eng.players()[AI].score(), 10);
    assert_eq!(points(&eng, HUMAN), vec![1, 1, 1]);
}

#[test]
fn ai_draws_when_nothing_else_applies() {
    let ai_hand = [
        flower(10, 2),
        action(20, ActionKind::Prune),
        action(24, ActionKind::Prune),
        action(22, ActionKind::Water),
        action(25, ActionKind::Water),
    ];
    let mut eng = vs_ai(HUMAN, &ones(0), &ai_hand, &[flower(50, 3)]);

    eng.play_card(CardId(0), HUMAN).unwrap();
    eng.play_card(CardId(1), HUMAN).unwrap();

    assert!(eng.players()[AI].hand_card(CardId(50)).is_some());
    assert_eq!(eng.deck_remaining(), 0);
    assert_eq!(eng.history().last().unwrap().action, PlayerMove::Draw);
    assert_eq!(eng.current_player(), HUMAN);
}

#[test]
fn stuck_ai_forfeits_instead_of_stalling() {
    let ai_hand = [
        action(20, ActionKind::Prune),
        action(24, ActionKind::Prune),
        action(22, ActionKind::Water),
        action(25, ActionKind::Water),
        action(26, ActionKind::Water),
    ];
    let mut eng = vs_ai(HUMAN, &ones(0), &ai_hand, &[]);
    eng.play_card(CardId(0), HUMAN).unwrap();

    assert_eq!(eng.current_player(), HUMAN);
    assert_eq!(eng.turn_count(), 2);
    assert_eq!(eng.players()[AI].hand().len(), 5);
    let last = eng.history().last().unwrap();
    assert!(last.forfeit && last.by_ai);
    assert_eq!(last.player_id, AI);
    assert_eq!(last.action, PlayerMove::Pass);
}

#[test]
fn greedy_only_suggests_legal_moves() {
    let ai = GreedyAI::new();
    for seed in 0..20 {
        let mut eng = Engine::new(EngineConfig {
            seed: Some(seed),
            first_player: FirstPlayer::Seat(0),
        });
        eng.start_game().unwrap();
        for _ in 0..200 {
            if eng.is_game_over() {
                break;
            }
            let seat = eng.current_player();
            let mv = ai.choose_move(&eng, seat);
            if mv != PlayerMove::Pass {
                assert!(eng.legal_moves(seat).contains(&mv), "seed {seed}: {mv:?}");
            }
            eng.autoplay(seat, &ai).unwrap();
        }
    }
}

/// AI against AI: seat 1 through the engine hook, seat 0 through `autoplay`.
fn self_play(seed: u64) -> (u32, [u32; 2], Option<usize>) {
    let ai = create_ai("greedy").unwrap();
    let mut eng = Engine::new(EngineConfig {
        seed: Some(seed),
        ..Default::default()
    })
    .with_ai(AI, Arc::clone(&ai))
    .unwrap();
    eng.start_game().unwrap();
    while !eng.is_game_over() && eng.turn_count() < 300 {
        eng.autoplay(HUMAN, ai.as_ref()).unwrap();
    }
    let scores = [eng.players()[0].score(), eng.players()[1].score()];
    (eng.turn_count(), scores, eng.winner())
}

#[test]
fn sessions_run_independently_across_threads() {
    let seeds: Vec<u64> = (100..108).collect();
    let expected: Vec<_> = seeds.iter().map(|&s| self_play(s)).collect();

    let handles: Vec<_> = seeds
        .iter()
        .map(|&s| thread::spawn(move || self_play(s)))
        .collect();
    let actual: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(actual, expected);
}
