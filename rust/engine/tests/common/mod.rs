#![allow(dead_code)]

use petal_engine::cards::{ActionKind, Card, CardId, Species};
use petal_engine::engine::{Engine, EngineConfig, FirstPlayer};
use petal_engine::player::PlayerId;

pub fn flower(id: u16, points: u32) -> Card {
    Card::flower(CardId(id), Species::Daisy, points)
}

pub fn action(id: u16, kind: ActionKind) -> Card {
    Card::action(CardId(id), kind)
}

/// Deck order that deals `hand0` and `hand1` round robin, then leaves `rest` to draw.
pub fn deal_order(hand0: &[Card], hand1: &[Card], rest: &[Card]) -> Vec<Card> {
    let mut cards = Vec::new();
    for i in 0..hand0.len().max(hand1.len()) {
        cards.extend(hand0.get(i));
        cards.extend(hand1.get(i));
    }
    cards.extend_from_slice(rest);
    cards
}

pub fn stacked(first: PlayerId, hand0: &[Card], hand1: &[Card], rest: &[Card]) -> Engine {
    let config = EngineConfig {
        seed: Some(1),
        first_player: FirstPlayer::Seat(first),
    };
    Engine::with_stacked_deck(config, deal_order(hand0, hand1, rest))
}

pub fn started(first: PlayerId, hand0: &[Card], hand1: &[Card], rest: &[Card]) -> Engine {
    let mut eng = stacked(first, hand0, hand1, rest);
    eng.start_game().expect("stacked game starts");
    eng
}

/// Five one-point flowers with ids starting at `base`.
pub fn small_flowers(base: u16) -> Vec<Card> {
    (0..5).map(|i| flower(base + i, 1)).collect()
}

pub fn ids(cards: &[Card]) -> Vec<CardId> {
    cards.iter().map(|c| c.id).collect()
}
