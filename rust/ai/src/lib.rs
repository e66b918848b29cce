//! # petal-ai: Computer Opponent for the Flower Card Game
//!
//! Provides the computer-controlled player. Strategies implement the engine's
//! [`Strategy`] trait; the engine asks the strategy for a move whenever its seat
//! becomes active and applies it through the same entry points a human uses.
//!
//! ## Core Components
//!
//! - [`Strategy`] - Trait defining the interface for AI decision-making
//! - [`greedy`] - Fixed-priority greedy policy
//! - [`create_ai`] - Factory function for creating strategies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use petal_ai::create_ai;
//! use petal_engine::engine::{Engine, EngineConfig, FirstPlayer};
//!
//! let ai = create_ai("greedy").expect("known strategy");
//!
//! // Seat 1 is computer-controlled and moves first
//! let mut engine = Engine::new(EngineConfig {
//!     seed: Some(42),
//!     first_player: FirstPlayer::Seat(1),
//! })
//! .with_ai(1, ai)
//! .expect("valid seat");
//! engine.start_game().expect("fresh engine starts");
//!
//! // The AI has already taken its turn
//! assert_eq!(engine.current_player(), 0);
//! assert!(engine.history().iter().all(|m| m.by_ai));
//! ```
//!
//! ## AI Types
//!
//! - `"greedy"` (alias `"baseline"`) - plant the best flower, else Pest, else Fertilize, else draw

use std::sync::Arc;

pub use petal_engine::strategy::Strategy;

pub mod greedy;

/// Names accepted by [`create_ai`].
pub const AI_TYPES: &[&str] = &["greedy", "baseline"];

/// Factory function to create a strategy by type string.
///
/// Returns `None` for unknown names so callers can report the problem.
///
/// # Example
///
/// ```rust
/// use petal_ai::create_ai;
///
/// let ai = create_ai("greedy").unwrap();
/// assert_eq!(ai.name(), "GreedyAI");
/// assert!(create_ai("minimax").is_none());
/// ```
pub fn create_ai(ai_type: &str) -> Option<Arc<dyn Strategy>> {
    match ai_type {
        "greedy" | "baseline" | "" => Some(Arc::new(greedy::GreedyAI::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_is_an_alias_for_greedy() {
        let ai = create_ai("baseline").unwrap();
        assert_eq!(ai.name(), "GreedyAI");
    }

    #[test]
    fn every_listed_type_is_constructible() {
        for name in AI_TYPES {
            assert!(create_ai(name).is_some(), "{name} should be known");
        }
    }

    #[test]
    fn strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Strategy>();
    }
}
