//! # petal-engine: Flower Card Game Rules Engine
//!
//! A deterministic rules engine for a two-player flower card game. Players draw
//! from a shared deck, plant flowers on their own table, or play one of four
//! action cards (Prune, Pest, Water, Fertilize) that asks for a target before the
//! turn moves on. The first player to reach 20 points on their table wins.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card identity, flower species, action kinds and the standard deck
//! - [`deck`] - Draw pile with seeded ChaCha20 shuffling
//! - [`player`] - Hands, tables, scores and the moves a player can submit
//! - [`game`] - Phase machine states and the turn tracker
//! - [`rules`] - Legality checks for draws, plays and discards
//! - [`engine`] - The game session: every public operation and the AI hook
//! - [`strategy`] - Trait the engine calls for computer-controlled seats
//! - [`logger`] - Move history and JSONL game records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use petal_engine::engine::{Engine, EngineConfig, FirstPlayer, Outcome};
//! use petal_engine::player::PlayerMove;
//!
//! let mut engine = Engine::new(EngineConfig {
//!     seed: Some(42),
//!     first_player: FirstPlayer::Seat(0),
//! });
//! engine.start_game().expect("fresh engine starts");
//!
//! // Every legal move can be submitted through `apply`
//! let moves = engine.legal_moves(0);
//! assert!(!moves.is_empty());
//! match engine.apply(0, moves[0]) {
//!     Ok(Outcome::TurnAdvanced) => assert_eq!(engine.current_player(), 1),
//!     Ok(Outcome::SelectionPending(pending)) => assert_eq!(pending.actor, 0),
//!     Err(e) => panic!("legal move rejected: {}", e),
//! }
//! ```
//!
//! ## Deterministic Gameplay
//!
//! The same seed always produces the same shuffle and the same starting player:
//!
//! ```rust
//! use petal_engine::engine::{Engine, EngineConfig};
//!
//! let mut a = Engine::new(EngineConfig { seed: Some(5), ..Default::default() });
//! let mut b = Engine::new(EngineConfig { seed: Some(5), ..Default::default() });
//! a.start_game().unwrap();
//! b.start_game().unwrap();
//! assert_eq!(a.players()[0].hand(), b.players()[0].hand());
//! assert_eq!(a.current_player(), b.current_player());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
pub mod strategy;
