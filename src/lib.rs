//! # ludo-engine
//!
//! A rules engine for Ludo (2-4 players), built to sit behind a thin
//! request/response layer.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: Every operation is a synchronous function over an
//!    explicitly passed [`core::GameState`]. The engine owns no storage;
//!    callers persist state between calls via [`core::GameSnapshot`] and must
//!    serialize access per session.
//!
//! 2. **Validate, then mutate**: Every precondition is checked before any
//!    state is touched, so a [`rules::RulesError`] never leaves a
//!    half-applied move.
//!
//! 3. **Injected randomness**: The die is a caller-supplied
//!    [`core::DiceRng`] with a serializable stream position, so whole games
//!    replay deterministically from a seed.
//!
//! ## Modules
//!
//! - `board`: Static geometry - ring, start squares, safe squares
//! - `core`: Colors, tokens, game state, dice, snapshots
//! - `rules`: Legality, projection, move application, turn flow
//!
//! ## Example
//!
//! ```
//! use ludo_engine::core::DiceRng;
//! use ludo_engine::rules;
//!
//! let mut state = rules::new_game(2);
//! let mut dice = DiceRng::new(42);
//!
//! let roll = rules::roll(&mut state, &mut dice).unwrap();
//! let moves = rules::legal_moves(&state, roll);
//!
//! if let Some(&(color, token_index)) = moves.first() {
//!     let outcome = rules::apply_move(&mut state, color, token_index, roll).unwrap();
//!     if !outcome.extra_turn {
//!         rules::advance_turn(&mut state);
//!     }
//! } else {
//!     rules::pass_turn(&mut state).unwrap();
//! }
//! ```

pub mod board;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Color, DiceRng, DiceRngState, GameSnapshot, GameState, PositionKind, SnapshotError, Token,
    TokenPosition, TokenRecord,
};

pub use crate::rules::{Destination, MoveList, MoveOutcome, Projection, RulesError};
