//! Core domain types: colors, tokens, game state, dice, snapshots.
//!
//! These are the values the rules engine operates on. Rule logic itself
//! lives in [`crate::rules`]; board geometry in [`crate::board`].

pub mod color;
pub mod dice;
pub mod snapshot;
pub mod state;
pub mod token;

pub use color::Color;
pub use dice::{DiceRng, DiceRngState};
pub use snapshot::{GameSnapshot, PositionKind, SnapshotError, TokenRecord};
pub use state::GameState;
pub use token::{Token, TokenPosition};
