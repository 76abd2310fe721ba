//! Move legality, move application, and turn flow.

pub mod engine;
pub mod error;

pub use engine::{
    advance_turn, apply_move, legal_moves, move_destination, new_game, pass_turn,
    projected_position, record_roll, roll, verify_destination, Destination, MoveList, MoveOutcome,
    Projection,
};
pub use error::RulesError;
