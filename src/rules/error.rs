//! Rule violations.
//!
//! Every rejection is a precondition violation detected before any mutation;
//! the game state is untouched whenever one of these is returned. There is
//! no retryable or fatal class. Errors serialize so an API layer can render
//! them straight to clients.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Color;

/// Errors produced by the rules engine.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum RulesError {
    /// The game already has a winner; no further rolls or moves.
    #[error("game is already finished")]
    GameFinished,

    /// Rolled already and a legal move is still outstanding.
    #[error("already rolled a {roll}; move before rolling again")]
    AlreadyRolled { roll: u8 },

    /// Tried to move or pass without rolling first.
    #[error("roll the die first")]
    RollRequired,

    /// The supplied roll does not match the recorded one.
    #[error("move used roll {supplied}, but {recorded} was rolled")]
    RollMismatch { supplied: u8, recorded: u8 },

    /// A recorded roll must be a die face.
    #[error("roll must be 1-6, got {value}")]
    RollOutOfRange { value: u8 },

    /// Tried to pass while at least one legal move exists.
    #[error("cannot pass while legal moves remain")]
    MovesAvailable,

    /// The acting color is not the current player.
    #[error("it is not {color}'s turn")]
    OutOfTurn { color: Color },

    /// No such token for the acting color.
    #[error("{color} has no token #{token_index}")]
    UnknownToken { color: Color, token_index: u8 },

    /// The token cannot move with this roll.
    #[error("{color} token #{token_index} cannot move with a roll of {roll}")]
    InvalidMove {
        color: Color,
        token_index: u8,
        roll: u8,
    },

    /// A caller-declared destination disagrees with the computed one.
    #[error("declared destination does not match the computed destination")]
    DestinationMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RulesError::AlreadyRolled { roll: 4 }.to_string(),
            "already rolled a 4; move before rolling again"
        );
        assert_eq!(
            RulesError::OutOfTurn { color: Color::Blue }.to_string(),
            "it is not blue's turn"
        );
        assert_eq!(
            RulesError::InvalidMove {
                color: Color::Red,
                token_index: 2,
                roll: 5
            }
            .to_string(),
            "red token #2 cannot move with a roll of 5"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let err = RulesError::RollMismatch {
            supplied: 3,
            recorded: 6,
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: RulesError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
