//! Plain serializable snapshots of game state.
//!
//! Sessions hold state between calls in a flat, structured form: primitive
//! fields plus one record per token carrying a position-kind tag and the
//! optional offset / home index. `GameSnapshot` is that form, and the only
//! way state crosses a process boundary.
//!
//! Snapshots come back from storage or over the wire, so decoding validates
//! everything: field ranges, kind/field consistency, and that the token set
//! is exactly one token per (color, index) slot for every seated color.
//! Round-trips are lossless - `snapshot` then `from_snapshot` reproduces an
//! identical state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board;
use crate::core::{Color, GameState, Token, TokenPosition};

/// Position tag in a token record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionKind {
    Yard,
    Path,
    Home,
}

/// One token in wire form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub color: Color,
    pub token_index: u8,
    pub kind: PositionKind,
    /// Ring offset; set iff `kind` is `Path`.
    pub path_offset: Option<u8>,
    /// Home-column slot; set iff `kind` is `Home`.
    pub home_index: Option<u8>,
}

/// Complete game state in wire form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub player_count: usize,
    pub active_colors: Vec<Color>,
    pub current_player_index: usize,
    pub last_roll: Option<u8>,
    pub has_rolled: bool,
    pub tokens: Vec<TokenRecord>,
    pub winner_index: Option<usize>,
}

/// Why a snapshot was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotError {
    #[error("player count must be 2-4, got {count}")]
    PlayerCount { count: usize },
    #[error("active colors do not match the player count")]
    ActiveColorMismatch,
    #[error("current player index {index} out of range")]
    CurrentPlayerOutOfRange { index: usize },
    #[error("winner index {index} out of range")]
    WinnerOutOfRange { index: usize },
    #[error("last roll must be 1-6, got {value}")]
    RollOutOfRange { value: u8 },
    #[error("token {color} #{token_index}: position fields do not match kind")]
    TokenFields { color: Color, token_index: u8 },
    #[error("token {color} #{token_index}: ring offset {offset} out of range")]
    OffsetOutOfRange {
        color: Color,
        token_index: u8,
        offset: u8,
    },
    #[error("token {color} #{token_index}: home index {index} out of range")]
    HomeIndexOutOfRange {
        color: Color,
        token_index: u8,
        index: u8,
    },
    #[error("tokens must cover each (color, index) slot exactly once")]
    TokenSlots,
    #[error("malformed snapshot bytes: {0}")]
    Codec(String),
}

impl GameSnapshot {
    /// Encode to compact bytes.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::Codec(e.to_string()))
    }

    /// Decode from compact bytes. Structural decoding only; call
    /// [`GameState::from_snapshot`] for semantic validation.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::Codec(e.to_string()))
    }
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        let (kind, path_offset, home_index) = match token.position {
            TokenPosition::Yard => (PositionKind::Yard, None, None),
            TokenPosition::Path { offset } => (PositionKind::Path, Some(offset), None),
            TokenPosition::Home { index } => (PositionKind::Home, None, Some(index)),
        };
        Self {
            color: token.color,
            token_index: token.token_index,
            kind,
            path_offset,
            home_index,
        }
    }
}

impl TokenRecord {
    fn to_token(&self) -> Result<Token, SnapshotError> {
        let position = match (self.kind, self.path_offset, self.home_index) {
            (PositionKind::Yard, None, None) => TokenPosition::Yard,
            (PositionKind::Path, Some(offset), None) => {
                if offset >= board::RING_LEN {
                    return Err(SnapshotError::OffsetOutOfRange {
                        color: self.color,
                        token_index: self.token_index,
                        offset,
                    });
                }
                TokenPosition::Path { offset }
            }
            (PositionKind::Home, None, Some(index)) => {
                if index > board::last_home_index() {
                    return Err(SnapshotError::HomeIndexOutOfRange {
                        color: self.color,
                        token_index: self.token_index,
                        index,
                    });
                }
                TokenPosition::Home { index }
            }
            _ => {
                return Err(SnapshotError::TokenFields {
                    color: self.color,
                    token_index: self.token_index,
                })
            }
        };

        Ok(Token {
            color: self.color,
            token_index: self.token_index,
            position,
        })
    }
}

impl GameState {
    /// Capture the state in wire form.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            player_count: self.player_count(),
            active_colors: self.active_colors().to_vec(),
            current_player_index: self.current_player_index(),
            last_roll: self.last_roll(),
            has_rolled: self.has_rolled(),
            tokens: self.tokens().iter().map(TokenRecord::from).collect(),
            winner_index: self.winner_index(),
        }
    }

    /// Rebuild a state from wire form, validating every field.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, SnapshotError> {
        let count = snapshot.player_count;
        if !(2..=4).contains(&count) {
            return Err(SnapshotError::PlayerCount { count });
        }
        if snapshot.active_colors.len() != count || snapshot.active_colors != Color::active_set(count)
        {
            return Err(SnapshotError::ActiveColorMismatch);
        }
        if snapshot.current_player_index >= count {
            return Err(SnapshotError::CurrentPlayerOutOfRange {
                index: snapshot.current_player_index,
            });
        }
        if let Some(index) = snapshot.winner_index {
            if index >= count {
                return Err(SnapshotError::WinnerOutOfRange { index });
            }
        }
        if let Some(value) = snapshot.last_roll {
            if !(1..=6).contains(&value) {
                return Err(SnapshotError::RollOutOfRange { value });
            }
        }

        let mut tokens = Vec::with_capacity(snapshot.tokens.len());
        for record in &snapshot.tokens {
            tokens.push(record.to_token()?);
        }

        // Exactly one token per (color, index) slot for every seated color.
        let expected = count * board::TOKENS_PER_COLOR as usize;
        if tokens.len() != expected {
            return Err(SnapshotError::TokenSlots);
        }
        for &color in &snapshot.active_colors {
            for token_index in 0..board::TOKENS_PER_COLOR {
                let matching = tokens
                    .iter()
                    .filter(|t| t.color == color && t.token_index == token_index)
                    .count();
                if matching != 1 {
                    return Err(SnapshotError::TokenSlots);
                }
            }
        }

        Ok(GameState::from_parts(
            count,
            snapshot.active_colors.clone(),
            snapshot.current_player_index,
            snapshot.last_roll,
            snapshot.has_rolled,
            tokens,
            snapshot.winner_index,
        ))
    }
}
