//! Tokens and their positions.
//!
//! A token is always in exactly one of three places: its yard (not yet
//! entered), an absolute square on the shared ring, or a slot in its color's
//! private home column. The enum makes the mutual exclusion structural -
//! there is no way to hold both a ring offset and a home index.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Where a token currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenPosition {
    /// Not yet entered the track.
    Yard,
    /// On the shared ring at an absolute offset (0..51).
    Path { offset: u8 },
    /// In the owner's home column (0..=4).
    Home { index: u8 },
}

impl TokenPosition {
    /// Whether the token is still in the yard.
    #[must_use]
    pub fn is_yard(self) -> bool {
        matches!(self, TokenPosition::Yard)
    }

    /// Whether the token stands on the given ring square.
    #[must_use]
    pub fn at_offset(self, offset: u8) -> bool {
        matches!(self, TokenPosition::Path { offset: o } if o == offset)
    }

    /// Whether the token stands on the given home-column slot.
    #[must_use]
    pub fn at_home_index(self, index: u8) -> bool {
        matches!(self, TokenPosition::Home { index: i } if i == index)
    }
}

/// One of a color's four tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Owning color.
    pub color: Color,
    /// Index within the color, 0..=3.
    pub token_index: u8,
    /// Current position.
    pub position: TokenPosition,
}

impl Token {
    /// Create a token in the yard.
    #[must_use]
    pub fn new(color: Color, token_index: u8) -> Self {
        Self {
            color,
            token_index,
            position: TokenPosition::Yard,
        }
    }
}
