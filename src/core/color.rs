//! Player colors and seating.
//!
//! The four Ludo colors double as player identities: a game seats one color
//! per player, in clockwise turn order. Two-player games use the diagonal
//! red + yellow pairing so the players start on opposite sides of the board.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A player color, in clockwise board order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
}

impl Color {
    /// All colors in clockwise order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

    /// The colors seated for a game with `player_count` players.
    ///
    /// - 2 players: red + yellow (diagonally opposite starts)
    /// - 3 players: red + blue + yellow
    /// - 4 players: all colors
    ///
    /// Counts outside 2..=4 are the caller's responsibility; anything else
    /// falls back to the full set.
    #[must_use]
    pub fn active_set(player_count: usize) -> &'static [Color] {
        match player_count {
            2 => &[Color::Red, Color::Yellow],
            3 => &[Color::Red, Color::Blue, Color::Yellow],
            _ => &Color::ALL,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
        };
        write!(f, "{name}")
    }
}
