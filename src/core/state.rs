//! Game state: the aggregate the rules engine transitions.
//!
//! `GameState` owns everything that changes over a game: whose turn it is,
//! the recorded roll, every token's position, and the winner once there is
//! one. It carries no rules beyond occupancy queries - legality and mutation
//! live in [`crate::rules`].
//!
//! The engine never stores states between calls; callers hold them (usually
//! via [`crate::core::GameSnapshot`]) and must serialize access per session.

use crate::board;
use crate::core::{Color, Token, TokenPosition};

/// Full in-memory state of one Ludo game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    player_count: usize,
    active_colors: Vec<Color>,
    current_player_index: usize,
    last_roll: Option<u8>,
    has_rolled: bool,
    tokens: Vec<Token>,
    winner_index: Option<usize>,
}

impl GameState {
    /// Create a fresh game: all tokens in the yard, first player to act.
    ///
    /// `player_count` is clamped to 2..=4.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        let player_count = player_count.clamp(2, 4);
        let active_colors = Color::active_set(player_count).to_vec();

        let mut tokens = Vec::with_capacity(player_count * board::TOKENS_PER_COLOR as usize);
        for &color in &active_colors {
            for token_index in 0..board::TOKENS_PER_COLOR {
                tokens.push(Token::new(color, token_index));
            }
        }

        Self {
            player_count,
            active_colors,
            current_player_index: 0,
            last_roll: None,
            has_rolled: false,
            tokens,
            winner_index: None,
        }
    }

    /// Rebuild a state from already-validated parts. Used by snapshot decoding.
    pub(crate) fn from_parts(
        player_count: usize,
        active_colors: Vec<Color>,
        current_player_index: usize,
        last_roll: Option<u8>,
        has_rolled: bool,
        tokens: Vec<Token>,
        winner_index: Option<usize>,
    ) -> Self {
        Self {
            player_count,
            active_colors,
            current_player_index,
            last_roll,
            has_rolled,
            tokens,
            winner_index,
        }
    }

    // === Accessors ===

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Seated colors in turn order.
    #[must_use]
    pub fn active_colors(&self) -> &[Color] {
        &self.active_colors
    }

    /// Index of the player to act, 0-based into [`Self::active_colors`].
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// Color of the player to act.
    #[must_use]
    pub fn current_color(&self) -> Color {
        self.active_colors[self.current_player_index]
    }

    /// The recorded roll awaiting a move, if any.
    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    /// Whether the current player has rolled this turn.
    #[must_use]
    pub fn has_rolled(&self) -> bool {
        self.has_rolled
    }

    /// Winning player's index into [`Self::active_colors`], once the game ends.
    #[must_use]
    pub fn winner_index(&self) -> Option<usize> {
        self.winner_index
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner_index.is_some()
    }

    /// All tokens, grouped by color in seating order, token-index ascending.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Look up one token by its (color, index) slot.
    #[must_use]
    pub fn token(&self, color: Color, token_index: u8) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|t| t.color == color && t.token_index == token_index)
    }

    /// A color's tokens, token-index ascending.
    pub fn tokens_of(&self, color: Color) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |t| t.color == color)
    }

    /// Tokens standing on a ring square.
    pub fn tokens_at_offset(&self, offset: u8) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .filter(move |t| t.position.at_offset(offset))
    }

    // === Occupancy rules ===

    /// Whether a ring square is blocked against `moving_color`.
    ///
    /// A block is two or more tokens of one uniform color, other than the
    /// mover's own. Blocks hold regardless of safe squares.
    #[must_use]
    pub fn is_blocked(&self, offset: u8, moving_color: Color) -> bool {
        let mut occupants = self.tokens_at_offset(offset);
        let Some(first) = occupants.next() else {
            return false;
        };
        let mut count = 1;
        for t in occupants {
            if t.color != first.color {
                return false;
            }
            count += 1;
        }
        count >= 2 && first.color != moving_color
    }

    /// Whether landing on a ring square captures: exactly one opposing token
    /// on a non-safe square.
    #[must_use]
    pub fn can_capture(&self, offset: u8, moving_color: Color) -> bool {
        if board::is_safe(offset) {
            return false;
        }
        let mut occupants = self.tokens_at_offset(offset);
        match (occupants.next(), occupants.next()) {
            (Some(t), None) => t.color != moving_color,
            _ => false,
        }
    }

    // === Mutation (rules engine only) ===

    pub(crate) fn set_token_position(
        &mut self,
        color: Color,
        token_index: u8,
        position: TokenPosition,
    ) {
        if let Some(t) = self
            .tokens
            .iter_mut()
            .find(|t| t.color == color && t.token_index == token_index)
        {
            t.position = position;
        }
    }

    pub(crate) fn record_roll(&mut self, value: u8) {
        self.last_roll = Some(value);
        self.has_rolled = true;
    }

    pub(crate) fn clear_roll(&mut self) {
        self.last_roll = None;
        self.has_rolled = false;
    }

    pub(crate) fn cycle_player(&mut self) {
        self.current_player_index = (self.current_player_index + 1) % self.active_colors.len();
    }

    pub(crate) fn set_winner(&mut self, index: usize) {
        // Write-once: the first winner stands.
        if self.winner_index.is_none() {
            self.winner_index = Some(index);
        }
    }
}
