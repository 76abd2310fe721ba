//! The rules engine: legality, movement, capture, and turn flow.
//!
//! A game moves through three phases: setup ([`new_game`]), the active
//! roll/move/pass loop, and finished (winner set, every operation rejected).
//! All operations are synchronous, pure over the passed state, and validate
//! completely before mutating, so a returned error never leaves a
//! half-applied move.
//!
//! Step counting is done once, in [`projected_position`]: every token's
//! distance traveled is measured relative to its color's start square, and
//! both move legality and destination computation derive from that single
//! projection. The turn flow:
//!
//! 1. [`roll`] (or [`record_roll`] when replaying a known value)
//! 2. [`legal_moves`] / [`move_destination`] to pick and validate a move
//! 3. [`apply_move`]
//! 4. [`advance_turn`] unless the move granted an extra turn, or
//!    [`pass_turn`] when nothing could move

use log::{debug, info};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board;
use crate::core::{Color, DiceRng, GameState, Token, TokenPosition};
use crate::rules::RulesError;

/// Legal moves for one roll: (color, token index), token-index ascending.
pub type MoveList = SmallVec<[(Color, u8); 4]>;

/// Where a token would land, before any mutation.
///
/// This is the single source of step-counting truth; legality checks and
/// destination queries both read it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection {
    /// Yard token without a six; cannot enter the track.
    YardLocked,
    /// The ring destination holds an opposing block.
    Blocked { offset: u8 },
    /// The roll would carry the token past the last home slot.
    Overshoot,
    /// Lands on the ring.
    Path { offset: u8 },
    /// Lands in the home column.
    Home { index: u8 },
}

impl Projection {
    /// Whether the projection is a playable move.
    #[must_use]
    pub fn is_move(self) -> bool {
        matches!(self, Projection::Path { .. } | Projection::Home { .. })
    }

    /// The landing square, when the projection is a playable move.
    #[must_use]
    pub fn destination(self) -> Option<Destination> {
        match self {
            Projection::Path { offset } => Some(Destination::Path { offset }),
            Projection::Home { index } => Some(Destination::Home { index }),
            _ => None,
        }
    }
}

/// A move's landing square, as exchanged with callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Destination {
    Path { offset: u8 },
    Home { index: u8 },
}

/// Result of a successfully applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The mover rolled a six and plays again.
    pub extra_turn: bool,
    /// Color of the opposing token sent back to its yard, if any.
    pub captured: Option<Color>,
    /// Human-readable description for clients.
    pub message: String,
}

/// Build a fresh game. Player counts outside 2..=4 are clamped.
#[must_use]
pub fn new_game(player_count: usize) -> GameState {
    GameState::new(player_count)
}

/// Roll the die and record the value on the state.
///
/// Rejected once the game is finished, or when the player has already rolled
/// and still has a legal move outstanding (no re-rolling away a bad roll).
pub fn roll(state: &mut GameState, dice: &mut DiceRng) -> Result<u8, RulesError> {
    check_can_roll(state)?;
    let value = dice.roll();
    state.record_roll(value);
    debug!("{} rolled a {value}", state.current_color());
    Ok(value)
}

/// Record an externally drawn roll, for deterministic replay.
///
/// Same sequencing rules as [`roll`], plus the value must be a die face.
pub fn record_roll(state: &mut GameState, value: u8) -> Result<(), RulesError> {
    if !(1..=6).contains(&value) {
        return Err(RulesError::RollOutOfRange { value });
    }
    check_can_roll(state)?;
    state.record_roll(value);
    Ok(())
}

fn check_can_roll(state: &GameState) -> Result<(), RulesError> {
    if state.is_finished() {
        return Err(RulesError::GameFinished);
    }
    if state.has_rolled() {
        if let Some(recorded) = state.last_roll() {
            // A moveless roll may be re-rolled; the explicit way out is
            // pass_turn, but rolling again is not an abuse.
            if !legal_moves(state, recorded).is_empty() {
                return Err(RulesError::AlreadyRolled { roll: recorded });
            }
        }
    }
    Ok(())
}

/// Project a token forward by `roll` without touching the state.
///
/// - Yard tokens need a six and enter at their color's start square.
/// - Ring tokens advance by step count relative to their start square;
///   reaching 52 or more steps diverts into the home column, where the
///   landing slot must be at most the last one. A ring destination held by
///   an opposing block is unplayable.
/// - Home tokens advance within the column, exact-or-under only.
#[must_use]
pub fn projected_position(state: &GameState, token: &Token, roll: u8) -> Projection {
    let start = board::start_offset(token.color);

    match token.position {
        TokenPosition::Yard => {
            if roll == 6 {
                Projection::Path { offset: start }
            } else {
                Projection::YardLocked
            }
        }
        TokenPosition::Path { offset } => {
            // Distance already traveled since entering at the start square.
            let steps = (offset + board::RING_LEN - start) % board::RING_LEN;
            let new_steps = steps + roll;
            if new_steps >= board::RING_LEN {
                let index = new_steps - board::RING_LEN;
                if index <= board::last_home_index() {
                    Projection::Home { index }
                } else {
                    Projection::Overshoot
                }
            } else {
                let dest = (start + new_steps) % board::RING_LEN;
                if state.is_blocked(dest, token.color) {
                    Projection::Blocked { offset: dest }
                } else {
                    Projection::Path { offset: dest }
                }
            }
        }
        TokenPosition::Home { index } => {
            let next = index + roll;
            if next <= board::last_home_index() {
                Projection::Home { index: next }
            } else {
                Projection::Overshoot
            }
        }
    }
}

/// Enumerate the current player's legal moves for a roll.
///
/// Empty when the game is finished or nothing can move. Ordering is
/// token-index ascending and stable, so callers may rely on it.
#[must_use]
pub fn legal_moves(state: &GameState, roll: u8) -> MoveList {
    let mut moves = MoveList::new();
    if state.is_finished() {
        return moves;
    }

    let color = state.current_color();
    for token in state.tokens_of(color) {
        if projected_position(state, token, roll).is_move() {
            moves.push((token.color, token.token_index));
        }
    }
    moves
}

/// Where a token would land with this roll, or `None` when it cannot move.
#[must_use]
pub fn move_destination(state: &GameState, token: &Token, roll: u8) -> Option<Destination> {
    projected_position(state, token, roll).destination()
}

/// Check a caller-declared destination against the computed one.
///
/// Guards the API layer against forged requests that name a legal token but
/// a wrong target square.
pub fn verify_destination(
    state: &GameState,
    color: Color,
    token_index: u8,
    roll: u8,
    declared: Destination,
) -> Result<(), RulesError> {
    let token = state
        .token(color, token_index)
        .copied()
        .ok_or(RulesError::UnknownToken { color, token_index })?;

    let computed = move_destination(state, &token, roll).ok_or(RulesError::InvalidMove {
        color,
        token_index,
        roll,
    })?;

    if computed == declared {
        Ok(())
    } else {
        Err(RulesError::DestinationMismatch)
    }
}

/// Apply a move for (color, token index) with the recorded roll.
///
/// Validation fully precedes mutation; on error the state is unchanged.
/// Landing on a lone opposing token on a non-safe square captures it in the
/// same operation. A move that leaves all four of the mover's tokens on the
/// last home slot wins the game immediately.
///
/// Rolling a six grants an extra turn: roll state is cleared and the same
/// player stays current. After any other successful move the caller advances
/// the turn with [`advance_turn`].
pub fn apply_move(
    state: &mut GameState,
    color: Color,
    token_index: u8,
    roll: u8,
) -> Result<MoveOutcome, RulesError> {
    if state.is_finished() {
        return Err(RulesError::GameFinished);
    }
    if color != state.current_color() {
        return Err(RulesError::OutOfTurn { color });
    }
    match state.last_roll() {
        None => return Err(RulesError::RollRequired),
        Some(recorded) if recorded != roll => {
            return Err(RulesError::RollMismatch {
                supplied: roll,
                recorded,
            })
        }
        Some(_) => {}
    }

    let token = state
        .token(color, token_index)
        .copied()
        .ok_or(RulesError::UnknownToken { color, token_index })?;

    let destination =
        projected_position(state, &token, roll)
            .destination()
            .ok_or(RulesError::InvalidMove {
                color,
                token_index,
                roll,
            })?;

    let mut captured = None;
    let mut message;

    match destination {
        Destination::Path { offset } => {
            if state.can_capture(offset, color) {
                let victim = state
                    .tokens_at_offset(offset)
                    .next()
                    .map(|t| (t.color, t.token_index));
                if let Some((victim_color, victim_index)) = victim {
                    state.set_token_position(victim_color, victim_index, TokenPosition::Yard);
                    captured = Some(victim_color);
                    info!("{color} captured {victim_color} token #{victim_index} on square {offset}");
                }
            }

            state.set_token_position(color, token_index, TokenPosition::Path { offset });
            message = if token.position.is_yard() {
                String::from("Token entered the track!")
            } else {
                String::from("Moved on path.")
            };
            if captured.is_some() {
                message.push_str(" Captured!");
            }
        }
        Destination::Home { index } => {
            state.set_token_position(color, token_index, TokenPosition::Home { index });
            message = match token.position {
                TokenPosition::Home { .. } => String::from("Moved in home."),
                _ => String::from("Moved into home column."),
            };

            if has_won(state, color) {
                let winner = state.active_colors().iter().position(|&c| c == color);
                if let Some(winner) = winner {
                    state.set_winner(winner);
                    message.push_str(" Winner!");
                    info!("{color} wins the game");
                }
            }
        }
    }

    let extra_turn = roll == 6;
    if extra_turn {
        // Same player rolls again from a clean slate.
        state.clear_roll();
    }

    debug!("{color} moved token #{token_index} with a {roll}: {message}");

    Ok(MoveOutcome {
        extra_turn,
        captured,
        message,
    })
}

/// Whether all four of a color's tokens stand on the last home slot.
fn has_won(state: &GameState, color: Color) -> bool {
    let mut count = 0;
    for token in state.tokens_of(color) {
        if !token.position.at_home_index(board::last_home_index()) {
            return false;
        }
        count += 1;
    }
    count == board::TOKENS_PER_COLOR
}

/// Advance to the next player and clear the roll.
///
/// Called by the session layer after a non-extra-turn move or a pass.
pub fn advance_turn(state: &mut GameState) {
    state.cycle_player();
    state.clear_roll();
}

/// Yield the turn: allowed only after a roll that left no legal move.
pub fn pass_turn(state: &mut GameState) -> Result<(), RulesError> {
    if state.is_finished() {
        return Err(RulesError::GameFinished);
    }
    let Some(recorded) = state.last_roll() else {
        return Err(RulesError::RollRequired);
    };
    if !legal_moves(state, recorded).is_empty() {
        return Err(RulesError::MovesAvailable);
    }

    debug!("{} passes on a {recorded}", state.current_color());
    advance_turn(state);
    Ok(())
}
