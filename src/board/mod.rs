//! Static board geometry.
//!
//! Ludo is played on a shared 52-square ring plus one private 5-slot home
//! column per color. Everything here is immutable lookup data: start squares,
//! safe squares, and the board dimensions. The rules engine is the only
//! intended caller, so inputs are assumed valid.
//!
//! Offsets are absolute ring indices (0..51), clockwise. Each color enters
//! the ring at its own start square and travels a full lap, counted relative
//! to that start square, before turning into its home column.

use crate::core::Color;

/// Number of squares on the shared ring.
pub const RING_LEN: u8 = 52;

/// Slots in each color's private home column (indices 0..=4).
pub const HOME_COLUMN_LEN: u8 = 5;

/// Tokens each color plays with.
pub const TOKENS_PER_COLOR: u8 = 4;

/// Star squares: tokens standing here cannot be captured.
const SAFE_OFFSETS: [u8; 8] = [0, 8, 13, 21, 26, 34, 39, 47];

/// Ring square where a color's tokens enter from the yard.
///
/// Starts are spaced 13 squares apart in clockwise color order, so the
/// 2-player pairing (red + yellow) sits diagonally opposite.
#[must_use]
pub const fn start_offset(color: Color) -> u8 {
    match color {
        Color::Red => 0,
        Color::Yellow => 13,
        Color::Green => 26,
        Color::Blue => 39,
    }
}

/// Whether a ring square is a safe (star) square.
#[must_use]
pub fn is_safe(offset: u8) -> bool {
    SAFE_OFFSETS.contains(&offset)
}

/// Last reachable home-column index; landing here with all four tokens wins.
#[must_use]
pub const fn last_home_index() -> u8 {
    HOME_COLUMN_LEN - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_offsets_are_distinct_and_on_ring() {
        let offsets = [
            start_offset(Color::Red),
            start_offset(Color::Blue),
            start_offset(Color::Yellow),
            start_offset(Color::Green),
        ];

        for &o in &offsets {
            assert!(o < RING_LEN);
        }
        for i in 0..offsets.len() {
            for j in (i + 1)..offsets.len() {
                assert_ne!(offsets[i], offsets[j]);
            }
        }
    }

    #[test]
    fn test_start_squares_are_safe() {
        // Every color's entry square is a star square, so a freshly entered
        // token cannot be captured on arrival.
        for color in Color::ALL {
            assert!(is_safe(start_offset(color)));
        }
    }

    #[test]
    fn test_safe_square_membership() {
        assert!(is_safe(0));
        assert!(is_safe(8));
        assert!(is_safe(47));
        assert!(!is_safe(1));
        assert!(!is_safe(51));
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(RING_LEN, 52);
        assert_eq!(HOME_COLUMN_LEN, 5);
        assert_eq!(TOKENS_PER_COLOR, 4);
        assert_eq!(last_home_index(), 4);
    }
}
