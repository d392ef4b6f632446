//! Square coordinates on the 3×3 grid, numbered row-major:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! ```

use std::fmt;

/// Squares per side of the grid.
pub const SIZE: u8 = 3;
/// Total number of squares.
pub const SQUARES: u8 = SIZE * SIZE;

/// A validated square number in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Accept an integer only when it lies in `1..=9`.
    pub fn new(n: i64) -> Option<Square> {
        if (1..=i64::from(SQUARES)).contains(&n) {
            Some(Square(n as u8))
        } else {
            None
        }
    }

    /// Parse a move token. The token must be exactly one digit `1`-`9`; signs,
    /// padding, leading zeros and surrounding whitespace are all rejected.
    pub fn parse(token: &str) -> Option<Square> {
        match token.as_bytes() {
            [d @ b'1'..=b'9'] => Some(Square(d - b'0')),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// All nine squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=SQUARES).map(Square)
    }

    /// Square at zero-based `(row, col)`.
    pub(crate) fn at(row: u8, col: u8) -> Square {
        Square(row * SIZE + col + 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_single_digits() {
        for n in 1..=9u8 {
            let token = n.to_string();
            assert_eq!(Square::parse(&token).map(Square::number), Some(n));
        }
    }

    #[test]
    fn parse_rejects_everything_else() {
        for token in ["", "0", "10", "-1", "+5", " 5", "5 ", "05", "5.0", "five", "x", "٥"] {
            assert!(Square::parse(token).is_none(), "{:?} should be rejected", token);
        }
    }

    #[test]
    fn new_checks_range() {
        assert!(Square::new(0).is_none());
        assert!(Square::new(10).is_none());
        assert!(Square::new(-3).is_none());
        assert!(Square::new(i64::MAX).is_none());
        assert_eq!(Square::new(7).map(Square::number), Some(7));
    }

    #[test]
    fn at_is_row_major() {
        assert_eq!(Square::at(0, 0).number(), 1);
        assert_eq!(Square::at(1, 0).number(), 4);
        assert_eq!(Square::at(2, 2).number(), 9);
        assert_eq!(Square::all().count(), 9);
    }
}
