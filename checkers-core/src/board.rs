//! Board geometry: 8x8 squares indexed `row * 8 + column`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows (and columns) on the board
pub const BOARD_SIZE: i8 = 8;

/// Number of squares on the board
pub const NUM_SQUARES: usize = 64;

/// A board square, `0..64`, row-major
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// Square from a raw index, `None` if off the board
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < NUM_SQUARES {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Square from row/column coordinates, `None` if off the board
    pub fn from_coords(row: i8, col: i8) -> Option<Self> {
        if (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col) {
            Some(Self((row * BOARD_SIZE + col) as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> i8 {
        self.0 as i8 / BOARD_SIZE
    }

    pub fn col(self) -> i8 {
        self.0 as i8 % BOARD_SIZE
    }

    /// Playable squares are the dark ones
    pub fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Square `steps` away along a direction vector
    pub fn offset(self, (dr, dc): (i8, i8), steps: i8) -> Option<Self> {
        Self::from_coords(self.row() + dr * steps, self.col() + dc * steps)
    }

    /// Square halfway between two squares on the same diagonal
    pub fn midpoint(self, other: Square) -> Square {
        let row = (self.row() + other.row()) / 2;
        let col = (self.col() + other.col()) / 2;
        Square((row * BOARD_SIZE + col) as u8)
    }

    /// Row distance to another square
    pub fn row_distance(self, other: Square) -> i8 {
        (self.row() - other.row()).abs()
    }

    /// Single-bit mask for square sets
    pub fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// All squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index).ok_or_else(|| format!("square {} is off the board", index))
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Diagonal direction vectors (drow, dcol)
/// Index: 0=up-left, 1=up-right, 2=down-left, 3=down-right
pub const DIRECTIONS: [(i8, i8); 4] = [
    (-1, -1), // up-left
    (-1, 1),  // up-right
    (1, -1),  // down-left
    (1, 1),   // down-right
];

/// All four diagonals, in generation order
pub const ALL_DIRS: &[(i8, i8)] = &DIRECTIONS;

/// Directions toward row 0
pub const UP: &[(i8, i8)] = &[DIRECTIONS[0], DIRECTIONS[1]];

/// Directions toward row 7
pub const DOWN: &[(i8, i8)] = &[DIRECTIONS[2], DIRECTIONS[3]];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0).is_some());
        assert!(Square::new(63).is_some());
        assert!(Square::new(64).is_none());
        assert!(Square::from_coords(-1, 0).is_none());
        assert!(Square::from_coords(0, 8).is_none());
        assert_eq!(Square::from_coords(3, 2), Square::new(26));
    }

    #[test]
    fn test_coordinates() {
        let sq = Square::new(26).unwrap();
        assert_eq!(sq.row(), 3);
        assert_eq!(sq.col(), 2);
        assert!(sq.is_dark());
        assert!(!Square::new(0).unwrap().is_dark());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square::new(7).unwrap();
        assert_eq!(corner.offset(DIRECTIONS[1], 1), None);
        assert_eq!(corner.offset(DIRECTIONS[2], 1), Square::new(14));
        assert_eq!(corner.offset(DIRECTIONS[2], 2), Square::new(21));
    }

    #[test]
    fn test_midpoint() {
        let from = Square::new(26).unwrap();
        let to = Square::new(8).unwrap();
        assert_eq!(from.midpoint(to), Square::new(17).unwrap());
        assert_eq!(from.row_distance(to), 2);
    }
}
