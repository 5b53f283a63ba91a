//! Move representation and dash-separated notation

use crate::board::Square;
use crate::error::CheckersError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A move: the origin square followed by every landing square.
///
/// Two squares describe either a one-step diagonal move or a single hop;
/// longer paths are multi-hop capture chains.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Square>")]
pub struct Move(Vec<Square>);

impl Move {
    /// Build a move from a square path (at least two squares)
    pub fn new(squares: Vec<Square>) -> Result<Self, CheckersError> {
        if squares.len() < 2 {
            return Err(CheckersError::InvalidMoveFormat {
                input: join(&squares),
                reason: "a move needs at least two squares".to_string(),
            });
        }
        Ok(Self(squares))
    }

    /// Build a move from a generator path already known to be well-formed
    pub(crate) fn from_path(squares: Vec<Square>) -> Self {
        debug_assert!(squares.len() >= 2);
        Self(squares)
    }

    pub fn squares(&self) -> &[Square] {
        &self.0
    }

    pub fn from(&self) -> Square {
        self.0[0]
    }

    pub fn to(&self) -> Square {
        self.0[self.0.len() - 1]
    }

    /// Consecutive (origin, landing) pairs
    pub fn hops(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Whether the move jumps at least one piece
    pub fn is_capture(&self) -> bool {
        self.hops().any(|(from, to)| from.row_distance(to) == 2)
    }

    /// Squares of the pieces jumped, in order
    pub fn captured_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.hops()
            .filter(|(from, to)| from.row_distance(*to) == 2)
            .map(|(from, to)| from.midpoint(to))
    }
}

impl TryFrom<Vec<Square>> for Move {
    type Error = CheckersError;

    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        Move::new(squares)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(&self.0))
    }
}

impl FromStr for Move {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| CheckersError::InvalidMoveFormat {
            input: s.to_string(),
            reason,
        };

        let squares = s
            .trim()
            .split('-')
            .map(|part| {
                let part = part.trim();
                let index: u8 = part
                    .parse()
                    .map_err(|_| invalid(format!("'{}' is not a square number", part)))?;
                Square::new(index).ok_or_else(|| invalid(format!("square {} is off the board", index)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if squares.len() < 2 {
            return Err(invalid("a move needs at least two squares".to_string()));
        }
        Ok(Self(squares))
    }
}

fn join(squares: &[Square]) -> String {
    squares
        .iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(index: u8) -> Square {
        Square::new(index).unwrap()
    }

    #[test]
    fn test_parse_simple_and_chain() {
        let simple: Move = "26-17".parse().unwrap();
        assert_eq!(simple.squares(), &[sq(26), sq(17)]);
        assert!(!simple.is_capture());

        let chain: Move = "26-8-26".parse().unwrap();
        assert_eq!(chain.to_string(), "26-8-26");
        assert!(chain.is_capture());
        let jumped: Vec<Square> = chain.captured_squares().collect();
        assert_eq!(jumped, vec![sq(17), sq(17)]);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let mv: Move = " 40 - 33 ".parse().unwrap();
        assert_eq!(mv.to_string(), "40-33");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for input in ["", "26", "26-", "a-b", "26-64", "-1-8", "26--17"] {
            let err = input.parse::<Move>().unwrap_err();
            assert!(
                matches!(err, CheckersError::InvalidMoveFormat { .. }),
                "{:?} should be a format error",
                input
            );
        }
    }

    #[test]
    fn test_json_is_a_square_list() {
        let mv: Move = "26-8-26".parse().unwrap();
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, "[26,8,26]");
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);

        // Too short, and off the board
        assert!(serde_json::from_str::<Move>("[26]").is_err());
        assert!(serde_json::from_str::<Move>("[26,64]").is_err());
        assert!(serde_json::from_str::<Square>("70").is_err());
    }

    #[test]
    fn test_new_requires_two_squares() {
        assert!(Move::new(vec![sq(1)]).is_err());
        let mv = Move::new(vec![sq(40), sq(33)]).unwrap();
        assert_eq!(mv.from(), sq(40));
        assert_eq!(mv.to(), sq(33));
    }
}
