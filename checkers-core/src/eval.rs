//! Position evaluation

use crate::board::Square;
use crate::error::CheckersError;
use crate::game::{GameResult, GameState, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selectable evaluation function
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// Piece count difference, men and kings alike
    #[default]
    Material,
    /// Pieces plus kings plus men still guarding the home row
    Weighted,
}

impl FromStr for Heuristic {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "material" | "0" => Ok(Heuristic::Material),
            "weighted" | "1" => Ok(Heuristic::Weighted),
            other => Err(CheckersError::UnknownHeuristic(other.to_string())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Material => f.write_str("material"),
            Heuristic::Weighted => f.write_str("weighted"),
        }
    }
}

/// Search score from white's point of view.
///
/// Ordering is `BlackWins < Value(_) < WhiteWins`, so decisive results sit
/// outside every heuristic value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    BlackWins,
    Value(i32),
    WhiteWins,
}

impl Score {
    /// Lowest possible score
    pub const MIN: Score = Score::BlackWins;
    /// Highest possible score
    pub const MAX: Score = Score::WhiteWins;

    pub fn win_for(player: Player) -> Self {
        match player {
            Player::White => Score::WhiteWins,
            Player::Black => Score::BlackWins,
        }
    }

    pub fn loss_for(player: Player) -> Self {
        Self::win_for(player.opponent())
    }

    pub fn is_decisive(self) -> bool {
        !matches!(self, Score::Value(_))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::BlackWins => f.write_str("-WIN"),
            Score::Value(v) => write!(f, "{}", v),
            Score::WhiteWins => f.write_str("+WIN"),
        }
    }
}

/// Evaluate position from white's perspective
pub fn evaluate(state: &GameState, heuristic: Heuristic) -> Score {
    match state.result() {
        GameResult::WhiteWins => Score::WhiteWins,
        GameResult::BlackWins => Score::BlackWins,
        GameResult::Ongoing => Score::Value(match heuristic {
            Heuristic::Material => material(state),
            Heuristic::Weighted => weighted(state),
        }),
    }
}

fn material(state: &GameState) -> i32 {
    let counts = state.counts();
    counts.pieces(Player::White) as i32 - counts.pieces(Player::Black) as i32
}

fn weighted(state: &GameState) -> i32 {
    let counts = state.counts();
    let side_score = |player: Player| {
        home_row_men(state, player) + counts.kings(player) as i32 + counts.pieces(player) as i32
    };
    side_score(Player::White) - side_score(Player::Black)
}

/// Men of `player` still on the row they started from
fn home_row_men(state: &GameState, player: Player) -> i32 {
    let row = player.home_row();
    (0..8)
        .filter_map(|col| Square::from_coords(row, col))
        .filter(|&sq| matches!(state.piece_at(sq), Some(p) if p.owner == player && !p.is_king()))
        .count() as i32
}
