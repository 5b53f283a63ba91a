//! Error types

use crate::game::Player;

/// Errors reported by the checkers engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckersError {
    /// Move text is not at least two dash-separated squares in 0..64
    #[error("invalid move '{input}': {reason}")]
    InvalidMoveFormat { input: String, reason: String },

    /// Well-formed move that is not legal in the position
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// Move selection requested for a side with nothing to play
    #[error("no legal moves for {0:?}")]
    NoLegalMoves(Player),

    #[error("unknown heuristic '{0}' (expected 'material' or 'weighted')")]
    UnknownHeuristic(String),
}
