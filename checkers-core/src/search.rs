//! Minimax search with alpha-beta pruning
//!
//! White maximizes, black minimizes; scores are always from white's point of
//! view. A side to move with no legal move has lost.

use crate::eval::{evaluate, Heuristic, Score};
use crate::game::{GameResult, GameState, Player};

/// Depth-limited searcher; counts visited nodes for diagnostics
#[derive(Clone, Debug)]
pub struct Search {
    heuristic: Heuristic,
    nodes: u64,
}

impl Search {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic, nodes: 0 }
    }

    /// Nodes visited since creation
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Score `state` searching `depth` more plies inside the (alpha, beta)
    /// window. Called with `Score::MIN, Score::MAX` it returns the exact
    /// minimax value.
    pub fn alpha_beta(&mut self, state: &GameState, depth: u32, mut alpha: Score, mut beta: Score) -> Score {
        self.nodes += 1;

        if depth == 0 || state.result() != GameResult::Ongoing {
            return evaluate(state, self.heuristic);
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Score::loss_for(state.side_to_move());
        }

        match state.side_to_move() {
            Player::White => {
                let mut value = Score::MIN;
                for mv in &moves {
                    value = value.max(self.alpha_beta(&state.play(mv), depth - 1, alpha, beta));
                    alpha = alpha.max(value);
                    if alpha >= beta {
                        break;
                    }
                }
                value
            }
            Player::Black => {
                let mut value = Score::MAX;
                for mv in &moves {
                    value = value.min(self.alpha_beta(&state.play(mv), depth - 1, alpha, beta));
                    beta = beta.min(value);
                    if alpha >= beta {
                        break;
                    }
                }
                value
            }
        }
    }

    /// Plain minimax over the full tree, without pruning
    pub fn minimax(&mut self, state: &GameState, depth: u32) -> Score {
        self.nodes += 1;

        if depth == 0 || state.result() != GameResult::Ongoing {
            return evaluate(state, self.heuristic);
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Score::loss_for(state.side_to_move());
        }

        let scores = moves.iter().map(|mv| self.minimax(&state.play(mv), depth - 1));
        let best = match state.side_to_move() {
            Player::White => scores.max(),
            Player::Black => scores.min(),
        };
        best.unwrap_or_else(|| Score::loss_for(state.side_to_move()))
    }
}

/// Score a position with a fresh full-window alpha-beta search
pub fn score(state: &GameState, depth: u32, heuristic: Heuristic) -> Score {
    Search::new(heuristic).alpha_beta(state, depth, Score::MIN, Score::MAX)
}
