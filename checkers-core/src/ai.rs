//! Alpha-beta AI player

use crate::config::AiConfig;
use crate::error::CheckersError;
use crate::eval::{Heuristic, Score};
use crate::game::{GameState, Player};
use crate::moves::Move;
use crate::search::Search;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// ALPHA-BETA AI
// ============================================================================

/// Alpha-Beta AI player
pub struct AlphaBetaAI {
    pub depth: u32,
    pub heuristic: Heuristic,
    rng: ChaCha8Rng,
}

impl AlphaBetaAI {
    /// AI with an entropy-seeded tie-break generator
    pub fn new(depth: u32, heuristic: Heuristic) -> Self {
        Self {
            depth,
            heuristic,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(depth: u32, heuristic: Heuristic, seed: u64) -> Self {
        Self {
            depth,
            heuristic,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(config.depth, config.heuristic, seed),
            None => Self::new(config.depth, config.heuristic),
        }
    }

    /// Get best move for current position
    pub fn best_move(&mut self, state: &GameState) -> Result<Move, CheckersError> {
        select_move(state, self.depth, self.heuristic, &mut self.rng)
    }

    /// Play against itself until one side wins or `max_plies` moves are made
    pub fn play_game(&mut self, initial: GameState, max_plies: u32) -> (GameState, Vec<Move>) {
        let mut state = initial;
        let mut history = Vec::new();

        while history.len() < max_plies as usize {
            if state.result().winner().is_some() {
                break;
            }
            match self.best_move(&state) {
                Ok(mv) => {
                    state = state.play(&mv);
                    history.push(mv);
                }
                Err(_) => break,
            }
        }

        (state, history)
    }
}

// ============================================================================
// ROOT MOVE SELECTION
// ============================================================================

/// Every root move sharing the best search score, in generation order,
/// together with that score
pub fn best_candidates(
    state: &GameState,
    depth: u32,
    heuristic: Heuristic,
) -> Result<(Vec<Move>, Score), CheckersError> {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return Err(CheckersError::NoLegalMoves(state.side_to_move()));
    }

    let maximizing = state.side_to_move() == Player::White;
    let mut search = Search::new(heuristic);
    let mut candidates = Vec::new();
    let mut best: Option<Score> = None;

    for mv in moves {
        let score = search.alpha_beta(&state.play(&mv), depth, Score::MIN, Score::MAX);

        match best {
            Some(b) if score == b => candidates.push(mv),
            Some(b) if (maximizing && score < b) || (!maximizing && score > b) => {}
            _ => {
                candidates.clear();
                candidates.push(mv);
                best = Some(score);
            }
        }
    }

    let best = best.unwrap_or_else(|| Score::loss_for(state.side_to_move()));
    tracing::debug!(
        "ply {}: {} candidate(s) at {} after {} nodes",
        state.ply(),
        candidates.len(),
        best,
        search.nodes()
    );

    Ok((candidates, best))
}

/// Pick uniformly at random among the best-scoring root moves
pub fn select_move<R: Rng + ?Sized>(
    state: &GameState,
    depth: u32,
    heuristic: Heuristic,
    rng: &mut R,
) -> Result<Move, CheckersError> {
    let (mut candidates, _) = best_candidates(state, depth, heuristic)?;
    let pick = rng.gen_range(0..candidates.len());
    Ok(candidates.swap_remove(pick))
}

// ============================================================================
// TESTS
// ============================================================================
