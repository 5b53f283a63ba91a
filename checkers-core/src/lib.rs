//! Checkers Core - Game engine and AI
//!
//! This crate provides the core game logic for 8x8 checkers:
//! - Board geometry (squares indexed `row * 8 + column`)
//! - Game state, move application and win detection
//! - Legal move generation with mandatory multi-hop captures
//! - Material and weighted position evaluation
//! - Alpha-beta search and an AI with random tie-breaks

pub mod board;
pub mod pieces;
pub mod error;
pub mod moves;
pub mod game;
pub mod movegen;
pub mod eval;
pub mod search;
pub mod ai;
pub mod config;

// Re-exports for convenient access
pub use board::{Square, BOARD_SIZE, DIRECTIONS, NUM_SQUARES};
pub use pieces::{Piece, PieceKind};
pub use error::CheckersError;
pub use moves::Move;
pub use game::{GameResult, GameState, PieceCounts, Player};
pub use eval::{evaluate, Heuristic, Score};
pub use search::{score, Search};
pub use ai::{best_candidates, select_move, AlphaBetaAI};
pub use config::AiConfig;
