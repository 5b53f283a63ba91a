//! Game state and move application

use crate::board::{Square, BOARD_SIZE, NUM_SQUARES};
use crate::error::CheckersError;
use crate::moves::Move;
use crate::pieces::{Piece, PieceKind};
use serde::{Deserialize, Serialize};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row on which this player's men are crowned
    pub fn promotion_row(self) -> i8 {
        match self {
            Player::White => 0,
            Player::Black => BOARD_SIZE - 1,
        }
    }

    /// Row this player starts from
    pub fn home_row(self) -> i8 {
        self.opponent().promotion_row()
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    WhiteWins,
    BlackWins,
}

impl GameResult {
    /// Result of `player` winning
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::White => GameResult::WhiteWins,
            Player::Black => GameResult::BlackWins,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::WhiteWins => Some(Player::White),
            GameResult::BlackWins => Some(Player::Black),
            GameResult::Ongoing => None,
        }
    }
}

/// Cached piece counts, kept in step with the board
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceCounts {
    pub white_men: u8,
    pub white_kings: u8,
    pub black_men: u8,
    pub black_kings: u8,
}

impl PieceCounts {
    pub fn men(&self, player: Player) -> u8 {
        match player {
            Player::White => self.white_men,
            Player::Black => self.black_men,
        }
    }

    pub fn kings(&self, player: Player) -> u8 {
        match player {
            Player::White => self.white_kings,
            Player::Black => self.black_kings,
        }
    }

    /// Men plus kings
    pub fn pieces(&self, player: Player) -> u8 {
        self.men(player) + self.kings(player)
    }

    fn slot(&mut self, piece: Piece) -> &mut u8 {
        match (piece.owner, piece.kind) {
            (Player::White, PieceKind::Man) => &mut self.white_men,
            (Player::White, PieceKind::King) => &mut self.white_kings,
            (Player::Black, PieceKind::Man) => &mut self.black_men,
            (Player::Black, PieceKind::King) => &mut self.black_kings,
        }
    }

    fn add(&mut self, piece: Piece) {
        *self.slot(piece) += 1;
    }

    fn remove(&mut self, piece: Piece) {
        *self.slot(piece) -= 1;
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Game state (immutable: transitions return a new value)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Board: one cell per square, row-major
    board: [Option<Piece>; NUM_SQUARES],

    /// Side to move
    side_to_move: Player,

    /// Cached piece counts
    counts: PieceCounts,

    /// Moves applied since the starting position
    ply: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Standard starting position: 12 men a side on the dark squares,
    /// black on rows 0-2, white on rows 5-7, white to move
    pub fn new_game() -> Self {
        let mut placements = Vec::with_capacity(24);
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            match sq.row() {
                0..=2 => placements.push((sq, Piece::man(Player::Black))),
                5..=7 => placements.push((sq, Piece::man(Player::White))),
                _ => {}
            }
        }
        Self::from_pieces(&placements, Player::White)
    }

    /// Position from explicit placements. Men already standing on their
    /// promotion row are crowned; a later placement on the same square wins.
    pub fn from_pieces(pieces: &[(Square, Piece)], side_to_move: Player) -> Self {
        let mut board = [None; NUM_SQUARES];
        for &(sq, piece) in pieces {
            board[sq.index()] = Some(piece);
        }

        let mut state = Self {
            board,
            side_to_move,
            counts: PieceCounts::default(),
            ply: 0,
        };
        for piece in board.iter().flatten() {
            state.counts.add(*piece);
        }
        state.promote_men();
        state
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn counts(&self) -> PieceCounts {
        self.counts
    }

    /// Get piece at square
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    /// Iterate occupied squares in index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Win by material: a side with no pieces left has lost
    pub fn result(&self) -> GameResult {
        if self.counts.pieces(Player::Black) == 0 {
            GameResult::WhiteWins
        } else if self.counts.pieces(Player::White) == 0 {
            GameResult::BlackWins
        } else {
            GameResult::Ongoing
        }
    }

    /// Like `result`, but a side to move with no legal move has also lost
    pub fn outcome(&self) -> GameResult {
        match self.result() {
            GameResult::Ongoing if self.legal_moves().is_empty() => {
                GameResult::win_for(self.side_to_move.opponent())
            }
            result => result,
        }
    }

    // ========================================================================
    // MOVE APPLICATION
    // ========================================================================

    /// Apply a legal move, returning the successor state
    pub fn apply_move(&self, mv: &Move) -> Result<Self, CheckersError> {
        if !self.legal_moves().contains(mv) {
            return Err(CheckersError::IllegalMove(mv.to_string()));
        }
        Ok(self.play(mv))
    }

    /// Parse and apply a move in dash notation
    pub fn apply_notation(&self, notation: &str) -> Result<Self, CheckersError> {
        let mv: Move = notation.parse()?;
        self.apply_move(&mv)
    }

    /// Apply a move taken from `legal_moves` without re-validating it
    pub(crate) fn play(&self, mv: &Move) -> Self {
        let mut next = self.clone();

        for (from, to) in mv.hops() {
            let piece = next.board[from.index()].take();

            if from.row_distance(to) == 2 {
                let jumped = from.midpoint(to);
                if let Some(victim) = next.board[jumped.index()].take() {
                    next.counts.remove(victim);
                }
            }

            next.board[to.index()] = piece;
        }

        next.side_to_move = self.side_to_move.opponent();
        next.promote_men();
        next.ply += 1;
        next
    }

    /// Crown every man standing on its promotion row
    fn promote_men(&mut self) {
        for col in 0..BOARD_SIZE {
            for player in [Player::White, Player::Black] {
                let Some(sq) = Square::from_coords(player.promotion_row(), col) else {
                    continue;
                };
                if let Some(piece) = self.board[sq.index()] {
                    if piece.owner == player && !piece.is_king() {
                        let king = piece.crowned();
                        self.counts.remove(piece);
                        self.counts.add(king);
                        self.board[sq.index()] = Some(king);
                    }
                }
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
