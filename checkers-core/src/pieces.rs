//! Piece kinds and their movement directions

use crate::board::{ALL_DIRS, DOWN, UP};
use crate::game::Player;
use serde::{Deserialize, Serialize};

/// Man or king
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Man,
    King,
}

/// A piece on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
}

impl Piece {
    pub const fn man(owner: Player) -> Self {
        Self { kind: PieceKind::Man, owner }
    }

    pub const fn king(owner: Player) -> Self {
        Self { kind: PieceKind::King, owner }
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// Diagonals this piece may step or hop along, in generation order.
    /// Men only move forward: white toward row 0, black toward row 7.
    pub fn directions(&self) -> &'static [(i8, i8)] {
        match (self.kind, self.owner) {
            (PieceKind::King, _) => ALL_DIRS,
            (PieceKind::Man, Player::White) => UP,
            (PieceKind::Man, Player::Black) => DOWN,
        }
    }

    /// The same piece after crowning
    pub fn crowned(self) -> Self {
        Self::king(self.owner)
    }

    /// ASCII symbol: uppercase for white, lowercase for black
    pub fn symbol(&self) -> char {
        match (self.kind, self.owner) {
            (PieceKind::Man, Player::White) => 'M',
            (PieceKind::King, Player::White) => 'K',
            (PieceKind::Man, Player::Black) => 'm',
            (PieceKind::King, Player::Black) => 'k',
        }
    }

    /// Draughts glyphs (U+26C0..U+26C3)
    pub fn unicode_symbol(&self) -> char {
        match (self.kind, self.owner) {
            (PieceKind::Man, Player::White) => '\u{26C0}',
            (PieceKind::King, Player::White) => '\u{26C1}',
            (PieceKind::Man, Player::Black) => '\u{26C2}',
            (PieceKind::King, Player::Black) => '\u{26C3}',
        }
    }
}
