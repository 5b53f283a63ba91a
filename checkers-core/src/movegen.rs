//! Legal move generation
//!
//! Captures are mandatory: if any piece of the side to move can jump, only
//! capture moves are legal, and every capture runs to the end of its chain.
//! Each starting square roots a tree of hops; every root-to-leaf path of that
//! tree is one legal move.
//!
//! A chain may never jump the same opponent piece twice. Jumped pieces stay
//! on the board until the move is complete. Landings always share the
//! origin's row parity while jumped squares never do, so a chain can only
//! land on its own starting square, which counts as empty once it has left.

use crate::board::Square;
use crate::game::GameState;
use crate::moves::Move;
use crate::pieces::Piece;

/// In-progress capture chain for one piece
struct Chain {
    origin: Square,
    piece: Piece,
    path: Vec<Square>,
    /// Bit set of squares whose pieces were already jumped
    jumped: u64,
}

impl GameState {
    /// Generate all legal moves, in deterministic order: squares by index,
    /// directions up-left, up-right, down-left, down-right
    pub fn legal_moves(&self) -> Vec<Move> {
        let captures = self.capture_moves();
        if !captures.is_empty() {
            return captures;
        }
        self.simple_moves()
    }

    /// Whether the side to move has a capture available
    pub fn has_capture(&self) -> bool {
        self.own_pieces().any(|(sq, piece)| {
            piece.directions().iter().any(|&dir| {
                matches!(self.hop_target(sq, piece, dir, 0), Some((_, landing)) if self.piece_at(landing).is_none())
            })
        })
    }

    fn own_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let side = self.side_to_move();
        self.pieces().filter(move |(_, piece)| piece.owner == side)
    }

    /// Every maximal capture chain for the side to move
    fn capture_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (sq, piece) in self.own_pieces() {
            let mut chain = Chain {
                origin: sq,
                piece,
                path: vec![sq],
                jumped: 0,
            };
            self.extend_chain(&mut chain, sq, &mut moves);
        }
        moves
    }

    /// Depth-first walk of the hop tree below `from`, emitting a move at
    /// every leaf
    fn extend_chain(&self, chain: &mut Chain, from: Square, moves: &mut Vec<Move>) {
        let mut extended = false;

        for &dir in chain.piece.directions() {
            let Some((over, landing)) = self.hop_target(from, chain.piece, dir, chain.jumped) else {
                continue;
            };
            let landing_free = landing == chain.origin || self.piece_at(landing).is_none();
            if !landing_free {
                continue;
            }

            extended = true;
            chain.path.push(landing);
            chain.jumped |= over.bit();
            self.extend_chain(chain, landing, moves);
            chain.jumped &= !over.bit();
            chain.path.pop();
        }

        if !extended && chain.path.len() > 1 {
            moves.push(Move::from_path(chain.path.clone()));
        }
    }

    /// The (jumped, landing) squares for a hop from `from` along `dir`, when
    /// the adjacent square holds an opponent piece not yet jumped in this
    /// chain. Landing occupancy is checked by the caller.
    fn hop_target(&self, from: Square, piece: Piece, dir: (i8, i8), jumped: u64) -> Option<(Square, Square)> {
        let over = from.offset(dir, 1)?;
        let landing = from.offset(dir, 2)?;
        let victim = self.piece_at(over)?;
        if victim.owner == piece.owner || jumped & over.bit() != 0 {
            return None;
        }
        Some((over, landing))
    }

    /// One-step diagonal moves, only consulted when no capture exists
    fn simple_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (sq, piece) in self.own_pieces() {
            for &dir in piece.directions() {
                if let Some(to) = sq.offset(dir, 1) {
                    if self.piece_at(to).is_none() {
                        moves.push(Move::from_path(vec![sq, to]));
                    }
                }
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameResult, Player};
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    fn sq(index: u8) -> Square {
        Square::new(index).unwrap()
    }

    fn notation(moves: &[Move]) -> Vec<String> {
        moves.iter().map(|mv| mv.to_string()).collect()
    }

    #[test]
    fn test_opening_moves_in_order() {
        let game = GameState::new_game();
        assert_eq!(
            notation(&game.legal_moves()),
            vec!["40-33", "42-33", "42-35", "44-35", "44-37", "46-37", "46-39"]
        );
        assert!(!game.has_capture());
    }

    #[test]
    fn test_single_jump_is_forced() {
        let game = GameState::from_pieces(
            &[
                (sq(26), Piece::man(Player::White)),
                (sq(17), Piece::man(Player::Black)),
                (sq(53), Piece::man(Player::White)),
            ],
            Player::White,
        );
        let moves = notation(&game.legal_moves());
        assert!(game.has_capture());
        assert_eq!(moves, vec!["26-8"]);
        assert!(!moves.contains(&"26-19".to_string()));
        assert!(!moves.iter().any(|m| m.starts_with("53-")));
    }

    #[test]
    fn test_multi_hop_chain_branches() {
        let game = GameState::from_pieces(
            &[
                (sq(51), Piece::man(Player::White)),
                (sq(42), Piece::man(Player::Black)),
                (sq(26), Piece::man(Player::Black)),
                (sq(10), Piece::man(Player::Black)),
                (sq(12), Piece::man(Player::Black)),
                (sq(55), Piece::man(Player::White)),
            ],
            Player::White,
        );
        assert_eq!(notation(&game.legal_moves()), vec!["51-33-19-1", "51-33-19-5"]);

        let next = game.apply_notation("51-33-19-5").unwrap();
        assert_eq!(next.counts().black_men, 1);
        assert_eq!(next.piece_at(sq(10)), Some(Piece::man(Player::Black)));
        assert_eq!(next.piece_at(sq(5)), Some(Piece::king(Player::White)));
    }

    #[test]
    fn test_king_loop_returns_to_origin() {
        let game = GameState::from_pieces(
            &[
                (sq(42), Piece::king(Player::White)),
                (sq(33), Piece::man(Player::Black)),
                (sq(17), Piece::man(Player::Black)),
                (sq(19), Piece::man(Player::Black)),
                (sq(35), Piece::man(Player::Black)),
            ],
            Player::White,
        );
        assert_eq!(
            notation(&game.legal_moves()),
            vec!["42-24-10-28-42", "42-28-10-24-42"]
        );

        let next = game.apply_notation("42-24-10-28-42").unwrap();
        assert_eq!(next.piece_at(sq(42)), Some(Piece::king(Player::White)));
        assert_eq!(next.counts().pieces(Player::Black), 0);
        assert_eq!(next.result(), GameResult::WhiteWins);
    }

    #[test]
    fn test_piece_not_jumped_twice() {
        // Back across the same diagonal would jump 33 again
        let game = GameState::from_pieces(
            &[
                (sq(42), Piece::king(Player::White)),
                (sq(33), Piece::man(Player::Black)),
            ],
            Player::White,
        );
        assert_eq!(notation(&game.legal_moves()), vec!["42-24"]);
    }

    #[test]
    fn test_men_do_not_capture_backward() {
        let game = GameState::from_pieces(
            &[
                (sq(26), Piece::man(Player::White)),
                (sq(35), Piece::man(Player::Black)),
            ],
            Player::White,
        );
        assert!(!game.has_capture());
        assert_eq!(notation(&game.legal_moves()), vec!["26-17", "26-19"]);

        // Black man on 35 moves down only
        let black = GameState::from_pieces(
            &[
                (sq(26), Piece::man(Player::White)),
                (sq(35), Piece::man(Player::Black)),
            ],
            Player::Black,
        );
        assert_eq!(notation(&black.legal_moves()), vec!["35-42", "35-44"]);
    }

    #[test]
    fn test_kings_step_all_directions() {
        let game = GameState::from_pieces(
            &[
                (sq(28), Piece::king(Player::Black)),
                (sq(60), Piece::man(Player::White)),
            ],
            Player::Black,
        );
        assert_eq!(
            notation(&game.legal_moves()),
            vec!["28-19", "28-21", "28-35", "28-37"]
        );
    }

    #[test]
    fn test_blocked_man_contributes_nothing() {
        let game = GameState::from_pieces(
            &[
                (sq(56), Piece::man(Player::White)),
                (sq(49), Piece::man(Player::Black)),
                (sq(42), Piece::man(Player::Black)),
                (sq(46), Piece::man(Player::White)),
            ],
            Player::White,
        );
        let moves = game.legal_moves();
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.from() == sq(46)));
    }

    #[test]
    fn test_edge_pieces_do_not_wrap() {
        // 23 sits on the right edge; only the jump over 30 exists
        let game = GameState::from_pieces(
            &[
                (sq(23), Piece::king(Player::White)),
                (sq(16), Piece::man(Player::Black)),
                (sq(30), Piece::man(Player::Black)),
            ],
            Player::White,
        );
        assert_eq!(notation(&game.legal_moves()), vec!["23-37"]);
    }

    #[test]
    fn test_landings_never_fall_on_jumped_squares() {
        for state in random_positions(11, 40, 120) {
            for mv in state.legal_moves().iter().filter(|mv| mv.is_capture()) {
                let jumped: Vec<Square> = mv.captured_squares().collect();
                for (i, a) in jumped.iter().enumerate() {
                    assert!(!jumped[i + 1..].contains(a), "{} jumps {} twice", mv, a);
                }

                let parity = mv.from().row() % 2;
                for &landing in &mv.squares()[1..] {
                    assert_eq!(landing.row() % 2, parity);
                    assert!(!jumped.contains(&landing), "{} lands on a jumped piece", mv);
                }
                for sq in &jumped {
                    assert_ne!(sq.row() % 2, parity);
                }
            }
        }
    }

    /// Play random legal moves from the start, collecting positions
    fn random_positions(seed: u64, games: usize, max_plies: usize) -> Vec<GameState> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut positions = Vec::new();
        for _ in 0..games {
            let mut state = GameState::new_game();
            for _ in 0..max_plies {
                let moves = state.legal_moves();
                if moves.is_empty() || state.result() != GameResult::Ongoing {
                    break;
                }
                let mv = &moves[rng.gen_range(0..moves.len())];
                state = state.apply_move(mv).unwrap();
                positions.push(state.clone());
            }
        }
        positions
    }

    #[test]
    fn test_random_positions_respect_capture_rules() {
        for state in random_positions(7, 40, 120) {
            let moves = state.legal_moves();
            if state.has_capture() {
                assert!(!moves.is_empty());
                assert!(moves.iter().all(|mv| mv.is_capture()), "simple move mixed with captures");

                // Maximal chains: no legal move extends another
                for a in &moves {
                    for b in &moves {
                        if a != b {
                            assert!(!b.squares().starts_with(a.squares()), "{} is a prefix of {}", a, b);
                        }
                    }
                }
            } else {
                assert!(moves.iter().all(|mv| !mv.is_capture()));
            }

            for mv in &moves {
                let next = state.apply_move(mv).unwrap();
                let captured = mv.captured_squares().count() as u8;
                let side = state.side_to_move().opponent();
                assert_eq!(
                    next.counts().pieces(side),
                    state.counts().pieces(side) - captured
                );
            }
        }
    }
}
