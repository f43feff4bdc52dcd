//! Rook move generation.
//!
//! Slides along the four orthogonal rays. A ray stops at the first occupied
//! square, which is included only as a capture of an enemy piece.

use crate::game_state::chess_types::{Board, Piece, Square};
use crate::move_generation::legal_move_shared::push_slide_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(board: &Board, from: Square, rook: Piece, out: &mut Vec<ChessMove>) {
    push_slide_moves(board, from, rook, &ROOK_DIRECTIONS, out);
}
