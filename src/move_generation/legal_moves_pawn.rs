//! Pawn move generation.
//!
//! Order per pawn: single push, double push from the home row, capture toward
//! col - 1, capture toward col + 1. There is no en passant and no promotion; a
//! pawn on the last row simply has no forward moves.

use crate::game_state::chess_rules::pawn_home_row;
use crate::game_state::chess_types::{Board, Piece, Square};
use crate::move_generation::legal_move_shared::build_move;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::pawn_moves::{pawn_capture_targets, pawn_push_target};

pub fn generate_pawn_moves(board: &Board, from: Square, pawn: Piece, out: &mut Vec<ChessMove>) {
    let side = pawn.color;

    if let Some(one_step) = pawn_push_target(side, from) {
        if board.piece_at(one_step).is_none() {
            out.push(build_move(board, from, one_step, pawn));

            if from.row() == pawn_home_row(side) {
                if let Some(two_step) = pawn_push_target(side, one_step) {
                    if board.piece_at(two_step).is_none() {
                        out.push(build_move(board, from, two_step, pawn));
                    }
                }
            }
        }
    }

    for to in pawn_capture_targets(side, from) {
        if matches!(board.piece_at(to), Some(target) if target.color != side) {
            out.push(build_move(board, from, to, pawn));
        }
    }
}
