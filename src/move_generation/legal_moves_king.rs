//! King move generation: one step in any direction onto an empty or
//! enemy-occupied square. Whether the step walks into check is decided later
//! by the legality filter.

use crate::game_state::chess_types::{Board, Piece, Square};
use crate::move_generation::legal_move_shared::push_step_move;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_king_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<ChessMove>) {
    for to in king_targets(from) {
        push_step_move(board, from, to, king, out);
    }
}
