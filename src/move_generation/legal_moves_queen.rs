use crate::game_state::chess_types::{Board, Piece, Square};
use crate::move_generation::legal_move_shared::push_slide_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

/// Union of rook and bishop sliding from the same square.
pub fn generate_queen_moves(board: &Board, from: Square, queen: Piece, out: &mut Vec<ChessMove>) {
    push_slide_moves(board, from, queen, &QUEEN_DIRECTIONS, out);
}
