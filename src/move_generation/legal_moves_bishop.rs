use crate::game_state::chess_types::{Board, Piece, Square};
use crate::move_generation::legal_move_shared::push_slide_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_bishop_moves(
    board: &Board,
    from: Square,
    bishop: Piece,
    out: &mut Vec<ChessMove>,
) {
    push_slide_moves(board, from, bishop, &BISHOP_DIRECTIONS, out);
}
