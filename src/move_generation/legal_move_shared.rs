//! Helpers shared by the per-piece generators.

use crate::game_state::chess_types::{Board, Piece, Square};
use crate::moves::move_descriptions::ChessMove;

#[inline]
pub fn build_move(board: &Board, from: Square, to: Square, piece_moved: Piece) -> ChessMove {
    ChessMove {
        from,
        to,
        piece_moved,
        piece_captured: board.piece_at(to),
    }
}

/// Push a single-step move (knight jump or king step) unless `to` holds a
/// friendly piece. Empty and enemy-occupied squares both qualify.
#[inline]
pub fn push_step_move(
    board: &Board,
    from: Square,
    to: Square,
    mover: Piece,
    out: &mut Vec<ChessMove>,
) {
    match board.piece_at(to) {
        Some(occupant) if occupant.color == mover.color => {}
        _ => out.push(build_move(board, from, to, mover)),
    }
}

/// Walk each ray from `from` until it leaves the board or meets a piece.
/// The blocking square is included only when it holds an enemy piece.
pub fn push_slide_moves(
    board: &Board,
    from: Square,
    mover: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            match board.piece_at(to) {
                None => out.push(build_move(board, from, to, mover)),
                Some(occupant) => {
                    if occupant.color != mover.color {
                        out.push(build_move(board, from, to, mover));
                    }
                    break;
                }
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}
