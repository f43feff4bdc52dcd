//! Static position scoring used at search leaves.
//!
//! Material is white-relative: positive favors white no matter who is to move.
//! The checkmate term is the only side-relative piece, encoded white-relative
//! so that it is always the worst score for the side that is mated. Negamax
//! variants multiply by the turn multiplier to get a side-to-move score.

use crate::game_state::chess_types::{Board, Color};
use crate::game_state::game_state::GameState;

pub const CHECKMATE: i32 = 1000;
pub const STALEMATE: i32 = 0;

/// Strictly outside every reachable score; used as the initial bound.
pub const SCORE_INFINITY: i32 = CHECKMATE + 1;

/// Sum of piece values, white minus black.
pub fn score_material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| piece.color.turn_multiplier() * piece.kind.material_value())
        .sum()
}

/// White-relative leaf score.
///
/// Reads the terminal flags, so `generate_legal_moves` must have been called
/// for this position.
pub fn score_board(game_state: &GameState) -> i32 {
    if game_state.is_checkmate() {
        match game_state.side_to_move() {
            Color::White => -CHECKMATE,
            Color::Black => CHECKMATE,
        }
    } else if game_state.is_stalemate() {
        STALEMATE
    } else {
        score_material(&game_state.board())
    }
}
