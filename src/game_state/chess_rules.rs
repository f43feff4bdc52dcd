//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the home rows used by pawn double pushes.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Row a pawn of `color` starts on; double pushes are only allowed from here.
#[inline]
pub const fn pawn_home_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row delta of a single pawn step for `color`.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Piece kinds on the back rank, file a to file h.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const WHITE_KING_START: Square = match Square::new(7, 4) {
    Some(square) => square,
    None => panic!("e1 is on the board"),
};

pub const BLACK_KING_START: Square = match Square::new(0, 4) {
    Some(square) => square,
    None => panic!("e8 is on the board"),
};

/// Contents of `square` in the standard starting position.
pub fn starting_piece(square: Square) -> Option<Piece> {
    let back_rank = BACK_RANK[square.col() as usize];
    match square.row() {
        0 => Some(Piece::new(Color::Black, back_rank)),
        1 => Some(Piece::new(Color::Black, PieceKind::Pawn)),
        6 => Some(Piece::new(Color::White, PieceKind::Pawn)),
        7 => Some(Piece::new(Color::White, back_rank)),
        _ => None,
    }
}
