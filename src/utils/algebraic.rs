//! Square and move conversions for long algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and mailbox
//! `(row, col)` squares, where row 0 is rank 8. Reused by FEN and the
//! interactive loop.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{Square, BOARD_SIZE};

/// Convert long algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let invalid = || ChessError::InvalidAlgebraicSquare(square.to_owned());

    let &[file, rank] = square.as_bytes() else {
        return Err(invalid());
    };
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    let col = file - b'a';
    let row = BOARD_SIZE - 1 - (rank - b'1');
    Square::new(row, col).ok_or_else(invalid)
}

/// Convert a square to long algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Split a four-character move such as "e2e4" into its two squares.
///
/// Surrounding whitespace is ignored; anything else is an error.
pub fn parse_move_notation(text: &str) -> Result<(Square, Square), ChessError> {
    let trimmed = text.trim();
    let invalid = || ChessError::InvalidMoveNotation(text.to_owned());

    if trimmed.len() != 4 || !trimmed.is_ascii() {
        return Err(invalid());
    }

    let (from, to) = trimmed.split_at(2);
    let from = algebraic_to_square(from).map_err(|_| invalid())?;
    let to = algebraic_to_square(to).map_err(|_| invalid())?;
    Ok((from, to))
}
