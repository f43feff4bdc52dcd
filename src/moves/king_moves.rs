//! King step geometry.
//!
//! Single-square steps in all eight directions. There is no castling, so this
//! table is the whole of king movement.

use crate::game_state::chess_types::Square;

/// King step offsets as `(d_row, d_col)`, in generation order.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(from: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}
