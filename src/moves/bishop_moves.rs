//! Bishop ray geometry.

/// Diagonal ray directions as `(d_row, d_col)`: up-left, up-right, down-left,
/// down-right.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
