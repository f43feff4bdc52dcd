use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Queen rays: the rook rays followed by the bishop rays.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

#[cfg(test)]
mod tests {
    use super::QUEEN_DIRECTIONS;
    use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
    use crate::moves::rook_moves::ROOK_DIRECTIONS;

    #[test]
    fn queen_directions_are_rook_then_bishop() {
        assert_eq!(&QUEEN_DIRECTIONS[..4], &ROOK_DIRECTIONS[..]);
        assert_eq!(&QUEEN_DIRECTIONS[4..], &BISHOP_DIRECTIONS[..]);
    }
}
