use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Color, Square};

/// Squares a pawn of `color` on `from` attacks diagonally: toward col - 1
/// first, then toward col + 1. Off-board targets are skipped.
#[inline]
pub fn pawn_capture_targets(color: Color, from: Square) -> impl Iterator<Item = Square> {
    let d_row = pawn_direction(color);
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| from.offset(d_row, d_col))
}

/// The square directly in front of the pawn, if any.
#[inline]
pub fn pawn_push_target(color: Color, from: Square) -> Option<Square> {
    from.offset(pawn_direction(color), 0)
}

#[cfg(test)]
mod tests {
    use super::{pawn_capture_targets, pawn_push_target};
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn white_pawn_attacks_toward_row_zero() {
        let e2 = Square::new(6, 4).expect("e2");
        let targets: Vec<Square> = pawn_capture_targets(Color::White, e2).collect();
        assert_eq!(
            targets,
            vec![Square::new(5, 3).expect("d3"), Square::new(5, 5).expect("f3")]
        );
    }

    #[test]
    fn edge_pawn_has_one_capture_target() {
        let a7 = Square::new(1, 0).expect("a7");
        let targets: Vec<Square> = pawn_capture_targets(Color::Black, a7).collect();
        assert_eq!(targets, vec![Square::new(2, 1).expect("b6")]);
    }

    #[test]
    fn pawn_on_last_row_has_no_push_target() {
        let e8 = Square::new(0, 4).expect("e8");
        assert_eq!(pawn_push_target(Color::White, e8), None);
        assert_eq!(
            pawn_push_target(Color::Black, e8),
            Square::new(1, 4)
        );
    }
}
