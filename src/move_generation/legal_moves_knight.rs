use crate::game_state::chess_types::{Board, Piece, Square};
use crate::move_generation::legal_move_shared::push_step_move;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_knight_moves(board: &Board, from: Square, knight: Piece, out: &mut Vec<ChessMove>) {
    for to in knight_targets(from) {
        push_step_move(board, from, to, knight, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::game_state::GameState;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_skips_friendly_squares_and_captures_enemies() {
        // White knight d4, own pawn on c6, black pawn on e6.
        let game = GameState::from_fen("4k3/8/2P1p3/8/3N4/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let d4 = Square::new(4, 3).expect("d4");
        let knight = game.piece_at(d4).expect("knight on d4");

        let mut out = Vec::new();
        generate_knight_moves(&game.board(), d4, knight, &mut out);

        assert_eq!(out.len(), 7);
        let c6 = Square::new(2, 2).expect("c6");
        let e6 = Square::new(2, 4).expect("e6");
        assert!(out.iter().all(|mv| mv.to != c6));
        let capture = out.iter().find(|mv| mv.to == e6).expect("capture on e6");
        assert!(capture.is_capture());
    }
}
