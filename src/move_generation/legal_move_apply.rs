//! Make/unmake on `GameState`.
//!
//! `apply_move` and `undo_move` are exact inverses for every move produced by
//! the generator: applying a move and undoing it restores board contents, turn,
//! king squares and log length. Both clear the terminal flags, which only
//! describe the position they were computed for.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

impl GameState {
    /// Play `mv` on the board.
    ///
    /// The caller must pass a move from the current legal move list; the
    /// source-square contents are only checked in debug builds.
    pub fn apply_move(&mut self, mv: ChessMove) {
        debug_assert_eq!(
            self.board.piece_at(mv.from),
            Some(mv.piece_moved),
            "apply_move: {mv} does not match the piece on its source square"
        );

        self.board.set(mv.from, None);
        self.board.set(mv.to, Some(mv.piece_moved));
        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[mv.piece_moved.color.index()] = mv.to;
        }

        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opposite();
        self.checkmate = false;
        self.stalemate = false;
    }

    /// Take back the most recent move. Does nothing on an empty log.
    ///
    /// Returns the move that was undone.
    pub fn undo_move(&mut self) -> Option<ChessMove> {
        let mv = self.move_log.pop()?;

        self.board.set(mv.from, Some(mv.piece_moved));
        self.board.set(mv.to, mv.piece_captured);
        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[mv.piece_moved.color.index()] = mv.from;
        }

        self.side_to_move = self.side_to_move.opposite();
        self.checkmate = false;
        self.stalemate = false;
        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::ChessMove;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square on board")
    }

    #[test]
    fn apply_moves_piece_flips_turn_and_logs() {
        let mut game = GameState::new_game();
        let mv = ChessMove::from_board(&game.board(), sq(6, 4), sq(4, 4)).expect("pawn on e2");
        game.apply_move(mv);

        assert_eq!(game.piece_at(sq(6, 4)), None);
        assert_eq!(
            game.piece_at(sq(4, 4)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.move_log(), &[mv]);
    }

    #[test]
    fn undo_restores_captured_piece_and_king_square() {
        // White king e1 captures a black rook on e2.
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").expect("FEN should parse");
        let before = game.clone();

        let capture = ChessMove::from_board(&game.board(), sq(7, 4), sq(6, 4)).expect("king on e1");
        assert_eq!(
            capture.piece_captured,
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );

        game.apply_move(capture);
        assert_eq!(game.king_square(Color::White), sq(6, 4));

        let undone = game.undo_move().expect("one move in the log");
        assert_eq!(undone, capture);
        assert_eq!(game, before);
        assert_eq!(game.king_square(Color::White), sq(7, 4));
    }

    #[test]
    fn undo_inverts_every_legal_move() {
        let positions = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b - - 0 1",
        ];
        for fen in positions {
            let mut game = GameState::from_fen(fen).expect("FEN should parse");
            let moves = game.generate_legal_moves();
            let before = game.clone();
            for mv in moves {
                game.apply_move(mv);
                game.undo_move();
                assert_eq!(game, before, "{fen}: {mv} was not undone exactly");
            }
        }
    }

    #[test]
    fn undo_on_empty_log_is_a_no_op() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(game.undo_move(), None);
        assert_eq!(game, before);
    }

    #[test]
    fn apply_and_undo_clear_terminal_flags() {
        let mut game = GameState::new_game();
        game.checkmate = true;
        let mv = ChessMove::from_board(&game.board(), sq(7, 6), sq(5, 5)).expect("knight on g1");
        game.apply_move(mv);
        assert!(!game.is_checkmate());

        game.stalemate = true;
        game.undo_move();
        assert!(!game.is_stalemate());
    }
}
