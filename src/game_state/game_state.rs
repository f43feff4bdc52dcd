//! Core mutable game state.
//!
//! `GameState` is the central model for the engine. It stores the mailbox
//! board, whose turn it is, the move log used by make/unmake, the tracked king
//! squares and the checkmate/stalemate flags produced by legal move
//! generation.
//!
//! Only the rules engine writes to these fields. Board mutation happens in
//! `move_generation::legal_move_apply`; terminal flags are written by
//! `move_generation::legal_move_generator`.
//!
//! Search walks the game tree by applying and undoing moves on one shared
//! instance. That makes a `GameState` unsafe to share between concurrent
//! searches; parallel search needs a clone per worker.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::{starting_piece, BLACK_KING_START, WHITE_KING_START};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) move_log: Vec<ChessMove>,
    pub(crate) king_squares: [Square; 2],

    // Valid only right after `generate_legal_moves`; cleared by apply/undo.
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new_game() -> Self {
        let mut board = Board::default();
        for square in Square::all() {
            board.set(square, starting_piece(square));
        }

        Self {
            board,
            side_to_move: Color::White,
            move_log: Vec::new(),
            king_squares: [WHITE_KING_START, BLACK_KING_START],
            checkmate: false,
            stalemate: false,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Build a position from explicit placements.
    ///
    /// Fails unless each side has exactly one king; later placements on the
    /// same square overwrite earlier ones.
    pub fn from_placements(
        placements: &[(Square, Piece)],
        side_to_move: Color,
    ) -> Result<Self, ChessError> {
        let mut board = Board::default();
        for &(square, piece) in placements {
            board.set(square, Some(piece));
        }
        Self::from_board(board, side_to_move)
    }

    pub(crate) fn from_board(board: Board, side_to_move: Color) -> Result<Self, ChessError> {
        let white_king = find_single_king(&board, Color::White)?;
        let black_king = find_single_king(&board, Color::Black)?;

        Ok(Self {
            board,
            side_to_move,
            move_log: Vec::new(),
            king_squares: [white_king, black_king],
            checkmate: false,
            stalemate: false,
        })
    }

    /// Read-only snapshot of the board.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn move_log(&self) -> &[ChessMove] {
        &self.move_log
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Checkmate flag from the most recent `generate_legal_moves` call.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Stalemate flag from the most recent `generate_legal_moves` call.
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }
}

fn find_single_king(board: &Board, color: Color) -> Result<Square, ChessError> {
    let kings: Vec<Square> = board
        .pieces()
        .filter(|(_, piece)| *piece == Piece::new(color, PieceKind::King))
        .map(|(square, _)| square)
        .collect();

    match kings.as_slice() {
        [square] => Ok(*square),
        _ => Err(ChessError::KingCount(color, kings.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square on board")
    }

    #[test]
    fn new_game_tracks_both_kings_and_white_to_move() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.king_square(Color::White), sq(7, 4));
        assert_eq!(game.king_square(Color::Black), sq(0, 4));
        assert!(game.move_log().is_empty());
        assert!(!game.is_checkmate());
        assert!(!game.is_stalemate());
    }

    #[test]
    fn new_game_has_standard_back_ranks() {
        let game = GameState::new_game();
        assert_eq!(
            game.piece_at(sq(0, 3)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            game.piece_at(sq(7, 3)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            game.piece_at(sq(6, 0)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(game.piece_at(sq(4, 4)), None);
        assert_eq!(game.board().pieces().count(), 32);
    }

    #[test]
    fn placements_require_one_king_per_side() {
        let white_king = (sq(7, 4), Piece::new(Color::White, PieceKind::King));
        let black_king = (sq(0, 4), Piece::new(Color::Black, PieceKind::King));

        let err = GameState::from_placements(&[white_king], Color::White)
            .expect_err("missing black king must be rejected");
        assert_eq!(err, ChessError::KingCount(Color::Black, 0));

        let extra = (sq(7, 0), Piece::new(Color::White, PieceKind::King));
        let err = GameState::from_placements(&[white_king, extra, black_king], Color::White)
            .expect_err("two white kings must be rejected");
        assert_eq!(err, ChessError::KingCount(Color::White, 2));

        let game = GameState::from_placements(&[white_king, black_king], Color::Black)
            .expect("bare kings are a valid position");
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.king_square(Color::Black), sq(0, 4));
    }
}
