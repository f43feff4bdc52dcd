//! Full legal move generation pipeline.
//!
//! Scans the board row-major, dispatches each piece of the mover to its
//! generator, then keeps only the candidates that do not leave the mover's
//! king attacked. Each candidate is checked by apply / probe / undo on the
//! live state, and the survivors are collected into a new vector.
//!
//! `generate_legal_moves` is also the only place the checkmate and stalemate
//! flags are written. Callers must re-run it after every `apply_move` or
//! `undo_move` before reading those flags.

use log::trace;

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::{ChessMove, MoveId};

impl GameState {
    /// Moves that follow piece movement rules for the side to move, without
    /// regard to check.
    pub fn generate_pseudo_legal_moves(&self) -> Vec<ChessMove> {
        self.pseudo_legal_moves_for(self.side_to_move)
    }

    pub(crate) fn pseudo_legal_moves_for(&self, side: Color) -> Vec<ChessMove> {
        let mut out = Vec::with_capacity(64);

        for (from, piece) in self.board.pieces() {
            if piece.color != side {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(&self.board, from, piece, &mut out),
                PieceKind::Knight => generate_knight_moves(&self.board, from, piece, &mut out),
                PieceKind::Bishop => generate_bishop_moves(&self.board, from, piece, &mut out),
                PieceKind::Rook => generate_rook_moves(&self.board, from, piece, &mut out),
                PieceKind::Queen => generate_queen_moves(&self.board, from, piece, &mut out),
                PieceKind::King => generate_king_moves(&self.board, from, piece, &mut out),
            }
        }

        out
    }

    /// Every move the side to move may legally play, in generation order.
    ///
    /// Updates the checkmate/stalemate flags for the current position.
    pub fn generate_legal_moves(&mut self) -> Vec<ChessMove> {
        let mover = self.side_to_move;
        let candidates = self.generate_pseudo_legal_moves();

        let mut legal = Vec::with_capacity(candidates.len());
        for mv in candidates {
            self.apply_move(mv);
            let exposes_king = self.is_square_attacked(self.king_square(mover), mover.opposite());
            self.undo_move();

            if exposes_king {
                trace!("rejecting {mv}: leaves the {mover} king attacked");
            } else {
                legal.push(mv);
            }
        }

        if legal.is_empty() {
            if self.is_in_check() {
                self.checkmate = true;
            } else {
                self.stalemate = true;
            }
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        legal
    }

    /// Look up the legal move from `from` to `to`.
    pub fn find_legal_move(&mut self, from: Square, to: Square) -> Result<ChessMove, ChessError> {
        let wanted = MoveId { from, to };
        self.generate_legal_moves()
            .into_iter()
            .find(|mv| mv.id() == wanted)
            .ok_or_else(|| ChessError::IllegalMove(format!("{from}{to}")))
    }

    /// Validate a move against the legal move list and play it.
    pub fn play_move(&mut self, from: Square, to: Square) -> Result<ChessMove, ChessError> {
        let mv = self.find_legal_move(from, to)?;
        self.apply_move(mv);
        Ok(mv)
    }
}
