//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type for the crate. The rules core
//! (`apply_move`, `undo_move`, move generation) is total and never returns it;
//! errors come from the edges: parsing notation and FEN, validating
//! user-proposed moves, and calling search or engines on a terminal position.
//!
//! Usage guidelines:
//! - Parsing variants (`InvalidAlgebraicSquare`, `InvalidMoveNotation`,
//!   `InvalidFenToken`, `InvalidFenForm`) are recoverable and suitable for
//!   showing to end users.
//! - `IllegalMove` means a proposed move is not in the current legal move list.
//! - `NoLegalMoves` signals a precondition violation: search was asked to pick
//!   a move in a checkmate or stalemate position.

use thiserror::Error;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A square string was not a file `a..=h` followed by a rank `1..=8`.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicSquare(String),

    /// A move string was not four characters of two algebraic squares.
    #[error("invalid move notation: {0:?}")]
    InvalidMoveNotation(String),

    /// Unexpected character in the FEN piece-placement field.
    #[error("invalid FEN token '{0}'")]
    InvalidFenToken(char),

    /// FEN string had malformed structure.
    #[error("malformed FEN string: {0}")]
    InvalidFenForm(String),

    /// A position must hold exactly one king per side.
    ///
    /// Payload: (side, number of kings found)
    #[error("position must contain exactly one {0} king, found {1}")]
    KingCount(Color, usize),

    /// The proposed move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The side to move has no legal moves (checkmate or stalemate).
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("unknown search algorithm: {0:?}")]
    UnknownAlgorithm(String),

    #[error("unknown player kind: {0:?}")]
    UnknownPlayerKind(String),
}
