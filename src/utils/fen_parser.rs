//! FEN-to-GameState parser.
//!
//! Reads piece placement and side to move from a Forsyth-Edwards Notation
//! string. The rules engine has no castling or en passant, so those fields
//! must be `-`. The move clocks are optional and only checked for being
//! numeric.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{Board, Color, Piece, Square, BOARD_SIZE};
use crate::game_state::game_state::GameState;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| form_error("missing board layout"))?;
    let side_part = parts
        .next()
        .ok_or_else(|| form_error("missing side-to-move"))?;

    if let Some(castling_part) = parts.next() {
        if castling_part != "-" {
            return Err(form_error(format!(
                "castling rights are not supported: {castling_part}"
            )));
        }
    }
    if let Some(en_passant_part) = parts.next() {
        if en_passant_part != "-" {
            return Err(form_error(format!(
                "en passant squares are not supported: {en_passant_part}"
            )));
        }
    }
    for clock_part in parts.by_ref().take(2) {
        clock_part
            .parse::<u16>()
            .map_err(|_| form_error(format!("invalid move clock: {clock_part}")))?;
    }
    if parts.next().is_some() {
        return Err(form_error("FEN has extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    GameState::from_board(board, side_to_move)
}

fn form_error(message: impl Into<String>) -> ChessError {
    ChessError::InvalidFenForm(message.into())
}

fn parse_board(board_part: &str) -> Result<Board, ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != usize::from(BOARD_SIZE) {
        return Err(form_error("board layout must contain 8 ranks"));
    }

    let mut board = Board::default();
    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in (0u8..).zip(ranks) {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFenToken(ch));
                }
                col += empty_count as u8;
                if col > BOARD_SIZE {
                    return Err(form_error(format!("rank {rank_str} has too many files")));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(ChessError::InvalidFenToken(ch))?;
            let square = Square::new(row, col)
                .ok_or_else(|| form_error(format!("rank {rank_str} has too many files")))?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(form_error(format!("rank {rank_str} does not sum to 8 files")));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(form_error(format!("invalid side-to-move field: {side_part}"))),
    }
}
