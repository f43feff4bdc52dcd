use crate::game_state::chess_types::{Board, Color, Square, BOARD_SIZE};
use crate::game_state::game_state::GameState;

/// FEN for the current position. Castling and en passant are always `-`;
/// the fullmove number is derived from the move log.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board());
    let side_to_move = match game_state.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let fullmove_number = game_state.move_log().len() / 2 + 1;

    format!("{board} {side_to_move} - - 0 {fullmove_number}")
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE {
        let mut empty_count = 0u8;

        for col in 0..BOARD_SIZE {
            match Square::new(row, col).and_then(|sq| board.piece_at(sq)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row + 1 < BOARD_SIZE {
            out.push('/');
        }
    }

    out
}
