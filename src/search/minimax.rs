//! Plain minimax over white-relative scores.
//!
//! White nodes maximize and black nodes minimize, decided by the actual side
//! to move at each node.

use log::trace;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::search::best_move_search::SearchResult;
use crate::search::board_scoring::{score_board, SCORE_INFINITY};

/// Search `legal_moves` of the root position to `depth` plies.
///
/// The returned score is converted to the root side-to-move perspective so it
/// compares directly with the negamax variants.
pub fn minimax_search(
    game_state: &mut GameState,
    legal_moves: &[ChessMove],
    depth: u8,
) -> SearchResult {
    let root_side = game_state.side_to_move();
    let maximizing = root_side == Color::White;
    let mut leaf_nodes = 0u64;
    let mut best_move = None;
    let mut best_score = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };

    for &mv in legal_moves {
        game_state.apply_move(mv);
        let replies = game_state.generate_legal_moves();
        let score = minimax(game_state, &replies, depth.saturating_sub(1), &mut leaf_nodes);
        game_state.undo_move();

        trace!("minimax root {mv}: {score}");

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(mv);
        }
    }

    SearchResult {
        best_move,
        score: best_score * root_side.turn_multiplier(),
        leaf_nodes,
    }
}

fn minimax(
    game_state: &mut GameState,
    legal_moves: &[ChessMove],
    depth: u8,
    leaf_nodes: &mut u64,
) -> i32 {
    if depth == 0 || legal_moves.is_empty() {
        *leaf_nodes += 1;
        return score_board(game_state);
    }

    let maximizing = game_state.side_to_move() == Color::White;
    let mut best = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };

    for &mv in legal_moves {
        game_state.apply_move(mv);
        let replies = game_state.generate_legal_moves();
        let score = minimax(game_state, &replies, depth - 1, leaf_nodes);
        game_state.undo_move();

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
