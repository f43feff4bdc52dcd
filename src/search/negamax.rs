//! Negamax: every node maximizes the negated child score from its own
//! perspective.

use log::trace;

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::search::best_move_search::SearchResult;
use crate::search::board_scoring::{score_board, SCORE_INFINITY};

pub fn negamax_search(
    game_state: &mut GameState,
    legal_moves: &[ChessMove],
    depth: u8,
) -> SearchResult {
    let mut leaf_nodes = 0u64;
    let mut best_move = None;
    let mut best_score = -SCORE_INFINITY;

    for &mv in legal_moves {
        game_state.apply_move(mv);
        let replies = game_state.generate_legal_moves();
        let score = -negamax(game_state, &replies, depth.saturating_sub(1), &mut leaf_nodes);
        game_state.undo_move();

        trace!("negamax root {mv}: {score}");

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }

    SearchResult {
        best_move,
        score: best_score,
        leaf_nodes,
    }
}

fn negamax(
    game_state: &mut GameState,
    legal_moves: &[ChessMove],
    depth: u8,
    leaf_nodes: &mut u64,
) -> i32 {
    if depth == 0 || legal_moves.is_empty() {
        *leaf_nodes += 1;
        return game_state.side_to_move().turn_multiplier() * score_board(game_state);
    }

    let mut best = -SCORE_INFINITY;
    for &mv in legal_moves {
        game_state.apply_move(mv);
        let replies = game_state.generate_legal_moves();
        let score = -negamax(game_state, &replies, depth - 1, leaf_nodes);
        game_state.undo_move();

        best = best.max(score);
    }

    best
}
