//! Perft: count leaf nodes of the legal move tree to a fixed depth.
//!
//! Walks the tree with make/undo on the caller's state, the same way search
//! does, so it doubles as a check that undo restores every position.

use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub checkmates: u64,
    pub stalemates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checkmates += rhs.checkmates;
        self.stalemates += rhs.stalemates;
    }
}

/// Leaf node count at `depth` plies.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game_state.generate_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        game_state.apply_move(mv);
        nodes += perft(game_state, depth - 1);
        game_state.undo_move();
    }
    nodes
}

/// Perft with leaf classification (captures and terminal positions).
pub fn perft_detailed(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game_state.generate_legal_moves() {
        game_state.apply_move(mv);
        if depth == 1 {
            let replies = game_state.generate_legal_moves();
            total.merge(PerftCounts {
                nodes: 1,
                captures: u64::from(mv.is_capture()),
                checkmates: u64::from(replies.is_empty() && game_state.is_checkmate()),
                stalemates: u64::from(replies.is_empty() && game_state.is_stalemate()),
            });
        } else {
            total.merge(perft_detailed(game_state, depth - 1));
        }
        game_state.undo_move();
    }
    total
}
