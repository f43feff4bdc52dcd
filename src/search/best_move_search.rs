//! Search entry point and configuration.
//!
//! `find_best_move` dispatches to one of the three tree searches. All of them
//! walk the tree by make/undo on the caller's `GameState` and leave it equal to
//! its pre-call value (terminal flags end cleared).

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use rand::seq::IndexedRandom;

use crate::chess_errors::ChessError;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::search::minimax::minimax_search;
use crate::search::negamax::negamax_search;
use crate::search::negamax_alpha_beta::negamax_alpha_beta_search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the root. A depth of 0 still expands the root
    /// moves and scores them directly.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 2 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchAlgorithm {
    Minimax,
    Negamax,
    #[default]
    NegamaxAlphaBeta,
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchAlgorithm::Minimax => "minimax",
            SearchAlgorithm::Negamax => "negamax",
            SearchAlgorithm::NegamaxAlphaBeta => "alphabeta",
        };
        f.write_str(name)
    }
}

impl FromStr for SearchAlgorithm {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(SearchAlgorithm::Minimax),
            "negamax" => Ok(SearchAlgorithm::Negamax),
            "alphabeta" | "alpha-beta" => Ok(SearchAlgorithm::NegamaxAlphaBeta),
            _ => Err(ChessError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    /// From the perspective of the side to move at the root.
    pub score: i32,
    /// Number of positions scored by `score_board`.
    pub leaf_nodes: u64,
}

/// Pick a move for the side to move.
///
/// `legal_moves` must be the current legal move list; an empty list is
/// rejected with `ChessError::NoLegalMoves`. On success `best_move` is always
/// set.
pub fn find_best_move(
    game_state: &mut GameState,
    legal_moves: &[ChessMove],
    algorithm: SearchAlgorithm,
    config: SearchConfig,
) -> Result<SearchResult, ChessError> {
    if legal_moves.is_empty() {
        return Err(ChessError::NoLegalMoves);
    }

    let mut result = match algorithm {
        SearchAlgorithm::Minimax => minimax_search(game_state, legal_moves, config.depth),
        SearchAlgorithm::Negamax => negamax_search(game_state, legal_moves, config.depth),
        SearchAlgorithm::NegamaxAlphaBeta => {
            negamax_alpha_beta_search(game_state, legal_moves, config.depth)
        }
    };

    if result.best_move.is_none() {
        warn!("{algorithm} search returned no move; falling back to a random legal move");
        result.best_move = legal_moves.choose(&mut rand::rng()).copied();
    }

    debug!(
        "{algorithm} depth {} for {}: best {} score {} leaves {}",
        config.depth,
        game_state.side_to_move(),
        result
            .best_move
            .map_or_else(|| "none".to_owned(), |mv| mv.chess_notation()),
        result.score,
        result.leaf_nodes
    );

    Ok(result)
}
