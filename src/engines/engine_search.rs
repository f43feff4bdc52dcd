//! Fixed-depth tree search engine.
//!
//! Thin `Engine` wrapper over `search::find_best_move`; the algorithm and
//! depth are chosen at construction.

use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::search::best_move_search::{find_best_move, SearchAlgorithm, SearchConfig};

pub struct SearchEngine {
    algorithm: SearchAlgorithm,
    config: SearchConfig,
    name: String,
}

impl SearchEngine {
    pub fn new(algorithm: SearchAlgorithm, config: SearchConfig) -> Self {
        Self {
            algorithm,
            config,
            name: format!("Mailbox {algorithm} d{}", config.depth),
        }
    }

    #[inline]
    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchAlgorithm::default(), SearchConfig::default())
    }
}

impl Engine for SearchEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        legal_moves: &[ChessMove],
    ) -> Result<EngineOutput, ChessError> {
        let result = find_best_move(game_state, legal_moves, self.algorithm, self.config)?;

        Ok(EngineOutput {
            best_move: result.best_move,
            info_lines: vec![format!(
                "info string search_engine {} depth {} score {} leaves {}",
                self.algorithm, self.config.depth, result.score, result.leaf_nodes
            )],
        })
    }
}
