//! Engine abstraction layer used by the interactive loop and match harness.
//!
//! Defines the common output payload so different move-choosing strategies
//! can be selected at runtime behind a single trait interface.

use crate::chess_errors::ChessError;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick one of `legal_moves`, which must be the current legal move list
    /// of `game_state`. Engines may search by make/undo but must hand the
    /// state back unchanged. An empty list is `ChessError::NoLegalMoves`.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        legal_moves: &[ChessMove],
    ) -> Result<EngineOutput, ChessError>;
}
