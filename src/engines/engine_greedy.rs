//! One-ply greedy engine.
//!
//! Plays each candidate, scores the resulting position for the mover and keeps
//! the best. Candidates are shuffled first so equal moves are not always
//! resolved toward the first square on the board.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::{score_material, CHECKMATE, SCORE_INFINITY, STALEMATE};

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Score of the position after `mv`, from the mover's perspective.
    fn score_after(game_state: &mut GameState, mv: ChessMove) -> i32 {
        let mover = game_state.side_to_move();
        game_state.apply_move(mv);
        let replies = game_state.generate_legal_moves();
        let score = if replies.is_empty() && game_state.is_checkmate() {
            CHECKMATE
        } else if replies.is_empty() {
            STALEMATE
        } else {
            mover.turn_multiplier() * score_material(&game_state.board())
        };
        game_state.undo_move();
        score
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Mailbox Greedy"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        legal_moves: &[ChessMove],
    ) -> Result<EngineOutput, ChessError> {
        if legal_moves.is_empty() {
            return Err(ChessError::NoLegalMoves);
        }

        let mut candidates = legal_moves.to_vec();
        candidates.shuffle(&mut self.rng);

        let mut best_score = -SCORE_INFINITY;
        let mut best_move = None;
        for mv in candidates {
            let score = Self::score_after(game_state, mv);
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));
        out.info_lines
            .push(format!("info string greedy_engine score {best_score}"));
        out.best_move = best_move;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::game_state::GameState;

    fn greedy_choice(fen: &str, seed: u64) -> String {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let legal = game.generate_legal_moves();
        let before = game.clone();

        let out = GreedyEngine::with_seed(seed)
            .choose_move(&mut game, &legal)
            .expect("position has legal moves");
        assert_eq!(game, before, "greedy engine must restore the position");

        out.best_move
            .map(|mv| mv.chess_notation())
            .expect("greedy engine should pick a move")
    }

    #[test]
    fn greedy_captures_the_hanging_queen() {
        for seed in 0..5 {
            assert_eq!(greedy_choice("4k3/8/8/3q4/8/2N5/8/4K3 w - - 0 1", seed), "c3d5");
        }
    }

    #[test]
    fn greedy_plays_for_black_too() {
        assert_eq!(greedy_choice("4k3/8/8/8/3q4/8/8/3RK3 b - - 0 1", 3), "d4d1");
    }

    #[test]
    fn greedy_prefers_mate_over_material() {
        // Rxh7 wins a pawn, but Ra8 mates.
        assert_eq!(greedy_choice("6kr/5ppp/8/8/8/8/8/R5KR w - - 0 1", 11), "a1a8");
    }
}
