use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;

impl GameState {
    /// True if any pseudo-legal move of `attacker` lands on `square`.
    ///
    /// Pawn pushes never count against an occupied square (they need it
    /// empty), so for occupied squares such as a king's this is exactly the
    /// attack relation.
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        self.pseudo_legal_moves_for(attacker)
            .iter()
            .any(|mv| mv.to == square)
    }

    /// True if the side to move has its king attacked.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        let side = self.side_to_move;
        self.is_square_attacked(self.king_square(side), side.opposite())
    }
}
