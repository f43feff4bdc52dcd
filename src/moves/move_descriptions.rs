//! Move value type and move identity.
//!
//! A `ChessMove` records everything `undo_move` needs to restore the board:
//! source, destination, the piece that moved and the piece (if any) that was
//! captured. Equality and hashing go through `MoveId`, so two independently
//! generated moves between the same squares compare equal.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::{Board, Piece, Square};

/// Identity of a move: the `(from, to)` square pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveId {
    pub from: Square,
    pub to: Square,
}

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
}

impl ChessMove {
    /// Build a move from the current contents of `board`.
    ///
    /// Returns `None` when the source square is empty.
    pub fn from_board(board: &Board, from: Square, to: Square) -> Option<Self> {
        let piece_moved = board.piece_at(from)?;
        Some(Self {
            from,
            to,
            piece_moved,
            piece_captured: board.piece_at(to),
        })
    }

    #[inline]
    pub fn id(&self) -> MoveId {
        MoveId {
            from: self.from,
            to: self.to,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Four-character coordinate notation, e.g. `"e2e4"`.
    pub fn chess_notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::ChessMove;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square on board")
    }

    #[test]
    fn moves_with_same_squares_are_equal_regardless_of_pieces() {
        let a = ChessMove {
            from: sq(6, 4),
            to: sq(4, 4),
            piece_moved: Piece::new(Color::White, PieceKind::Pawn),
            piece_captured: None,
        };
        let b = ChessMove {
            piece_captured: Some(Piece::new(Color::Black, PieceKind::Knight)),
            ..a
        };
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b), "same move id must hash identically");
    }

    #[test]
    fn different_destinations_are_different_moves() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let single = ChessMove {
            from: sq(6, 4),
            to: sq(5, 4),
            piece_moved: pawn,
            piece_captured: None,
        };
        let double = ChessMove {
            to: sq(4, 4),
            ..single
        };
        assert_ne!(single, double);
        assert_ne!(single.id(), double.id());
    }

    #[test]
    fn notation_is_file_rank_file_rank() {
        let mv = ChessMove {
            from: sq(6, 4),
            to: sq(4, 4),
            piece_moved: Piece::new(Color::White, PieceKind::Pawn),
            piece_captured: None,
        };
        assert_eq!(mv.chess_notation(), "e2e4");
        assert_eq!(mv.to_string(), "e2e4");
    }
}
