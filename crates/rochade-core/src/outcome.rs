//! Game-end detection: checkmate and stalemate.

use std::fmt;

use crate::board::Board;
use crate::color::{Color, Ply};
use crate::movegen::has_legal_move;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The side to move is in check with no legal move.
    Checkmate { winner: Color },
    /// The side to move is not in check but has no legal move. A draw.
    Stalemate,
}

impl Outcome {
    /// Return the winning side, if the game was decided.
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            Outcome::Stalemate => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            Outcome::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Return `true` if `color` is in check and has no legal move.
    pub fn is_checkmate(&self, color: Color, ply: Ply) -> bool {
        self.is_in_check(color, ply) && !has_legal_move(self, color, ply)
    }

    /// Return `true` if `color` is not in check but has no legal move.
    pub fn is_stalemate(&self, color: Color, ply: Ply) -> bool {
        !self.is_in_check(color, ply) && !has_legal_move(self, color, ply)
    }

    /// Return the outcome if the side to move on `ply` cannot move.
    pub fn outcome(&self, ply: Ply) -> Option<Outcome> {
        let color = Color::to_move(ply);
        if has_legal_move(self, color, ply) {
            return None;
        }
        if self.is_in_check(color, ply) {
            Some(Outcome::Checkmate { winner: !color })
        } else {
            Some(Outcome::Stalemate)
        }
    }
}
