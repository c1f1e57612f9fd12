//! A piece on the board, with the history flags the rules depend on.

use std::fmt;

use crate::color::{Color, Ply};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A colored piece standing on a square.
///
/// Pieces are values: moving one produces a new `Piece` via [`Piece::moved_to`].
/// `has_moved` gates castling and the pawn double step. `double_step_ply`
/// records the ply on which a pawn last advanced two ranks; en passant against
/// it is only possible on the ply right after.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub has_moved: bool,
    pub double_step_ply: Option<Ply>,
}

impl Piece {
    /// Create an unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Piece {
        Piece {
            kind,
            color,
            square,
            has_moved: false,
            double_step_ply: None,
        }
    }

    /// Return the same piece marked as having moved.
    #[inline]
    pub fn marked_moved(mut self) -> Piece {
        self.has_moved = true;
        self
    }

    /// Return this piece relocated to `dst` on `ply`.
    ///
    /// The result has `has_moved` set; a pawn advancing two ranks also
    /// records `ply` as its double-step ply.
    pub fn moved_to(self, dst: Square, ply: Ply) -> Piece {
        let double_step = self.kind == PieceKind::Pawn
            && self.square.rank().delta_to(dst.rank()).abs() == 2;
        Piece {
            square: dst,
            has_moved: true,
            double_step_ply: if double_step { Some(ply) } else { self.double_step_ply },
            ..self
        }
    }

    /// Return `true` if this pawn may be captured en passant on `ply`.
    #[inline]
    pub fn en_passant_target_on(&self, ply: Ply) -> bool {
        self.kind == PieceKind::Pawn && self.double_step_ply.is_some_and(|p| p + 1 == ply)
    }

    /// Return `true` if this is a pawn standing on its promotion rank.
    #[inline]
    pub fn is_promoting(&self) -> bool {
        self.kind == PieceKind::Pawn && self.square.rank() == self.color.promotion_rank()
    }

    /// Return the FEN character: uppercase for White, lowercase for Black.
    pub fn fen_char(&self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.square)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.fen_char(), self.square)?;
        if self.has_moved {
            write!(f, "*")?;
        }
        if let Some(ply) = self.double_step_ply {
            write!(f, "(ds {ply})")?;
        }
        Ok(())
    }
}
