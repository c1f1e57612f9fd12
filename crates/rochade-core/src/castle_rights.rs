//! Castling sides and castling rights derived from piece history.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, queen side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::QueenSide, CastleSide::KingSide];

    /// File the participating rook starts on.
    #[inline]
    pub const fn rook_file(self) -> File {
        match self {
            CastleSide::KingSide => File::FileH,
            CastleSide::QueenSide => File::FileA,
        }
    }

    /// File the king lands on.
    #[inline]
    pub const fn king_destination_file(self) -> File {
        match self {
            CastleSide::KingSide => File::FileG,
            CastleSide::QueenSide => File::FileC,
        }
    }

    /// File the rook lands on.
    #[inline]
    pub const fn rook_destination_file(self) -> File {
        match self {
            CastleSide::KingSide => File::FileF,
            CastleSide::QueenSide => File::FileD,
        }
    }

    /// Direction the king travels along its rank.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// The side a king displacement of `file_delta` files points toward.
    #[inline]
    pub const fn from_king_step(file_delta: i8) -> CastleSide {
        if file_delta > 0 { CastleSide::KingSide } else { CastleSide::QueenSide }
    }

    /// Algebraic notation for castling to this side.
    pub const fn san(self) -> &'static str {
        match self {
            CastleSide::KingSide => "O-O",
            CastleSide::QueenSide => "O-O-O",
        }
    }
}

/// Castling rights encoded as a 4-bit field: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
///
/// Rights are never stored on the board. [`Board::castle_rights`] recomputes
/// them from whether each king and corner rook has moved.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return rights with the flag for `color` and `side` added.
    #[inline]
    pub const fn with(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 | Self::flag(color, side))
    }

    /// Check whether a specific color and side can castle.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        (self.0 & Self::flag(color, side)) != 0
    }

    #[inline]
    const fn flag(color: Color, side: CastleSide) -> u8 {
        let side_bit: u8 = match side {
            CastleSide::KingSide => 0,
            CastleSide::QueenSide => 1,
        };
        1u8 << (color as u8 * 2 + side_bit)
    }
}

impl fmt::Display for CastleRights {
    /// FEN-style letters (`KQkq`), or `-` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (color, side, c) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.has(color, side) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}

impl Board {
    /// Return the unmoved rook `king` could castle with toward `side`.
    ///
    /// The rook must be of the king's color, stand on the king's rank in the
    /// corner file for `side`, and never have moved.
    pub fn castling_rook(&self, king: &Piece, side: CastleSide) -> Option<Piece> {
        self.piece_at(king.square.with_file(side.rook_file()))
            .filter(|r| r.kind == PieceKind::Rook && r.color == king.color && !r.has_moved)
    }

    /// Derive the castling rights of both sides from piece history alone.
    ///
    /// A right survives while the king and the corner rook are unmoved. Blocked
    /// or attacked squares do not remove a right; they only make castling
    /// temporarily illegal.
    pub fn castle_rights(&self) -> CastleRights {
        let mut rights = CastleRights::NONE;
        for color in Color::ALL {
            let Some(king) = self
                .pieces_of(color)
                .find(|p| p.kind == PieceKind::King && !p.has_moved)
            else {
                continue;
            };
            for side in CastleSide::ALL {
                if self.castling_rook(&king, side).is_some() {
                    rights = rights.with(color, side);
                }
            }
        }
        rights
    }
}
