//! King move and castling generation.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::color::Ply;
use crate::piece::Piece;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::mode::CastlingMode;
use super::sliders::{ALL_DIRECTIONS, gen_rays};

/// Generate king steps, plus castling destinations when `T` includes them.
pub(super) fn gen_king<T: CastlingMode>(board: &Board, king: &Piece, ply: Ply) -> SquareSet {
    let mut targets = gen_rays(board, king, &ALL_DIRECTIONS, 1);

    if T::INCLUDE_CASTLING && !king.has_moved {
        for side in CastleSide::ALL {
            if let Some(dst) = castling_destination(board, king, side, ply) {
                targets.insert(dst);
            }
        }
    }

    targets
}

/// Return the square the king lands on when castling toward `side`, if
/// castling there is currently allowed.
///
/// Requires an unmoved rook of the king's color in the corner, empty squares
/// strictly between king and rook, and no attack on the king's square, the
/// square it crosses, or the square it lands on.
fn castling_destination(board: &Board, king: &Piece, side: CastleSide, ply: Ply) -> Option<Square> {
    let rook = board.castling_rook(king, side)?;

    let mut between = king.square.offset(side.direction(), 0)?;
    while between != rook.square {
        if board.is_occupied(between) {
            return None;
        }
        between = between.offset(side.direction(), 0)?;
    }

    let transit = king.square.offset(side.direction(), 0)?;
    let dst = transit.offset(side.direction(), 0)?;
    let them = !king.color;
    if [king.square, transit, dst]
        .into_iter()
        .any(|sq| board.is_square_attacked(sq, them, ply))
    {
        return None;
    }

    Some(dst)
}
