//! Pawn move generation.

use crate::board::Board;
use crate::color::Ply;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Generate pseudo-legal pawn moves on `ply`.
///
/// Pushes need empty squares, the double step also needs an unmoved pawn.
/// Diagonal moves need an enemy piece on the target, or an enemy pawn beside
/// this one that double-stepped on the previous ply.
pub(super) fn gen_pawn(board: &Board, pawn: &Piece, ply: Ply) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let forward = pawn.color.forward();

    if let Some(single) = pawn.square.offset(0, forward).filter(|&sq| !board.is_occupied(sq)) {
        targets.insert(single);
        if !pawn.has_moved {
            if let Some(double) = single.offset(0, forward).filter(|&sq| !board.is_occupied(sq)) {
                targets.insert(double);
            }
        }
    }

    for dst in pawn_attacks(pawn) {
        let capturable = match board.color_at(dst) {
            Some(color) => color != pawn.color,
            None => en_passant_victim(board, pawn, dst, ply).is_some(),
        };
        if capturable {
            targets.insert(dst);
        }
    }

    targets
}

/// The two diagonal squares in front of a pawn, whatever stands on them.
pub(crate) fn pawn_attacks(pawn: &Piece) -> SquareSet {
    let forward = pawn.color.forward();
    [-1, 1]
        .into_iter()
        .filter_map(|df| pawn.square.offset(df, forward))
        .collect()
}

/// Return the enemy pawn `pawn` would capture by moving diagonally onto the
/// empty square `dst` on `ply`.
///
/// The victim stands beside the capturing pawn, on the destination file, and
/// must have double-stepped on the ply just before.
pub(crate) fn en_passant_victim(board: &Board, pawn: &Piece, dst: Square, ply: Ply) -> Option<Piece> {
    board
        .piece_at(dst.with_rank(pawn.square.rank()))
        .filter(|victim| {
            victim.kind == PieceKind::Pawn
                && victim.color != pawn.color
                && victim.en_passant_target_on(ply)
        })
}
