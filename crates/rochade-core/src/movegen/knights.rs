//! Knight move generation.

use crate::board::Board;
use crate::piece::Piece;
use crate::square_set::SquareSet;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Knight jumps that land on the board and not on a piece of the knight's color.
pub(super) fn gen_knight(board: &Board, knight: &Piece) -> SquareSet {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(df, dr)| knight.square.offset(df, dr))
        .filter(|&dst| board.color_at(dst) != Some(knight.color))
        .collect()
}
