//! Ray walking for rooks, bishops, queens and the king's single steps.

use crate::board::Board;
use crate::piece::Piece;
use crate::square_set::SquareSet;

/// File and rank deltas of the four orthogonal rays.
pub(super) const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// File and rank deltas of the four diagonal rays.
pub(super) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// All eight directions.
pub(super) const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// Walk each ray from the piece's square for at most `max_distance` steps.
///
/// A ray stops before a piece of the mover's color, and stops on (including)
/// a piece of the other color. The board edge ends it too.
pub(super) fn gen_rays(
    board: &Board,
    piece: &Piece,
    directions: &[(i8, i8)],
    max_distance: u8,
) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    for &(df, dr) in directions {
        let mut current = piece.square;
        for _ in 0..max_distance {
            let Some(next) = current.offset(df, dr) else {
                break;
            };
            match board.color_at(next) {
                Some(color) if color == piece.color => break,
                Some(_) => {
                    targets.insert(next);
                    break;
                }
                None => targets.insert(next),
            }
            current = next;
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::{ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL, gen_rays};
    use crate::board::Board;
    use crate::square::Square;

    #[test]
    fn rook_on_empty_file_and_rank() {
        let board: Board = "4k3/8/8/8/3R4/8/8/4K3".parse().unwrap();
        let rook = board.piece_at(Square::D4).unwrap();
        let targets = gen_rays(&board, &rook, &ORTHOGONAL, 7);
        assert_eq!(targets.count(), 14);
        assert!(targets.contains(Square::D8));
        assert!(targets.contains(Square::A4));
    }

    #[test]
    fn ray_stops_before_own_piece_and_on_enemy() {
        // White bishop c1 blocked by b2 pawn; the d2 pawn is gone, e3 holds a black knight.
        let board: Board = "4k3/8/8/8/8/4n3/1P6/2B1K3".parse().unwrap();
        let bishop = board.piece_at(Square::C1).unwrap();
        let targets = gen_rays(&board, &bishop, &DIAGONAL, 7);
        assert!(!targets.contains(Square::B2), "own pawn blocks");
        assert!(targets.contains(Square::D2));
        assert!(targets.contains(Square::E3), "enemy knight is capturable");
        assert!(!targets.contains(Square::F4), "ray ends on the capture");
        assert_eq!(targets.count(), 2);
    }

    #[test]
    fn single_step_from_corner() {
        let board: Board = "4k3/8/8/8/8/8/8/K7".parse().unwrap();
        let king = board.piece_at(Square::A1).unwrap();
        let targets = gen_rays(&board, &king, &ALL_DIRECTIONS, 1);
        assert_eq!(targets.count(), 3);
    }
}
