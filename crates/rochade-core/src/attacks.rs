//! Attack and check queries.

use crate::board::Board;
use crate::color::{Color, Ply};
use crate::movegen::attacked_by;
use crate::square::Square;
use crate::square_set::SquareSet;

impl Board {
    /// Every square attacked by a piece of `by_color` on `ply`.
    pub fn attacked_squares(&self, by_color: Color, ply: Ply) -> SquareSet {
        let mut attacked = SquareSet::EMPTY;
        for piece in self.pieces_of(by_color) {
            attacked |= attacked_by(self, &piece, ply);
        }
        attacked
    }

    /// Return `true` if `sq` is attacked by any piece of `by_color`.
    ///
    /// Castling never counts as an attack, so this query can be asked while
    /// generating castling moves for the other side.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color, ply: Ply) -> bool {
        self.pieces_of(by_color)
            .any(|piece| attacked_by(self, &piece, ply).contains(sq))
    }

    /// Return `true` if the king of `color` is attacked.
    ///
    /// # Panics
    ///
    /// Panics if the board has no king of `color`.
    pub fn is_in_check(&self, color: Color, ply: Ply) -> bool {
        self.is_square_attacked(self.king_square(color), !color, ply)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn starting_position_attacks() {
        let board = Board::starting_position();
        let white = board.attacked_squares(Color::White, 0);
        // Every third-rank square is covered by a pawn.
        for sq in ["a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3"] {
            assert!(white.contains(Square::from_algebraic(sq).unwrap()), "{sq} should be attacked");
        }
        assert!(!white.contains(Square::E4));
        assert!(!board.is_square_attacked(Square::E5, Color::White, 0));
        assert!(board.is_square_attacked(Square::F6, Color::Black, 1));
    }

    #[test]
    fn not_in_check_at_start() {
        let board = Board::starting_position();
        assert!(!board.is_in_check(Color::White, 0));
        assert!(!board.is_in_check(Color::Black, 0));
    }

    #[test]
    fn rook_gives_check_through_empty_file() {
        let board: Board = "4r1k1/8/8/8/8/8/8/4K3".parse().unwrap();
        assert!(board.is_in_check(Color::White, 0));
        assert!(!board.is_in_check(Color::Black, 0));
    }

    #[test]
    fn blocked_ray_is_not_check() {
        let board: Board = "4r1k1/8/8/8/8/8/4P3/4K3".parse().unwrap();
        assert!(!board.is_in_check(Color::White, 0));
    }

    #[test]
    fn pawn_checks_diagonally_only() {
        let diagonal: Board = "4k3/8/8/8/8/8/3p4/4K3".parse().unwrap();
        assert!(diagonal.is_in_check(Color::White, 1));
        let in_front: Board = "4k3/8/8/8/8/8/4p3/4K3".parse().unwrap();
        assert!(!in_front.is_in_check(Color::White, 1));
    }

    #[test]
    fn adjacent_kings_attack_each_other() {
        let board: Board = "8/8/8/8/8/3k4/8/4K3".parse().unwrap();
        assert!(board.is_square_attacked(Square::E2, Color::Black, 0));
        assert!(board.is_square_attacked(Square::D2, Color::White, 0));
    }
}
