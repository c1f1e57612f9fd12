//! The board: a mapping from squares to pieces.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Back-rank layout from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement, one slot per square.
///
/// `Board` is a plain value: every move produces a new board and leaves the
/// original untouched, so simulated positions never alias the one in play.
/// Side to move and castling rights are not stored; they follow from the ply
/// counter and from each piece's `has_moved` flag.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
                board.put(Piece::new(kind, color, Square::new(file, color.back_rank())));
                board.put(Piece::new(PieceKind::Pawn, color, Square::new(file, color.pawn_rank())));
            }
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.squares[sq.index()].map(|p| p.color)
    }

    /// Iterate over every piece on the board, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().filter_map(|slot| *slot)
    }

    /// Iterate over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    /// All occupied squares.
    pub fn occupied(&self) -> SquareSet {
        self.pieces().map(|p| p.square).collect()
    }

    /// Squares occupied by one color.
    pub fn side(&self, color: Color) -> SquareSet {
        self.pieces_of(color).map(|p| p.square).collect()
    }

    /// Return the square of the king of `color`, if there is one.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.square)
    }

    /// Return the square of the king for the given side.
    ///
    /// # Panics
    ///
    /// Panics if the board has no king for the given color (invalid board state).
    pub fn king_square(&self, color: Color) -> Square {
        self.find_king(color)
            .expect("board must have a king for each side")
    }

    /// Return a copy of this board with `piece` placed on its square,
    /// replacing whatever stood there.
    #[must_use]
    pub fn with_piece(&self, piece: Piece) -> Board {
        let mut b = *self;
        b.put(piece);
        b
    }

    /// Return a copy of this board with `sq` emptied.
    #[must_use]
    pub fn without_piece(&self, sq: Square) -> Board {
        let mut b = *self;
        b.take(sq);
        b
    }

    /// Place a piece on its own square. Only used on boards under construction.
    #[inline]
    pub(crate) fn put(&mut self, piece: Piece) {
        self.squares[piece.square.index()] = Some(piece);
    }

    /// Remove and return whatever stands on `sq`.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces_of(color)
                .filter(|p| p.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        if let Some(pawn) = self.pieces().find(|p| {
            p.kind == PieceKind::Pawn && matches!(p.square.rank(), Rank::Rank1 | Rank::Rank8)
        }) {
            return Err(BoardError::PawnOnBackRank { square: pawn.square });
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank}  ")?;
            for file in File::ALL {
                let c = board
                    .piece_at(Square::new(file, rank))
                    .map_or('.', |p| p.fen_char());
                if file == File::FileH {
                    write!(f, "{c}")?;
                } else {
                    write!(f, "{c} ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn starting_position_validates() {
        Board::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_piece_at() {
        let board = Board::starting_position();
        let kind = |sq| board.piece_at(sq).map(|p| p.kind);
        assert_eq!(kind(Square::E1), Some(PieceKind::King));
        assert_eq!(kind(Square::D1), Some(PieceKind::Queen));
        assert_eq!(kind(Square::A1), Some(PieceKind::Rook));
        assert_eq!(kind(Square::B8), Some(PieceKind::Knight));
        assert_eq!(kind(Square::C8), Some(PieceKind::Bishop));
        assert_eq!(kind(Square::E2), Some(PieceKind::Pawn));
        assert_eq!(kind(Square::E4), None);
        assert_eq!(board.color_at(Square::E8), Some(Color::Black));
    }

    #[test]
    fn starting_pieces_are_unmoved() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert!(board.pieces().all(|p| !p.has_moved && p.double_step_ply.is_none()));
        assert_eq!(board.side(Color::White).count(), 16);
        assert_eq!(board.occupied().count(), 32);
    }

    #[test]
    fn king_square() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Square::E1);
        assert_eq!(board.king_square(Color::Black), Square::E8);
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn with_and_without_leave_original_untouched() {
        let board = Board::starting_position();
        let queen = Piece::new(PieceKind::Queen, Color::White, Square::E4);
        let changed = board.with_piece(queen).without_piece(Square::E2);
        assert_eq!(changed.piece_at(Square::E4), Some(queen));
        assert!(!changed.is_occupied(Square::E2));
        assert!(board.is_occupied(Square::E2));
        assert!(!board.is_occupied(Square::E4));
    }

    #[test]
    fn validate_rejects_missing_king() {
        let board = Board::starting_position().without_piece(Square::E8);
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount { color: Color::Black, count: 0 })
        );
    }

    #[test]
    fn validate_rejects_back_rank_pawn() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Square::A8);
        let board = Board::starting_position().with_piece(pawn);
        assert_eq!(board.validate(), Err(BoardError::PawnOnBackRank { square: Square::A8 }));
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", Board::starting_position().pretty());
        assert!(output.contains("r n b q k b n r"));
        assert!(output.contains("R N B Q K B N R"));
        assert!(output.starts_with("8  r"));
        assert!(output.ends_with("a b c d e f g h"));
    }
}
