//! Board squares, encoded little-endian rank-file (a1 = 0, h8 = 63).

use std::fmt;

use crate::file::File;
use crate::rank::Rank;

/// A square on the chess board. Always holds a valid coordinate.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

macro_rules! named_squares {
    ($($name:ident = $file:ident $rank:ident;)*) => {
        impl Square {
            $(pub const $name: Square = Square::new(File::$file, Rank::$rank);)*
        }
    };
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank as u8 * 8 + file as u8)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse an algebraic coordinate such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(file, rank))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Return the square `df` files and `dr` ranks away, or `None` off the board.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Square> {
        match (self.file().offset(df), self.rank().offset(dr)) {
            (Some(file), Some(rank)) => Some(Square::new(file, rank)),
            _ => None,
        }
    }

    /// The same file on another rank.
    #[inline]
    pub const fn with_rank(self, rank: Rank) -> Square {
        Square::new(self.file(), rank)
    }

    /// The same rank on another file.
    #[inline]
    pub const fn with_file(self, file: File) -> Square {
        Square::new(file, self.rank())
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

named_squares! {
    A1 = FileA Rank1; B1 = FileB Rank1; C1 = FileC Rank1; D1 = FileD Rank1;
    E1 = FileE Rank1; F1 = FileF Rank1; G1 = FileG Rank1; H1 = FileH Rank1;
    A2 = FileA Rank2; B2 = FileB Rank2; C2 = FileC Rank2; D2 = FileD Rank2;
    E2 = FileE Rank2; F2 = FileF Rank2; G2 = FileG Rank2; H2 = FileH Rank2;
    A3 = FileA Rank3; B3 = FileB Rank3; C3 = FileC Rank3; D3 = FileD Rank3;
    E3 = FileE Rank3; F3 = FileF Rank3; G3 = FileG Rank3; H3 = FileH Rank3;
    A4 = FileA Rank4; B4 = FileB Rank4; C4 = FileC Rank4; D4 = FileD Rank4;
    E4 = FileE Rank4; F4 = FileF Rank4; G4 = FileG Rank4; H4 = FileH Rank4;
    A5 = FileA Rank5; B5 = FileB Rank5; C5 = FileC Rank5; D5 = FileD Rank5;
    E5 = FileE Rank5; F5 = FileF Rank5; G5 = FileG Rank5; H5 = FileH Rank5;
    A6 = FileA Rank6; B6 = FileB Rank6; C6 = FileC Rank6; D6 = FileD Rank6;
    E6 = FileE Rank6; F6 = FileF Rank6; G6 = FileG Rank6; H6 = FileH Rank6;
    A7 = FileA Rank7; B7 = FileB Rank7; C7 = FileC Rank7; D7 = FileD Rank7;
    E7 = FileE Rank7; F7 = FileF Rank7; G7 = FileG Rank7; H7 = FileH Rank7;
    A8 = FileA Rank8; B8 = FileB Rank8; C8 = FileC Rank8; D8 = FileD Rank8;
    E8 = FileE Rank8; F8 = FileF Rank8; G8 = FileG Rank8; H8 = FileH Rank8;
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::file::File;
    use crate::rank::Rank;

    #[test]
    fn file_rank_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::new(sq.file(), sq.rank()), sq);
        }
    }

    #[test]
    fn named_constants() {
        assert_eq!(Square::A1.index(), 0);
        assert_eq!(Square::H1.index(), 7);
        assert_eq!(Square::E4.file(), File::FileE);
        assert_eq!(Square::E4.rank(), Rank::Rank4);
        assert_eq!(Square::H8.index(), 63);
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::E4));
        assert_eq!(format!("{}", Square::H8), "h8");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("a").is_none());
        assert!(Square::from_algebraic("a1b").is_none());
        assert!(Square::from_algebraic("E4").is_none());
    }

    #[test]
    fn offset_respects_edges() {
        assert_eq!(Square::E4.offset(1, 2), Some(Square::F6));
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
        assert_eq!(Square::B1.offset(-1, 2), Some(Square::A3));
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Square::E4), "Square(e4)");
    }
}
