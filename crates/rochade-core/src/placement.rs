//! Piece-placement strings (the first field of FEN) for setting up boards.
//!
//! Only placement is read and written. Movement history is inferred from where
//! pieces stand: pawns on their starting rank, kings on their home square and
//! rooks in their own corners count as unmoved, everything else as moved.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::PlacementError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// Placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Return `true` if a piece of this kind and color could still be on its
/// original square when standing on `sq`.
fn on_home_square(kind: PieceKind, color: Color, sq: Square) -> bool {
    match kind {
        PieceKind::Pawn => sq.rank() == color.pawn_rank(),
        PieceKind::King => sq == Square::new(File::FileE, color.back_rank()),
        PieceKind::Rook => {
            sq.rank() == color.back_rank() && matches!(sq.file(), File::FileA | File::FileH)
        }
        _ => sq.rank() == color.back_rank(),
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(placement: &str) -> Result<Board, PlacementError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        // Placement lists rank 8 first.
        for (rank_index, (rank_str, rank)) in ranks.iter().zip(Rank::ALL.into_iter().rev()).enumerate() {
            let mut file_index: u8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    file_index += digit as u8;
                    if file_index > 8 {
                        return Err(PlacementError::BadRankLength {
                            rank_index,
                            length: file_index as usize,
                        });
                    }
                    continue;
                }

                let kind = PieceKind::from_fen_char(c)
                    .ok_or(PlacementError::InvalidPieceChar { character: c })?;
                let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
                let file = File::from_index(file_index).ok_or(PlacementError::BadRankLength {
                    rank_index,
                    length: file_index as usize + 1,
                })?;

                let sq = Square::new(file, rank);
                let piece = Piece::new(kind, color, sq);
                board.put(if on_home_square(kind, color, sq) { piece } else { piece.marked_moved() });
                file_index += 1;
            }

            if file_index != 8 {
                return Err(PlacementError::BadRankLength {
                    rank_index,
                    length: file_index as usize,
                });
            }
        }

        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty_count = 0u8;

            for file in File::ALL {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank != Rank::Rank1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
