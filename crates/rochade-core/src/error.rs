//! Error types for board setup, move application, notation and game sessions.

use std::fmt;

use crate::color::Color;
use crate::outcome::Outcome;
use crate::square::Square;

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The placement does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based rank index (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails structural validation.
    InvalidBoard {
        /// The underlying board validation error.
        source: BoardError,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            PlacementError::BadRankLength { rank_index, length } => {
                write!(f, "rank {rank_index} describes {length} squares, expected 8")
            }
            PlacementError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            PlacementError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for PlacementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlacementError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for PlacementError {
    fn from(source: BoardError) -> Self {
        PlacementError::InvalidBoard { source }
    }
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn occupies the first or eighth rank.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank {
        /// Where the pawn stands.
        square: Square,
    },
}

/// Rule violations reported when applying a move or a promotion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("source and destination are both {square}")]
    SameSquare { square: Square },

    #[error("no piece on {square}")]
    NoPieceAtSource { square: Square },

    /// The piece belongs to the side not on move.
    #[error("piece on {square} is {color}, but it is not {color}'s turn")]
    WrongTurn { square: Square, color: Color },

    #[error("{from}{to} would capture a piece of the same color")]
    CapturesOwnPiece { from: Square, to: Square },

    #[error("{from}{to} is not a legal move")]
    IllegalMove { from: Square, to: Square },

    #[error("{from}{to} leaves the king in check")]
    LeavesKingInCheck { from: Square, to: Square },

    /// `promote` was asked to replace something other than a back-rank pawn.
    #[error("no promoting pawn on {square}")]
    NotPromoting { square: Square },

    #[error("{from}{to} reaches the last rank and needs a promotion piece")]
    MissingPromotion { from: Square, to: Square },

    #[error("{from}{to} does not promote")]
    UnexpectedPromotion { from: Square, to: Square },
}

/// Failures decoding a move written in algebraic notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The token is not well-formed algebraic notation.
    #[error("unrecognized move notation: \"{token}\"")]
    UnknownNotation { token: String },

    /// Zero or several pieces match the token.
    #[error("\"{token}\" matches {candidates} legal moves, expected exactly 1")]
    Ambiguous { token: String, candidates: usize },

    /// The token marks a capture but nothing can be captured there.
    #[error("\"{token}\" claims a capture on an empty square")]
    CaptureMismatch { token: String },

    #[error("castling \"{token}\" is not legal here")]
    IllegalCastle { token: String },
}

/// Errors from driving a [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Notation(#[from] NotationError),

    /// A pawn is waiting for its promotion piece; no other move may be played.
    #[error("promotion pending for {from}{to}")]
    PromotionPending { from: Square, to: Square },

    #[error("no promotion is pending")]
    NoPendingPromotion,

    #[error("game is over: {outcome}")]
    GameOver { outcome: Outcome },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, GameError, MoveError, NotationError, PlacementError};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn placement_error_display() {
        let err = PlacementError::WrongRankCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 8 ranks in piece placement, found 4");
    }

    #[test]
    fn placement_error_from_board_error() {
        let board_err = BoardError::InvalidKingCount { color: Color::Black, count: 0 };
        let err: PlacementError = board_err.into();
        assert!(matches!(err, PlacementError::InvalidBoard { .. }));
        assert_eq!(format!("{err}"), "invalid board: expected 1 king for black, found 0");
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::WrongTurn { square: Square::E7, color: Color::Black };
        assert_eq!(format!("{err}"), "piece on e7 is black, but it is not black's turn");
        let err = MoveError::IllegalMove { from: Square::E2, to: Square::E5 };
        assert_eq!(format!("{err}"), "e2e5 is not a legal move");
    }

    #[test]
    fn game_error_is_transparent() {
        let err: GameError = NotationError::CaptureMismatch { token: "Nxe5".into() }.into();
        assert_eq!(format!("{err}"), "\"Nxe5\" claims a capture on an empty square");
    }
}
