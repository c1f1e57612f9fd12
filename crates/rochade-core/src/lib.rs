//! Core chess rules: board representation, move generation, move execution,
//! game-end detection and algebraic notation.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod file;
mod game;
mod make_move;
mod movegen;
mod outcome;
mod perft;
mod piece;
mod piece_kind;
mod placement;
mod rank;
mod san;
mod square;
mod square_set;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, PromotionPiece};
pub use color::{Color, Ply};
pub use error::{BoardError, GameError, MoveError, NotationError, PlacementError};
pub use file::File;
pub use game::{Game, PendingPromotion, Played};
pub use movegen::{generate_legal_moves, has_legal_move, legal_moves, pseudo_legal_moves};
pub use outcome::Outcome;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use rank::Rank;
pub use san::{decode, encode};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
