//! A game in progress: board, ply counter, pending promotion and result.

use tracing::{debug, info};

use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::{Color, Ply};
use crate::error::{GameError, MoveError};
use crate::movegen::legal_moves;
use crate::outcome::Outcome;
use crate::san::{decode, encode};
use crate::square::Square;
use crate::square_set::SquareSet;

/// A pawn move onto the last rank, waiting for its promotion piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
}

/// What happened to a move submitted to a [`Game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Played {
    /// The move was played and recorded under this notation.
    Moved { san: String },
    /// The move reaches the last rank; call [`Game::promote`] or
    /// [`Game::cancel_promotion`]. Board and ply are unchanged.
    PromotionPending { from: Square, to: Square },
}

/// One game advanced a ply at a time.
///
/// Every completed move replaces the board wholesale and bumps the ply. A
/// pawn reaching its last rank is held as a [`PendingPromotion`] until the
/// caller picks a piece, so a prompt can sit between move and promotion.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    ply: Ply,
    history: Vec<String>,
    pending: Option<PendingPromotion>,
    outcome: Option<Outcome>,
}

impl Game {
    /// Start a game from the standard starting position.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position(), 0)
    }

    /// Continue from an arbitrary position with `ply` already played.
    pub fn from_board(board: Board, ply: Ply) -> Game {
        Game {
            board,
            ply,
            history: Vec::new(),
            pending: None,
            outcome: board.outcome(ply),
        }
    }

    /// Return to the starting position.
    pub fn reset(&mut self) {
        *self = Game::new();
        debug!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ply(&self) -> Ply {
        self.ply
    }

    pub fn side_to_move(&self) -> Color {
        Color::to_move(self.ply)
    }

    /// Notation of every completed ply, in order.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending
    }

    /// Legal destinations of the piece on `sq`.
    ///
    /// Empty when the square is empty, holds a piece of the side not to move,
    /// or when no move can be played right now.
    pub fn legal_moves(&self, sq: Square) -> SquareSet {
        if self.outcome.is_some() || self.pending.is_some() {
            return SquareSet::EMPTY;
        }
        match self.board.piece_at(sq) {
            Some(piece) if piece.color == self.side_to_move() => {
                legal_moves(&self.board, &piece, self.ply)
            }
            _ => SquareSet::EMPTY,
        }
    }

    /// Play `from` -> `to`. A pawn reaching the last rank becomes pending.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Played, GameError> {
        self.play_move(Move::new(from, to))
    }

    /// Play a move. One carrying a promotion piece completes in one step.
    pub fn play_move(&mut self, mv: Move) -> Result<Played, GameError> {
        self.ensure_accepting_moves()?;
        match self.board.play(mv, self.ply) {
            Ok(next) => Ok(self.commit(mv, next)),
            Err(MoveError::MissingPromotion { from, to }) => {
                self.pending = Some(PendingPromotion { from, to });
                debug!(%from, %to, "promotion pending");
                Ok(Played::PromotionPending { from, to })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Decode an algebraic-notation token and play it.
    pub fn play_san(&mut self, token: &str) -> Result<Played, GameError> {
        self.ensure_accepting_moves()?;
        let mv = decode(&self.board, token, self.ply)?;
        self.play_move(mv)
    }

    /// Complete the pending promotion with `piece`.
    pub fn promote(&mut self, piece: PromotionPiece) -> Result<Played, GameError> {
        let pending = self.pending.ok_or(GameError::NoPendingPromotion)?;
        let mv = Move::new_promotion(pending.from, pending.to, piece);
        let next = self.board.play(mv, self.ply)?;
        self.pending = None;
        Ok(self.commit(mv, next))
    }

    /// Drop the pending promotion; the pawn stays where it was.
    pub fn cancel_promotion(&mut self) -> Result<(), GameError> {
        let pending = self.pending.take().ok_or(GameError::NoPendingPromotion)?;
        debug!(from = %pending.from, to = %pending.to, "promotion cancelled");
        Ok(())
    }

    fn ensure_accepting_moves(&self) -> Result<(), GameError> {
        if let Some(outcome) = self.outcome {
            return Err(GameError::GameOver { outcome });
        }
        if let Some(PendingPromotion { from, to }) = self.pending {
            return Err(GameError::PromotionPending { from, to });
        }
        Ok(())
    }

    fn commit(&mut self, mv: Move, next: Board) -> Played {
        let san = encode(&self.board, mv, self.ply);
        debug!(ply = self.ply, %san, "move played");

        self.board = next;
        self.ply += 1;
        self.history.push(san.clone());
        self.outcome = next.outcome(self.ply);

        match self.outcome {
            Some(Outcome::Checkmate { winner }) => info!(%winner, ply = self.ply, "checkmate"),
            Some(Outcome::Stalemate) => info!(ply = self.ply, "stalemate"),
            None => {}
        }
        Played::Moved { san }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
