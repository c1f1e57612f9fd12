//! Move execution via copy-make.

use tracing::trace;

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::{Color, Ply};
use crate::error::MoveError;
use crate::movegen::legal_moves;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Apply a move and return the resulting board. Copy-make: `self` is not modified.
    ///
    /// The move is assumed to be pseudo-legal. A king moving two files also
    /// moves the rook of that side onto the square it crossed. A pawn moving
    /// diagonally onto an empty square removes the pawn beside it (en
    /// passant). Promotion is a separate step, see [`Board::promote`].
    ///
    /// If the source square is empty, the board is returned unchanged.
    #[must_use]
    pub fn apply_move_unchecked(&self, from: Square, to: Square, ply: Ply) -> Board {
        let mut b = *self;
        let Some(piece) = b.take(from) else {
            return b;
        };

        let file_step = from.file().delta_to(to.file());
        if piece.kind == PieceKind::King && file_step.abs() == 2 {
            let side = CastleSide::from_king_step(file_step);
            if let Some(rook) = b.take(from.with_file(side.rook_file())) {
                b.put(rook.moved_to(from.with_file(side.rook_destination_file()), ply));
            }
        } else if piece.kind == PieceKind::Pawn && file_step != 0 && !b.is_occupied(to) {
            b.take(to.with_rank(from.rank()));
        }

        // Overwrites a captured piece.
        b.put(piece.moved_to(to, ply));
        b
    }

    /// Apply a move already known to be legal, promotion included.
    pub(crate) fn apply_legal_move(&self, mv: Move, ply: Ply) -> Board {
        let next = self.apply_move_unchecked(mv.from, mv.to, ply);
        match mv.promotion {
            Some(promo) => {
                let promoted = next.promote(mv.to, promo);
                debug_assert!(promoted.is_ok(), "{mv} carries a promotion but does not promote");
                promoted.unwrap_or(next)
            }
            None => next,
        }
    }

    /// Validate and apply the move `from` -> `to` on `ply`.
    ///
    /// # Errors
    ///
    /// Fails on an empty source, a piece of the side not to move, a capture of
    /// an own piece, a destination outside the piece's legal moves, or a
    /// result that leaves the mover's king in check.
    pub fn apply_move(&self, from: Square, to: Square, ply: Ply) -> Result<Board, MoveError> {
        let result = self.try_apply_move(from, to, ply);
        if let Err(err) = &result {
            trace!(%from, %to, ply, %err, "move rejected");
        }
        result
    }

    fn try_apply_move(&self, from: Square, to: Square, ply: Ply) -> Result<Board, MoveError> {
        if from == to {
            return Err(MoveError::SameSquare { square: from });
        }
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource { square: from })?;
        if piece.color != Color::to_move(ply) {
            return Err(MoveError::WrongTurn {
                square: from,
                color: piece.color,
            });
        }
        if self.color_at(to) == Some(piece.color) {
            return Err(MoveError::CapturesOwnPiece { from, to });
        }
        if !legal_moves(self, &piece, ply).contains(to) {
            return Err(MoveError::IllegalMove { from, to });
        }

        let next = self.apply_move_unchecked(from, to, ply);
        if next.is_in_check(piece.color, ply + 1) {
            return Err(MoveError::LeavesKingInCheck { from, to });
        }
        Ok(next)
    }

    /// Replace the pawn on `sq` with `promo`, keeping its color.
    ///
    /// # Errors
    ///
    /// Fails with [`MoveError::NotPromoting`] unless `sq` holds a pawn on its
    /// last rank.
    pub fn promote(&self, sq: Square, promo: PromotionPiece) -> Result<Board, MoveError> {
        let pawn = self
            .piece_at(sq)
            .filter(Piece::is_promoting)
            .ok_or(MoveError::NotPromoting { square: sq })?;
        Ok(self.with_piece(Piece {
            kind: promo.to_piece_kind(),
            has_moved: true,
            double_step_ply: None,
            ..pawn
        }))
    }

    /// Validate and apply a complete move, promotion included, in one step.
    ///
    /// # Errors
    ///
    /// Everything [`Board::apply_move`] rejects, plus a pawn reaching its last
    /// rank without a promotion piece, or a promotion piece on any other move.
    pub fn play(&self, mv: Move, ply: Ply) -> Result<Board, MoveError> {
        let next = self.apply_move(mv.from, mv.to, ply)?;
        let promoting = next.piece_at(mv.to).is_some_and(|p| p.is_promoting());
        match (promoting, mv.promotion) {
            (true, Some(promo)) => next.promote(mv.to, promo),
            (true, None) => Err(MoveError::MissingPromotion {
                from: mv.from,
                to: mv.to,
            }),
            (false, Some(_)) => Err(MoveError::UnexpectedPromotion {
                from: mv.from,
                to: mv.to,
            }),
            (false, None) => Ok(next),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::{Move, PromotionPiece};
    use crate::color::{Color, Ply};
    use crate::error::MoveError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn kind_at(board: &Board, sq: Square) -> Option<PieceKind> {
        board.piece_at(sq).map(|p| p.kind)
    }

    fn double_stepped(board: Board, sq: Square, ply: Ply) -> Board {
        let pawn = board.piece_at(sq).unwrap();
        board.with_piece(Piece { double_step_ply: Some(ply), ..pawn })
    }

    #[test]
    fn quiet_move_leaves_original_untouched() {
        let board = Board::starting_position();
        let next = board.apply_move(Square::G1, Square::F3, 0).unwrap();
        assert_eq!(kind_at(&next, Square::F3), Some(PieceKind::Knight));
        assert!(!next.is_occupied(Square::G1));
        assert!(next.piece_at(Square::F3).unwrap().has_moved);
        assert!(board.is_occupied(Square::G1));
    }

    #[test]
    fn double_step_records_ply() {
        let board = Board::starting_position();
        let next = board.apply_move(Square::E7, Square::E5, 1).unwrap();
        assert_eq!(next.piece_at(Square::E5).unwrap().double_step_ply, Some(1));
    }

    #[test]
    fn capture_replaces_piece() {
        let board: Board = "4k3/8/8/3p4/4P3/8/8/4K3".parse().unwrap();
        let next = board.apply_move(Square::E4, Square::D5, 0).unwrap();
        assert_eq!(next.piece_at(Square::D5).map(|p| p.color), Some(Color::White));
        assert_eq!(next.pieces().count(), 3);
    }

    #[test]
    fn en_passant_removes_passed_pawn() {
        let board = double_stepped("4k3/8/8/3pP3/8/8/8/4K3".parse().unwrap(), Square::D5, 1);
        let next = board.apply_move(Square::E5, Square::D6, 2).unwrap();
        assert_eq!(kind_at(&next, Square::D6), Some(PieceKind::Pawn));
        assert!(!next.is_occupied(Square::D5), "captured pawn is removed");
        assert!(!next.is_occupied(Square::E5));
    }

    #[test]
    fn en_passant_expires() {
        let board = double_stepped("4k3/8/8/3pP3/8/8/8/4K3".parse().unwrap(), Square::D5, 1);
        assert_eq!(
            board.apply_move(Square::E5, Square::D6, 4),
            Err(MoveError::IllegalMove { from: Square::E5, to: Square::D6 })
        );
    }

    #[test]
    fn castling_moves_both_pieces() {
        let board: Board = "r3k2r/8/8/8/8/8/8/R3K2R".parse().unwrap();
        let short = board.apply_move(Square::E1, Square::G1, 0).unwrap();
        assert_eq!(kind_at(&short, Square::G1), Some(PieceKind::King));
        assert_eq!(kind_at(&short, Square::F1), Some(PieceKind::Rook));
        assert!(!short.is_occupied(Square::H1));
        assert!(short.piece_at(Square::F1).unwrap().has_moved);

        let long = board.apply_move(Square::E8, Square::C8, 1).unwrap();
        assert_eq!(kind_at(&long, Square::C8), Some(PieceKind::King));
        assert_eq!(kind_at(&long, Square::D8), Some(PieceKind::Rook));
        assert!(!long.is_occupied(Square::A8));
    }

    #[test]
    fn validation_order() {
        let board = Board::starting_position();
        assert_eq!(
            board.apply_move(Square::E2, Square::E2, 0),
            Err(MoveError::SameSquare { square: Square::E2 })
        );
        assert_eq!(
            board.apply_move(Square::E4, Square::E5, 0),
            Err(MoveError::NoPieceAtSource { square: Square::E4 })
        );
        assert_eq!(
            board.apply_move(Square::E7, Square::E5, 0),
            Err(MoveError::WrongTurn { square: Square::E7, color: Color::Black })
        );
        assert_eq!(
            board.apply_move(Square::D1, Square::D2, 0),
            Err(MoveError::CapturesOwnPiece { from: Square::D1, to: Square::D2 })
        );
        assert_eq!(
            board.apply_move(Square::E2, Square::E5, 0),
            Err(MoveError::IllegalMove { from: Square::E2, to: Square::E5 })
        );
    }

    #[test]
    fn pinned_piece_cannot_move() {
        let board: Board = "4r2k/8/8/8/8/8/4N3/4K3".parse().unwrap();
        assert!(matches!(
            board.apply_move(Square::E2, Square::C3, 0),
            Err(MoveError::IllegalMove { .. })
        ));
    }

    #[test]
    fn promote_replaces_pawn() {
        // Placement strings reject back-rank pawns, so build the board by hand.
        let board = Board::empty()
            .with_piece(Piece::new(PieceKind::King, Color::White, Square::E1))
            .with_piece(Piece::new(PieceKind::King, Color::Black, Square::A8))
            .with_piece(Piece::new(PieceKind::Pawn, Color::White, Square::E8).marked_moved());
        let promoted = board.promote(Square::E8, PromotionPiece::Queen).unwrap();
        let queen = promoted.piece_at(Square::E8).unwrap();
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.color, Color::White);
        assert!(queen.has_moved);
    }

    #[test]
    fn promote_rejects_other_pieces() {
        let board = Board::starting_position();
        assert_eq!(
            board.promote(Square::E2, PromotionPiece::Queen),
            Err(MoveError::NotPromoting { square: Square::E2 })
        );
        assert_eq!(
            board.promote(Square::E4, PromotionPiece::Knight),
            Err(MoveError::NotPromoting { square: Square::E4 })
        );
    }

    #[test]
    fn play_with_promotion() {
        let board: Board = "8/4P1k1/8/8/8/8/8/4K3".parse().unwrap();
        let next = board
            .play(Move::new_promotion(Square::E7, Square::E8, PromotionPiece::Knight), 0)
            .unwrap();
        assert_eq!(kind_at(&next, Square::E8), Some(PieceKind::Knight));
        assert_eq!(
            board.play(Move::new(Square::E7, Square::E8), 0),
            Err(MoveError::MissingPromotion { from: Square::E7, to: Square::E8 })
        );
        assert_eq!(
            board.play(Move::new_promotion(Square::E1, Square::D1, PromotionPiece::Queen), 0),
            Err(MoveError::UnexpectedPromotion { from: Square::E1, to: Square::D1 })
        );
    }

    #[test]
    fn legal_move_applies_its_promotion() {
        let board: Board = "8/4P1k1/8/8/8/8/8/4K3".parse().unwrap();
        let mv = Move::new_promotion(Square::E7, Square::E8, PromotionPiece::Rook);
        let next = board.apply_legal_move(mv, 0);
        assert_eq!(kind_at(&next, Square::E8), Some(PieceKind::Rook));
        assert!(!next.is_occupied(Square::E7));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not promote")]
    fn legal_move_with_stray_promotion_is_caught() {
        let board = Board::starting_position();
        let _ = board.apply_legal_move(Move::new_promotion(Square::E2, Square::E4, PromotionPiece::Queen), 0);
    }

    #[test]
    fn unchecked_move_from_empty_square_is_noop() {
        let board = Board::starting_position();
        assert_eq!(board.apply_move_unchecked(Square::E4, Square::E5, 0), board);
    }
}
