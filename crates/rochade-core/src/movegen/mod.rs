//! Move generation: per-kind pseudo-legal generators and the legality filter.

mod king;
mod knights;
pub(crate) mod mode;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::{Color, Ply};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square_set::SquareSet;

use self::king::gen_king;
use self::knights::gen_knight;
use self::mode::{AttacksOnly, CastlingMode, WithCastling};
use self::pawns::gen_pawn;
use self::sliders::{ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL, gen_rays};

pub(crate) use self::pawns::{en_passant_victim, pawn_attacks};

/// Longest possible ray on an 8x8 board.
const MAX_RAY: u8 = 7;

fn gen_pseudo<T: CastlingMode>(board: &Board, piece: &Piece, ply: Ply) -> SquareSet {
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, piece, ply),
        PieceKind::Knight => gen_knight(board, piece),
        PieceKind::Bishop => gen_rays(board, piece, &DIAGONAL, MAX_RAY),
        PieceKind::Rook => gen_rays(board, piece, &ORTHOGONAL, MAX_RAY),
        PieceKind::Queen => gen_rays(board, piece, &ALL_DIRECTIONS, MAX_RAY),
        PieceKind::King => gen_king::<T>(board, piece, ply),
    }
}

/// Destination squares `piece` can reach on `ply`, ignoring whether its own
/// king is left in check.
///
/// Moves respect blocking and never land on a piece of the mover's color.
/// Castling destinations are only included when `include_castling` is set.
pub fn pseudo_legal_moves(board: &Board, piece: &Piece, ply: Ply, include_castling: bool) -> SquareSet {
    if include_castling {
        gen_pseudo::<WithCastling>(board, piece, ply)
    } else {
        gen_pseudo::<AttacksOnly>(board, piece, ply)
    }
}

/// Squares `piece` attacks: its pseudo-legal moves without castling, except
/// that a pawn attacks both diagonals and never its push squares.
pub(crate) fn attacked_by(board: &Board, piece: &Piece, ply: Ply) -> SquareSet {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece),
        _ => gen_pseudo::<AttacksOnly>(board, piece, ply),
    }
}

/// Destination squares `piece` can legally move to on `ply`.
///
/// Each pseudo-legal move is simulated on a copy of the board and dropped if
/// it leaves the mover's king attacked.
pub fn legal_moves(board: &Board, piece: &Piece, ply: Ply) -> SquareSet {
    pseudo_legal_moves(board, piece, ply, true)
        .iter()
        .filter(|&dst| {
            !board
                .apply_move_unchecked(piece.square, dst, ply)
                .is_in_check(piece.color, ply + 1)
        })
        .collect()
}

/// Return `true` if `color` has at least one legal move on `ply`.
pub fn has_legal_move(board: &Board, color: Color, ply: Ply) -> bool {
    board
        .pieces_of(color)
        .any(|piece| !legal_moves(board, &piece, ply).is_empty())
}

/// Generate every legal move of the side to move on `ply`.
///
/// A pawn move onto the last rank appears once per promotion piece.
pub fn generate_legal_moves(board: &Board, ply: Ply) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece in board.pieces_of(Color::to_move(ply)) {
        for dst in legal_moves(board, &piece, ply) {
            if piece.kind == PieceKind::Pawn && dst.rank() == piece.color.promotion_rank() {
                moves.extend(
                    PromotionPiece::ALL
                        .into_iter()
                        .map(|promo| Move::new_promotion(piece.square, dst, promo)),
                );
            } else {
                moves.push(Move::new(piece.square, dst));
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    fn double_stepped(board: Board, sq: Square, ply: Ply) -> Board {
        let pawn = board.piece_at(sq).unwrap();
        board.with_piece(Piece { double_step_ply: Some(ply), ..pawn })
    }

    #[test]
    fn starting_position_20_moves() {
        let board = Board::starting_position();
        let moves = generate_legal_moves(&board, 0);
        assert_eq!(
            moves.len(),
            20,
            "starting position should have 20 legal moves, got {}",
            moves.len()
        );
        assert_eq!(generate_legal_moves(&board, 1).len(), 20);
    }

    #[test]
    fn only_side_to_move_generates() {
        let board = Board::starting_position();
        assert!(generate_legal_moves(&board, 0).iter().all(|m| m.from.rank().index() < 2));
        assert!(generate_legal_moves(&board, 1).iter().all(|m| m.from.rank().index() > 5));
    }

    #[test]
    fn pinned_knight_zero_moves() {
        // King on e1, knight on e2, rook on e8: the knight is pinned along the e-file.
        let board: Board = "4r2k/8/8/8/8/8/4N3/4K3".parse().unwrap();
        let knight = board.piece_at(Square::E2).unwrap();
        assert_eq!(pseudo_legal_moves(&board, &knight, 0, true).count(), 6);
        assert!(legal_moves(&board, &knight, 0).is_empty(), "pinned knight should have 0 moves");
    }

    #[test]
    fn double_check_king_only() {
        // King e1, black knight f3 and black rook e8: double check.
        let board: Board = "4r1k1/8/8/8/8/5n2/8/4K3".parse().unwrap();
        let moves = generate_legal_moves(&board, 0);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(
                board.piece_at(mv.from).map(|p| p.kind),
                Some(PieceKind::King),
                "in double check only king moves are legal, got {mv}"
            );
        }
    }

    #[test]
    fn king_cannot_capture_defended_piece() {
        // The e2 rook is defended by the e8 rook.
        let board: Board = "4r1k1/8/8/8/8/8/4r3/4K3".parse().unwrap();
        let king = board.piece_at(Square::E1).unwrap();
        let targets = legal_moves(&board, &king, 0);
        assert!(!targets.contains(Square::E2));
        assert!(!targets.contains(Square::D2), "d2 is on the e2 rook's rank");
        assert_eq!(targets, [Square::D1, Square::F1].into_iter().collect::<SquareSet>());
    }

    #[test]
    fn legal_moves_never_capture_own_pieces() {
        let board = Board::starting_position();
        for piece in board.pieces() {
            let own = board.side(piece.color);
            let ply = piece.color.index() as Ply;
            assert!(
                (legal_moves(&board, &piece, ply) & own).is_empty(),
                "{piece} may land on its own side"
            );
        }
    }

    #[test]
    fn castling_not_through_check() {
        // Bishop on a6 attacks f1 (a6-b5-c4-d3-e2-f1), preventing kingside castling.
        let board: Board = "4k3/8/b7/8/8/8/8/R3K2R".parse().unwrap();
        let moves = generate_legal_moves(&board, 0);
        assert!(!moves.contains(&Move::new(Square::E1, Square::G1)));
        assert!(moves.contains(&Move::new(Square::E1, Square::C1)));
    }

    #[test]
    fn en_passant_legal() {
        // White pawn e5, black pawn d5 just double-stepped on ply 1.
        let board = double_stepped("4k3/8/8/3pP3/8/8/8/4K3".parse().unwrap(), Square::D5, 1);
        let moves = generate_legal_moves(&board, 2);
        assert!(moves.contains(&Move::new(Square::E5, Square::D6)));
    }

    #[test]
    fn en_passant_discovered_check_illegal() {
        // bxc6 would expose the a5 king to the rook on h5.
        let board = double_stepped("4k3/8/8/KPp4r/8/8/8/8".parse().unwrap(), Square::C5, 1);
        let pawn = board.piece_at(Square::B5).unwrap();
        assert!(pseudo_legal_moves(&board, &pawn, 2, true).contains(Square::C6));
        assert!(!legal_moves(&board, &pawn, 2).contains(Square::C6), "EP should be illegal due to discovered check");
    }

    #[test]
    fn promotion_generates_4_moves() {
        let board: Board = "4k3/P7/8/8/8/8/8/4K3".parse().unwrap();
        let moves = generate_legal_moves(&board, 0);
        let promos = moves.iter().filter(|m| m.promotion.is_some()).count();
        assert_eq!(promos, 4, "promotion should generate 4 moves (Q/R/B/N)");
    }

    #[test]
    fn pawn_attacks_differ_from_pawn_moves() {
        let board = Board::starting_position();
        let pawn = board.piece_at(Square::E2).unwrap();
        let attacks = attacked_by(&board, &pawn, 0);
        assert!(attacks.contains(Square::D3));
        assert!(attacks.contains(Square::F3));
        assert!(!attacks.contains(Square::E3));
    }

    #[test]
    fn has_legal_move_at_start() {
        let board = Board::starting_position();
        assert!(has_legal_move(&board, Color::White, 0));
        assert!(has_legal_move(&board, Color::Black, 1));
    }
}
