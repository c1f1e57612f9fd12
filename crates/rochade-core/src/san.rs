//! Standard algebraic notation (SAN): writing moves and reading them back.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::{Color, Ply};
use crate::error::NotationError;
use crate::file::File;
use crate::movegen::{en_passant_victim, legal_moves};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// Write `mv` in algebraic notation, as played on `board` on `ply`.
///
/// Produces `O-O`/`O-O-O` for castling, the origin file on pawn captures,
/// the shortest disambiguation among pieces of the same kind, the chosen
/// promotion (`e8=Q`) and a `+` or `#` suffix.
///
/// `mv` must be legal. A move from an empty square is written in coordinate
/// form.
pub fn encode(board: &Board, mv: Move, ply: Ply) -> String {
    let Some(piece) = board.piece_at(mv.from) else {
        return mv.to_string();
    };

    // A promotion piece on a move that does not reach the last rank is ignored.
    let mv = if piece.kind == PieceKind::Pawn && mv.to.rank() == piece.color.promotion_rank() {
        mv
    } else {
        Move { promotion: None, ..mv }
    };

    let mut san = String::new();
    let file_step = mv.from.file().delta_to(mv.to.file());

    if piece.kind == PieceKind::King && file_step.abs() == 2 {
        san.push_str(CastleSide::from_king_step(file_step).san());
    } else if piece.kind == PieceKind::Pawn {
        if file_step != 0 {
            san.push(mv.from.file().to_char());
            san.push('x');
        }
        san.push_str(&mv.to.to_string());
        if let Some(promo) = mv.promotion {
            san.push('=');
            san.extend(promo.to_piece_kind().san_letter());
        }
    } else {
        san.extend(piece.kind.san_letter());
        san.push_str(&disambiguation(board, &piece, mv.to, ply));
        if board.is_occupied(mv.to) {
            san.push('x');
        }
        san.push_str(&mv.to.to_string());
    }

    let next = board.apply_legal_move(mv, ply);
    let them = !piece.color;
    if next.is_checkmate(them, ply + 1) {
        san.push('#');
    } else if next.is_in_check(them, ply + 1) {
        san.push('+');
    }
    san
}

/// Origin file, rank, or both, as needed to tell `piece` apart from other
/// pieces of its kind that can also reach `to`.
fn disambiguation(board: &Board, piece: &Piece, to: Square, ply: Ply) -> String {
    let rivals: Vec<Piece> = board
        .pieces_of(piece.color)
        .filter(|p| p.kind == piece.kind && p.square != piece.square)
        .filter(|p| legal_moves(board, p, ply).contains(to))
        .collect();

    let from = piece.square;
    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|p| p.square.file() != from.file()) {
        from.file().to_char().to_string()
    } else if rivals.iter().all(|p| p.square.rank() != from.rank()) {
        from.rank().to_char().to_string()
    } else {
        from.to_string()
    }
}

/// A check or mate claim at the end of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Check,
    Mate,
}

/// The parts of a non-castling token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parsed {
    kind: PieceKind,
    from_file: Option<File>,
    from_rank: Option<Rank>,
    capture: bool,
    to: Square,
}

fn parse_castle(body: &str) -> Option<CastleSide> {
    match body {
        "O-O" | "0-0" => Some(CastleSide::KingSide),
        "O-O-O" | "0-0-0" => Some(CastleSide::QueenSide),
        _ => None,
    }
}

fn parse_body(body: &str) -> Option<Parsed> {
    if !body.is_ascii() {
        return None;
    }
    let first = body.chars().next()?;
    let (kind, rest) = if first.is_ascii_uppercase() {
        (PieceKind::from_san_letter(first)?, &body[1..])
    } else if File::from_char(first).is_some() {
        (PieceKind::Pawn, body)
    } else {
        return None;
    };

    if rest.len() < 2 {
        return None;
    }
    let (prefix, dest) = rest.split_at(rest.len() - 2);
    let to = Square::from_algebraic(dest)?;
    let (prefix, capture) = match prefix.strip_suffix('x') {
        Some(p) => (p, true),
        None => (prefix, false),
    };

    let mut chars = prefix.chars().peekable();
    let from_file = chars.next_if(|&c| File::from_char(c).is_some()).and_then(File::from_char);
    let from_rank = chars.next_if(|&c| Rank::from_char(c).is_some()).and_then(Rank::from_char);
    if chars.next().is_some() {
        return None;
    }
    if kind == PieceKind::Pawn && from_rank.is_some() {
        return None;
    }

    Some(Parsed {
        kind,
        from_file,
        from_rank,
        capture,
        to,
    })
}

fn parse_promotion(letter: &str) -> Option<PromotionPiece> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PieceKind::from_san_letter(c).and_then(PromotionPiece::from_piece_kind),
        _ => None,
    }
}

/// Read one algebraic-notation token as a move of the side to move on `ply`.
///
/// A trailing `+`/`#` keeps only the candidates whose resulting position
/// gives check or mate, so a false claim matches nothing. A pawn
/// move onto the last rank without `=<piece>` decodes with no promotion; the
/// caller picks the piece.
///
/// # Errors
///
/// [`NotationError::UnknownNotation`] for malformed tokens or a promotion
/// suffix on a move that does not promote, [`NotationError::CaptureMismatch`]
/// for an `x` with nothing to capture, [`NotationError::IllegalCastle`] and
/// [`NotationError::Ambiguous`] when zero or several legal moves match.
pub fn decode(board: &Board, token: &str, ply: Ply) -> Result<Move, NotationError> {
    let unknown = || NotationError::UnknownNotation {
        token: token.to_string(),
    };
    let color = Color::to_move(ply);

    let trimmed = token.trim();
    let (body, marker) = if let Some(body) = trimmed.strip_suffix('#') {
        (body, Some(Marker::Mate))
    } else if let Some(body) = trimmed.strip_suffix('+') {
        (body, Some(Marker::Check))
    } else {
        (trimmed, None)
    };

    if let Some(side) = parse_castle(body) {
        return decode_castle(board, token, color, side, ply);
    }

    let (body, promotion) = match body.split_once('=') {
        Some((head, letter)) => (head, Some(parse_promotion(letter).ok_or_else(unknown)?)),
        None => (body, None),
    };
    let parsed = parse_body(body).ok_or_else(unknown)?;
    let to = parsed.to;

    let mut candidates: Vec<Piece> = board
        .pieces_of(color)
        .filter(|p| p.kind == parsed.kind)
        .filter(|p| parsed.from_file.is_none_or(|f| p.square.file() == f))
        .filter(|p| parsed.from_rank.is_none_or(|r| p.square.rank() == r))
        .filter(|p| {
            // Pawns push straight and capture diagonally.
            p.kind != PieceKind::Pawn
                || (p.square.file() != to.file()) == (parsed.capture || parsed.from_file.is_some())
        })
        .filter(|p| legal_moves(board, p, ply).contains(to))
        .collect();

    if parsed.capture && !board.is_occupied(to) {
        let en_passant = parsed.kind == PieceKind::Pawn
            && candidates
                .iter()
                .any(|p| en_passant_victim(board, p, to, ply).is_some());
        if !en_passant {
            return Err(NotationError::CaptureMismatch {
                token: token.to_string(),
            });
        }
    }

    let promoting = parsed.kind == PieceKind::Pawn && to.rank() == color.promotion_rank();
    if promotion.is_some() && !promoting {
        return Err(unknown());
    }

    if let Some(marker) = marker {
        candidates.retain(|p| {
            let mv = Move {
                from: p.square,
                to,
                promotion,
            };
            let next = board.apply_legal_move(mv, ply);
            match marker {
                Marker::Check => next.is_in_check(!color, ply + 1),
                Marker::Mate => next.is_checkmate(!color, ply + 1),
            }
        });
    }

    match candidates.as_slice() {
        [piece] => Ok(Move {
            from: piece.square,
            to,
            promotion,
        }),
        _ => Err(NotationError::Ambiguous {
            token: token.to_string(),
            candidates: candidates.len(),
        }),
    }
}

fn decode_castle(
    board: &Board,
    token: &str,
    color: Color,
    side: CastleSide,
    ply: Ply,
) -> Result<Move, NotationError> {
    let illegal = || NotationError::IllegalCastle {
        token: token.to_string(),
    };
    let king = board
        .find_king(color)
        .and_then(|sq| board.piece_at(sq))
        .ok_or_else(illegal)?;
    let dst = king
        .square
        .offset(2 * side.direction(), 0)
        .ok_or_else(illegal)?;
    if !legal_moves(board, &king, ply).contains(dst) {
        return Err(illegal());
    }
    Ok(Move::new(king.square, dst))
}
