//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::color::Ply;
use crate::movegen::generate_legal_moves;

/// Count the number of leaf nodes at the given depth, starting on `ply`.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves (bulk-counting optimization: no recursive apply).
pub fn perft(board: &Board, ply: Ply, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board, ply);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let child = board.apply_legal_move(mv, ply);
        nodes += perft(&child, ply + 1, depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(coordinate_move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, ply: Ply, depth: usize) -> Vec<(String, u64)> {
    let moves = generate_legal_moves(board, ply);
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .map(|&mv| {
            let child = board.apply_legal_move(mv, ply);
            let count = if depth <= 1 { 1 } else { perft(&child, ply + 1, depth - 1) };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
