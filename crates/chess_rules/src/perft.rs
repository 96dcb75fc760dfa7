use crate::board::Position;
use crate::rules::legal_moves;

/// Count leaf nodes of the legal-move tree to the given depth. Each
/// origin-destination pair counts once (a pawn reaching the last rank
/// is one node; promotion choice is a separate step and not part of
/// the move tree). Used to validate generation against known counts.
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(pos);
    if depth == 1 {
        return moves.values().map(|d| d.len() as u64).sum();
    }
    let mut nodes = 0;
    for (&from, dests) in &moves {
        for &to in dests {
            let mut next = *pos;
            next.apply_move(from, to);
            nodes += perft(&next, depth - 1);
        }
    }
    nodes
}
