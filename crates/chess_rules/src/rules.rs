//! Legality filtering and check status. Every decision here is made by
//! the same simulate-and-test procedure: copy the position, play the
//! candidate, ask whether any opposing pseudo-legal move now lands on
//! the mover's king.

use crate::board::Position;
use crate::movegen::{MoveMap, pseudo_legal, side_moves};
use crate::types::{Color, Coord, PieceKind};

/// Check/mate/stalemate report for the side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStatus {
    pub in_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    /// The legal replies while in check; empty when not in check.
    pub escape_moves: MoveMap,
}

/// Does any pseudo-legal move of `by` land on `target`?
pub fn attacks_square(pos: &Position, by: Color, target: Coord) -> bool {
    for from in Coord::all() {
        if let Some(pc) = pos.piece_at(from)
            && pc.color == by
            && pseudo_legal(pos, by, from).contains(&target)
        {
            return true;
        }
    }
    false
}

/// Is `side`'s king currently attacked? A missing king (abnormal
/// terminal state) reports false rather than panicking.
pub fn in_check(pos: &Position, side: Color) -> bool {
    match pos.king_coord(side) {
        Some(king) => attacks_square(pos, side.other(), king),
        None => false,
    }
}

/// All legal moves for the side to move, origin to destinations.
/// Pieces with no legal destination are omitted entirely.
pub fn legal_moves(pos: &Position) -> MoveMap {
    let side = pos.side_to_move;
    let mut map = side_moves(pos, side);
    map.retain(|&from, dests| {
        dests.retain(|&to| is_legal(pos, side, from, to));
        !dests.is_empty()
    });
    map
}

fn is_legal(pos: &Position, side: Color, from: Coord, to: Coord) -> bool {
    // Castling carries extra safety: the king may not castle out of
    // check, and the square it crosses must be safe once the king
    // stands there (stepping simulates the move so x-rays through the
    // vacated square count).
    if let Some(pc) = pos.piece_at(from)
        && pc.kind == PieceKind::King
        && to.col().abs_diff(from.col()) == 2
    {
        if in_check(pos, side) {
            return false;
        }
        let dc = if to.col() > from.col() { 1 } else { -1 };
        let Some(mid) = from.offset(dc, 0) else {
            return false;
        };
        let mut step = *pos;
        step.apply_move(from, mid);
        if in_check(&step, side) {
            return false;
        }
    }

    let mut next = *pos;
    next.apply_move(from, to);
    !in_check(&next, side)
}

/// Check, checkmate, and stalemate for the side to move, together with
/// the escape set demanded while in check.
pub fn game_status(pos: &Position) -> GameStatus {
    let legal = legal_moves(pos);
    let check = in_check(pos, pos.side_to_move);
    let trapped = legal.is_empty();
    GameStatus {
        in_check: check,
        is_checkmate: check && trapped,
        is_stalemate: !check && trapped,
        escape_moves: if check { legal } else { MoveMap::new() },
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
