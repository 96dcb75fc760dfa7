//! Pseudo-legal move generation: geometrically possible destinations,
//! ignoring whether the mover's own king ends up attacked. Check
//! filtering is layered on top by the legality oracle.

use std::collections::BTreeMap;

use crate::board::Position;
use crate::types::{Color, Coord, Piece, PieceKind};

/// Origin square to destination squares, one entry per piece that has
/// at least one move.
pub type MoveMap = BTreeMap<Coord, Vec<Coord>>;

const ORTHO_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAG_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Pseudo-legal destinations for the piece of `side` on `from`.
/// Returns an empty list when the square is empty or holds an opposing
/// piece. Never consults check status; never mutates.
pub fn pseudo_legal(pos: &Position, side: Color, from: Coord) -> Vec<Coord> {
    let Some(pc) = pos.piece_at(from) else {
        return Vec::new();
    };
    if pc.color != side {
        return Vec::new();
    }

    let mut out = Vec::new();
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, side, &mut out),
        PieceKind::Knight => gen_leaper(pos, from, side, &KNIGHT_DELTAS, &mut out),
        PieceKind::Bishop => gen_slider(pos, from, side, &DIAG_DIRS, &mut out),
        PieceKind::Rook => gen_slider(pos, from, side, &ORTHO_DIRS, &mut out),
        PieceKind::Queen => {
            gen_slider(pos, from, side, &ORTHO_DIRS, &mut out);
            gen_slider(pos, from, side, &DIAG_DIRS, &mut out);
        }
        PieceKind::King => {
            gen_leaper(pos, from, side, &KING_DELTAS, &mut out);
            gen_castle(pos, from, side, &mut out);
        }
    }
    out
}

/// Pseudo-legal moves for every piece of `side`.
pub fn side_moves(pos: &Position, side: Color) -> MoveMap {
    let mut map = MoveMap::new();
    for from in Coord::all() {
        let dests = pseudo_legal(pos, side, from);
        if !dests.is_empty() {
            map.insert(from, dests);
        }
    }
    map
}

fn gen_leaper(pos: &Position, from: Coord, side: Color, deltas: &[(i8, i8)], out: &mut Vec<Coord>) {
    for &(dc, dr) in deltas {
        if let Some(to) = from.offset(dc, dr) {
            match pos.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != side => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: Coord, side: Color, dirs: &[(i8, i8)], out: &mut Vec<Coord>) {
    for &(dc, dr) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dc, dr) {
            match pos.piece_at(to) {
                None => out.push(to),
                Some(pc) => {
                    if pc.color != side {
                        out.push(to);
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}

fn gen_pawn(pos: &Position, from: Coord, side: Color, out: &mut Vec<Coord>) {
    // White pawns advance toward row 0 (rank 8).
    let dir = -side.sign();
    let start_row = match side {
        Color::White => 6,
        Color::Black => 1,
    };

    if let Some(one) = from.offset(0, dir)
        && pos.piece_at(one).is_none()
    {
        out.push(one);
        if from.row() == start_row
            && let Some(two) = from.offset(0, 2 * dir)
            && pos.piece_at(two).is_none()
        {
            out.push(two);
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(dc, dir) {
            match pos.piece_at(to) {
                Some(pc) if pc.color != side => out.push(to),
                None if pos.en_passant == Some(to) => out.push(to),
                _ => {}
            }
        }
    }
}

/// Castling destinations: rights flag set, king on its home square, the
/// two squares between king and destination empty, and the rook still
/// on its corner. Whether the king passes through or into attack is the
/// legality oracle's concern, not geometry's.
fn gen_castle(pos: &Position, from: Coord, side: Color, out: &mut Vec<Coord>) {
    let home_row = match side {
        Color::White => 7,
        Color::Black => 0,
    };
    if from.col() != 4 || from.row() != home_row {
        return;
    }
    let rook = Piece::new(side, PieceKind::Rook);

    if pos.castling.kingside(side)
        && let (Some(f), Some(g), Some(corner)) =
            (from.offset(1, 0), from.offset(2, 0), from.offset(3, 0))
        && pos.piece_at(f).is_none()
        && pos.piece_at(g).is_none()
        && pos.piece_at(corner) == Some(rook)
    {
        out.push(g);
    }

    if pos.castling.queenside(side)
        && let (Some(d), Some(c), Some(corner)) =
            (from.offset(-1, 0), from.offset(-2, 0), from.offset(-4, 0))
        && pos.piece_at(d).is_none()
        && pos.piece_at(c).is_none()
        && pos.piece_at(corner) == Some(rook)
    {
        out.push(c);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
