use serde::{Deserialize, Serialize};

use crate::types::{Color, Coord, Piece, PieceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn kingside(self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }
}

/// Authoritative position state. Deliberately a flat value type:
/// legality testing copies the position once per candidate move, so the
/// snapshot must stay trivially copyable.
///
/// `board[row][col]` holds `kind id × side sign` (0 = empty), with row 0
/// being rank 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [[i8; 8]; 8],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Coord>,
}

impl Position {
    pub fn empty() -> Position {
        Position {
            board: [[0; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingRights {
                wk: false,
                wq: false,
                bk: false,
                bq: false,
            },
            en_passant: None,
        }
    }

    pub fn piece_at(&self, c: Coord) -> Option<Piece> {
        Piece::from_signed(self.board[c.row() as usize][c.col() as usize])
    }

    pub fn set_piece(&mut self, c: Coord, pc: Option<Piece>) {
        self.board[c.row() as usize][c.col() as usize] = pc.map_or(0, Piece::signed_id);
    }

    pub fn king_coord(&self, color: Color) -> Option<Coord> {
        let king = Piece::new(color, PieceKind::King).signed_id();
        Coord::all().find(|&c| self.board[c.row() as usize][c.col() as usize] == king)
    }

    /// Apply a move at position level and return the captured piece, if
    /// any. Handles the special-move side effects: en-passant removal,
    /// castling rook relocation, castling-rights bookkeeping, the
    /// en-passant window, and the side-to-move switch. Legality is the
    /// caller's concern; an empty origin is a no-op.
    ///
    /// Promotion is not resolved here: a pawn reaching the last rank
    /// stays a pawn until the explicit promotion step.
    pub fn apply_move(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        let piece = self.piece_at(from)?;
        let mut captured = self.piece_at(to);

        // En passant removes the passed pawn, not the target square.
        if piece.kind == PieceKind::Pawn
            && self.en_passant == Some(to)
            && captured.is_none()
            && let Some(victim_sq) = to.offset(0, piece.color.sign())
        {
            captured = self.piece_at(victim_sq);
            self.set_piece(victim_sq, None);
        }

        self.set_piece(from, None);
        self.set_piece(to, Some(piece));

        // A two-column king move is castling: the rook hops to the
        // king's near side and the corner empties.
        if piece.kind == PieceKind::King && to.col().abs_diff(from.col()) == 2 {
            let row = from.row();
            let (rook_from, rook_to) = if to.col() > from.col() {
                (Coord::new(7, row), Coord::new(to.col() - 1, row))
            } else {
                (Coord::new(0, row), Coord::new(to.col() + 1, row))
            };
            if let (Some(rf), Some(rt)) = (rook_from, rook_to) {
                let rook = self.piece_at(rf);
                self.set_piece(rf, None);
                self.set_piece(rt, rook);
            }
        }

        // Castling rights: a king move clears both flags for the mover,
        // a rook moving off its home square clears that flag, and a
        // capture on a rook home square clears the victim's flag.
        match piece.kind {
            PieceKind::King => match piece.color {
                Color::White => {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                Color::Black => {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
            },
            PieceKind::Rook => self.clear_rook_right(piece.color, from),
            _ => {}
        }
        if let Some(victim) = captured
            && victim.kind == PieceKind::Rook
        {
            // En passant only ever captures pawns, so `to` is where the
            // victim stood.
            self.clear_rook_right(victim.color, to);
        }

        // Only a genuine two-square pawn advance opens the en-passant
        // window, and only for the single reply that follows.
        self.en_passant = if piece.kind == PieceKind::Pawn && to.row().abs_diff(from.row()) == 2 {
            Coord::new(from.col(), (from.row() + to.row()) / 2)
        } else {
            None
        };

        self.side_to_move = self.side_to_move.other();
        captured
    }

    fn clear_rook_right(&mut self, color: Color, at: Coord) {
        let home_row = match color {
            Color::White => 7,
            Color::Black => 0,
        };
        if at.row() != home_row {
            return;
        }
        match (color, at.col()) {
            (Color::White, 0) => self.castling.wq = false,
            (Color::White, 7) => self.castling.wk = false,
            (Color::Black, 0) => self.castling.bq = false,
            (Color::Black, 7) => self.castling.bk = false,
            _ => {}
        }
    }
}
