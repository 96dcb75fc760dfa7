use serde::{Deserialize, Serialize};

use crate::types::{Color, Coord, PieceKind};

/// Piece kinds captured by each side, in capture order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captures {
    pub white: Vec<PieceKind>,
    pub black: Vec<PieceKind>,
}

impl Captures {
    pub fn new() -> Captures {
        Captures::default()
    }

    pub fn record(&mut self, by: Color, kind: PieceKind) {
        match by {
            Color::White => self.white.push(kind),
            Color::Black => self.black.push(kind),
        }
    }

    pub fn by(&self, side: Color) -> &[PieceKind] {
        match side {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

/// One move of history. Immutable once pushed; the embedded pre-move
/// snapshot is what `undo` restores, so the whole game tail can be
/// rebuilt from any node. Records live in a plain vector, newest last,
/// which serializes naturally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mover: Color,
    pub from: Coord,
    pub to: Coord,
    pub piece: PieceKind,
    /// Move log as it stood before this move.
    pub log_before: Vec<String>,
    /// Position encoding before this move.
    pub epd_before: String,
    /// Captured-piece table before this move.
    pub captured_before: Captures,
    /// Capture or pawn move: resets the 50/75-move windows.
    pub irreversible: bool,
}
