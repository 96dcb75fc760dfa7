//! The four-field position encoding: piece placement, side to move,
//! castling rights, en-passant target. It is both the serialization
//! format and the repetition-hash key, so `to_epd` must be the exact
//! inverse of `from_epd` for every accepted value.

use crate::board::{CastlingRights, Position};
use crate::error::ChessError;
use crate::types::{Color, Coord, Piece};

/// Standard starting position.
pub const START_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

impl Position {
    pub fn startpos() -> Position {
        Position::from_epd(START_POSITION).expect("start position encoding is always valid")
    }

    /// Parse the four-field encoding. Strict: a malformed field in any
    /// of the four parts is an error, never a silent default.
    pub fn from_epd(text: &str) -> Result<Position, ChessError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(ChessError::InvalidEpd(format!(
                "expected 4 fields, found {}",
                fields.len()
            )));
        }

        let mut pos = Position::empty();

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::InvalidEpd(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }
        for (row, rank) in ranks.iter().enumerate() {
            let mut col: u32 = 0;
            for ch in rank.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d;
                } else {
                    let piece = Piece::from_letter(ch).ok_or_else(|| {
                        ChessError::InvalidEpd(format!("unrecognized piece letter '{ch}'"))
                    })?;
                    if let Some(c) = Coord::new(col as u8, row as u8) {
                        pos.set_piece(c, Some(piece));
                    }
                    col += 1;
                }
                if col > 8 {
                    break;
                }
            }
            if col != 8 {
                return Err(ChessError::InvalidEpd(format!(
                    "rank '{rank}' does not describe exactly 8 squares"
                )));
            }
        }

        pos.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(ChessError::InvalidEpd(format!(
                    "side to move must be 'w' or 'b', found '{other}'"
                )));
            }
        };

        if fields[2] != "-" {
            for ch in fields[2].chars() {
                match ch {
                    'K' => pos.castling.wk = true,
                    'Q' => pos.castling.wq = true,
                    'k' => pos.castling.bk = true,
                    'q' => pos.castling.bq = true,
                    other => {
                        return Err(ChessError::InvalidEpd(format!(
                            "unrecognized castling flag '{other}'"
                        )));
                    }
                }
            }
        }

        pos.en_passant = match fields[3] {
            "-" => None,
            sq => Some(Coord::from_algebraic(sq).ok_or_else(|| {
                ChessError::InvalidEpd(format!("bad en-passant square '{sq}'"))
            })?),
        };

        Ok(pos)
    }

    /// Encode the position. Total over every valid `Position`.
    pub fn to_epd(&self) -> String {
        let mut out = String::with_capacity(64);

        for row in 0..8u8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0u8;
            for col in 0..8u8 {
                let piece = Coord::new(col, row).and_then(|c| self.piece_at(c));
                match piece {
                    Some(pc) => {
                        if empty > 0 {
                            out.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        out.push(pc.letter());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push((b'0' + empty) as char);
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        out.push_str(&castling_field(self.castling));

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out
    }
}

fn castling_field(rights: CastlingRights) -> String {
    let mut s = String::new();
    if rights.wk {
        s.push('K');
    }
    if rights.wq {
        s.push('Q');
    }
    if rights.bk {
        s.push('k');
    }
    if rights.bq {
        s.push('q');
    }
    if s.is_empty() {
        s.push('-');
    }
    s
}

#[cfg(test)]
#[path = "epd_tests.rs"]
mod epd_tests;
