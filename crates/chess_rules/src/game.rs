//! The move executor: owns the position plus everything with game-long
//! memory (history, log, captured pieces, repetition counts) and keeps
//! them consistent across apply, undo, and promotion.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::error::ChessError;
use crate::history::{Captures, MoveRecord};
use crate::movegen::MoveMap;
use crate::rules::{self, GameStatus};
use crate::types::{Color, Coord, Piece, PieceKind};

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
}

/// A single game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    initial: String,
    players: [String; 2],
    repetition: HashMap<String, u32>,
    log: Vec<String>,
    captured: Captures,
    history: Vec<MoveRecord>,
}

impl Game {
    /// New game from the standard starting position.
    pub fn new() -> Game {
        Game::with_position(Position::startpos())
    }

    /// New game from an arbitrary encoded position.
    pub fn from_epd(text: &str) -> Result<Game, ChessError> {
        Ok(Game::with_position(Position::from_epd(text)?))
    }

    fn with_position(position: Position) -> Game {
        let epd = position.to_epd();
        let mut repetition = HashMap::new();
        // The starting position counts as its own first occurrence.
        repetition.insert(epd.clone(), 1);
        Game {
            position,
            initial: epd,
            players: ["White".to_string(), "Black".to_string()],
            repetition,
            log: Vec::new(),
            captured: Captures::new(),
            history: Vec::new(),
        }
    }

    /// Reassemble a game from snapshot parts, verbatim.
    pub(crate) fn restore(
        position: Position,
        initial: String,
        players: [String; 2],
        repetition: HashMap<String, u32>,
        log: Vec<String>,
        captured: Captures,
        history: Vec<MoveRecord>,
    ) -> Game {
        Game {
            position,
            initial,
            players,
            repetition,
            log,
            captured,
            history,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Canonical encoding the game started from.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn players(&self) -> &[String; 2] {
        &self.players
    }

    pub fn set_players(&mut self, white: &str, black: &str) {
        self.players = [white.to_string(), black.to_string()];
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn captured(&self) -> &Captures {
        &self.captured
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// How often the current position has occurred so far.
    pub fn repetition_count(&self) -> u32 {
        *self
            .repetition
            .get(&self.position.to_epd())
            .unwrap_or(&0)
    }

    /// Occurrence count for every encoding seen this game.
    pub fn repetition_table(&self) -> &HashMap<String, u32> {
        &self.repetition
    }

    pub fn legal_moves(&self) -> MoveMap {
        rules::legal_moves(&self.position)
    }

    pub fn game_status(&self) -> GameStatus {
        rules::game_status(&self.position)
    }

    pub fn in_check(&self) -> bool {
        rules::in_check(&self.position, self.position.side_to_move)
    }

    /// Apply a move given as two algebraic square names.
    ///
    /// Legality is the caller's responsibility: draw the move from
    /// [`Game::legal_moves`] first. `apply` only rejects what it cannot
    /// resolve at all: malformed square names, an empty origin, or a
    /// piece that does not belong to the side to move. Nothing is
    /// mutated on any error path.
    pub fn apply(&mut self, from: &str, to: &str) -> Result<(), ChessError> {
        let from =
            Coord::from_algebraic(from).ok_or_else(|| ChessError::InvalidSquare(from.into()))?;
        let to = Coord::from_algebraic(to).ok_or_else(|| ChessError::InvalidSquare(to.into()))?;
        self.apply_coords(from, to)
    }

    /// [`Game::apply`] for callers already holding typed coordinates.
    pub fn apply_coords(&mut self, from: Coord, to: Coord) -> Result<(), ChessError> {
        let piece = self
            .position
            .piece_at(from)
            .ok_or_else(|| invalid_move(from, to, "no piece on the origin square"))?;
        if piece.color != self.position.side_to_move {
            return Err(invalid_move(from, to, "piece belongs to the opponent"));
        }

        let is_en_passant = piece.kind == PieceKind::Pawn
            && self.position.en_passant == Some(to)
            && self.position.piece_at(to).is_none();
        let is_capture = self.position.piece_at(to).is_some() || is_en_passant;

        self.history.push(MoveRecord {
            mover: piece.color,
            from,
            to,
            piece: piece.kind,
            log_before: self.log.clone(),
            epd_before: self.position.to_epd(),
            captured_before: self.captured.clone(),
            irreversible: piece.kind == PieceKind::Pawn || is_capture,
        });
        self.log.push(log_entry(piece, from, to, is_capture));

        if let Some(victim) = self.position.apply_move(from, to) {
            self.captured.record(piece.color, victim.kind);
        }

        *self.repetition.entry(self.position.to_epd()).or_insert(0) += 1;
        Ok(())
    }

    /// Take back the most recent move, restoring the encoding, move
    /// log, and captured table stored in its history node. Repetition
    /// counts are append-only and are deliberately not rolled back.
    pub fn undo(&mut self) -> Result<(), ChessError> {
        let record = match self.history.pop() {
            Some(r) => r,
            None => return Err(ChessError::NothingToUndo),
        };
        let restored = match Position::from_epd(&record.epd_before) {
            Ok(p) => p,
            Err(e) => {
                // Unparseable snapshots can only come from a tampered
                // deserialized game; leave the history intact.
                self.history.push(record);
                return Err(e);
            }
        };
        self.position = restored;
        self.log = record.log_before;
        self.captured = record.captured_before;
        Ok(())
    }

    /// Square of a pawn awaiting promotion, if the last applied move
    /// put one on its final rank and it has not been promoted yet.
    pub fn pending_promotion(&self) -> Option<Coord> {
        let last = self.history.last()?;
        if last.piece != PieceKind::Pawn {
            return None;
        }
        let final_row = match last.mover {
            Color::White => 0,
            Color::Black => 7,
        };
        if last.to.row() != final_row {
            return None;
        }
        match self.position.piece_at(last.to) {
            Some(pc) if pc.kind == PieceKind::Pawn && pc.color == last.mover => Some(last.to),
            _ => None,
        }
    }

    /// Resolve a pending promotion by replacing the pawn with `kind`,
    /// signed by the side that moved it, and tagging the log entry.
    pub fn promote(&mut self, kind: PieceKind) -> Result<(), ChessError> {
        let square = self
            .pending_promotion()
            .ok_or(ChessError::NoPendingPromotion)?;
        if !PieceKind::PROMOTION_TARGETS.contains(&kind) {
            return Err(ChessError::InvalidPromotion(format!("{kind:?}")));
        }
        if let Some(pawn) = self.position.piece_at(square) {
            self.position
                .set_piece(square, Some(Piece::new(pawn.color, kind)));
        }
        if let Some(entry) = self.log.last_mut() {
            entry.push('=');
            entry.push(kind.letter());
        }
        Ok(())
    }

    /// Decided result, if the game is over. Claimable draws do not end
    /// the game here; callers turn an accepted claim into a result.
    pub fn outcome(&self) -> Option<Outcome> {
        // A side with no king is an abnormal terminal state.
        let white_king = self.position.king_coord(Color::White).is_some();
        let black_king = self.position.king_coord(Color::Black).is_some();
        match (white_king, black_king) {
            (false, false) => return Some(Outcome::Draw),
            (false, true) => return Some(Outcome::BlackWins),
            (true, false) => return Some(Outcome::WhiteWins),
            (true, true) => {}
        }

        let legal = self.legal_moves();
        if legal.is_empty() && self.in_check() {
            return Some(match self.position.side_to_move {
                Color::White => Outcome::BlackWins,
                Color::Black => Outcome::WhiteWins,
            });
        }
        match self.draw_verdict(&legal) {
            Some(v) if v.is_forced() => Some(Outcome::Draw),
            _ => None,
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

fn invalid_move(from: Coord, to: Coord, reason: &str) -> ChessError {
    ChessError::InvalidMove {
        from: from.to_string(),
        to: to.to_string(),
        reason: reason.to_string(),
    }
}

/// Human-readable entry for the move log. Castling is written with
/// zeros, captures are marked with `x`, pawn moves carry no piece
/// letter (pawn captures are prefixed by the origin file).
fn log_entry(piece: Piece, from: Coord, to: Coord, is_capture: bool) -> String {
    if piece.kind == PieceKind::King && to.col().abs_diff(from.col()) == 2 {
        let notation = if to.col() > from.col() { "0-0" } else { "0-0-0" };
        return notation.to_string();
    }
    match (piece.kind, is_capture) {
        (PieceKind::Pawn, true) => format!("{}x{to}", from.file_char()),
        (PieceKind::Pawn, false) => to.to_string(),
        (kind, true) => format!("{}x{to}", kind.letter()),
        (kind, false) => format!("{}{to}", kind.letter()),
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
