//! Draw adjudication. The six rules are checked in a fixed priority
//! order; forced draws end the game on their own, claimable ones only
//! become available to the player.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::game::Game;
use crate::movegen::MoveMap;
use crate::rules;
use crate::types::{Coord, PieceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawReason {
    Stalemate,
    DeadPosition,
    SeventyFiveMoveRule,
    FivefoldRepetition,
    FiftyMoveRule,
    ThreefoldRepetition,
}

/// A draw that applies automatically, or one a player may claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawVerdict {
    Forced(DrawReason),
    Claimable(DrawReason),
}

impl DrawVerdict {
    pub fn reason(self) -> DrawReason {
        match self {
            DrawVerdict::Forced(r) | DrawVerdict::Claimable(r) => r,
        }
    }

    pub fn is_forced(self) -> bool {
        matches!(self, DrawVerdict::Forced(_))
    }
}

impl Position {
    /// True iff no sequence of legal moves can deliver checkmate.
    /// Exactly three material sets qualify: bare kings, king and
    /// bishop against king, king and knight against king.
    pub fn is_dead_position(&self) -> bool {
        let mut pieces = Vec::with_capacity(4);
        for c in Coord::all() {
            if let Some(pc) = self.piece_at(c) {
                pieces.push(pc);
                if pieces.len() > 3 {
                    return false;
                }
            }
        }
        let kings = pieces
            .iter()
            .filter(|p| p.kind == PieceKind::King)
            .count();
        match pieces.len() {
            2 => kings == 2,
            3 => {
                kings == 2
                    && pieces
                        .iter()
                        .any(|p| matches!(p.kind, PieceKind::Bishop | PieceKind::Knight))
            }
            _ => false,
        }
    }
}

impl Game {
    /// The first draw rule that fires for the current state, checked in
    /// priority order: stalemate, dead position, 75-move, 5-fold
    /// repetition (all forced), then the claimable 50-move and 3-fold
    /// rules. `legal` must be the current side's legal moves.
    pub fn draw_verdict(&self, legal: &MoveMap) -> Option<DrawVerdict> {
        let position = self.position();
        if legal.is_empty() && !rules::in_check(position, position.side_to_move) {
            return Some(DrawVerdict::Forced(DrawReason::Stalemate));
        }
        if position.is_dead_position() {
            return Some(DrawVerdict::Forced(DrawReason::DeadPosition));
        }
        if self.all_reversible_in_last(150) {
            return Some(DrawVerdict::Forced(DrawReason::SeventyFiveMoveRule));
        }
        if self.repetition_count() >= 5 {
            return Some(DrawVerdict::Forced(DrawReason::FivefoldRepetition));
        }
        if self.all_reversible_in_last(100) {
            return Some(DrawVerdict::Claimable(DrawReason::FiftyMoveRule));
        }
        if self.repetition_count() >= 3 {
            return Some(DrawVerdict::Claimable(DrawReason::ThreefoldRepetition));
        }
        None
    }

    /// Is any draw in effect or available to claim?
    pub fn is_draw(&self, legal: &MoveMap) -> bool {
        self.draw_verdict(legal).is_some()
    }

    /// True iff at least `window` half-moves have been played and none
    /// of the most recent `window` was a capture or a pawn move.
    fn all_reversible_in_last(&self, window: usize) -> bool {
        let history = self.history();
        history.len() >= window
            && history[history.len() - window..]
                .iter()
                .all(|record| !record.irreversible)
    }
}
