//! Whole-game serialization: everything needed to park a game and pick
//! it up later, including the history chain. The persistence layer owns
//! the file framing; this module only defines the structure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::error::ChessError;
use crate::game::Game;
use crate::history::{Captures, MoveRecord};

/// Serialized form of a [`Game`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Encoding the game started from.
    pub initial: String,
    /// Display names, White then Black.
    pub players: [String; 2],
    pub captured: Captures,
    /// Occurrence count per encoding, for repetition claims.
    pub repetition: HashMap<String, u32>,
    /// Current position encoding.
    pub epd: String,
    pub log: Vec<String>,
    /// History records, oldest first.
    pub history: Vec<MoveRecord>,
}

impl Game {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            initial: self.initial().to_string(),
            players: self.players().clone(),
            captured: self.captured().clone(),
            repetition: self.repetition_table().clone(),
            epd: self.position().to_epd(),
            log: self.log().to_vec(),
            history: self.history().to_vec(),
        }
    }

    /// Rebuild a game verbatim from its snapshot. Fails only when the
    /// current encoding does not parse.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Game, ChessError> {
        let position = Position::from_epd(&snapshot.epd)?;
        Ok(Game::restore(
            position,
            snapshot.initial,
            snapshot.players,
            snapshot.repetition,
            snapshot.log,
            snapshot.captured,
            snapshot.history,
        ))
    }
}
