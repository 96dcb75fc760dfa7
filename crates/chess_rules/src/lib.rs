//! Chess rules engine: board state, pseudo-legal and legal move
//! generation, check/checkmate/stalemate, draw adjudication, and move
//! history with undo, all keyed to a compact four-field position
//! encoding. No search, no UI: callers drive every operation.

pub mod board;
pub mod draws;
pub mod epd;
pub mod error;
pub mod game;
pub mod history;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod snapshot;
pub mod types;

pub use board::*;
pub use draws::*;
pub use epd::START_POSITION;
pub use error::ChessError;
pub use game::*;
pub use history::*;
pub use movegen::*;
pub use perft::perft;
pub use rules::*;
pub use snapshot::GameSnapshot;
pub use types::*;
