use thiserror::Error;

/// Errors reported by the rules engine. Every failure is local: the
/// game state is left untouched and the caller can recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The four-field position encoding could not be parsed.
    #[error("invalid position encoding: {0}")]
    InvalidEpd(String),

    /// Not a recognized algebraic square name (`a1`..`h8`).
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// The move could not be resolved against the current position.
    #[error("invalid move {from} -> {to}: {reason}")]
    InvalidMove {
        from: String,
        to: String,
        reason: String,
    },

    /// Promotion to the given kind is not allowed.
    #[error("invalid promotion target: {0}")]
    InvalidPromotion(String),

    /// `promote` was called while no pawn is awaiting promotion.
    #[error("no promotion is pending")]
    NoPendingPromotion,

    /// `undo` was called on a game with no move history.
    #[error("no moves to undo")]
    NothingToUndo,
}
