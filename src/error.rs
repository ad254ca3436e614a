//! Error types for game operations.

use thiserror::Error;

use crate::types::{Position, Side};

/// Errors surfaced by the controller and the move-submission API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: u8, col: u8 },

    /// Cell occupied, or the placement would capture nothing.
    #[error("illegal move at {position}")]
    IllegalMove { position: Position },

    #[error("game is already over")]
    GameOver,

    #[error("it is not the player's turn")]
    NotPlayersTurn,

    #[error("it is not AI's turn")]
    NotAiTurn,

    #[error("{side} has no legal moves")]
    NoLegalMoves { side: Side },

    #[error("AI selected an illegal move at {position}")]
    AiIllegalMove { position: Position },

    #[error("invalid board layout: {0}")]
    InvalidBoard(String),

    #[error("unknown difficulty level: {0:?}")]
    UnknownLevel(String),
}
