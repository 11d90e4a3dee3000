use crate::types::Color;

/// Errors surfaced by the game driver and search setup.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal move at row {row}, col {col}")]
    IllegalMove { row: u8, col: u8 },

    #[error("row/col out of range: ({row}, {col})")]
    OutOfBounds { row: u8, col: u8 },

    #[error("game is already over")]
    GameOver,

    #[error("{0:?} is controlled by the computer")]
    ComputerToMove(Color),

    #[error("{0:?} is controlled by a human")]
    HumanToMove(Color),

    #[error("{0:?} has a legal move and cannot pass")]
    PassNotAllowed(Color),

    #[error("{0:?} has no legal moves")]
    NoLegalMove(Color),

    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u8),

    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),
}
