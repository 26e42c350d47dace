use serde::Serialize;
use std::fmt;

/// Why a placement was refused. The board is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveError {
    OutOfBounds,
    OccupiedCell,
    KoViolation,
    SuicideMove,
    SuperkoViolation,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "not on board"),
            MoveError::OccupiedCell => write!(f, "occupied cell"),
            MoveError::KoViolation => write!(f, "ko violation"),
            MoveError::SuicideMove => write!(f, "suicide"),
            MoveError::SuperkoViolation => write!(f, "board position repeats"),
        }
    }
}

impl std::error::Error for MoveError {}
