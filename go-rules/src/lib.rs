pub mod board;
pub mod capture;
pub mod engine;
pub mod error;
pub mod group;
pub mod ko;
pub mod stone;
pub mod turn;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A board intersection, zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: u8,
    pub col: u8,
}

impl Point {
    pub const fn new(row: u8, col: u8) -> Self {
        Point { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub use board::{BoardState, Grid, History, Snapshot};
pub use capture::CaptureResult;
pub use engine::{Captures, Engine, GameState};
pub use error::MoveError;
pub use ko::KoPoint;
pub use stone::{Cell, Stone};
pub use turn::Turn;
pub use validator::{Evaluation, MoveValidator, Placement, StaleEvaluation};
