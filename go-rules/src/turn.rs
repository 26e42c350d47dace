use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// A committed placement in the game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub stone: Stone,
    pub pos: Point,
    pub captured: u32,
}

impl Turn {
    pub fn play(stone: Stone, pos: Point, captured: u32) -> Self {
        Turn {
            stone,
            pos,
            captured,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured > 0
    }
}
