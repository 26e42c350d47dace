use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// Ko status tracking. Set after a move captures exactly one stone; lives for
/// one ply and forbids the captured color from refilling that point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KoPoint {
    pub pos: Point,
    pub illegal: Stone,
}

impl KoPoint {
    pub fn forbids(&self, point: Point, stone: Stone) -> bool {
        self.pos == point && self.illegal == stone
    }
}
