use std::fmt;
use std::future::Future;

use go_rules::{Cell, Point};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// What the move service is told after each local move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub last_move: Point,
    pub board_state: Vec<Vec<Cell>>,
}

/// A move as the service sent it. Coordinates are not trusted to be on the
/// board, or even non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMove {
    pub row: i32,
    pub col: i32,
}

impl WireMove {
    /// The point on a `size`-wide board, if the move lands on one.
    pub fn to_point(self, size: u8) -> Option<Point> {
        let row = u8::try_from(self.row).ok()?;
        let col = u8::try_from(self.col).ok()?;
        (row < size && col < size).then_some(Point::new(row, col))
    }
}

impl From<Point> for WireMove {
    fn from(p: Point) -> Self {
        WireMove {
            row: p.row as i32,
            col: p.col as i32,
        }
    }
}

impl fmt::Display for WireMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    #[serde(rename = "move", alias = "ai_move")]
    pub mv: WireMove,
}

/// The remote move generator. One request per turn cycle; an `Err` means no
/// move was obtained at all.
pub trait MoveClient {
    fn request_move(
        &self,
        request: &MoveRequest,
    ) -> impl Future<Output = Result<WireMove, ClientError>> + Send;
}
