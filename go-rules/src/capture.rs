use crate::Point;
use crate::board::Grid;
use crate::group::{count_liberties, find_group_with};
use crate::stone::Stone;

/// Stones removed by a single placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureResult {
    pub captured: Vec<Point>,
    /// Location of the last one-stone group removed, if any.
    pub single_capture: Option<Point>,
}

impl CaptureResult {
    pub fn count(&self) -> usize {
        self.captured.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captured.is_empty()
    }
}

/// Remove every opposing group adjacent to `placed` that has no liberties left.
///
/// `placed` must already hold `stone` on `grid`. Whole groups are removed or
/// none of their stones are.
pub fn resolve_captures(grid: &mut Grid, placed: Point, stone: Stone) -> CaptureResult {
    let opponent = stone.opp();
    let mut visited = vec![false; grid.cells().len()];
    let mut result = CaptureResult::default();

    for n in grid.neighbors(placed) {
        if grid.stone_at(n) != Some(opponent) {
            continue;
        }
        let group = find_group_with(grid, n, opponent, &mut visited);
        if group.is_empty() || count_liberties(grid, &group) > 0 {
            continue;
        }

        if group.len() == 1 {
            result.single_capture = Some(group[0]);
        }
        for &p in &group {
            grid.clear(p);
        }
        result.captured.extend(group);
    }

    result
}
