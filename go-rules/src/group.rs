//! Connectivity and liberty analysis over a [`Grid`].
//!
//! Groups and liberties are never cached: every call reads the grid as it is
//! right now, so a trial grid with captures applied gives post-capture answers.

use crate::Point;
use crate::board::Grid;
use crate::stone::Stone;

/// Flood-fill the group of `stone`-colored cells 4-connected to `seed`.
/// Returns an empty group when `seed` does not hold `stone`.
pub fn find_group(grid: &Grid, seed: Point, stone: Stone) -> Vec<Point> {
    let mut visited = vec![false; grid.cells().len()];
    find_group_with(grid, seed, stone, &mut visited)
}

/// Flood fill sharing a caller-owned visited set, so several seeds can be
/// expanded without walking the same group twice.
pub fn find_group_with(
    grid: &Grid,
    seed: Point,
    stone: Stone,
    visited: &mut [bool],
) -> Vec<Point> {
    if grid.stone_at(seed) != Some(stone) {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut stack = vec![seed];

    while let Some(p) = stack.pop() {
        let vi = grid.idx(p);
        if visited[vi] {
            continue;
        }
        visited[vi] = true;
        result.push(p);
        for n in grid.neighbors(p) {
            if grid.stone_at(n) == Some(stone) && !visited[grid.idx(n)] {
                stack.push(n);
            }
        }
    }

    result
}

/// Distinct empty points adjacent to any member of `group`.
pub fn liberties(grid: &Grid, group: &[Point]) -> Vec<Point> {
    let mut seen = vec![false; grid.cells().len()];
    let mut libs = Vec::new();
    for &p in group {
        for n in grid.neighbors(p) {
            let ni = grid.idx(n);
            if !seen[ni] && grid.stone_at(n).is_none() {
                seen[ni] = true;
                libs.push(n);
            }
        }
    }
    libs
}

/// Number of distinct liberties of `group`; a point shared by two members counts once.
pub fn count_liberties(grid: &Grid, group: &[Point]) -> usize {
    liberties(grid, group).len()
}

/// Liberty count of whatever group occupies `point`. Zero for an empty point.
pub fn liberties_at(grid: &Grid, point: Point) -> usize {
    match grid.stone_at(point) {
        Some(stone) => count_liberties(grid, &find_group(grid, point, stone)),
        None => 0,
    }
}
