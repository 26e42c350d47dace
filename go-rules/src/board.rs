use std::collections::HashSet;
use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::Point;
use crate::stone::{Cell, Stone};

/// A square grid of cells stored as a flat row-major array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    size: u8,
}

impl Grid {
    /// Create an empty grid with the given side length.
    pub fn new(size: u8) -> Self {
        Grid {
            cells: vec![Cell::Empty; size as usize * size as usize],
            size,
        }
    }

    /// Create a grid from a square matrix of cells, one inner vec per row.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let size = rows.len();
        assert!(
            size <= u8::MAX as usize && rows.iter().all(|row| row.len() == size),
            "malformed board matrix"
        );

        Grid {
            cells: rows.into_iter().flatten().collect(),
            size: size as u8,
        }
    }

    /// Build a grid from an ASCII layout. 'B' = Black, 'W' = White, anything else is empty.
    pub fn from_layout(layout: &[&str]) -> Self {
        let rows = layout
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'B' => Cell::Black,
                        'W' => Cell::White,
                        _ => Cell::Empty,
                    })
                    .collect()
            })
            .collect();
        Grid::from_rows(rows)
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn on_board(&self, point: Point) -> bool {
        point.row < self.size && point.col < self.size
    }

    /// The cell at `point`, or `None` when the point is off the board.
    pub fn get(&self, point: Point) -> Option<Cell> {
        self.on_board(point).then(|| self.cells[self.idx(point)])
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.get(point).and_then(Cell::stone)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Row-major matrix copy, the shape sent over the wire.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.size.max(1) as usize)
            .map(<[Cell]>::to_vec)
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(Arc::from(self.cells.as_slice()))
    }

    // -- Mutation --

    /// Write a cell. Off-board points are ignored.
    pub fn set(&mut self, point: Point, cell: Cell) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, point: Point) {
        self.set(point, Cell::Empty);
    }

    // -- Geometry --

    /// The orthogonal neighbors of `point` that lie on the board.
    pub fn neighbors(&self, Point { row, col }: Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push(Point::new(row - 1, col));
        }
        if row + 1 < self.size {
            result.push(Point::new(row + 1, col));
        }
        if col > 0 {
            result.push(Point::new(row, col - 1));
        }
        if col + 1 < self.size {
            result.push(Point::new(row, col + 1));
        }
        result
    }

    #[inline]
    pub(crate) fn idx(&self, point: Point) -> usize {
        point.row as usize * self.size as usize + point.col as usize
    }
}

/// Exact, hashable copy of a grid's cells. Two snapshots are equal iff the
/// boards they were taken from hold the same stones on the same points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot(Arc<[Cell]>);

impl Snapshot {
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }
}

/// Append-only record of the positions reached by committed moves.
#[derive(Debug, Clone, Default)]
pub struct History {
    order: Vec<Snapshot>,
    seen: HashSet<Snapshot>,
}

impl History {
    pub fn contains(&self, snapshot: &Snapshot) -> bool {
        self.seen.contains(snapshot)
    }

    /// Append a snapshot. Returns `false` and leaves the history unchanged
    /// when the position was already recorded.
    pub fn push(&mut self, snapshot: Snapshot) -> bool {
        if !self.seen.insert(snapshot.clone()) {
            return false;
        }
        self.order.push(snapshot);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.order.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.order.iter()
    }
}

/// The committed board plus the history of positions it has passed through.
/// Holds no rules; every write goes through the move validator.
#[derive(Debug, Clone)]
pub struct BoardState {
    grid: Grid,
    history: History,
}

impl BoardState {
    pub fn new(size: u8) -> Self {
        Self::from_grid(Grid::new(size))
    }

    /// Start from an arbitrary position. The starting position itself is not
    /// recorded in the history.
    pub fn from_grid(grid: Grid) -> Self {
        BoardState {
            grid,
            history: History::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> u8 {
        self.grid.size()
    }

    pub fn get(&self, point: Point) -> Option<Cell> {
        self.grid.get(point)
    }

    pub fn set(&mut self, point: Point, cell: Cell) {
        self.grid.set(point, cell);
    }

    /// A deep copy of the grid to try a move on.
    pub fn trial(&self) -> Grid {
        self.grid.clone()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.grid.snapshot()
    }

    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.grid.rows()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_contains(&self, snapshot: &Snapshot) -> bool {
        self.history.contains(snapshot)
    }

    pub fn append_history(&mut self, snapshot: Snapshot) -> bool {
        self.history.push(snapshot)
    }

    /// Swap in an already validated grid.
    pub(crate) fn replace_grid(&mut self, grid: Grid) {
        debug_assert_eq!(grid.size(), self.grid.size());
        self.grid = grid;
    }
}
