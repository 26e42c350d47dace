//! Move legality: occupancy, ko, suicide and positional repetition.
//!
//! Evaluation happens on a trial copy of the grid. The committed board is
//! only written when an [`Evaluation`] is committed, so a rejected move never
//! leaves a trace, including captures performed while evaluating it.

use std::fmt;

use crate::Point;
use crate::board::{BoardState, Grid, Snapshot};
use crate::capture::resolve_captures;
use crate::error::MoveError;
use crate::group::{count_liberties, find_group};
use crate::ko::KoPoint;
use crate::stone::{Cell, Stone};

/// Outcome of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub pos: Point,
    pub stone: Stone,
    pub captured: Vec<Point>,
    /// Ko left behind for the next ply.
    pub ko: Option<KoPoint>,
}

impl Placement {
    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }
}

/// The board moved on between evaluating a placement and committing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleEvaluation;

impl fmt::Display for StaleEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board changed since the move was evaluated")
    }
}

impl std::error::Error for StaleEvaluation {}

/// A move that passed every check against one particular position, waiting
/// to be committed.
#[derive(Debug, Clone)]
pub struct Evaluation {
    base: Snapshot,
    grid: Grid,
    snapshot: Snapshot,
    placement: Placement,
}

impl Evaluation {
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Write the evaluated position to `board`, record it in the history and
    /// replace the ko state.
    ///
    /// Refused, leaving `board` and `ko` untouched, unless `board` still
    /// holds the position the move was evaluated against and the result has
    /// not entered the history since.
    pub fn commit(
        self,
        board: &mut BoardState,
        ko: &mut Option<KoPoint>,
    ) -> Result<Placement, StaleEvaluation> {
        if board.grid().cells() != self.base.cells() || board.history_contains(&self.snapshot) {
            return Err(StaleEvaluation);
        }
        Ok(self.apply(board, ko))
    }

    fn apply(self, board: &mut BoardState, ko: &mut Option<KoPoint>) -> Placement {
        board.replace_grid(self.grid);
        board.append_history(self.snapshot);
        *ko = self.placement.ko.clone();
        self.placement
    }
}

/// Checks a placement against the committed board and the current ko.
pub struct MoveValidator<'a> {
    board: &'a BoardState,
    ko: Option<&'a KoPoint>,
}

impl<'a> MoveValidator<'a> {
    pub fn new(board: &'a BoardState, ko: Option<&'a KoPoint>) -> Self {
        MoveValidator { board, ko }
    }

    pub fn evaluate(&self, point: Point, stone: Stone) -> Result<Evaluation, MoveError> {
        match self.board.get(point) {
            None => return Err(MoveError::OutOfBounds),
            Some(cell) if !cell.is_empty() => return Err(MoveError::OccupiedCell),
            Some(_) => {}
        }

        if self.ko.is_some_and(|ko| ko.forbids(point, stone)) {
            return Err(MoveError::KoViolation);
        }

        let mut grid = self.board.trial();
        grid.set(point, Cell::from(stone));
        let captures = resolve_captures(&mut grid, point, stone);

        // A capturing move is never suicide.
        let own = find_group(&grid, point, stone);
        if captures.is_empty() && count_liberties(&grid, &own) == 0 {
            return Err(MoveError::SuicideMove);
        }

        let snapshot = grid.snapshot();
        if self.board.history_contains(&snapshot) {
            return Err(MoveError::SuperkoViolation);
        }

        let ko = match (captures.count(), captures.single_capture) {
            (1, Some(pos)) => Some(KoPoint {
                pos,
                illegal: stone.opp(),
            }),
            _ => None,
        };

        Ok(Evaluation {
            base: self.board.snapshot(),
            grid,
            snapshot,
            placement: Placement {
                pos: point,
                stone,
                captured: captures.captured,
                ko,
            },
        })
    }

    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        self.evaluate(point, stone).is_ok()
    }
}

/// Validate and, if legal, commit a placement in one step.
pub fn play(
    board: &mut BoardState,
    ko: &mut Option<KoPoint>,
    point: Point,
    stone: Stone,
) -> Result<Placement, MoveError> {
    let evaluation = MoveValidator::new(board, ko.as_ref()).evaluate(point, stone)?;
    // Nothing can touch `board` between evaluating and applying here.
    Ok(evaluation.apply(board, ko))
}
