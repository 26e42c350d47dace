use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::{BoardState, Grid};
use crate::error::MoveError;
use crate::ko::KoPoint;
use crate::stone::{Cell, Stone};
use crate::turn::Turn;
use crate::validator::{self, MoveValidator, Placement};

/// Captures indexed by the color that made them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<Cell>,
    pub size: u8,
    pub captures: Captures,
    pub ko: Option<KoPoint>,
}

/// A single game's rule state: committed board, position history, ko and the
/// record of moves. Turn order is left to the caller.
#[derive(Debug, Clone)]
pub struct Engine {
    board: BoardState,
    ko: Option<KoPoint>,
    moves: Vec<Turn>,
    captures: Captures,
}

impl Engine {
    pub fn new(size: u8) -> Self {
        Self::with_grid(Grid::new(size))
    }

    /// Start from a prepared position, e.g. one built with [`Grid::from_layout`].
    pub fn with_grid(grid: Grid) -> Self {
        Engine {
            board: BoardState::from_grid(grid),
            ko: None,
            moves: Vec::new(),
            captures: Captures::new(),
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn grid(&self) -> &Grid {
        self.board.grid()
    }

    pub fn ko(&self) -> &Option<KoPoint> {
        &self.ko
    }

    pub fn moves(&self) -> &[Turn] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<&Turn> {
        self.moves.last()
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn stone_captures(&self, stone: Stone) -> u32 {
        self.captures.get(stone)
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.board.grid().stone_at(point)
    }

    // -- Game actions --

    /// Validate and commit a placement. On error nothing changes.
    pub fn try_play(&mut self, stone: Stone, point: Point) -> Result<Placement, MoveError> {
        let placement = validator::play(&mut self.board, &mut self.ko, point, stone)?;

        let captured = placement.captured_count() as u32;
        self.captures.add(stone, captured);
        self.moves.push(Turn::play(stone, point, captured));
        Ok(placement)
    }

    /// Dry run of [`Engine::try_play`].
    pub fn check(&self, stone: Stone, point: Point) -> Result<(), MoveError> {
        MoveValidator::new(&self.board, self.ko.as_ref())
            .evaluate(point, stone)
            .map(|_| ())
    }

    pub fn is_legal(&self, stone: Stone, point: Point) -> bool {
        self.check(stone, point).is_ok()
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        GameState {
            board: self.board.grid().cells().to_vec(),
            size: self.size(),
            captures: self.captures.clone(),
            ko: self.ko.clone(),
        }
    }
}
