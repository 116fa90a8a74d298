use crate::search::Direction;
use std::path::PathBuf;
use thiserror::Error;

/// Problems found while turning input text into a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("input contains characters outside a whitespace separated grid")]
    Syntax,
    #[error("input does not contain any rows")]
    Empty,
    #[error("a {size}x{size} grid is too small, the puzzle needs at least 2x2")]
    TooSmall { size: usize },
    #[error("a {size}x{size} grid has more tiles than can be labelled")]
    TooLarge { size: usize },
    #[error("row on line {line} has {found} columns, expected {expected}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },
    #[error("unrecognised cell `{token}` at line {line}, column {column}")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },
    #[error("second blank found at line {line}, column {column}")]
    MultipleBlanks { line: usize, column: usize },
    #[error("input must contain exactly one blank")]
    MissingBlank,
    #[error("tile {tile} is out of range, labels run from 1 to {max}")]
    TileOutOfRange { tile: u16, max: u16 },
    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u16 },
}

/// Requested to slide the blank off the edge of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move the blank {direction} from row {row}, column {col}")]
pub struct IllegalMove {
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("unknown move `{symbol}` at position {position}")]
    InvalidMove { position: usize, symbol: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("step {step} is not applicable: {source}")]
    NotApplicable {
        step: usize,
        #[source]
        source: IllegalMove,
    },
    #[error("plan does not reach the goal, final board is:\n{board}")]
    GoalNotReached { board: String },
}

/// Top level error reported by the solver binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed input: {0}")]
    Grid(#[from] GridError),
    #[error("invalid plan: {0}")]
    Validation(#[from] ValidationError),
}
