//! Parsers for the puzzle input format: one row per line, cells separated by
//! spaces or tabs, each cell a positive tile label or `x` for the blank.

mod board;
mod cell;
mod row;
mod test_helpers;

pub use test_helpers::UnwrapValue;

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Re-exports commonly used types.
pub mod preamble {
    pub use crate::parsers::test_helpers::UnwrapValue;
    pub use crate::parsers::{ParseError, ParseResult, Span};
}

// Parsers
pub use board::{parse_board, parse_grid};
pub use cell::{parse_cell, Cell};
pub use row::{parse_row, parse_token};
