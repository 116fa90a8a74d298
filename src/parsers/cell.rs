//! Provides parsers for single grid cells.

use crate::parsers::{ParseResult, Span};
use crate::search::{board::BLANK, Tile};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::digit1;
use nom::combinator::{map, map_opt, value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Tile(Tile),
    Blank,
}

impl From<Cell> for Tile {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Tile(tile) => tile,
            Cell::Blank => BLANK,
        }
    }
}

/// Parses a cell, i.e. a positive tile label or `x`/`X` for the blank.
///
/// ## Example
/// ```
/// # use fifteen::parsers::{parse_cell, preamble::*, Cell};
/// assert!(parse_cell("x").is_exactly(Cell::Blank));
/// assert!(parse_cell("X").is_exactly(Cell::Blank));
/// assert!(parse_cell("7").is_exactly(Cell::Tile(7)));
/// assert!(parse_cell("015").is_exactly(Cell::Tile(15)));
/// assert!(parse_cell("x1").is_value(Cell::Blank));
/// assert!(!parse_cell("x1").is_exactly(Cell::Blank));
///
/// assert!(parse_cell("0").is_err());
/// assert!(parse_cell("-3").is_err());
/// assert!(parse_cell("99999").is_err());
/// assert!(parse_cell("y").is_err());
///```
pub fn parse_cell<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Cell> {
    alt((
        value(Cell::Blank, tag_no_case("x")),
        map(
            map_opt(digit1, |digits: Span<'a>| {
                digits
                    .fragment()
                    .parse::<Tile>()
                    .ok()
                    .filter(|&tile| tile != BLANK)
            }),
            Cell::Tile,
        ),
    ))(input.into())
}
