//! Provides the parser for whole boards.

use crate::error::GridError;
use crate::parsers::{parse_cell, parse_row, ParseResult, Span};
use crate::search::{Board, Tile};
use nom::character::complete::line_ending;
use nom::combinator::all_consuming;
use nom::multi::separated_list0;

/// Parses every line of the input into its tokens. Blank lines come back as
/// empty rows.
pub fn parse_grid<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<Vec<Span<'a>>>> {
    all_consuming(separated_list0(line_ending, parse_row))(input.into())
}

/// Parse a board. The number of rows fixes the size of the board; trailing
/// blank lines are ignored, any other row has to have exactly as many cells
/// as there are rows.
///
/// ## Example
/// ```
/// # use fifteen::{parsers::parse_board, Board, GridError};
/// let board = parse_board("1 2 3\n4 5 6\n7 8 x\n\n").unwrap();
/// assert_eq!(board, Board::solved(3));
///
/// assert_eq!(parse_board(""), Err(GridError::Empty));
/// assert_eq!(parse_board("1 2\n3 4"), Err(GridError::MissingBlank));
///```
pub fn parse_board(text: &str) -> Result<Board, GridError> {
    let (_, mut rows) = parse_grid(text).map_err(|_| GridError::Syntax)?;
    while rows.last().is_some_and(Vec::is_empty) {
        rows.pop();
    }

    let size = rows.len();
    if size == 0 {
        return Err(GridError::Empty);
    }

    let mut cells: Vec<Tile> = Vec::with_capacity(size * size);
    for (index, row) in rows.iter().enumerate() {
        if row.len() != size {
            return Err(GridError::RowLength {
                line: index + 1,
                expected: size,
                found: row.len(),
            });
        }
        for token in row {
            let (_, cell) =
                all_consuming(parse_cell)(*token).map_err(|_| GridError::InvalidToken {
                    line: token.location_line() as usize,
                    column: token.get_utf8_column(),
                    token: token.fragment().to_string(),
                })?;
            cells.push(cell.into());
        }
    }

    Board::new(size, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn parses_fixtures() {
        let board = parse_board(EIGHT_PUZZLE_SHORT).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.blank(), (1, 0));
        assert_eq!(board.tile(0, 0), 1);
        assert_eq!(board.tile(1, 1), 8);
        assert_eq!(board.tile(2, 2), 6);

        let board = parse_board(FIFTEEN_PUZZLE).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.blank(), (3, 1));
    }

    #[test]
    fn identical_text_gives_equal_boards() {
        assert_eq!(
            parse_board(EIGHT_PUZZLE_MEDIUM).unwrap(),
            parse_board(EIGHT_PUZZLE_MEDIUM).unwrap()
        );
        assert_ne!(
            parse_board(EIGHT_PUZZLE_MEDIUM).unwrap(),
            parse_board(EIGHT_PUZZLE_SHORT).unwrap()
        );
    }

    #[test]
    fn whitespace_is_flexible() {
        let board = parse_board(" 1\t2  3\r\n4 5 6 \n7 8 X\n\n\n").unwrap();
        assert_eq!(board, Board::solved(3));
    }

    #[test]
    fn display_round_trips() {
        let board = parse_board(FIFTEEN_PUZZLE_LONGER).unwrap();
        assert_eq!(parse_board(&board.to_string()).unwrap(), board);
    }

    #[test]
    fn rejects_short_row() {
        assert_eq!(
            parse_board("1 2 3\n4 5\n6 7 x"),
            Err(GridError::RowLength {
                line: 2,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_non_square_grid() {
        assert_eq!(
            parse_board("1 2 3\n4 5 x"),
            Err(GridError::RowLength {
                line: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn rejects_leading_blank_line() {
        assert_eq!(
            parse_board("\n1 2\n3 x"),
            Err(GridError::RowLength {
                line: 1,
                expected: 3,
                found: 0
            })
        );
    }

    #[test]
    fn all_number_grid_is_missing_its_blank() {
        assert_eq!(parse_board("1 2 3\n4 5 6\n7 8 9"), Err(GridError::MissingBlank));
        assert_eq!(parse_board("1 1\n1 1"), Err(GridError::MissingBlank));
    }

    #[test]
    fn rejects_two_blanks() {
        assert_eq!(
            parse_board("1 x\nx 3"),
            Err(GridError::MultipleBlanks { line: 2, column: 1 })
        );
    }

    #[test]
    fn rejects_missing_blank() {
        assert_eq!(parse_board("1 2\n3 4"), Err(GridError::MissingBlank));
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(
            parse_board("1 2\n3 ?"),
            Err(GridError::InvalidToken {
                line: 2,
                column: 3,
                token: "?".to_string()
            })
        );
        assert!(matches!(
            parse_board("1 2\n0 x"),
            Err(GridError::InvalidToken { .. })
        ));
    }

    #[test]
    fn rejects_bad_labels() {
        assert_eq!(
            parse_board("1 2\n5 x"),
            Err(GridError::TileOutOfRange { tile: 5, max: 3 })
        );
        assert_eq!(
            parse_board("1 1\n3 x"),
            Err(GridError::DuplicateTile { tile: 1 })
        );
    }

    #[test]
    fn rejects_single_cell() {
        assert_eq!(parse_board("x"), Err(GridError::TooSmall { size: 1 }));
    }

    #[test]
    fn rejects_stray_carriage_return() {
        assert_eq!(parse_board("1 2\r3 x"), Err(GridError::Syntax));
    }
}
