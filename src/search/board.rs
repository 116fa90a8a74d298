//! A [`Board`] is one configuration of the puzzle grid, stored row-major with
//! [`BLANK`] marking the empty cell.

use crate::{
    error::{Error, GridError, IllegalMove},
    parsers::parse_board,
    search::Direction,
};
use itertools::Itertools;
use std::{
    fmt::{self, Display, Formatter},
    path::Path,
};

pub type Tile = u16;

/// Cell value of the blank.
pub const BLANK: Tile = 0;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Box<[Tile]>,
    /// Index of the blank in `cells`.
    blank: usize,
}

impl Board {
    /// Create a board from its row-major cells. Every label in `1..size²`
    /// must appear exactly once alongside a single [`BLANK`].
    pub fn new(size: usize, cells: Vec<Tile>) -> Result<Self, GridError> {
        if size < 2 {
            return Err(GridError::TooSmall { size });
        }
        if size * size - 1 > Tile::MAX as usize {
            return Err(GridError::TooLarge { size });
        }
        if cells.len() != size * size {
            return Err(GridError::CellCount {
                expected: size * size,
                found: cells.len(),
            });
        }

        let mut blanks = cells
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile == BLANK)
            .map(|(index, _)| index);
        let blank = blanks.next().ok_or(GridError::MissingBlank)?;
        if let Some(index) = blanks.next() {
            return Err(GridError::MultipleBlanks {
                line: index / size + 1,
                column: index % size + 1,
            });
        }

        let max = (size * size - 1) as Tile;
        let mut seen = vec![false; size * size];
        for &tile in cells.iter().filter(|&&tile| tile != BLANK) {
            if tile > max {
                return Err(GridError::TileOutOfRange { tile, max });
            }
            if seen[tile as usize] {
                return Err(GridError::DuplicateTile { tile });
            }
            seen[tile as usize] = true;
        }

        Ok(Self {
            size,
            cells: cells.into_boxed_slice(),
            blank,
        })
    }

    /// The goal configuration: tiles in row-major order, blank in the last
    /// cell.
    ///
    /// # Panics
    /// Panics if `size < 2`.
    pub fn solved(size: usize) -> Self {
        assert!(size >= 2, "puzzle needs at least a 2x2 grid");
        let last = size * size - 1;
        let cells = (1..=last as Tile).chain([BLANK]).collect();
        Self {
            size,
            cells,
            blank: last,
        }
    }

    pub fn from_text(text: &str) -> Result<Self, GridError> {
        parse_board(text)
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text)?)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub fn tile(&self, row: usize, col: usize) -> Tile {
        self.cells[row * self.size + col]
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Whether the board is in the goal configuration.
    pub fn is_complete(&self) -> bool {
        let last = self.cells.len() - 1;
        self.blank == last
            && self.cells[..last]
                .iter()
                .enumerate()
                .all(|(index, &tile)| tile as usize == index + 1)
    }

    fn neighbour(&self, direction: Direction) -> Option<(usize, usize)> {
        let (row, col) = self.blank();
        let (dr, dc) = direction.offset();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < self.size && col < self.size).then_some((row, col))
    }

    /// Whether the blank can slide one step in `direction` without leaving
    /// the grid.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.neighbour(direction).is_some()
    }

    /// The board reached by sliding the blank one step in `direction`.
    pub fn moved(&self, direction: Direction) -> Result<Board, IllegalMove> {
        match self.neighbour(direction) {
            Some((row, col)) => Ok(self.swap_blank(row * self.size + col)),
            None => {
                let (row, col) = self.blank();
                Err(IllegalMove {
                    direction,
                    row,
                    col,
                })
            }
        }
    }

    /// Same as [`Board::moved`] for callers that have already checked
    /// [`Board::can_move`].
    pub(crate) fn slide(&self, direction: Direction) -> Board {
        let (row, col) = self.neighbour(direction).unwrap_or_else(|| {
            panic!("blank cannot move {direction} from {:?}", self.blank())
        });
        self.swap_blank(row * self.size + col)
    }

    fn swap_blank(&self, target: usize) -> Board {
        let mut cells = self.cells.clone();
        cells.swap(self.blank, target);
        Board {
            size: self.size,
            cells,
            blank: target,
        }
    }

    /// Number of tile pairs that appear in the wrong relative order when the
    /// grid is read row by row, ignoring the blank.
    pub fn inversions(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&tile| tile != BLANK)
            .tuple_combinations()
            .filter(|(a, b)| a > b)
            .count()
    }

    /// Permutation parity test for reachability of the goal configuration.
    /// On odd widths every move preserves the inversion parity, so it has to
    /// be even. On even widths a vertical move flips it, so inversions plus
    /// the blank's row counted from the bottom has to be odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            let (row, _) = self.blank();
            let row_from_bottom = self.size - row;
            (inversions + row_from_bottom) % 2 == 1
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.chunks(self.size).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let row = row
                .iter()
                .map(|&tile| match tile {
                    BLANK => "x".to_string(),
                    tile => tile.to_string(),
                })
                .join(" ");
            f.write_str(&row)?;
        }
        Ok(())
    }
}
