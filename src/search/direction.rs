use std::fmt::{self, Display, Formatter};
use strum_macros::EnumIter;

/// One of the four ways the blank can slide. The variants are named after the
/// compass point the blank moves towards, so [`Direction::North`] moves the
/// blank one row up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Row and column displacement of the blank.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// The symbol used for this move in a written solution.
    pub fn to_char(self) -> char {
        match self {
            Direction::North => 'u',
            Direction::East => 'r',
            Direction::South => 'd',
            Direction::West => 'l',
        }
    }

    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            'u' => Some(Direction::North),
            'r' => Some(Direction::East),
            'd' => Some(Direction::South),
            'l' => Some(Direction::West),
            _ => None,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "up",
            Direction::East => "right",
            Direction::South => "down",
            Direction::West => "left",
        };
        f.write_str(name)
    }
}
