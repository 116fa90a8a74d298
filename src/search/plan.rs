//! A plan is the sequence of blank moves that takes the initial board to the
//! goal. This module provides the [`Plan`] struct, which represents a plan,
//! and its textual form of one `u`, `r`, `d` or `l` per move.

use crate::{error::PlanError, search::Direction};
use std::{
    fmt::{self, Display, Formatter},
    io::{self, Write},
    ops::Deref,
    time::Duration,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Direction>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Direction>) -> Self {
        Self { steps }
    }

    /// Parse a move string. Surrounding whitespace is ignored.
    pub fn from_text(text: &str) -> Result<Self, PlanError> {
        text.trim()
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Direction::from_char(symbol).ok_or(PlanError::InvalidMove { position, symbol })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Write the solution file: the move string and the elapsed seconds, each
    /// on its own line.
    pub fn write_solution<W: Write>(&self, out: &mut W, elapsed: Duration) -> io::Result<()> {
        writeln!(out, "{}", self)?;
        writeln!(out, "{:.3}", elapsed.as_secs_f64())?;
        out.flush()
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let moves: String = self.steps.iter().map(|step| step.to_char()).collect();
        f.write_str(&moves)
    }
}

impl IntoIterator for Plan {
    type Item = Direction;
    type IntoIter = std::vec::IntoIter<Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Direction];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
