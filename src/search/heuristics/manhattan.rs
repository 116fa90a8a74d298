//! The Manhattan distance heuristic.
//!
//! Every move slides exactly one tile by one cell, so the summed distance of
//! all tiles to their goal cells never overestimates the remaining number of
//! moves and changes by exactly one per move. The blank is left out of the
//! sum: counting it would charge two for a single move.

use crate::search::{board::BLANK, Board, Heuristic, HeuristicValue, Tile};

/// Row and column tile `tile` occupies in the solved configuration of a
/// `size`x`size` board. The blank belongs in the last cell.
pub fn goal_position(tile: Tile, size: usize) -> (usize, usize) {
    if tile == BLANK {
        return (size - 1, size - 1);
    }
    let index = tile as usize - 1;
    (index / size, index % size)
}

#[derive(Clone, Debug, Default)]
pub struct ManhattanDistance {}

impl ManhattanDistance {
    pub fn new() -> Self {
        ManhattanDistance {}
    }
}

impl Heuristic for ManhattanDistance {
    fn evaluate(&self, board: &Board) -> HeuristicValue {
        let size = board.size();
        board
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(index, &tile)| {
                let (row, col) = (index / size, index % size);
                let (goal_row, goal_col) = goal_position(tile, size);
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as HeuristicValue
            })
            .sum()
    }
}
