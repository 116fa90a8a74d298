use crate::search::{search_engines::StateId, Board, Direction, HeuristicValue};
use std::hash::{Hash, Hasher};

/// A board together with how the search reached it. States never change once
/// built; a new state is derived from its parent through the
/// [`SuccessorGenerator`](crate::search::SuccessorGenerator).
///
/// Equality and hashing only look at the board, so two states reached along
/// different paths compare equal.
#[derive(Debug, Clone)]
pub struct State {
    board: Board,
    /// Direction that leads from this state back to its parent, `None` for the
    /// root.
    direction: Option<Direction>,
    parent: Option<StateId>,
    path_cost: u32,
    heuristic: HeuristicValue,
    total_cost: u32,
}

impl State {
    pub(crate) fn new(
        board: Board,
        direction: Option<Direction>,
        parent: Option<StateId>,
        path_cost: u32,
        heuristic: HeuristicValue,
    ) -> Self {
        Self {
            board,
            direction,
            parent,
            path_cost,
            heuristic,
            total_cost: path_cost + heuristic,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// The move the parent made to reach this state.
    pub fn incoming_move(&self) -> Option<Direction> {
        self.direction.map(Direction::opposite)
    }

    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    pub fn heuristic(&self) -> HeuristicValue {
        self.heuristic
    }

    pub fn total_cost(&self) -> u32 {
        self.total_cost
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.board.is_complete()
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}
