//! Move generation over [`State`]s.

use crate::{
    error::IllegalMove,
    search::{search_engines::StateId, Board, Direction, Heuristic, State},
};
use smallvec::SmallVec;
use std::fmt::{self, Debug, Formatter};
use strum::IntoEnumIterator;

/// Up to four successors, one per direction.
pub type Successors = SmallVec<[State; 4]>;

/// Builds root and successor states, evaluating each new board with the
/// heuristic it was created with.
#[derive(Clone, Copy)]
pub struct SuccessorGenerator<'h> {
    heuristic: &'h dyn Heuristic,
}

impl<'h> SuccessorGenerator<'h> {
    pub fn new(heuristic: &'h dyn Heuristic) -> Self {
        Self { heuristic }
    }

    pub fn heuristic(&self) -> &'h dyn Heuristic {
        self.heuristic
    }

    pub fn root(&self, board: Board) -> State {
        let heuristic = self.heuristic.evaluate(&board);
        State::new(board, None, None, 0, heuristic)
    }

    pub fn can_move(&self, state: &State, direction: Direction) -> bool {
        state.board().can_move(direction)
    }

    /// Slide the blank of `state` (stored under `state_id`) one step in
    /// `direction`. The successor records the opposite direction so that the
    /// path back to its parent can be recovered.
    pub fn generate_successor(
        &self,
        state: &State,
        state_id: StateId,
        direction: Direction,
    ) -> Result<State, IllegalMove> {
        let board = state.board().moved(direction)?;
        Ok(self.make_successor(state, state_id, direction, board))
    }

    fn make_successor(
        &self,
        state: &State,
        state_id: StateId,
        direction: Direction,
        board: Board,
    ) -> State {
        let heuristic = self.heuristic.evaluate(&board);
        State::new(
            board,
            Some(direction.opposite()),
            Some(state_id),
            state.path_cost() + 1,
            heuristic,
        )
    }

    /// Whether the search should generate a successor of `state` in
    /// `direction`: the move has to stay on the board and must not undo the
    /// move that produced `state`.
    pub fn is_applicable(&self, state: &State, direction: Direction) -> bool {
        state.direction() != Some(direction) && self.can_move(state, direction)
    }

    pub fn applicable_directions(&self, state: &State) -> SmallVec<[Direction; 4]> {
        Direction::iter()
            .filter(|&direction| self.is_applicable(state, direction))
            .collect()
    }

    /// The successor of `state` in `direction`, or `None` if
    /// [`is_applicable`](Self::is_applicable) rules the move out.
    pub fn applicable_successor(
        &self,
        state: &State,
        state_id: StateId,
        direction: Direction,
    ) -> Option<State> {
        self.is_applicable(state, direction).then(|| {
            let board = state.board().slide(direction);
            self.make_successor(state, state_id, direction, board)
        })
    }

    /// All successors of `state` except the one returning to its parent.
    pub fn successors(&self, state: &State, state_id: StateId) -> Successors {
        Direction::iter()
            .filter_map(|direction| self.applicable_successor(state, state_id, direction))
            .collect()
    }
}

impl Debug for SuccessorGenerator<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuccessorGenerator")
            .field("heuristic", &self.heuristic)
            .finish()
    }
}
