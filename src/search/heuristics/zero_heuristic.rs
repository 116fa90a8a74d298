use crate::search::{Board, Heuristic, HeuristicValue};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, _board: &Board) -> HeuristicValue {
        0
    }
}
