use crate::search::{
    heuristics::{ManhattanDistance, ZeroHeuristic},
    Board,
};
use std::fmt::Debug;

/// Estimated number of moves left until the goal.
pub type HeuristicValue = u32;

/// A heuristic evaluates boards on their own, so implementations are shared
/// freely between the search thread and any worker threads.
pub trait Heuristic: Debug + Send + Sync {
    /// Evaluate the given board.
    fn evaluate(&self, board: &Board) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "Sum of the Manhattan distances of every tile to its goal cell.")]
    Manhattan,
    #[clap(
        name = "zero",
        help = "The zero heuristic, turns A* into uniform cost search."
    )]
    ZeroHeuristic,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Manhattan => Box::new(ManhattanDistance::new()),
            HeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}
