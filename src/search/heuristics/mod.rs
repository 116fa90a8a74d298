mod heuristic;
mod manhattan;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan::{goal_position, ManhattanDistance};
pub use zero_heuristic::ZeroHeuristic;
