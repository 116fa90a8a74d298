pub mod board;
mod direction;
pub mod heuristics;
mod plan;
pub mod search_engines;
mod state;
mod successor_generator;
mod validate;
mod verbosity;

pub use board::{Board, Tile};
pub use direction::Direction;
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue};
pub use plan::Plan;
pub use state::State;
pub use successor_generator::{SuccessorGenerator, Successors};
pub use validate::validate;
pub use verbosity::Verbosity;
