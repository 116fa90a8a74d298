mod astar;
mod bfs;
mod parallel_astar;
mod search_engine;
mod search_space;
mod search_statistics;
mod termination_condition;

pub use astar::AStar;
pub use bfs::BFS;
pub use parallel_astar::ParallelAStar;
pub use search_engine::{FrontierPriority, SearchEngine, SearchEngineName, SearchResult};
pub use search_space::{SearchSpace, StateId};
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
