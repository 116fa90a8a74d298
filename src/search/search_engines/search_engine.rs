use crate::search::{
    search_engines::{AStar, ParallelAStar, SearchStatistics, TerminationCondition, BFS},
    Board, Heuristic, Plan, State,
};
use std::{cmp::Reverse, fmt::Debug};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search was successful
    Success(Plan),
    /// The initial board fails the parity check, or a complete search
    /// exhausted its frontier
    ProvablyUnsolvable,
    /// The frontier ran dry, but the search engine is also incomplete
    IncompleteUnsolvable,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine used more memory than allowed
    MemoryLimitExceeded,
    /// The search engine expanded the maximum number of states
    ExpansionLimitExceeded,
}

impl SearchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }
}

pub trait SearchEngine: Debug {
    /// Search for a plan from `board` to the goal. Every call starts from a
    /// fresh frontier, so an engine can be reused across searches.
    fn search(
        &mut self,
        board: &Board,
        heuristic: &dyn Heuristic,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics);
}

/// Order in which best-first engines take states off their frontier: lowest
/// total cost first, and among equal total costs the longer path first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierPriority {
    total_cost: Reverse<u32>,
    path_cost: u32,
}

impl FrontierPriority {
    pub fn of(state: &State) -> Self {
        Self {
            total_cost: Reverse(state.total_cost()),
            path_cost: state.path_cost(),
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Breadth first search without duplicate detection.")]
    BFS,
    #[clap(name = "astar", help = "A* search with a closed set.")]
    AStar,
    #[clap(
        name = "parallel-astar",
        help = "A* with successors generated by a pool of worker threads. \
        Keeps no closed set, so plans are not guaranteed to be optimal."
    )]
    ParallelAStar,
}

impl SearchEngineName {
    /// Create the engine. `num_workers` is only used by the parallel engine.
    pub fn create(&self, num_workers: usize) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::BFS => Box::new(BFS::new()),
            SearchEngineName::AStar => Box::new(AStar::new()),
            SearchEngineName::ParallelAStar => Box::new(ParallelAStar::new(num_workers)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{heuristics::ManhattanDistance, Direction, SuccessorGenerator};
    use crate::search::search_engines::StateId;
    use std::collections::BinaryHeap;

    #[test]
    fn lower_total_cost_comes_first() {
        let heuristic = ManhattanDistance::new();
        let generator = SuccessorGenerator::new(&heuristic);
        let root = generator.root(Board::solved(3));
        let child = generator
            .generate_successor(&root, StateId::from_index(0), Direction::North)
            .unwrap();
        assert!(FrontierPriority::of(&root) > FrontierPriority::of(&child));
    }

    #[test]
    fn ties_prefer_longer_paths() {
        let shorter = FrontierPriority {
            total_cost: Reverse(10),
            path_cost: 3,
        };
        let longer = FrontierPriority {
            total_cost: Reverse(10),
            path_cost: 7,
        };
        let cheaper = FrontierPriority {
            total_cost: Reverse(9),
            path_cost: 0,
        };
        let mut heap = BinaryHeap::from([shorter, longer, cheaper]);
        assert_eq!(heap.pop(), Some(cheaper));
        assert_eq!(heap.pop(), Some(longer));
        assert_eq!(heap.pop(), Some(shorter));
    }
}
