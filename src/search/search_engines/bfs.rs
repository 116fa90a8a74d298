//! Breadth first search

use crate::search::{
    search_engines::{
        SearchEngine, SearchResult, SearchSpace, SearchStatistics, TerminationCondition,
    },
    Board, Heuristic, SuccessorGenerator,
};
use std::collections::VecDeque;
use tracing::info;

/// Breadth first search over the puzzle graph. States are expanded in the
/// order they were generated and nothing is deduplicated beyond skipping the
/// move straight back to the parent, so the first complete state dequeued is
/// reached by a shortest plan.
#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BFS {
    fn search(
        &mut self,
        board: &Board,
        heuristic: &dyn Heuristic,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        if !board.is_solvable() {
            info!("initial board fails the parity check");
            return (SearchResult::ProvablyUnsolvable, statistics);
        }

        let generator = SuccessorGenerator::new(heuristic);
        let mut search_space = SearchSpace::new(generator.root(board.clone()));
        let mut queue = VecDeque::new();
        queue.push_back(search_space.get_root_state_id());

        while let Some(sid) = queue.pop_front() {
            termination.log_if_needed();
            if let Some(result) = termination.should_terminate(statistics.expanded_nodes()) {
                return (result, statistics);
            }

            let state = search_space.get_state(sid);
            if state.is_complete() {
                return (
                    SearchResult::Success(search_space.extract_plan(sid)),
                    statistics,
                );
            }
            statistics.increment_expanded_nodes();

            let successors = generator.successors(state, sid);
            statistics.increment_generated_nodes(successors.len());
            for successor in successors {
                queue.push_back(search_space.insert(successor));
            }
        }

        (SearchResult::ProvablyUnsolvable, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        search::{heuristics::ManhattanDistance, validate, Plan},
        test_utils::*,
    };

    fn bfs(text: &str) -> (SearchResult, SearchStatistics) {
        let board = Board::from_text(text).unwrap();
        BFS::new().search(
            &board,
            &ManhattanDistance::new(),
            &mut TerminationCondition::unlimited(),
        )
    }

    #[test]
    fn solved_board_needs_no_moves() {
        let (result, statistics) = bfs(EIGHT_PUZZLE_SOLVED);
        assert_eq!(result, SearchResult::Success(Plan::empty()));
        assert_eq!(statistics.expanded_nodes(), 0);
    }

    #[test]
    fn one_move() {
        let (result, _) = bfs(EIGHT_PUZZLE_ONE_MOVE);
        assert_eq!(result, SearchResult::Success(Plan::from_text("r").unwrap()));
    }

    #[test]
    fn finds_shortest_plans() {
        for (text, length) in [(EIGHT_PUZZLE_SHORT, 5), (EIGHT_PUZZLE_MEDIUM, 10)] {
            let (result, _) = bfs(text);
            let SearchResult::Success(plan) = result else {
                panic!("expected a plan, got {result:?}");
            };
            assert_eq!(plan.len(), length);
            assert!(validate(&plan, &Board::from_text(text).unwrap()).is_ok());
        }
    }

    #[test]
    fn two_by_two() {
        let (result, _) = bfs("1 2\nx 3\n");
        assert_eq!(result, SearchResult::Success(Plan::from_text("r").unwrap()));
    }

    #[test]
    fn unsolvable_board_is_rejected_up_front() {
        let (result, statistics) = bfs(EIGHT_PUZZLE_UNSOLVABLE);
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        assert_eq!(statistics.expanded_nodes(), 0);
    }

    #[test]
    fn expansion_limit_stops_search() {
        let board = Board::from_text(EIGHT_PUZZLE_HARD).unwrap();
        let (result, statistics) = BFS::new().search(
            &board,
            &ManhattanDistance::new(),
            &mut TerminationCondition::new(None, None, Some(100)),
        );
        assert_eq!(result, SearchResult::ExpansionLimitExceeded);
        assert_eq!(statistics.expanded_nodes(), 100);
    }
}
