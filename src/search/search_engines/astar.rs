//! This module implements the A* search algorithm.

use crate::search::{
    search_engines::{
        FrontierPriority, SearchEngine, SearchResult, SearchSpace, SearchStatistics, StateId,
        TerminationCondition,
    },
    Board, Heuristic, State, SuccessorGenerator,
};
use priority_queue::PriorityQueue;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, trace};

/// The open list of A*. Besides the priority queue it remembers which queued
/// state holds each board, so a shorter path to a queued board replaces the
/// longer one instead of sitting next to it.
#[derive(Debug, Default)]
struct OpenList {
    queue: PriorityQueue<StateId, FrontierPriority>,
    queued_boards: HashMap<Board, StateId>,
}

/// What happened to a successor offered to the open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Offer {
    Inserted,
    Replaced,
    Rejected,
}

impl OpenList {
    fn pop(&mut self, search_space: &SearchSpace) -> Option<StateId> {
        let (sid, _) = self.queue.pop()?;
        self.queued_boards.remove(search_space.get_state(sid).board());
        Some(sid)
    }

    fn offer(&mut self, state: State, search_space: &mut SearchSpace) -> Offer {
        let priority = FrontierPriority::of(&state);
        match self.queued_boards.get(state.board()).copied() {
            Some(queued) if search_space.get_state(queued).path_cost() <= state.path_cost() => {
                Offer::Rejected
            }
            Some(queued) => {
                self.queue.remove(&queued);
                let board = state.board().clone();
                let sid = search_space.insert(state);
                self.queue.push(sid, priority);
                self.queued_boards.insert(board, sid);
                Offer::Replaced
            }
            None => {
                let board = state.board().clone();
                let sid = search_space.insert(state);
                self.queue.push(sid, priority);
                self.queued_boards.insert(board, sid);
                Offer::Inserted
            }
        }
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// A* search with a closed set. With the Manhattan distance heuristic the
/// first complete state taken off the open list is reached by an optimal plan.
#[derive(Debug, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl AStar {
    /// Run the search up to the first complete state taken off the open list.
    /// Returns the search space holding it, or the reason the search stopped.
    fn find_goal(
        &self,
        board: &Board,
        heuristic: &dyn Heuristic,
        termination: &mut TerminationCondition,
        statistics: &mut SearchStatistics,
    ) -> Result<(SearchSpace, StateId), SearchResult> {
        if !board.is_solvable() {
            info!("initial board fails the parity check");
            return Err(SearchResult::ProvablyUnsolvable);
        }

        let generator = SuccessorGenerator::new(heuristic);
        let root = generator.root(board.clone());
        let mut f_bound = root.total_cost();
        info!(initial_heuristic_value = root.heuristic());

        let mut search_space = SearchSpace::new(root.clone());
        let mut open = OpenList::default();
        let mut closed: HashSet<Board> = HashSet::new();
        let root_id = search_space.get_root_state_id();
        open.queue.push(root_id, FrontierPriority::of(&root));
        open.queued_boards.insert(root.board().clone(), root_id);

        while let Some(sid) = open.pop(&search_space) {
            termination.log_if_needed();
            if let Some(result) = termination.should_terminate(statistics.expanded_nodes()) {
                return Err(result);
            }

            let state = search_space.get_state(sid);
            if state.is_complete() {
                info!(plan_cost = state.path_cost());
                return Ok((search_space, sid));
            }

            if state.total_cost() > f_bound {
                f_bound = state.total_cost();
                debug!(f_bound, open_states = open.len(), closed_states = closed.len());
            }
            trace!(
                state_id = sid.index(),
                path_cost = state.path_cost(),
                heuristic = state.heuristic()
            );
            closed.insert(state.board().clone());
            statistics.increment_expanded_nodes();

            let successors = generator.successors(state, sid);
            for successor in successors {
                if closed.contains(successor.board()) {
                    statistics.increment_pruned_nodes();
                    continue;
                }
                match open.offer(successor, &mut search_space) {
                    Offer::Inserted => statistics.increment_generated_nodes(1),
                    Offer::Replaced => {
                        statistics.increment_generated_nodes(1);
                        statistics.increment_reopened_nodes();
                    }
                    Offer::Rejected => statistics.increment_pruned_nodes(),
                }
            }
        }

        Err(SearchResult::ProvablyUnsolvable)
    }
}

impl SearchEngine for AStar {
    fn search(
        &mut self,
        board: &Board,
        heuristic: &dyn Heuristic,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let result = match self.find_goal(board, heuristic, termination, &mut statistics) {
            Ok((search_space, goal_id)) => {
                SearchResult::Success(search_space.extract_plan(goal_id))
            }
            Err(result) => result,
        };
        (result, statistics)
    }
}
