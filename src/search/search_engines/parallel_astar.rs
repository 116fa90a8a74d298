//! A best-effort parallel variant of A*.
//!
//! The expansion loop runs on the calling thread and hands every
//! (state, direction) pair to a fixed pool of workers through a bounded
//! channel. Workers check the move, build the successor and push it straight
//! into a frontier shared with the expansion loop. No closed set is kept, so
//! boards can be expanded more than once and the plan found is not
//! necessarily optimal.

use crate::search::{
    search_engines::{
        FrontierPriority, SearchEngine, SearchResult, SearchSpace, SearchStatistics, StateId,
        TerminationCondition,
    },
    Board, Direction, Heuristic, Plan, State, SuccessorGenerator,
};
use crossbeam_channel::bounded;
use parking_lot::{Condvar, Mutex};
use priority_queue::PriorityQueue;
use std::{num::NonZeroUsize, sync::Arc, thread};
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// Number of queued tasks allowed per worker before the expansion loop blocks.
const TASKS_PER_WORKER: usize = 16;

/// One direction to try from an expanded state.
#[derive(Debug)]
struct Expansion {
    state: Arc<State>,
    state_id: StateId,
    direction: Direction,
}

#[derive(Debug)]
struct Frontier {
    search_space: SearchSpace,
    queue: PriorityQueue<StateId, FrontierPriority>,
    /// Tasks handed to the workers that have not reported back yet
    pending: usize,
    generated: usize,
}

/// Frontier shared between the expansion loop and the workers.
#[derive(Debug)]
struct SharedFrontier {
    inner: Mutex<Frontier>,
    available: Condvar,
}

impl SharedFrontier {
    fn new(root: State) -> Self {
        let priority = FrontierPriority::of(&root);
        let search_space = SearchSpace::new(root);
        let mut queue = PriorityQueue::new();
        queue.push(search_space.get_root_state_id(), priority);
        Self {
            inner: Mutex::new(Frontier {
                search_space,
                queue,
                pending: 0,
                generated: 0,
            }),
            available: Condvar::new(),
        }
    }

    /// Take the best state, waiting for outstanding tasks if the queue is
    /// empty. Returns `None` once the queue is empty and nothing is pending.
    fn pop(&self) -> Option<(StateId, Arc<State>)> {
        let mut frontier = self.inner.lock();
        loop {
            if let Some((sid, _)) = frontier.queue.pop() {
                let state = Arc::new(frontier.search_space.get_state(sid).clone());
                return Some((sid, state));
            }
            if frontier.pending == 0 {
                return None;
            }
            self.available.wait(&mut frontier);
        }
    }

    fn submit(&self, tasks: usize) {
        self.inner.lock().pending += tasks;
    }

    /// Record a finished task and queue its successor, if any.
    fn complete(&self, successor: Option<State>) {
        let mut frontier = self.inner.lock();
        if let Some(successor) = successor {
            let priority = FrontierPriority::of(&successor);
            let sid = frontier.search_space.insert(successor);
            frontier.queue.push(sid, priority);
            frontier.generated += 1;
        }
        frontier.pending -= 1;
        drop(frontier);
        self.available.notify_one();
    }

    fn extract_plan(&self, goal_id: StateId) -> Plan {
        self.inner.lock().search_space.extract_plan(goal_id)
    }

    fn generated(&self) -> usize {
        self.inner.lock().generated
    }
}

#[derive(Debug)]
pub struct ParallelAStar {
    num_workers: usize,
}

impl ParallelAStar {
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers: num_workers.max(1),
        }
    }

    /// Twice the available parallelism of the machine.
    pub fn default_num_workers() -> usize {
        thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
            * 2
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }
}

impl Default for ParallelAStar {
    fn default() -> Self {
        Self::new(Self::default_num_workers())
    }
}

impl SearchEngine for ParallelAStar {
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
        let frontier = SharedFrontier::new(generator.root(board.clone()));
        let (sender, receiver) = bounded::<Expansion>(self.num_workers * TASKS_PER_WORKER);
        info!(num_workers = self.num_workers);

        let result = thread::scope(|scope| {
            for _ in 0..self.num_workers {
                let receiver = receiver.clone();
                let frontier = &frontier;
                scope.spawn(move || {
                    while let Ok(task) = receiver.recv() {
                        let successor = generator.applicable_successor(
                            &task.state,
                            task.state_id,
                            task.direction,
                        );
                        frontier.complete(successor);
                    }
                });
            }
            drop(receiver);

            let result = 'search: loop {
                termination.log_if_needed();
                if let Some(result) = termination.should_terminate(statistics.expanded_nodes()) {
                    break result;
                }

                let Some((sid, state)) = frontier.pop() else {
                    break SearchResult::IncompleteUnsolvable;
                };
                if state.is_complete() {
                    break SearchResult::Success(frontier.extract_plan(sid));
                }
                statistics.increment_expanded_nodes();

                frontier.submit(Direction::iter().len());
                for direction in Direction::iter() {
                    let task = Expansion {
                        state: Arc::clone(&state),
                        state_id: sid,
                        direction,
                    };
                    if sender.send(task).is_err() {
                        debug!("all workers have stopped");
                        break 'search SearchResult::IncompleteUnsolvable;
                    }
                }
            };
            // Closing the channel lets the workers drain it and exit.
            drop(sender);
            result
        });

        statistics.increment_generated_nodes(frontier.generated());
        (result, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        search::{heuristics::ManhattanDistance, validate},
        test_utils::*,
    };

    fn parallel(text: &str, num_workers: usize) -> SearchResult {
        let board = Board::from_text(text).unwrap();
        let (result, _) = ParallelAStar::new(num_workers).search(
            &board,
            &ManhattanDistance::new(),
            &mut TerminationCondition::unlimited(),
        );
        result
    }

    #[test]
    fn solved_board_needs_no_moves() {
        assert_eq!(
            parallel(EIGHT_PUZZLE_SOLVED, 2),
            SearchResult::Success(Plan::empty())
        );
    }

    #[test]
    fn finds_valid_plans() {
        for text in [EIGHT_PUZZLE_ONE_MOVE, EIGHT_PUZZLE_SHORT, EIGHT_PUZZLE_MEDIUM] {
            for num_workers in [1, 4] {
                let SearchResult::Success(plan) = parallel(text, num_workers) else {
                    panic!("no plan for\n{text}");
                };
                assert!(validate(&plan, &Board::from_text(text).unwrap()).is_ok());
            }
        }
    }

    #[test]
    fn single_worker_finds_one_move() {
        assert_eq!(
            parallel(EIGHT_PUZZLE_ONE_MOVE, 1),
            SearchResult::Success(Plan::from_text("r").unwrap())
        );
    }

    #[test]
    fn unsolvable_board_is_rejected_up_front() {
        assert_eq!(
            parallel(EIGHT_PUZZLE_UNSOLVABLE, 2),
            SearchResult::ProvablyUnsolvable
        );
    }

    #[test]
    fn expansion_limit_stops_workers() {
        let board = Board::from_text(FIFTEEN_PUZZLE_LONGER).unwrap();
        let (result, statistics) = ParallelAStar::new(4).search(
            &board,
            &ManhattanDistance::new(),
            &mut TerminationCondition::new(None, None, Some(5)),
        );
        assert_eq!(result, SearchResult::ExpansionLimitExceeded);
        assert_eq!(statistics.expanded_nodes(), 5);
    }

    #[test]
    fn zero_workers_still_uses_one() {
        assert_eq!(ParallelAStar::new(0).num_workers(), 1);
        assert!(ParallelAStar::default_num_workers() >= 2);
    }
}
