use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of states expanded
    expanded_nodes: usize,
    /// Number of states generated and added to the frontier
    generated_nodes: usize,
    /// Number of generated states dropped because their board had already
    /// been expanded or was queued with a path at least as short
    pruned_nodes: usize,
    /// Number of queued states replaced by a shorter path to the same board
    reopened_nodes: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            pruned_nodes: 0,
            reopened_nodes: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn pruned_nodes(&self) -> usize {
        self.pruned_nodes
    }

    pub fn reopened_nodes(&self) -> usize {
        self.reopened_nodes
    }

    pub fn search_duration(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            pruned_nodes = self.pruned_nodes,
            reopened_nodes = self.reopened_nodes,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_duration().as_secs_f64());
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
