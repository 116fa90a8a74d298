//! Reads a board, solves it and writes the solution file.

use crate::{
    error::Error,
    search::{
        search_engines::{SearchEngineName, SearchResult, TerminationCondition},
        validate, Board, HeuristicName,
    },
};
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};
use tracing::{error, info};

/// Everything about a run that is not the input or output path.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub engine: SearchEngineName,
    pub heuristic: HeuristicName,
    pub time_limit: Option<Duration>,
    pub memory_limit_mb: Option<usize>,
    pub max_expansions: Option<usize>,
    /// Worker threads for the parallel engine, ignored by the others.
    pub num_workers: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            engine: SearchEngineName::AStar,
            heuristic: HeuristicName::Manhattan,
            time_limit: None,
            memory_limit_mb: None,
            max_expansions: None,
            num_workers: 1,
        }
    }
}

/// Solve the board in `input` and, if a plan is found, write it to `output`
/// followed by the search time in seconds. Nothing is written when the search
/// fails; the returned [`SearchResult`] says why.
pub fn run(input: &Path, output: &Path, config: &SolverConfig) -> Result<SearchResult, Error> {
    let board = Board::from_path(input)?;
    info!(size = board.size(), "read board");
    info!("\n{}", board);

    let heuristic = config.heuristic.create();
    let mut engine = config.engine.create(config.num_workers);
    info!(engine = ?config.engine, heuristic = ?heuristic);
    let mut termination = TerminationCondition::new(
        config.time_limit,
        config.memory_limit_mb,
        config.max_expansions,
    );

    let start = Instant::now();
    let (result, mut statistics) = engine.search(&board, &*heuristic, &mut termination);
    let elapsed = start.elapsed();
    statistics.finalise_search();
    termination.finalise();

    match &result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            validate(plan, &board)?;
            info!("plan is valid");
            info!(plan_length = plan.len());
            write_solution(output, |writer| plan.write_solution(writer, elapsed))?;
            info!(output = %output.display(), "wrote solution");
        }
        _ => error!(result = ?result, "no plan found"),
    }

    Ok(result)
}

fn write_solution(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> Result<(), Error> {
    let to_error = |source| Error::Write {
        path: PathBuf::from(path),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    write(&mut BufWriter::new(file)).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::GridError, search::Plan, test_utils::*};
    use std::fs;
    use tempfile::TempDir;

    fn solve(text: &str, config: &SolverConfig) -> (Result<SearchResult, Error>, PathBuf, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("puzzle.txt");
        let output = dir.path().join("solution.txt");
        fs::write(&input, text).unwrap();
        let result = run(&input, &output, config);
        (result, output, dir)
    }

    fn read_solution(output: &Path) -> (String, f64) {
        let text = fs::read_to_string(output).unwrap();
        let mut lines = text.lines();
        let moves = lines.next().unwrap().to_string();
        let seconds = lines.next().unwrap().parse().unwrap();
        assert_eq!(lines.next(), None);
        (moves, seconds)
    }

    #[test]
    fn solved_board_writes_empty_plan() {
        let (result, output, _dir) = solve(EIGHT_PUZZLE_SOLVED, &SolverConfig::default());
        assert_eq!(result.unwrap(), SearchResult::Success(Default::default()));
        let (moves, seconds) = read_solution(&output);
        assert_eq!(moves, "");
        assert!(seconds >= 0.0);
    }

    #[test]
    fn one_move_board_writes_single_move() {
        for engine in [
            SearchEngineName::BFS,
            SearchEngineName::AStar,
            SearchEngineName::ParallelAStar,
        ] {
            let config = SolverConfig {
                engine,
                ..Default::default()
            };
            let (result, output, _dir) = solve(EIGHT_PUZZLE_ONE_MOVE, &config);
            assert!(matches!(result.unwrap(), SearchResult::Success(_)));
            assert_eq!(read_solution(&output).0, "r");
        }
    }

    #[test]
    fn astar_writes_optimal_plan() {
        let (result, output, _dir) = solve(FIFTEEN_PUZZLE, &SolverConfig::default());
        assert!(matches!(result.unwrap(), SearchResult::Success(_)));
        let (moves, _) = read_solution(&output);
        assert_eq!(moves.len(), 16);
        let plan = Plan::from_text(&moves).unwrap();
        let board = Board::from_text(FIFTEEN_PUZZLE).unwrap();
        assert!(validate(&plan, &board).is_ok());
    }

    #[test]
    fn parallel_engine_writes_valid_plan() {
        let config = SolverConfig {
            engine: SearchEngineName::ParallelAStar,
            num_workers: 4,
            ..Default::default()
        };
        let (result, output, _dir) = solve(EIGHT_PUZZLE_MEDIUM, &config);
        assert!(matches!(result.unwrap(), SearchResult::Success(_)));
        let plan = Plan::from_text(&read_solution(&output).0).unwrap();
        let board = Board::from_text(EIGHT_PUZZLE_MEDIUM).unwrap();
        assert!(validate(&plan, &board).is_ok());
    }

    #[test]
    fn unsolvable_board_writes_nothing() {
        let (result, output, _dir) = solve(EIGHT_PUZZLE_UNSOLVABLE, &SolverConfig::default());
        assert_eq!(result.unwrap(), SearchResult::ProvablyUnsolvable);
        assert!(!output.exists());
    }

    #[test]
    fn expansion_limit_writes_nothing() {
        let config = SolverConfig {
            heuristic: HeuristicName::ZeroHeuristic,
            max_expansions: Some(3),
            ..Default::default()
        };
        let (result, output, _dir) = solve(EIGHT_PUZZLE_HARD, &config);
        assert_eq!(result.unwrap(), SearchResult::ExpansionLimitExceeded);
        assert!(!output.exists());
    }

    #[test]
    fn malformed_board_is_an_error() {
        let (result, output, _dir) = solve("1 2 3\n4 5\n6 7 x\n", &SolverConfig::default());
        assert!(matches!(
            result,
            Err(Error::Grid(GridError::RowLength {
                line: 2,
                expected: 3,
                found: 2
            }))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            &dir.path().join("missing.txt"),
            &dir.path().join("solution.txt"),
            &SolverConfig::default(),
        );
        assert!(matches!(result, Err(Error::Read { .. })));
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("puzzle.txt");
        fs::write(&input, EIGHT_PUZZLE_ONE_MOVE).unwrap();
        let output = dir.path().join("no-such-dir").join("solution.txt");
        let result = run(&input, &output, &SolverConfig::default());
        assert!(matches!(result, Err(Error::Write { .. })));
    }
}
