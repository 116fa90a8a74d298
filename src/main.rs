use clap::Parser;
use fifteen::{
    run,
    search::{
        search_engines::{ParallelAStar, SearchEngineName},
        HeuristicName, Verbosity,
    },
    SolverConfig,
};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve a sliding tile puzzle. The input file holds one row of the grid per
/// line with `x` marking the blank; the solution is written as a string of
/// `u`, `r`, `d` and `l` moves followed by the search time in seconds.
struct Cli {
    #[arg(help = "The puzzle file")]
    input: PathBuf,
    #[arg(help = "The solution file")]
    output: PathBuf,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::AStar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::Manhattan
    )]
    heuristic_name: HeuristicName,
    #[arg(
        help = "Give up after this long, e.g. `90s` or `30m`",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration,
        default_value = "30m"
    )]
    time_limit: Duration,
    #[arg(
        help = "Give up once the process uses more memory than this, in MB",
        short = 'm',
        long = "memory-limit",
        id = "MEMORY_LIMIT"
    )]
    memory_limit_mb: Option<usize>,
    #[arg(
        help = "Give up after expanding this many states",
        long = "max-expansions",
        id = "MAX_EXPANSIONS"
    )]
    max_expansions: Option<usize>,
    #[arg(
        help = "Worker threads for the parallel engine, defaults to twice the \
        available parallelism",
        short = 'w',
        long = "workers",
        id = "WORKERS"
    )]
    num_workers: Option<usize>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = SolverConfig {
        engine: cli.search_engine_name,
        heuristic: cli.heuristic_name,
        time_limit: Some(cli.time_limit),
        memory_limit_mb: cli.memory_limit_mb,
        max_expansions: cli.max_expansions,
        num_workers: cli
            .num_workers
            .unwrap_or_else(ParallelAStar::default_num_workers),
    };

    match run(&cli.input, &cli.output, &config) {
        Ok(result) if result.is_success() => {
            info!("done");
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
