/// How much the solver logs to stderr.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    #[clap(help = "Only errors")]
    Silent,
    #[clap(help = "Progress and statistics")]
    Normal,
    #[clap(help = "Also log every improvement of the frontier")]
    Verbose,
    #[clap(help = "Also log individual expansions")]
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn louder_verbosity_allows_more_levels() {
        let levels: Vec<tracing::Level> = [
            Verbosity::Silent,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
        ]
        .into_iter()
        .map(Into::into)
        .collect();
        // `tracing::Level` orders more verbose levels as greater.
        assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
