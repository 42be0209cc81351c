//! Command-line match-3 level analyzer.
//!
//! Reads a CSV level table, plays every level with the greedy solver and
//! writes one result row per level.
//!
//! # Usage
//!
//! ```sh
//! matchlace levels.csv --output analysis_results.csv
//! ```
//!
//! Analyze the built-in two-level sample:
//!
//! ```sh
//! matchlace --sample
//! ```
//!
//! Change the random stream and the cascade cap:
//!
//! ```sh
//! matchlace levels.csv --seed 7 --max-cascades 3
//! ```
//!
//! Per-level summaries are logged to stderr; set `RUST_LOG=debug` to also see
//! every move the solver plays.

use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use matchlace_analyzer::{AnalyzerConfig, BatchError, BatchRunner, DEFAULT_SEED, FailurePolicy};
use matchlace_solver::DEFAULT_MAX_CASCADES;

mod table;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Level table to analyze. Reads stdin when omitted.
    #[arg(value_name = "INPUT", conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Analyze the built-in sample levels.
    #[arg(long)]
    sample: bool,

    /// Seed of the random stream shared by all levels.
    #[arg(long, value_name = "SEED", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Maximum clear-and-refill passes per move.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_CASCADES)]
    max_cascades: usize,

    /// Write the result table to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Stop at the first invalid level instead of recording its error.
    #[arg(long)]
    fail_fast: bool,
}

impl Args {
    fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            seed: self.seed,
            max_cascades: self.max_cascades,
            failure_policy: if self.fail_fast {
                FailurePolicy::Abort
            } else {
                FailurePolicy::Isolate
            },
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("cannot open {}: {source}", path.display())]
    #[from(ignore)]
    Open { path: PathBuf, source: io::Error },
    #[display("cannot create {}: {source}", path.display())]
    #[from(ignore)]
    Create { path: PathBuf, source: io::Error },
    #[display("malformed level table: {_0}")]
    Table(#[from] csv::Error),
    #[display("analysis failed: {_0}")]
    Batch(#[from] BatchError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let levels = if args.sample {
        table::read_levels(table::SAMPLE_CSV.as_bytes())?
    } else {
        table::read_levels(open_input(args.input.as_deref())?)?
    };
    let runner = BatchRunner::new(args.config());
    log::info!(
        "analyzing {} levels with at most {} cascades per move",
        levels.len(),
        runner.config().max_cascades
    );

    let results = runner.run(&levels)?;
    let failed = results.iter().filter(|record| record.is_failed()).count();
    if failed > 0 {
        log::warn!("{failed} of {} levels could not be analyzed", results.len());
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Create {
                path: path.clone(),
                source,
            })?;
            table::write_results(file, &results)?;
            log::info!("wrote {} results to {}", results.len(), path.display());
        }
        None => table::write_results(io::stdout().lock(), &results)?,
    }
    Ok(())
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>, CliError> {
    let Some(path) = path else {
        return Ok(Box::new(io::stdin().lock()));
    };
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(file))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;
    use matchlace_analyzer::LevelError;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_default_config() {
        let args = Args::parse_from(["matchlace", "levels.csv"]);
        assert_eq!(args.input, Some(PathBuf::from("levels.csv")));
        assert_eq!(args.config(), AnalyzerConfig::default());
    }

    #[test]
    fn test_flags_map_to_config() {
        let args = Args::parse_from([
            "matchlace",
            "--sample",
            "--seed",
            "7",
            "--max-cascades",
            "2",
            "--fail-fast",
        ]);
        let config = args.config();
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_cascades, 2);
        assert!(config.failure_policy.is_abort());
    }

    #[test]
    fn test_sample_conflicts_with_input() {
        assert!(Args::try_parse_from(["matchlace", "--sample", "levels.csv"]).is_err());
    }

    #[test]
    fn test_missing_input_names_path() {
        let err = open_input(Some(Path::new("/nonexistent/levels.csv"))).err().unwrap();
        assert!(err.to_string().starts_with("cannot open /nonexistent/levels.csv: "));
    }

    #[test]
    fn test_table_and_batch_errors_convert() {
        fn read(bytes: &[u8]) -> Result<usize, CliError> {
            Ok(table::read_levels(bytes)?.len())
        }
        let err = read(b"LevelID\n\xff\n").unwrap_err();
        assert!(matches!(err, CliError::Table(_)));
        assert!(err.to_string().starts_with("malformed level table: "));

        let err = CliError::from(BatchError {
            index: 1,
            level_id: "2".to_owned(),
            source: LevelError::UnsupportedBlockTypes { block_types: 30 },
        });
        assert!(matches!(err, CliError::Batch(_)));
        assert!(err.to_string().starts_with("analysis failed: level \"2\" (record 1): "));
    }
}
