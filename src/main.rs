//! Command line front end: pick a problem, enumerate it, print the result.

use clap::{Parser, Subcommand};
use exhaust::builder::{BuildError, EnumeratorBuilder};
use exhaust::config::{ConfigError, ExhaustConfig};
use exhaust::core::{Problem, SolutionSet};
use exhaust::engine::{EnumerationError, EnumerationStats};
use exhaust::problems::{
    change_graph, Board, Change, Membership, NQueens, Permutations, Position, PowerSet,
    ReconstructedRule, RobotPath,
};
use serde::Serialize;
use std::convert::Infallible;
use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Exhaustively enumerates solutions to small combinatorial problems.", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print solutions and statistics as JSON
    #[clap(long, global = true)]
    json: bool,

    /// Log enumeration progress at debug level
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step sequences summing to a budget
    Steps {
        #[clap(allow_hyphen_values = true)]
        budget: i64,
    },
    /// Combinations of denominations making an amount
    Change {
        #[clap(allow_hyphen_values = true)]
        amount: i64,
        #[clap(required = true)]
        denominations: Vec<i64>,
    },
    /// Full change-making decision tree as a dot document
    ChangeGraph {
        #[clap(allow_hyphen_values = true)]
        amount: i64,
        #[clap(required = true)]
        denominations: Vec<i64>,
    },
    /// Orderings of the given items
    Permute { items: Vec<String> },
    /// Queen placements on an n by n board
    Queens {
        n: usize,
        /// Use the reconstructed column and diagonal check
        #[clap(long)]
        reconstructed: bool,
    },
    /// Subsets of the given items
    PowerSet { items: Vec<String> },
    /// Monotone down/right paths between two grid points
    Robot {
        #[clap(allow_hyphen_values = true)]
        from_x: i64,
        #[clap(allow_hyphen_values = true)]
        from_y: i64,
        #[clap(allow_hyphen_values = true)]
        to_x: i64,
        #[clap(allow_hyphen_values = true)]
        to_y: i64,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Build(#[from] BuildError),
    #[error("Enumeration failed: {0}")]
    Enumeration(#[from] EnumerationError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<Infallible> for CliError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

#[derive(Serialize)]
struct Report<T> {
    problem: String,
    solutions: Vec<Vec<T>>,
    stats: EnumerationStats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => ExhaustConfig::load(path)?,
        None => ExhaustConfig::default(),
    };
    let memoize = config.engine.memoize;
    debug!(event = "config_loaded", memoize = memoize, path = ?cli.config);

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Steps { budget } => {
            let problem = config.steps_problem()?;
            let (solutions, stats) = solve(&problem, budget, memoize)?;
            let solutions = into_plain(solutions, |size| size);
            emit(&mut out, cli.json, problem.name(), solutions, stats)
        }
        Command::Change {
            amount,
            denominations,
        } => {
            let problem = Change::new(denominations)?;
            let (solutions, stats) = solve(&problem, problem.initial(amount), memoize)?;
            let solutions = into_plain(solutions, |tender| tender);
            emit(&mut out, cli.json, problem.name(), solutions, stats)
        }
        Command::ChangeGraph {
            amount,
            denominations,
        } => {
            let run = change_graph(amount, &denominations)?;
            if cli.json {
                serde_json::to_writer_pretty(&mut out, &run)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", run.graph.to_dot())?;
            }
            Ok(())
        }
        Command::Permute { items } => {
            let problem = Permutations::<String>::new();
            let (solutions, stats) = solve(&problem, items, memoize)?;
            let solutions = into_plain(solutions, |pick| pick.item);
            emit(&mut out, cli.json, problem.name(), solutions, stats)
        }
        Command::Queens { n, reconstructed } => {
            let (name, solutions, stats) = if reconstructed {
                let problem = NQueens::with_rule(ReconstructedRule);
                let (solutions, stats) = solve(&problem, Board::empty(n), memoize)?;
                (problem.name().to_string(), solutions, stats)
            } else {
                let problem = NQueens::new();
                let (solutions, stats) = solve(&problem, Board::empty(n), memoize)?;
                (problem.name().to_string(), solutions, stats)
            };
            let solutions = into_plain(solutions, |column| column);
            emit(&mut out, cli.json, &name, solutions, stats)
        }
        Command::PowerSet { items } => {
            let problem = PowerSet::<String>::new();
            let (solutions, stats) = solve(&problem, items, memoize)?;
            let solutions: Vec<Vec<String>> = solutions
                .into_iter()
                .map(|solution| {
                    solution
                        .into_choices()
                        .into_iter()
                        .filter_map(Membership::into_included)
                        .collect()
                })
                .collect();
            emit(&mut out, cli.json, problem.name(), solutions, stats)
        }
        Command::Robot {
            from_x,
            from_y,
            to_x,
            to_y,
        } => {
            let problem = RobotPath::new(config.grid()?);
            let start = Position::new((from_x, from_y), (to_x, to_y));
            let (solutions, stats) = solve(&problem, start, memoize)?;
            let solutions = into_plain(solutions, |step| step);
            emit(&mut out, cli.json, problem.name(), solutions, stats)
        }
    }
}

/// Enumerate `problem` from `state`, memoized when configured.
fn solve<P>(
    problem: &P,
    state: P::State,
    memoize: bool,
) -> Result<(SolutionSet<P::Choice>, EnumerationStats), CliError>
where
    P: Problem,
    P::State: Hash + Eq,
    CliError: From<P::Error>,
{
    let builder = EnumeratorBuilder::new().problem(problem);
    if memoize {
        let mut enumerator = builder.build_memoized()?;
        let solutions = enumerator.enumerate(state)?;
        Ok((solutions, enumerator.stats().clone()))
    } else {
        let mut enumerator = builder.build()?;
        let solutions = enumerator.enumerate(state)?;
        Ok((solutions, enumerator.stats().clone()))
    }
}

fn into_plain<C, T>(solutions: SolutionSet<C>, item: impl Fn(C) -> T) -> Vec<Vec<T>> {
    solutions
        .into_iter()
        .map(|solution| solution.into_choices().into_iter().map(&item).collect())
        .collect()
}

fn emit<W: Write, T: Display + Serialize>(
    out: &mut W,
    json: bool,
    problem: &str,
    solutions: Vec<Vec<T>>,
    stats: EnumerationStats,
) -> Result<(), CliError> {
    if json {
        let report = Report {
            problem: problem.to_string(),
            solutions,
            stats,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    for (index, solution) in solutions.iter().enumerate() {
        let items: Vec<String> = solution.iter().map(ToString::to_string).collect();
        writeln!(out, "{index} [{}]", items.join(", "))?;
    }
    writeln!(out, "{} solutions", solutions.len())?;
    Ok(())
}
