use anyhow::{Context, Result, bail, ensure};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use strmatch::bench::{self, BenchConfig, report};
use strmatch::bound::{SELF_TEST_CASES, upper_bound};
use strmatch::search::Algorithm;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "strmatch")]
#[command(version, about = "Compare KMP, Rabin-Karp and Boyer-Moore substring search")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that all matchers agree, then time them on each text
    Bench {
        /// JSON file listing cases (defaults to the bundled articles)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Searches per timing loop
        #[arg(short, long)]
        repetitions: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Print the byte offset of the first occurrence of a pattern in a file
    Search {
        /// File to search (UTF-8 text)
        file: PathBuf,

        /// Pattern to look for
        pattern: String,

        /// Matcher to use (all three when omitted)
        #[arg(short, long, value_enum)]
        algorithm: Option<Algorithm>,
    },
    /// Run the upper-bound binary search self-test
    Bound,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Bench {
            config,
            repetitions,
            json,
            no_color,
        } => {
            run_bench(config, repetitions, json, !no_color)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Search {
            file,
            pattern,
            algorithm,
        } => run_search(file, &pattern, algorithm),
        Commands::Bound => {
            run_bound_self_test()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_bench(
    config_path: Option<PathBuf>,
    repetitions: Option<usize>,
    json: bool,
    color: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => {
            let base = path.parent().map(PathBuf::from).unwrap_or_default();
            BenchConfig::load(&path)?.rebase(&base)
        }
        None => BenchConfig::default(),
    };
    if let Some(repetitions) = repetitions {
        config.repetitions = repetitions;
    }

    let reports = bench::run(&config, !json).context("Benchmark failed")?;

    if json {
        report::print_json(&reports)?;
    } else {
        report::print_reports(&reports, color)?;
    }

    Ok(())
}

fn run_search(file: PathBuf, pattern: &str, algorithm: Option<Algorithm>) -> Result<ExitCode> {
    let text = bench::load_text(&file)?;
    let (text, needle) = (text.as_bytes(), pattern.as_bytes());

    let found = match algorithm {
        Some(algorithm) => {
            let index = algorithm.find(text, needle);
            print_index(index);
            index
        }
        None => {
            let answers = Algorithm::ALL.map(|algorithm| (algorithm, algorithm.find(text, needle)));
            for (algorithm, index) in answers {
                print!("{}: ", algorithm);
                print_index(index);
            }
            let first = answers[0].1;
            if answers.iter().any(|&(_, index)| index != first) {
                bail!("Matchers disagree on {:?} in {}", pattern, file.display());
            }
            first
        }
    };

    Ok(if found.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_index(index: Option<usize>) {
    match index {
        Some(index) => println!("{}", index),
        None => println!("not found"),
    }
}

fn run_bound_self_test() -> Result<()> {
    for (i, &(arr, target)) in SELF_TEST_CASES.iter().enumerate() {
        let test = i + 1;
        let result = upper_bound(arr, target);
        let shown = result
            .bound
            .map(|bound| bound.to_string())
            .unwrap_or_else(|| "None".to_string());
        println!(
            "Test {} -> Target: {}, Iterations: {}, Upper bound: {}",
            test, target, result.iterations, shown
        );

        match result.bound {
            Some(bound) => ensure!(
                bound >= target && arr.contains(&bound),
                "Test {}: {} is not an upper bound for {} in {:?}",
                test,
                bound,
                target,
                arr
            ),
            None => println!("Test {} -> Target {} exceeds all array elements.", test, target),
        }
    }

    Ok(())
}
