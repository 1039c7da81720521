//! Benchmark harness for the matchers.
//!
//! For every [`BenchCase`] the harness:
//!
//! 1. Loads the text file (memory-mapped, must be UTF-8)
//! 2. Checks that all matchers agree on the existing pattern and that all
//!    of them miss the absent one, cross-checked against `memchr::memmem`
//! 3. Times `repetitions` back-to-back calls per matcher and pattern
//!
//! Agreement checks are independent and run in parallel. Timing loops run
//! one after another so they do not compete for cores.

pub mod config;
pub mod error;
pub mod report;

pub use config::{BenchCase, BenchConfig, DEFAULT_REPETITIONS, PatternKind};
pub use error::HarnessError;
pub use report::{CaseReport, Timing};

use crate::search::Algorithm;
use crate::utils::progress::timing_bar;
use memchr::memmem;
use memmap2::Mmap;
use rayon::prelude::*;
use std::fs::File;
use std::hint::black_box;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Read a whole text file into memory.
pub fn load_text(path: &Path) -> Result<String, HarnessError> {
    let io_error = |source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    if file.metadata().map_err(io_error)?.len() == 0 {
        return Ok(String::new());
    }

    let mmap = unsafe { Mmap::map(&file).map_err(io_error)? };
    let text = std::str::from_utf8(&mmap).map_err(|source| HarnessError::Utf8 {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.to_owned())
}

/// Run every matcher on `pattern` and require a single shared answer.
fn agreed_index(text: &[u8], pattern: &[u8]) -> Result<Option<usize>, HarnessError> {
    let answers: Vec<(Algorithm, Option<usize>)> = Algorithm::ALL
        .iter()
        .map(|&algorithm| (algorithm, algorithm.find(text, pattern)))
        .collect();

    let first = answers[0].1;
    if answers.iter().any(|&(_, index)| index != first) {
        return Err(HarnessError::Disagreement {
            pattern: String::from_utf8_lossy(pattern).into_owned(),
            answers,
        });
    }

    // memmem finds the empty needle at 0; the matchers never do
    let expected = if pattern.is_empty() {
        None
    } else {
        memmem::find(text, pattern)
    };
    if expected != first {
        return Err(HarnessError::OracleMismatch {
            pattern: String::from_utf8_lossy(pattern).into_owned(),
            expected,
            actual: first,
        });
    }

    Ok(first)
}

/// Verify the matchers on a case's two patterns.
///
/// Returns the offset all matchers report for `existing`. Every matcher
/// must miss `missing`.
pub fn check_agreement(
    text: &[u8],
    existing: &[u8],
    missing: &[u8],
) -> Result<Option<usize>, HarnessError> {
    let found = agreed_index(text, existing)?;

    if let Some(index) = agreed_index(text, missing)? {
        return Err(HarnessError::UnexpectedMatch {
            pattern: String::from_utf8_lossy(missing).into_owned(),
            index,
        });
    }

    Ok(found)
}

/// Wall-clock time of `repetitions` sequential searches.
pub fn measure(algorithm: Algorithm, text: &[u8], pattern: &[u8], repetitions: usize) -> Duration {
    let start = Instant::now();
    for _ in 0..repetitions {
        black_box(algorithm.find(black_box(text), black_box(pattern)));
    }
    start.elapsed()
}

/// Verify and time a single case.
pub fn run_case(case: &BenchCase, repetitions: usize) -> Result<CaseReport, HarnessError> {
    let text = load_text(&case.file)?;
    let existing_index =
        check_agreement(text.as_bytes(), case.existing.as_bytes(), case.missing.as_bytes())?;
    Ok(time_case(case, &text, existing_index, repetitions, false))
}

fn time_case(
    case: &BenchCase,
    text: &str,
    existing_index: Option<usize>,
    repetitions: usize,
    progress: bool,
) -> CaseReport {
    let steps = (Algorithm::ALL.len() * 2) as u64;
    let bar = progress.then(|| timing_bar(steps, format!("Timing {}", case.file.display())));

    let mut timings = Vec::with_capacity(steps as usize);
    for algorithm in Algorithm::ALL {
        for (kind, pattern) in [
            (PatternKind::Existing, &case.existing),
            (PatternKind::Missing, &case.missing),
        ] {
            let elapsed = measure(algorithm, text.as_bytes(), pattern.as_bytes(), repetitions);
            debug!(
                file = %case.file.display(),
                %algorithm,
                kind = kind.label(),
                seconds = elapsed.as_secs_f64(),
                "timed"
            );
            timings.push(Timing {
                algorithm,
                kind,
                repetitions,
                elapsed,
            });
            if let Some(ref pb) = bar {
                pb.inc(1);
            }
        }
    }

    if let Some(pb) = bar {
        pb.finish_and_clear();
    }

    CaseReport {
        file: case.file.clone(),
        text_len: text.len(),
        existing: case.existing.clone(),
        missing: case.missing.clone(),
        existing_index,
        timings,
    }
}

/// Run the whole harness.
///
/// All cases are loaded and verified before any timing starts, so a
/// disagreement fails fast.
pub fn run(config: &BenchConfig, progress: bool) -> Result<Vec<CaseReport>, HarnessError> {
    let verified: Vec<(&BenchCase, String, Option<usize>)> = config
        .cases
        .par_iter()
        .map(|case| -> Result<_, HarnessError> {
            let text = load_text(&case.file)?;
            let index = check_agreement(
                text.as_bytes(),
                case.existing.as_bytes(),
                case.missing.as_bytes(),
            )?;
            info!(
                file = %case.file.display(),
                bytes = text.len(),
                existing = %case.existing,
                index = ?index,
                "matchers agree"
            );
            Ok((case, text, index))
        })
        .collect::<Result<_, _>>()?;

    Ok(verified
        .iter()
        .map(|(case, text, index)| time_case(case, text, *index, config.repetitions, progress))
        .collect())
}
