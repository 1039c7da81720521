use crate::search::Algorithm;
use std::fmt::Write as _;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the benchmark harness.
///
/// A pattern that is simply absent is not an error; these variants cover
/// unreadable input and matchers that contradict each other.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Utf8 {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("matchers disagree on {pattern:?}: {}", describe_answers(.answers))]
    Disagreement {
        pattern: String,
        answers: Vec<(Algorithm, Option<usize>)>,
    },

    #[error("matchers report {actual:?} for {pattern:?} but a direct scan finds {expected:?}")]
    OracleMismatch {
        pattern: String,
        expected: Option<usize>,
        actual: Option<usize>,
    },

    #[error("pattern {pattern:?} should be absent but was found at {index}")]
    UnexpectedMatch { pattern: String, index: usize },
}

fn describe_answers(answers: &[(Algorithm, Option<usize>)]) -> String {
    let mut out = String::new();
    for (i, (algorithm, index)) in answers.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = match index {
            Some(index) => write!(out, "{} -> {}", algorithm, index),
            None => write!(out, "{} -> not found", algorithm),
        };
    }
    out
}
