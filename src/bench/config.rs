use super::HarnessError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Timing loop length when none is configured
pub const DEFAULT_REPETITIONS: usize = 100;

/// One text file with a pattern it contains and one it does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchCase {
    pub file: PathBuf,
    pub existing: String,
    pub missing: String,
}

impl BenchCase {
    pub fn new(file: impl Into<PathBuf>, existing: &str, missing: &str) -> Self {
        Self {
            file: file.into(),
            existing: existing.to_string(),
            missing: missing.to_string(),
        }
    }
}

/// Which of a case's two patterns a measurement used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Existing,
    Missing,
}

impl PatternKind {
    /// Short label used in the text report
    pub fn label(self) -> &'static str {
        match self {
            PatternKind::Existing => "exist",
            PatternKind::Missing => "fake",
        }
    }
}

/// Benchmark harness configuration.
///
/// Loaded from JSON:
///
/// ```json
/// {
///   "repetitions": 100,
///   "cases": [
///     { "file": "data/article01.txt", "existing": "GPGPU", "missing": "ASJFoasdnvasddav" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(default = "default_repetitions")]
    pub repetitions: usize,
    pub cases: Vec<BenchCase>,
}

fn default_repetitions() -> usize {
    DEFAULT_REPETITIONS
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            cases: vec![
                BenchCase::new("data/article01.txt", "GPGPU", "ASJFoasdnvasddav"),
                BenchCase::new("data/article02.txt", "Ricci", "fakepattern"),
            ],
        }
    }
}

impl BenchConfig {
    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let content = fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| HarnessError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Resolve relative case files against `base`.
    pub fn rebase(mut self, base: &Path) -> Self {
        for case in &mut self.cases {
            if case.file.is_relative() {
                case.file = base.join(&case.file);
            }
        }
        self
    }
}
