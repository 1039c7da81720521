//! Harness results and their text/JSON rendering

use super::config::PatternKind;
use crate::search::Algorithm;
use serde::{Serialize, Serializer};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Elapsed time of one repeated-search loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Timing {
    pub algorithm: Algorithm,
    pub kind: PatternKind,
    pub repetitions: usize,
    #[serde(rename = "seconds", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

/// Everything measured for one benchmark case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    pub file: PathBuf,
    pub text_len: usize,
    pub existing: String,
    pub missing: String,
    /// Byte offset all matchers agreed on for the existing pattern
    pub existing_index: Option<usize>,
    pub timings: Vec<Timing>,
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Print reports to stdout in the plain timing layout
pub fn print_reports(reports: &[CaseReport], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_reports(&mut stdout, reports)
}

/// Write each case as a file heading followed by one line per timing
pub fn write_reports<W: WriteColor>(out: &mut W, reports: &[CaseReport]) -> io::Result<()> {
    for report in reports {
        writeln!(out)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        write!(out, "{}", display_name(report))?;
        out.reset()?;
        writeln!(out, ":")?;

        match report.existing_index {
            Some(index) => writeln!(out, "{:?} found at byte {}", report.existing, index)?,
            None => writeln!(out, "{:?} not found", report.existing)?,
        }

        for timing in &report.timings {
            write!(out, "{} {}: ", timing.algorithm, timing.kind.label())?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(out, "{:.6}", timing.elapsed.as_secs_f64())?;
            out.reset()?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Print reports to stdout as pretty JSON
pub fn print_json(reports: &[CaseReport]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer_pretty(&mut lock, reports)?;
    writeln!(lock)
}

fn display_name(report: &CaseReport) -> String {
    report
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.file.display().to_string())
}
