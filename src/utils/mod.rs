//! Shared helpers.
//!
//! - [`progress`] - Progress bar, compiled out without the `progress` feature

pub mod progress;
