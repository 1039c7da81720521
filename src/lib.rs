//! # strmatch - single-pattern substring search
//!
//! Three classic matchers over byte slices, a harness that checks them
//! against each other and times them on real text, and a small upper-bound
//! binary search.
//!
//! ## Architecture
//!
//! - [`search`] - KMP, Rabin-Karp and Boyer-Moore matchers with their tables
//! - [`bench`] - Agreement checks and timing loops over text files
//! - [`bound`] - Smallest element `>= target` in a sorted slice
//! - [`utils`] - Progress reporting
//!
//! ## Quick Start
//!
//! ```
//! use strmatch::search::{boyer_moore_search, kmp_search, rabin_karp_search};
//!
//! let text = b"hello world";
//! assert_eq!(kmp_search(text, b"world"), Some(6));
//! assert_eq!(rabin_karp_search(text, b"world"), Some(6));
//! assert_eq!(boyer_moore_search(text, b"xyz"), None);
//! ```
//!
//! Every matcher returns the byte offset of the *first* occurrence. Empty
//! patterns and patterns longer than the text are never found.

pub mod bench;
pub mod bound;
pub mod search;
pub mod utils;
