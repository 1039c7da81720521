//! Single-pattern substring search.
//!
//! Three independent matchers, each returning the byte offset of the first
//! occurrence of `pattern` in `text`, or `None`:
//!
//! - [`kmp`] - Knuth-Morris-Pratt, driven by a longest-prefix-suffix table
//! - [`rabin_karp`] - polynomial rolling hash with direct verification
//! - [`boyer_moore`] - right-to-left window compare with a bad-character shift table
//!
//! An empty pattern, or a pattern longer than the text, is never found.
//!
//! ```
//! use strmatch::search::{Algorithm, kmp_search};
//!
//! let text = b"ABABDABACDABABCABAB";
//! assert_eq!(kmp_search(text, b"ABABCABAB"), Some(10));
//!
//! for algorithm in Algorithm::ALL {
//!     assert_eq!(algorithm.find(text, b"ABABCABAB"), Some(10));
//! }
//! ```

pub mod boyer_moore;
pub mod kmp;
pub mod rabin_karp;

pub use boyer_moore::{ShiftTable, boyer_moore_search};
pub use kmp::{build_lps, kmp_search};
pub use rabin_karp::{RollingHash, polynomial_hash, rabin_karp_search};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The available matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Kmp,
    RabinKarp,
    BoyerMoore,
}

impl Algorithm {
    /// Every matcher, in report order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Kmp, Algorithm::RabinKarp, Algorithm::BoyerMoore];

    /// Run this matcher over `text`.
    #[inline]
    pub fn find(self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        match self {
            Algorithm::Kmp => kmp_search(text, pattern),
            Algorithm::RabinKarp => rabin_karp_search(text, pattern),
            Algorithm::BoyerMoore => boyer_moore_search(text, pattern),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Kmp => write!(f, "KMP"),
            Algorithm::RabinKarp => write!(f, "Rabin-Karp"),
            Algorithm::BoyerMoore => write!(f, "Boyer-Moore"),
        }
    }
}

/// True when no matcher can possibly find `pattern` in a text of `text_len` bytes.
#[inline]
pub(crate) fn is_degenerate(text_len: usize, pattern_len: usize) -> bool {
    pattern_len == 0 || pattern_len > text_len
}
