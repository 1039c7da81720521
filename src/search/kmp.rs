use super::is_degenerate;

/// Build the longest-prefix-suffix table for `pattern`.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it. Always `lps[0] == 0` and `lps[i] <= i`.
/// An empty pattern yields an empty table.
pub fn build_lps(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0usize; pattern.len()];
    let mut length = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[length] {
            length += 1;
            lps[i] = length;
            i += 1;
        } else if length != 0 {
            // Fall back to the next shorter border; `i` stays put
            length = lps[length - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// Find the first occurrence of `pattern` in `text` with Knuth-Morris-Pratt.
///
/// Runs in `O(n + m)` and never moves backwards over `text`.
pub fn kmp_search(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let (n, m) = (text.len(), pattern.len());
    if is_degenerate(n, m) {
        return None;
    }

    let lps = build_lps(pattern);
    let (mut i, mut j) = (0, 0);

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == m {
                return Some(i - j);
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    None
}
