use super::is_degenerate;

/// Bad-character shift table, indexed by byte value.
///
/// Every byte at positions `0..m-1` maps to its distance from the last
/// occurrence to the end of the pattern. The final byte maps to `m` unless
/// it already occurs earlier. Bytes absent from the pattern shift by `m`.
#[derive(Debug, Clone)]
pub struct ShiftTable {
    shifts: [Option<usize>; 256],
    len: usize,
}

impl ShiftTable {
    /// Build the table for a non-empty `pattern`.
    pub fn build(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let mut shifts = [None; 256];

        if let Some((&last, head)) = pattern.split_last() {
            for (idx, &byte) in head.iter().enumerate() {
                shifts[byte as usize] = Some(m - idx - 1);
            }
            shifts[last as usize].get_or_insert(m);
        }

        Self { shifts, len: m }
    }

    /// The table entry for `byte`, if the pattern defines one.
    #[inline]
    pub fn get(&self, byte: u8) -> Option<usize> {
        self.shifts[byte as usize]
    }

    /// How far to advance the window when it ends in `byte`.
    #[inline]
    pub fn shift(&self, byte: u8) -> usize {
        self.get(byte).unwrap_or(self.len)
    }
}

/// Find the first occurrence of `pattern` in `text` with Boyer-Moore.
///
/// Windows are compared right to left. After a mismatch the window moves by
/// the shift of the text byte under the window's last position, not the
/// mismatching byte (no good-suffix rule).
pub fn boyer_moore_search(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let (n, m) = (text.len(), pattern.len());
    if is_degenerate(n, m) {
        return None;
    }

    let table = ShiftTable::build(pattern);
    let mut i = 0;

    while i <= n - m {
        let window = &text[i..i + m];
        let matched = window
            .iter()
            .rev()
            .zip(pattern.iter().rev())
            .all(|(t, p)| t == p);
        if matched {
            return Some(i);
        }
        i += table.shift(text[i + m - 1]);
    }

    None
}
