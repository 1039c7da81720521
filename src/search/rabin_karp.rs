use super::is_degenerate;

/// Multiplier of the polynomial hash (one step per possible byte value).
pub const BASE: u64 = 256;

/// Small prime modulus. Collisions are frequent and always verified.
pub const MODULUS: u64 = 101;

/// `base^exp mod modulus` by square-and-multiply.
fn pow_mod(mut base: u64, mut exp: usize, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    result
}

/// Polynomial hash of `s`: `sum(s[i] * BASE^(k-1-i)) mod MODULUS`.
pub fn polynomial_hash(s: &[u8]) -> u64 {
    s.iter()
        .fold(0, |hash, &byte| (hash * BASE + byte as u64) % MODULUS)
}

/// Hash of a fixed-width window that slides one byte at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    hash: u64,
    /// `BASE^(width-1) mod MODULUS`, the weight of the leading byte
    high_power: u64,
}

impl RollingHash {
    /// Hash the initial window. `window` must not be empty.
    pub fn new(window: &[u8]) -> Self {
        debug_assert!(!window.is_empty());
        Self {
            hash: polynomial_hash(window),
            high_power: pow_mod(BASE, window.len().saturating_sub(1), MODULUS),
        }
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.hash
    }

    /// Slide the window right: drop `outgoing` from the front, append `incoming`.
    #[inline]
    pub fn roll(&mut self, outgoing: u8, incoming: u8) {
        let removed = outgoing as u64 * self.high_power % MODULUS;
        // Keep the difference in [0, MODULUS) before scaling
        let remainder = if self.hash >= removed {
            self.hash - removed
        } else {
            self.hash + MODULUS - removed
        };
        self.hash = (remainder * BASE + incoming as u64) % MODULUS;
    }
}

/// Find the first occurrence of `pattern` in `text` with Rabin-Karp.
///
/// Hash equality only nominates a window; every candidate is compared
/// byte-for-byte before it is reported.
pub fn rabin_karp_search(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let (n, m) = (text.len(), pattern.len());
    if is_degenerate(n, m) {
        return None;
    }

    let pattern_hash = polynomial_hash(pattern);
    let mut window = RollingHash::new(&text[..m]);

    for i in 0..=n - m {
        if window.value() == pattern_hash && &text[i..i + m] == pattern {
            return Some(i);
        }
        if i < n - m {
            window.roll(text[i], text[i + m]);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_mod() {
        assert_eq!(pow_mod(BASE, 0, MODULUS), 1);
        assert_eq!(pow_mod(BASE, 1, MODULUS), 256 % 101);
        assert_eq!(pow_mod(BASE, 2, MODULUS), 256 * 256 % 101);
        assert_eq!(pow_mod(BASE, 5, MODULUS), (1..=5).fold(1u64, |acc, _| acc * 256 % 101));
    }

    #[test]
    fn test_polynomial_hash_matches_definition() {
        let s = b"GPGPU";
        let k = s.len();
        let expected = s.iter().enumerate().fold(0u64, |acc, (i, &c)| {
            (acc + c as u64 * pow_mod(BASE, k - 1 - i, MODULUS)) % MODULUS
        });
        assert_eq!(polynomial_hash(s), expected);
        assert_eq!(polynomial_hash(b""), 0);
    }

    #[test]
    fn test_hash_in_range() {
        for s in [&b"a"[..], b"zz", b"\xff\xff\xff", b"hello world"] {
            assert!(polynomial_hash(s) < MODULUS);
        }
    }

    #[test]
    fn test_roll_equals_fresh_hash() {
        let text = b"the quick brown fox jumps over the lazy dog \xff\x00\xfe";
        for width in 1..8 {
            let mut rolling = RollingHash::new(&text[..width]);
            for i in 0..text.len() - width {
                rolling.roll(text[i], text[i + width]);
                assert_eq!(
                    rolling.value(),
                    polynomial_hash(&text[i + 1..i + 1 + width]),
                    "width {} at offset {}",
                    width,
                    i + 1
                );
            }
        }
    }

    #[test]
    fn test_roll_normalizes_negative_difference() {
        // hash("\x01\xff") = 6 while the leading byte weighs 54
        let mut rolling = RollingHash::new(b"\x01\xff");
        assert!(rolling.value() < 54);
        rolling.roll(0x01, 0x00);
        assert_eq!(rolling.value(), polynomial_hash(b"\xff\x00"));
        assert!(rolling.value() < MODULUS);
    }

    #[test]
    fn test_collision_is_not_reported() {
        let pattern = b"ab";
        let target = polynomial_hash(pattern);
        let collider = (b'a'..=b'z')
            .flat_map(|x| (b'a'..=b'z').map(move |y| [x, y]))
            .find(|w| w != pattern && polynomial_hash(w) == target)
            .expect("a two-letter collision exists modulo 101");

        assert_eq!(rabin_karp_search(&collider, pattern), None);

        let mut text = collider.to_vec();
        text.extend_from_slice(pattern);
        assert_eq!(rabin_karp_search(&text, pattern), Some(2));
    }

    #[test]
    fn test_rabin_karp_last_window() {
        assert_eq!(rabin_karp_search(b"abcdef", b"def"), Some(3));
    }

    #[test]
    fn test_rabin_karp_guards() {
        assert_eq!(rabin_karp_search(b"abc", b""), None);
        assert_eq!(rabin_karp_search(b"abc", b"abcd"), None);
    }
}
