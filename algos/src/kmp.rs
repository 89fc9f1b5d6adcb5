use crate::StringSearch;
use crate::alphabet::trivial_outcome;

pub struct Kmp;

impl StringSearch for Kmp {
    const NAME: &'static str = "kmp";

    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        kmp_find(text, pattern)
    }
}

/// Failure table for [`kmp_find`].
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also its suffix, so `lps[0] == 0` and `lps[i] <= i`.
pub fn build_lps<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];

    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    log::trace!("build_lps: m={}, table={:?}", m, lps);
    lps
}

pub fn kmp_find<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    if let Some(outcome) = trivial_outcome(text, pattern) {
        return outcome;
    }

    let n = text.len();
    let m = pattern.len();
    let lps = build_lps(pattern);

    let mut i = 0; // index in text
    let mut j = 0; // index in pattern

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                // full match ending at i-1
                return Some(i - j);
            }
        } else if j != 0 {
            // i stays put: the matched prefix is never re-read
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    None
}
