use crate::StringSearch;
use crate::alphabet::trivial_outcome;

pub struct Naive;

impl StringSearch for Naive {
    const NAME: &'static str = "naive";

    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        naive_find(text, pattern)
    }
}

/// Brute-force scan: try every alignment, compare left to right,
/// stop at the first full match.
pub fn naive_find<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    if let Some(outcome) = trivial_outcome(text, pattern) {
        return outcome;
    }

    let n = text.len();
    let m = pattern.len();

    for i in 0..=n - m {
        let mut j = 0;
        while j < m && text[i + j] == pattern[j] {
            j += 1;
        }
        if j == m {
            return Some(i);
        }
    }

    None
}
