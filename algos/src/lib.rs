mod alphabet;
mod bm;
mod error;
mod kmp;
mod naive;

/// A single-pattern, leftmost-match substring search.
///
/// Implementors are stateless: any preprocessing happens inside the call.
pub trait StringSearch {
    const NAME: &'static str;

    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize>;
    fn find(text: &str, pattern: &str) -> Option<usize> {
        let text_bytes = text.as_bytes();
        let pattern_bytes = pattern.as_bytes();
        Self::find_bytes(text_bytes, pattern_bytes)
    }
}

pub use alphabet::{BYTE_ALPHABET, Symbol, check_alphabet};
pub use bm::{
    BadCharSearcher, BadCharTable, BoyerMoore, SparseBadCharTable, bm_find, bm_find_in_alphabet,
    bm_find_symbols, build_bad_char_table,
};
pub use error::{AlphabetRangeError, SymbolOrigin, TableError};
pub use kmp::{Kmp, build_lps, kmp_find};
pub use naive::{Naive, naive_find};

/// Runtime choice between the search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    Naive,
    Kmp,
    BoyerMoore,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Naive, Algorithm::Kmp, Algorithm::BoyerMoore];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => Naive::NAME,
            Algorithm::Kmp => Kmp::NAME,
            Algorithm::BoyerMoore => BoyerMoore::NAME,
        }
    }

    /// Start of the leftmost occurrence of `pattern` in `text`.
    pub fn search(self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        log::trace!(
            "search: algo={}, n={}, m={}",
            self.name(),
            text.len(),
            pattern.len()
        );
        match self {
            Algorithm::Naive => Naive::find_bytes(text, pattern),
            Algorithm::Kmp => Kmp::find_bytes(text, pattern),
            Algorithm::BoyerMoore => BoyerMoore::find_bytes(text, pattern),
        }
    }

    /// Like [`Algorithm::search`], with the result as a byte offset into `text`.
    pub fn search_str(self, text: &str, pattern: &str) -> Option<usize> {
        self.search(text.as_bytes(), pattern.as_bytes())
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_clap() {
        use clap::ValueEnum;
        for algo in Algorithm::ALL {
            assert_eq!(Algorithm::from_str(algo.name(), false), Ok(algo));
        }
    }

    #[test]
    fn concrete_scenarios_agree() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.search(b"abxabcabcaby", b"abcaby"), Some(6), "{algo}");
            assert_eq!(algo.search(b"aaaaaaaaaa", b"aaa"), Some(0), "{algo}");
            assert_eq!(algo.search(b"hello world", b"xyz"), None, "{algo}");
            assert_eq!(algo.search(b"", b""), Some(0), "{algo}");
            assert_eq!(algo.search(b"", b"a"), None, "{algo}");
            assert_eq!(algo.search_str("🌍hello", "hello"), Some(4), "{algo}");
        }
    }
}
