use std::collections::HashMap;

use crate::StringSearch;
use crate::alphabet::{BYTE_ALPHABET, Symbol, check_alphabet, trivial_outcome};
use crate::error::{SymbolOrigin, TableError};

/// Boyer–Moore with the bad-character rule only.
pub struct BoyerMoore;

impl StringSearch for BoyerMoore {
    const NAME: &'static str = "boyer-moore";

    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        bm_find(text, pattern)
    }
}

/// Build the bad-character table for byte patterns.
/// Slot `b` holds the rightmost index of `b` in `pattern`, or -1.
pub fn build_bad_char_table(pattern: &[u8]) -> [isize; BYTE_ALPHABET] {
    let mut table = [-1isize; BYTE_ALPHABET];
    for (i, &b) in pattern.iter().enumerate() {
        table[b as usize] = i as isize;
    }
    table
}

/// Dense last-occurrence table for a bounded alphabet of `alphabet_size` symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadCharTable {
    last: Vec<isize>,
}

impl BadCharTable {
    pub fn build<T: Symbol>(pattern: &[T], alphabet_size: usize) -> Result<Self, TableError> {
        check_alphabet(pattern, alphabet_size, SymbolOrigin::Pattern)?;

        let mut last = Vec::new();
        last.try_reserve_exact(alphabet_size)
            .map_err(|_| TableError::Allocation { alphabet_size })?;
        last.resize(alphabet_size, -1isize);

        for (i, &sym) in pattern.iter().enumerate() {
            last[sym.index()] = i as isize;
        }
        log::debug!(
            "BadCharTable::build: m={}, alphabet_size={}",
            pattern.len(),
            alphabet_size
        );

        Ok(Self { last })
    }

    pub fn alphabet_size(&self) -> usize {
        self.last.len()
    }

    /// Rightmost index of `symbol` in the pattern, -1 if absent.
    ///
    /// The pattern was checked against the alphabet, so a symbol outside it
    /// cannot occur in the pattern and reads as -1 too.
    #[inline]
    pub fn last_occurrence<T: Symbol>(&self, symbol: T) -> isize {
        self.last.get(symbol.index()).copied().unwrap_or(-1)
    }
}

/// A pattern together with its bounded-alphabet table, built once and
/// reusable across texts.
#[derive(Debug, Clone)]
pub struct BadCharSearcher<'p, T: Symbol> {
    pattern: &'p [T],
    table: BadCharTable,
}

impl<'p, T: Symbol> BadCharSearcher<'p, T> {
    pub fn new(pattern: &'p [T], alphabet_size: usize) -> Result<Self, TableError> {
        let table = BadCharTable::build(pattern, alphabet_size)?;
        Ok(Self { pattern, table })
    }

    pub fn table(&self) -> &BadCharTable {
        &self.table
    }

    /// Leftmost occurrence of the pattern in `text`.
    ///
    /// `text` is not checked against the alphabet.
    pub fn find(&self, text: &[T]) -> Option<usize> {
        if let Some(outcome) = trivial_outcome(text, self.pattern) {
            return outcome;
        }
        scan(text, self.pattern, |sym| self.table.last_occurrence(sym))
    }
}

/// Last-occurrence table for open alphabets such as `char`.
#[derive(Debug, Clone)]
pub struct SparseBadCharTable<T: Symbol> {
    last: HashMap<T, isize>,
}

impl<T: Symbol> SparseBadCharTable<T> {
    pub fn build(pattern: &[T]) -> Self {
        let mut last = HashMap::with_capacity(pattern.len());
        for (i, &sym) in pattern.iter().enumerate() {
            last.insert(sym, i as isize);
        }
        Self { last }
    }

    #[inline]
    pub fn last_occurrence(&self, symbol: T) -> isize {
        self.last.get(&symbol).copied().unwrap_or(-1)
    }
}

/// Window scan shared by every table flavour.
///
/// Callers must have ruled out `m == 0` and `m > n`.
fn scan<T, F>(text: &[T], pattern: &[T], last_occurrence: F) -> Option<usize>
where
    T: Copy + PartialEq,
    F: Fn(T) -> isize,
{
    let n = text.len();
    let m = pattern.len();

    let mut s = 0usize; // start of the current window in text

    while s <= n - m {
        let mut j = (m - 1) as isize;

        while j >= 0 && pattern[j as usize] == text[s + j as usize] {
            j -= 1;
        }

        if j < 0 {
            return Some(s);
        }

        let shift = j - last_occurrence(text[s + j as usize]);
        // a rightmost occurrence past j would give a non-positive shift
        s += shift.max(1) as usize;
    }

    None
}

/// Leftmost occurrence of `pattern` in `text`, scanning each window right to left.
/// Works on any bytes, UTF-8 or not.
pub fn bm_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if let Some(outcome) = trivial_outcome(text, pattern) {
        return outcome;
    }

    let bad_char = build_bad_char_table(pattern);
    scan(text, pattern, |b| bad_char[b as usize])
}

/// Boyer–Moore over symbols drawn from `0..alphabet_size`.
///
/// Both inputs are checked against the alphabet before scanning, so an
/// out-of-range symbol is reported even if the scan would have skipped it.
pub fn bm_find_in_alphabet<T: Symbol>(
    text: &[T],
    pattern: &[T],
    alphabet_size: usize,
) -> Result<Option<usize>, TableError> {
    let searcher = BadCharSearcher::new(pattern, alphabet_size)?;
    check_alphabet(text, alphabet_size, SymbolOrigin::Text)?;
    Ok(searcher.find(text))
}

/// Boyer–Moore over an open alphabet, backed by a hash map.
pub fn bm_find_symbols<T: Symbol>(text: &[T], pattern: &[T]) -> Option<usize> {
    if let Some(outcome) = trivial_outcome(text, pattern) {
        return outcome;
    }

    let table = SparseBadCharTable::build(pattern);
    scan(text, pattern, |sym| table.last_occurrence(sym))
}
