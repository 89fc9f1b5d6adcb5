use std::hash::Hash;

use crate::error::{AlphabetRangeError, SymbolOrigin};

/// Number of distinct byte values.
pub const BYTE_ALPHABET: usize = 256;

/// A symbol that can address a slot in an alphabet-indexed table.
pub trait Symbol: Copy + Eq + Hash {
    fn index(self) -> usize;
}

impl Symbol for u8 {
    #[inline(always)]
    fn index(self) -> usize {
        self as usize
    }
}

impl Symbol for u16 {
    #[inline(always)]
    fn index(self) -> usize {
        self as usize
    }
}

impl Symbol for u32 {
    #[inline(always)]
    fn index(self) -> usize {
        self as usize
    }
}

impl Symbol for char {
    #[inline(always)]
    fn index(self) -> usize {
        self as u32 as usize
    }
}

/// Fails on the first symbol whose index does not fit `alphabet_size`.
pub fn check_alphabet<T: Symbol>(
    symbols: &[T],
    alphabet_size: usize,
    origin: SymbolOrigin,
) -> Result<(), AlphabetRangeError> {
    match symbols
        .iter()
        .position(|&s| s.index() >= alphabet_size)
    {
        Some(position) => Err(AlphabetRangeError {
            origin,
            position,
            index: symbols[position].index(),
            alphabet_size,
        }),
        None => Ok(()),
    }
}

/// Answers the cases every algorithm resolves without scanning:
/// an empty pattern matches at 0, a pattern longer than the text never matches.
#[inline]
pub(crate) fn trivial_outcome<T>(text: &[T], pattern: &[T]) -> Option<Option<usize>> {
    if pattern.is_empty() {
        return Some(Some(0));
    }
    if pattern.len() > text.len() {
        return Some(None);
    }
    None
}
