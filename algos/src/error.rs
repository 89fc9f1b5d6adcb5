use thiserror::Error;

/// Which input a rejected symbol came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolOrigin {
    Text,
    Pattern,
}

impl std::fmt::Display for SymbolOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolOrigin::Text => f.write_str("text"),
            SymbolOrigin::Pattern => f.write_str("pattern"),
        }
    }
}

/// A symbol does not fit the alphabet a bad-character table was sized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "AlphabetRangeError: {origin} symbol at position {position} has index {index}, \
     outside an alphabet of {alphabet_size} symbols"
)]
pub struct AlphabetRangeError {
    pub origin: SymbolOrigin,
    pub position: usize,
    pub index: usize,
    pub alphabet_size: usize,
}

/// Failure to build a bounded-alphabet bad-character table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    #[error(transparent)]
    AlphabetRange(#[from] AlphabetRangeError),

    #[error("cannot allocate a bad-character table for an alphabet of {alphabet_size} symbols")]
    Allocation { alphabet_size: usize },
}
