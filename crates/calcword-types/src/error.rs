use std::fmt;

/// Result type for calcword-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types and engine layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A word contains a letter that has no calculator digit
    Unspellable { word: String, letter: char },

    /// Display width outside the supported range
    InvalidWidth(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unspellable { word, letter } => write!(
                f,
                "cannot spell '{}' on a calculator: no digit looks like '{}' upside down",
                word, letter
            ),
            Error::InvalidWidth(width) => write!(
                f,
                "invalid display width {} (expected 1..={})",
                width,
                crate::DisplayWidth::MAX
            ),
        }
    }
}

impl std::error::Error for Error {}
