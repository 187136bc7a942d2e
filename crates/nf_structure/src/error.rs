use std::fmt;

/// Error type for notation validation and design requests.
///
/// Every variant is structural and deterministic for a given input;
/// none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// A character outside the `{'.', '(', ')'}` alphabet.
    InvalidSymbol { at: usize, symbol: char },

    /// A closing bracket with no open bracket left on the stack.
    UnmatchedClose { at: usize },

    /// One or more opening brackets never closed by end of input.
    UnmatchedOpen { positions: Vec<usize> },

    /// A design was requested against a notation of a different length.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::InvalidSymbol { at, symbol } => {
                write!(f, "invalid symbol '{symbol}' at position {at}")
            }
            StructureError::UnmatchedClose { at } => {
                write!(f, "unmatched closing bracket at position {at}")
            }
            StructureError::UnmatchedOpen { positions } => {
                write!(f, "unmatched opening brackets at positions {positions:?}")
            }
            StructureError::LengthMismatch { expected, actual } => {
                write!(f, "declared length {expected} does not match notation length {actual}")
            }
        }
    }
}

impl std::error::Error for StructureError {}
