//! Error types for board decoding and tile lookup.

use std::fmt;

/// Error type for FEN placement decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The FEN string has no placement field
    Empty,
    /// Unrecognized character in the placement field
    InvalidPiece { char: char, index: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "FEN placement field is empty"),
            FenError::InvalidPiece { char, index } => {
                write!(f, "Invalid piece character '{char}' at position {index} in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for algebraic tile lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    /// No tile has this algebraic name
    NotFound { notation: String },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::NotFound { notation } => write!(f, "tile '{notation}' not found"),
        }
    }
}

impl std::error::Error for TileError {}
