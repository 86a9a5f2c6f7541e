//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_image::board::prelude::*;
//! ```

pub use super::{Board, Color, FenError, LastMove, Piece, Position, Tile, TileError};
