//! Board model: tiles, pieces and FEN placement decoding.
//!
//! # Example
//! ```
//! use chess_image::board::{Board, Tile};
//!
//! let board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
//! assert_eq!(board.len(), 2);
//! assert_eq!(board.positions()[0].tile, Tile::E8);
//! ```

mod error;
mod fen;
pub mod prelude;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, TileError};
pub use types::{Board, Color, LastMove, Piece, Position, Tile};
