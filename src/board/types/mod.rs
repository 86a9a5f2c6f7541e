//! Core board types.
//!
//! - `Tile` - one of the 64 squares, plus the `Tile::NONE` sentinel
//! - `Piece` and `Color` - chess piece types and colors
//! - `Position`, `Board`, `LastMove` - the decoded board model

mod piece;
mod position;
mod tile;

pub use piece::{Color, Piece};
pub use position::{Board, LastMove, Position};
pub use tile::Tile;
