//! Render chess positions given in FEN to raster board images.
//!
//! # Example
//! ```
//! use chess_image::{Options, Renderer};
//!
//! let renderer = Renderer::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
//! let image = renderer.render(&Options::default().with_board_size(256)).unwrap();
//! assert_eq!(image.dimensions(), (256, 256));
//! ```

pub mod board;
pub mod render;

pub use board::{Board, Color, FenError, LastMove, Piece, Position, Tile, TileError};
pub use image::imageops::FilterType;
pub use render::{
    AssetError, AssetSource, DirectoryAssets, EmbeddedAssets, Options, RenderError, Renderer,
};
