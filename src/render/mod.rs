//! Board image rendering.
//!
//! [`Renderer`] owns a decoded [`Board`](crate::board::Board) plus the
//! optional check tile and last move, and turns them into an
//! [`image::RgbaImage`] for a given set of [`Options`].

pub mod assets;
mod canvas;
mod font;
pub mod geometry;
mod options;
pub mod palette;
mod renderer;

pub use assets::{AssetError, AssetSource, DirectoryAssets, EmbeddedAssets};
pub use geometry::{calc_draw_size, DrawSize};
pub use options::{Options, DEFAULT_BOARD_SIZE, DEFAULT_PIECE_RATIO, DEFAULT_RESAMPLER};
pub use renderer::{RenderError, Renderer};
