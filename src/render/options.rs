//! Render options and their defaults.

use std::fmt;
use std::sync::Arc;

use image::imageops::FilterType;

use super::assets::AssetSource;

pub const DEFAULT_BOARD_SIZE: u32 = 512;
pub const DEFAULT_PIECE_RATIO: f64 = 0.9;
pub const DEFAULT_RESAMPLER: FilterType = FilterType::CatmullRom;

/// Options for a single [`Renderer::render`](super::Renderer::render) call.
///
/// Zero or non-positive sizes fall back to the defaults when the options are
/// normalized, so `Options::default()` and a zeroed struct behave the same.
#[derive(Clone)]
pub struct Options {
    /// Side of the square output image in pixels.
    pub board_size: u32,
    /// Piece sprite size relative to one grid cell.
    pub piece_ratio: f64,
    /// Filter used to scale piece sprites.
    pub resampler: FilterType,
    /// Draw the board from Black's side.
    pub inverted: bool,
    /// Where sprites are read from; `None` uses the embedded set.
    pub asset_source: Option<Arc<dyn AssetSource>>,
    /// Prefix joined in front of each sprite file name.
    pub asset_path: String,
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Options::default()
    }

    #[must_use]
    pub fn with_board_size(mut self, board_size: u32) -> Self {
        self.board_size = board_size;
        self
    }

    #[must_use]
    pub fn with_piece_ratio(mut self, piece_ratio: f64) -> Self {
        self.piece_ratio = piece_ratio;
        self
    }

    #[must_use]
    pub fn with_resampler(mut self, resampler: FilterType) -> Self {
        self.resampler = resampler;
        self
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn with_asset_source(mut self, source: Arc<dyn AssetSource>) -> Self {
        self.asset_source = Some(source);
        self
    }

    #[must_use]
    pub fn with_asset_path(mut self, asset_path: impl Into<String>) -> Self {
        self.asset_path = asset_path.into();
        self
    }

    /// Apply the defaulting rules. Idempotent.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.board_size == 0 {
            self.board_size = DEFAULT_BOARD_SIZE;
        }
        if !(self.piece_ratio > 0.0) {
            self.piece_ratio = DEFAULT_PIECE_RATIO;
        }
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            board_size: DEFAULT_BOARD_SIZE,
            piece_ratio: DEFAULT_PIECE_RATIO,
            resampler: DEFAULT_RESAMPLER,
            inverted: false,
            asset_source: None,
            asset_path: String::new(),
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("board_size", &self.board_size)
            .field("piece_ratio", &self.piece_ratio)
            .field("resampler", &self.resampler)
            .field("inverted", &self.inverted)
            .field("asset_source", &self.asset_source.as_ref().map(|_| "custom"))
            .field("asset_path", &self.asset_path)
            .finish()
    }
}
