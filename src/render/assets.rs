//! Piece sprite resolution and loading.
//!
//! Sprites are looked up by file name (`<piece><shade>.png`, e.g. `bd.png`
//! for the black bishop) under a path prefix, through an [`AssetSource`].
//! Without a caller-supplied source the embedded default set is used, rooted
//! at [`EMBEDDED_ROOT`]. Nothing is cached; every call reads and decodes.

use std::fmt;
use std::io;
use std::path::PathBuf;

use image::{ImageFormat, RgbaImage};
use log::{trace, warn};

use crate::board::{Color, Piece};

/// Path prefix of the embedded sprite set.
pub const EMBEDDED_ROOT: &str = "assets/";

/// A read-only, file-system-like store of sprite files.
pub trait AssetSource: Send + Sync {
    /// Read the whole file at `path`.
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// The 12 default sprites compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedAssets;

const EMBEDDED: [(&str, &[u8]); 12] = [
    ("assets/bd.png", include_bytes!("../../assets/bd.png")),
    ("assets/bl.png", include_bytes!("../../assets/bl.png")),
    ("assets/kd.png", include_bytes!("../../assets/kd.png")),
    ("assets/kl.png", include_bytes!("../../assets/kl.png")),
    ("assets/nd.png", include_bytes!("../../assets/nd.png")),
    ("assets/nl.png", include_bytes!("../../assets/nl.png")),
    ("assets/pd.png", include_bytes!("../../assets/pd.png")),
    ("assets/pl.png", include_bytes!("../../assets/pl.png")),
    ("assets/qd.png", include_bytes!("../../assets/qd.png")),
    ("assets/ql.png", include_bytes!("../../assets/ql.png")),
    ("assets/rd.png", include_bytes!("../../assets/rd.png")),
    ("assets/rl.png", include_bytes!("../../assets/rl.png")),
];

impl AssetSource for EmbeddedAssets {
    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        EMBEDDED
            .iter()
            .find(|(name, _)| *name == path)
            .map(|(_, bytes)| bytes.to_vec())
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("{path}: not embedded"))
            })
    }
}

/// Sprites read from a directory on disk.
#[derive(Clone, Debug)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectoryAssets { root: root.into() }
    }
}

impl AssetSource for DirectoryAssets {
    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.root.join(path))
    }
}

/// Error type for sprite loading failures
#[derive(Debug)]
pub enum AssetError {
    /// The sprite file could not be read
    Io { path: String, source: io::Error },
    /// The sprite file is not a decodable PNG
    Decode {
        path: String,
        source: image::ImageError,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io { path, source } => write!(f, "Failed to read sprite {path}: {source}"),
            AssetError::Decode { path, source } => {
                write!(f, "Failed to decode sprite {path}: {source}")
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            AssetError::Decode { source, .. } => Some(source),
        }
    }
}

/// Sprite file name for a piece, e.g. `bd.png` for the black bishop.
#[must_use]
pub fn sprite_name(piece: Piece, color: Color) -> String {
    format!("{}{}.png", piece.to_char(), color.shade())
}

/// Read and decode the sprite for a piece.
///
/// With `source == None` the embedded set is used and [`EMBEDDED_ROOT`] is
/// prepended to `asset_path`.
pub fn load_sprite(
    source: Option<&dyn AssetSource>,
    asset_path: &str,
    piece: Piece,
    color: Color,
) -> Result<RgbaImage, AssetError> {
    let name = sprite_name(piece, color);
    let (source, path): (&dyn AssetSource, String) = match source {
        Some(source) => (source, format!("{asset_path}{name}")),
        None => (&EmbeddedAssets, format!("{EMBEDDED_ROOT}{asset_path}{name}")),
    };

    trace!("loading {color} {piece:?} sprite from {path}");
    let bytes = source.read(&path).map_err(|err| {
        warn!("sprite {path} unreadable: {err}");
        AssetError::Io {
            path: path.clone(),
            source: err,
        }
    })?;
    let sprite = image::load_from_memory_with_format(&bytes, ImageFormat::Png).map_err(|err| {
        warn!("sprite {path} undecodable: {err}");
        AssetError::Decode {
            path: path.clone(),
            source: err,
        }
    })?;
    Ok(sprite.to_rgba8())
}
