//! The layer compositor.
//!
//! Each [`Renderer::render`] call allocates a fresh canvas and paints it in
//! fixed passes, later passes overwriting earlier ones:
//! background, last-move highlight, check highlight, coordinate labels,
//! pieces. The board, check tile and last move live on the renderer and are
//! reused across calls; everything else is per call.

use std::fmt;
use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use log::{debug, trace};

use super::assets::{self, AssetError};
use super::canvas;
use super::geometry::{calc_draw_size, DrawSize};
use super::palette;
use super::Options;
use crate::board::{Board, FenError, LastMove, Tile};

const FILE_SYMBOLS: &str = "abcdefgh";
const FILE_SYMBOLS_REVERSED: &str = "hgfedcba";
const RANK_SYMBOLS: &str = "12345678";
const RANK_SYMBOLS_REVERSED: &str = "87654321";

/// Pixel inset of file labels from the left edge of their cell.
const FILE_LABEL_INSET: i64 = 2;
/// Baseline distance of file labels from the bottom edge of the board.
const FILE_LABEL_BASELINE: i64 = 3;
/// Distance of rank labels from the right edge of the board.
const RANK_LABEL_INSET: i64 = 10;
/// Baseline of rank labels below the top edge of their cell.
const RANK_LABEL_BASELINE: i64 = 12;

/// Error type for [`Renderer::render_png`]
#[derive(Debug)]
pub enum RenderError {
    /// A piece sprite could not be loaded
    Asset(AssetError),
    /// The finished board could not be PNG-encoded
    Encode(image::ImageError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Asset(err) => write!(f, "{err}"),
            RenderError::Encode(err) => write!(f, "Failed to encode board image: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Asset(err) => Some(err),
            RenderError::Encode(err) => Some(err),
        }
    }
}

impl From<AssetError> for RenderError {
    fn from(err: AssetError) -> Self {
        RenderError::Asset(err)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Encode(err)
    }
}

/// Renders one decoded position into board images.
///
/// # Example
/// ```
/// use chess_image::{LastMove, Options, Renderer, Tile};
///
/// let mut renderer =
///     Renderer::from_fen("rnbqkbnr/ppppp2p/5p2/6pQ/3PP3/8/PPP2PPP/RNB1KBNR b KQkq - 1 3")
///         .unwrap();
/// renderer.set_last_move(LastMove::new(Tile::D1, Tile::H5));
/// renderer.set_check_tile(Tile::E8);
/// let image = renderer.render(&Options::default()).unwrap();
/// assert_eq!(image.dimensions(), (512, 512));
/// ```
#[derive(Clone, Debug)]
pub struct Renderer {
    board: Board,
    check_tile: Tile,
    last_move: Option<LastMove>,
}

impl Renderer {
    /// Wrap an already decoded board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Renderer {
            board,
            check_tile: Tile::NONE,
            last_move: None,
        }
    }

    /// Decode the placement field of `fen` and prepare a renderer for it.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let board = Board::try_from_fen(fen)?;
        debug!("renderer ready for {} pieces", board.len());
        Ok(Renderer::new(board))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn check_tile(&self) -> Tile {
        self.check_tile
    }

    #[must_use]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Highlight `tile` as the checked king's square.
    ///
    /// The tile is not range checked; [`Tile::NONE`] disables the highlight.
    pub fn set_check_tile(&mut self, tile: Tile) {
        self.check_tile = tile;
    }

    pub fn clear_check_tile(&mut self) {
        self.check_tile = Tile::NONE;
    }

    pub fn set_last_move(&mut self, last_move: LastMove) {
        self.last_move = Some(last_move);
    }

    pub fn clear_last_move(&mut self) {
        self.last_move = None;
    }

    /// Render the board.
    ///
    /// Fails if any piece sprite cannot be read or decoded; no partial image
    /// is returned.
    pub fn render(&self, options: &Options) -> Result<RgbaImage, AssetError> {
        let options = options.clone().normalized();
        let size = calc_draw_size(&options);
        debug!(
            "rendering {}px board (grid {}, piece {}, offset {}, inverted {})",
            options.board_size, size.grid_size, size.piece_size, size.piece_offset, options.inverted
        );

        let mut canvas = RgbaImage::new(options.board_size, options.board_size);
        self.draw_background(&mut canvas, size);
        self.draw_last_move(&mut canvas, size, options.inverted);
        self.draw_check_tile(&mut canvas, size, options.inverted);
        self.draw_labels(&mut canvas, size, &options);
        self.draw_pieces(&mut canvas, size, &options)?;
        Ok(canvas)
    }

    /// Render the board and encode it as PNG.
    pub fn render_png(&self, options: &Options) -> Result<Vec<u8>, RenderError> {
        let image = self.render(options)?;
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }

    fn draw_background(&self, canvas: &mut RgbaImage, size: DrawSize) {
        let grid = i64::from(size.grid_size);
        for row in 0..8 {
            for col in 0..8 {
                let color = palette::square(row, col);
                canvas::fill_square(
                    canvas,
                    i64::from(row) * grid,
                    i64::from(col) * grid,
                    size.grid_size,
                    color,
                );
            }
        }
        trace!("background drawn");
    }

    fn draw_last_move(&self, canvas: &mut RgbaImage, size: DrawSize, inverted: bool) {
        let Some(last_move) = self.last_move else {
            return;
        };
        // From first, so `to` wins when both name the same tile.
        for tile in [last_move.from, last_move.to] {
            let (x, y) = cell(tile, inverted);
            fill_cell(canvas, size, x, y, palette::highlight(x, y));
        }
        trace!("last move {} -> {} highlighted", last_move.from, last_move.to);
    }

    fn draw_check_tile(&self, canvas: &mut RgbaImage, size: DrawSize, inverted: bool) {
        if self.check_tile.is_none() {
            return;
        }
        let (x, y) = cell(self.check_tile, inverted);
        fill_cell(canvas, size, x, y, palette::CHECK);
        trace!("check tile {} highlighted", self.check_tile);
    }

    fn draw_labels(&self, canvas: &mut RgbaImage, size: DrawSize, options: &Options) {
        let grid = i64::from(size.grid_size);
        let board_size = i64::from(options.board_size);

        let files = if options.inverted {
            FILE_SYMBOLS_REVERSED
        } else {
            FILE_SYMBOLS
        };
        for (i, symbol) in files.chars().enumerate() {
            canvas::draw_char(
                canvas,
                symbol,
                grid * i as i64 + FILE_LABEL_INSET,
                board_size - FILE_LABEL_BASELINE,
                palette::label(i),
            );
        }

        let ranks = if options.inverted {
            RANK_SYMBOLS
        } else {
            RANK_SYMBOLS_REVERSED
        };
        for (i, symbol) in ranks.chars().enumerate() {
            canvas::draw_char(
                canvas,
                symbol,
                board_size - RANK_LABEL_INSET,
                grid * i as i64 + RANK_LABEL_BASELINE,
                palette::label(i),
            );
        }
        trace!("labels drawn");
    }

    fn draw_pieces(
        &self,
        canvas: &mut RgbaImage,
        size: DrawSize,
        options: &Options,
    ) -> Result<(), AssetError> {
        let source = options.asset_source.as_deref();
        let grid = i64::from(size.grid_size);
        for position in &self.board {
            let sprite =
                assets::load_sprite(source, &options.asset_path, position.piece, position.color)?;
            if size.piece_size == 0 {
                continue;
            }
            let scaled = canvas::scale_sprite(&sprite, size.piece_size, options.resampler);
            let (x, y) = cell(position.tile, options.inverted);
            canvas::draw_over(
                canvas,
                &scaled,
                grid * i64::from(x) + size.piece_offset,
                grid * i64::from(y) + size.piece_offset,
            );
        }
        trace!("{} pieces drawn", self.board.len());
        Ok(())
    }
}

/// Cell coordinates `(x, y)` of a tile, mirrored on both axes when inverted.
fn cell(tile: Tile, inverted: bool) -> (i32, i32) {
    if inverted {
        (tile.rank_inverted(), tile.file_inverted())
    } else {
        (tile.rank(), tile.file())
    }
}

fn fill_cell(canvas: &mut RgbaImage, size: DrawSize, x: i32, y: i32, color: image::Rgba<u8>) {
    let grid = i64::from(size.grid_size);
    canvas::fill_square(canvas, i64::from(x) * grid, i64::from(y) * grid, size.grid_size, color);
}

#[cfg(test)]
mod tests {
    use super::super::font;
    use super::*;

    const DEMO_FEN: &str = "rnbqkbnr/ppppp2p/5p2/6pQ/3PP3/8/PPP2PPP/RNB1KBNR b KQkq - 1 3";
    const EMPTY_FEN: &str = "8/8/8/8/8/8/8/8 w - - 0 1";

    /// Color at the top-left pixel of a cell.
    fn cell_color(image: &RgbaImage, grid: u32, x: u32, y: u32) -> image::Rgba<u8> {
        *image.get_pixel(x * grid, y * grid)
    }

    #[test]
    fn test_background_parity() {
        let renderer = Renderer::from_fen(EMPTY_FEN).unwrap();
        let image = renderer.render(&Options::default()).unwrap();
        assert_eq!(cell_color(&image, 64, 0, 0), palette::LIGHT);
        for x in 0..8 {
            for y in 0..8 {
                let expected = if (x + y) % 2 == 0 {
                    palette::LIGHT
                } else {
                    palette::DARK
                };
                assert_eq!(cell_color(&image, 64, x, y), expected);
            }
        }
    }

    #[test]
    fn test_cell_projection() {
        assert_eq!(cell(Tile::A8, false), (0, 0));
        assert_eq!(cell(Tile::H1, false), (7, 7));
        assert_eq!(cell(Tile::E5, false), (4, 3));
        assert_eq!(cell(Tile::A8, true), (7, 7));
        assert_eq!(cell(Tile::E5, true), (3, 4));
    }

    #[test]
    fn test_last_move_highlight_parity() {
        let mut renderer = Renderer::from_fen(EMPTY_FEN).unwrap();
        // d1 is a light square, h4 is a dark one.
        renderer.set_last_move(LastMove::new(Tile::D1, Tile::H4));
        let image = renderer.render(&Options::default()).unwrap();
        assert_eq!(cell_color(&image, 64, 3, 7), palette::HIGHLIGHT_LIGHT);
        assert_eq!(cell_color(&image, 64, 7, 4), palette::HIGHLIGHT_DARK);
    }

    #[test]
    fn test_last_move_to_wins_on_same_tile() {
        let mut renderer = Renderer::from_fen(EMPTY_FEN).unwrap();
        renderer.set_last_move(LastMove::new(Tile::A8, Tile::A8));
        let image = renderer.render(&Options::default()).unwrap();
        assert_eq!(cell_color(&image, 64, 0, 0), palette::HIGHLIGHT_LIGHT);
    }

    #[test]
    fn test_check_tile_overrides_highlight() {
        let mut renderer = Renderer::from_fen(EMPTY_FEN).unwrap();
        renderer.set_last_move(LastMove::new(Tile::E2, Tile::E8));
        renderer.set_check_tile(Tile::E8);
        let image = renderer.render(&Options::default()).unwrap();
        assert_eq!(cell_color(&image, 64, 4, 0), palette::CHECK);
        assert_eq!(cell_color(&image, 64, 4, 6), palette::HIGHLIGHT_LIGHT);
    }

    #[test]
    fn test_clear_highlights() {
        let mut renderer = Renderer::from_fen(EMPTY_FEN).unwrap();
        renderer.set_last_move(LastMove::new(Tile::E2, Tile::E4));
        renderer.set_check_tile(Tile::E8);
        renderer.clear_last_move();
        renderer.clear_check_tile();
        assert_eq!(renderer.last_move(), None);
        assert_eq!(renderer.check_tile(), Tile::NONE);

        let plain = Renderer::from_fen(EMPTY_FEN).unwrap();
        let options = Options::default();
        assert_eq!(renderer.render(&options).unwrap(), plain.render(&options).unwrap());
    }

    #[test]
    fn test_out_of_range_check_tile_does_not_panic() {
        let mut renderer = Renderer::from_fen(EMPTY_FEN).unwrap();
        renderer.set_check_tile(Tile(100));
        renderer.render(&Options::default()).unwrap();
        renderer.set_check_tile(Tile(-7));
        renderer.render(&Options::default().with_inverted(true)).unwrap();
    }

    #[test]
    fn test_labels_drawn_in_bottom_and_right_margin() {
        let renderer = Renderer::from_fen(EMPTY_FEN).unwrap();
        let image = renderer.render(&Options::default()).unwrap();
        // The 'a' label is light ink on the dark bottom-left cell.
        let bottom_left = (0..64)
            .flat_map(|x| (448..512).map(move |y| (x, y)))
            .filter(|&(x, y)| *image.get_pixel(x, y) == palette::LIGHT)
            .count();
        assert!(bottom_left > 0);
    }

    /// True when the `GLYPH_WIDTH x GLYPH_HEIGHT` box at `(x, top)` shows
    /// exactly the lit pixels of `c` in `ink`.
    fn shows_glyph(
        image: &RgbaImage,
        c: char,
        x: u32,
        top: u32,
        ink: image::Rgba<u8>,
    ) -> bool {
        let rows = font::glyph(c).unwrap();
        let lit: Vec<(u32, u32)> = font::lit_pixels(rows).collect();
        (0..font::GLYPH_HEIGHT).all(|row| {
            (0..font::GLYPH_WIDTH).all(|col| {
                let inked = *image.get_pixel(x + col, top + row) == ink;
                inked == lit.contains(&(col, row))
            })
        })
    }

    /// Top-left of the file label box in column `i` and of the rank label
    /// box in row `i` on a 512px board.
    fn label_boxes(i: u32) -> ((u32, u32), (u32, u32)) {
        let ascent = font::GLYPH_ASCENT as u32;
        let file = (
            64 * i + FILE_LABEL_INSET as u32,
            512 - FILE_LABEL_BASELINE as u32 - ascent,
        );
        let rank = (
            512 - RANK_LABEL_INSET as u32,
            64 * i + RANK_LABEL_BASELINE as u32 - ascent,
        );
        (file, rank)
    }

    #[test]
    fn test_label_order_normal() {
        let renderer = Renderer::from_fen(EMPTY_FEN).unwrap();
        let image = renderer.render(&Options::default()).unwrap();
        for (i, (file, rank)) in "abcdefgh".chars().zip("87654321".chars()).enumerate() {
            let ((fx, fy), (rx, ry)) = label_boxes(i as u32);
            let ink = palette::label(i);
            assert!(shows_glyph(&image, file, fx, fy, ink), "file label {i} is not '{file}'");
            assert!(shows_glyph(&image, rank, rx, ry, ink), "rank label {i} is not '{rank}'");
        }
    }

    #[test]
    fn test_label_order_inverted() {
        let renderer = Renderer::from_fen(EMPTY_FEN).unwrap();
        let image = renderer
            .render(&Options::default().with_inverted(true))
            .unwrap();
        for (i, (file, rank)) in "hgfedcba".chars().zip("12345678".chars()).enumerate() {
            let ((fx, fy), (rx, ry)) = label_boxes(i as u32);
            let ink = palette::label(i);
            assert!(shows_glyph(&image, file, fx, fy, ink), "file label {i} is not '{file}'");
            assert!(shows_glyph(&image, rank, rx, ry, ink), "rank label {i} is not '{rank}'");
        }
    }

    #[test]
    fn test_zero_piece_size_still_loads_sprites() {
        let renderer = Renderer::from_fen(DEMO_FEN).unwrap();
        let options = Options::default().with_board_size(8).with_piece_ratio(0.5);
        let image = renderer.render(&options).unwrap();
        assert_eq!(image.dimensions(), (8, 8));
    }

    #[test]
    fn test_render_png_signature() {
        let renderer = Renderer::from_fen(DEMO_FEN).unwrap();
        let png = renderer
            .render_png(&Options::default().with_board_size(128))
            .unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
