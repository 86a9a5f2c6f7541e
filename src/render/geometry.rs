//! Pixel geometry derived from the render options.

use super::Options;

/// Cell, sprite and centering sizes for one render call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawSize {
    /// Side of one board cell; `board_size / 8`, truncated.
    pub grid_size: u32,
    /// Side of a scaled piece sprite; `grid_size * piece_ratio`, truncated.
    pub piece_size: u32,
    /// Offset centering the sprite inside its cell. Negative when the
    /// sprite is larger than the cell.
    pub piece_offset: i64,
}

/// Compute the draw geometry for already-normalized options.
#[must_use]
pub fn calc_draw_size(options: &Options) -> DrawSize {
    let grid_size = options.board_size / 8;
    let piece_size = (f64::from(grid_size) * options.piece_ratio) as u32;
    DrawSize {
        grid_size,
        piece_size,
        piece_offset: (i64::from(grid_size) - i64::from(piece_size)) / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let size = calc_draw_size(&Options::default());
        assert_eq!(
            size,
            DrawSize {
                grid_size: 64,
                piece_size: 57,
                piece_offset: 3,
            }
        );
    }

    #[test]
    fn test_board_size_not_multiple_of_eight() {
        let size = calc_draw_size(&Options::new().with_board_size(500));
        assert_eq!(size.grid_size, 62);
        assert_eq!(size.piece_size, 55);
        assert_eq!(size.piece_offset, 3);
    }

    #[test]
    fn test_full_cell_ratio() {
        let size = calc_draw_size(&Options::new().with_piece_ratio(1.0));
        assert_eq!(size.piece_size, size.grid_size);
        assert_eq!(size.piece_offset, 0);
    }

    #[test]
    fn test_oversized_pieces() {
        let size = calc_draw_size(&Options::new().with_board_size(80).with_piece_ratio(1.5));
        assert_eq!(size.grid_size, 10);
        assert_eq!(size.piece_size, 15);
        assert_eq!(size.piece_offset, -2);
    }

    #[test]
    fn test_deterministic() {
        let options = Options::new().with_board_size(777).with_piece_ratio(0.77);
        assert_eq!(calc_draw_size(&options), calc_draw_size(&options));
    }
}
