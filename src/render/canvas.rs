//! Drawing primitives over an RGBA canvas.
//!
//! All primitives clip against the canvas bounds, so off-board coordinates
//! (from unvalidated tiles) draw nothing instead of panicking.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use super::font;

/// Fill a `size x size` square with `color`, replacing whatever was there.
pub fn fill_square(canvas: &mut RgbaImage, x: i64, y: i64, size: u32, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    let x0 = x.clamp(0, i64::from(width));
    let y0 = y.clamp(0, i64::from(height));
    let x1 = (x + i64::from(size)).clamp(0, i64::from(width));
    let y1 = (y + i64::from(size)).clamp(0, i64::from(height));
    for py in y0..y1 {
        for px in x0..x1 {
            canvas.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Draw one label character with its baseline at `baseline`.
///
/// Characters outside the label font are skipped.
pub fn draw_char(canvas: &mut RgbaImage, c: char, x: i64, baseline: i64, color: Rgba<u8>) {
    let Some(rows) = font::glyph(c) else {
        return;
    };
    let (width, height) = canvas.dimensions();
    let top = baseline - font::GLYPH_ASCENT;
    for (col, row) in font::lit_pixels(rows) {
        let px = x + i64::from(col);
        let py = top + i64::from(row);
        if (0..i64::from(width)).contains(&px) && (0..i64::from(height)).contains(&py) {
            canvas.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Scale `sprite` to `size x size` with `filter`.
#[must_use]
pub fn scale_sprite(sprite: &RgbaImage, size: u32, filter: FilterType) -> RgbaImage {
    imageops::resize(sprite, size, size, filter)
}

/// Alpha-composite `sprite` over the canvas with its top-left at `(x, y)`.
pub fn draw_over(canvas: &mut RgbaImage, sprite: &RgbaImage, x: i64, y: i64) {
    imageops::overlay(canvas, sprite, x, y);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn test_fill_square_bounds() {
        let mut canvas = RgbaImage::new(8, 8);
        fill_square(&mut canvas, 2, 3, 2, RED);
        assert_eq!(*canvas.get_pixel(2, 3), RED);
        assert_eq!(*canvas.get_pixel(3, 4), RED);
        assert_eq!(*canvas.get_pixel(4, 4), CLEAR);
        assert_eq!(*canvas.get_pixel(2, 5), CLEAR);
        assert_eq!(*canvas.get_pixel(1, 3), CLEAR);
    }

    #[test]
    fn test_fill_square_clips() {
        let mut canvas = RgbaImage::new(4, 4);
        fill_square(&mut canvas, -2, -2, 3, RED);
        assert_eq!(*canvas.get_pixel(0, 0), RED);
        assert_eq!(*canvas.get_pixel(1, 0), CLEAR);
        fill_square(&mut canvas, 3, 3, 10, RED);
        assert_eq!(*canvas.get_pixel(3, 3), RED);
        fill_square(&mut canvas, 100, -100, 10, RED);
    }

    #[test]
    fn test_draw_char_places_glyph_above_baseline() {
        let mut canvas = RgbaImage::new(16, 16);
        draw_char(&mut canvas, '1', 0, 11, RED);
        // Foot of the '1' sits on the row just above the baseline.
        assert_eq!(*canvas.get_pixel(1, 10), RED);
        assert_eq!(*canvas.get_pixel(3, 2), RED);
        assert_eq!(*canvas.get_pixel(0, 11), CLEAR);
    }

    #[test]
    fn test_draw_char_clips_and_skips_unknown() {
        let mut canvas = RgbaImage::new(4, 4);
        draw_char(&mut canvas, '8', -3, 2, RED);
        draw_char(&mut canvas, '?', 0, 11, RED);
        assert!(canvas.pixels().all(|p| *p == CLEAR || *p == RED));
    }

    #[test]
    fn test_draw_over_blends_transparent_pixels() {
        let mut canvas = RgbaImage::from_pixel(4, 4, RED);
        let mut sprite = RgbaImage::new(2, 2);
        sprite.put_pixel(0, 0, Rgba([0, 0, 255, 255]));
        draw_over(&mut canvas, &sprite, 1, 1);
        assert_eq!(*canvas.get_pixel(1, 1), Rgba([0, 0, 255, 255]));
        assert_eq!(*canvas.get_pixel(2, 2), RED);
    }

    #[test]
    fn test_scale_sprite_size() {
        let sprite = RgbaImage::from_pixel(64, 64, RED);
        let scaled = scale_sprite(&sprite, 57, FilterType::CatmullRom);
        assert_eq!(scaled.dimensions(), (57, 57));
    }
}
