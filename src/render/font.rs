//! Fixed 7x13 bitmap glyphs for the board coordinate labels.
//!
//! Each glyph is 13 rows, top to bottom; bit 6 of a row is the leftmost of
//! its 7 columns. The baseline sits below row 10, leaving two descender rows.

pub const GLYPH_WIDTH: u32 = 7;
pub const GLYPH_HEIGHT: u32 = 13;
/// Rows above the baseline.
pub const GLYPH_ASCENT: i64 = 11;

static GLYPHS: [(u8, [u8; GLYPH_HEIGHT as usize]); 16] = [
    (b'a', [0x00, 0x00, 0x00, 0x00, 0x00, 0x3c, 0x02, 0x3e, 0x42, 0x46, 0x3a, 0x00, 0x00]),
    (b'b', [0x00, 0x00, 0x40, 0x40, 0x40, 0x5c, 0x62, 0x42, 0x42, 0x62, 0x5c, 0x00, 0x00]),
    (b'c', [0x00, 0x00, 0x00, 0x00, 0x00, 0x3c, 0x42, 0x40, 0x40, 0x42, 0x3c, 0x00, 0x00]),
    (b'd', [0x00, 0x00, 0x02, 0x02, 0x02, 0x3a, 0x46, 0x42, 0x42, 0x46, 0x3a, 0x00, 0x00]),
    (b'e', [0x00, 0x00, 0x00, 0x00, 0x00, 0x3c, 0x42, 0x7e, 0x40, 0x42, 0x3c, 0x00, 0x00]),
    (b'f', [0x00, 0x00, 0x1c, 0x22, 0x20, 0x20, 0x78, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00]),
    (b'g', [0x00, 0x00, 0x00, 0x00, 0x00, 0x3a, 0x44, 0x44, 0x38, 0x40, 0x3c, 0x42, 0x3c]),
    (b'h', [0x00, 0x00, 0x40, 0x40, 0x40, 0x5c, 0x62, 0x42, 0x42, 0x42, 0x42, 0x00, 0x00]),
    (b'1', [0x00, 0x00, 0x08, 0x18, 0x28, 0x08, 0x08, 0x08, 0x08, 0x08, 0x3e, 0x00, 0x00]),
    (b'2', [0x00, 0x00, 0x3c, 0x42, 0x02, 0x02, 0x04, 0x18, 0x20, 0x40, 0x7e, 0x00, 0x00]),
    (b'3', [0x00, 0x00, 0x7e, 0x02, 0x04, 0x08, 0x1c, 0x02, 0x02, 0x42, 0x3c, 0x00, 0x00]),
    (b'4', [0x00, 0x00, 0x04, 0x0c, 0x14, 0x24, 0x44, 0x44, 0x7e, 0x04, 0x04, 0x00, 0x00]),
    (b'5', [0x00, 0x00, 0x7e, 0x40, 0x40, 0x5c, 0x62, 0x02, 0x02, 0x42, 0x3c, 0x00, 0x00]),
    (b'6', [0x00, 0x00, 0x1c, 0x20, 0x40, 0x40, 0x5c, 0x62, 0x42, 0x42, 0x3c, 0x00, 0x00]),
    (b'7', [0x00, 0x00, 0x7e, 0x02, 0x04, 0x04, 0x08, 0x08, 0x10, 0x10, 0x10, 0x00, 0x00]),
    (b'8', [0x00, 0x00, 0x3c, 0x42, 0x42, 0x42, 0x3c, 0x42, 0x42, 0x42, 0x3c, 0x00, 0x00]),
];

/// Bitmap for a label character, if the font covers it.
#[must_use]
pub fn glyph(c: char) -> Option<&'static [u8; GLYPH_HEIGHT as usize]> {
    GLYPHS
        .iter()
        .find(|(ch, _)| char::from(*ch) == c)
        .map(|(_, rows)| rows)
}

/// Iterate the lit pixels of a glyph as `(column, row)` offsets.
pub fn lit_pixels(rows: &[u8; GLYPH_HEIGHT as usize]) -> impl Iterator<Item = (u32, u32)> + '_ {
    rows.iter().zip(0u32..).flat_map(|(bits, row)| {
        (0..GLYPH_WIDTH)
            .filter(move |col| bits & (0x40 >> col) != 0)
            .map(move |col| (col, row))
    })
}
