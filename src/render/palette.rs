//! Board colors.

use image::Rgba;

pub const LIGHT: Rgba<u8> = Rgba([240, 217, 181, 255]);
pub const DARK: Rgba<u8> = Rgba([181, 136, 99, 255]);
pub const HIGHLIGHT_LIGHT: Rgba<u8> = Rgba([247, 193, 99, 255]);
pub const HIGHLIGHT_DARK: Rgba<u8> = Rgba([215, 149, 54, 255]);
pub const CHECK: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Light or dark square color by cell parity; `(0, 0)` is light.
#[inline]
#[must_use]
pub const fn square(x: i32, y: i32) -> Rgba<u8> {
    if (x + y).rem_euclid(2) == 0 {
        LIGHT
    } else {
        DARK
    }
}

/// Highlight color matching the parity of the square it covers.
#[inline]
#[must_use]
pub const fn highlight(x: i32, y: i32) -> Rgba<u8> {
    if x.rem_euclid(2) == y.rem_euclid(2) {
        HIGHLIGHT_LIGHT
    } else {
        HIGHLIGHT_DARK
    }
}

/// Label color alternating with the label's index; index 0 is light.
#[inline]
#[must_use]
pub const fn label(index: usize) -> Rgba<u8> {
    if index % 2 == 0 {
        LIGHT
    } else {
        DARK
    }
}
