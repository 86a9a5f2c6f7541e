//! Tile (board square) types and the algebraic-name lookup table.
//!
//! A [`Tile`] is a single index in `0..64`, laid out row-major from the top
//! edge of the board: `a8 = 0`, `h8 = 7`, `a7 = 8`, ..., `h1 = 63`.
//!
//! The two projections are named after the drawing axes they feed:
//! [`Tile::rank`] is the column (`index % 8`, the x axis) and [`Tile::file`]
//! is the row (`index / 8`, the y axis). Every piece of placement and
//! highlight math in the renderer relies on this pairing.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::TileError;

/// Algebraic names indexed by tile value.
#[rustfmt::skip]
const TILE_NAMES: [&str; 64] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

static TILE_MAP: Lazy<HashMap<&'static str, Tile>> = Lazy::new(|| {
    TILE_NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| (*name, Tile(idx as i8)))
        .collect()
});

/// A square on the board, or the [`Tile::NONE`] sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile(pub i8);

impl Tile {
    /// Sentinel meaning "no tile"; disables the check highlight.
    pub const NONE: Tile = Tile(-1);

    pub const A8: Tile = Tile(0);
    pub const B8: Tile = Tile(1);
    pub const C8: Tile = Tile(2);
    pub const D8: Tile = Tile(3);
    pub const E8: Tile = Tile(4);
    pub const F8: Tile = Tile(5);
    pub const G8: Tile = Tile(6);
    pub const H8: Tile = Tile(7);
    pub const A7: Tile = Tile(8);
    pub const B7: Tile = Tile(9);
    pub const C7: Tile = Tile(10);
    pub const D7: Tile = Tile(11);
    pub const E7: Tile = Tile(12);
    pub const F7: Tile = Tile(13);
    pub const G7: Tile = Tile(14);
    pub const H7: Tile = Tile(15);
    pub const A6: Tile = Tile(16);
    pub const B6: Tile = Tile(17);
    pub const C6: Tile = Tile(18);
    pub const D6: Tile = Tile(19);
    pub const E6: Tile = Tile(20);
    pub const F6: Tile = Tile(21);
    pub const G6: Tile = Tile(22);
    pub const H6: Tile = Tile(23);
    pub const A5: Tile = Tile(24);
    pub const B5: Tile = Tile(25);
    pub const C5: Tile = Tile(26);
    pub const D5: Tile = Tile(27);
    pub const E5: Tile = Tile(28);
    pub const F5: Tile = Tile(29);
    pub const G5: Tile = Tile(30);
    pub const H5: Tile = Tile(31);
    pub const A4: Tile = Tile(32);
    pub const B4: Tile = Tile(33);
    pub const C4: Tile = Tile(34);
    pub const D4: Tile = Tile(35);
    pub const E4: Tile = Tile(36);
    pub const F4: Tile = Tile(37);
    pub const G4: Tile = Tile(38);
    pub const H4: Tile = Tile(39);
    pub const A3: Tile = Tile(40);
    pub const B3: Tile = Tile(41);
    pub const C3: Tile = Tile(42);
    pub const D3: Tile = Tile(43);
    pub const E3: Tile = Tile(44);
    pub const F3: Tile = Tile(45);
    pub const G3: Tile = Tile(46);
    pub const H3: Tile = Tile(47);
    pub const A2: Tile = Tile(48);
    pub const B2: Tile = Tile(49);
    pub const C2: Tile = Tile(50);
    pub const D2: Tile = Tile(51);
    pub const E2: Tile = Tile(52);
    pub const F2: Tile = Tile(53);
    pub const G2: Tile = Tile(54);
    pub const H2: Tile = Tile(55);
    pub const A1: Tile = Tile(56);
    pub const B1: Tile = Tile(57);
    pub const C1: Tile = Tile(58);
    pub const D1: Tile = Tile(59);
    pub const E1: Tile = Tile(60);
    pub const F1: Tile = Tile(61);
    pub const G1: Tile = Tile(62);
    pub const H1: Tile = Tile(63);

    /// Column projection (`index % 8`), the x axis of the drawing.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> i32 {
        self.0 as i32 % 8
    }

    /// Row projection (`index / 8`), the y axis of the drawing.
    #[inline]
    #[must_use]
    pub const fn file(self) -> i32 {
        self.0 as i32 / 8
    }

    #[inline]
    #[must_use]
    pub const fn rank_inverted(self) -> i32 {
        7 - self.rank()
    }

    #[inline]
    #[must_use]
    pub const fn file_inverted(self) -> i32 {
        7 - self.file()
    }

    /// Inverse of [`Tile::rank`] / [`Tile::file`]. No range checking.
    #[inline]
    #[must_use]
    pub const fn from_rank_file(rank: i32, file: i32) -> Self {
        Tile((file * 8 + rank) as i8)
    }

    /// Look up a tile by its algebraic name (e.g. `"e5"`).
    ///
    /// The lookup is case-sensitive and expects exactly two characters.
    pub fn from_algebraic(name: &str) -> Result<Self, TileError> {
        TILE_MAP
            .get(name)
            .copied()
            .ok_or_else(|| TileError::NotFound {
                notation: name.to_string(),
            })
    }

    /// Algebraic name of this tile, or `None` for the sentinel and any
    /// out-of-range value.
    #[must_use]
    pub fn algebraic(self) -> Option<&'static str> {
        usize::try_from(self.0)
            .ok()
            .and_then(|idx| TILE_NAMES.get(idx).copied())
    }

    /// Index of this tile, or `None` for the sentinel and any out-of-range value.
    #[inline]
    #[must_use]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok().filter(|&idx| idx < 64)
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == Tile::NONE.0
    }

    /// Iterate all 64 tiles in index order.
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..64).map(Tile)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::NONE
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.algebraic() {
            Some(name) => f.write_str(name),
            None => write!(f, "-"),
        }
    }
}

impl FromStr for Tile {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tile::from_algebraic(s)
    }
}
