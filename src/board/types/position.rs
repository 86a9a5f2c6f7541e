//! Occupied-square entries, the decoded board, and the last-move pair.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Tile};

/// A piece standing on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub tile: Tile,
    pub piece: Piece,
    pub color: Color,
}

impl Position {
    #[must_use]
    pub const fn new(tile: Tile, piece: Piece, color: Color) -> Self {
        Position { tile, piece, color }
    }

    /// FEN letter for this piece (uppercase for White)
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> char {
        self.piece.to_fen_char(self.color)
    }
}

/// Two tiles marking the most recent move. Purely presentational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LastMove {
    pub from: Tile,
    pub to: Tile,
}

impl LastMove {
    #[must_use]
    pub const fn new(from: Tile, to: Tile) -> Self {
        LastMove { from, to }
    }
}

/// Occupied squares in FEN scan order (top row first, left to right).
///
/// No duplicate-tile or piece-count checks are made; the sequence is exactly
/// what the placement field described.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    positions: Vec<Position>,
}

impl Board {
    #[must_use]
    pub fn empty() -> Self {
        Board::default()
    }

    #[must_use]
    pub fn from_positions(positions: Vec<Position>) -> Self {
        Board { positions }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }

    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// The last entry decoded for `tile`, if any.
    #[must_use]
    pub fn piece_at(&self, tile: Tile) -> Option<(Color, Piece)> {
        self.positions
            .iter()
            .rev()
            .find(|p| p.tile == tile)
            .map(|p| (p.color, p.piece))
    }

    pub(crate) fn push(&mut self, position: Position) {
        self.positions.push(position);
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}
