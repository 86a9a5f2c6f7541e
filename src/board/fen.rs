use std::fmt;
use std::str::FromStr;

use log::trace;

use super::error::FenError;
use super::{Board, Color, Piece, Position, Tile};

impl Board {
    /// Decode the piece-placement field of a FEN string.
    ///
    /// Only the text before the first space is read; side to move,
    /// castling, en passant and the clocks are ignored. Rows with more than
    /// eight squares and boards without kings are accepted as written.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split(' ').next().unwrap_or_default();
        if placement.is_empty() {
            return Err(FenError::Empty);
        }

        let mut board = Board::empty();
        let mut row = 0;
        let mut column = 0;
        for (index, c) in placement.chars().enumerate() {
            match c {
                '1'..='8' => column += c as i32 - '0' as i32,
                '/' => {
                    column = 0;
                    row += 1;
                }
                _ => {
                    let piece =
                        Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c, index })?;
                    let tile = Tile::from_rank_file(column, row);
                    board.push(Position::new(tile, piece, Color::from_fen_case(c)));
                    column += 1;
                }
            }
        }

        trace!("decoded {} pieces from '{placement}'", board.len());
        Ok(board)
    }

    /// Encode the board back into a FEN placement field.
    ///
    /// Entries outside the 64 tiles are skipped; when two entries share a
    /// tile the later one wins.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut grid: [Option<char>; 64] = [None; 64];
        for position in self {
            if let Some(idx) = position.tile.index() {
                grid[idx] = Some(position.symbol());
            }
        }

        let mut rows: Vec<String> = Vec::with_capacity(8);
        for squares in grid.chunks(8) {
            let mut row = String::new();
            let mut empty = 0;
            for square in squares {
                if let Some(symbol) = square {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(*symbol);
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_placement())
    }
}
