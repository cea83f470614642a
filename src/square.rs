use std::fmt;
use std::str::FromStr;

use crate::bitboard::{Bitboard, COLS, ROWS, SQUARE_COUNT};
use crate::direction::Direction;
use crate::error::Error;

/// A board intersection, indexed 0..45 from the bottom-left corner.
///
/// Index arithmetic is row-major: `index = row * 9 + col`, row 0 the
/// bottom rank, col 0 the leftmost file. Names run from "A1" (index 0,
/// bottom left) to "I5" (index 44, top right); files are letters, ranks
/// are digits counted from the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    pub fn from_index(index: usize) -> Result<Square, Error> {
        if index < SQUARE_COUNT {
            Ok(Square(index as u8))
        } else {
            Err(Error::precondition(format!(
                "square index out of range: {}",
                index
            )))
        }
    }

    pub fn from_coords(row: usize, col: usize) -> Result<Square, Error> {
        if row >= ROWS {
            return Err(Error::precondition(format!("row out of range: {}", row)));
        }
        if col >= COLS {
            return Err(Error::precondition(format!("col out of range: {}", col)));
        }
        Ok(Square((row * COLS + col) as u8))
    }

    /// Caller guarantees `index < 45`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!((index as usize) < SQUARE_COUNT);
        Square(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rank, 0 = bottom.
    #[inline]
    pub const fn row(self) -> usize {
        self.0 as usize / COLS
    }

    /// File, 0 = leftmost.
    #[inline]
    pub const fn col(self) -> usize {
        self.0 as usize % COLS
    }

    /// The single-square bitboard for this intersection.
    #[inline]
    pub const fn mask(self) -> Bitboard {
        Bitboard::new(1 << self.0)
    }

    /// The adjacent square one step toward `dir`, or `None` at the edge.
    #[inline]
    pub fn translate(self, dir: Direction) -> Option<Square> {
        let (dr, dc) = dir.delta();
        let row = self.row() as isize + dr as isize;
        let col = self.col() as isize + dc as isize;
        if (0..ROWS as isize).contains(&row) && (0..COLS as isize).contains(&col) {
            Some(Square((row * COLS as isize + col) as u8))
        } else {
            None
        }
    }

    /// Every square in ascending index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT as u8).map(Square)
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Square, Error> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(Error::precondition(format!(
                "square name must be a file letter and a rank digit: {:?}",
                s
            )));
        }
        let col = match bytes[0] {
            b'A'..=b'I' => (bytes[0] - b'A') as usize,
            b'a'..=b'i' => (bytes[0] - b'a') as usize,
            _ => {
                return Err(Error::precondition(format!(
                    "file must be A..I: {:?}",
                    s
                )))
            }
        };
        let row = match bytes[1] {
            b'1'..=b'5' => (bytes[1] - b'1') as usize,
            _ => {
                return Err(Error::precondition(format!(
                    "rank must be 1..5: {:?}",
                    s
                )))
            }
        };
        Ok(Square((row * COLS + col) as u8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col() as u8) as char, self.row() + 1)
    }
}
