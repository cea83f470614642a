use std::fmt;

use crate::bitboard::{COLS, ROWS};
use crate::error::Error;

/// A 5×9 occupancy grid in display orientation: row 0 is the top rank and
/// each row reads left to right.
///
/// This is the presentation-side twin of [`Bitboard`](crate::bitboard::Bitboard):
/// the same 45 cells, but in the order a board diagram is read. Note the
/// row order is the reverse of [`Square`](crate::square::Square) rank
/// numbering; the conversions in [`crate::encode`] are the only place the
/// two orders meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[bool; COLS]; ROWS],
}

impl Grid {
    /// All cells empty.
    pub const fn empty() -> Grid {
        Grid {
            cells: [[false; COLS]; ROWS],
        }
    }

    /// Validate and ingest rows of 0/1 cells, top row first.
    ///
    /// Anything other than exactly 5 rows of 9 cells drawn from {0, 1}
    /// is rejected.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Grid, Error> {
        if rows.len() != ROWS {
            return Err(Error::invalid_shape(format!(
                "expected {} rows, got {}",
                ROWS,
                rows.len()
            )));
        }
        let mut cells = [[false; COLS]; ROWS];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != COLS {
                return Err(Error::invalid_shape(format!(
                    "row {}: expected {} cells, got {}",
                    r,
                    COLS,
                    row.len()
                )));
            }
            for (c, &cell) in row.iter().enumerate() {
                cells[r][c] = match cell {
                    0 => false,
                    1 => true,
                    other => {
                        return Err(Error::invalid_shape(format!(
                            "cell ({}, {}): expected 0 or 1, got {}",
                            r, c, other
                        )))
                    }
                };
            }
        }
        Ok(Grid { cells })
    }

    #[inline]
    pub(crate) const fn from_cells(cells: [[bool; COLS]; ROWS]) -> Grid {
        Grid { cells }
    }

    /// Cell at `grid_row` (0 = top rank) and `col` (0 = file A).
    #[inline]
    pub fn cell(&self, grid_row: usize, col: usize) -> bool {
        debug_assert!(grid_row < ROWS && col < COLS);
        self.cells[grid_row][col]
    }

    /// Rows of 0/1 cells, top row first. Inverse of [`Grid::from_rows`].
    pub fn to_rows(&self) -> [[u8; COLS]; ROWS] {
        let mut rows = [[0u8; COLS]; ROWS];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                rows[r][c] = cell as u8;
            }
        }
        rows
    }

    /// Number of occupied cells.
    pub fn count(&self) -> u32 {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell)
            .count() as u32
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
