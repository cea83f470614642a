//! Conversions between [`Grid`] display form and [`Bitboard`] packed form.
//!
//! The canonical packing puts the bottom rank in the low nine bits: bit
//! `i` is grid cell `(4 - i / 9, i % 9)`. A second packing exists for
//! humans, [`reading_order_bits`], which fills from the highest bit in the
//! order a diagram is read. The two disagree on row order, so the reading
//! order variant returns a bare integer rather than a [`Bitboard`] and
//! must never feed the ray tables.

use crate::bitboard::{Bitboard, COLS, ROWS};
use crate::error::Error;
use crate::grid::Grid;
use crate::square::Square;

/// Pack an occupancy grid into its canonical 45-bit form.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn encode(grid: &Grid) -> Bitboard {
    let mut bits = 0u64;
    for sq in Square::all() {
        if grid.cell(ROWS - 1 - sq.row(), sq.col()) {
            bits |= 1u64 << sq.index();
        }
    }
    Bitboard::new(bits)
}

/// Validate raw rows (top row first) and pack them in one step.
pub fn encode_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Bitboard, Error> {
    Ok(encode(&Grid::from_rows(rows)?))
}

/// Unpack a bitboard into its display-oriented grid. Inverse of [`encode`].
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn decode(bb: Bitboard) -> Grid {
    let mut cells = [[false; COLS]; ROWS];
    for sq in bb.squares() {
        cells[ROWS - 1 - sq.row()][sq.col()] = true;
    }
    Grid::from_cells(cells)
}

/// Pack a grid in reading order: the first cell read lands in the highest
/// bit.
///
/// Presentation only. The result's bit positions do not line up with
/// [`Square`] indexing, which is why this returns a plain integer.
pub fn reading_order_bits(grid: &Grid) -> u64 {
    let mut bits = 0u64;
    for row in 0..ROWS {
        for col in 0..COLS {
            bits <<= 1;
            if grid.cell(row, col) {
                bits |= 1;
            }
        }
    }
    bits
}

/// Render the bit positions and bit values of `bits`, rank by rank.
///
/// Accepts any integer; bits at index 45 and above have no cell on the
/// board and are not shown.
pub fn visualize(bits: u64) -> String {
    let bb = Bitboard::new(bits);
    let mut out = String::new();

    out.push_str("bit positions:\n");
    for row in (0..ROWS).rev() {
        out.push_str(&format!("row {}  [", row));
        for col in 0..COLS {
            out.push_str(&format!(" {:2}", row * COLS + col));
        }
        out.push_str(" ]\n");
    }

    out.push_str("\nbit values:\n");
    for row in (0..ROWS).rev() {
        out.push_str(&format!("row {}  [", row));
        for col in 0..COLS {
            out.push_str(&format!("  {}", (bb.bits() >> (row * COLS + col)) & 1));
        }
        out.push_str(" ]\n");
    }

    out
}
