use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Shl, Shr};

use crate::square::Square;

/// Board height in ranks.
pub const ROWS: usize = 5;
/// Board width in files.
pub const COLS: usize = 9;
/// Number of playable intersections.
pub const SQUARE_COUNT: usize = ROWS * COLS;

/// A 5×9 board as a 45-bit set, stored in a single u64.
///
/// Bit `i` is square `i`, with `i = row * 9 + col`, row 0 the bottom rank
/// and col 0 the leftmost file. The bottom rank occupies the low nine
/// bits. Bits 45..64 are always zero; every constructor and operator
/// maintains that invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// All bits zero.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Every square occupied.
    pub const ALL: Bitboard = Bitboard((1 << SQUARE_COUNT) - 1);

    /// Construct from raw bits. Bits at index 45 and above are discarded.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits & Self::ALL.0)
    }

    /// The underlying integer, always below `1 << 45`.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Test whether the bit for `sq` is set.
    #[inline]
    pub const fn get(self, sq: Square) -> bool {
        (self.0 >> sq.index()) & 1 != 0
    }

    /// Set the bit for `sq`.
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    /// Clear the bit for `sq`.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.index());
    }

    /// True if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if any bit is set.
    #[inline]
    pub const fn is_nonzero(self) -> bool {
        self.0 != 0
    }

    /// Number of occupied squares.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// The lowest-indexed occupied square, or `None` if empty.
    #[inline]
    pub fn lowest_square(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index_unchecked(self.0.trailing_zeros() as u8))
        }
    }

    /// Iterate over occupied squares in ascending index order.
    #[inline]
    pub fn squares(self) -> Squares {
        Squares { bits: self.0 }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    /// Complement within the 45 board bits.
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0 & Self::ALL.0)
    }
}

impl Shl<usize> for Bitboard {
    type Output = Bitboard;
    /// Shift toward higher indices. Bits pushed past square 44 are lost.
    #[inline]
    fn shl(self, n: usize) -> Bitboard {
        if n >= 64 {
            return Bitboard::EMPTY;
        }
        Bitboard::new(self.0 << n)
    }
}

impl Shr<usize> for Bitboard {
    type Output = Bitboard;
    /// Shift toward lower indices. Bits pushed below square 0 are lost.
    #[inline]
    fn shr(self, n: usize) -> Bitboard {
        if n >= 64 {
            return Bitboard::EMPTY;
        }
        Bitboard(self.0 >> n)
    }
}

impl PartialEq<u64> for Bitboard {
    #[inline]
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Bitboard> for u64 {
    #[inline]
    fn eq(&self, other: &Bitboard) -> bool {
        *self == other.0
    }
}

impl fmt::Display for Bitboard {
    /// One 0/1 row per rank, top rank first, files left to right.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                write!(f, "{}", (self.0 >> (row * COLS + col)) & 1)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over occupied squares in a `Bitboard`.
pub struct Squares {
    bits: u64,
}

impl Iterator for Squares {
    type Item = Square;
    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as u8;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some(Square::from_index_unchecked(index))
    }
}
