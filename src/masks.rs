//! Named bitboard constants: per-square masks, rank and file masks, the
//! per-square move destination masks, and the two opening positions.

use paste::paste;

use crate::bitboard::{Bitboard, COLS, ROWS, SQUARE_COUNT};

macro_rules! square_masks {
    ($($name:ident = $index:expr),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("Single-square mask for ", stringify!($name), ".")]
                pub const [<BB_ $name>]: Bitboard = Bitboard::new(1u64 << $index);
            )*

            /// Single-square masks in square index order.
            pub const BB_SQUARES: [Bitboard; SQUARE_COUNT] = [
                $([<BB_ $name>]),*
            ];
        }
    };
}

square_masks!(
    A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7, I1 = 8,
    A2 = 9, B2 = 10, C2 = 11, D2 = 12, E2 = 13, F2 = 14, G2 = 15, H2 = 16, I2 = 17,
    A3 = 18, B3 = 19, C3 = 20, D3 = 21, E3 = 22, F3 = 23, G3 = 24, H3 = 25, I3 = 26,
    A4 = 27, B4 = 28, C4 = 29, D4 = 30, E4 = 31, F4 = 32, G4 = 33, H4 = 34, I4 = 35,
    A5 = 36, B5 = 37, C5 = 38, D5 = 39, E5 = 40, F5 = 41, G5 = 42, H5 = 43, I5 = 44,
);

const fn row_mask(row: usize) -> Bitboard {
    Bitboard::new(((1u64 << COLS) - 1) << (row * COLS))
}

const fn col_mask(col: usize) -> Bitboard {
    let mut bits = 0u64;
    let mut row = 0;
    while row < ROWS {
        bits |= 1u64 << (row * COLS + col);
        row += 1;
    }
    Bitboard::new(bits)
}

/// Full-rank masks, index 0 = bottom rank.
pub const BB_ROWS: [Bitboard; ROWS] = [
    row_mask(0),
    row_mask(1),
    row_mask(2),
    row_mask(3),
    row_mask(4),
];

/// Full-file masks, index 0 = file A.
pub const BB_COLS: [Bitboard; COLS] = [
    col_mask(0),
    col_mask(1),
    col_mask(2),
    col_mask(3),
    col_mask(4),
    col_mask(5),
    col_mask(6),
    col_mask(7),
    col_mask(8),
];

/// Per-square destination masks for a single sliding step.
///
/// Hand-enumerated game-rule data: the ray builder in [`crate::rays`]
/// treats these values as opaque input and makes no assumption about how
/// they were derived.
pub const BB_MOVES: [Bitboard; SQUARE_COUNT] = [
    Bitboard::new(0x602),
    Bitboard::new(0x405),
    Bitboard::new(0x1c0a),
    Bitboard::new(0x1014),
    Bitboard::new(0x7028),
    Bitboard::new(0x4050),
    Bitboard::new(0x1c0a0),
    Bitboard::new(0x10140),
    Bitboard::new(0x30080),
    Bitboard::new(0x40401),
    Bitboard::new(0x1c0a07),
    Bitboard::new(0x101404),
    Bitboard::new(0x70281c),
    Bitboard::new(0x405010),
    Bitboard::new(0x1c0a070),
    Bitboard::new(0x1014040),
    Bitboard::new(0x70281c0),
    Bitboard::new(0x4010100),
    Bitboard::new(0x18080600),
    Bitboard::new(0x10140400),
    Bitboard::new(0x70281c00),
    Bitboard::new(0x40501000),
    Bitboard::new(0x1c0a07000),
    Bitboard::new(0x101404000),
    Bitboard::new(0x70281c000),
    Bitboard::new(0x405010000),
    Bitboard::new(0xc02030000),
    Bitboard::new(0x1010040000),
    Bitboard::new(0x70281c0000),
    Bitboard::new(0x4050100000),
    Bitboard::new(0x1c0a0700000),
    Bitboard::new(0x10140400000),
    Bitboard::new(0x70281c00000),
    Bitboard::new(0x40501000000),
    Bitboard::new(0x1c0a07000000),
    Bitboard::new(0x100404000000),
    Bitboard::new(0x2018000000),
    Bitboard::new(0x5010000000),
    Bitboard::new(0xe050000000),
    Bitboard::new(0x14040000000),
    Bitboard::new(0x281c0000000),
    Bitboard::new(0x50100000000),
    Bitboard::new(0xa0700000000),
    Bitboard::new(0x140400000000),
    Bitboard::new(0x80c00000000),
];

/// Opening position for the dark side: ranks 4 and 5 plus alternating
/// squares of rank 3.
pub const BB_BLACK_START: Bitboard = Bitboard::new(0x1ffffa940000);

/// Opening position for the light side, the dark side's mirror image
/// through the center square.
pub const BB_WHITE_START: Bitboard = Bitboard::new(0x52bffff);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn test_square_masks() {
        for (i, bb) in BB_SQUARES.iter().enumerate() {
            assert_eq!(bb.bits(), 1u64 << i);
        }
        assert_eq!(BB_A1, 1u64);
        assert_eq!(BB_I1, 1u64 << 8);
        assert_eq!(BB_E3, 1u64 << 22);
        assert_eq!(BB_I5, 1u64 << 44);
    }

    #[test]
    fn test_row_masks() {
        for (r, bb) in BB_ROWS.iter().enumerate() {
            assert_eq!(*bb, 0x1ffu64 << (9 * r));
            assert_eq!(bb.count(), COLS as u32);
        }
        let union = BB_ROWS.iter().fold(Bitboard::EMPTY, |acc, bb| acc | *bb);
        assert_eq!(union, Bitboard::ALL);
    }

    #[test]
    fn test_col_masks() {
        assert_eq!(BB_COLS[0], 0x1008040201u64);
        for (c, bb) in BB_COLS.iter().enumerate() {
            assert_eq!(*bb, BB_COLS[0] << c);
            assert_eq!(bb.count(), ROWS as u32);
        }
        // Shifting a file right must not carry into the next rank.
        assert!(!BB_COLS[8].get(Square::from_index(9).unwrap()));
        let union = BB_COLS.iter().fold(Bitboard::EMPTY, |acc, bb| acc | *bb);
        assert_eq!(union, Bitboard::ALL);
    }

    #[test]
    fn test_rows_cols_disjoint() {
        for (a, ra) in BB_ROWS.iter().enumerate() {
            for rb in BB_ROWS.iter().skip(a + 1) {
                assert!((*ra & *rb).is_empty());
            }
        }
        for (a, ca) in BB_COLS.iter().enumerate() {
            for cb in BB_COLS.iter().skip(a + 1) {
                assert!((*ca & *cb).is_empty());
            }
        }
    }

    #[test]
    fn test_move_masks_fit_board() {
        for bb in BB_MOVES.iter() {
            assert!(bb.is_nonzero());
            assert_eq!(*bb & Bitboard::ALL, *bb);
        }
    }

    #[test]
    fn test_move_masks_transcription() {
        // Checksums over the hand-enumerated table guard against edits.
        let xor = BB_MOVES
            .iter()
            .fold(0u64, |acc, bb| acc ^ bb.bits());
        assert_eq!(xor, 0x1fb82c0603ff);

        let ones: u32 = BB_MOVES.iter().map(|bb| bb.count()).sum();
        assert_eq!(ones, 216);

        assert_eq!(BB_MOVES[0], 0x602u64);
        assert_eq!(BB_MOVES[22], 0x1c0a07000u64);
        assert_eq!(BB_MOVES[44], 0x80c00000000u64);
    }

    #[test]
    fn test_start_positions() {
        assert_eq!(BB_BLACK_START.count(), 22);
        assert_eq!(BB_WHITE_START.count(), 22);
        assert!((BB_BLACK_START & BB_WHITE_START).is_empty());

        // Every square is occupied at the start except the center.
        assert_eq!(BB_BLACK_START | BB_WHITE_START | BB_E3, Bitboard::ALL);

        // The two sides mirror each other through the center square.
        for sq in Square::all() {
            let mirrored = Square::from_index(44 - sq.index()).unwrap();
            assert_eq!(BB_BLACK_START.get(sq), BB_WHITE_START.get(mirrored));
        }
    }
}
