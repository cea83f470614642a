//! Rebuilds the ray table and round-trips boards in a tight loop so the
//! hot paths show up when built with `--features hotpath`.

use std::hint::black_box;
use std::time::Instant;

use fanorona::bitboard::Bitboard;
use fanorona::encode::{decode, encode};
use fanorona::masks::BB_MOVES;
use fanorona::rays::RayTable;

const BUILD_ITERATIONS: usize = 100_000;
const CODEC_ITERATIONS: u64 = 1_000_000;

#[cfg_attr(feature = "hotpath", hotpath::main)]
fn main() {
    let start = Instant::now();
    for _ in 0..BUILD_ITERATIONS {
        black_box(RayTable::build(black_box(&BB_MOVES)));
    }
    println!(
        "{} ray table builds in {:?}",
        BUILD_ITERATIONS,
        start.elapsed()
    );

    let start = Instant::now();
    let mut checksum = 0u64;
    for i in 0..CODEC_ITERATIONS {
        // Multiplicative hash scatters the loop counter across the board.
        let bb = Bitboard::new(i.wrapping_mul(0x9e3779b97f4a7c15));
        let grid = decode(black_box(bb));
        checksum ^= encode(black_box(&grid)).bits();
    }
    println!(
        "{} board round-trips in {:?} (checksum {:#x})",
        CODEC_ITERATIONS,
        start.elapsed(),
        checksum
    );
}
