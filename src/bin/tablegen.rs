//! Prints the crate's bitboard tables as Rust constant declarations, for
//! pasting into downstream engines or checking against the shipped data.
//!
//! Output conventions live here, not in the library: lowercase
//! `0x`-prefixed hex with no zero padding, arrays in square index order,
//! ray rows in direction index order.

use fanorona::bitboard::{Bitboard, SQUARE_COUNT};
use fanorona::direction::Direction;
use fanorona::masks::{BB_COLS, BB_MOVES, BB_ROWS};
use fanorona::rays::RayTable;
use fanorona::square::Square;

fn emit_array(name: &str, values: &[Bitboard]) {
    println!("pub const {}: [Bitboard; {}] = [", name, values.len());
    for bb in values {
        println!("    Bitboard::new({:#x}),", bb.bits());
    }
    println!("];");
    println!();
}

fn emit_ray_table(table: &RayTable) {
    println!(
        "pub const BB_RAYS: [[Bitboard; {}]; {}] = [",
        Direction::COUNT,
        SQUARE_COUNT
    );
    for from in Square::all() {
        println!("    // {}", from);
        println!("    [");
        for dir in Direction::ALL {
            println!(
                "        Bitboard::new({:#x}), // {}",
                table.ray(from, dir).bits(),
                dir.abbreviation()
            );
        }
        println!("    ],");
    }
    println!("];");
}

fn main() {
    println!("// generated by: cargo run --bin tablegen");
    println!();
    emit_array("BB_ROWS", &BB_ROWS);
    emit_array("BB_COLS", &BB_COLS);
    emit_array("BB_MOVES", &BB_MOVES);
    emit_ray_table(&RayTable::standard());
}
