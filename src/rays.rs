//! Sliding-ray precomputation.
//!
//! For every square and compass heading, the table holds the squares a
//! sliding stone would sweep before falling off the board, intersected
//! with that square's destination mask. The walk advances one
//! intersection at a time, so rays never wrap across rank boundaries:
//! stepping east off file I ends the ray instead of reappearing on
//! file A of the next rank.

use crate::bitboard::{Bitboard, SQUARE_COUNT};
use crate::direction::Direction;
use crate::masks::BB_MOVES;
use crate::square::Square;

/// All squares swept from `from` toward `dir` until the board edge,
/// unmasked. The origin square itself is never part of the ray.
pub fn open_ray(from: Square, dir: Direction) -> Bitboard {
    let mut ray = Bitboard::EMPTY;
    let mut cursor = from.translate(dir);
    while let Some(sq) = cursor {
        ray.set(sq);
        cursor = sq.translate(dir);
    }
    ray
}

/// Immutable 45×8 table of masked sliding rays.
///
/// Every `(square, direction)` entry is defined; [`Bitboard::EMPTY`]
/// marks headings with no legal destination. Build the table once and
/// share it freely: it never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RayTable {
    rays: [[Bitboard; Direction::COUNT]; SQUARE_COUNT],
}

impl RayTable {
    /// Compute the table for the given per-square destination masks.
    ///
    /// Pure and deterministic: identical masks always produce a
    /// bit-identical table.
    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn build(move_masks: &[Bitboard; SQUARE_COUNT]) -> RayTable {
        let mut rays = [[Bitboard::EMPTY; Direction::COUNT]; SQUARE_COUNT];
        for from in Square::all() {
            let mask = move_masks[from.index()];
            for dir in Direction::ALL {
                rays[from.index()][dir.index()] = open_ray(from, dir) & mask;
            }
        }
        RayTable { rays }
    }

    /// The table for the standard rules, masked by [`BB_MOVES`].
    pub fn standard() -> RayTable {
        RayTable::build(&BB_MOVES)
    }

    /// The masked ray from `from` toward `dir`.
    #[inline]
    pub fn ray(&self, from: Square, dir: Direction) -> Bitboard {
        self.rays[from.index()][dir.index()]
    }

    /// All eight masked rays from `from`, in direction index order.
    #[inline]
    pub fn rays_from(&self, from: Square) -> &[Bitboard; Direction::COUNT] {
        &self.rays[from.index()]
    }

    /// Every `(square, direction, ray)` entry in table order.
    pub fn entries(&self) -> impl Iterator<Item = (Square, Direction, Bitboard)> + '_ {
        Square::all().flat_map(move |from| {
            Direction::ALL
                .into_iter()
                .map(move |dir| (from, dir, self.ray(from, dir)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masks::{BB_A2, BB_B1, BB_B2, BB_D2, BB_D5, BB_E1, BB_E3, BB_F2, BB_H4, BB_H5, BB_I4};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_open_ray_east_from_corner() {
        // A1 east sweeps the rest of the bottom rank.
        assert_eq!(open_ray(sq("A1"), Direction::East), 0x1feu64);
    }

    #[test]
    fn test_open_ray_north_from_corner() {
        // A1 north sweeps the rest of file A.
        assert_eq!(open_ray(sq("A1"), Direction::North), 0x1008040200u64);
    }

    #[test]
    fn test_open_ray_west_from_corner_is_empty() {
        assert!(open_ray(sq("A1"), Direction::West).is_empty());
    }

    #[test]
    fn test_open_ray_diagonals() {
        // E3 -> F4 -> G5.
        assert_eq!(open_ray(sq("E3"), Direction::NorthEast), 0x40100000000u64);
        // I5 -> H4 -> G3 -> F2 -> E1.
        assert_eq!(open_ray(sq("I5"), Direction::SouthWest), 0x401004010u64);
    }

    #[test]
    fn test_open_ray_never_wraps() {
        assert!(open_ray(sq("I1"), Direction::East).is_empty());
        assert!(open_ray(sq("A2"), Direction::West).is_empty());

        // Any heading that leaves the board immediately yields nothing.
        for from in Square::all() {
            for dir in Direction::ALL {
                if from.translate(dir).is_none() {
                    assert!(open_ray(from, dir).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_masked_rays_from_corner() {
        let table = RayTable::standard();
        assert_eq!(table.ray(sq("A1"), Direction::North), BB_A2);
        assert_eq!(table.ray(sq("A1"), Direction::NorthEast), BB_B2);
        assert_eq!(table.ray(sq("A1"), Direction::East), BB_B1);
        for dir in [
            Direction::SouthEast,
            Direction::South,
            Direction::SouthWest,
            Direction::West,
            Direction::NorthWest,
        ] {
            assert!(table.ray(sq("A1"), dir).is_empty());
        }
    }

    #[test]
    fn test_masked_rays_from_center() {
        let table = RayTable::standard();
        let center = sq("E3");
        for dir in Direction::ALL {
            let step = center.translate(dir).unwrap();
            assert_eq!(table.ray(center, dir), step.mask());
        }
    }

    #[test]
    fn test_masked_rays_skip_unreachable_diagonals() {
        // E2 only admits rank and file destinations, so its diagonal
        // rays mask down to nothing even though the open rays are not
        // empty.
        let table = RayTable::standard();
        let from = sq("E2");
        for dir in [
            Direction::NorthEast,
            Direction::SouthEast,
            Direction::SouthWest,
            Direction::NorthWest,
        ] {
            assert!(open_ray(from, dir).is_nonzero());
            assert!(table.ray(from, dir).is_empty());
        }
        assert_eq!(table.ray(from, Direction::North), BB_E3);
        assert_eq!(table.ray(from, Direction::South), BB_E1);
        assert_eq!(table.ray(from, Direction::East), BB_F2);
        assert_eq!(table.ray(from, Direction::West), BB_D2);
    }

    #[test]
    fn test_masked_rays_top_rank() {
        let table = RayTable::standard();

        assert_eq!(table.ray(sq("I5"), Direction::South), BB_I4);
        assert_eq!(table.ray(sq("I5"), Direction::SouthWest), BB_H4);
        assert_eq!(table.ray(sq("I5"), Direction::West), BB_H5);
        assert!(table.ray(sq("I5"), Direction::North).is_empty());

        // C5's destination mask has no southern entry, so that heading
        // masks to nothing.
        assert!(table.ray(sq("C5"), Direction::South).is_empty());
        assert_eq!(table.ray(sq("C5"), Direction::East), BB_D5);
    }

    #[test]
    fn test_masked_ray_never_escapes_mask() {
        let table = RayTable::standard();
        for (from, _, ray) in table.entries() {
            assert!((ray & !BB_MOVES[from.index()]).is_empty());
        }
    }

    #[test]
    fn test_full_masks_recover_open_rays() {
        let table = RayTable::build(&[Bitboard::ALL; SQUARE_COUNT]);
        for (from, dir, ray) in table.entries() {
            assert_eq!(ray, open_ray(from, dir));
        }
        // Long rays survive untrimmed under a permissive mask.
        assert_eq!(table.ray(sq("A1"), Direction::East), 0x1feu64);
    }

    #[test]
    fn test_empty_masks_zero_the_table() {
        let table = RayTable::build(&[Bitboard::EMPTY; SQUARE_COUNT]);
        assert!(table.entries().all(|(_, _, ray)| ray.is_empty()));
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = RayTable::standard();
        let b = RayTable::build(&BB_MOVES);
        assert_eq!(a, b);
        assert_eq!(RayTable::standard(), RayTable::standard());
    }

    #[test]
    fn test_every_entry_is_defined() {
        let table = RayTable::standard();
        assert_eq!(table.entries().count(), SQUARE_COUNT * Direction::COUNT);

        let nonzero = table.entries().filter(|(_, _, ray)| ray.is_nonzero()).count();
        assert_eq!(nonzero, 215);
    }

    #[test]
    fn test_rays_from_matches_ray() {
        let table = RayTable::standard();
        for from in Square::all() {
            let per_square = table.rays_from(from);
            for dir in Direction::ALL {
                assert_eq!(per_square[dir.index()], table.ray(from, dir));
            }
        }
    }
}
