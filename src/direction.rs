use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the eight compass headings a stone can slide along.
///
/// Discriminants fix the table index order used everywhere a per-direction
/// array appears. North points toward the top rank (increasing row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    pub const COUNT: usize = 8;

    /// Every direction, in table index order.
    pub const ALL: [Direction; Direction::COUNT] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Direction, Error> {
        Direction::ALL.get(index).copied().ok_or_else(|| {
            Error::precondition(format!("direction index out of range: {}", index))
        })
    }

    /// (row, col) step for one slide in this direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (-1, 1),
            Direction::South => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (1, -1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Direction, Error> {
        match s.to_ascii_uppercase().as_str() {
            "N" => Ok(Direction::North),
            "NE" => Ok(Direction::NorthEast),
            "E" => Ok(Direction::East),
            "SE" => Ok(Direction::SouthEast),
            "S" => Ok(Direction::South),
            "SW" => Ok(Direction::SouthWest),
            "W" => Ok(Direction::West),
            "NW" => Ok(Direction::NorthWest),
            _ => Err(Error::precondition(format!(
                "unrecognized direction: {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order() {
        assert_eq!(Direction::North.index(), 0);
        assert_eq!(Direction::NorthEast.index(), 1);
        assert_eq!(Direction::East.index(), 2);
        assert_eq!(Direction::SouthEast.index(), 3);
        assert_eq!(Direction::South.index(), 4);
        assert_eq!(Direction::SouthWest.index(), 5);
        assert_eq!(Direction::West.index(), 6);
        assert_eq!(Direction::NorthWest.index(), 7);

        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(Direction::from_index(i).unwrap(), *dir);
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert!(matches!(
            Direction::from_index(8),
            Err(Error::PreconditionViolation { .. })
        ));
    }

    #[test]
    fn test_deltas() {
        assert_eq!(Direction::North.delta(), (1, 0));
        assert_eq!(Direction::SouthWest.delta(), (-1, -1));
        assert_eq!(Direction::East.delta(), (0, 1));

        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert!((dr, dc) != (0, 0));
            assert!((-1..=1).contains(&dr) && (-1..=1).contains(&dc));
        }
    }

    #[test]
    fn test_opposite() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.opposite().index(), (dir.index() + 4) % 8);

            let (dr, dc) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("N".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("ne".parse::<Direction>().unwrap(), Direction::NorthEast);
        assert_eq!("Sw".parse::<Direction>().unwrap(), Direction::SouthWest);
        assert!("NN".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());

        for dir in Direction::ALL {
            assert_eq!(dir.abbreviation().parse::<Direction>().unwrap(), dir);
        }
    }
}
