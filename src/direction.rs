//! Cardinal light directions and the grid lines they act along.
//!
//! Each target image is paired with one direction. A direction names the side
//! the light comes from: under [`Direction::East`] a cell can only be shaded by
//! cells that lie east of it (larger column index) on the same row.
use serde::{Deserialize, Serialize};

/// Number of cardinal directions, and therefore of target images.
pub const DIRECTION_COUNT: usize = 4;

/// The grid axis a line runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// A line of fixed row; positions are column indices.
    Row,
    /// A line of fixed column; positions are row indices.
    Column,
}

impl Axis {
    /// Split `(row, col)` into `(fixed, position)` for a line along this axis.
    #[inline]
    pub fn split(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Axis::Row => (row, col),
            Axis::Column => (col, row),
        }
    }

    /// Inverse of [`Axis::split`].
    #[inline]
    pub fn join(self, fixed: usize, position: usize) -> (usize, usize) {
        match self {
            Axis::Row => (fixed, position),
            Axis::Column => (position, fixed),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    /// Fixed processing order; also the order of target images.
    pub const ALL: [Direction; DIRECTION_COUNT] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::East => 0,
            Direction::West => 1,
            Direction::South => 2,
            Direction::North => 3,
        }
    }

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::East | Direction::West => Axis::Row,
            Direction::South | Direction::North => Axis::Column,
        }
    }

    /// Position offset from a cell toward the cells that can shade it.
    #[inline]
    pub fn step(self) -> isize {
        match self {
            Direction::East | Direction::South => 1,
            Direction::West | Direction::North => -1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::West => "west",
            Direction::South => "south",
            Direction::North => "north",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_processing_order() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn opposite_directions_share_an_axis() {
        assert_eq!(Direction::East.axis(), Direction::West.axis());
        assert_eq!(Direction::South.axis(), Direction::North.axis());
        assert_eq!(Direction::East.step(), -Direction::West.step());
        assert_eq!(Direction::South.step(), -Direction::North.step());
    }

    #[test]
    fn split_and_join_are_inverse() {
        for axis in [Axis::Row, Axis::Column] {
            let (fixed, pos) = axis.split(3, 7);
            assert_eq!(axis.join(fixed, pos), (3, 7));
        }
        assert_eq!(Axis::Column.split(3, 7), (7, 3));
    }
}
