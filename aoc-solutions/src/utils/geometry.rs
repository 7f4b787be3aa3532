//! Grid geometry value types.
//!
//! - [`Coord`]: a `(row, col)` cell address
//! - [`Delta`]: a row/column offset, one step in some direction
//! - [`Direction`]: one of the four cardinal headings, with rotation
//!
//! Coordinates are plain integers and may go negative; whether a coordinate
//! lies inside a grid is the grid's concern, not the coordinate's.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::geometry::{Coord, Delta, Direction};
//!
//! let start = Coord::new(2, 3);
//! assert_eq!(start + Delta::UP, Coord::new(1, 3));
//! assert_eq!(start.step(Direction::Left), Coord::new(2, 2));
//! assert_eq!(Direction::Up.rotate_cw(), Direction::Right);
//! ```

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A grid cell address: row first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring coordinate one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        self + dir.delta()
    }

    /// The four orthogonal neighbours, in [`Direction::ALL`] order.
    pub fn neighbors4(self) -> [Coord; 4] {
        Delta::CARDINALS.map(|d| self + d)
    }

    /// The eight surrounding coordinates, clockwise from straight up.
    pub fn neighbors8(self) -> [Coord; 8] {
        Delta::ALL.map(|d| self + d)
    }

    /// Taxicab distance between two coordinates.
    pub fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add<Delta> for Coord {
    type Output = Coord;

    fn add(self, rhs: Delta) -> Coord {
        Coord::new(self.row + rhs.drow, self.col + rhs.dcol)
    }
}

impl Sub for Coord {
    type Output = Delta;

    fn sub(self, rhs: Coord) -> Delta {
        Delta::new(self.row - rhs.row, self.col - rhs.col)
    }
}

/// A row/column offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Delta {
    pub drow: i32,
    pub dcol: i32,
}

impl Delta {
    pub const UP: Delta = Delta::new(-1, 0);
    pub const RIGHT: Delta = Delta::new(0, 1);
    pub const DOWN: Delta = Delta::new(1, 0);
    pub const LEFT: Delta = Delta::new(0, -1);
    pub const UP_RIGHT: Delta = Delta::new(-1, 1);
    pub const DOWN_RIGHT: Delta = Delta::new(1, 1);
    pub const DOWN_LEFT: Delta = Delta::new(1, -1);
    pub const UP_LEFT: Delta = Delta::new(-1, -1);

    /// Orthogonal steps, clockwise from up.
    pub const CARDINALS: [Delta; 4] = [Self::UP, Self::RIGHT, Self::DOWN, Self::LEFT];

    /// All eight king-move steps, clockwise from up.
    pub const ALL: [Delta; 8] = [
        Self::UP,
        Self::UP_RIGHT,
        Self::RIGHT,
        Self::DOWN_RIGHT,
        Self::DOWN,
        Self::DOWN_LEFT,
        Self::LEFT,
        Self::UP_LEFT,
    ];

    pub const fn new(drow: i32, dcol: i32) -> Self {
        Self { drow, dcol }
    }
}

impl Neg for Delta {
    type Output = Delta;

    fn neg(self) -> Delta {
        Delta::new(-self.drow, -self.dcol)
    }
}

/// A cardinal heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise order, starting at [`Direction::Up`].
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub const fn delta(self) -> Delta {
        match self {
            Direction::Up => Delta::UP,
            Direction::Right => Delta::RIGHT,
            Direction::Down => Delta::DOWN,
            Direction::Left => Delta::LEFT,
        }
    }

    /// Quarter turn clockwise.
    pub const fn rotate_cw(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Quarter turn counter-clockwise.
    pub const fn rotate_ccw(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    pub const fn reverse(self) -> Self {
        self.rotate_cw().rotate_cw()
    }

    /// Parses the arrow glyphs `^ > v <` used in puzzle maps.
    pub fn from_arrow(c: char) -> Option<Self> {
        match c {
            '^' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cycles_through_all_four() {
        let mut dir = Direction::Up;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(dir);
            dir = dir.rotate_cw();
        }
        assert_eq!(dir, Direction::Up);
        assert_eq!(seen, Direction::ALL);

        for dir in Direction::ALL {
            assert_eq!(dir.rotate_cw().rotate_ccw(), dir);
            assert_eq!(dir.reverse().delta(), -dir.delta());
        }
    }

    #[test]
    fn test_coord_arithmetic_has_no_bounds() {
        let c = Coord::ORIGIN + Delta::UP_LEFT;
        assert_eq!(c, Coord::new(-1, -1));
        assert_eq!(Coord::new(3, 4) - Coord::new(1, 1), Delta::new(2, 3));
        assert_eq!(Coord::new(0, 5) + Delta::LEFT + Delta::DOWN, Coord::new(1, 4));
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(-2, 3)), 5);
    }

    #[test]
    fn test_neighbors_follow_direction_order() {
        let c = Coord::new(5, 5);
        let n4 = c.neighbors4();
        for (dir, n) in Direction::ALL.iter().zip(n4) {
            assert_eq!(c.step(*dir), n);
        }
        assert_eq!(c.neighbors8().len(), 8);
        assert!(c.neighbors8().iter().all(|n| *n != c));
    }

    #[test]
    fn test_from_arrow() {
        assert_eq!(Direction::from_arrow('^'), Some(Direction::Up));
        assert_eq!(Direction::from_arrow('v'), Some(Direction::Down));
        assert_eq!(Direction::from_arrow('.'), None);
    }
}
