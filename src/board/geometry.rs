//! Coordinates and the eight lattice directions.
//!
//! Every movement mode and ability resolver works in terms of unit steps
//! along these directions, so the direction type carries the small amount of
//! vector arithmetic the rest of the engine needs.

use serde::{Deserialize, Serialize};

/// An intersection on the lattice, identified by its integer coordinates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// The cell one step away in the given direction.
    pub fn offset(self, dir: Dir) -> Coord {
        self.step(dir, 1)
    }

    /// The cell `n` steps away in the given direction.
    pub fn step(self, dir: Dir, n: i32) -> Coord {
        let (dx, dy) = dir.delta();
        Coord::new(self.x + dx * n, self.y + dy * n)
    }

    pub fn translate(self, dx: i32, dy: i32) -> Coord {
        Coord::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev distance: the number of unit steps between two collinear cells.
    pub fn chebyshev(self, other: Coord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// One of the eight compass directions on the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dir {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// All eight directions in clockwise order starting from North.
pub const ALL_DIRS: [Dir; 8] = [
    Dir::North,
    Dir::NorthEast,
    Dir::East,
    Dir::SouthEast,
    Dir::South,
    Dir::SouthWest,
    Dir::West,
    Dir::NorthWest,
];

/// One direction per axis, used to visit each unordered collinear pair once.
pub(crate) const HALF_DIRS: [Dir; 4] = [Dir::North, Dir::NorthEast, Dir::East, Dir::SouthEast];

impl Dir {
    /// The unit step for this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Dir::North => (0, 1),
            Dir::NorthEast => (1, 1),
            Dir::East => (1, 0),
            Dir::SouthEast => (1, -1),
            Dir::South => (0, -1),
            Dir::SouthWest => (-1, -1),
            Dir::West => (-1, 0),
            Dir::NorthWest => (-1, 1),
        }
    }

    pub const fn opposite(self) -> Dir {
        match self {
            Dir::North => Dir::South,
            Dir::NorthEast => Dir::SouthWest,
            Dir::East => Dir::West,
            Dir::SouthEast => Dir::NorthWest,
            Dir::South => Dir::North,
            Dir::SouthWest => Dir::NorthEast,
            Dir::West => Dir::East,
            Dir::NorthWest => Dir::SouthEast,
        }
    }

    /// The direction rotated a quarter turn clockwise. Diagonals stay diagonal.
    pub const fn perpendicular(self) -> Dir {
        match self {
            Dir::North => Dir::East,
            Dir::NorthEast => Dir::SouthEast,
            Dir::East => Dir::South,
            Dir::SouthEast => Dir::SouthWest,
            Dir::South => Dir::West,
            Dir::SouthWest => Dir::NorthWest,
            Dir::West => Dir::North,
            Dir::NorthWest => Dir::NorthEast,
        }
    }

    pub const fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }

    /// Builds a direction from a unit delta.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Dir> {
        match (dx, dy) {
            (0, 1) => Some(Dir::North),
            (1, 1) => Some(Dir::NorthEast),
            (1, 0) => Some(Dir::East),
            (1, -1) => Some(Dir::SouthEast),
            (0, -1) => Some(Dir::South),
            (-1, -1) => Some(Dir::SouthWest),
            (-1, 0) => Some(Dir::West),
            (-1, 1) => Some(Dir::NorthWest),
            _ => None,
        }
    }

    /// The direction from `a` to `b`, if the two cells are collinear along
    /// one of the eight directions and distinct.
    pub fn between(a: Coord, b: Coord) -> Option<Dir> {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        if dx == 0 && dy == 0 {
            return None;
        }
        if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
            return None;
        }
        Dir::from_delta(dx.signum(), dy.signum())
    }
}
