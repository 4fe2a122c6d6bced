//! Board topology: membership, golden intersections, and the rail graph.
//!
//! The rail graph is an explicit symmetric edge list over golden
//! intersections. It is board data, not derivable from 8-neighbor adjacency:
//! rails connect distant intersections along the board's golden lines.
//!
//! Topology is supplied once at startup. `BoardTopology::standard()` builds
//! the canonical 11x11 board from compile-time tables; collaborators with
//! their own map data use `BoardTopology::new`.

use std::collections::{HashMap, HashSet};

use super::geometry::Coord;
use super::piece::Side;

/// Width and height of the standard board.
pub const STANDARD_SIZE: i32 = 11;

const fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

/// Golden intersections of the standard board: corners, edge midpoints, center.
const STANDARD_GOLDEN: [Coord; 9] = [
    c(0, 0),
    c(5, 0),
    c(10, 0),
    c(0, 5),
    c(5, 5),
    c(10, 5),
    c(0, 10),
    c(5, 10),
    c(10, 10),
];

/// Rail edges of the standard board, one entry per undirected edge.
///
/// The golden lines run along the border (corner to edge midpoint), the two
/// medians, and the two main diagonals, all meeting at the center.
const STANDARD_RAILS: [(Coord, Coord); 16] = [
    // Border.
    (c(0, 0), c(5, 0)),
    (c(5, 0), c(10, 0)),
    (c(10, 0), c(10, 5)),
    (c(10, 5), c(10, 10)),
    (c(10, 10), c(5, 10)),
    (c(5, 10), c(0, 10)),
    (c(0, 10), c(0, 5)),
    (c(0, 5), c(0, 0)),
    // Medians.
    (c(5, 0), c(5, 5)),
    (c(10, 5), c(5, 5)),
    (c(5, 10), c(5, 5)),
    (c(0, 5), c(5, 5)),
    // Diagonals.
    (c(0, 0), c(5, 5)),
    (c(10, 0), c(5, 5)),
    (c(0, 10), c(5, 5)),
    (c(10, 10), c(5, 5)),
];

/// Home anchors of the standard board: the mid-edge golden cell on each
/// side's back rank. A side wins by landing its Void on the opponent's anchor.
const STANDARD_HOME_A: Coord = c(5, 0);
const STANDARD_HOME_B: Coord = c(5, 10);

/// Immutable description of the lattice the game is played on.
#[derive(Debug, Clone)]
pub struct BoardTopology {
    cells: HashSet<Coord>,
    golden: HashSet<Coord>,
    rails: HashMap<Coord, Vec<Coord>>,
    home: [Coord; 2],
    extent: i32,
}

impl BoardTopology {
    /// Builds a topology from explicit board data.
    ///
    /// Golden cells must be board members and rail endpoints must be golden;
    /// violations are defects in the supplied data, not runtime conditions.
    pub fn new(
        cells: impl IntoIterator<Item = Coord>,
        golden: impl IntoIterator<Item = Coord>,
        rails: impl IntoIterator<Item = (Coord, Coord)>,
        home_a: Coord,
        home_b: Coord,
    ) -> Self {
        let cells: HashSet<Coord> = cells.into_iter().collect();
        let golden: HashSet<Coord> = golden.into_iter().collect();
        debug_assert!(golden.iter().all(|g| cells.contains(g)));
        debug_assert!(cells.contains(&home_a) && cells.contains(&home_b));

        let mut rail_map: HashMap<Coord, Vec<Coord>> = HashMap::new();
        for (a, b) in rails {
            debug_assert!(golden.contains(&a) && golden.contains(&b));
            rail_map.entry(a).or_default().push(b);
            rail_map.entry(b).or_default().push(a);
        }

        let extent = Self::extent_of(&cells);
        BoardTopology {
            cells,
            golden,
            rails: rail_map,
            home: [home_a, home_b],
            extent,
        }
    }

    /// The canonical 11x11 Goldline board.
    pub fn standard() -> Self {
        let cells = (0..STANDARD_SIZE)
            .flat_map(|x| (0..STANDARD_SIZE).map(move |y| Coord::new(x, y)));
        Self::new(
            cells,
            STANDARD_GOLDEN,
            STANDARD_RAILS,
            STANDARD_HOME_A,
            STANDARD_HOME_B,
        )
    }

    fn extent_of(cells: &HashSet<Coord>) -> i32 {
        let mut min_x = i32::MAX;
        let mut max_x = i32::MIN;
        let mut min_y = i32::MAX;
        let mut max_y = i32::MIN;
        for c in cells {
            min_x = min_x.min(c.x);
            max_x = max_x.max(c.x);
            min_y = min_y.min(c.y);
            max_y = max_y.max(c.y);
        }
        if cells.is_empty() {
            0
        } else {
            (max_x - min_x + 1).max(max_y - min_y + 1)
        }
    }

    /// True if the coordinate is a board member.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// True if the coordinate is a golden intersection.
    pub fn is_golden(&self, coord: Coord) -> bool {
        self.golden.contains(&coord)
    }

    /// The golden intersections rail-connected to the given cell.
    pub fn rail_neighbors(&self, coord: Coord) -> &[Coord] {
        self.rails.get(&coord).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The home anchor of the given side.
    pub fn home_anchor(&self, side: Side) -> Coord {
        match side {
            Side::A => self.home[0],
            Side::B => self.home[1],
        }
    }

    /// Upper bound on the length of any straight walk across the board.
    /// Bounds the phasing loop so it terminates regardless of board data.
    pub fn extent(&self) -> i32 {
        self.extent
    }

    /// Iterates over all board cells in unspecified order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Iterates over all golden intersections in unspecified order.
    pub fn golden_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.golden.iter().copied()
    }
}
