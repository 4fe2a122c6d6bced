//! Board representation and game-state types.
//!
//! Contains the core data structures for coordinates, directions, the board
//! topology (membership, golden intersections, rail graph), pieces, moves,
//! and the overall game state.

pub mod geometry;
pub mod moves;
pub mod piece;
pub mod state;
pub mod topology;

pub use geometry::{Coord, Dir, ALL_DIRS};
pub use moves::{Move, RuleViolation};
pub use piece::{Piece, PieceKind, Side, ALL_SIDES};
pub use state::BoardState;
pub use topology::BoardTopology;
