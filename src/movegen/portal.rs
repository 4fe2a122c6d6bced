//! Portal-specific movement: rail teleports and swaps.

use std::collections::HashSet;

use crate::board::{BoardState, BoardTopology, Coord, PieceKind};

/// Rail destinations for the Portal at `from`.
///
/// Requires the Portal to stand on a golden intersection; destinations are
/// the empty golden intersections on its rail list. A teleport, not a walk.
pub fn rail_destinations(
    topo: &BoardTopology,
    state: &BoardState,
    from: Coord,
) -> HashSet<Coord> {
    let mut dests = HashSet::new();
    let piece = match state.piece_at(from) {
        Some(p) => p,
        None => return dests,
    };
    if piece.kind != PieceKind::Portal || !topo.is_golden(from) {
        return dests;
    }

    for &to in topo.rail_neighbors(from) {
        if state.is_empty_cell(to) {
            dests.insert(to);
        }
    }
    dests
}

/// Swap destinations for the non-Portal piece at `from`.
///
/// The piece must stand on a golden intersection; it may exchange places with
/// any friendly Portal anywhere on the board whose own cell is also golden.
/// The only movement mode whose destination is occupied.
pub fn swap_destinations(
    topo: &BoardTopology,
    state: &BoardState,
    from: Coord,
) -> HashSet<Coord> {
    let mut dests = HashSet::new();
    let piece = match state.piece_at(from) {
        Some(p) => p,
        None => return dests,
    };
    if piece.kind == PieceKind::Portal || !topo.is_golden(from) {
        return dests;
    }

    for (coord, other) in state.pieces() {
        if other.owner == piece.owner
            && other.kind == PieceKind::Portal
            && topo.is_golden(coord)
        {
            dests.insert(coord);
        }
    }
    dests
}
