//! Standard steps and phasing walks.
//!
//! Both modes scan the eight directions from the origin. A standard step
//! lands on the adjacent empty cell; a phasing walk continues in a straight
//! line through a contiguous run of pieces and lands on the first empty cell
//! beyond the run.

use std::collections::HashSet;

use crate::board::{BoardState, BoardTopology, Coord, PieceKind, ALL_DIRS};

/// Single-step destinations for the piece at `from`.
///
/// Portal movers may only step onto empty golden intersections.
pub fn step_destinations(
    topo: &BoardTopology,
    state: &BoardState,
    from: Coord,
) -> HashSet<Coord> {
    let mut dests = HashSet::new();
    let piece = match state.piece_at(from) {
        Some(p) => p,
        None => return dests,
    };

    for dir in ALL_DIRS {
        let to = from.offset(dir);
        if !topo.contains(to) || !state.is_empty_cell(to) {
            continue;
        }
        if piece.kind == PieceKind::Portal && !topo.is_golden(to) {
            continue;
        }
        dests.insert(to);
    }
    dests
}

/// Phasing destinations for the piece at `from`.
///
/// A non-Portal mover may only phase through a run consisting entirely of
/// Portal pieces (either side's). A Portal mover phases through any run but
/// must land on an empty golden intersection. The walk is bounded by the
/// board extent so it terminates regardless of board data.
pub fn phase_destinations(
    topo: &BoardTopology,
    state: &BoardState,
    from: Coord,
) -> HashSet<Coord> {
    let mut dests = HashSet::new();
    let mover = match state.piece_at(from) {
        Some(p) => p,
        None => return dests,
    };
    let mover_is_portal = mover.kind == PieceKind::Portal;

    for dir in ALL_DIRS {
        let mut cur = from.offset(dir);
        let mut run_len = 0;
        let mut run_all_portals = true;

        for _ in 0..topo.extent() {
            if !topo.contains(cur) {
                break;
            }
            match state.piece_at(cur) {
                Some(p) => {
                    run_len += 1;
                    if p.kind != PieceKind::Portal {
                        run_all_portals = false;
                    }
                    cur = cur.offset(dir);
                }
                None => {
                    if run_len == 0 {
                        break; // adjacent cell empty: that is a standard step
                    }
                    if !mover_is_portal && !run_all_portals {
                        break;
                    }
                    if mover_is_portal && !topo.is_golden(cur) {
                        break;
                    }
                    dests.insert(cur);
                    break;
                }
            }
        }
    }
    dests
}
