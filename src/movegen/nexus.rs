//! Nexus movement.
//!
//! A nexus is a pair of friendly elemental pieces of different kinds,
//! 8-adjacent to each other, one of which is 8-adjacent to the mover's
//! origin. Both members of every such pair open their empty neighborhoods to
//! the mover.

use std::collections::HashSet;

use crate::board::{BoardState, BoardTopology, Coord, PieceKind, ALL_DIRS};

/// Nexus destinations for the piece at `from`.
///
/// Portal movers are additionally restricted to golden intersections.
pub fn nexus_destinations(
    topo: &BoardTopology,
    state: &BoardState,
    from: Coord,
) -> HashSet<Coord> {
    let mut dests = HashSet::new();
    let mover = match state.piece_at(from) {
        Some(p) => p,
        None => return dests,
    };

    for dir in ALL_DIRS {
        let anchor = from.offset(dir);
        let anchor_piece = match state.piece_at(anchor) {
            Some(p) => p,
            None => continue,
        };
        if anchor_piece.owner != mover.owner || !anchor_piece.kind.is_elemental() {
            continue;
        }

        for pair_dir in ALL_DIRS {
            let partner = anchor.offset(pair_dir);
            if partner == from {
                continue;
            }
            let partner_piece = match state.piece_at(partner) {
                Some(p) => p,
                None => continue,
            };
            if partner_piece.owner != mover.owner
                || !partner_piece.kind.is_elemental()
                || partner_piece.kind == anchor_piece.kind
            {
                continue;
            }

            // Both members of the pair contribute their empty neighborhoods.
            for member in [anchor, partner] {
                for out in ALL_DIRS {
                    let dest = member.offset(out);
                    if dest == from || !topo.contains(dest) || !state.is_empty_cell(dest) {
                        continue;
                    }
                    if mover.kind == PieceKind::Portal && !topo.is_golden(dest) {
                        continue;
                    }
                    dests.insert(dest);
                }
            }
        }
    }
    dests
}
