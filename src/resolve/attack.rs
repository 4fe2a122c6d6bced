//! Post-relocation attacks.
//!
//! Whenever a piece comes to rest on a new cell, it attacks: adjacent enemy
//! pieces it can harm are removed at once. The Void harms everything, a
//! Portal harms only enemy Portals (including along its rails), and every
//! other piece harms enemy non-Portals.

use crate::board::{BoardState, BoardTopology, Coord, Piece, PieceKind, ALL_DIRS};

/// Removes every enemy piece the piece at `at` attacks from its new cell,
/// returning the captured coordinates in sorted order.
///
/// A no-op if `at` is empty.
pub fn resolve_attacks(topo: &BoardTopology, state: &mut BoardState, at: Coord) -> Vec<Coord> {
    let attacker = match state.piece_at(at) {
        Some(p) => p,
        None => return Vec::new(),
    };

    let mut captured = Vec::new();
    for dir in ALL_DIRS {
        let cell = at.offset(dir);
        if let Some(victim) = state.piece_at(cell) {
            if harms(attacker, victim) {
                captured.push(cell);
            }
        }
    }
    if attacker.kind == PieceKind::Portal {
        for &cell in topo.rail_neighbors(at) {
            if let Some(victim) = state.piece_at(cell) {
                if harms(attacker, victim) {
                    captured.push(cell);
                }
            }
        }
    }

    captured.sort();
    captured.dedup();
    for &cell in &captured {
        state.remove(cell);
    }
    captured
}

fn harms(attacker: Piece, victim: Piece) -> bool {
    if victim.owner == attacker.owner {
        return false;
    }
    match attacker.kind {
        PieceKind::Void => true,
        PieceKind::Portal => victim.kind == PieceKind::Portal,
        _ => victim.kind != PieceKind::Portal,
    }
}
