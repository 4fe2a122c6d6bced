//! Sap: drains the line between two collinear Ambers.
//!
//! The main line is the open segment strictly between the pair. Enemy pieces
//! on it are targets; Portals only when amplified. Amplification comes from
//! a friendly Void standing anywhere on the main line, and additionally
//! opens two parallel lines, one cell to each side, to the scan.

use crate::board::{BoardState, BoardTopology, Coord, PieceKind};

use super::{is_friendly_void, Cast, CastEffect, Formation};

pub(crate) fn casts(topo: &BoardTopology, state: &BoardState, f: &Formation) -> Vec<Cast> {
    let span = f.members[0].chebyshev(f.members[1]);
    if span < 2 {
        return Vec::new(); // adjacent pair: the main line is empty
    }

    let main_line: Vec<Coord> = (1..span).map(|k| f.members[0].step(f.dir, k)).collect();
    let amplified = main_line
        .iter()
        .any(|&cell| is_friendly_void(state, f.owner, cell));

    let mut targets = Vec::new();
    for &cell in &main_line {
        if let Some(p) = state.piece_at(cell) {
            if p.owner != f.owner && (p.kind != PieceKind::Portal || amplified) {
                targets.push(cell);
            }
        }
    }

    if amplified {
        let perp = f.dir.perpendicular();
        for offset in [perp, perp.opposite()] {
            for &cell in &main_line {
                let side_cell = cell.offset(offset);
                if !topo.contains(side_cell) {
                    continue;
                }
                if let Some(p) = state.piece_at(side_cell) {
                    if p.owner != f.owner {
                        targets.push(side_cell);
                    }
                }
            }
        }
    }

    if targets.is_empty() {
        return Vec::new();
    }
    targets.sort();
    vec![Cast {
        dir: f.dir,
        amplified,
        effect: CastEffect::Targets(targets),
    }]
}
