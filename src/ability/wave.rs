//! Tidal Wave: a triangular flood from each formation endpoint.
//!
//! The flood extends a fixed number of rows forward, widening up to a cap on
//! either side of the center line. Diagonal directions include the
//! half-offset intermediate rows that lie between the full rows of the
//! lattice. Every enemy piece inside the area is a target; Portals only
//! when amplified.

use crate::board::{BoardState, BoardTopology, Coord, Dir, PieceKind};

use super::{is_friendly_void, Cast, CastEffect, Formation};

/// Rows the flood extends forward.
const ROWS: i32 = 4;
/// Rows when amplified.
const AMPLIFIED_ROWS: i32 = 5;
/// Maximum cells either side of the center line.
const HALF_WIDTH: i32 = 2;
/// Half-width when amplified.
const AMPLIFIED_HALF_WIDTH: i32 = 3;

pub(crate) fn casts(topo: &BoardTopology, state: &BoardState, f: &Formation) -> Vec<Cast> {
    let mut casts = Vec::new();

    for (endpoint, dir) in f.endpoints() {
        let amplified = is_friendly_void(state, f.owner, endpoint.offset(dir));
        let (rows, cap) = if amplified {
            (AMPLIFIED_ROWS, AMPLIFIED_HALF_WIDTH)
        } else {
            (ROWS, HALF_WIDTH)
        };

        let mut targets: Vec<Coord> = flood_cells(topo, endpoint, dir, rows, cap)
            .into_iter()
            .filter(|&cell| {
                matches!(state.piece_at(cell), Some(p)
                    if p.owner != f.owner && (p.kind != PieceKind::Portal || amplified))
            })
            .collect();
        targets.sort();

        if !targets.is_empty() {
            casts.push(Cast {
                dir,
                amplified,
                effect: CastEffect::Targets(targets),
            });
        }
    }
    casts
}

/// The flooded cells: `rows` rows forward of `from`, each up to `cap` cells
/// either side of center.
///
/// Offsets are classified by their components along the direction (`t`, the
/// dot product with the unit step) and across it (`s`, the cross product).
/// For orthogonal directions `t` is the row number directly. For diagonal
/// directions a unit forward step advances `t` by two, so odd `t` values are
/// the half-offset intermediate rows and all lateral extents double.
fn flood_cells(topo: &BoardTopology, from: Coord, dir: Dir, rows: i32, cap: i32) -> Vec<Coord> {
    let (dx, dy) = dir.delta();
    let diagonal = dir.is_diagonal();
    let bound = rows + cap;

    let mut cells = Vec::new();
    for a in -bound..=bound {
        for b in -bound..=bound {
            let t = a * dx + b * dy;
            let s = a * dy - b * dx;
            let inside = if diagonal {
                if t < 1 || t > 2 * rows {
                    false
                } else {
                    let row = (t + 1) / 2;
                    let limit = 2 * row.min(cap) - (t % 2);
                    s.abs() <= limit
                }
            } else {
                t >= 1 && t <= rows && s.abs() <= t.min(cap)
            };
            if inside {
                let cell = from.translate(a, b);
                if topo.contains(cell) {
                    cells.push(cell);
                }
            }
        }
    }
    cells
}
