//! Fireball: a blocked ray from each formation endpoint.
//!
//! The ray passes over empty cells and stops at the first piece. An enemy
//! piece there is the sole target; a Portal blocks the ray entirely unless
//! the cast is amplified, in which case the Portal itself is targetable.
//! The amplifying Void sits directly beyond the endpoint, so an amplified
//! ray starts one cell further out.

use crate::board::{BoardState, BoardTopology, PieceKind};

use super::{is_friendly_void, Cast, CastEffect, Formation};

/// Base ray range in cells from the endpoint.
const RANGE: i32 = 6;
/// Ray range when amplified.
const AMPLIFIED_RANGE: i32 = 9;

pub(crate) fn casts(topo: &BoardTopology, state: &BoardState, f: &Formation) -> Vec<Cast> {
    let mut casts = Vec::new();

    for (endpoint, dir) in f.endpoints() {
        let amplified = is_friendly_void(state, f.owner, endpoint.offset(dir));
        let (first, range) = if amplified {
            (2, AMPLIFIED_RANGE) // skip the amplifying Void's cell
        } else {
            (1, RANGE)
        };

        let mut target = None;
        for k in first..=range {
            let cell = endpoint.step(dir, k);
            if !topo.contains(cell) {
                break;
            }
            if let Some(p) = state.piece_at(cell) {
                if p.owner != f.owner && (p.kind != PieceKind::Portal || amplified) {
                    target = Some(cell);
                }
                break;
            }
        }

        if let Some(t) = target {
            casts.push(Cast {
                dir,
                amplified,
                effect: CastEffect::Targets(vec![t]),
            });
        }
    }
    casts
}
