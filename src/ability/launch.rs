//! Launch: throws the piece standing just beyond a Jade pair.
//!
//! Either side's piece can be thrown. It travels outward along the pair's
//! ray, passing over anything in between; only the landing cell is
//! constrained. A friendly Void just beyond the opposite endpoint extends
//! the throw.

use crate::board::{BoardState, BoardTopology, PieceKind};

use super::{is_friendly_void, Cast, CastEffect, Formation};

/// Base throw distance in cells beyond the thrown piece.
const RANGE: i32 = 4;
/// Throw distance when amplified.
const AMPLIFIED_RANGE: i32 = 6;

/// True if a thrown piece of `thrown` kind may land on and remove a piece of
/// `occupant` kind. Portals trade only with Portals; the Void displaces
/// anything; everything else must avoid Portals.
const fn may_displace(thrown: PieceKind, occupant: PieceKind) -> bool {
    match thrown {
        PieceKind::Portal => matches!(occupant, PieceKind::Portal),
        PieceKind::Void => true,
        _ => !matches!(occupant, PieceKind::Portal),
    }
}

pub(crate) fn casts(topo: &BoardTopology, state: &BoardState, f: &Formation) -> Vec<Cast> {
    let mut casts = Vec::new();

    for (endpoint, dir) in f.endpoints() {
        let thrown_at = endpoint.offset(dir);
        let thrown = match state.piece_at(thrown_at) {
            Some(p) => p,
            None => continue,
        };

        let amp_cell = f.other_member(endpoint).offset(dir.opposite());
        let amplified = is_friendly_void(state, f.owner, amp_cell);
        let range = if amplified { AMPLIFIED_RANGE } else { RANGE };

        let mut landings = Vec::new();
        for k in 1..=range {
            let cell = thrown_at.step(dir, k);
            if !topo.contains(cell) {
                break;
            }
            match state.piece_at(cell) {
                None => {
                    // A thrown Portal only trades with an enemy Portal; it
                    // is never offered empty cells.
                    if thrown.kind != PieceKind::Portal {
                        landings.push(cell);
                    }
                }
                Some(occ) => {
                    if occ.owner != thrown.owner && may_displace(thrown.kind, occ.kind) {
                        landings.push(cell);
                    }
                }
            }
        }

        if !landings.is_empty() {
            casts.push(Cast {
                dir,
                amplified,
                effect: CastEffect::Throw {
                    thrown: thrown_at,
                    landings,
                },
            });
        }
    }
    casts
}
