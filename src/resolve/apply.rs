//! Move application.

use crate::ability::{casts_for, find_formations, CastEffect};
use crate::board::{BoardState, BoardTopology, Move, RuleViolation};

use super::attack::resolve_attacks;
use super::legality::is_legal;

/// Applies a move and returns the resulting state, with attacks resolved and
/// the turn passed to the opponent. The input state is never modified; an
/// illegal move returns the violation and produces no state.
pub fn apply_move(
    topo: &BoardTopology,
    state: &BoardState,
    mv: &Move,
) -> Result<BoardState, RuleViolation> {
    is_legal(topo, state, mv)?;

    let mut next = state.clone();
    match *mv {
        Move::Step { from, to, .. }
        | Move::Phase { from, to, .. }
        | Move::Nexus { from, to, .. }
        | Move::Rail { from, to, .. } => {
            next.relocate(from, to);
            resolve_attacks(topo, &mut next, to);
        }
        Move::Swap { from, to, .. } => {
            next.swap(from, to);
            // Both pieces changed cells; the initiating piece attacks first.
            resolve_attacks(topo, &mut next, to);
            resolve_attacks(topo, &mut next, from);
        }
        Move::Ability {
            side,
            ability,
            formation,
            dir,
            landing,
        } => {
            // Recompute the cast against the pre-move state; legality has
            // already confirmed it exists.
            let f = find_formations(topo, state, side, ability)
                .into_iter()
                .find(|f| f.has_members(formation))
                .ok_or(RuleViolation::FormationNotFound)?;
            let cast = casts_for(topo, state, ability, &f)
                .into_iter()
                .find(|c| c.dir == dir)
                .ok_or(RuleViolation::DirectionUnavailable)?;

            match cast.effect {
                CastEffect::Targets(targets) => {
                    for target in targets {
                        next.remove(target);
                    }
                }
                CastEffect::Throw { thrown, .. } => {
                    let cell = landing.ok_or(RuleViolation::IllegalDestination)?;
                    next.remove(cell); // displaced occupant, if any
                    next.relocate(thrown, cell);
                    resolve_attacks(topo, &mut next, cell);
                }
            }
        }
    }

    next.side_to_move = mv.side().opponent();
    Ok(next)
}
