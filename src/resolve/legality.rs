//! Move legality checking.
//!
//! Validates a proposed move against the generator for the mode it claims,
//! plus turn and ownership constraints. Fails closed: any violation returns
//! a reason and no state is touched.

use std::collections::HashSet;

use crate::ability::{casts_for, find_formations, AbilityKind, CastEffect};
use crate::board::{BoardState, BoardTopology, Coord, Dir, Move, RuleViolation, Side};
use crate::movegen::{
    nexus_destinations, phase_destinations, rail_destinations, step_destinations,
    swap_destinations,
};

/// Checks whether the move is legal in the given state.
pub fn is_legal(topo: &BoardTopology, state: &BoardState, mv: &Move) -> Result<(), RuleViolation> {
    if mv.side() != state.side_to_move {
        return Err(RuleViolation::NotPlayersTurn);
    }

    match *mv {
        Move::Step { side, from, to } => {
            check_relocation(state, side, from, to, step_destinations(topo, state, from))
        }
        Move::Phase { side, from, to } => {
            check_relocation(state, side, from, to, phase_destinations(topo, state, from))
        }
        Move::Nexus { side, from, to } => {
            check_relocation(state, side, from, to, nexus_destinations(topo, state, from))
        }
        Move::Rail { side, from, to } => {
            check_relocation(state, side, from, to, rail_destinations(topo, state, from))
        }
        Move::Swap { side, from, to } => {
            check_relocation(state, side, from, to, swap_destinations(topo, state, from))
        }
        Move::Ability {
            side,
            ability,
            formation,
            dir,
            landing,
        } => check_ability(topo, state, side, ability, formation, dir, landing),
    }
}

fn check_relocation(
    state: &BoardState,
    side: Side,
    from: Coord,
    to: Coord,
    dests: HashSet<Coord>,
) -> Result<(), RuleViolation> {
    let piece = state.piece_at(from).ok_or(RuleViolation::WrongPieceOwner)?;
    if piece.owner != side {
        return Err(RuleViolation::WrongPieceOwner);
    }
    if dests.contains(&to) {
        Ok(())
    } else {
        Err(RuleViolation::IllegalDestination)
    }
}

fn check_ability(
    topo: &BoardTopology,
    state: &BoardState,
    side: Side,
    ability: AbilityKind,
    members: [Coord; 2],
    dir: Dir,
    landing: Option<Coord>,
) -> Result<(), RuleViolation> {
    let formation = find_formations(topo, state, side, ability)
        .into_iter()
        .find(|f| f.has_members(members))
        .ok_or(RuleViolation::FormationNotFound)?;

    let cast = casts_for(topo, state, ability, &formation)
        .into_iter()
        .find(|c| c.dir == dir)
        .ok_or(RuleViolation::DirectionUnavailable)?;

    match (cast.effect, landing) {
        (CastEffect::Targets(_), None) => Ok(()),
        (CastEffect::Throw { thrown, landings }, Some(cell)) => {
            if landings.contains(&cell) {
                return Ok(());
            }
            // Name the friendly-landing case precisely; everything else is
            // just an illegal landing.
            if let (Some(t), Some(occ)) = (state.piece_at(thrown), state.piece_at(cell)) {
                if occ.owner == t.owner {
                    return Err(RuleViolation::TargetOccupiedByOwnSide);
                }
            }
            Err(RuleViolation::IllegalDestination)
        }
        _ => Err(RuleViolation::IllegalDestination),
    }
}
