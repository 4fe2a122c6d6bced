//! Legal move generation.
//!
//! Each movement mode has its own generator so the legality checker can
//! validate a move against exactly the mode it claims; `legal_destinations`
//! is their union. All generators are pure over the passed state.

pub mod nexus;
pub mod portal;
pub mod walk;

use std::collections::HashSet;

use rand::Rng;

use crate::ability::available_abilities;
use crate::board::{BoardState, BoardTopology, Coord, Move, Side};

pub use nexus::nexus_destinations;
pub use portal::{rail_destinations, swap_destinations};
pub use walk::{phase_destinations, step_destinations};

/// Every coordinate the piece at `from` may move to, across all five modes.
///
/// Swap destinations are the only occupied members of the set.
pub fn legal_destinations(
    topo: &BoardTopology,
    state: &BoardState,
    from: Coord,
) -> HashSet<Coord> {
    let mut dests = step_destinations(topo, state, from);
    dests.extend(phase_destinations(topo, state, from));
    dests.extend(nexus_destinations(topo, state, from));
    dests.extend(rail_destinations(topo, state, from));
    dests.extend(swap_destinations(topo, state, from));
    dests
}

/// Every legal move for the given side, including one ability move per
/// available cast (and per landing, for Launch).
///
/// Output order is deterministic for a given state.
pub fn legal_moves(topo: &BoardTopology, state: &BoardState, side: Side) -> Vec<Move> {
    let mut origins: Vec<Coord> = state
        .pieces()
        .filter(|(_, p)| p.owner == side)
        .map(|(c, _)| c)
        .collect();
    origins.sort();

    let mut moves = Vec::new();
    for from in origins {
        push_mode(&mut moves, side, from, step_destinations(topo, state, from), |side, from, to| {
            Move::Step { side, from, to }
        });
        push_mode(&mut moves, side, from, phase_destinations(topo, state, from), |side, from, to| {
            Move::Phase { side, from, to }
        });
        push_mode(&mut moves, side, from, nexus_destinations(topo, state, from), |side, from, to| {
            Move::Nexus { side, from, to }
        });
        push_mode(&mut moves, side, from, rail_destinations(topo, state, from), |side, from, to| {
            Move::Rail { side, from, to }
        });
        push_mode(&mut moves, side, from, swap_destinations(topo, state, from), |side, from, to| {
            Move::Swap { side, from, to }
        });
    }

    for option in available_abilities(topo, state, side) {
        for cast in &option.casts {
            match &cast.effect {
                crate::ability::CastEffect::Targets(_) => moves.push(Move::Ability {
                    side,
                    ability: option.ability,
                    formation: option.formation.members,
                    dir: cast.dir,
                    landing: None,
                }),
                crate::ability::CastEffect::Throw { landings, .. } => {
                    for &landing in landings {
                        moves.push(Move::Ability {
                            side,
                            ability: option.ability,
                            formation: option.formation.members,
                            dir: cast.dir,
                            landing: Some(landing),
                        });
                    }
                }
            }
        }
    }
    moves
}

fn push_mode(
    moves: &mut Vec<Move>,
    side: Side,
    from: Coord,
    dests: HashSet<Coord>,
    make: impl Fn(Side, Coord, Coord) -> Move,
) {
    let mut dests: Vec<Coord> = dests.into_iter().collect();
    dests.sort();
    for to in dests {
        moves.push(make(side, from, to));
    }
}

/// Picks a uniformly random legal move for the side, if any exists.
/// A fallback hook for search/AI collaborators.
pub fn random_move(
    topo: &BoardTopology,
    state: &BoardState,
    side: Side,
    rng: &mut impl Rng,
) -> Option<Move> {
    let moves = legal_moves(topo, state, side);
    if moves.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..moves.len());
    Some(moves[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn coord(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn union_covers_all_modes() {
        let topo = BoardTopology::standard();
        let mut state = BoardState::empty(Side::A);
        // A Ruby on the golden center with a friendly Portal on a golden
        // corner: steps plus a swap.
        state.place(coord(5, 5), Piece::new(Side::A, PieceKind::Ruby));
        state.place(coord(0, 0), Piece::new(Side::A, PieceKind::Portal));

        let dests = legal_destinations(&topo, &state, coord(5, 5));
        assert!(dests.contains(&coord(4, 4))); // step
        assert!(dests.contains(&coord(0, 0))); // swap
    }

    #[test]
    fn destinations_of_empty_origin_are_empty() {
        let topo = BoardTopology::standard();
        let state = BoardState::empty(Side::A);
        assert!(legal_destinations(&topo, &state, coord(5, 5)).is_empty());
    }

    #[test]
    fn idempotent_on_unchanged_state() {
        let topo = BoardTopology::standard();
        let mut state = BoardState::empty(Side::A);
        state.place(coord(3, 3), Piece::new(Side::A, PieceKind::Jade));
        state.place(coord(4, 3), Piece::new(Side::B, PieceKind::Ruby));

        let first = legal_destinations(&topo, &state, coord(3, 3));
        let second = legal_destinations(&topo, &state, coord(3, 3));
        assert_eq!(first, second);
    }

    #[test]
    fn legal_moves_only_for_own_side() {
        let topo = BoardTopology::standard();
        let mut state = BoardState::empty(Side::A);
        state.place(coord(3, 3), Piece::new(Side::A, PieceKind::Ruby));
        state.place(coord(8, 8), Piece::new(Side::B, PieceKind::Pearl));

        let moves = legal_moves(&topo, &state, Side::A);
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.side() == Side::A));
        assert!(moves.iter().all(|m| match *m {
            Move::Step { from, .. } => from == coord(3, 3),
            _ => true,
        }));
    }

    #[test]
    fn legal_moves_include_ability_casts() {
        let topo = BoardTopology::standard();
        let mut state = BoardState::empty(Side::A);
        state.place(coord(2, 2), Piece::new(Side::A, PieceKind::Ruby));
        state.place(coord(3, 2), Piece::new(Side::A, PieceKind::Ruby));
        state.place(coord(5, 2), Piece::new(Side::B, PieceKind::Jade));

        let moves = legal_moves(&topo, &state, Side::A);
        assert!(moves
            .iter()
            .any(|m| matches!(m, Move::Ability { .. })));
    }

    #[test]
    fn random_move_is_legal_and_deterministic_per_seed() {
        let topo = BoardTopology::standard();
        let mut state = BoardState::empty(Side::A);
        state.place(coord(3, 3), Piece::new(Side::A, PieceKind::Ruby));
        state.place(coord(4, 3), Piece::new(Side::A, PieceKind::Pearl));

        let all = legal_moves(&topo, &state, Side::A);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mv = random_move(&topo, &state, Side::A, &mut rng).unwrap();
            assert!(all.contains(&mv));
        }

        let a = random_move(&topo, &state, Side::A, &mut StdRng::seed_from_u64(7));
        let b = random_move(&topo, &state, Side::A, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn random_move_none_without_pieces() {
        let topo = BoardTopology::standard();
        let state = BoardState::empty(Side::A);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_move(&topo, &state, Side::A, &mut rng).is_none());
    }
}
