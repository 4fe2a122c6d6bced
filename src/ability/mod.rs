//! Ability detection and targeting.
//!
//! A formation is a transient pair of ability-compatible, same-owner pieces:
//! 8-adjacent for Fireball, Tidal Wave, and Launch; merely collinear for Sap.
//! Detection and targeting are pure; execution lives in `resolve::apply` so
//! search collaborators can explore ability options without committing them.
//!
//! Amplification: a friendly Void one step beyond a formation endpoint (for
//! Sap, anywhere on the main line) extends an ability's range or area and
//! lifts the Portal immunity its targets normally enjoy.

pub mod fireball;
pub mod launch;
pub mod sap;
pub mod wave;

use serde::{Deserialize, Serialize};

use crate::board::geometry::HALF_DIRS;
use crate::board::{BoardState, BoardTopology, Coord, Dir, PieceKind, Side};

/// The four elemental abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    Fireball,
    TidalWave,
    Sap,
    Launch,
}

/// All abilities in fixed order.
pub const ALL_ABILITIES: [AbilityKind; 4] = [
    AbilityKind::Fireball,
    AbilityKind::TidalWave,
    AbilityKind::Sap,
    AbilityKind::Launch,
];

impl AbilityKind {
    /// True if a piece of this kind can be half of the ability's formation.
    /// Amalgam stands in for Ruby and Pearl.
    pub const fn qualifies(self, kind: PieceKind) -> bool {
        match self {
            AbilityKind::Fireball => matches!(kind, PieceKind::Ruby | PieceKind::Amalgam),
            AbilityKind::TidalWave => matches!(kind, PieceKind::Pearl | PieceKind::Amalgam),
            AbilityKind::Sap => matches!(kind, PieceKind::Amber),
            AbilityKind::Launch => matches!(kind, PieceKind::Jade),
        }
    }

    /// True if the formation pair must be 8-adjacent (all but Sap).
    const fn requires_adjacency(self) -> bool {
        !matches!(self, AbilityKind::Sap)
    }
}

/// A detected formation: two qualifying pieces of one owner with the
/// direction from the first member to the second. Computed, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    pub owner: Side,
    pub members: [Coord; 2],
    pub dir: Dir,
}

impl Formation {
    /// The two outward casts: each endpoint with its outward direction.
    pub fn endpoints(&self) -> [(Coord, Dir); 2] {
        [
            (self.members[1], self.dir),
            (self.members[0], self.dir.opposite()),
        ]
    }

    /// The member that is not the given endpoint.
    pub fn other_member(&self, endpoint: Coord) -> Coord {
        if endpoint == self.members[0] {
            self.members[1]
        } else {
            self.members[0]
        }
    }

    /// Unordered member comparison, for matching a move request's formation.
    pub fn has_members(&self, members: [Coord; 2]) -> bool {
        self.members == members || self.members == [members[1], members[0]]
    }
}

/// What executing one cast does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastEffect {
    /// Pieces removed from the board.
    Targets(Vec<Coord>),
    /// The piece at `thrown` relocates to one of `landings`.
    Throw { thrown: Coord, landings: Vec<Coord> },
}

/// One available activation direction of a formation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cast {
    pub dir: Dir,
    pub amplified: bool,
    pub effect: CastEffect,
}

/// A formation together with its currently castable directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityOption {
    pub ability: AbilityKind,
    pub formation: Formation,
    pub casts: Vec<Cast>,
}

/// True if the owner's Void stands on the given cell.
pub(crate) fn is_friendly_void(state: &BoardState, owner: Side, cell: Coord) -> bool {
    state.piece_at(cell) == Some(crate::board::Piece::new(owner, PieceKind::Void))
}

/// Detects every formation of the given ability for one side.
///
/// Pairs are reported once, ordered by their first member's coordinate so
/// output is deterministic.
pub fn find_formations(
    topo: &BoardTopology,
    state: &BoardState,
    side: Side,
    ability: AbilityKind,
) -> Vec<Formation> {
    let mut anchors: Vec<Coord> = state
        .pieces()
        .filter(|(_, p)| p.owner == side && ability.qualifies(p.kind))
        .map(|(c, _)| c)
        .collect();
    anchors.sort();

    let mut formations = Vec::new();
    for &from in &anchors {
        for dir in HALF_DIRS {
            if ability.requires_adjacency() {
                let partner = from.offset(dir);
                if is_qualifying(state, side, ability, partner) {
                    formations.push(Formation {
                        owner: side,
                        members: [from, partner],
                        dir,
                    });
                }
            } else {
                // Sap pairs need only be collinear; pieces may sit between.
                for k in 1..=topo.extent() {
                    let partner = from.step(dir, k);
                    if !topo.contains(partner) {
                        break;
                    }
                    if is_qualifying(state, side, ability, partner) {
                        formations.push(Formation {
                            owner: side,
                            members: [from, partner],
                            dir,
                        });
                    }
                }
            }
        }
    }
    formations
}

fn is_qualifying(state: &BoardState, side: Side, ability: AbilityKind, cell: Coord) -> bool {
    matches!(state.piece_at(cell), Some(p) if p.owner == side && ability.qualifies(p.kind))
}

/// Computes the castable directions of one formation. Only casts with at
/// least one target or landing are returned.
pub fn casts_for(
    topo: &BoardTopology,
    state: &BoardState,
    ability: AbilityKind,
    formation: &Formation,
) -> Vec<Cast> {
    match ability {
        AbilityKind::Fireball => fireball::casts(topo, state, formation),
        AbilityKind::TidalWave => wave::casts(topo, state, formation),
        AbilityKind::Sap => sap::casts(topo, state, formation),
        AbilityKind::Launch => launch::casts(topo, state, formation),
    }
}

/// Every ability activation currently available to the given side.
///
/// Recomputed from scratch on every call: resolvers are pure and cheap, so
/// no direction is ever left stale or pending.
pub fn available_abilities(
    topo: &BoardTopology,
    state: &BoardState,
    side: Side,
) -> Vec<AbilityOption> {
    let mut options = Vec::new();
    for ability in ALL_ABILITIES {
        for formation in find_formations(topo, state, side, ability) {
            let casts = casts_for(topo, state, ability, &formation);
            if !casts.is_empty() {
                options.push(AbilityOption {
                    ability,
                    formation,
                    casts,
                });
            }
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn coord(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn place(state: &mut BoardState, x: i32, y: i32, side: Side, kind: PieceKind) {
        state.place(coord(x, y), Piece::new(side, kind));
    }

    #[test]
    fn adjacent_rubies_form_fireball() {
        let topo = BoardTopology::standard();
        let mut state = BoardState::empty(Side::A);
        place(&mut state, 2, 2, Side::A, PieceKind::Ruby);
        place(&mut state, 3, 2, Side::A, PieceKind::Ruby);

        let fs = find_formations(&topo, &state, Side::A, AbilityKind::Fireball);
        assert_eq!(fs.len(), 1);
        assert!(fs[0].has_members([coord(3, 2), coord(2, 2)]));
        assert_eq!(fs[0].dir, Dir::East);
    }

    #[test]
    fn amalgam_pairs_with_ruby_and_pearl() {
        let topo = BoardTopology::standard();
        let mut state = BoardState::empty(Side::A);
        place(&mut state, 2, 2, Side::A, PieceKind::Amalgam);
        place(&mut state, 3, 2, Side::A, PieceKind::Ruby);
        place(&mut state, 2, 3, Side::A, PieceKind::Pearl);

        assert_eq!(
            find_formations(&topo, &state, Side::A, AbilityKind::Fireball).len(),
            1
        );
        assert_eq!(
            find_formations(&topo, &state, Side::A, AbilityKind::TidalWave).len(),
            1
        );
        // Amalgam does not stand in for Amber or Jade.
        assert!(find_formations(&topo, &state, Side::A, AbilityKind::Sap).is_empty());
        assert!(find_formations(&topo, &state, Side::A, AbilityKind::Launch).is_empty());
    }

    #[test]
    fn separated_pieces_form_no_adjacent_formation() {
        let topo = BoardTopology::standard();
        let mut state = BoardState::empty(Side::A);
        place(&mut state, 2, 2, Side::A, PieceKind::Jade);
        place(&mut state, 4, 2, Side::A, PieceKind::Jade);

        assert!(find_formations(&topo, &state, Side::A, AbilityKind::Launch).is_empty());
    }

    #[test]
    fn sap_formation_across_distance() {
        let topo = BoardTopology::standard();
        let mut state = BoardState::empty(Side::A);
        place(&mut state, 1, 1, Side::A, PieceKind::Amber);
        place(&mut state, 6, 6, Side::A, PieceKind::Amber);

        let fs = find_formations(&topo, &state, Side::A, AbilityKind::Sap);
        assert_eq!(fs.len(), 1);
        assert_eq!(fs[0].dir, Dir::NorthEast);
    }

    #[test]
    fn sap_requires_collinearity() {
        let topo = BoardTopology::standard();
        let mut state = BoardState::empty(Side::A);
        place(&mut state, 1, 1, Side::A, PieceKind::Amber);
        place(&mut state, 5, 2, Side::A, PieceKind::Amber);

        assert!(find_formations(&topo, &state, Side::A, AbilityKind::Sap).is_empty());
    }

    #[test]
    fn mixed_sides_never_form() {
        let topo = BoardTopology::standard();
        let mut state = BoardState::empty(Side::A);
        place(&mut state, 2, 2, Side::A, PieceKind::Ruby);
        place(&mut state, 3, 2, Side::B, PieceKind::Ruby);

        assert!(find_formations(&topo, &state, Side::A, AbilityKind::Fireball).is_empty());
        assert!(find_formations(&topo, &state, Side::B, AbilityKind::Fireball).is_empty());
    }

    #[test]
    fn options_omit_formations_without_targets() {
        let topo = BoardTopology::standard();
        let mut state = BoardState::empty(Side::A);
        place(&mut state, 2, 2, Side::A, PieceKind::Ruby);
        place(&mut state, 3, 2, Side::A, PieceKind::Ruby);

        // No enemy anywhere: the formation exists but offers no casts.
        assert!(available_abilities(&topo, &state, Side::A).is_empty());
    }

    #[test]
    fn endpoints_point_outward() {
        let f = Formation {
            owner: Side::A,
            members: [coord(2, 2), coord(3, 2)],
            dir: Dir::East,
        };
        let [(e1, d1), (e0, d0)] = f.endpoints();
        assert_eq!((e1, d1), (coord(3, 2), Dir::East));
        assert_eq!((e0, d0), (coord(2, 2), Dir::West));
        assert_eq!(f.other_member(coord(3, 2)), coord(2, 2));
    }
}
