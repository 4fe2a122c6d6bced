//! Move requests and rule-violation reasons.
//!
//! A `Move` is what a UI or AI collaborator proposes to the engine. Each
//! variant names the movement mode it claims, so the legality checker can
//! validate against exactly that mode's generator rather than the union.

use serde::{Deserialize, Serialize};

use crate::ability::AbilityKind;

use super::geometry::{Coord, Dir};
use super::piece::Side;

/// A proposed move for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// One step to an adjacent empty cell.
    Step { side: Side, from: Coord, to: Coord },

    /// Straight walk through a run of pieces to the first empty cell beyond.
    Phase { side: Side, from: Coord, to: Coord },

    /// Move into the neighborhood of a friendly elemental pair.
    Nexus { side: Side, from: Coord, to: Coord },

    /// Portal teleport along a golden-line rail.
    Rail { side: Side, from: Coord, to: Coord },

    /// Exchange with a friendly Portal; both cells are golden and occupied.
    Swap { side: Side, from: Coord, to: Coord },

    /// Activate a formation's ability in a given direction.
    /// `landing` is the chosen landing cell for Launch and `None` otherwise.
    Ability {
        side: Side,
        ability: AbilityKind,
        formation: [Coord; 2],
        dir: Dir,
        landing: Option<Coord>,
    },
}

impl Move {
    /// The side making the move.
    pub fn side(&self) -> Side {
        match *self {
            Move::Step { side, .. }
            | Move::Phase { side, .. }
            | Move::Nexus { side, .. }
            | Move::Rail { side, .. }
            | Move::Swap { side, .. }
            | Move::Ability { side, .. } => side,
        }
    }
}

/// Why a proposed move is not legal.
///
/// Expected rule violations are returned as values; the engine never panics
/// for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, Serialize, Deserialize)]
pub enum RuleViolation {
    #[error("destination is not legal for this move")]
    IllegalDestination,
    #[error("it is not this side's turn")]
    NotPlayersTurn,
    #[error("the origin piece does not belong to the moving side")]
    WrongPieceOwner,
    #[error("the named formation does not exist")]
    FormationNotFound,
    #[error("the requested direction has no available cast")]
    DirectionUnavailable,
    #[error("the landing cell holds a piece friendly to the thrown piece")]
    TargetOccupiedByOwnSide,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_side_extraction() {
        let mv = Move::Step {
            side: Side::B,
            from: Coord::new(0, 0),
            to: Coord::new(1, 1),
        };
        assert_eq!(mv.side(), Side::B);

        let ab = Move::Ability {
            side: Side::A,
            ability: AbilityKind::Sap,
            formation: [Coord::new(0, 0), Coord::new(4, 0)],
            dir: Dir::East,
            landing: None,
        };
        assert_eq!(ab.side(), Side::A);
    }

    #[test]
    fn violations_are_distinct() {
        assert_ne!(
            RuleViolation::IllegalDestination,
            RuleViolation::NotPlayersTurn
        );
        assert_ne!(
            RuleViolation::FormationNotFound,
            RuleViolation::DirectionUnavailable
        );
    }

    #[test]
    fn violation_messages_are_stable() {
        assert_eq!(
            RuleViolation::NotPlayersTurn.to_string(),
            "it is not this side's turn"
        );
    }
}
