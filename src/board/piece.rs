//! Piece kinds and ownership.
//!
//! Each side fields the five elemental kinds plus a Void and one or more
//! Portals. Kind-specific behavior (capture immunity, movement restrictions,
//! ability eligibility) is decided by exhaustive matches on `PieceKind`.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

/// Both sides in fixed order.
pub const ALL_SIDES: [Side; 2] = [Side::A, Side::B];

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// The kind of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Ruby,
    Pearl,
    Amber,
    Jade,
    Amalgam,
    Void,
    Portal,
}

impl PieceKind {
    /// True for the five kinds that anchor nexus movement and form abilities.
    pub const fn is_elemental(self) -> bool {
        match self {
            PieceKind::Ruby
            | PieceKind::Pearl
            | PieceKind::Amber
            | PieceKind::Jade
            | PieceKind::Amalgam => true,
            PieceKind::Void | PieceKind::Portal => false,
        }
    }
}

/// A piece on the board. Its coordinate is the key it is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(owner: Side, kind: PieceKind) -> Self {
        Piece { owner, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involutive() {
        for side in ALL_SIDES {
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn elemental_kinds() {
        assert!(PieceKind::Ruby.is_elemental());
        assert!(PieceKind::Amalgam.is_elemental());
        assert!(!PieceKind::Void.is_elemental());
        assert!(!PieceKind::Portal.is_elemental());
    }
}
