//! Win detection.

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, BoardTopology, PieceKind, Side, ALL_SIDES};

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Victory {
    /// The side's Void reached the opponent's home anchor.
    Objective,
    /// The opponent has no non-Portal pieces left.
    Elimination,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    pub winner: Side,
    pub victory: Victory,
}

/// Checks the position for a decided game. Objective wins take precedence
/// over elimination; within each rule side A is checked before side B.
pub fn evaluate_win(topo: &BoardTopology, state: &BoardState) -> Option<Win> {
    for side in ALL_SIDES {
        let anchor = topo.home_anchor(side.opponent());
        if state.find_all(side, PieceKind::Void).contains(&anchor) {
            return Some(Win {
                winner: side,
                victory: Victory::Objective,
            });
        }
    }
    for side in ALL_SIDES {
        if state.non_portal_count(side) == 0 {
            return Some(Win {
                winner: side.opponent(),
                victory: Victory::Elimination,
            });
        }
    }
    None
}
