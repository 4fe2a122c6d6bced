//! Game state representation.
//!
//! Holds the coordinate-to-piece mapping and the side to move. The state is
//! owned by the caller: every engine function borrows it, and the single
//! mutating operation (`resolve::apply_move`) clones it and returns the
//! successor, so search collaborators can probe hypothetical states freely.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::geometry::Coord;
use super::piece::{Piece, PieceKind, Side};

/// Complete board state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    // Serialized as a sorted pair list: JSON maps take string keys only.
    #[serde(with = "piece_list")]
    pieces: HashMap<Coord, Piece>,
    pub side_to_move: Side,
}

mod piece_list {
    use super::{Coord, HashMap, Piece};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        map: &HashMap<Coord, Piece>,
        ser: S,
    ) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(Coord, Piece)> = map.iter().map(|(&c, &p)| (c, p)).collect();
        entries.sort_by_key(|&(c, _)| c);
        entries.serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        de: D,
    ) -> Result<HashMap<Coord, Piece>, D::Error> {
        let entries = Vec::<(Coord, Piece)>::deserialize(de)?;
        Ok(entries.into_iter().collect())
    }
}

impl BoardState {
    /// Creates an empty board with the given side to move.
    pub fn empty(side_to_move: Side) -> Self {
        BoardState {
            pieces: HashMap::new(),
            side_to_move,
        }
    }

    /// The piece at a coordinate, if any.
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.pieces.get(&coord).copied()
    }

    /// True if no piece occupies the coordinate.
    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        !self.pieces.contains_key(&coord)
    }

    /// Places a piece. Returns false if the cell is already occupied.
    pub fn place(&mut self, coord: Coord, piece: Piece) -> bool {
        if self.pieces.contains_key(&coord) {
            return false;
        }
        self.pieces.insert(coord, piece);
        true
    }

    /// Removes and returns the piece at a coordinate.
    pub fn remove(&mut self, coord: Coord) -> Option<Piece> {
        self.pieces.remove(&coord)
    }

    /// Moves the piece at `from` to the empty cell `to`.
    /// Returns false if `from` is empty or `to` is occupied.
    pub fn relocate(&mut self, from: Coord, to: Coord) -> bool {
        if self.pieces.contains_key(&to) {
            return false;
        }
        match self.pieces.remove(&from) {
            Some(piece) => {
                self.pieces.insert(to, piece);
                true
            }
            None => false,
        }
    }

    /// Exchanges the pieces at two occupied cells.
    /// Returns false if either cell is empty.
    pub fn swap(&mut self, a: Coord, b: Coord) -> bool {
        let (pa, pb) = match (self.pieces.get(&a), self.pieces.get(&b)) {
            (Some(&pa), Some(&pb)) => (pa, pb),
            _ => return false,
        };
        self.pieces.insert(a, pb);
        self.pieces.insert(b, pa);
        true
    }

    /// Iterates over all pieces with their coordinates in unspecified order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.pieces.iter().map(|(&c, &p)| (c, p))
    }

    /// The coordinates of a side's pieces of a given kind.
    pub fn find_all(&self, side: Side, kind: PieceKind) -> Vec<Coord> {
        self.pieces()
            .filter(|(_, p)| p.owner == side && p.kind == kind)
            .map(|(c, _)| c)
            .collect()
    }

    /// Counts a side's pieces, Portals excluded.
    pub fn non_portal_count(&self, side: Side) -> usize {
        self.pieces()
            .filter(|(_, p)| p.owner == side && p.kind != PieceKind::Portal)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn empty_state_has_no_pieces() {
        let state = BoardState::empty(Side::A);
        assert_eq!(state.pieces().count(), 0);
        assert_eq!(state.side_to_move, Side::A);
    }

    #[test]
    fn place_rejects_occupied_cell() {
        let mut state = BoardState::empty(Side::A);
        assert!(state.place(coord(2, 2), Piece::new(Side::A, PieceKind::Ruby)));
        assert!(!state.place(coord(2, 2), Piece::new(Side::B, PieceKind::Pearl)));
        assert_eq!(
            state.piece_at(coord(2, 2)),
            Some(Piece::new(Side::A, PieceKind::Ruby))
        );
    }

    #[test]
    fn relocate_moves_piece() {
        let mut state = BoardState::empty(Side::A);
        state.place(coord(1, 1), Piece::new(Side::A, PieceKind::Jade));
        assert!(state.relocate(coord(1, 1), coord(2, 2)));
        assert!(state.is_empty_cell(coord(1, 1)));
        assert_eq!(
            state.piece_at(coord(2, 2)),
            Some(Piece::new(Side::A, PieceKind::Jade))
        );
    }

    #[test]
    fn relocate_rejects_occupied_destination() {
        let mut state = BoardState::empty(Side::A);
        state.place(coord(1, 1), Piece::new(Side::A, PieceKind::Jade));
        state.place(coord(2, 2), Piece::new(Side::B, PieceKind::Ruby));
        assert!(!state.relocate(coord(1, 1), coord(2, 2)));
        assert!(state.piece_at(coord(1, 1)).is_some());
    }

    #[test]
    fn swap_exchanges_pieces() {
        let mut state = BoardState::empty(Side::A);
        state.place(coord(0, 0), Piece::new(Side::A, PieceKind::Void));
        state.place(coord(5, 5), Piece::new(Side::A, PieceKind::Portal));
        assert!(state.swap(coord(0, 0), coord(5, 5)));
        assert_eq!(state.piece_at(coord(0, 0)).unwrap().kind, PieceKind::Portal);
        assert_eq!(state.piece_at(coord(5, 5)).unwrap().kind, PieceKind::Void);
    }

    #[test]
    fn swap_requires_both_cells_occupied() {
        let mut state = BoardState::empty(Side::A);
        state.place(coord(0, 0), Piece::new(Side::A, PieceKind::Void));
        assert!(!state.swap(coord(0, 0), coord(5, 5)));
    }

    #[test]
    fn find_all_filters_by_side_and_kind() {
        let mut state = BoardState::empty(Side::A);
        state.place(coord(1, 1), Piece::new(Side::A, PieceKind::Void));
        state.place(coord(2, 2), Piece::new(Side::B, PieceKind::Void));
        state.place(coord(3, 3), Piece::new(Side::A, PieceKind::Ruby));

        assert_eq!(state.find_all(Side::A, PieceKind::Void), vec![coord(1, 1)]);
        assert_eq!(state.find_all(Side::B, PieceKind::Ruby), Vec::<Coord>::new());
    }

    #[test]
    fn non_portal_count_ignores_portals() {
        let mut state = BoardState::empty(Side::A);
        state.place(coord(0, 0), Piece::new(Side::B, PieceKind::Portal));
        state.place(coord(1, 0), Piece::new(Side::B, PieceKind::Portal));
        state.place(coord(2, 0), Piece::new(Side::B, PieceKind::Void));
        assert_eq!(state.non_portal_count(Side::B), 1);
        assert_eq!(state.non_portal_count(Side::A), 0);
    }
}
