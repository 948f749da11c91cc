use std::collections::BTreeSet;

use crate::board::PieceId;
use crate::types::Color;

/// Pieces still in play, per color.
///
/// Only captures change membership; moves and promotions leave it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayInventory {
    white: BTreeSet<PieceId>,
    black: BTreeSet<PieceId>,
}

impl PlayInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, color: Color, id: PieceId) -> bool {
        self.side_mut(color).insert(id)
    }

    /// Removes a captured piece. Returns `false` if it was not in play.
    pub fn remove(&mut self, color: Color, id: PieceId) -> bool {
        self.side_mut(color).remove(&id)
    }

    pub fn contains(&self, color: Color, id: PieceId) -> bool {
        self.side(color).contains(&id)
    }

    pub fn count(&self, color: Color) -> usize {
        self.side(color).len()
    }

    /// The side whose opponent has no pieces left.
    pub fn winner(&self) -> Option<Color> {
        [Color::White, Color::Black]
            .into_iter()
            .find(|&color| self.side(color).is_empty())
            .map(Color::opponent)
    }

    fn side(&self, color: Color) -> &BTreeSet<PieceId> {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn side_mut(&mut self, color: Color) -> &mut BTreeSet<PieceId> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}
