use crate::board::{Board, Piece};
use crate::types::Cell;

const COLUMN_STEPS: [i8; 2] = [-1, 1];
const BOTH_ROWS: [i8; 2] = [1, -1];

/// A legal arrival cell for a selected piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub cell: Cell,
    /// Enemy piece jumped over to get here.
    pub captured: Option<Cell>,
}

impl Destination {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Legal destinations for `piece` on `board`: one-step diagonal moves onto
/// empty cells and single jumps over an adjacent enemy piece.
///
/// Only one capture step is considered per call; chained jumps are not
/// searched. Pure function of its inputs.
pub fn available_moves(piece: &Piece, board: &Board) -> Vec<Destination> {
    let origin = piece.position();
    let forward = [piece.color().forward()];
    let rows: &[i8] = if piece.is_promoted() {
        &BOTH_ROWS
    } else {
        &forward
    };

    let mut moves = Vec::with_capacity(4);
    for &dy in rows {
        for dx in COLUMN_STEPS {
            if let Some(destination) = probe(piece, board, origin, dx, dy) {
                moves.push(destination);
            }
        }
    }
    moves
}

fn probe(piece: &Piece, board: &Board, origin: Cell, dx: i8, dy: i8) -> Option<Destination> {
    let adjacent = origin.step(dx, dy, 1)?;
    match board.piece_at(adjacent) {
        None => Some(Destination {
            cell: adjacent,
            captured: None,
        }),
        Some(blocker) if blocker.color() != piece.color() => {
            let landing = origin.step(dx, dy, 2)?;
            board.piece_at(landing).is_none().then_some(Destination {
                cell: landing,
                captured: Some(adjacent),
            })
        }
        Some(_) => None,
    }
}
