use crate::error::BoardError;
use crate::types::{BOARD_SIZE, Cell, CellView, Color, PieceView};

const SIZE: usize = BOARD_SIZE as usize;

/// Stable identity of a piece, used by the play inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    color: Color,
    promoted: bool,
    position: Cell,
}

impl Piece {
    /// Creates an unplaced piece. Its position is assigned by `Board::place`.
    pub fn new(id: PieceId, color: Color, origin: Cell) -> Self {
        Self {
            id,
            color,
            promoted: false,
            position: origin,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_promoted(&self) -> bool {
        self.promoted
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Promotes the piece. Returns `false` if it was already promoted.
    pub fn promote(&mut self) -> bool {
        let changed = !self.promoted;
        self.promoted = true;
        changed
    }

    pub fn view(&self) -> PieceView {
        PieceView {
            color: self.color,
            promoted: self.promoted,
        }
    }
}

/// 8x8 grid; each cell owns zero or one piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Resolves raw coordinates to a cell.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, BoardError> {
        Cell::new(x, y)
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> Result<bool, BoardError> {
        let cell = self.cell_at(x, y)?;
        Ok(self.piece_at(cell).is_some())
    }

    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        self.cells[cell.y() as usize][cell.x() as usize].as_ref()
    }

    /// Puts `piece` on `(x, y)` and moves its stored position there.
    /// Returns whatever previously occupied the cell.
    pub fn place(&mut self, piece: Piece, x: i32, y: i32) -> Result<Option<Piece>, BoardError> {
        let cell = self.cell_at(x, y)?;
        Ok(self.put(piece, cell))
    }

    /// Empties `(x, y)`, returning the piece that stood there.
    pub fn clear(&mut self, x: i32, y: i32) -> Result<Option<Piece>, BoardError> {
        let cell = self.cell_at(x, y)?;
        Ok(self.take(cell))
    }

    pub fn put(&mut self, mut piece: Piece, cell: Cell) -> Option<Piece> {
        piece.position = cell;
        self.slot_mut(cell).replace(piece)
    }

    pub fn take(&mut self, cell: Cell) -> Option<Piece> {
        self.slot_mut(cell).take()
    }

    /// Moves the occupant of `from` onto `to`, keeping its position in sync.
    pub fn relocate(&mut self, from: Cell, to: Cell) -> Option<&mut Piece> {
        let mut piece = self.slot_mut(from).take()?;
        piece.position = to;
        let slot = self.slot_mut(to);
        *slot = Some(piece);
        slot.as_mut()
    }

    /// All pieces on the board in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten().flatten()
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|piece| piece.color == color).count()
    }

    pub fn to_views(&self) -> Vec<CellView> {
        Cell::all()
            .map(|cell| CellView {
                x: cell.x(),
                y: cell.y(),
                dark: cell.is_dark(),
                piece: self.piece_at(cell).map(Piece::view),
            })
            .collect()
    }

    fn slot_mut(&mut self, cell: Cell) -> &mut Option<Piece> {
        &mut self.cells[cell.y() as usize][cell.x() as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
