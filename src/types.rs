use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

pub const BOARD_SIZE: u8 = 8;
/// Rows filled per side in the opening position.
pub const STARTING_ROWS: u8 = 3;

/// Side of the game. White starts on rows 0..3 and moves first.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[display("white")]
    White,
    #[display("black")]
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row direction a non-promoted piece of this color advances in.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row on which a piece of this color is promoted.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => BOARD_SIZE - 1,
            Color::Black => 0,
        }
    }

    /// Side to move once `round` moves have been completed.
    pub fn for_round(round: u32) -> Self {
        if round % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}

/// A board coordinate, always inside the 8x8 grid.
///
/// `x` is the column and `y` the row; white's home rows are at small `y`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[display("({x}, {y})")]
pub struct Cell {
    x: u8,
    y: u8,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Result<Self, BoardError> {
        let size = i32::from(BOARD_SIZE);
        if !(0..size).contains(&x) || !(0..size).contains(&y) {
            return Err(BoardError::OutOfBounds { x, y });
        }
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Dark squares are the only ones pieces may occupy.
    pub fn is_dark(self) -> bool {
        (self.x + self.y) % 2 == 1
    }

    /// The cell `steps` diagonal steps away along `(dx, dy)`, if on the board.
    pub fn step(self, dx: i8, dy: i8, steps: i8) -> Option<Cell> {
        let x = i32::from(self.x) + i32::from(dx) * i32::from(steps);
        let y = i32::from(self.y) + i32::from(dy) * i32::from(steps);
        Cell::new(x, y).ok()
    }

    /// The cell halfway between `self` and `other`, for a two-step jump.
    pub fn midpoint(self, other: Cell) -> Option<Cell> {
        let dx = i32::from(other.x) - i32::from(self.x);
        let dy = i32::from(other.y) - i32::from(self.y);
        if dx.abs() != 2 || dy.abs() != 2 {
            return None;
        }
        Cell::new(i32::from(self.x) + dx / 2, i32::from(self.y) + dy / 2).ok()
    }

    /// All 64 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Cell { x, y }))
    }
}

/// One piece on a start position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub color: Color,
    #[serde(default)]
    pub promoted: bool,
}

/// Start position supplied by the host. Validated by `GameInstance::from_setup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setup {
    pub pieces: Vec<Placement>,
}

impl Setup {
    /// The opening position: twelve pieces per side on the dark squares
    /// of the three rows nearest each player.
    pub fn standard() -> Self {
        let pieces = Cell::all()
            .filter_map(|cell| {
                starting_color(cell).map(|color| Placement {
                    x: i32::from(cell.x()),
                    y: i32::from(cell.y()),
                    color,
                    promoted: false,
                })
            })
            .collect();
        Self { pieces }
    }
}

/// Owner of `cell` in the opening position, if any.
pub fn starting_color(cell: Cell) -> Option<Color> {
    if !cell.is_dark() {
        None
    } else if cell.y() < STARTING_ROWS {
        Some(Color::White)
    } else if cell.y() >= BOARD_SIZE - STARTING_ROWS {
        Some(Color::Black)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub color: Color,
    pub promoted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub x: u8,
    pub y: u8,
    pub dark: bool,
    pub piece: Option<PieceView>,
}

/// Summary of the last applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub color: Color,
    pub from: Cell,
    pub to: Cell,
    /// Cell the removed enemy piece stood on, for a jump.
    pub captured: Option<Cell>,
    /// `true` when this move promoted the piece.
    pub promoted: bool,
}

/// Snapshot handed to the renderer every frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub cells: Vec<CellView>,
    pub current_player: Color,
    pub selected: Option<Cell>,
    pub destinations: Vec<Cell>,
    pub round: u32,
    pub white_count: u8,
    pub black_count: u8,
    pub winner: Option<Color>,
    pub last_move: Option<MoveRecord>,
}
