use tracing::{debug, info, instrument};

use crate::board::{Board, Piece, PieceId};
use crate::error::BoardError;
use crate::inventory::PlayInventory;
use crate::movegen::{Destination, available_moves};
use crate::types::{Cell, Color, GameState, MoveRecord, Setup, starting_color};

/// Turn controller phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected {
        piece: Cell,
        destinations: Vec<Destination>,
    },
}

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Selected {
        cell: Cell,
        destinations: Vec<Destination>,
    },
    Deselected,
    Moved(MoveRecord),
}

pub struct GameInstance {
    board: Board,
    inventory: PlayInventory,
    selection: Selection,
    round: u32,
    last_move: Option<MoveRecord>,
}

impl GameInstance {
    /// A game in the standard opening position.
    pub fn new() -> Self {
        let mut game = Self::empty();
        let opening = Cell::all().filter_map(|cell| starting_color(cell).map(|color| (cell, color)));
        for (idx, (cell, color)) in opening.enumerate() {
            game.add_piece(PieceId(idx as u8), color, cell, false);
        }
        game
    }

    /// A game starting from a host-supplied position. White moves first.
    #[instrument(skip(setup), fields(pieces = setup.pieces.len()))]
    pub fn from_setup(setup: &Setup) -> Result<Self, BoardError> {
        let mut game = Self::empty();
        for (idx, placement) in setup.pieces.iter().enumerate() {
            let cell = game.board.cell_at(placement.x, placement.y)?;
            if !cell.is_dark() {
                return Err(BoardError::LightCell {
                    x: cell.x(),
                    y: cell.y(),
                });
            }
            if game.board.piece_at(cell).is_some() {
                return Err(BoardError::Occupied {
                    x: cell.x(),
                    y: cell.y(),
                });
            }
            // Placements are distinct dark cells here, so at most 32 of them.
            game.add_piece(PieceId(idx as u8), placement.color, cell, placement.promoted);
        }
        debug!(
            white = game.inventory.count(Color::White),
            black = game.inventory.count(Color::Black),
            "custom setup loaded"
        );
        Ok(game)
    }

    /// Entry point for the input collaborator. Coordinates are board cells.
    #[instrument(skip(self), fields(player = %self.current_player(), round = self.round))]
    pub fn on_cell_clicked(&mut self, x: i32, y: i32) -> ClickOutcome {
        if let Some(winner) = self.winner() {
            debug!(%winner, "game is over; click ignored");
            return ClickOutcome::Ignored;
        }
        let Ok(clicked) = self.board.cell_at(x, y) else {
            debug!("click outside the board ignored");
            return ClickOutcome::Ignored;
        };

        let player = self.current_player();
        if let Some(piece) = self.board.piece_at(clicked)
            && piece.color() == player
        {
            if self.selected() == Some(clicked) {
                self.selection = Selection::Idle;
                debug!(cell = %clicked, "piece deselected");
                return ClickOutcome::Deselected;
            }
            let destinations = available_moves(piece, &self.board);
            debug!(cell = %clicked, moves = destinations.len(), "piece selected");
            self.selection = Selection::Selected {
                piece: clicked,
                destinations: destinations.clone(),
            };
            return ClickOutcome::Selected {
                cell: clicked,
                destinations,
            };
        }

        let chosen = match &self.selection {
            Selection::Selected {
                piece,
                destinations,
            } => destinations
                .iter()
                .find(|d| d.cell == clicked)
                .map(|d| (*piece, *d)),
            Selection::Idle => None,
        };
        match chosen {
            Some((from, destination)) => match self.apply_move(from, destination) {
                Some(record) => ClickOutcome::Moved(record),
                None => ClickOutcome::Ignored,
            },
            None => {
                debug!(cell = %clicked, "click ignored");
                ClickOutcome::Ignored
            }
        }
    }

    /// Side to move: white on even rounds, black on odd.
    pub fn current_player(&self) -> Color {
        Color::for_round(self.round)
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn inventory(&self) -> &PlayInventory {
        &self.inventory
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected(&self) -> Option<Cell> {
        match &self.selection {
            Selection::Selected { piece, .. } => Some(*piece),
            Selection::Idle => None,
        }
    }

    /// Highlighted destinations of the current selection; empty when idle.
    pub fn destinations(&self) -> &[Destination] {
        match &self.selection {
            Selection::Selected { destinations, .. } => destinations,
            Selection::Idle => &[],
        }
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.last_move
    }

    /// Winner once one side has no pieces left.
    pub fn winner(&self) -> Option<Color> {
        self.inventory.winner()
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            cells: self.board.to_views(),
            current_player: self.current_player(),
            selected: self.selected(),
            destinations: self.destinations().iter().map(|d| d.cell).collect(),
            round: self.round,
            white_count: self.inventory.count(Color::White) as u8,
            black_count: self.inventory.count(Color::Black) as u8,
            winner: self.winner(),
            last_move: self.last_move,
        }
    }

    fn empty() -> Self {
        Self {
            board: Board::new(),
            inventory: PlayInventory::new(),
            selection: Selection::Idle,
            round: 0,
            last_move: None,
        }
    }

    fn add_piece(&mut self, id: PieceId, color: Color, cell: Cell, promoted: bool) {
        let mut piece = Piece::new(id, color, cell);
        if promoted {
            piece.promote();
        }
        self.board.put(piece, cell);
        self.inventory.insert(color, id);
    }

    /// Moves the selected piece, removing a jumped enemy and promoting on
    /// the far row, then hands the turn over.
    fn apply_move(&mut self, from: Cell, destination: Destination) -> Option<MoveRecord> {
        let color = self.board.piece_at(from)?.color();
        let to = destination.cell;

        let captured = from.midpoint(to);
        if let Some(mid) = captured
            && let Some(victim) = self.board.take(mid)
        {
            self.inventory.remove(victim.color(), victim.id());
            info!(
                cell = %mid,
                remaining = self.inventory.count(victim.color()),
                "{} piece captured",
                victim.color()
            );
        }

        let piece = self.board.relocate(from, to)?;
        let promoted = to.y() == color.promotion_row() && piece.promote();
        if promoted {
            info!(cell = %to, "{color} piece promoted");
        }

        let record = MoveRecord {
            color,
            from,
            to,
            captured,
            promoted,
        };
        self.selection = Selection::Idle;
        self.round += 1;
        self.last_move = Some(record);
        info!(%from, %to, round = self.round, "move applied");

        if let Some(winner) = self.winner() {
            info!(%winner, "game over");
        }
        Some(record)
    }

    #[cfg(test)]
    fn set_round_for_test(&mut self, round: u32) {
        self.round = round;
        self.selection = Selection::Idle;
    }
}

impl Default for GameInstance {
    fn default() -> Self {
        Self::new()
    }
}
