use derive_more::{Display, Error};

/// Failures of direct board access and setup validation.
///
/// Clicks never surface these; the click path pre-validates and no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("cell ({x}, {y}) is outside the 8x8 board")]
    OutOfBounds { x: i32, y: i32 },
    #[display("cell ({x}, {y}) is a light square and cannot hold a piece")]
    LightCell { x: u8, y: u8 },
    #[display("cell ({x}, {y}) is already occupied")]
    Occupied { x: u8, y: u8 },
}
