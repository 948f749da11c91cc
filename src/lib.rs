use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod game;
pub mod inventory;
pub mod movegen;
pub mod types;

use crate::game::{ClickOutcome, GameInstance};
use crate::types::Setup;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Rules engine handle for a JavaScript renderer.
///
/// The host converts pointer positions to board cells, forwards them to
/// `onCellClicked`, and redraws from `gameState` every frame.
#[wasm_bindgen]
pub struct CheckersGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl CheckersGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: GameInstance::new(),
        }
    }

    /// Starts from a custom position: `{ pieces: [{ x, y, color, promoted? }] }`.
    #[wasm_bindgen(js_name = fromSetup)]
    pub fn from_setup(setup: JsValue) -> Result<CheckersGame, JsValue> {
        let setup: Setup = serde_wasm_bindgen::from_value(setup)?;
        let inner =
            GameInstance::from_setup(&setup).map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(Self { inner })
    }

    /// Returns `true` when the click changed the game state.
    #[wasm_bindgen(js_name = onCellClicked)]
    pub fn on_cell_clicked(&mut self, x: i32, y: i32) -> bool {
        !matches!(self.inner.on_cell_clicked(x, y), ClickOutcome::Ignored)
    }

    #[wasm_bindgen(js_name = gameState)]
    pub fn game_state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_state())?)
    }

    /// `"white"`, `"black"`, or `undefined` while the game is running.
    pub fn winner(&self) -> Option<String> {
        self.inner.winner().map(|color| color.to_string())
    }
}

impl Default for CheckersGame {
    fn default() -> Self {
        Self::new()
    }
}
