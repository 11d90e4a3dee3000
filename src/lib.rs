use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;

pub use ai::{SearchReport, Searcher};
pub use board::Board;
pub use config::{GameConfig, GameMode, PlayerKind};
pub use error::GameError;
pub use game::{Game, Turn};
pub use types::{Cell, Color, GameResult, GameState, Position, ScoredMove};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Game handle exported to JavaScript. Every method returns plain JS
/// objects serialized from the Rust snapshot types.
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// `config` follows [`GameConfig`]; `undefined` or `null` picks the default.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmGame, JsError> {
        let config = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self {
            inner: Game::new(config)?,
        })
    }

    /// Human placement, 0-indexed. Returns the new [`GameState`].
    pub fn play(&mut self, row: u8, col: u8) -> Result<JsValue, JsError> {
        self.inner.play(row, col)?;
        self.state()
    }

    /// Returns the [`ScoredMove`] the computer played.
    #[wasm_bindgen(js_name = playComputer)]
    pub fn play_computer(&mut self) -> Result<JsValue, JsError> {
        let chosen = self.inner.play_computer()?;
        to_js(&chosen)
    }

    pub fn pass(&mut self) -> Result<JsValue, JsError> {
        self.inner.pass()?;
        self.state()
    }

    /// Returns the [`Turn`] that was taken.
    pub fn advance(&mut self) -> Result<JsValue, JsError> {
        let turn = self.inner.advance()?;
        to_js(&turn)
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.to_game_state())
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.to_game_result())
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.legal_moves())
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}
