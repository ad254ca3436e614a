//! JavaScript-facing API.
//!
//! The page owns rendering, input timing and the flip animation; it calls
//! into `ReversiGame` and draws whatever state comes back.

use log::{Level as LogLevel, warn};
use once_cell::sync::OnceCell;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::ai::LevelSelector;
use crate::config::GameConfig;
use crate::game::GameInstance;
use crate::types::Level;

static LOGGER: OnceCell<()> = OnceCell::new();

/// Routes `log` output to the browser console and installs the panic hook.
/// Safe to call more than once; only the first call takes effect.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    LOGGER.get_or_init(|| {
        console_error_panic_hook::set_once();
        let level = level
            .as_deref()
            .and_then(|name| name.parse::<LogLevel>().ok())
            .unwrap_or(LogLevel::Info);
        if let Err(err) = console_log::init_with_level(level) {
            warn!("console logger not installed: {err}");
        }
    });
}

#[wasm_bindgen]
pub struct ReversiGame {
    inner: GameInstance,
    ai_delay_ms: u32,
}

#[wasm_bindgen]
impl ReversiGame {
    /// `config` is `{ level?: "easy" | "hard", seed?: number, aiDelayMs?: number }`
    /// or `undefined`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ReversiGame, JsError> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let seed = config.seed.unwrap_or_else(clock_seed);
        let selector = LevelSelector::new(StdRng::seed_from_u64(seed));
        Ok(ReversiGame {
            inner: GameInstance::new(config.level, Box::new(selector)),
            ai_delay_ms: config.ai_delay_ms,
        })
    }

    /// Plays the human move and returns the new state.
    pub fn place(&mut self, row: u8, col: u8) -> Result<JsValue, JsError> {
        if let Err(err) = self.inner.place(row, col) {
            warn!("rejected move ({row}, {col}): {err}");
            return Err(err.into());
        }
        self.state()
    }

    /// Plays the computer's move and returns `{ position, captures }`.
    #[wasm_bindgen(js_name = aiMove)]
    pub fn ai_move(&mut self) -> Result<JsValue, JsError> {
        let played = self.inner.do_ai_move()?;
        Ok(serde_wasm_bindgen::to_value(&played)?)
    }

    #[wasm_bindgen(js_name = isAiTurn)]
    pub fn is_ai_turn(&self) -> bool {
        self.inner.is_ai_turn()
    }

    /// `[{ row, col, flips }]` for the side to move.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.legal_move_hints())?)
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_state())?)
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_result())?)
    }

    pub fn restart(&mut self) -> Result<JsValue, JsError> {
        self.inner.restart();
        self.state()
    }

    #[wasm_bindgen(js_name = setLevel)]
    pub fn set_level(&mut self, level: &str) -> Result<(), JsError> {
        self.inner.set_level(level.parse::<Level>()?);
        Ok(())
    }

    #[wasm_bindgen(js_name = aiDelayMs)]
    pub fn ai_delay_ms(&self) -> u32 {
        self.ai_delay_ms
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
