use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod types;
pub mod wasm;

pub use ai::choose_move as choose_ai_move;
pub use board::Board;
pub use config::GameConfig;
pub use error::GameError;
pub use game::{GameInstance, init_game, score, submit_move};
pub use rules::{LegalMoves, capture_set, legal_moves, resolve_turn};
pub use types::{GamePhase, Level, Move, Position, Side};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
