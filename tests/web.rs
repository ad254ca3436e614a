#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use reversi_engine::wasm::ReversiGame;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn config(level: &str, seed: f64) -> JsValue {
    let obj = Object::new();
    Reflect::set(&obj, &"level".into(), &level.into()).unwrap();
    Reflect::set(&obj, &"seed".into(), &seed.into()).unwrap();
    obj.into()
}

fn ok<T>(result: Result<T, wasm_bindgen::JsError>) -> T {
    result.unwrap_or_else(|_| panic!("call threw"))
}

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &key.into()).unwrap()
}

#[wasm_bindgen_test]
fn ready_flag() {
    assert!(reversi_engine::wasm_ready());
}

#[wasm_bindgen_test]
fn new_game_with_undefined_config_uses_defaults() {
    let game = ok(ReversiGame::new(JsValue::UNDEFINED));

    assert_eq!(game.ai_delay_ms(), 400);
    assert!(!game.is_ai_turn());
}

#[wasm_bindgen_test]
fn player_move_then_ai_reply() {
    let mut game = ok(ReversiGame::new(config("easy", 11.0)));

    let state = ok(game.place(2, 3));
    assert_eq!(get(&state, "blackCount").as_f64(), Some(4.0));
    assert_eq!(get(&state, "whiteCount").as_f64(), Some(1.0));
    assert!(game.is_ai_turn());

    let played = ok(game.ai_move());
    assert!(get(&played, "captures").is_array());
    assert!(!game.is_ai_turn());
}

#[wasm_bindgen_test]
fn illegal_move_throws() {
    let mut game = ok(ReversiGame::new(config("hard", 1.0)));

    assert!(game.place(0, 0).is_err());
    assert!(game.set_level("expert").is_err());
}

#[wasm_bindgen_test]
fn legal_moves_carry_flip_counts() {
    let game = ok(ReversiGame::new(JsValue::NULL));

    let moves = js_sys::Array::from(&ok(game.legal_moves()));
    assert_eq!(moves.length(), 4);
    assert_eq!(get(&moves.get(0), "flips").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn logging_setup_tolerates_repeat_calls() {
    reversi_engine::wasm::init_logging(Some("debug".to_string()));
    reversi_engine::wasm::init_logging(Some("nonsense".to_string()));

    let mut game = ok(ReversiGame::new(JsValue::UNDEFINED));
    assert!(game.place(0, 0).is_err());
}
