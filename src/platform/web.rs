//! wasm-bindgen exports for browser game hosts
//!
//! Seeds arrive as JS numbers and are validated through `Seed::try_from`.
//! Parameters and results cross the boundary as JSON strings.

use glam::DVec2;
use wasm_bindgen::prelude::*;

use crate::layout::{LayoutParams, LayoutResult, generate};
use crate::persistence::SavedLayout;
use crate::seed::Seed;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_params(params_json: &str) -> Result<LayoutParams, JsValue> {
    if params_json.trim().is_empty() {
        return Ok(LayoutParams::default());
    }
    LayoutParams::from_json(params_json).map_err(to_js)
}

fn run(seed: f64, params_json: &str) -> Result<LayoutResult, JsValue> {
    let seed = Seed::try_from(seed).map_err(to_js)?;
    let params = parse_params(params_json)?;
    generate(seed, &params).map_err(to_js)
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
}

/// Generate a layout and return the result as JSON
#[wasm_bindgen]
pub fn generate_layout(seed: f64, params_json: &str) -> Result<String, JsValue> {
    let result = run(seed, params_json)?;
    serde_json::to_string(&result).map_err(to_js)
}

/// Fingerprint only, for "regenerate and compare" checks
#[wasm_bindgen]
pub fn layout_fingerprint(seed: f64, params_json: &str) -> Result<u32, JsValue> {
    Ok(run(seed, params_json)?.fingerprint)
}

/// Id of the topmost region under `(x, y)`, for pointer hit tests
#[wasm_bindgen]
pub fn region_at(seed: f64, params_json: &str, x: f64, y: f64) -> Result<Option<u32>, JsValue> {
    let result = run(seed, params_json)?;
    Ok(result.region_at(DVec2::new(x, y)).map(|region| region.id))
}

/// Seal a layout into a saved envelope (JSON) for LocalStorage
#[wasm_bindgen]
pub fn seal_layout(seed: f64, params_json: &str) -> Result<String, JsValue> {
    let params = parse_params(params_json)?;
    let result = run(seed, params_json)?;
    SavedLayout::seal(&result, &params)
        .and_then(|saved| saved.to_json())
        .map_err(to_js)
}

/// Validate a saved envelope and check it still regenerates identically
#[wasm_bindgen]
pub fn verify_saved_layout(saved_json: &str) -> Result<bool, JsValue> {
    let saved = SavedLayout::from_json(saved_json).map_err(to_js)?;
    saved.verify().map_err(to_js)
}
