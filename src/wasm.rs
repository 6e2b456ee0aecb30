//! WASM bindings for the furnish-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use wasm_bindgen::prelude::*;

use crate::bridge::arrange_json_or_error;
use crate::layout::{default_rules, select_archetype, Category};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// Arrange the placed objects for a room. Takes and returns JSON.
#[wasm_bindgen]
pub fn arrange_room(input: &str) -> String {
    let output = arrange_json_or_error(input);

    match &output.error {
        Some(e) => console_error(&format!(
            "Error arranging room at {}:{}: {}",
            e.line, e.column, e.message
        )),
        None => console_log(&format!(
            "Arranged {} object(s) as {} ({} sweeps, converged: {})",
            output.placements.len(),
            output.archetype.as_deref().unwrap_or("?"),
            output.iterations,
            output.converged,
        )),
    }

    match serde_json::to_string(&output) {
        Ok(json) => json,
        Err(e) => {
            console_error(&format!("Error serializing output: {:?}", e));
            "{\"error\": {\"message\": \"Serialization error\", \"line\": 1, \"column\": 1}}".to_string()
        }
    }
}

/// Category for an asset file name: "couch", "chair", "table" or "other".
#[wasm_bindgen]
pub fn classify_asset(asset: &str) -> String {
    Category::from_asset(asset).as_str().to_string()
}

/// Archetype name for a room label.
#[wasm_bindgen]
pub fn room_archetype(label: &str) -> String {
    select_archetype(label, &default_rules()).as_str().to_string()
}

/// Starter assets for a freshly classified room, as a JSON array of file names.
#[wasm_bindgen]
pub fn recommend_assets(label: &str) -> String {
    let assets = crate::layout::recommend_assets(label, &default_rules());
    serde_json::to_string(&assets).unwrap_or_else(|_| "[]".to_string())
}
