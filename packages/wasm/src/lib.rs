use forwardkit_codegen::{emit_document, EmitOptions, Manifest};
use forwardkit_core::{
    ComponentProfile, PropShape, StrategyCatalog, StrategyMaterializer, StrategySelector,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct EmitResult {
    code: String,
    failures: Vec<String>,
}

#[wasm_bindgen]
impl EmitResult {
    #[wasm_bindgen(getter)]
    pub fn code(&self) -> String {
        self.code.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn failures(&self) -> Vec<String> {
        self.failures.clone()
    }
}

/// Select a strategy for a JSON profile; returns the selection as JSON
#[wasm_bindgen(js_name = selectStrategy)]
pub fn select_strategy_js(profile_json: &str) -> Result<String, JsValue> {
    select_strategy(profile_json).map_err(|e| JsValue::from_str(&e))
}

/// Materialize a builtin strategy (by id) for a JSON prop shape
#[wasm_bindgen(js_name = materialize)]
pub fn materialize_js(strategy_id: &str, shape_json: &str, props_type: &str) -> Result<String, JsValue> {
    materialize(strategy_id, shape_json, props_type).map_err(|e| JsValue::from_str(&e))
}

/// Emit TypeScript declarations for a JSON manifest
#[wasm_bindgen(js_name = emitDeclarations)]
pub fn emit_declarations_js(manifest_json: &str) -> Result<EmitResult, JsValue> {
    emit_declarations(manifest_json).map_err(|e| JsValue::from_str(&e))
}

/// The builtin catalog as JSON
#[wasm_bindgen(js_name = catalog)]
pub fn catalog_js() -> Result<String, JsValue> {
    serde_json::to_string(StrategyCatalog::builtin())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn select_strategy(profile_json: &str) -> Result<String, String> {
    let profile: ComponentProfile =
        serde_json::from_str(profile_json).map_err(|e| format!("Profile error: {}", e))?;

    let selection = StrategySelector::default()
        .select(&profile)
        .map_err(|e| e.to_string())?;

    serde_json::to_string(&selection).map_err(|e| format!("Serialization error: {}", e))
}

fn materialize(strategy_id: &str, shape_json: &str, props_type: &str) -> Result<String, String> {
    let strategy = StrategyCatalog::builtin()
        .get(strategy_id)
        .ok_or_else(|| format!("Unknown strategy: {}", strategy_id))?;
    let shape: PropShape =
        serde_json::from_str(shape_json).map_err(|e| format!("Shape error: {}", e))?;

    let descriptor = StrategyMaterializer::new()
        .materialize(strategy, &shape, props_type)
        .map_err(|e| e.to_string())?;

    serde_json::to_string(&descriptor).map_err(|e| format!("Serialization error: {}", e))
}

fn emit_declarations(manifest_json: &str) -> Result<EmitResult, String> {
    let manifest = Manifest::from_json(manifest_json).map_err(|e| e.to_string())?;
    let document = emit_document(&manifest, &StrategySelector::default(), EmitOptions::default());

    Ok(EmitResult {
        code: document.code,
        failures: document.failures.iter().map(|f| f.to_string()).collect(),
    })
}
