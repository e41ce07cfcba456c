#![cfg(target_arch = "wasm32")]

use forwardkit_wasm::{catalog_js, emit_declarations_js, materialize_js, select_strategy_js};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn select_strategy_returns_selection_json() {
    let output = select_strategy_js(r#"{ "isGeneric": true, "targetRuntime": "current" }"#).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["strategy"]["id"], "generic-wrapper-component");
    assert_eq!(value["degraded"], false);
}

#[wasm_bindgen_test]
fn select_strategy_rejects_invalid_profile() {
    let err = select_strategy_js(r#"{ "requiresFullInference": true }"#).unwrap_err();
    let message = err.as_string().unwrap();

    assert!(message.starts_with("Profile error:"));
}

#[wasm_bindgen_test]
fn materialize_reports_collision_as_string() {
    let err = materialize_js(
        "generic-wrapper-component",
        r#"{ "props": [{ "name": "forwardedRef", "type": "string" }] }"#,
        "ListProps",
    )
    .unwrap_err();

    assert!(err.as_string().unwrap().contains("'forwardedRef'"));
}

#[wasm_bindgen_test]
fn emit_declarations_exposes_code_and_failures() {
    let result = emit_declarations_js(
        r#"{ "components": [
            { "name": "Button", "profile": { "targetRuntime": "current" } },
            { "name": "Input", "profile": { "targetRuntime": "legacy" }, "shape": { "refDeclared": true } }
        ] }"#,
    )
    .unwrap();

    assert!(result.code().contains("export declare function Button(props: ButtonProps)"));
    assert_eq!(result.failures().len(), 1);
}

#[wasm_bindgen_test]
fn catalog_lists_builtin_strategies() {
    let value: serde_json::Value = serde_json::from_str(&catalog_js().unwrap()).unwrap();
    assert_eq!(value["strategies"].as_array().map(|s| s.len()), Some(6));
}
