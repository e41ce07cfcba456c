//! End-to-end selection and materialization through the public API

use forwardkit_core::{
    materialize, select, ComponentProfile, PropShape, RefError, RefPropSource, SelectorOptions,
    StrategyCatalog, StrategyKind, StrategySelector, TypeParameterRole,
};
use std::thread;

#[test]
fn test_pipeline_from_json_inputs() {
    let profile: ComponentProfile = serde_json::from_str(
        r#"{ "isGeneric": true, "targetRuntime": "current", "requiresFullInference": false }"#,
    )
    .unwrap();
    let shape: PropShape = serde_json::from_str(
        r#"{
            "props": [{ "name": "items", "type": "T[]" }],
            "refTarget": "HTMLUListElement",
            "genericParams": ["T"]
        }"#,
    )
    .unwrap();

    let selection = select(&profile).unwrap();
    assert_eq!(selection.kind(), StrategyKind::GenericWrapperComponent);

    let descriptor = materialize(&selection.strategy, &shape).unwrap();
    assert_eq!(descriptor.construct, "generic-wrapper-component");
    assert_eq!(descriptor.ref_prop.name, "forwardedRef");
    assert_eq!(descriptor.ref_prop.source, RefPropSource::Injected);
    assert_eq!(descriptor.ref_target(), "HTMLUListElement");
}

#[test]
fn test_invalid_profile_json_is_rejected() {
    let result: Result<ComponentProfile, _> =
        serde_json::from_str(r#"{ "requiresFullInference": true, "hasCustomPropShape": true }"#);
    assert!(result.is_err());

    let direct = ComponentProfile::new(None, None, true, true);
    assert!(matches!(direct, Err(RefError::InvalidProfile(_))));
}

#[test]
fn test_custom_catalog_from_json() {
    let catalog = StrategyCatalog::from_json(
        r#"{
            "strategies": [
                {
                    "id": "always-forward",
                    "kind": "ForwardRefWrapper",
                    "priority": 1,
                    "description": "Forward everything non-generic",
                    "condition": { "generic": false }
                },
                {
                    "id": "generic-cast",
                    "kind": "CallSignatureOverload",
                    "priority": 2,
                    "description": "Cast every generic component",
                    "condition": { "generic": true }
                }
            ]
        }"#,
    )
    .unwrap();
    assert!(catalog.validate().is_ok());

    let selector = StrategySelector::new(&catalog);
    let profile = ComponentProfile::known(false, forwardkit_core::TargetRuntime::Current, false, false);
    assert_eq!(selector.select(&profile).unwrap().strategy_id(), "always-forward");
}

#[test]
fn test_misconfigured_catalog_surfaces_error_unless_fallback_allowed() {
    let catalog = StrategyCatalog::from_json(
        r#"{ "strategies": [
            { "id": "only-legacy", "kind": "ForwardRefWrapper", "priority": 1,
              "description": "", "condition": { "runtime": "legacy", "generic": false } }
        ] }"#,
    )
    .unwrap();
    let profile = ComponentProfile::known(true, forwardkit_core::TargetRuntime::Current, true, true);

    let strict = StrategySelector::new(&catalog);
    assert!(matches!(
        strict.select(&profile),
        Err(RefError::NoApplicableStrategy { .. })
    ));

    let lenient = StrategySelector::with_options(
        &catalog,
        SelectorOptions {
            allow_degraded_fallback: true,
        },
    );
    let result = lenient.select(&profile).unwrap();
    assert!(result.degraded);
    assert_eq!(result.kind(), StrategyKind::GenericWrapperComponent);
    assert_eq!(result.strategy_id(), "degraded-generic-wrapper");
}

#[test]
fn test_concurrent_selection_agrees() {
    let expected: Vec<String> = ComponentProfile::enumerate()
        .map(|p| select(&p).unwrap().strategy_id().to_string())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                ComponentProfile::enumerate()
                    .map(|p| select(&p).unwrap().strategy_id().to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_selection_result_serializes_rationale() {
    let profile = ComponentProfile::known(false, forwardkit_core::TargetRuntime::Legacy, false, false);
    let result = select(&profile).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["strategy"]["id"], "forward-ref-legacy");
    assert_eq!(json["rationale"].as_array().unwrap().len(), 3);
    assert_eq!(json["rationale"][2]["holds"], true);
    assert_eq!(json["degraded"], false);
}

#[test]
fn test_props_parameter_carries_generics() {
    let profile = ComponentProfile::known(true, forwardkit_core::TargetRuntime::Current, true, false);
    let selection = select(&profile).unwrap();
    let shape = PropShape::new().with_generic("K").with_generic("V");

    let descriptor = forwardkit_core::StrategyMaterializer::new()
        .materialize(&selection.strategy, &shape, "MapViewProps")
        .unwrap();
    let props: Vec<&str> = descriptor.parameters(TypeParameterRole::Props).collect();
    assert_eq!(props, vec!["MapViewProps<K, V>"]);
}
