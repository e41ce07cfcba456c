//! Declaration emission across every builtin strategy

use forwardkit_core::{
    ComponentProfile, PropDecl, PropShape, SelectorOptions, StrategyCatalog, StrategySelector,
    TargetRuntime,
};
use forwardkit_codegen::{emit_document, ComponentEntry, EmitOptions, Manifest};

fn list_shape() -> PropShape {
    PropShape::new()
        .with_prop(PropDecl::new("items", "T[]"))
        .with_prop(PropDecl::new("onSelect", "(item: T) => void").optional())
        .with_generic("T")
        .with_ref_target("HTMLUListElement")
}

#[test]
fn test_every_strategy_emits() {
    let manifest = Manifest {
        components: vec![
            ComponentEntry::new(
                "Button",
                ComponentProfile::known(false, TargetRuntime::Current, false, false),
                PropShape::new().with_ref_target("HTMLButtonElement"),
            ),
            ComponentEntry::new(
                "Input",
                ComponentProfile::known(false, TargetRuntime::Current, true, false),
                PropShape::new().with_ref_target("HTMLInputElement"),
            ),
            ComponentEntry::new(
                "Select",
                ComponentProfile::known(true, TargetRuntime::Legacy, false, false),
                list_shape(),
            ),
            ComponentEntry::new(
                "List",
                ComponentProfile::known(true, TargetRuntime::Current, true, false),
                list_shape(),
            ),
            ComponentEntry::new(
                "Grid",
                ComponentProfile::known(true, TargetRuntime::Current, true, true),
                list_shape(),
            ),
        ],
    };

    let result = emit_document(&manifest, &StrategySelector::default(), EmitOptions::default());

    println!("Generated declarations:\n{}", result.code);

    assert!(result.is_clean());
    assert_eq!(result.plans.len(), 5);
    assert_eq!(result.code.matches("declare module \"react\"").count(), 2);

    assert!(result.code.contains("export declare function Button(props: ButtonProps)"));
    assert!(result.code.contains(
        "export declare const Input: React.ForwardRefExoticComponent<React.PropsWithoutRef<InputProps> & React.RefAttributes<HTMLInputElement>>;"
    ));
    assert!(result.code.contains("  forwardedRef?: React.Ref<HTMLUListElement>;"));
    assert!(result.code.contains("export declare function Select<T>(props: SelectProps<T>)"));
    assert!(result.code.contains("export declare const List: <T>(props: ListProps<T> & React.RefAttributes<HTMLUListElement>)"));
    assert!(result.code.contains("export declare const Grid: <T>(props: GridProps<T> & { ref?: React.ForwardedRef<HTMLUListElement> })"));
    assert!(result.code.contains("  onSelect?: (item: T) => void;"));
}

#[test]
fn test_degraded_selection_is_annotated() {
    let catalog = StrategyCatalog::from_json(
        r#"{ "strategies": [
            { "id": "plain", "kind": "ForwardRefWrapper", "priority": 1,
              "description": "", "condition": { "generic": false } }
        ] }"#,
    )
    .unwrap();
    let selector = StrategySelector::with_options(
        &catalog,
        SelectorOptions {
            allow_degraded_fallback: true,
        },
    );
    let manifest = Manifest {
        components: vec![ComponentEntry::new(
            "Tree",
            ComponentProfile::known(true, TargetRuntime::Current, false, false),
            PropShape::new().with_generic("Node"),
        )],
    };

    let result = emit_document(&manifest, &selector, EmitOptions::default());

    assert!(result.is_clean());
    assert!(result.plans[0].degraded);
    assert!(result
        .code
        .contains("// Tree: GenericWrapperComponent via generic-wrapper-component (degraded)"));
}

#[test]
fn test_plans_serialize_for_reporting() {
    let manifest = Manifest {
        components: vec![ComponentEntry::new(
            "Button",
            ComponentProfile::known(false, TargetRuntime::Legacy, false, false),
            PropShape::new(),
        )],
    };

    let result = emit_document(&manifest, &StrategySelector::default(), EmitOptions::default());
    let json = serde_json::to_value(&result.plans).unwrap();

    assert_eq!(json[0]["strategyId"], "forward-ref-legacy");
    assert_eq!(json[0]["descriptor"]["construct"], "React.forwardRef");
    assert_eq!(json[0]["rationale"].as_array().unwrap().len(), 3);
}
