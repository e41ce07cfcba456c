use crate::context::EmitContext;
use forwardkit_core::{
    MaterializationDescriptor, PropDecl, RefPropSource, StrategyKind, TypeParameterRole,
};

/// Plugin trait for turning materialized strategies into source text
pub trait CodeGenerator {
    /// Generate a single property line (name + optional marker + type)
    fn generate_property(&self, prop: &PropDecl) -> String;

    /// Write the props interface, including a ref prop the strategy injects
    fn emit_props_interface(
        &self,
        ctx: &EmitContext,
        props_type: &str,
        props: &[PropDecl],
        descriptor: &MaterializationDescriptor,
    );

    /// Generate the exported component declaration
    fn generate_component(
        &self,
        name: &str,
        props_type: &str,
        descriptor: &MaterializationDescriptor,
    ) -> String;

    /// Generate the module augmentation block a strategy needs, if any
    fn generate_augmentation(&self, kind: StrategyKind) -> Option<String>;
}

const FORWARD_REF_REDECLARATION: &str = r#"declare module "react" {
  function forwardRef<T, P = {}>(
    render: (props: P, ref: React.Ref<T>) => React.ReactNode | null
  ): (props: P & React.RefAttributes<T>) => React.ReactNode | null;
}"#;

const FORWARD_REF_CALL_SIGNATURE: &str = r#"declare module "react" {
  function forwardRef<T, P = {}>(
    render: (props: P, ref: React.ForwardedRef<T>) => React.ReactNode | null
  ): (props: P & { ref?: React.ForwardedRef<T> }) => React.ReactNode | null;
}"#;

/// TypeScript declaration (`.d.ts`) generator
#[derive(Debug, Clone, Copy)]
pub struct TypeScriptGenerator;

impl TypeScriptGenerator {
    pub fn new() -> Self {
        Self
    }

    fn generic_list(descriptor: &MaterializationDescriptor) -> String {
        let generics: Vec<&str> = descriptor.parameters(TypeParameterRole::Generic).collect();
        if generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", generics.join(", "))
        }
    }
}

impl Default for TypeScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for TypeScriptGenerator {
    fn generate_property(&self, prop: &PropDecl) -> String {
        let optional_marker = if prop.optional { "?" } else { "" };
        format!("{}{}: {}", prop.name, optional_marker, prop.type_text)
    }

    fn emit_props_interface(
        &self,
        ctx: &EmitContext,
        props_type: &str,
        props: &[PropDecl],
        descriptor: &MaterializationDescriptor,
    ) {
        ctx.add_line(&format!(
            "export interface {}{} {{",
            props_type,
            Self::generic_list(descriptor)
        ));
        ctx.indent();

        for prop in props {
            ctx.add_line(&format!("{};", self.generate_property(prop)));
        }

        if descriptor.ref_prop.source == RefPropSource::Injected {
            ctx.add_line(&format!(
                "{}?: React.Ref<{}>;",
                descriptor.ref_prop.name,
                descriptor.ref_target()
            ));
        }

        ctx.dedent();
        ctx.add_line("}");
    }

    fn generate_component(
        &self,
        name: &str,
        props_type: &str,
        descriptor: &MaterializationDescriptor,
    ) -> String {
        let generics = Self::generic_list(descriptor);
        let props = format!("{}{}", props_type, generics);
        let target = descriptor.ref_target();

        match descriptor.kind {
            StrategyKind::DirectRefProp => format!(
                "export declare function {}(props: {}): React.ReactNode;",
                name, props
            ),
            StrategyKind::ForwardRefWrapper => format!(
                "export declare const {}: React.ForwardRefExoticComponent<React.PropsWithoutRef<{}> & React.RefAttributes<{}>>;",
                name, props, target
            ),
            StrategyKind::GenericWrapperComponent => format!(
                "export declare function {}{}(props: {}): React.ReactNode;",
                name, generics, props
            ),
            StrategyKind::GenericForwardRefRedeclare => format!(
                "export declare const {}: {}(props: {} & React.RefAttributes<{}>) => React.ReactNode | null;",
                name, generics, props, target
            ),
            StrategyKind::CallSignatureOverload => format!(
                "export declare const {}: {}(props: {} & {{ ref?: React.ForwardedRef<{}> }}) => React.ReactNode | null;",
                name, generics, props, target
            ),
        }
    }

    fn generate_augmentation(&self, kind: StrategyKind) -> Option<String> {
        match kind {
            StrategyKind::GenericForwardRefRedeclare => Some(FORWARD_REF_REDECLARATION.to_string()),
            StrategyKind::CallSignatureOverload => Some(FORWARD_REF_CALL_SIGNATURE.to_string()),
            _ => None,
        }
    }
}
