use crate::error::{RefError, RefResult};
use crate::shape::PropShape;
use crate::strategy::{Strategy, StrategyKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_REF_TARGET: &str = "HTMLElement";
pub const DEFAULT_GENERIC_PARAM: &str = "T";
pub const DEFAULT_PROPS_TYPE: &str = "Props";
pub const DEFAULT_WRAPPER_REF_PROP: &str = "forwardedRef";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeParameterRole {
    /// One of the component's own type parameters
    Generic,
    /// The type the ref points at
    RefTarget,
    /// The component's props type
    Props,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeParameter {
    pub role: TypeParameterRole,
    pub name: String,
}

impl TypeParameter {
    fn new(role: TypeParameterRole, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
        }
    }
}

/// Where the ref prop seen by callers comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RefPropSource {
    /// Reuses a prop the component already declares
    Declared,
    /// Added to the component's props by the strategy
    Injected,
    /// Provided by the wrapping construct's own signature
    Wrapper,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RefPropPlan {
    pub name: String,
    pub source: RefPropSource,
}

/// Everything a code emitter needs to realize a strategy for one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterializationDescriptor {
    pub strategy_id: String,
    pub kind: StrategyKind,

    /// Name of the wrapping or typing construct
    pub construct: String,

    pub type_parameters: Vec<TypeParameter>,

    pub requires_module_augmentation: bool,

    /// Type arguments are written at the wrapping call site
    pub explicit_type_arguments: bool,

    pub ref_prop: RefPropPlan,
}

impl MaterializationDescriptor {
    /// Type parameters playing the given role, in order
    pub fn parameters(&self, role: TypeParameterRole) -> impl Iterator<Item = &str> {
        self.type_parameters
            .iter()
            .filter(move |p| p.role == role)
            .map(|p| p.name.as_str())
    }

    pub fn ref_target(&self) -> &str {
        self.parameters(TypeParameterRole::RefTarget)
            .next()
            .unwrap_or(DEFAULT_REF_TARGET)
    }
}

/// Translates a selected strategy plus a prop shape into a descriptor
#[derive(Debug, Clone)]
pub struct StrategyMaterializer {
    /// Prop name used to carry the ref into a generic wrapper component
    pub wrapper_ref_prop: String,
}

impl Default for StrategyMaterializer {
    fn default() -> Self {
        Self {
            wrapper_ref_prop: DEFAULT_WRAPPER_REF_PROP.to_string(),
        }
    }
}

impl StrategyMaterializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn materialize(
        &self,
        strategy: &Strategy,
        shape: &PropShape,
        props_type: &str,
    ) -> RefResult<MaterializationDescriptor> {
        let kind = strategy.kind;

        if kind.injects_ref_prop() {
            if let Some(prop) = shape.declared_ref_prop() {
                return Err(RefError::IncompatibleShape {
                    strategy: kind,
                    prop: prop.to_string(),
                });
            }
        }

        // The injected prop must not shadow one of the component's own
        if kind == StrategyKind::GenericWrapperComponent {
            if let Some(prop) = shape.prop_named(&self.wrapper_ref_prop) {
                return Err(RefError::IncompatibleShape {
                    strategy: kind,
                    prop: prop.name.clone(),
                });
            }
        }

        let ref_target = shape.ref_target.as_deref().unwrap_or(DEFAULT_REF_TARGET);
        let generics = generic_params(kind, shape);

        let props = if generics.is_empty() {
            props_type.to_string()
        } else {
            format!("{}<{}>", props_type, generics.join(", "))
        };

        let mut type_parameters: Vec<TypeParameter> = generics
            .iter()
            .map(|g| TypeParameter::new(TypeParameterRole::Generic, g.as_str()))
            .collect();
        type_parameters.push(TypeParameter::new(TypeParameterRole::RefTarget, ref_target));

        let (construct, ref_prop) = match kind {
            StrategyKind::DirectRefProp => {
                // Only a prop called `ref` receives the ref; other ref-typed
                // props stay ordinary props next to the injected one
                let source = if shape.declares_ref() {
                    RefPropSource::Declared
                } else {
                    RefPropSource::Injected
                };
                let plan = RefPropPlan {
                    name: "ref".to_string(),
                    source,
                };
                ("ref-as-prop", plan)
            }
            StrategyKind::ForwardRefWrapper => {
                type_parameters.push(TypeParameter::new(TypeParameterRole::Props, props));
                ("React.forwardRef", wrapper_ref())
            }
            StrategyKind::GenericWrapperComponent => (
                "generic-wrapper-component",
                RefPropPlan {
                    name: self.wrapper_ref_prop.clone(),
                    source: RefPropSource::Injected,
                },
            ),
            StrategyKind::GenericForwardRefRedeclare => {
                type_parameters.push(TypeParameter::new(TypeParameterRole::Props, props));
                ("React.forwardRef (redeclared)", wrapper_ref())
            }
            StrategyKind::CallSignatureOverload => {
                type_parameters.push(TypeParameter::new(TypeParameterRole::Props, props));
                ("call-signature-cast", wrapper_ref())
            }
        };

        debug!(
            strategy = %strategy.id,
            construct,
            ref_prop = %ref_prop.name,
            "Materialized strategy"
        );

        Ok(MaterializationDescriptor {
            strategy_id: strategy.id.clone(),
            kind,
            construct: construct.to_string(),
            type_parameters,
            requires_module_augmentation: kind.requires_module_augmentation(),
            explicit_type_arguments: strategy.explicit_typing,
            ref_prop,
        })
    }
}

fn wrapper_ref() -> RefPropPlan {
    RefPropPlan {
        name: "ref".to_string(),
        source: RefPropSource::Wrapper,
    }
}

fn generic_params(kind: StrategyKind, shape: &PropShape) -> Vec<String> {
    match kind {
        StrategyKind::DirectRefProp | StrategyKind::ForwardRefWrapper => Vec::new(),
        _ if shape.generic_params.is_empty() => vec![DEFAULT_GENERIC_PARAM.to_string()],
        _ => shape.generic_params.clone(),
    }
}

/// Materialize with default settings and the placeholder props type name
pub fn materialize(strategy: &Strategy, shape: &PropShape) -> RefResult<MaterializationDescriptor> {
    StrategyMaterializer::default().materialize(strategy, shape, DEFAULT_PROPS_TYPE)
}
