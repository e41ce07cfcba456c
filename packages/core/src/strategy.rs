use crate::profile::{ComponentProfile, TargetRuntime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The structurally distinct ways of exposing a ref through a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Accept `ref` as a regular prop
    DirectRefProp,
    /// Wrap the render function in `forwardRef`
    ForwardRefWrapper,
    /// Pass the ref through a differently named prop of a generic component
    GenericWrapperComponent,
    /// Redeclare `forwardRef` so it preserves generic parameters
    GenericForwardRefRedeclare,
    /// Cast the `forwardRef` result to a generic call signature
    CallSignatureOverload,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::DirectRefProp,
        StrategyKind::ForwardRefWrapper,
        StrategyKind::GenericWrapperComponent,
        StrategyKind::GenericForwardRefRedeclare,
        StrategyKind::CallSignatureOverload,
    ];

    /// Whether the strategy adds a ref prop of its own to the component's props
    pub fn injects_ref_prop(&self) -> bool {
        matches!(
            self,
            StrategyKind::ForwardRefWrapper | StrategyKind::GenericWrapperComponent
        )
    }

    /// Whether realizing the strategy needs a `declare module` block
    pub fn requires_module_augmentation(&self) -> bool {
        matches!(
            self,
            StrategyKind::GenericForwardRefRedeclare | StrategyKind::CallSignatureOverload
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::DirectRefProp => "DirectRefProp",
            StrategyKind::ForwardRefWrapper => "ForwardRefWrapper",
            StrategyKind::GenericWrapperComponent => "GenericWrapperComponent",
            StrategyKind::GenericForwardRefRedeclare => "GenericForwardRefRedeclare",
            StrategyKind::CallSignatureOverload => "CallSignatureOverload",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Applicability predicate: a conjunction of requirements on profile fields.
/// A `None` field places no requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<TargetRuntime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_inference: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_shape: Option<bool>,
}

impl Condition {
    /// A condition that holds for every profile
    pub fn always() -> Self {
        Self::default()
    }

    pub fn generic(mut self, value: bool) -> Self {
        self.generic = Some(value);
        self
    }

    pub fn runtime(mut self, value: TargetRuntime) -> Self {
        self.runtime = Some(value);
        self
    }

    pub fn full_inference(mut self, value: bool) -> Self {
        self.full_inference = Some(value);
        self
    }

    pub fn custom_shape(mut self, value: bool) -> Self {
        self.custom_shape = Some(value);
        self
    }

    /// Evaluate against the resolved view of a profile
    pub fn holds(&self, profile: &ComponentProfile) -> bool {
        self.runtime.map_or(true, |r| r == profile.target_runtime())
            && self.generic.map_or(true, |g| g == profile.is_generic())
            && self
                .full_inference
                .map_or(true, |i| i == profile.requires_full_inference())
            && self
                .custom_shape
                .map_or(true, |c| c == profile.has_custom_prop_shape())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut clauses = Vec::new();

        if let Some(runtime) = self.runtime {
            clauses.push(format!("runtime = {}", runtime));
        }
        if let Some(generic) = self.generic {
            clauses.push(flag("generic", generic));
        }
        if let Some(full) = self.full_inference {
            clauses.push(flag("fullInference", full));
        }
        if let Some(custom) = self.custom_shape {
            clauses.push(flag("customShape", custom));
        }

        if clauses.is_empty() {
            f.write_str("always")
        } else {
            f.write_str(&clauses.join(" && "))
        }
    }
}

fn flag(name: &str, value: bool) -> String {
    if value {
        name.to_string()
    } else {
        format!("!{}", name)
    }
}

/// One catalog entry: a named strategy guarded by its condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    /// Stable identifier, unique within a catalog
    pub id: String,

    pub kind: StrategyKind,

    /// Lower values are evaluated first
    pub priority: u32,

    pub description: String,

    pub condition: Condition,

    /// Type arguments are spelled out at the wrapping call site
    #[serde(default)]
    pub explicit_typing: bool,
}

impl Strategy {
    pub fn new(
        id: impl Into<String>,
        kind: StrategyKind,
        priority: u32,
        condition: Condition,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            priority,
            description: description.into(),
            condition,
            explicit_typing: false,
        }
    }

    pub fn with_explicit_typing(mut self) -> Self {
        self.explicit_typing = true;
        self
    }

    pub fn applies_to(&self, profile: &ComponentProfile) -> bool {
        self.condition.holds(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_display() {
        let condition = Condition::always()
            .runtime(TargetRuntime::Current)
            .generic(false)
            .full_inference(true);

        assert_eq!(
            condition.to_string(),
            "runtime = current && !generic && fullInference"
        );
        assert_eq!(Condition::always().to_string(), "always");
    }

    #[test]
    fn test_condition_ignores_unconstrained_fields() {
        let condition = Condition::always().generic(true);

        let legacy = ComponentProfile::known(true, TargetRuntime::Legacy, false, true);
        let current = ComponentProfile::known(true, TargetRuntime::Current, true, false);
        let plain = ComponentProfile::known(false, TargetRuntime::Current, true, false);

        assert!(condition.holds(&legacy));
        assert!(condition.holds(&current));
        assert!(!condition.holds(&plain));
    }

    #[test]
    fn test_condition_uses_resolved_unknowns() {
        let condition = Condition::always()
            .runtime(TargetRuntime::Legacy)
            .generic(false);
        let profile = ComponentProfile::new(None, None, false, false).unwrap();

        assert!(condition.holds(&profile));
    }

    #[test]
    fn test_injection_and_augmentation_flags() {
        let injecting: Vec<_> = StrategyKind::ALL
            .iter()
            .filter(|k| k.injects_ref_prop())
            .collect();
        assert_eq!(
            injecting,
            vec![
                &StrategyKind::ForwardRefWrapper,
                &StrategyKind::GenericWrapperComponent
            ]
        );

        let augmenting: Vec<_> = StrategyKind::ALL
            .iter()
            .filter(|k| k.requires_module_augmentation())
            .collect();
        assert_eq!(
            augmenting,
            vec![
                &StrategyKind::GenericForwardRefRedeclare,
                &StrategyKind::CallSignatureOverload
            ]
        );
    }

    #[test]
    fn test_strategy_serializes_camel_case() {
        let strategy = Strategy::new(
            "forward-ref-explicit",
            StrategyKind::ForwardRefWrapper,
            2,
            Condition::always().generic(false),
            "forwardRef with explicit type arguments",
        )
        .with_explicit_typing();

        let json = serde_json::to_value(&strategy).unwrap();
        assert_eq!(json["kind"], "ForwardRefWrapper");
        assert_eq!(json["explicitTyping"], true);
        assert_eq!(json["condition"]["generic"], false);
        assert!(json["condition"].get("runtime").is_none());
    }
}
