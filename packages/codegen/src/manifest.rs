use crate::error::{EmitError, EmitResult};
use forwardkit_core::{ComponentProfile, PropShape};
use serde::{Deserialize, Serialize};

/// A component as described by the profiling step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    pub name: String,

    pub profile: ComponentProfile,

    #[serde(default)]
    pub shape: PropShape,

    /// Name of the props type; defaults to `<Name>Props`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props_type: Option<String>,
}

impl ComponentEntry {
    pub fn new(name: impl Into<String>, profile: ComponentProfile, shape: PropShape) -> Self {
        Self {
            name: name.into(),
            profile,
            shape,
            props_type: None,
        }
    }

    pub fn props_type(&self) -> String {
        self.props_type
            .clone()
            .unwrap_or_else(|| format!("{}Props", self.name))
    }
}

/// Contents of a `*.refs.json` file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

impl Manifest {
    pub fn from_json(json: &str) -> EmitResult<Self> {
        serde_json::from_str(json).map_err(|e| EmitError::Manifest(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forwardkit_core::TargetRuntime;

    #[test]
    fn test_parse_manifest() {
        let json = r#"{
            "components": [
                {
                    "name": "Button",
                    "profile": { "isGeneric": false, "targetRuntime": "current" },
                    "shape": { "refTarget": "HTMLButtonElement" }
                },
                {
                    "name": "List",
                    "profile": { "isGeneric": true, "requiresFullInference": true },
                    "propsType": "ListViewProps"
                }
            ]
        }"#;

        let manifest = Manifest::from_json(json).unwrap();
        assert_eq!(manifest.components.len(), 2);
        assert_eq!(manifest.components[0].props_type(), "ButtonProps");
        assert_eq!(
            manifest.components[0].profile.target_runtime(),
            TargetRuntime::Current
        );
        assert_eq!(manifest.components[1].props_type(), "ListViewProps");
        assert!(manifest.components[1].shape.props.is_empty());
    }

    #[test]
    fn test_invalid_profile_fails_manifest() {
        let json = r#"{ "components": [ { "name": "X", "profile": { "requiresFullInference": true } } ] }"#;

        let err = Manifest::from_json(json).unwrap_err();
        assert!(matches!(err, EmitError::Manifest(ref msg) if msg.contains("Invalid component profile")));
    }
}
