use crate::error::{RefError, RefResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ref-handling capability of the runtime a component targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetRuntime {
    /// `ref` is stripped from props and must be forwarded explicitly
    Legacy,
    /// `ref` arrives as an ordinary prop
    Current,
}

impl fmt::Display for TargetRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetRuntime::Legacy => write!(f, "legacy"),
            TargetRuntime::Current => write!(f, "current"),
        }
    }
}

/// Validated, immutable description of one component's ref-forwarding needs.
///
/// Genericity and runtime may be left unknown by the caller. For predicate
/// evaluation an unknown genericity reads as non-generic and an unknown
/// runtime reads as [`TargetRuntime::Legacy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawProfile", into = "RawProfile")]
pub struct ComponentProfile {
    is_generic: Option<bool>,
    target_runtime: Option<TargetRuntime>,
    requires_full_inference: bool,
    has_custom_prop_shape: bool,
}

impl ComponentProfile {
    /// Create a profile, rejecting one that asks for full inference without
    /// saying anything about genericity or runtime.
    pub fn new(
        is_generic: Option<bool>,
        target_runtime: Option<TargetRuntime>,
        requires_full_inference: bool,
        has_custom_prop_shape: bool,
    ) -> RefResult<Self> {
        if requires_full_inference && is_generic.is_none() && target_runtime.is_none() {
            return Err(RefError::InvalidProfile(
                "full inference requested but neither genericity nor target runtime is known"
                    .to_string(),
            ));
        }

        Ok(Self {
            is_generic,
            target_runtime,
            requires_full_inference,
            has_custom_prop_shape,
        })
    }

    /// Create a fully specified profile
    pub fn known(
        is_generic: bool,
        target_runtime: TargetRuntime,
        requires_full_inference: bool,
        has_custom_prop_shape: bool,
    ) -> Self {
        Self {
            is_generic: Some(is_generic),
            target_runtime: Some(target_runtime),
            requires_full_inference,
            has_custom_prop_shape,
        }
    }

    pub fn is_generic(&self) -> bool {
        self.is_generic.unwrap_or(false)
    }

    pub fn target_runtime(&self) -> TargetRuntime {
        self.target_runtime.unwrap_or(TargetRuntime::Legacy)
    }

    pub fn requires_full_inference(&self) -> bool {
        self.requires_full_inference
    }

    pub fn has_custom_prop_shape(&self) -> bool {
        self.has_custom_prop_shape
    }

    /// Genericity as the caller declared it
    pub fn declared_genericity(&self) -> Option<bool> {
        self.is_generic
    }

    /// Runtime as the caller declared it
    pub fn declared_runtime(&self) -> Option<TargetRuntime> {
        self.target_runtime
    }

    /// Every fully specified profile, in a fixed order
    pub fn enumerate() -> impl Iterator<Item = ComponentProfile> {
        const BOOLS: [bool; 2] = [false, true];
        const RUNTIMES: [TargetRuntime; 2] = [TargetRuntime::Legacy, TargetRuntime::Current];

        BOOLS.into_iter().flat_map(|generic| {
            RUNTIMES.into_iter().flat_map(move |runtime| {
                BOOLS.into_iter().flat_map(move |full| {
                    BOOLS
                        .into_iter()
                        .map(move |custom| ComponentProfile::known(generic, runtime, full, custom))
                })
            })
        })
    }
}

impl fmt::Display for ComponentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let generic = match self.is_generic {
            Some(value) => value.to_string(),
            None => "unknown".to_string(),
        };
        let runtime = match self.target_runtime {
            Some(value) => value.to_string(),
            None => "unknown".to_string(),
        };
        write!(
            f,
            "{{generic={}, runtime={}, fullInference={}, customShape={}}}",
            generic, runtime, self.requires_full_inference, self.has_custom_prop_shape
        )
    }
}

/// Wire form of a profile, validated on the way in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_generic: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_runtime: Option<TargetRuntime>,

    #[serde(default)]
    requires_full_inference: bool,

    #[serde(default)]
    has_custom_prop_shape: bool,
}

impl TryFrom<RawProfile> for ComponentProfile {
    type Error = RefError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        ComponentProfile::new(
            raw.is_generic,
            raw.target_runtime,
            raw.requires_full_inference,
            raw.has_custom_prop_shape,
        )
    }
}

impl From<ComponentProfile> for RawProfile {
    fn from(profile: ComponentProfile) -> Self {
        Self {
            is_generic: profile.is_generic,
            target_runtime: profile.target_runtime,
            requires_full_inference: profile.requires_full_inference,
            has_custom_prop_shape: profile.has_custom_prop_shape,
        }
    }
}
