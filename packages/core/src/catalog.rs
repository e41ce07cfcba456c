use crate::error::CatalogError;
use crate::profile::{ComponentProfile, TargetRuntime};
use crate::strategy::{Condition, Strategy, StrategyKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

static BUILTIN: OnceLock<StrategyCatalog> = OnceLock::new();

/// Fixed, priority-ordered set of strategies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct StrategyCatalog {
    entries: Vec<Strategy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    strategies: Vec<Strategy>,
}

impl StrategyCatalog {
    /// Build a catalog, ordering entries by ascending priority.
    ///
    /// Priorities and ids must be unique. Debug builds also reject catalogs
    /// where some profile satisfies more than one condition.
    pub fn new(mut entries: Vec<Strategy>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        entries.sort_by_key(|s| s.priority);

        let mut priorities = HashSet::new();
        let mut ids = HashSet::new();
        for entry in &entries {
            if !priorities.insert(entry.priority) {
                return Err(CatalogError::DuplicatePriority(entry.priority));
            }
            if !ids.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }

        let catalog = Self { entries };
        if cfg!(debug_assertions) {
            catalog.check_exclusive()?;
        }
        Ok(catalog)
    }

    /// The process-wide default catalog
    pub fn builtin() -> &'static StrategyCatalog {
        BUILTIN.get_or_init(|| {
            let catalog = Self {
                entries: builtin_entries(),
            };
            debug_assert!(catalog.validate().is_ok(), "builtin catalog is malformed");
            catalog
        })
    }

    /// Parse a catalog from its JSON form: `{ "strategies": [...] }`
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::try_from(file)
    }

    /// Entries in ascending priority order
    pub fn list(&self) -> &[Strategy] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Strategy> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Strategy> {
        self.entries.iter().find(|s| s.id == id)
    }

    /// First entry (by priority) of the given kind
    pub fn first_of_kind(&self, kind: StrategyKind) -> Option<&Strategy> {
        self.entries.iter().find(|s| s.kind == kind)
    }

    /// Check exclusivity and totality over every fully specified profile
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.check_exclusive()?;

        for profile in ComponentProfile::enumerate() {
            if !self.entries.iter().any(|s| s.applies_to(&profile)) {
                return Err(CatalogError::Uncovered(profile.to_string()));
            }
        }

        Ok(())
    }

    fn check_exclusive(&self) -> Result<(), CatalogError> {
        for profile in ComponentProfile::enumerate() {
            let mut matching = self.entries.iter().filter(|s| s.applies_to(&profile));

            if let (Some(first), Some(second)) = (matching.next(), matching.next()) {
                return Err(CatalogError::Overlap {
                    profile: profile.to_string(),
                    first: first.id.clone(),
                    second: second.id.clone(),
                });
            }
        }

        Ok(())
    }
}

impl TryFrom<CatalogFile> for StrategyCatalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        StrategyCatalog::new(file.strategies)
    }
}

impl From<StrategyCatalog> for CatalogFile {
    fn from(catalog: StrategyCatalog) -> Self {
        Self {
            strategies: catalog.entries,
        }
    }
}

impl<'a> IntoIterator for &'a StrategyCatalog {
    type Item = &'a Strategy;
    type IntoIter = std::slice::Iter<'a, Strategy>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn builtin_entries() -> Vec<Strategy> {
    use TargetRuntime::{Current, Legacy};

    vec![
        Strategy::new(
            "direct-ref-prop",
            StrategyKind::DirectRefProp,
            1,
            Condition::always()
                .runtime(Current)
                .generic(false)
                .full_inference(false),
            "Declare `ref` as an ordinary prop; the runtime passes it through",
        ),
        Strategy::new(
            "forward-ref-explicit",
            StrategyKind::ForwardRefWrapper,
            2,
            Condition::always()
                .runtime(Current)
                .generic(false)
                .full_inference(true),
            "Wrap in forwardRef with explicit ref and props type arguments",
        )
        .with_explicit_typing(),
        Strategy::new(
            "forward-ref-legacy",
            StrategyKind::ForwardRefWrapper,
            3,
            Condition::always().runtime(Legacy).generic(false),
            "Wrap in forwardRef; legacy runtimes strip `ref` from props",
        ),
        Strategy::new(
            "generic-wrapper-component",
            StrategyKind::GenericWrapperComponent,
            4,
            Condition::always().generic(true).full_inference(false),
            "Keep the component generic and pass the ref through a separately named prop",
        ),
        Strategy::new(
            "generic-forward-ref-redeclare",
            StrategyKind::GenericForwardRefRedeclare,
            5,
            Condition::always()
                .generic(true)
                .full_inference(true)
                .custom_shape(false),
            "Redeclare forwardRef in a module augmentation so generics survive wrapping",
        ),
        Strategy::new(
            "call-signature-overload",
            StrategyKind::CallSignatureOverload,
            6,
            Condition::always()
                .generic(true)
                .full_inference(true)
                .custom_shape(true),
            "Cast the forwardRef result to a generic call signature carrying the custom props",
        ),
    ]
}
