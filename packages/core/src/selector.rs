use crate::catalog::StrategyCatalog;
use crate::error::{RefError, RefResult};
use crate::profile::ComponentProfile;
use crate::strategy::{Condition, Strategy, StrategyKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// One predicate check made while selecting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredicateEvaluation {
    pub priority: u32,
    pub strategy_id: String,
    pub kind: StrategyKind,
    /// Rendered condition, e.g. `runtime = current && !generic`
    pub condition: String,
    pub holds: bool,
}

/// Outcome of a selection call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResult {
    pub strategy: Strategy,

    /// Evaluations in ascending priority order, ending at the match
    pub rationale: Vec<PredicateEvaluation>,

    /// Set when no condition held and the fallback was used
    #[serde(default)]
    pub degraded: bool,
}

impl SelectionResult {
    pub fn kind(&self) -> StrategyKind {
        self.strategy.kind
    }

    pub fn strategy_id(&self) -> &str {
        &self.strategy.id
    }
}

/// Options for configuring the selector
#[derive(Debug, Clone, Default)]
pub struct SelectorOptions {
    /// Return a degraded GenericWrapperComponent instead of failing when
    /// no condition holds
    pub allow_degraded_fallback: bool,
}

/// Maps profiles to strategies by walking a catalog in priority order
#[derive(Debug, Clone)]
pub struct StrategySelector<'a> {
    catalog: &'a StrategyCatalog,
    options: SelectorOptions,
}

impl<'a> StrategySelector<'a> {
    pub fn new(catalog: &'a StrategyCatalog) -> Self {
        Self::with_options(catalog, SelectorOptions::default())
    }

    pub fn with_options(catalog: &'a StrategyCatalog, options: SelectorOptions) -> Self {
        Self { catalog, options }
    }

    pub fn catalog(&self) -> &'a StrategyCatalog {
        self.catalog
    }

    /// Pick the first strategy whose condition holds for `profile`
    #[instrument(level = "debug", skip(self, profile), fields(profile = %profile))]
    pub fn select(&self, profile: &ComponentProfile) -> RefResult<SelectionResult> {
        let mut rationale = Vec::with_capacity(self.catalog.len());

        for strategy in self.catalog {
            let holds = strategy.applies_to(profile);
            debug!(
                priority = strategy.priority,
                strategy = %strategy.id,
                holds,
                "Evaluated predicate"
            );

            rationale.push(PredicateEvaluation {
                priority: strategy.priority,
                strategy_id: strategy.id.clone(),
                kind: strategy.kind,
                condition: strategy.condition.to_string(),
                holds,
            });

            if holds {
                return Ok(SelectionResult {
                    strategy: strategy.clone(),
                    rationale,
                    degraded: false,
                });
            }
        }

        if self.options.allow_degraded_fallback {
            warn!(%profile, "No strategy matched, falling back to generic wrapper component");
            return Ok(SelectionResult {
                strategy: self.fallback_strategy(),
                rationale,
                degraded: true,
            });
        }

        Err(RefError::NoApplicableStrategy {
            profile: profile.to_string(),
        })
    }

    fn fallback_strategy(&self) -> Strategy {
        self.catalog
            .first_of_kind(StrategyKind::GenericWrapperComponent)
            .cloned()
            .unwrap_or_else(|| {
                Strategy::new(
                    "degraded-generic-wrapper",
                    StrategyKind::GenericWrapperComponent,
                    u32::MAX,
                    Condition::always(),
                    "Fallback used when no catalog condition holds",
                )
            })
    }
}

impl Default for StrategySelector<'static> {
    fn default() -> Self {
        Self::new(StrategyCatalog::builtin())
    }
}

/// Select against the builtin catalog
pub fn select(profile: &ComponentProfile) -> RefResult<SelectionResult> {
    StrategySelector::default().select(profile)
}
