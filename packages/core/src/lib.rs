//! # forwardkit-core
//!
//! Decides how a ref should be threaded through a component boundary.
//!
//! A [`ComponentProfile`] describes the component (generic or not, which
//! runtime it targets, how much type inference its callers need). The
//! [`StrategySelector`] walks a [`StrategyCatalog`] in priority order and
//! returns the first strategy whose condition holds, along with the trail of
//! predicate evaluations. The [`StrategyMaterializer`] then turns that
//! strategy and the component's [`PropShape`] into a
//! [`MaterializationDescriptor`] for a code emitter to consume.
//!
//! ## Example
//!
//! ```rust
//! use forwardkit_core::{materialize, select, ComponentProfile, PropShape, StrategyKind, TargetRuntime};
//!
//! let profile = ComponentProfile::known(true, TargetRuntime::Current, true, true);
//! let selection = select(&profile).unwrap();
//! assert_eq!(selection.kind(), StrategyKind::CallSignatureOverload);
//!
//! let shape = PropShape::new().with_generic("T").with_ref_target("HTMLUListElement");
//! let descriptor = materialize(&selection.strategy, &shape).unwrap();
//! assert!(descriptor.requires_module_augmentation);
//! ```

pub mod catalog;
pub mod error;
pub mod materializer;
pub mod profile;
pub mod selector;
pub mod shape;
pub mod strategy;

pub use catalog::StrategyCatalog;
pub use error::{CatalogError, RefError, RefResult};
pub use materializer::{
    materialize, MaterializationDescriptor, RefPropPlan, RefPropSource, StrategyMaterializer,
    TypeParameter, TypeParameterRole,
};
pub use profile::{ComponentProfile, TargetRuntime};
pub use selector::{select, PredicateEvaluation, SelectionResult, SelectorOptions, StrategySelector};
pub use shape::{PropDecl, PropShape};
pub use strategy::{Condition, Strategy, StrategyKind};
