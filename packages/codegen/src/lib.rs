//! TypeScript declaration emission for ref-forwarding strategies.
//!
//! Reads a [`Manifest`] of component profiles and prop shapes, runs each
//! through selection and materialization, and writes a `.d.ts` document.

mod context;
mod emitter;
mod error;
mod generator;
mod manifest;

pub use context::{EmitContext, EmitOptions};
pub use emitter::{
    emit_document, emit_document_with, plan_component, plan_manifest, ComponentPlan,
    EmittedDocument,
};
pub use error::{EmitError, EmitResult};
pub use generator::{CodeGenerator, TypeScriptGenerator};
pub use manifest::{ComponentEntry, Manifest};
