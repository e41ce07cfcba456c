use crate::context::{EmitContext, EmitOptions};
use crate::error::{EmitError, EmitResult};
use crate::generator::{CodeGenerator, TypeScriptGenerator};
use crate::manifest::{ComponentEntry, Manifest};
use forwardkit_core::{
    MaterializationDescriptor, PredicateEvaluation, StrategyKind, StrategyMaterializer,
    StrategySelector,
};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Selection and materialization outcome for one component
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentPlan {
    pub name: String,
    pub props_type: String,
    pub strategy_id: String,
    pub kind: StrategyKind,
    pub degraded: bool,
    pub rationale: Vec<PredicateEvaluation>,
    pub descriptor: MaterializationDescriptor,
}

/// Result of emitting a whole manifest
#[derive(Debug, Clone)]
pub struct EmittedDocument {
    pub code: String,
    pub plans: Vec<ComponentPlan>,
    pub failures: Vec<EmitError>,
}

impl EmittedDocument {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run selection and materialization for a single component
pub fn plan_component(
    entry: &ComponentEntry,
    selector: &StrategySelector<'_>,
    materializer: &StrategyMaterializer,
) -> EmitResult<ComponentPlan> {
    let with_name = |source| EmitError::Component {
        component: entry.name.clone(),
        source,
    };

    let selection = selector.select(&entry.profile).map_err(with_name)?;
    let props_type = entry.props_type();
    let descriptor = materializer
        .materialize(&selection.strategy, &entry.shape, &props_type)
        .map_err(with_name)?;

    debug!(
        component = %entry.name,
        strategy = %selection.strategy.id,
        degraded = selection.degraded,
        "Planned component"
    );

    Ok(ComponentPlan {
        name: entry.name.clone(),
        props_type,
        strategy_id: selection.strategy.id.clone(),
        kind: selection.strategy.kind,
        degraded: selection.degraded,
        rationale: selection.rationale,
        descriptor,
    })
}

/// Plan every component in the manifest, keeping successes and failures apart
pub fn plan_manifest<'m>(
    manifest: &'m Manifest,
    selector: &StrategySelector<'_>,
    materializer: &StrategyMaterializer,
) -> (Vec<(ComponentPlan, &'m ComponentEntry)>, Vec<EmitError>) {
    let mut plans = Vec::new();
    let mut failures = Vec::new();

    for entry in &manifest.components {
        match plan_component(entry, selector, materializer) {
            Ok(plan) => plans.push((plan, entry)),
            Err(err) => {
                warn!(component = %entry.name, error = %err, "Skipping component");
                failures.push(err);
            }
        }
    }

    (plans, failures)
}

/// Emit TypeScript declarations for every component in the manifest.
///
/// Components that fail selection or materialization are left out of the
/// output and reported in [`EmittedDocument::failures`].
pub fn emit_document(
    manifest: &Manifest,
    selector: &StrategySelector<'_>,
    options: EmitOptions,
) -> EmittedDocument {
    emit_document_with(manifest, selector, options, &TypeScriptGenerator::new())
}

pub fn emit_document_with<G: CodeGenerator>(
    manifest: &Manifest,
    selector: &StrategySelector<'_>,
    options: EmitOptions,
    generator: &G,
) -> EmittedDocument {
    info!(components = manifest.components.len(), "Starting declaration emission");

    let materializer = StrategyMaterializer {
        wrapper_ref_prop: options.wrapper_ref_prop.clone(),
    };
    let ctx = EmitContext::new(options);

    let (planned, failures) = plan_manifest(manifest, selector, &materializer);

    if ctx.options.include_react_import {
        ctx.add_line("import React from \"react\";");
        ctx.add("\n");
    }

    // One augmentation block per strategy kind, in kind order
    let augmented: BTreeSet<StrategyKind> = planned
        .iter()
        .filter(|(plan, _)| plan.descriptor.requires_module_augmentation)
        .map(|(plan, _)| plan.kind)
        .collect();
    for kind in augmented {
        if let Some(block) = generator.generate_augmentation(kind) {
            ctx.add_block(&block);
            ctx.add("\n");
        }
    }

    for (plan, entry) in &planned {
        emit_component(plan, entry, &ctx, generator);
    }

    info!(
        emitted = planned.len(),
        failed = failures.len(),
        "Declaration emission complete"
    );

    EmittedDocument {
        code: ctx.get_output(),
        plans: planned.into_iter().map(|(plan, _)| plan).collect(),
        failures,
    }
}

fn emit_component<G: CodeGenerator>(
    plan: &ComponentPlan,
    entry: &ComponentEntry,
    ctx: &EmitContext,
    generator: &G,
) {
    if ctx.options.annotate_strategy {
        let marker = if plan.degraded { " (degraded)" } else { "" };
        ctx.add_line(&format!(
            "// {}: {} via {}{}",
            plan.name, plan.kind, plan.descriptor.construct, marker
        ));
    }

    generator.emit_props_interface(ctx, &plan.props_type, &entry.shape.props, &plan.descriptor);
    ctx.add_line(&generator.generate_component(&plan.name, &plan.props_type, &plan.descriptor));
    ctx.add("\n");
}
