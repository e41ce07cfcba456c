use super::{find_manifests, read_manifest};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use forwardkit_codegen::{plan_component, ComponentPlan};
use forwardkit_core::{StrategyMaterializer, StrategySelector};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Manifest file or directory (defaults to the configured source directory)
    pub input: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Show every predicate evaluated on the way to the match
    #[arg(short, long)]
    pub rationale: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileReport {
    file: String,
    plans: Vec<ComponentPlan>,
    failures: Vec<String>,
}

pub fn select(args: SelectArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let catalog = config.load_catalog(cwd)?;
    let selector = StrategySelector::with_options(&catalog, config.selector_options());
    let materializer = StrategyMaterializer {
        wrapper_ref_prop: config.emit_options().wrapper_ref_prop,
    };

    let input = args.input.clone().unwrap_or_else(|| config.get_src_dir(cwd));
    let manifests = find_manifests(&input)?;

    let mut reports = Vec::new();
    for path in &manifests {
        reports.push(select_file(path, &selector, &materializer));
    }

    let failed: usize = reports.iter().map(|r| r.failures.len()).sum();

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&reports)?),
        "text" => print_text(&reports, args.rationale),
        other => return Err(anyhow!("Unknown format: {}", other)),
    }

    if failed > 0 {
        return Err(anyhow!("{} failure(s) while selecting strategies", failed));
    }

    Ok(())
}

fn select_file(
    path: &Path,
    selector: &StrategySelector<'_>,
    materializer: &StrategyMaterializer,
) -> FileReport {
    let mut plans = Vec::new();
    let mut failures = Vec::new();

    let manifest = match read_manifest(path) {
        Ok(manifest) => manifest,
        Err(e) => {
            failures.push(e.to_string());
            return FileReport {
                file: path.display().to_string(),
                plans,
                failures,
            };
        }
    };

    for entry in &manifest.components {
        match plan_component(entry, selector, materializer) {
            Ok(plan) => plans.push(plan),
            Err(err) => failures.push(err.to_string()),
        }
    }

    FileReport {
        file: path.display().to_string(),
        plans,
        failures,
    }
}

fn print_text(reports: &[FileReport], rationale: bool) {
    println!("{}", "🔍 Selecting ref-forwarding strategies...".bright_blue().bold());

    for report in reports {
        println!();
        println!("{}", report.file.bright_white());

        for plan in &report.plans {
            let degraded = if plan.degraded {
                format!(" {}", "(degraded)".yellow())
            } else {
                String::new()
            };
            println!(
                "  {} {} → {} [{}]{}",
                "✓".green(),
                plan.name.bold(),
                plan.kind.to_string().cyan(),
                plan.strategy_id,
                degraded
            );

            if rationale {
                for step in &plan.rationale {
                    let mark = if step.holds { "✓".green() } else { "✗".red() };
                    println!(
                        "      {} {:>2}. {} ({})",
                        mark,
                        step.priority,
                        step.strategy_id,
                        step.condition.dimmed()
                    );
                }
            }
        }

        for failure in &report.failures {
            eprintln!("  {} {}", "✗".red(), failure.red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_unreadable_manifest_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.refs.json");
        fs::write(&path, "{ not json").unwrap();

        let report = select_file(&path, &StrategySelector::default(), &StrategyMaterializer::new());
        assert!(report.plans.is_empty());
        assert_eq!(report.failures.len(), 1);
    }

    #[test]
    fn test_select_continues_past_unreadable_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_string_lossy().to_string();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a_broken.refs.json"), "{ not json").unwrap();
        fs::write(
            src.join("b_button.refs.json"),
            r#"{ "components": [ { "name": "Button", "profile": { "targetRuntime": "current" } } ] }"#,
        )
        .unwrap();

        let args = SelectArgs {
            input: None,
            format: "json".to_string(),
            rationale: false,
        };
        let err = select(args, &cwd).unwrap_err();
        assert_eq!(err.to_string(), "1 failure(s) while selecting strategies");

        let good = select_file(
            &src.join("b_button.refs.json"),
            &StrategySelector::default(),
            &StrategyMaterializer::new(),
        );
        assert_eq!(good.plans.len(), 1);
    }
}
