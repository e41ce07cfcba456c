use super::{find_manifests, manifest_stem, read_manifest};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use forwardkit_codegen::emit_document;
use forwardkit_core::StrategySelector;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Manifest file or directory (defaults to the configured source directory)
    pub input: Option<PathBuf>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Omit the strategy comment above each component
    #[arg(long)]
    pub no_annotations: bool,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let catalog = config.load_catalog(cwd)?;
    let selector = StrategySelector::with_options(&catalog, config.selector_options());

    let src_dir = config.get_src_dir(cwd);
    let input = args.input.clone().unwrap_or_else(|| src_dir.clone());
    let manifests = find_manifests(&input)?;

    if manifests.is_empty() {
        println!("{}", "⚠️  No .refs.json manifests found".yellow());
        return Ok(());
    }

    if !args.stdout {
        println!("{}", "🔨 Emitting ref-forwarding declarations...".bright_blue().bold());
        println!("Found {} manifests", manifests.len());
    }

    let out_dir = PathBuf::from(cwd).join(
        args.out_dir
            .as_deref()
            .or(config.out_dir.as_deref())
            .unwrap_or("types"),
    );

    let mut emitted = 0;
    let mut failed = 0;

    for path in &manifests {
        let manifest = match read_manifest(path) {
            Ok(manifest) => manifest,
            Err(e) => {
                failed += 1;
                eprintln!("  {} {}", "✗".red(), e.to_string().red());
                continue;
            }
        };

        let mut options = config.emit_options();
        options.annotate_strategy = !args.no_annotations;
        let document = emit_document(&manifest, &selector, options);

        for failure in &document.failures {
            failed += 1;
            eprintln!("  {} {} - {}", "✗".red(), path.display(), failure.to_string().red());
        }
        emitted += document.plans.len();

        if args.stdout {
            println!("{}", document.code);
            continue;
        }

        let output_file = output_path(path, &src_dir, &out_dir);
        if let Some(parent) = output_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_file, &document.code)?;

        println!(
            "  {} {} → {}",
            "✓".green(),
            path.strip_prefix(&src_dir).unwrap_or(path).display(),
            output_file.display()
        );
    }

    if !args.stdout {
        println!();
        if failed == 0 {
            println!("{} Emitted {} components successfully", "✅".green(), emitted);
        } else {
            println!(
                "{} Emitted {} components, {} errors",
                "⚠️".yellow(),
                emitted,
                failed
            );
        }
    }

    if failed > 0 {
        return Err(anyhow!("{} failure(s) while emitting declarations", failed));
    }

    Ok(())
}

/// `<src>/forms/input.refs.json` → `<out>/forms/input.d.ts`
fn output_path(manifest: &Path, src_dir: &Path, out_dir: &Path) -> PathBuf {
    let relative_dir = manifest
        .parent()
        .and_then(|p| p.strip_prefix(src_dir).ok())
        .unwrap_or_else(|| Path::new(""));

    out_dir
        .join(relative_dir)
        .join(format!("{}.d.ts", manifest_stem(manifest)))
}
