use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Source directory for component manifests
    #[arg(short, long, default_value = "src")]
    pub src_dir: String,

    /// Output directory for emitted declarations
    #[arg(short, long, default_value = "types")]
    pub out_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

const EXAMPLE_MANIFEST: &str = r#"{
  "components": [
    {
      "name": "Button",
      "profile": { "isGeneric": false, "targetRuntime": "current" },
      "shape": {
        "props": [{ "name": "label", "type": "string" }],
        "refTarget": "HTMLButtonElement"
      }
    },
    {
      "name": "List",
      "profile": { "isGeneric": true, "targetRuntime": "current", "requiresFullInference": true },
      "shape": {
        "props": [
          { "name": "items", "type": "T[]" },
          { "name": "onSelect", "type": "(item: T) => void", "optional": true }
        ],
        "refTarget": "HTMLUListElement",
        "genericParams": ["T"]
      }
    }
  ]
}
"#;

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing forwardkit project...".bright_blue().bold());

    let src_dir = PathBuf::from(cwd).join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    let example_file = src_dir.join("components.refs.json");
    if !example_file.exists() {
        fs::write(&example_file, EXAMPLE_MANIFEST)?;
        println!("  {} Created components.refs.json", "✓".green());
    }

    let config = Config {
        src_dir: args.src_dir.clone(),
        out_dir: Some(args.out_dir.clone()),
        ..Config::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Describe your components in {}/components.refs.json", args.src_dir);
    println!("  2. Run: forwardkit select");
    println!("  3. Run: forwardkit compile, then check {}/", args.out_dir);

    Ok(())
}
