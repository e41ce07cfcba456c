use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Check that every profile is matched by exactly one rule
    #[arg(long)]
    pub validate: bool,
}

pub fn catalog(args: CatalogArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let catalog = config.load_catalog(cwd)?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&catalog)?),
        "text" => {
            println!("{}", "📚 Strategy catalog".bright_blue().bold());
            println!();
            for strategy in &catalog {
                let typing = if strategy.explicit_typing {
                    " (explicit typing)".dimmed().to_string()
                } else {
                    String::new()
                };
                println!(
                    "  {} {} → {}{}",
                    format!("{:>2}.", strategy.priority).bright_white(),
                    strategy.id.bold(),
                    strategy.kind.to_string().cyan(),
                    typing
                );
                println!("      when  {}", strategy.condition);
                if !strategy.description.is_empty() {
                    println!("      {}", strategy.description.dimmed());
                }
            }
        }
        other => return Err(anyhow!("Unknown format: {}", other)),
    }

    if args.validate {
        catalog.validate()?;
        println!();
        println!("  {} Every profile matches exactly one rule", "✓".green());
    }

    Ok(())
}
