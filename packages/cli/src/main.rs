mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    catalog, compile, init, select, CatalogArgs, CompileArgs, InitArgs, SelectArgs,
};
use tracing::Level;

/// forwardkit - pick and materialize ref-forwarding strategies for components
#[derive(Parser, Debug)]
#[command(name = "forwardkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log selection and emission details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new forwardkit project
    Init(InitArgs),

    /// List the strategy catalog
    Catalog(CatalogArgs),

    /// Select a strategy for every component in the manifests
    Select(SelectArgs),

    /// Emit TypeScript declarations for the manifests
    Compile(CompileArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Catalog(args) => catalog(args, &cwd),
        Command::Select(args) => select(args, &cwd),
        Command::Compile(args) => compile(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
