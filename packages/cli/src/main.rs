mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{block, element, init, resolve, BlockArgs, ElementArgs, InitArgs, ResolveArgs};
use config::Config;
use std::path::PathBuf;

/// withbem CLI - BEM class names for UI components
#[derive(Parser, Debug)]
#[command(name = "withbem")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a config file (defaults to ./withbem.config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a withbem.config.json
    Init(InitArgs),

    /// Flatten class specs into a class string
    Resolve(ResolveArgs),

    /// Compose a block name with modifiers and mixes
    Block(BlockArgs),

    /// Compose an element name with modifiers and mixes
    Element(ElementArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Resolve(args) => resolve(args),
        Command::Block(args) => {
            let config = Config::load(&cwd, cli.config.as_deref())?;
            block(args, &config)
        }
        Command::Element(args) => {
            let config = Config::load(&cwd, cli.config.as_deref())?;
            element(args, &config)
        }
    }
}
