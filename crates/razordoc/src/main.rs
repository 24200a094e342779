//! razordoc CLI - documentation example preprocessor.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "razordoc")]
#[command(about = "Highlight documentation examples and generate their render tests")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to razordoc.toml config file
    #[arg(short, long, default_value = "razordoc.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default razordoc.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate highlighted markup, the test suite and snippets (default)
    Build,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command.unwrap_or(Commands::Build) {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Build => {
            commands::build::run(&cli.config)?;
        }
    }

    Ok(())
}
