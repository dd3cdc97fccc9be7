//! hubdocs CLI - resolves the site configuration for an aggregated documentation build.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "hubdocs")]
#[command(about = "Resolve multi-project documentation site builds")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to docs.toml config file
    #[arg(short, long, default_value = "docs.toml")]
    config: PathBuf,

    /// Build root; relative paths are resolved against it
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Build inputs that override docs.toml.
#[derive(clap::Args, Debug, Default)]
pub struct BuildArgs {
    /// Project manifest file
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Identifier of the project being built
    #[arg(short, long)]
    project: Option<String>,

    /// Version being documented
    #[arg(long = "doc-version", value_name = "VERSION")]
    version: Option<String>,

    /// Table of contents descriptor
    #[arg(short, long)]
    toc: Option<PathBuf>,

    /// Glob excluded from the source scan (repeatable)
    #[arg(short, long = "exclude", value_name = "GLOB")]
    exclude: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold docs.toml, projects.yaml and a table of contents
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Resolve and print the site-build descriptor
    Resolve {
        #[command(flatten)]
        args: BuildArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Resolve the configuration and report the sources it would build
    Check {
        #[command(flatten)]
        args: BuildArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.root.join(&cli.config);

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.root, yes)?;
        }
        Commands::Resolve { args, format } => {
            commands::resolve::run(&cli.root, &config_path, args, format)?;
        }
        Commands::Check { args } => {
            commands::check::run(&cli.root, &config_path, args)?;
        }
    }

    Ok(())
}
