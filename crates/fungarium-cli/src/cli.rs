//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fungarium CLI - Browse the taxonomic tree of the Fungi kingdom.
#[derive(Debug, Parser)]
#[command(name = "fungarium")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed file to load instead of the built-in dataset
    #[arg(short, long, global = true, env = "FUNGARIUM_DATA")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Indented tree (default)
    Tree,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the tree once
    Show(ShowArgs),

    /// Show details of a single taxon
    Info(InfoArgs),

    /// Browse the tree interactively
    Browse,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Expand every node
    #[arg(short, long)]
    pub all: bool,

    /// Reveal descriptions on every visible node
    #[arg(long)]
    pub descriptions: bool,
}

/// Arguments for the info command.
#[derive(Debug, Parser)]
pub struct InfoArgs {
    /// Slash-separated path, e.g. Fungi/Ascomycota/Eurotiomycetes
    pub path: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Tree => crate::config::OutputFormat::Tree,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
