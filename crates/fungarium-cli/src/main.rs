//! Fungarium CLI - Browse the taxonomic tree of the Fungi kingdom.

use clap::Parser;
use fungarium_cli::commands;
use fungarium_cli::repl;
use fungarium_cli::{Cli, Command, Config, Formatter};
use fungarium_store::Taxonomy;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> fungarium_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config; the default file is created on first run
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring unreadable config");
            Config::default()
        }),
    };

    // Build the taxonomy before anything is rendered
    let taxonomy = match cli.data.as_ref().or(config.data.as_ref()) {
        Some(path) => {
            info!(path = %path.display(), "Loading taxonomy from seed file");
            Taxonomy::from_seed_file(path)?
        }
        None => Taxonomy::fungi()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled).with_attributes(config.settings.show_attributes);

    match cli.command {
        None | Some(Command::Browse) => repl::run_repl(&taxonomy, &formatter)?,
        Some(Command::Show(args)) => commands::execute_show(args, &taxonomy, &formatter)?,
        Some(Command::Info(args)) => commands::execute_info(args, &taxonomy, &formatter)?,
    }

    Ok(())
}
