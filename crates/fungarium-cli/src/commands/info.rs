//! Info command implementation.

use crate::cli::InfoArgs;
use crate::commands::resolve_path;
use crate::error::Result;
use crate::output::Formatter;
use fungarium_store::Taxonomy;

/// Execute the info command.
pub fn execute_info(args: InfoArgs, taxonomy: &Taxonomy, formatter: &Formatter) -> Result<()> {
    let path = resolve_path(taxonomy.root(), &args.path)?;
    let node = taxonomy.lookup(&path)?;
    println!("{}", formatter.format_info(&path, node)?);
    Ok(())
}
