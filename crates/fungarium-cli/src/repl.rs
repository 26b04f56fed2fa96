//! Interactive tree browser (Read-Eval-Print Loop).

use crate::commands::resolve_path;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use fungarium_domain::display_name;
use fungarium_store::Taxonomy;
use fungarium_view::TreeView;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::debug;

/// Run the interactive browser over a taxonomy.
pub fn run_repl(taxonomy: &Taxonomy, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Fungarium browser - Type 'help' for commands, 'exit' to quit"));
    println!();

    let mut editor = DefaultEditor::new()?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut view = TreeView::from_source(taxonomy);
    println!("{}", formatter.format_rows(&view.render())?);

    loop {
        match editor.readline("fungarium> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => match execute_repl_command(cmd, &mut view, taxonomy, formatter) {
                        Ok(output) => println!("{}", output),
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Expand the node at a path
    Expand(String),
    /// Collapse the node at a path
    Collapse(String),
    /// Flip the expanded state of the node at a path
    Toggle(String),
    /// Flip description visibility of the node at a path
    Description(String),
    /// Print the current tree
    Show,
    /// Print details of the node at a path
    Info(String),
    /// Print help
    Help,
    /// Leave the browser
    Exit,
}

/// Parse a REPL command line.
///
/// Path arguments keep their inner spaces, so `desc Fungi incertae sedis`
/// works as well as the underscored form.
pub fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim().to_string()),
        None => (line, String::new()),
    };

    match verb {
        "" => Err(CliError::InvalidInput("Empty command".to_string())),
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "show" | "ls" => Ok(ReplCommand::Show),
        "expand" | "open" => Ok(ReplCommand::Expand(rest)),
        "collapse" | "close" => Ok(ReplCommand::Collapse(rest)),
        "toggle" | "t" => Ok(ReplCommand::Toggle(rest)),
        "desc" | "description" => Ok(ReplCommand::Description(rest)),
        "info" => Ok(ReplCommand::Info(rest)),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            verb
        ))),
    }
}

/// Execute a REPL command against the view, returning what to print.
fn execute_repl_command<'a>(
    cmd: ReplCommand,
    view: &mut TreeView<'a>,
    taxonomy: &'a Taxonomy,
    formatter: &Formatter,
) -> Result<String> {
    let (path, changed) = match cmd {
        ReplCommand::Show => return formatter.format_rows(&view.render()),
        ReplCommand::Info(input) => {
            let path = resolve_path(taxonomy.root(), &input)?;
            let node = taxonomy.lookup(&path)?;
            return formatter.format_info(&path, node);
        }
        ReplCommand::Help | ReplCommand::Exit => return Ok(String::new()),
        ReplCommand::Expand(input) => {
            let path = resolve_path(taxonomy.root(), &input)?;
            let changed = mounted(view, taxonomy, &path)?.set_expanded(true);
            (path, changed)
        }
        ReplCommand::Collapse(input) => {
            let path = resolve_path(taxonomy.root(), &input)?;
            let changed = mounted(view, taxonomy, &path)?.set_expanded(false);
            (path, changed)
        }
        ReplCommand::Toggle(input) => {
            let path = resolve_path(taxonomy.root(), &input)?;
            let changed = mounted(view, taxonomy, &path)?.toggle_expanded();
            (path, changed)
        }
        ReplCommand::Description(input) => {
            let path = resolve_path(taxonomy.root(), &input)?;
            let node = mounted(view, taxonomy, &path)?;
            if !node.toggle_description() {
                let name = display_name(path.leaf());
                return Ok(formatter.warning(&format!("{} has no description", name)));
            }
            (path, true)
        }
    };

    debug!(path = %path, changed, "View updated");

    let mut output = String::new();
    // Only leaves refuse an expansion change
    if !changed {
        output.push_str(&formatter.warning(&format!("{} has no children", path)));
        output.push('\n');
    }
    output.push_str(&formatter.format_rows(&view.render())?);
    Ok(output)
}

/// Find the mounted view for a path, distinguishing unknown from hidden taxa.
fn mounted<'v, 'a>(
    view: &'v mut TreeView<'a>,
    taxonomy: &'a Taxonomy,
    path: &fungarium_domain::TaxonPath,
) -> Result<&'v mut fungarium_view::NodeView<'a>> {
    taxonomy.lookup(path)?;
    view.find_mut(path).ok_or_else(|| {
        let parent = path.parent().map(|p| p.to_string()).unwrap_or_default();
        CliError::InvalidInput(format!("{} is not visible; expand {} first", path, parent))
    })
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let fungarium_dir = home.join(".fungarium");
    std::fs::create_dir_all(&fungarium_dir)?;
    Ok(fungarium_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  show                  - Print the tree as currently expanded");
    println!("  expand <path>         - Expand a taxon");
    println!("  collapse <path>       - Collapse a taxon");
    println!("  toggle <path>         - Expand or collapse a taxon");
    println!("  desc <path>           - Show or hide a taxon's description");
    println!("  info <path>           - Show details of a taxon");
    println!("  help, ?               - Show this help");
    println!("  exit, quit, q         - Exit the browser");
    println!();
    println!("  Paths are slash-separated and may omit the root, e.g. Ascomycota/Pezizomycotina.");
    println!("  An empty path means the root.");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use fungarium_store::StoreError;

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Tree, false).with_attributes(false)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_repl_command("exit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("show").unwrap(), ReplCommand::Show);
        assert_eq!(parse_repl_command("expand").unwrap(), ReplCommand::Expand(String::new()));
        assert_eq!(
            parse_repl_command("desc  Fungi incertae sedis ").unwrap(),
            ReplCommand::Description("Fungi incertae sedis".to_string())
        );
        assert_eq!(
            parse_repl_command("toggle Ascomycota").unwrap(),
            ReplCommand::Toggle("Ascomycota".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(parse_repl_command("grow Fungi"), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_expand_and_collapse() {
        let taxonomy = Taxonomy::fungi().unwrap();
        let mut view = TreeView::from_source(&taxonomy);
        let formatter = formatter();

        let output = execute_repl_command(ReplCommand::Expand(String::new()), &mut view, &taxonomy, &formatter).unwrap();
        assert_eq!(output.lines().count(), 1 + taxonomy.root().child_count());
        assert!(output.contains("Chytridiomycota (Phylum)"));

        let output = execute_repl_command(ReplCommand::Collapse("Fungi".to_string()), &mut view, &taxonomy, &formatter).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_hidden_taxon_is_rejected() {
        let taxonomy = Taxonomy::fungi().unwrap();
        let mut view = TreeView::from_source(&taxonomy);

        let result = execute_repl_command(
            ReplCommand::Toggle("Ascomycota/Pezizomycotina".to_string()),
            &mut view,
            &taxonomy,
            &formatter(),
        );
        assert!(
            matches!(result, Err(CliError::InvalidInput(msg)) if msg.ends_with("expand Fungi/Ascomycota first"))
        );
    }

    #[test]
    fn test_unknown_taxon_is_not_found() {
        let taxonomy = Taxonomy::fungi().unwrap();
        let mut view = TreeView::from_source(&taxonomy);

        let result = execute_repl_command(ReplCommand::Expand("Oomycota".to_string()), &mut view, &taxonomy, &formatter());
        assert!(matches!(result, Err(CliError::Store(StoreError::NotFound(_)))));
    }

    #[test]
    fn test_description_toggle() {
        let taxonomy = Taxonomy::fungi().unwrap();
        let mut view = TreeView::from_source(&taxonomy);
        let formatter = formatter();

        let output = execute_repl_command(ReplCommand::Description(String::new()), &mut view, &taxonomy, &formatter).unwrap();
        assert!(output.contains("[Hide Description]"));
        assert!(view.root().is_description_visible());

        let output = execute_repl_command(ReplCommand::Description(String::new()), &mut view, &taxonomy, &formatter).unwrap();
        assert!(output.contains("[Show Description]"));
    }

    #[test]
    fn test_description_missing_warns() {
        let taxonomy = Taxonomy::fungi().unwrap();
        let mut view = TreeView::from_source(&taxonomy);
        let formatter = formatter();

        for path in ["", "Chytridiomycota"] {
            execute_repl_command(ReplCommand::Expand(path.to_string()), &mut view, &taxonomy, &formatter).unwrap();
        }

        let output = execute_repl_command(
            ReplCommand::Description("Chytridiomycota/Chytridiomycetes".to_string()),
            &mut view,
            &taxonomy,
            &formatter,
        )
        .unwrap();
        assert_eq!(output, "⚠ Chytridiomycetes has no description");
    }

    #[test]
    fn test_expand_leaf_warns() {
        let taxonomy = Taxonomy::fungi().unwrap();
        let mut view = TreeView::from_source(&taxonomy);
        let formatter = formatter();

        for path in ["", "Chytridiomycota", "Chytridiomycota/Chytridiomycetes", "Chytridiomycota/Chytridiomycetes/Chytridiales"] {
            execute_repl_command(ReplCommand::Expand(path.to_string()), &mut view, &taxonomy, &formatter).unwrap();
        }

        let output = execute_repl_command(
            ReplCommand::Expand("Chytridiomycota/Chytridiomycetes/Chytridiales/Chytridium".to_string()),
            &mut view,
            &taxonomy,
            &formatter,
        )
        .unwrap();
        assert!(output.starts_with("⚠ Fungi/Chytridiomycota/Chytridiomycetes/Chytridiales/Chytridium has no children"));
        assert!(output.contains("· Chytridium (Genus)"));
    }
}
