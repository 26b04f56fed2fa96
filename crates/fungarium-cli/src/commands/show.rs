//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::Formatter;
use fungarium_store::Taxonomy;
use fungarium_view::TreeView;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, taxonomy: &Taxonomy, formatter: &Formatter) -> Result<()> {
    println!("{}", render_show(&args, taxonomy, formatter)?);
    Ok(())
}

/// Render the tree in the state the flags ask for.
fn render_show(args: &ShowArgs, taxonomy: &Taxonomy, formatter: &Formatter) -> Result<String> {
    let mut view = TreeView::from_source(taxonomy);
    if args.all {
        view.root_mut().expand_all();
    }
    if args.descriptions {
        view.root_mut().reveal_descriptions();
    }

    formatter.format_rows(&view.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_show_initial_state() {
        let taxonomy = Taxonomy::fungi().unwrap();
        let formatter = Formatter::new(OutputFormat::Tree, false);
        let args = ShowArgs {
            all: false,
            descriptions: false,
        };

        let output = render_show(&args, &taxonomy, &formatter).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("+ Fungi (Kingdom)"));
    }

    #[test]
    fn test_show_all() {
        let taxonomy = Taxonomy::fungi().unwrap();
        let formatter = Formatter::new(OutputFormat::Json, false);
        let args = ShowArgs {
            all: true,
            descriptions: true,
        };

        let output = render_show(&args, &taxonomy, &formatter).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), taxonomy.len());
        assert_eq!(rows[0]["description_control"], "Hide Description");
    }
}
