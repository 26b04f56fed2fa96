//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use fungarium_domain::{AttributeValue, Rank, TaxonNode, TaxonPath};
use fungarium_view::{hue_to_rgb, Row};
use std::collections::BTreeMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Marker printed in place of an expand control on leaf rows.
const LEAF_MARKER: char = '·';

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    show_attributes: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
            show_attributes: true,
        }
    }

    /// Toggle printing of leaf attributes under tree rows.
    pub fn with_attributes(mut self, show_attributes: bool) -> Self {
        self.show_attributes = show_attributes;
        self
    }

    /// Format rendered rows.
    pub fn format_rows(&self, rows: &[Row<'_>]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_rows_json(rows),
            OutputFormat::Tree => Ok(self.format_rows_tree(rows)),
        }
    }

    /// Format rows as JSON.
    fn format_rows_json(&self, rows: &[Row<'_>]) -> Result<String> {
        let json_rows: Vec<serde_json::Value> = rows
            .iter()
            .map(|r| {
                serde_json::json!({
                    "depth": r.depth,
                    "name": r.name,
                    "label": r.label,
                    "rank": r.rank,
                    "expand_control": r.expand_control.map(|c| c.label()),
                    "description_control": r.description_control.map(|c| c.label()),
                    "description": r.description,
                    "attributes": attributes_json(r.attributes),
                    "hue": r.hue
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_rows)?)
    }

    /// Format rows as an indented tree.
    fn format_rows_tree(&self, rows: &[Row<'_>]) -> String {
        let mut lines = Vec::new();

        for row in rows {
            let indent = "  ".repeat(row.depth);
            let marker = row
                .expand_control
                .map(|c| c.marker())
                .unwrap_or(LEAF_MARKER);

            let mut line = format!("{}{} {}", indent, marker, self.paint_label(row));
            if let Some(control) = row.description_control {
                line.push_str(&format!("  [{}]", self.colorize(control.label(), "cyan")));
            }
            lines.push(line);

            if let Some(description) = row.description {
                lines.push(format!("{}    {}", indent, self.colorize(description, "yellow")));
            }

            if self.show_attributes && row.expand_control.is_none() {
                for (key, value) in row.attributes {
                    lines.push(format!("{}    {}: {}", indent, key, value));
                }
            }
        }

        lines.join("\n")
    }

    /// Format details of one taxon.
    pub fn format_info(&self, path: &TaxonPath, node: &TaxonNode) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let children: Vec<&str> = node.children().map(|c| c.name()).collect();
                let value = serde_json::json!({
                    "path": path.to_string(),
                    "name": node.name(),
                    "rank": node.rank(),
                    "description": node.description(),
                    "domain": node.domain(),
                    "inherited_domain": node.inherited_domain(),
                    "attributes": attributes_json(node.attributes()),
                    "children": children
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Tree => Ok(self.format_info_table(path, node)),
        }
    }

    /// Format taxon details as a table.
    fn format_info_table(&self, path: &TaxonPath, node: &TaxonNode) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Path".to_string(), path.to_string()]);
        builder.push_record(["Name".to_string(), node.display_name()]);
        let rank = match Rank::parse(node.rank()) {
            Some(rank) => rank.as_str().to_string(),
            None => format!("{} (non-standard)", node.rank()),
        };
        builder.push_record(["Rank".to_string(), rank]);
        if let Some(description) = node.description() {
            builder.push_record(["Description", description]);
        }
        if let Some(domain) = node.domain() {
            builder.push_record(["Domain", domain]);
        }
        if let Some(inherited) = node.inherited_domain() {
            builder.push_record(["Inherited domain", inherited]);
        }
        for (key, value) in node.attributes() {
            builder.push_record([key.clone(), value.to_string()]);
        }
        if !node.is_leaf() {
            let children: Vec<String> = node.children().map(|c| c.display_name()).collect();
            builder.push_record(["Children".to_string(), children.join(", ")]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Row label on its hue background, plain without color.
    fn paint_label(&self, row: &Row<'_>) -> String {
        if !self.color_enabled {
            return row.label.clone();
        }
        let (r, g, b) = hue_to_rgb(row.hue);
        row.label.as_str().white().bold().on_truecolor(r, g, b).to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn attributes_json(attributes: &BTreeMap<String, AttributeValue>) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = attributes
        .iter()
        .map(|(key, value)| {
            let json = match value {
                AttributeValue::Text(s) => serde_json::json!(s),
                AttributeValue::Number(n) => serde_json::json!(n),
                AttributeValue::Flag(b) => serde_json::json!(b),
            };
            (key.clone(), json)
        })
        .collect();
    serde_json::Value::Object(map)
}
