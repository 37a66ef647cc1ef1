//! Console output for the ndvi commands
//!
//! Human mode prints styled lines as the workflow progresses. JSON mode keeps
//! stdout for the one document a command ends with, so progress lines,
//! fields and tables are dropped there.

use console::style;
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self { format: if json { OutputFormat::Json } else { OutputFormat::Human } }
    }

    /// Completion message; in JSON mode this is the command's document
    pub fn success(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => println!("{} {}", style("✓").green().bold(), message),
            OutputFormat::Json => self.emit(&serde_json::json!({
                "status": "success",
                "message": message.to_string(),
            })),
        }
    }

    /// Workflow status line
    pub fn status(&self, message: impl Display) {
        if self.is_human() {
            println!("{} {}", style("ℹ").blue().bold(), message);
        }
    }

    /// Alerts always reach the user, on stderr so JSON stdout stays clean
    pub fn warning(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", style("⚠").yellow().bold(), message),
            OutputFormat::Json => eprintln!(
                "{}",
                serde_json::json!({"status": "warning", "message": message.to_string()})
            ),
        }
    }

    /// Labelled value, such as the drawn parcel or the overlay URL
    pub fn field(&self, label: impl Display, value: impl Display) {
        if self.is_human() {
            println!("{}: {}", style(label).bold(), value);
        }
    }

    pub fn table<T: Tabled>(&self, rows: Vec<T>, empty: &str) {
        if self.is_human() {
            println!("{}", render_table(rows, empty));
        }
    }

    /// Final document of a command
    pub fn result<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Human => println!("{}", serde_json::to_string_pretty(&data)?),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({"status": "success", "data": data}))?
            ),
        }
        Ok(())
    }

    pub fn section(&self, title: impl Display) {
        if self.is_human() {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Multi-line text indented under a section
    pub fn block(&self, text: &str) {
        if self.is_human() {
            for line in text.lines() {
                println!("  {}", line);
            }
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    fn emit(&self, value: &serde_json::Value) {
        println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
    }
}

/// Rounded table, or the dimmed `empty` label when there are no rows
fn render_table<T: Tabled>(rows: Vec<T>, empty: &str) -> String {
    if rows.is_empty() {
        return style(format!("({})", empty)).dim().to_string();
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
