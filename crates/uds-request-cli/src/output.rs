//! Output formatting for uds-request (text, json)

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};
use uds_request::{NegativeResponseCode, OutputFormat as ConfigFormat, UdsRequest};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Space separated hex bytes (default)
    Text,
    /// JSON format
    Json,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ConfigFormat::Text,
            OutputFormat::Json => ConfigFormat::Json,
        }
    }
}

/// Context for output rendering
pub struct OutputContext {
    pub format: ConfigFormat,
    pub quiet: bool,
}

impl OutputContext {
    pub fn new(format: ConfigFormat, no_color: bool, quiet: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { format, quiet }
    }

    /// Print an info message to stderr (unless in quiet mode)
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            eprintln!("{}", msg.dimmed());
        }
    }

    /// Print a warning message
    pub fn warn(&self, msg: &str) {
        eprintln!("{}", msg.yellow());
    }

    /// Print a built request
    pub fn print_request(&self, request: &UdsRequest) {
        match self.format {
            ConfigFormat::Text => println!("{}", request),
            ConfigFormat::Json => print_json(&request.report()),
        }
    }

    /// Print any serializable value, with a text rendering for text mode
    pub fn print_value<T: Serialize>(&self, value: &T, text: &str) {
        match self.format {
            ConfigFormat::Text => println!("{}", text),
            ConfigFormat::Json => print_json(value),
        }
    }

    /// Print rows as a table (text) or array (json)
    pub fn print_rows<T: Tabled + Serialize>(&self, rows: &[T]) {
        match self.format {
            ConfigFormat::Text => println!("{}", Table::new(rows)),
            ConfigFormat::Json => print_json(&rows),
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
    );
}

/// NRC display for the nrc command
#[derive(Debug, Tabled, Serialize)]
pub struct NrcRow {
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
}

impl From<NegativeResponseCode> for NrcRow {
    fn from(nrc: NegativeResponseCode) -> Self {
        Self {
            code: format!("0x{:02X}", nrc),
            name: nrc.to_string(),
            description: nrc.description().to_string(),
        }
    }
}

/// Colored one-line summary of an NRC
pub fn nrc_line(nrc: NegativeResponseCode) -> String {
    format!(
        "{} {} ({})",
        format!("0x{:02X}", nrc).red().bold(),
        nrc,
        nrc.description()
    )
}
