//! Command-line interface for pdf-setup.
//!
//! With no arguments the text checklist is printed to stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;

use crate::core::Reporter;

/// pdf-setup - Dependency checklist for the PDF analysis pipeline
#[derive(Parser, Debug)]
#[command(name = "pdf-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable checklist
    #[default]
    Text,

    /// Pretty-printed JSON, including each library's purpose
    Json,
}

impl Cli {
    /// Execute the CLI command, printing to stdout
    pub fn execute(self) -> Result<()> {
        self.execute_to(io::stdout().lock())
    }

    /// Execute the CLI command, writing the report to `out`
    pub fn execute_to<W: Write>(self, out: W) -> Result<()> {
        let reporter = Reporter::default();
        debug!(format = ?self.format, "Rendering setup report");

        match self.format {
            OutputFormat::Text => reporter.write_to(out),
            OutputFormat::Json => reporter.write_json(out),
        }
        .context("Failed to print setup report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_defaults_to_text() {
        let cli = Cli::try_parse_from(["pdf-setup"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_json_format_flag() {
        let cli = Cli::try_parse_from(["pdf-setup", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);

        let cli = Cli::try_parse_from(["pdf-setup", "-f", "text"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Cli::try_parse_from(["pdf-setup", "install"]).is_err());
        assert!(Cli::try_parse_from(["pdf-setup", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_execute_without_arguments_prints_text_report() {
        let cli = Cli::try_parse_from(["pdf-setup"]).unwrap();
        let mut out = Vec::new();
        cli.execute_to(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), Reporter::default().render());
    }

    #[test]
    fn test_execute_json_prints_document() {
        let cli = Cli::try_parse_from(["pdf-setup", "--format", "json"]).unwrap();
        let mut out = Vec::new();
        cli.execute_to(&mut out).unwrap();

        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["install_command"], Reporter::default().install_command());
        assert_eq!(report["libraries"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_execute_write_failure_is_an_error() {
        struct ClosedPipe;

        impl Write for ClosedPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let cli = Cli::try_parse_from(["pdf-setup"]).unwrap();
        let err = cli.execute_to(ClosedPipe).unwrap_err();
        assert_eq!(err.to_string(), "Failed to print setup report");
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
