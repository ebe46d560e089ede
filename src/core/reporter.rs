//! Renders the dependency checklist.
//!
//! The text report is built in one place (`render`) and every other output
//! path goes through it, so stdout, strings and test buffers always agree.

use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::{Catalog, LibraryEntry};

/// Width of the separator under the title
const SEPARATOR_WIDTH: usize = 40;

/// Prefix of the install command line
const INSTALL_PREFIX: &str = "pip install ";

/// Header above the bulleted library list
pub const LIBRARIES_HEADER: &str = "必要なライブラリ:";
/// Header above the install command
pub const INSTALL_HEADER: &str = "セットアップコマンド:";
/// Header above the manual setup steps
pub const SETUP_HEADER: &str = "追加の設定:";
/// Header above the capability checklist
pub const CAPABILITIES_HEADER: &str = "PDF分析機能:";

/// Errors that can occur while writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Machine-readable form of a report
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub title: &'static str,
    pub libraries: &'static [LibraryEntry],
    pub install_command: String,
    pub additional_setup: &'static [&'static str],
    pub capabilities: &'static [&'static str],
}

/// Renders a [`Catalog`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    catalog: Catalog,
}

impl Reporter {
    /// Create a reporter over the given catalog
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The `pip install ...` line for every library, in catalog order
    pub fn install_command(&self) -> String {
        let names: Vec<&str> = self.catalog.names().collect();
        format!("{}{}", INSTALL_PREFIX, names.join(" "))
    }

    /// Render the full text report. Every line ends with `\n`.
    pub fn render(&self) -> String {
        let catalog = &self.catalog;
        let mut out = String::new();
        let mut line = |text: &str| {
            out.push_str(text);
            out.push('\n');
        };

        line(catalog.title);
        line(&"=".repeat(SEPARATOR_WIDTH));

        line(LIBRARIES_HEADER);
        for lib in catalog.libraries {
            line(&format!("  - {}", lib.name));
        }

        line("");
        line(INSTALL_HEADER);
        line(&self.install_command());

        line("");
        line(SETUP_HEADER);
        for step in catalog.additional_setup {
            line(&format!("- {}", step));
        }

        line("");
        line(CAPABILITIES_HEADER);
        for capability in catalog.capabilities {
            line(&format!("✓ {}", capability));
        }

        out
    }

    /// Write the text report to `out`
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), ReportError> {
        let report = self.render();
        debug!(
            libraries = self.catalog.libraries.len(),
            bytes = report.len(),
            "Writing text report"
        );
        out.write_all(report.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Build the JSON document for this catalog
    pub fn document(&self) -> ReportDocument {
        ReportDocument {
            title: self.catalog.title,
            libraries: self.catalog.libraries,
            install_command: self.install_command(),
            additional_setup: self.catalog.additional_setup,
            capabilities: self.catalog.capabilities,
        }
    }

    /// Write the report as pretty-printed JSON followed by a newline
    pub fn write_json<W: Write>(&self, mut out: W) -> Result<(), ReportError> {
        debug!(libraries = self.catalog.libraries.len(), "Writing JSON report");
        serde_json::to_writer_pretty(&mut out, &self.document())?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }

    /// Print the text report to standard output
    pub fn run(&self) -> Result<(), ReportError> {
        let stdout = io::stdout();
        self.write_to(stdout.lock())
    }
}
