//! Report rendering.
//!
//! This module contains:
//! - Reporter: Renders a catalog as the text checklist or as JSON
//! - ReportError: Failures while writing the report

pub mod reporter;

// Re-export commonly used types
pub use reporter::{ReportDocument, ReportError, Reporter};
