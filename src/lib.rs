//! pdf-setup - dependency checklist for the PDF analysis pipeline
//!
//! Prints the Python libraries the pipeline relies on, the `pip install`
//! command for them, the manual setup steps, and the analysis capabilities
//! they enable. Nothing is installed; the tool only writes text.
//!
//! # Modules
//!
//! - `domain`: Data structures (LibraryEntry, Catalog)
//! - `core`: Rendering (Reporter, ReportError)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Print the checklist
//! pdf-setup
//!
//! # Same catalog as JSON
//! pdf-setup --format json
//! ```

pub mod cli;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use crate::core::{ReportError, Reporter};
pub use crate::domain::{Catalog, LibraryEntry, REQUIRED_LIBRARIES};
