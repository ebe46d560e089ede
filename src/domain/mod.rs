//! Domain types for pdf-setup.
//!
//! This module contains the fixed data the report is built from:
//! - LibraryEntry: a third-party library and what it is for
//! - Catalog: the entries plus the section text around them

pub mod catalog;

// Re-export commonly used types
pub use catalog::{Catalog, LibraryEntry, REQUIRED_LIBRARIES};
