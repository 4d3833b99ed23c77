//! Catalog module
//!
//! This module provides the destination catalog:
//! - Backing sources the catalog is read from (CSV files on disk)
//! - Parsing of CSV rows into destination records
//! - The immutable in-memory catalog and its distinct region/interest lists
//! - A store that loads the catalog exactly once per process

pub mod parser;
pub mod records;
pub mod source;
pub mod store;

// Re-export commonly used types from submodules
pub use parser::CsvCatalogParser;
pub use records::Catalog;
pub use source::{CatalogSource, FileSource};
pub use store::CatalogStore;
