//! `TravelGenie` - travel destination recommendations
//!
//! This library loads a catalog of destinations, picks the cheapest one
//! matching a region, interest and budget, and averages cost per month
//! for a trend view.

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod recommendation;
pub mod shell;

// Re-export core types for public API
pub use catalog::{Catalog, CatalogSource, CatalogStore, FileSource};
pub use config::TravelGenieConfig;
pub use error::TravelGenieError;
pub use models::{Cost, DestinationRecord, MatchResult, MonthlyCostTrend, Query, TrendOutcome, parse_cost};
pub use recommendation::RecommendationPipeline;
pub use shell::Shell;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelGenieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
