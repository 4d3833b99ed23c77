//! Data models for Travel Genie
//!
//! This module contains the core domain models organized by concern:
//! - Destination: one catalog row and its explicitly parsed cost
//! - Query: the user's selection for one interaction
//! - Outcome: match and trend results handed to the presentation layer

pub mod destination;
pub mod outcome;
pub mod query;

// Re-export all public types for convenient access
pub use destination::{Cost, DestinationRecord, parse_cost};
pub use outcome::{MatchResult, MonthlyCostTrend, TrendOutcome, UNKNOWN_MONTH};
pub use query::Query;
