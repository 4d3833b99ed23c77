//! Recommendation module
//!
//! Pure functions of (catalog, query):
//! - Filtering destinations by region, interest and budget
//! - Picking the cheapest match with a stable tie-break
//! - Averaging cost per month across the whole catalog

pub mod pipeline;
pub mod trend;

pub use pipeline::RecommendationPipeline;
pub use trend::monthly_cost_trend;
