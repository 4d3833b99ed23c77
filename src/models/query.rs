//! Query model for a single recommendation request

use serde::{Deserialize, Serialize};

/// The user's region, interest and budget selection for one interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub region: String,
    pub interest: String,
    /// Inclusive upper bound on cost
    pub budget_ceiling: f64,
}

impl Query {
    /// Create a new query
    #[must_use]
    pub fn new<R: Into<String>, I: Into<String>>(region: R, interest: I, budget_ceiling: f64) -> Self {
        Self {
            region: region.into(),
            interest: interest.into(),
            budget_ceiling,
        }
    }
}
