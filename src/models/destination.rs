//! Destination record model and cost parsing

use serde::{Deserialize, Serialize};

/// Estimated trip cost of a destination
///
/// Costs are parsed once at load time. Anything that is not a finite
/// number is kept as [`Cost::Unparsable`] with its raw text so the
/// record can still be displayed, but it never takes part in filtering or
/// averaging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cost {
    Amount(f64),
    Unparsable(String),
}

impl Cost {
    /// Numeric value, if the raw cost parsed
    #[must_use]
    pub fn amount(&self) -> Option<f64> {
        match self {
            Cost::Amount(value) => Some(*value),
            Cost::Unparsable(_) => None,
        }
    }

    #[must_use]
    pub fn is_unparsable(&self) -> bool {
        matches!(self, Cost::Unparsable(_))
    }

    /// Format cost for display, e.g. "$1200" or the raw text
    #[must_use]
    pub fn format(&self) -> String {
        match self {
            Cost::Amount(value) if value.fract() == 0.0 => format!("${value:.0}"),
            Cost::Amount(value) => format!("${value:.2}"),
            Cost::Unparsable(raw) => raw.clone(),
        }
    }
}

/// Parse a raw cost cell into a [`Cost`]
///
/// Total: never fails, unparsable input yields [`Cost::Unparsable`].
#[must_use]
pub fn parse_cost(raw: &str) -> Cost {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Cost::Amount(value),
        _ => Cost::Unparsable(raw.to_string()),
    }
}

/// One row of the destination catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRecord {
    /// Display name, not necessarily unique
    pub name: String,
    pub region: String,
    pub interest: String,
    pub cost: Cost,
    /// Best month to visit; `None` when the cell is empty or the column is absent
    pub month: Option<String>,
    /// Free-text weather description
    pub weather: String,
}

impl DestinationRecord {
    /// Create a record, parsing the raw cost
    #[must_use]
    pub fn new(name: &str, region: &str, interest: &str, raw_cost: &str) -> Self {
        Self {
            name: name.to_string(),
            region: region.to_string(),
            interest: interest.to_string(),
            cost: parse_cost(raw_cost),
            month: None,
            weather: String::new(),
        }
    }

    /// Set the best month to visit
    #[must_use]
    pub fn with_month(mut self, month: &str) -> Self {
        self.month = Some(month.to_string()).filter(|m| !m.trim().is_empty());
        self
    }

    /// Set the weather description
    #[must_use]
    pub fn with_weather(mut self, weather: &str) -> Self {
        self.weather = weather.to_string();
        self
    }

    /// Whether this record satisfies region, interest and an inclusive budget ceiling
    #[must_use]
    pub fn matches(&self, region: &str, interest: &str, budget_ceiling: f64) -> bool {
        self.region == region
            && self.interest == interest
            && self
                .cost
                .amount()
                .is_some_and(|cost| cost <= budget_ceiling)
    }
}
