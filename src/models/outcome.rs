//! Result types returned by the recommendation pipeline

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::DestinationRecord;

/// Month label used for records without a best-visit month
pub const UNKNOWN_MONTH: &str = "Unknown";

/// Outcome of ranking the filtered candidates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchResult {
    Found(DestinationRecord),
    NotFound,
}

impl MatchResult {
    #[must_use]
    pub fn record(&self) -> Option<&DestinationRecord> {
        match self {
            MatchResult::Found(record) => Some(record),
            MatchResult::NotFound => None,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found(_))
    }
}

/// Average cost per month label across the whole catalog
///
/// Labels iterate in lexical order, the order they have after grouping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCostTrend {
    averages: BTreeMap<String, f64>,
}

impl MonthlyCostTrend {
    #[must_use]
    pub fn from_averages(averages: BTreeMap<String, f64>) -> Self {
        Self { averages }
    }

    /// Average cost for a month label
    #[must_use]
    pub fn average(&self, month: &str) -> Option<f64> {
        self.averages.get(month).copied()
    }

    /// (month, average cost) points in display order
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.averages.iter().map(|(month, avg)| (month.as_str(), *avg))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.averages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }

    /// Highest average, used to scale charts
    #[must_use]
    pub fn max_average(&self) -> Option<f64> {
        self.averages.values().copied().reduce(f64::max)
    }
}

/// Trend result; `Unavailable` means the catalog carries no month data at all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrendOutcome {
    Available(MonthlyCostTrend),
    Unavailable,
}

impl TrendOutcome {
    #[must_use]
    pub fn trend(&self) -> Option<&MonthlyCostTrend> {
        match self {
            TrendOutcome::Available(trend) => Some(trend),
            TrendOutcome::Unavailable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_points_are_lexically_ordered() {
        let mut averages = BTreeMap::new();
        averages.insert("March".to_string(), 300.0);
        averages.insert("January".to_string(), 100.0);
        averages.insert("Unknown".to_string(), 50.0);
        let trend = MonthlyCostTrend::from_averages(averages);

        let months: Vec<&str> = trend.points().map(|(m, _)| m).collect();
        assert_eq!(months, vec!["January", "March", "Unknown"]);
        assert_eq!(trend.max_average(), Some(300.0));
    }

    #[test]
    fn test_match_result_accessors() {
        let found = MatchResult::Found(DestinationRecord::new("Bali", "Asia", "Beach", "500"));
        assert!(found.is_found());
        assert_eq!(found.record().map(|r| r.name.as_str()), Some("Bali"));
        assert!(MatchResult::NotFound.record().is_none());
    }
}
