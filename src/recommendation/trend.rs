//! Monthly average-cost trend over the whole catalog

use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{MonthlyCostTrend, TrendOutcome, UNKNOWN_MONTH};

#[derive(Default)]
struct Accumulator {
    total: f64,
    count: u32,
}

/// Group the full catalog by month and average the cost of each group
///
/// Missing months fall into [`UNKNOWN_MONTH`]. Rows with an unparsable cost
/// are left out of the averages. A catalog without a month column has no
/// trend at all.
#[must_use]
pub fn monthly_cost_trend(catalog: &Catalog) -> TrendOutcome {
    if !catalog.has_month_column() {
        debug!("Catalog has no month column, trend unavailable");
        return TrendOutcome::Unavailable;
    }

    let mut groups: BTreeMap<String, Accumulator> = BTreeMap::new();
    for record in catalog.records() {
        let Some(cost) = record.cost.amount() else {
            continue;
        };
        let month = record.month.as_deref().unwrap_or(UNKNOWN_MONTH);
        let group = groups.entry(month.to_string()).or_default();
        group.total += cost;
        group.count += 1;
    }

    let averages = groups
        .into_iter()
        .map(|(month, acc)| (month, acc.total / f64::from(acc.count)))
        .collect();

    TrendOutcome::Available(MonthlyCostTrend::from_averages(averages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DestinationRecord;

    fn record(month: Option<&str>, cost: &str) -> DestinationRecord {
        let record = DestinationRecord::new("Somewhere", "Asia", "Beach", cost);
        match month {
            Some(month) => record.with_month(month),
            None => record,
        }
    }

    #[test]
    fn test_groups_and_averages_with_unknown_month() {
        let catalog = Catalog::new(
            vec![
                record(Some("June"), "100"),
                record(Some("June"), "300"),
                record(None, "50"),
            ],
            true,
            "test",
        );

        let outcome = monthly_cost_trend(&catalog);
        let trend = outcome.trend().unwrap();
        assert_eq!(trend.len(), 2);
        assert_eq!(trend.average("June"), Some(200.0));
        assert_eq!(trend.average("Unknown"), Some(50.0));
    }

    #[test]
    fn test_no_month_column_is_unavailable() {
        let catalog = Catalog::new(vec![record(None, "100")], false, "test");
        assert_eq!(monthly_cost_trend(&catalog), TrendOutcome::Unavailable);
    }

    #[test]
    fn test_unparsable_costs_excluded_from_average() {
        let catalog = Catalog::new(
            vec![
                record(Some("May"), "400"),
                record(Some("May"), "n/a"),
                record(Some("July"), "tbd"),
            ],
            true,
            "test",
        );

        let outcome = monthly_cost_trend(&catalog);
        let trend = outcome.trend().unwrap();
        assert_eq!(trend.average("May"), Some(400.0));
        assert_eq!(trend.average("July"), None);
    }

    #[test]
    fn test_empty_catalog_gives_empty_trend() {
        let catalog = Catalog::new(Vec::new(), true, "test");
        let outcome = monthly_cost_trend(&catalog);
        assert!(outcome.trend().unwrap().is_empty());
    }

    #[test]
    fn test_months_are_lexically_ordered() {
        let catalog = Catalog::new(
            vec![
                record(Some("March"), "10"),
                record(Some("August"), "20"),
                record(None, "30"),
                record(Some("January"), "40"),
            ],
            true,
            "test",
        );

        let outcome = monthly_cost_trend(&catalog);
        let months: Vec<&str> = outcome.trend().unwrap().points().map(|(m, _)| m).collect();
        assert_eq!(months, vec!["August", "January", "March", "Unknown"]);
    }
}
