//! The immutable in-memory destination catalog

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::models::DestinationRecord;

/// Ordered destination records plus load metadata
///
/// Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<DestinationRecord>,
    has_month_column: bool,
    unparsable_cost_rows: usize,
    source_name: String,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Build a catalog from already parsed records
    #[must_use]
    pub fn new<S: Into<String>>(
        records: Vec<DestinationRecord>,
        has_month_column: bool,
        source_name: S,
    ) -> Self {
        let unparsable_cost_rows = records.iter().filter(|r| r.cost.is_unparsable()).count();
        Self {
            records,
            has_month_column,
            unparsable_cost_rows,
            source_name: source_name.into(),
            loaded_at: Utc::now(),
        }
    }

    /// Records in source order
    #[must_use]
    pub fn records(&self) -> &[DestinationRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the source had a `month` column at all
    #[must_use]
    pub fn has_month_column(&self) -> bool {
        self.has_month_column
    }

    /// Number of rows whose cost could not be parsed
    #[must_use]
    pub fn unparsable_cost_rows(&self) -> usize {
        self.unparsable_cost_rows
    }

    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    #[must_use]
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Distinct regions in first-seen order
    #[must_use]
    pub fn regions(&self) -> Vec<String> {
        distinct_in_order(self.records.iter().map(|r| r.region.as_str()))
    }

    /// Distinct interests in first-seen order
    #[must_use]
    pub fn interests(&self) -> Vec<String> {
        distinct_in_order(self.records.iter().map(|r| r.interest.as_str()))
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
