//! Matching and ranking of destinations

use tracing::{debug, instrument};

use super::trend::monthly_cost_trend;
use crate::catalog::Catalog;
use crate::models::{DestinationRecord, MatchResult, Query, TrendOutcome};

/// Stateless recommendation pipeline over a borrowed catalog
///
/// Each call recomputes from scratch; nothing is remembered between queries.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationPipeline<'a> {
    catalog: &'a Catalog,
}

impl<'a> RecommendationPipeline<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Distinct regions in first-seen order
    #[must_use]
    pub fn list_regions(&self) -> Vec<String> {
        self.catalog.regions()
    }

    /// Distinct interests in first-seen order
    #[must_use]
    pub fn list_interests(&self) -> Vec<String> {
        self.catalog.interests()
    }

    /// Every record matching the query, in catalog order
    #[must_use]
    pub fn candidates(&self, query: &Query) -> Vec<&'a DestinationRecord> {
        self.catalog
            .records()
            .iter()
            .filter(|record| record.matches(&query.region, &query.interest, query.budget_ceiling))
            .collect()
    }

    /// Cheapest destination for the given criteria
    #[must_use]
    pub fn recommend(&self, region: &str, interest: &str, budget_ceiling: f64) -> MatchResult {
        self.recommend_query(&Query::new(region, interest, budget_ceiling))
    }

    /// Cheapest candidate; equal costs resolve to the earliest record in the catalog
    #[instrument(level = "debug", skip(self))]
    pub fn recommend_query(&self, query: &Query) -> MatchResult {
        let candidates = self.candidates(query);
        debug!("{} candidates match", candidates.len());

        // min_by keeps the first of equal elements
        let best = candidates
            .into_iter()
            .filter_map(|record| record.cost.amount().map(|cost| (cost, record)))
            .min_by(|(a, _), (b, _)| a.total_cmp(b));

        match best {
            Some((_, record)) => {
                debug!("Best match: {}", record.name);
                MatchResult::Found(record.clone())
            }
            None => MatchResult::NotFound,
        }
    }

    /// Average cost per month over the whole catalog, independent of any query
    #[must_use]
    pub fn monthly_trend(&self) -> TrendOutcome {
        monthly_cost_trend(self.catalog)
    }
}
