use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use super::Catalog;
use crate::models::DestinationRecord;
use crate::{Result, TravelGenieError};

/// Column holding the destination's display name
pub const NAME_COLUMN: &str = "destination";
pub const REGION_COLUMN: &str = "region";
pub const INTEREST_COLUMN: &str = "interest";
pub const COST_COLUMN: &str = "cost";
pub const MONTH_COLUMN: &str = "month";
pub const WEATHER_COLUMN: &str = "weather";

/// CSV catalog parser
pub struct CsvCatalogParser;

/// Positions of the known columns in the header row
#[derive(Debug)]
struct ColumnLayout {
    name: usize,
    region: usize,
    interest: usize,
    cost: usize,
    month: Option<usize>,
    weather: Option<usize>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord, source_name: &str) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(column))
        };
        let require = |column: &str| {
            find(column).ok_or_else(|| {
                TravelGenieError::source_unavailable(
                    source_name,
                    format!("missing required column `{column}`"),
                )
            })
        };

        Ok(Self {
            name: require(NAME_COLUMN)?,
            region: require(REGION_COLUMN)?,
            interest: require(INTEREST_COLUMN)?,
            cost: require(COST_COLUMN)?,
            month: find(MONTH_COLUMN),
            weather: find(WEATHER_COLUMN),
        })
    }

    fn to_record(&self, row: &StringRecord) -> DestinationRecord {
        let cell = |index: usize| row.get(index).unwrap_or_default();

        let record = DestinationRecord::new(
            cell(self.name),
            cell(self.region),
            cell(self.interest),
            cell(self.cost),
        );
        let record = match self.month {
            Some(index) => record.with_month(cell(index)),
            None => record,
        };
        match self.weather {
            Some(index) => record.with_weather(cell(index)),
            None => record,
        }
    }
}

impl CsvCatalogParser {
    /// Parse CSV text with a header row into a [`Catalog`]
    ///
    /// Structural problems (bad CSV, ragged rows, missing required columns)
    /// fail the whole load. Rows with an unparsable cost are kept and counted.
    pub fn parse(source_name: &str, text: &str) -> Result<Catalog> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| TravelGenieError::source_unavailable(source_name, e.to_string()))?
            .clone();
        let layout = ColumnLayout::from_headers(&headers, source_name)?;
        debug!("Catalog column layout: {:?}", layout);

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(|e| {
                TravelGenieError::source_unavailable(source_name, format!("row {}: {e}", index + 1))
            })?;
            let record = layout.to_record(&row);
            if record.cost.is_unparsable() {
                debug!(
                    "Row {} ({}) has unparsable cost {:?}, it will never match",
                    index + 1,
                    record.name,
                    record.cost.format()
                );
            }
            records.push(record);
        }

        let catalog = Catalog::new(records, layout.month.is_some(), source_name);
        if catalog.unparsable_cost_rows() > 0 {
            warn!(
                "{} of {} destinations in {} have a non-numeric cost and are excluded from results",
                catalog.unparsable_cost_rows(),
                catalog.len(),
                source_name
            );
        }
        info!("Parsed {} destinations from {}", catalog.len(), source_name);

        Ok(catalog)
    }
}
