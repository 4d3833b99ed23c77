//! Text rendering of pipeline results for the terminal

use crate::models::{MatchResult, TrendOutcome};

pub const NO_MATCH_MESSAGE: &str = "No perfect match found. Try changing your budget or interest!";
pub const TREND_UNAVAILABLE_MESSAGE: &str = "Monthly cost data not available.";

/// Numbered list of options under a title
#[must_use]
pub fn render_choices(title: &str, options: &[String]) -> String {
    let items: String = options
        .iter()
        .enumerate()
        .map(|(index, option)| format!("  {:>2}) {option}\n", index + 1))
        .collect();
    format!("{title}\n{items}")
}

/// Match card for a found destination, or the no-match hint
#[must_use]
pub fn render_match(result: &MatchResult) -> String {
    let Some(record) = result.record() else {
        return format!("{NO_MATCH_MESSAGE}\n");
    };

    let month = record.month.as_deref().unwrap_or("-");
    let weather = if record.weather.is_empty() { "-" } else { record.weather.as_str() };
    format!(
        "Your top match: {name}\n  \
         Region:         {region}\n  \
         Estimated cost: {cost}\n  \
         Best for:       {interest}\n  \
         Best month:     {month}\n  \
         Weather:        {weather}\n",
        name = record.name,
        region = record.region,
        cost = record.cost.format(),
        interest = record.interest,
    )
}

/// Horizontal bar chart of average cost by month
#[must_use]
pub fn render_trend(outcome: &TrendOutcome, width: usize) -> String {
    const TITLE: &str = "Monthly Cost Trend";

    let Some(trend) = outcome.trend() else {
        return format!("{TITLE}\n{TREND_UNAVAILABLE_MESSAGE}\n");
    };

    if trend.is_empty() {
        return format!("{TITLE}\nNo priced destinations to chart.\n");
    }

    // Non-positive averages draw empty bars
    let max = trend.max_average().unwrap_or(0.0);
    let label_width = trend.points().map(|(month, _)| month.len()).max().unwrap_or(0);
    let rows: String = trend
        .points()
        .map(|(month, average)| {
            let bar_len = if max > 0.0 && average > 0.0 {
                ((average / max) * width as f64).round() as usize
            } else {
                0
            };
            let bar = "#".repeat(bar_len);
            format!("  {month:<label_width$} | {bar} ${average:.0}\n")
        })
        .collect();
    format!("{TITLE}\n{rows}")
}
