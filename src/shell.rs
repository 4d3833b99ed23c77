//! Interactive terminal session
//!
//! Collects region, interest and budget from the user, runs the pipeline
//! and renders its outputs. All waiting happens here; the pipeline itself
//! is synchronous and never sleeps.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::TravelGenieConfig;
use crate::display::{render_choices, render_match, render_trend};
use crate::models::Query;
use crate::recommendation::RecommendationPipeline;
use crate::{Result, TravelGenieError};

/// One interactive session over arbitrary input and output streams
pub struct Shell<'a, R, W> {
    pipeline: RecommendationPipeline<'a>,
    config: &'a TravelGenieConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(
        pipeline: RecommendationPipeline<'a>,
        config: &'a TravelGenieConfig,
        input: R,
        output: W,
    ) -> Self {
        Self {
            pipeline,
            config,
            input,
            output,
        }
    }

    /// Run searches until the user declines another one or input ends
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "AI Travel Genie")?;
        writeln!(
            self.output,
            "Get personalized travel destination recommendations based on your preferences and budget!\n"
        )?;

        let regions = self.pipeline.list_regions();
        let interests = self.pipeline.list_interests();
        if regions.is_empty() || interests.is_empty() {
            writeln!(self.output, "The destination catalog is empty, nothing to recommend.")?;
            return Ok(());
        }

        let mut searches = 0usize;
        loop {
            let Some(query) = self.read_query(&regions, &interests)? else {
                break;
            };
            searches += 1;
            self.show_results(&query)?;

            match self.prompt("Search again? [y/N]: ")? {
                Some(answer) if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") => {}
                _ => break,
            }
        }

        info!("Session finished after {} searches", searches);
        writeln!(self.output, "Crafted with wanderlust by the AI Travel Genie")?;
        Ok(())
    }

    fn read_query(&mut self, regions: &[String], interests: &[String]) -> Result<Option<Query>> {
        let Some(region) = self.pick("Choose your preferred region:", regions)? else {
            return Ok(None);
        };
        let Some(interest) = self.pick("Pick your travel interest:", interests)? else {
            return Ok(None);
        };
        let Some(budget) = self.read_budget()? else {
            return Ok(None);
        };
        Ok(Some(Query::new(region, interest, f64::from(budget))))
    }

    fn show_results(&mut self, query: &Query) -> Result<()> {
        debug!("Running query {:?}", query);
        let result = self.pipeline.recommend_query(query);

        let delay = self.config.display.result_delay_ms;
        if delay > 0 {
            writeln!(self.output, "Finding the best destination for you...")?;
            self.output.flush()?;
            thread::sleep(Duration::from_millis(delay));
        }

        writeln!(self.output, "\n{}", render_match(&result))?;
        let trend = self.pipeline.monthly_trend();
        writeln!(self.output, "{}", render_trend(&trend, self.config.display.chart_width))?;
        Ok(())
    }

    /// Numbered picker; enter selects the first option
    fn pick(&mut self, title: &str, options: &[String]) -> Result<Option<String>> {
        write!(self.output, "{}", render_choices(title, options))?;
        loop {
            let Some(line) = self.prompt("> ")? else {
                return Ok(None);
            };
            match parse_choice(&line, options) {
                Ok(choice) => return Ok(Some(choice)),
                Err(e) => writeln!(self.output, "{}", e.user_message())?,
            }
        }
    }

    fn read_budget(&mut self) -> Result<Option<u32>> {
        let budget = &self.config.budget;
        let message = format!(
            "What's your budget (USD, {}-{}, step {}) [{}]: ",
            budget.min, budget.max, budget.step, budget.default
        );
        loop {
            let Some(line) = self.prompt(&message)? else {
                return Ok(None);
            };
            match parse_budget(&line, &self.config.budget) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{}", e.user_message())?,
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Resolve a picker answer: a 1-based index or an option name, empty means the first
pub fn parse_choice(input: &str, options: &[String]) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return options
            .first()
            .cloned()
            .ok_or_else(|| TravelGenieError::validation("there is nothing to choose from"));
    }

    if let Ok(number) = input.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| options.get(index))
            .cloned()
            .ok_or_else(|| {
                TravelGenieError::validation(format!("pick a number between 1 and {}", options.len()))
            });
    }

    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(input))
        .cloned()
        .ok_or_else(|| TravelGenieError::validation(format!("'{input}' is not one of the listed options")))
}

/// Parse a budget answer; empty means the default, values are clamped and snapped to the step
pub fn parse_budget(input: &str, budget: &crate::config::BudgetConfig) -> Result<u32> {
    let input = input.trim().trim_start_matches('$');
    if input.is_empty() {
        return Ok(budget.default);
    }

    let requested: f64 = input
        .parse()
        .map_err(|_| TravelGenieError::validation(format!("'{input}' is not a number")))?;
    if !requested.is_finite() {
        return Err(TravelGenieError::validation("budget must be a finite number"));
    }
    Ok(budget.normalize(requested))
}
