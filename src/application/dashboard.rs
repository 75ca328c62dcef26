//! Score dashboard use case
//!
//! Builds the per-domain chart and energy trend for a window of daily
//! reviews. Ratings win where present; energy fills in health otherwise.

use crate::application::reviews::ReviewService;
use crate::domain::{
    aggregate_domain_scores, combine_aggregated_with_derived, convert_to_chart_data,
    derive_domains_from_energy, energy_trend_data, is_data_empty, should_show_empty_state,
    ChartRow, EnergyPoint,
};
use crate::error::{ReviewError, Result};
use crate::infrastructure::{FileSystemRepository, ReviewRepository};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::{debug, info};

/// Inclusive date range of daily reviews to aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    /// Fill in missing bounds: `to` defaults to `today`, `from` to the
    /// start of a `days`-long window ending at `to`
    pub fn resolve(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        today: NaiveDate,
        days: u32,
    ) -> Result<Self> {
        let to = to.unwrap_or(today);
        let from = from.unwrap_or_else(|| to - Duration::days(i64::from(days.max(1)) - 1));

        if from > to {
            return Err(ReviewError::InvalidDate(format!(
                "range start {} is after range end {}",
                from, to
            )));
        }

        Ok(DateWindow { from, to })
    }
}

/// Everything the score view needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub window: DateWindow,
    pub review_count: usize,
    pub rows: Vec<ChartRow>,
    /// Nothing to chart at all because no review exists in the window
    pub show_empty_state: bool,
    /// Reviews exist but every domain scored 0
    pub all_unrated: bool,
}

/// Service for computing domain scores and energy trends
pub struct DashboardService {
    repository: FileSystemRepository,
}

impl DashboardService {
    pub fn new(repository: FileSystemRepository) -> Self {
        DashboardService { repository }
    }

    /// Resolve a window using the configured `window_days`
    pub fn window(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<DateWindow> {
        let config = self.repository.load_config()?;
        DateWindow::resolve(from, to, today, config.window_days())
    }

    /// Aggregate ratings, derive from energy, and combine into chart rows
    pub fn scores(&self, window: DateWindow) -> Result<ScoreReport> {
        let reviews = self.reviews().load_daily(Some(window.from), Some(window.to))?;

        let aggregated = aggregate_domain_scores(&reviews);
        let derived = derive_domains_from_energy(&reviews);
        let combined = combine_aggregated_with_derived(&aggregated, &derived);
        let rows = convert_to_chart_data(&combined);

        let show_empty_state = should_show_empty_state(&rows, !reviews.is_empty());
        let all_unrated = !show_empty_state && is_data_empty(&rows);

        info!(
            from = %window.from,
            to = %window.to,
            reviews = reviews.len(),
            "computed domain scores"
        );
        debug!(?aggregated, ?derived, "score inputs");

        Ok(ScoreReport {
            window,
            review_count: reviews.len(),
            rows,
            show_empty_state,
            all_unrated,
        })
    }

    /// Energy levels over the window, oldest first
    pub fn energy(&self, window: DateWindow) -> Result<Vec<EnergyPoint>> {
        let reviews = self.reviews().load_daily(Some(window.from), Some(window.to))?;
        Ok(energy_trend_data(&reviews))
    }

    fn reviews(&self) -> ReviewService {
        ReviewService::new(self.repository.clone())
    }
}
