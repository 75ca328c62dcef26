//! Domain score aggregation
//!
//! Reduces a window of daily reviews to one score per life domain. A rating
//! of 0 means "not rated" and is never averaged in.

use super::daily::DailyReview;
use super::life_domain::{DomainValues, LifeDomain};
use super::life_map::parse_life_map;
use super::text::iso_date_token;
use crate::error::{ReviewError, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// One derived value per domain
pub type DomainScoreSet = DomainValues<i32>;

/// A display row: capitalized domain label and its score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRow {
    pub domain: String,
    pub score: Option<i32>,
}

/// Energy level for one review date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyPoint {
    pub date: Option<String>,
    pub energy: u8,
}

fn rounded_mean(values: impl IntoIterator<Item = u32>) -> i32 {
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), v| (sum + u64::from(v), count + 1));

    if count == 0 {
        0
    } else {
        (sum as f64 / count as f64).round() as i32
    }
}

/// Average every positive rating per domain; unrated domains score 0
pub fn aggregate_domain_scores(reviews: &[DailyReview]) -> DomainScoreSet {
    DomainValues::from_fn(|domain| {
        rounded_mean(
            reviews
                .iter()
                .map(|review| review.rating(domain))
                .filter(|rating| *rating > 0)
                .map(u32::from),
        )
    })
}

/// Average energy level into `health`; every other domain is 0
pub fn derive_domains_from_energy(reviews: &[DailyReview]) -> DomainScoreSet {
    let mut derived = DomainScoreSet::default();
    derived[LifeDomain::Health] =
        rounded_mean(reviews.iter().filter_map(|r| r.energy_level).map(u32::from));
    derived
}

/// Aggregated value per domain, falling back to derived only where aggregated is 0
pub fn combine_aggregated_with_derived(
    aggregated: &DomainScoreSet,
    derived: &DomainScoreSet,
) -> DomainScoreSet {
    aggregated.map(|domain, value| if *value == 0 { derived[domain] } else { *value })
}

/// True when no row carries a non-zero score
pub fn is_data_empty(rows: &[ChartRow]) -> bool {
    rows.iter().all(|row| row.score.unwrap_or(0) == 0)
}

/// The "no data yet" state depends only on whether any review exists.
///
/// Rows are not consulted: a user with reviews but no domain ratings still
/// sees their (possibly energy-derived) data.
pub fn should_show_empty_state(_rows: &[ChartRow], has_any_reviews: bool) -> bool {
    !has_any_reviews
}

/// Energy levels in input order, skipping reviews without one
pub fn energy_trend_data(reviews: &[DailyReview]) -> Vec<EnergyPoint> {
    reviews
        .iter()
        .filter_map(|review| {
            review.energy_level.map(|energy| EnergyPoint {
                date: review.date.clone(),
                energy,
            })
        })
        .collect()
}

/// Chart rows in fixed domain order with capitalized labels
pub fn convert_to_chart_data(scores: &DomainScoreSet) -> Vec<ChartRow> {
    scores
        .iter()
        .map(|(domain, score)| ChartRow {
            domain: domain.label().to_string(),
            score: Some(*score),
        })
        .collect()
}

/// Chart rows straight from life map document text
pub fn life_map_chart_data(content: &str) -> Vec<ChartRow> {
    convert_to_chart_data(&parse_life_map(content).scores())
}

/// Strict `YYYY-MM-DD` parse; unlike the codec, this fails on bad input
pub fn parse_review_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if iso_date_token(trimmed).as_deref() != Some(trimmed) {
        return Err(ReviewError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ReviewError::InvalidDate(value.to_string()))
}
