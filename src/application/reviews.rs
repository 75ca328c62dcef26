//! Loading and listing stored reviews

use crate::domain::{
    parse_daily_review, parse_weekly_review, DailyReview, ReviewKind, WeeklyReview,
};
use crate::error::{ReviewError, Result};
use crate::infrastructure::{FileSystemRepository, ReviewEntry};
use chrono::NaiveDate;
use tracing::debug;

/// Read-side service over the review files of a journal
pub struct ReviewService {
    repository: FileSystemRepository,
}

impl ReviewService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ReviewService { repository }
    }

    /// Review files newest first, with optional inclusive range and limit
    pub fn list(
        &self,
        kind: ReviewKind,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Result<Vec<ReviewEntry>> {
        self.repository.list_reviews(kind, from, to, limit)
    }

    /// Parsed daily reviews in the range, oldest first
    pub fn load_daily(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<DailyReview>> {
        let mut entries = self.repository.list_reviews(ReviewKind::Daily, from, to, None)?;
        entries.reverse();

        let mut reviews = Vec::with_capacity(entries.len());
        for entry in entries {
            // Listed files can vanish before they are read
            if let Some(content) = self.repository.read_file(&entry.filename)? {
                reviews.push(parse_daily_review(&content, &entry.filename));
            }
        }

        debug!(count = reviews.len(), "loaded daily reviews");
        Ok(reviews)
    }

    /// The daily review for one date
    pub fn show_daily(&self, date: NaiveDate) -> Result<DailyReview> {
        let filename = ReviewKind::Daily.filename_for_date(date);
        let content = self.read_existing(&filename)?;
        Ok(parse_daily_review(&content, &filename))
    }

    /// The weekly review for the ISO week containing `date`
    pub fn show_weekly(&self, date: NaiveDate) -> Result<WeeklyReview> {
        let filename = ReviewKind::Weekly.filename_for_date(date);
        let content = self.read_existing(&filename)?;
        Ok(parse_weekly_review(&content, &filename))
    }

    fn read_existing(&self, filename: &str) -> Result<String> {
        self.repository
            .read_file(filename)?
            .ok_or_else(|| ReviewError::ReviewNotFound(filename.to_string()))
    }
}
