//! Open review use case

use crate::domain::{
    serialize_daily_review, serialize_weekly_review, DailyReview, ReviewKind, WeeklyReview,
};
use crate::error::Result;
use crate::infrastructure::{EditorSession, FileSystemRepository, ReviewRepository};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Service for creating review files and opening them in the editor
pub struct OpenReviewService {
    repository: FileSystemRepository,
}

impl OpenReviewService {
    pub fn new(repository: FileSystemRepository) -> Self {
        OpenReviewService { repository }
    }

    /// Resolve the review file for `date`, creating it from the empty
    /// template if needed. Opens the file in the editor only when
    /// `open_in_editor` is true. Returns the relative filename.
    pub fn execute(
        &self,
        kind: ReviewKind,
        date: NaiveDate,
        open_in_editor: bool,
    ) -> Result<String> {
        let config = self.repository.load_config()?;
        let filename = kind.filename_for_date(date);

        if self.repository.file_exists(&filename) {
            debug!(file = %filename, "review already exists");
        } else {
            let content = blank_review(kind, date, &filename);
            self.repository.write_file(&filename, &content)?;
            info!(file = %filename, "created review");
        }

        if open_in_editor {
            let editor = EditorSession::new(config.get_editor());
            editor.open(&self.repository.root().join(&filename))?;
        }

        Ok(filename)
    }
}

/// Empty template for a new review with its date fields filled in
pub fn blank_review(kind: ReviewKind, date: NaiveDate, filename: &str) -> String {
    match kind {
        ReviewKind::Daily => {
            let review = DailyReview::blank(&date.format("%Y-%m-%d").to_string(), filename);
            serialize_daily_review(&review)
        }
        ReviewKind::Weekly => serialize_weekly_review(&WeeklyReview::blank(date, filename)),
    }
}
