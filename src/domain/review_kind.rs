//! Review kinds and their file naming

use super::aggregate::parse_review_date;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::str::FromStr;

/// Which review template a file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewKind {
    /// One file per day (daily/YYYY-MM-DD.md)
    #[default]
    Daily,
    /// One file per ISO week (weekly/YYYY-Www.md)
    Weekly,
}

impl ReviewKind {
    /// Directory (relative to the journal root) holding this kind of review
    pub fn dir(&self) -> &'static str {
        match self {
            ReviewKind::Daily => "daily",
            ReviewKind::Weekly => "weekly",
        }
    }

    /// Relative path of the review covering `date`
    pub fn filename_for_date(&self, date: NaiveDate) -> String {
        match self {
            ReviewKind::Daily => format!("{}/{}.md", self.dir(), date.format("%Y-%m-%d")),
            ReviewKind::Weekly => {
                let week = date.iso_week();
                format!("{}/{}-W{:02}.md", self.dir(), week.year(), week.week())
            }
        }
    }

    /// Date a file name stands for (the Monday for weekly reviews)
    pub fn date_from_filename(&self, filename: &str) -> Option<NaiveDate> {
        let stem = filename.strip_suffix(".md")?;

        match self {
            ReviewKind::Daily => parse_review_date(stem).ok(),
            ReviewKind::Weekly => {
                let (year, week) = stem.split_once("-W")?;
                if week.len() != 2 {
                    return None;
                }
                NaiveDate::from_isoywd_opt(year.parse().ok()?, week.parse().ok()?, Weekday::Mon)
            }
        }
    }

    /// First day of the period containing `date`
    pub fn period_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            ReviewKind::Daily => date,
            ReviewKind::Weekly => {
                date - Duration::days(date.weekday().num_days_from_monday() as i64)
            }
        }
    }
}

impl FromStr for ReviewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Ok(ReviewKind::Daily),
            "weekly" | "week" => Ok(ReviewKind::Weekly),
            _ => Err(format!(
                "Invalid review kind: '{}'. Valid kinds are: daily, weekly",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        assert_eq!(ReviewKind::Daily.filename_for_date(date), "daily/2025-01-17.md");
    }

    #[test]
    fn test_weekly_filename_uses_iso_year() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        assert_eq!(ReviewKind::Weekly.filename_for_date(date), "weekly/2025-W03.md");

        // Dec 30, 2024 belongs to ISO week 1 of 2025
        let date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        assert_eq!(ReviewKind::Weekly.filename_for_date(date), "weekly/2025-W01.md");
    }

    #[test]
    fn test_date_from_filename() {
        assert_eq!(
            ReviewKind::Daily.date_from_filename("2025-01-17.md"),
            NaiveDate::from_ymd_opt(2025, 1, 17)
        );
        assert_eq!(ReviewKind::Daily.date_from_filename("2025-02-30.md"), None);
        assert_eq!(ReviewKind::Daily.date_from_filename("notes.md"), None);
        assert_eq!(ReviewKind::Daily.date_from_filename("2025-01-17.txt"), None);

        assert_eq!(
            ReviewKind::Weekly.date_from_filename("2025-W03.md"),
            NaiveDate::from_ymd_opt(2025, 1, 13)
        );
        assert_eq!(ReviewKind::Weekly.date_from_filename("2025-W3.md"), None);
        assert_eq!(ReviewKind::Weekly.date_from_filename("2025-W60.md"), None);
    }

    #[test]
    fn test_period_start() {
        let thursday = NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
        assert_eq!(ReviewKind::Daily.period_start(thursday), thursday);
        assert_eq!(
            ReviewKind::Weekly.period_start(thursday),
            NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!(ReviewKind::from_str("Daily").unwrap(), ReviewKind::Daily);
        assert_eq!(ReviewKind::from_str("week").unwrap(), ReviewKind::Weekly);
        assert!(ReviewKind::from_str("monthly").is_err());
    }
}
