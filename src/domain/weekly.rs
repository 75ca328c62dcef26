//! Weekly review document codec

use super::text::{self, Document};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::fmt::Write;
use tracing::debug;

pub const NEEDLE_SECTION: &str = "What Moved the Needle";
pub const NOISE_SECTION: &str = "Noise Disguised as Work";
pub const TIME_LEAKS_SECTION: &str = "Time Leaks";
pub const INSIGHT_SECTION: &str = "Strategic Insight";
pub const ADJUSTMENT_SECTION: &str = "Adjustment for Next Week";
pub const NOTES_SECTION: &str = "Notes";

const WEEK_OF_FIELD: &str = "Week of";
const WEEK_NUMBER_FIELD: &str = "Week number";
const DURATION_FIELD: &str = "Duration";

const NEEDLE_PROMPT: &str = "What actually moved you closer to what matters this week?";
const NOISE_PROMPT: &str = "What felt productive but wasn't?";
const TIME_LEAKS_PROMPT: &str = "Where did time slip away?";
const INSIGHT_PROMPT: &str = "What did you learn about how you work best?";
const ADJUSTMENT_PROMPT: &str = "What's one thing you'll do differently next week?";
const NOTES_PROMPT: &str = "Anything else worth capturing?";

/// One weekly reflection, keyed by the Monday that starts the week
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeeklyReview {
    /// `YYYY-MM-DD`, shape-checked only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start: Option<String>,
    /// ISO week number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_number: Option<u32>,
    /// Single-line blockquote answer: `>` lines read back joined by a space
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moved_needle: Option<String>,
    /// Single-line blockquote answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_disguised_as_work: Option<String>,
    /// Single-line blockquote answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_leaks: Option<String>,
    /// Single-line blockquote answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategic_insight: Option<String>,
    /// Single-line blockquote answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_for_next_week: Option<String>,
    /// Free text; may span lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Minutes spent on the review
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub file_path: String,
}

impl WeeklyReview {
    /// An empty review for the ISO week containing `date`
    pub fn blank(date: NaiveDate, file_path: &str) -> Self {
        let week_start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        WeeklyReview {
            week_start: Some(week_start.format("%Y-%m-%d").to_string()),
            week_number: Some(date.iso_week().week()),
            file_path: file_path.to_string(),
            ..Default::default()
        }
    }
}

/// Extract a weekly review from document text
pub fn parse_weekly_review(content: &str, file_path: &str) -> WeeklyReview {
    let doc = Document::parse(content);
    let blockquote = |title: &str| doc.section(title).and_then(|s| s.blockquote());

    let review = WeeklyReview {
        week_start: doc.field(WEEK_OF_FIELD).and_then(text::iso_date_token),
        week_number: doc.field(WEEK_NUMBER_FIELD).and_then(text::integer_token),
        moved_needle: blockquote(NEEDLE_SECTION),
        noise_disguised_as_work: blockquote(NOISE_SECTION),
        time_leaks: blockquote(TIME_LEAKS_SECTION),
        strategic_insight: blockquote(INSIGHT_SECTION),
        adjustment_for_next_week: blockquote(ADJUSTMENT_SECTION),
        notes: doc
            .section(NOTES_SECTION)
            .and_then(|s| s.text_after(NOTES_PROMPT)),
        duration: doc.field(DURATION_FIELD).and_then(text::minutes_value),
        file_path: file_path.to_string(),
    };

    debug!(
        file_path,
        week_start = review.week_start.as_deref().unwrap_or("-"),
        week = ?review.week_number,
        "parsed weekly review"
    );

    review
}

/// Render a weekly review as a complete template document.
///
/// `notes` is written as is; a `---` or heading line inside it ends the
/// section when parsed back.
pub fn serialize_weekly_review(review: &WeeklyReview) -> String {
    let mut out = String::from("# Weekly Review\n\n");

    let _ = match &review.week_start {
        Some(date) => writeln!(out, "**{}:** {}", WEEK_OF_FIELD, date),
        None => writeln!(out, "**{}:**", WEEK_OF_FIELD),
    };
    let _ = match review.week_number {
        Some(week) => writeln!(out, "**{}:** {}", WEEK_NUMBER_FIELD, week),
        None => writeln!(out, "**{}:**", WEEK_NUMBER_FIELD),
    };
    out.push_str("\n---\n\n");

    let sections = [
        (NEEDLE_SECTION, NEEDLE_PROMPT, &review.moved_needle),
        (NOISE_SECTION, NOISE_PROMPT, &review.noise_disguised_as_work),
        (TIME_LEAKS_SECTION, TIME_LEAKS_PROMPT, &review.time_leaks),
        (INSIGHT_SECTION, INSIGHT_PROMPT, &review.strategic_insight),
        (ADJUSTMENT_SECTION, ADJUSTMENT_PROMPT, &review.adjustment_for_next_week),
    ];
    for (title, prompt, value) in sections {
        let _ = writeln!(out, "## {}\n\n{}\n", title, prompt);
        match value {
            Some(value) => {
                for line in value.lines() {
                    let _ = writeln!(out, "> {}", line);
                }
            }
            None => out.push_str(">\n"),
        }
        out.push_str("\n---\n\n");
    }

    let _ = writeln!(out, "## {}\n\n{}", NOTES_SECTION, NOTES_PROMPT);
    if let Some(notes) = &review.notes {
        let _ = writeln!(out, "{}", notes);
    }
    out.push_str("\n---\n\n");

    let _ = match review.duration {
        Some(minutes) => writeln!(out, "**{}:** {} minutes", DURATION_FIELD, minutes),
        None => writeln!(out, "**{}:** minutes", DURATION_FIELD),
    };

    out
}
