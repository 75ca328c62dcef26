//! Daily review document codec
//!
//! Parses and renders the daily check-in template. Parsing never fails: any
//! missing, malformed or placeholder field is simply left as `None`.

use super::life_domain::{DomainValues, LifeDomain};
use super::text::{self, CheckboxChoice, Document};
use serde::Serialize;
use std::fmt::Write;
use tracing::debug;

pub const ENERGY_SECTION: &str = "Energy Check";
pub const WIN_SECTION: &str = "One Meaningful Win";
pub const FRICTION_SECTION: &str = "One Friction Point";
pub const LET_GO_SECTION: &str = "One Thing to Let Go";
pub const PRIORITY_SECTION: &str = "One Priority for Tomorrow";
pub const NOTES_SECTION: &str = "Optional: Brief Notes";
pub const RATINGS_SECTION: &str = "Life Map Ratings";

const DATE_FIELD: &str = "Date";
const ENERGY_FIELD: &str = "Energy level (1-10)";
const TIME_FIELD: &str = "Time to complete";

const ENERGY_PROMPT: &str = "What's affecting your energy today?";
const WIN_PROMPT: &str = "What's one thing that went well or felt meaningful today?";
const FRICTION_PROMPT: &str = "What created friction, stress, or frustration?";
const FRICTION_CHOICE_PROMPT: &str = "Does this need action, or just acknowledgment?";
const LET_GO_PROMPT: &str = "What are you choosing to release?";
const PRIORITY_PROMPT: &str = "What's the one thing that would make tomorrow a success?";
const NOTES_PROMPT: &str = "Anything else on your mind?";
const RATINGS_PROMPT: &str = "Rate each domain from 1-10 (leave 0 if not rated today).";

const NEEDS_ACTION: &str = "Needs action";
const NEEDS_ACKNOWLEDGMENT: &str = "Just needs acknowledgment";

/// Per-domain ratings from a daily review (0 = not rated)
pub type DomainRatings = DomainValues<u8>;

/// What to do about the day's friction point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionAction {
    Address,
    LettingGo,
}

/// One reflection for one calendar date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailyReview {
    /// `YYYY-MM-DD`, shape-checked only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<u8>,
    /// Free text; may span lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_factors: Option<String>,
    /// Blockquote answer, single-line: `>` lines read back joined by a space
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaningful_win: Option<String>,
    /// Single-line blockquote answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction_action: Option<FrictionAction>,
    /// Single-line blockquote answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thing_to_let_go: Option<String>,
    /// Single-line blockquote answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tomorrow_priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_ratings: Option<DomainRatings>,
    pub file_path: String,
}

impl DailyReview {
    /// An empty review for `date`, as used when creating a new file
    pub fn blank(date: &str, file_path: &str) -> Self {
        DailyReview {
            date: Some(date.to_string()),
            file_path: file_path.to_string(),
            ..Default::default()
        }
    }

    /// Rating for one domain, 0 when not rated
    pub fn rating(&self, domain: LifeDomain) -> u8 {
        self.domain_ratings.map_or(0, |ratings| ratings[domain])
    }
}

fn has_any_rating(ratings: &DomainRatings) -> bool {
    ratings.iter().any(|(_, value)| *value > 0)
}

/// Extract a daily review from document text
pub fn parse_daily_review(content: &str, file_path: &str) -> DailyReview {
    let doc = Document::parse(content);

    let date = doc.field(DATE_FIELD).and_then(text::iso_date_token);

    let energy_level = doc
        .field(ENERGY_FIELD)
        .and_then(text::integer_token::<u8>)
        .filter(|level| (1..=10).contains(level));

    let energy_factors = doc
        .section(ENERGY_SECTION)
        .and_then(|s| s.text_after(ENERGY_PROMPT));

    let friction = doc.section(FRICTION_SECTION);
    let friction_action = friction.and_then(|s| {
        match s.checkbox_choice(NEEDS_ACTION, NEEDS_ACKNOWLEDGMENT) {
            CheckboxChoice::First => Some(FrictionAction::Address),
            CheckboxChoice::Second => Some(FrictionAction::LettingGo),
            CheckboxChoice::Undecided => None,
        }
    });

    let blockquote = |title: &str| doc.section(title).and_then(|s| s.blockquote());

    let notes = doc
        .section(NOTES_SECTION)
        .and_then(|s| s.text_after(NOTES_PROMPT));

    let completion_time_minutes = doc.field(TIME_FIELD).and_then(text::minutes_value);

    let domain_ratings = doc.section(RATINGS_SECTION).and_then(|section| {
        let ratings = DomainValues::from_fn(|domain| {
            section
                .key_values()
                .find(|(key, _)| key.eq_ignore_ascii_case(domain.label()))
                .and_then(|(_, value)| value.parse::<u8>().ok())
                .filter(|rating| *rating <= 10)
                .unwrap_or(0)
        });
        has_any_rating(&ratings).then_some(ratings)
    });

    let review = DailyReview {
        date,
        energy_level,
        energy_factors,
        meaningful_win: blockquote(WIN_SECTION),
        friction_point: friction.and_then(|s| s.blockquote()),
        friction_action,
        thing_to_let_go: blockquote(LET_GO_SECTION),
        tomorrow_priority: blockquote(PRIORITY_SECTION),
        notes,
        completion_time_minutes,
        domain_ratings,
        file_path: file_path.to_string(),
    };

    debug!(
        file_path,
        date = review.date.as_deref().unwrap_or("-"),
        energy = ?review.energy_level,
        rated = review.domain_ratings.is_some(),
        "parsed daily review"
    );

    review
}

/// Render a daily review as a complete template document.
///
/// Free text is written as is, so a line in `energy_factors` or `notes` that
/// is itself a `---` rule or a heading ends that section when parsed back.
pub fn serialize_daily_review(review: &DailyReview) -> String {
    let mut out = String::new();

    out.push_str("# Daily Review\n\n");
    push_field(&mut out, DATE_FIELD, review.date.as_deref());
    out.push_str("\n---\n\n");

    let _ = writeln!(out, "## {}\n", ENERGY_SECTION);
    push_field(&mut out, ENERGY_FIELD, review.energy_level);
    let _ = writeln!(out, "\n{}", ENERGY_PROMPT);
    push_text(&mut out, review.energy_factors.as_deref());
    out.push_str("\n---\n\n");

    push_quote_section(&mut out, WIN_SECTION, WIN_PROMPT, review.meaningful_win.as_deref());

    let _ = writeln!(out, "## {}\n", FRICTION_SECTION);
    let _ = writeln!(out, "{}\n", FRICTION_PROMPT);
    push_quote(&mut out, review.friction_point.as_deref());
    let _ = writeln!(out, "\n{}", FRICTION_CHOICE_PROMPT);
    let action = review.friction_action;
    push_checkbox(&mut out, action == Some(FrictionAction::Address), NEEDS_ACTION);
    push_checkbox(
        &mut out,
        action == Some(FrictionAction::LettingGo),
        NEEDS_ACKNOWLEDGMENT,
    );
    out.push_str("\n---\n\n");

    push_quote_section(&mut out, LET_GO_SECTION, LET_GO_PROMPT, review.thing_to_let_go.as_deref());
    push_quote_section(
        &mut out,
        PRIORITY_SECTION,
        PRIORITY_PROMPT,
        review.tomorrow_priority.as_deref(),
    );

    let _ = writeln!(out, "## {}\n", NOTES_SECTION);
    let _ = writeln!(out, "{}", NOTES_PROMPT);
    push_text(&mut out, review.notes.as_deref());
    out.push_str("\n---\n\n");

    if let Some(ratings) = review.domain_ratings.filter(has_any_rating) {
        let _ = writeln!(out, "## {}\n", RATINGS_SECTION);
        let _ = writeln!(out, "{}\n", RATINGS_PROMPT);
        for (domain, rating) in ratings.iter() {
            let _ = writeln!(out, "{}: {}", domain.label(), rating);
        }
        out.push_str("\n---\n\n");
    }

    match review.completion_time_minutes {
        Some(minutes) => {
            let _ = writeln!(out, "**{}:** {} minutes", TIME_FIELD, minutes);
        }
        None => {
            let _ = writeln!(out, "**{}:** minutes", TIME_FIELD);
        }
    }

    out
}

fn push_field(out: &mut String, label: &str, value: Option<impl std::fmt::Display>) {
    match value {
        Some(value) => {
            let _ = writeln!(out, "**{}:** {}", label, value);
        }
        None => {
            let _ = writeln!(out, "**{}:**", label);
        }
    }
}

fn push_text(out: &mut String, value: Option<&str>) {
    if let Some(value) = value {
        out.push_str(value);
        out.push('\n');
    }
}

fn push_quote(out: &mut String, value: Option<&str>) {
    match value {
        Some(value) => {
            for line in value.lines() {
                let _ = writeln!(out, "> {}", line);
            }
        }
        None => out.push_str(">\n"),
    }
}

fn push_quote_section(out: &mut String, title: &str, prompt: &str, value: Option<&str>) {
    let _ = writeln!(out, "## {}\n", title);
    let _ = writeln!(out, "{}\n", prompt);
    push_quote(out, value);
    out.push_str("\n---\n\n");
}

fn push_checkbox(out: &mut String, checked: bool, label: &str) {
    let mark = if checked { 'x' } else { ' ' };
    let _ = writeln!(out, "- [{}] {}", mark, label);
}
