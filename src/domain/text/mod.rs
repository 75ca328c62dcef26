//! Text primitives for template-shaped markdown
//!
//! Pure string utilities with no knowledge of review semantics: a line
//! scanner, a section reader built on it, and the shared "is this a real
//! value" predicate every extractor applies.

pub mod scanner;
pub mod section;

pub use scanner::{classify, scan, Line, LineKind};
pub use section::{CheckboxChoice, Document, Section};

use regex::Regex;
use std::sync::OnceLock;

/// Template placeholders look like `[Your win]`
fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\[.*\]$").unwrap())
}

fn iso_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

fn minutes_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(\d+)\s*minutes").unwrap())
}

/// True when the trimmed text is a bracketed template placeholder
pub fn is_placeholder(text: &str) -> bool {
    placeholder_regex().is_match(text.trim())
}

/// True for empty, whitespace-only or placeholder text
pub fn is_non_value(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || is_placeholder(trimmed)
}

/// Trimmed text, or `None` when it is not a real value
pub fn filled(text: &str) -> Option<String> {
    if is_non_value(text) {
        None
    } else {
        Some(text.trim().to_string())
    }
}

/// First whitespace-delimited token when it has the `YYYY-MM-DD` shape
///
/// Only the shape is checked; `2025-02-30` passes.
pub fn iso_date_token(value: &str) -> Option<String> {
    let token = value.split_whitespace().next()?;
    iso_date_regex()
        .is_match(token)
        .then(|| token.to_string())
}

/// First whitespace-delimited token parsed as an integer
pub fn integer_token<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.split_whitespace().next()?.parse().ok()
}

/// The integer right before the word "minutes" (e.g. `5 minutes`)
pub fn minutes_value(value: &str) -> Option<u32> {
    minutes_regex()
        .captures(value)
        .and_then(|caps| caps[1].parse().ok())
}
