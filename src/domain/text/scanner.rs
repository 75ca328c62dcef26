//! Line scanner for template-shaped markdown
//!
//! Recognizes only the handful of line shapes the review templates use:
//! headings, horizontal rules, blockquotes, task-list checkboxes and table
//! rows. Everything else is plain text. Classification never fails.

use regex::Regex;
use std::sync::OnceLock;

fn checkbox_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[-*+]\s+\[([ xX]?)\]\s*(.*)$").unwrap())
}

/// Shape of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `## Title` (level = number of `#`, 1-6)
    Heading { level: usize, title: &'a str },
    /// `---`, `***` or `___` (three or more, spaces allowed)
    Rule,
    /// `> text`, holding the text after the marker and at most one space
    Quote(&'a str),
    /// `- [x] label`
    Checkbox { checked: bool, label: &'a str },
    /// `| a | b |`
    TableRow,
    Blank,
    Text,
}

/// A classified line, without its terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

impl<'a> Line<'a> {
    pub fn new(raw: &'a str) -> Self {
        Line {
            raw,
            kind: classify(raw),
        }
    }
}

/// Split text into classified lines (`\n` and `\r\n` terminators)
pub fn scan(text: &str) -> Vec<Line<'_>> {
    text.lines().map(Line::new).collect()
}

/// Classify one line (terminator already removed)
pub fn classify(raw: &str) -> LineKind<'_> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if let Some(heading) = heading(trimmed) {
        return heading;
    }

    if is_rule(trimmed) {
        return LineKind::Rule;
    }

    if let Some(rest) = raw.trim_start().strip_prefix('>') {
        return LineKind::Quote(rest.strip_prefix(' ').unwrap_or(rest));
    }

    if let Some(caps) = checkbox_regex().captures(trimmed) {
        let checked = caps.get(1).is_some_and(|m| m.as_str().eq_ignore_ascii_case("x"));
        let label = caps.get(2).map_or("", |m| m.as_str().trim());
        return LineKind::Checkbox { checked, label };
    }

    if trimmed.starts_with('|') {
        return LineKind::TableRow;
    }

    LineKind::Text
}

fn heading(trimmed: &str) -> Option<LineKind<'_>> {
    let level = trimmed.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let rest = &trimmed[level..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return None;
    }

    Some(LineKind::Heading {
        level,
        title: rest.trim(),
    })
}

fn is_rule(trimmed: &str) -> bool {
    let mut marker = None;
    let mut count = 0;

    for c in trimmed.chars() {
        match c {
            ' ' | '\t' => continue,
            '-' | '*' | '_' => {
                if marker.is_some_and(|m| m != c) {
                    return false;
                }
                marker = Some(c);
                count += 1;
            }
            _ => return false,
        }
    }

    count >= 3
}
