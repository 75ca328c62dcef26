//! Section-aware reader over scanned lines

use super::filled;
use super::scanner::{scan, Line, LineKind};

/// A scanned document
#[derive(Debug)]
pub struct Document<'a> {
    lines: Vec<Line<'a>>,
}

impl<'a> Document<'a> {
    pub fn parse(text: &'a str) -> Self {
        Document { lines: scan(text) }
    }

    /// Find the section under the heading with `title` (case-insensitive).
    ///
    /// The section runs until the next rule line, the next heading of the
    /// same or a shallower level, or the end of the document.
    pub fn section(&self, title: &str) -> Option<Section<'_>> {
        let wanted = title.trim();
        let (start, level, heading) = self.lines.iter().enumerate().find_map(|(i, line)| {
            match line.kind {
                LineKind::Heading { level, title } if title.eq_ignore_ascii_case(wanted) => {
                    Some((i, level, title))
                }
                _ => None,
            }
        })?;

        let body = &self.lines[start + 1..];
        let end = body
            .iter()
            .position(|line| match line.kind {
                LineKind::Rule => true,
                LineKind::Heading { level: l, .. } => l <= level,
                _ => false,
            })
            .unwrap_or(body.len());

        Some(Section {
            title: heading,
            level,
            lines: &body[..end],
        })
    }

    /// Value following the first `**Label:**` line anywhere in the document
    pub fn field(&self, label: &str) -> Option<&'a str> {
        self.lines.iter().find_map(|line| field_value(line.raw, label))
    }
}

/// The lines between a heading and its boundary (heading excluded)
#[derive(Debug, Clone, Copy)]
pub struct Section<'d> {
    pub title: &'d str,
    pub level: usize,
    pub lines: &'d [Line<'d>],
}

/// Decision read from a pair of mutually exclusive checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxChoice {
    First,
    Second,
    /// Neither or both marked
    Undecided,
}

impl<'d> Section<'d> {
    /// Joined blockquote answer, absent when empty or a placeholder
    pub fn blockquote(&self) -> Option<String> {
        let joined = self
            .lines
            .iter()
            .filter_map(|line| match line.kind {
                LineKind::Quote(text) if !text.trim().is_empty() => Some(text),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" ");

        filled(&joined)
    }

    /// Free text on the lines after the `prompt` line, newlines preserved
    pub fn text_after(&self, prompt: &str) -> Option<String> {
        let prompt_at = self
            .lines
            .iter()
            .position(|line| line.raw.trim().eq_ignore_ascii_case(prompt.trim()))?;

        let text = self.lines[prompt_at + 1..]
            .iter()
            .map(|line| line.raw)
            .collect::<Vec<_>>()
            .join("\n");

        filled(&text)
    }

    /// Which of two checkbox options is marked (labels matched case-insensitively by prefix)
    pub fn checkbox_choice(&self, first: &str, second: &str) -> CheckboxChoice {
        let marked = |option: &str| {
            self.lines.iter().any(|line| match line.kind {
                LineKind::Checkbox { checked, label } => {
                    checked && starts_with_ignore_case(label, option)
                }
                _ => false,
            })
        };

        match (marked(first), marked(second)) {
            (true, false) => CheckboxChoice::First,
            (false, true) => CheckboxChoice::Second,
            _ => CheckboxChoice::Undecided,
        }
    }

    /// `Key: value` pairs from plain text lines, in document order
    pub fn key_values(&self) -> impl Iterator<Item = (&'d str, &'d str)> + 'd {
        let lines = self.lines;
        lines.iter().filter_map(|line| match line.kind {
            LineKind::Text => {
                let (key, value) = line.raw.split_once(':')?;
                Some((key.trim(), value.trim()))
            }
            _ => None,
        })
    }
}

fn field_value<'a>(raw: &'a str, label: &str) -> Option<&'a str> {
    let line = raw.trim();
    let rest = line.strip_prefix("**")?;
    let label_len = label.len();

    let candidate = rest.get(..label_len)?;
    if !candidate.eq_ignore_ascii_case(label) {
        return None;
    }

    let value = rest[label_len..].strip_prefix(":**")?;
    Some(value.trim())
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Review

**Date:** 2025-01-15

## First

> answer one
> continues here

---

## Second

Prompt line?
free text
second line

### Nested

still second

## Third
- [x] Needs action
- [ ] Just needs acknowledgment
Career: 8
";

    #[test]
    fn test_section_stops_at_rule() {
        let doc = Document::parse(SAMPLE);
        let section = doc.section("First").unwrap();
        assert_eq!(section.level, 2);
        assert!(section.lines.iter().all(|l| l.kind != LineKind::Rule));
        assert_eq!(
            section.blockquote().as_deref(),
            Some("answer one continues here")
        );
    }

    #[test]
    fn test_section_stops_at_same_level_heading_only() {
        let doc = Document::parse(SAMPLE);
        let section = doc.section("second").unwrap();
        let text = section.text_after("Prompt line?").unwrap();
        assert!(text.starts_with("free text\nsecond line"));
        assert!(text.contains("### Nested"));
        assert!(text.ends_with("still second"));
    }

    #[test]
    fn test_missing_section() {
        let doc = Document::parse(SAMPLE);
        assert!(doc.section("Nope").is_none());
        assert!(Document::parse("").section("First").is_none());
    }

    #[test]
    fn test_text_after_missing_prompt() {
        let doc = Document::parse(SAMPLE);
        assert!(doc.section("First").unwrap().text_after("Prompt line?").is_none());
    }

    #[test]
    fn test_checkbox_choice() {
        let doc = Document::parse(SAMPLE);
        let section = doc.section("Third").unwrap();
        assert_eq!(
            section.checkbox_choice("needs action", "just needs acknowledgment"),
            CheckboxChoice::First
        );
    }

    #[test]
    fn test_checkbox_both_or_neither_marked() {
        let both = Document::parse("## S\n- [x] Alpha\n- [x] Beta\n");
        assert_eq!(
            both.section("S").unwrap().checkbox_choice("alpha", "beta"),
            CheckboxChoice::Undecided
        );

        let neither = Document::parse("## S\n- [ ] Alpha\n- [ ] Beta\n");
        assert_eq!(
            neither.section("S").unwrap().checkbox_choice("alpha", "beta"),
            CheckboxChoice::Undecided
        );
    }

    #[test]
    fn test_key_values() {
        let doc = Document::parse(SAMPLE);
        let pairs: Vec<_> = doc.section("Third").unwrap().key_values().collect();
        assert_eq!(pairs, vec![("Career", "8")]);
    }

    #[test]
    fn test_field() {
        let doc = Document::parse(SAMPLE);
        assert_eq!(doc.field("Date"), Some("2025-01-15"));
        assert_eq!(doc.field("date"), Some("2025-01-15"));
        assert_eq!(doc.field("Time to complete"), None);
    }

    #[test]
    fn test_placeholder_blockquote_is_absent() {
        let doc = Document::parse("## Win\n\n> [Your win]\n");
        assert!(doc.section("Win").unwrap().blockquote().is_none());
    }
}
