//! Life map table codec
//!
//! The life map is a six-row markdown table (domain, score, assessment)
//! living inside a hand-edited document. Updating it is a structural splice:
//! find the row region, render new rows, reassemble. Nothing outside the row
//! region is touched.

use super::life_domain::{DomainValues, LifeDomain};
use super::text::{classify, LineKind};
use serde::Serialize;
use std::ops::Range;
use tracing::debug;

pub const TABLE_HEADER: &str = "| Domain | Score (1-10) | Brief Assessment |";
pub const TABLE_SEPARATOR: &str = "|--------|--------------|------------------|";

/// Score and assessment for one domain (score 0 = not rated)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LifeMapEntry {
    pub score: i32,
    pub assessment: String,
}

impl LifeMapEntry {
    pub fn new(score: i32, assessment: impl Into<String>) -> Self {
        LifeMapEntry {
            score,
            assessment: assessment.into(),
        }
    }
}

/// All six domains, always present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LifeMap {
    pub domains: DomainValues<LifeMapEntry>,
}

impl LifeMap {
    pub fn get(&self, domain: LifeDomain) -> &LifeMapEntry {
        &self.domains[domain]
    }

    pub fn set(&mut self, domain: LifeDomain, entry: LifeMapEntry) {
        self.domains.set(domain, entry);
    }

    /// Scores only, for charting
    pub fn scores(&self) -> DomainValues<i32> {
        self.domains.map(|_, entry| entry.score)
    }
}

/// Byte ranges of a located table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpan {
    /// Header and separator lines, empty when the table has no header
    pub header: Range<usize>,
    /// Data rows including their line terminators
    pub rows: Range<usize>,
}

/// Read all six domains from the first matching row of each in `content`
pub fn parse_life_map(content: &str) -> LifeMap {
    let mut map = LifeMap::default();
    let mut seen: DomainValues<bool> = DomainValues::default();

    for line in content.lines() {
        if classify(line) != LineKind::TableRow {
            continue;
        }
        let Some((domain, score, assessment)) = split_row(line) else {
            continue;
        };
        let Ok(domain) = domain.parse::<LifeDomain>() else {
            continue;
        };

        if seen[domain] {
            continue;
        }
        seen[domain] = true;

        map.set(domain, LifeMapEntry::new(parse_score(score), assessment));
    }

    debug!(rows = seen.iter().filter(|(_, s)| **s).count(), "parsed life map");
    map
}

/// Integer scores only; anything else (`n/a`, `-`, `eight`, `8.5`) is 0
fn parse_score(cell: &str) -> i32 {
    cell.trim().parse().unwrap_or(0)
}

/// `| a | b | c |` into (a, b, c); c keeps any inner pipes
fn split_row(line: &str) -> Option<(&str, &str, &str)> {
    let inner = line.trim().strip_prefix('|')?;
    let inner = inner.strip_suffix('|').unwrap_or(inner);

    let mut cells = inner.splitn(3, '|');
    let domain = cells.next()?.trim();
    let score = cells.next()?.trim();
    let assessment = cells.next().unwrap_or("").trim();

    Some((domain, score, assessment))
}

/// Flatten text into one table cell: no line breaks, no column pipes
pub fn table_cell(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "/")
}

fn render_row(domain: LifeDomain, entry: &LifeMapEntry) -> String {
    format!(
        "| {} | {} | {} |",
        domain.label(),
        entry.score,
        table_cell(&entry.assessment)
    )
}

fn render_rows(map: &LifeMap, newline: &str) -> String {
    map.domains
        .iter()
        .map(|(domain, entry)| render_row(domain, entry))
        .collect::<Vec<_>>()
        .join(newline)
}

/// Header plus six rows in fixed domain order
pub fn serialize_life_map(map: &LifeMap) -> String {
    format!(
        "{}\n{}\n{}\n",
        TABLE_HEADER,
        TABLE_SEPARATOR,
        render_rows(map, "\n")
    )
}

/// A fresh life map document with an intro line and the table
pub fn new_life_map_document(map: &LifeMap) -> String {
    format!(
        "# Life Map\n\nWhere each area of life stands right now.\n\n{}",
        serialize_life_map(map)
    )
}

/// Lines with byte offsets; `text` excludes the terminator
fn lines_with_offsets(content: &str) -> impl Iterator<Item = (usize, usize, &str)> {
    let mut offset = 0;
    content.split_inclusive('\n').map(move |full| {
        let start = offset;
        offset += full.len();
        let text = full.trim_end_matches('\n').trim_end_matches('\r');
        (start, offset, text)
    })
}

fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.contains('-')
        && trimmed
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':' | ' ' | '\t'))
}

fn is_header_row(line: &str) -> bool {
    split_row(line).is_some_and(|(first, _, _)| first.eq_ignore_ascii_case("domain"))
}

fn is_domain_row(line: &str) -> bool {
    split_row(line).is_some_and(|(first, _, _)| first.parse::<LifeDomain>().is_ok())
}

/// First index from `from` where `keep` no longer holds
fn run_end(from: usize, keep: impl Fn(usize) -> bool) -> usize {
    let mut end = from;
    while keep(end) {
        end += 1;
    }
    end
}

/// Locate the life map table.
///
/// Prefers a table with a `Domain` header; falls back to the first block of
/// rows naming a domain when the header was deleted. The row range covers
/// only the first run of domain rows; other rows in the table are left out.
pub fn find_table(content: &str) -> Option<TableSpan> {
    let lines: Vec<(usize, usize, &str)> = lines_with_offsets(content).collect();
    let is_row = |i: usize| {
        lines
            .get(i)
            .is_some_and(|(_, _, text)| classify(text) == LineKind::TableRow)
    };

    let is_domain = |i: usize| is_row(i) && is_domain_row(lines[i].2);

    let span_of = |first: usize, end: usize| -> Range<usize> {
        if first == end {
            let at = lines.get(first).map_or(content.len(), |(start, _, _)| *start);
            at..at
        } else {
            lines[first].0..lines[end - 1].1
        }
    };

    if let Some(header) = (0..lines.len()).find(|i| is_row(*i) && is_header_row(lines[*i].2)) {
        let mut first_row = header + 1;
        if is_row(first_row) && is_separator_row(lines[first_row].2) {
            first_row += 1;
        }
        let header_end = lines[first_row - 1].1;

        // Rows the user added to the table stay put; only the domain run is ours
        let block_end = run_end(first_row, is_row);
        let first = (first_row..block_end)
            .find(|i| is_domain(*i))
            .unwrap_or(first_row);
        let end = run_end(first, is_domain);
        return Some(TableSpan {
            header: lines[header].0..header_end,
            rows: span_of(first, end),
        });
    }

    let first = (0..lines.len()).find(|i| is_domain(*i))?;
    let end = run_end(first, is_domain);
    let at = lines[first].0;
    Some(TableSpan {
        header: at..at,
        rows: span_of(first, end),
    })
}

/// Replace only the table rows in `original` with rows for `map`.
///
/// Every byte outside the row region is preserved. When no table exists, a
/// full table is appended. Applying the same map twice gives the same text.
pub fn update_life_map_file(original: &str, map: &LifeMap) -> String {
    let newline = if original.contains("\r\n") { "\r\n" } else { "\n" };

    let Some(span) = find_table(original) else {
        debug!("no life map table found, appending one");
        let mut out = original.to_string();
        if !out.is_empty() {
            if !out.ends_with('\n') {
                out.push_str(newline);
            }
            out.push_str(newline);
        }
        out.push_str(&serialize_life_map(map).replace('\n', newline));
        return out;
    };

    let before = &original[..span.rows.start];
    let region = &original[span.rows.clone()];
    let after = &original[span.rows.end..];

    let mut out = String::with_capacity(original.len() + 64);
    out.push_str(before);
    if !before.is_empty() && !before.ends_with('\n') {
        out.push_str(newline);
    }
    out.push_str(&render_rows(map, newline));
    if region.ends_with('\n') || !after.is_empty() {
        out.push_str(newline);
    }
    out.push_str(after);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "# Life Map

Updated each quarter.

| Domain | Score (1-10) | Brief Assessment |
|--------|--------------|------------------|
| Career | 8 | Strong momentum, good team |
| Relationships | 7 | Solid |
| Health | 5 | Sleep is off |
| Meaning | 6 | Volunteering helps |
| Finances | 7 | On track |
| Fun | 4 | Neglected, needs attention |

## Reflections

Keep the *weekends* free.
";

    fn sample_map() -> LifeMap {
        let mut map = LifeMap::default();
        map.set(LifeDomain::Career, LifeMapEntry::new(9, "Promoted"));
        map.set(LifeDomain::Fun, LifeMapEntry::new(6, "Climbing again"));
        map
    }

    #[test]
    fn test_parse_full_table() {
        let map = parse_life_map(DOC);
        assert_eq!(
            map.get(LifeDomain::Career),
            &LifeMapEntry::new(8, "Strong momentum, good team")
        );
        assert_eq!(map.get(LifeDomain::Health).score, 5);
        assert_eq!(
            map.get(LifeDomain::Fun),
            &LifeMapEntry::new(4, "Neglected, needs attention")
        );
    }

    #[test]
    fn test_parse_missing_rows_default() {
        let map = parse_life_map("| Career | 8 | ok |\n");
        assert_eq!(map.get(LifeDomain::Career).score, 8);
        assert_eq!(map.get(LifeDomain::Meaning), &LifeMapEntry::default());
        assert_eq!(parse_life_map(""), LifeMap::default());
    }

    #[test]
    fn test_parse_non_numeric_scores() {
        let doc = "| Career | eight | words |\n| Health | n/a | |\n| Fun | - | x |\n| Meaning | 8.5 | y |\n";
        let map = parse_life_map(doc);
        for domain in [
            LifeDomain::Career,
            LifeDomain::Health,
            LifeDomain::Fun,
            LifeDomain::Meaning,
        ] {
            assert_eq!(map.get(domain).score, 0, "{}", domain);
        }
        assert_eq!(map.get(LifeDomain::Career).assessment, "words");
    }

    #[test]
    fn test_parse_preserves_out_of_range() {
        let map = parse_life_map("| career | 15 | a |\n| FUN | -5 | b |\n");
        assert_eq!(map.get(LifeDomain::Career).score, 15);
        assert_eq!(map.get(LifeDomain::Fun).score, -5);
    }

    #[test]
    fn test_serialize_fixed_order() {
        let text = serialize_life_map(&sample_map());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], TABLE_HEADER);
        assert_eq!(lines[1], TABLE_SEPARATOR);
        assert_eq!(lines[2], "| Career | 9 | Promoted |");
        assert!(lines[3].starts_with("| Relationships | 0 |"));
        assert_eq!(lines[7], "| Fun | 6 | Climbing again |");
    }

    #[test]
    fn test_serialize_then_parse() {
        let map = sample_map();
        assert_eq!(parse_life_map(&serialize_life_map(&map)), map);
    }

    #[test]
    fn test_find_table_with_header() {
        let span = find_table(DOC).unwrap();
        assert!(DOC[span.header.clone()].starts_with("| Domain |"));
        let rows = &DOC[span.rows];
        assert!(rows.starts_with("| Career | 8 |"));
        assert!(rows.ends_with("| Fun | 4 | Neglected, needs attention |\n"));
    }

    #[test]
    fn test_find_table_without_header() {
        let doc = "intro\n\n| Career | 3 | x |\n| Fun | 2 | y |\ntrailer\n";
        let span = find_table(doc).unwrap();
        assert!(span.header.is_empty());
        assert_eq!(&doc[span.rows], "| Career | 3 | x |\n| Fun | 2 | y |\n");
        assert!(find_table("no table here\n").is_none());
    }

    #[test]
    fn test_update_preserves_surrounding_text() {
        let updated = update_life_map_file(DOC, &sample_map());
        let span = find_table(DOC).unwrap();

        assert!(updated.starts_with(&DOC[..span.rows.start]));
        assert!(updated.ends_with(&DOC[span.rows.end..]));
        assert!(updated.contains("| Career | 9 | Promoted |\n"));
        assert!(!updated.contains("Strong momentum"));
        assert_eq!(parse_life_map(&updated), sample_map());
    }

    #[test]
    fn test_update_is_idempotent() {
        let once = update_life_map_file(DOC, &sample_map());
        let twice = update_life_map_file(&once, &sample_map());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_inserts_table_when_missing() {
        let doc = "# Life Map\n\nNo table yet.";
        let updated = update_life_map_file(doc, &sample_map());
        assert!(updated.starts_with("# Life Map\n\nNo table yet.\n\n| Domain |"));
        assert_eq!(parse_life_map(&updated), sample_map());
        assert_eq!(update_life_map_file(&updated, &sample_map()), updated);

        assert_eq!(
            update_life_map_file("", &sample_map()),
            serialize_life_map(&sample_map())
        );
    }

    #[test]
    fn test_update_header_without_rows() {
        let doc = format!("{}\n{}\n\nafter\n", TABLE_HEADER, TABLE_SEPARATOR);
        let updated = update_life_map_file(&doc, &sample_map());
        assert!(updated.ends_with("| Fun | 6 | Climbing again |\n\nafter\n"));
        assert_eq!(update_life_map_file(&updated, &sample_map()), updated);
    }

    #[test]
    fn test_update_table_at_end_without_newline() {
        let doc = "| Domain | Score | Notes |\n|---|---|---|\n| Career | 1 | x |";
        let updated = update_life_map_file(doc, &sample_map());
        assert!(updated.ends_with("| Fun | 6 | Climbing again |"));
        assert_eq!(update_life_map_file(&updated, &sample_map()), updated);
    }

    #[test]
    fn test_update_keeps_crlf() {
        let doc = DOC.replace('\n', "\r\n");
        let updated = update_life_map_file(&doc, &sample_map());
        assert!(updated.contains("| Career | 9 | Promoted |\r\n"));
        assert!(!updated.replace("\r\n", "").contains('\n'));
        assert!(updated.ends_with("Keep the *weekends* free.\r\n"));
    }

    #[test]
    fn test_update_with_multiline_assessment_is_idempotent() {
        let mut map = LifeMap::default();
        map.set(LifeDomain::Career, LifeMapEntry::new(9, "line one\nline two"));
        map.set(LifeDomain::Fun, LifeMapEntry::new(3, "  a | b  "));

        let once = update_life_map_file(DOC, &map);
        let twice = update_life_map_file(&once, &map);
        assert_eq!(once, twice);
        assert!(once.contains("| Career | 9 | line one line two |\n"));
        assert!(once.contains("| Fun | 3 | a / b |\n"));
        assert_eq!(
            parse_life_map(&once).get(LifeDomain::Career),
            &LifeMapEntry::new(9, "line one line two")
        );
    }

    #[test]
    fn test_table_cell_flattens() {
        assert_eq!(table_cell("one\r\n  two\tthree "), "one two three");
        assert_eq!(table_cell("a|b"), "a/b");
        assert_eq!(table_cell(""), "");
    }

    #[test]
    fn test_update_keeps_extra_rows() {
        let extra = "| **Average** | 6 | computed by hand |\n";
        let doc = DOC.replace(
            "| Fun | 4 | Neglected, needs attention |\n",
            &format!("| Fun | 4 | Neglected, needs attention |\n{}", extra),
        );

        let once = update_life_map_file(&doc, &sample_map());
        assert_eq!(once.matches(extra).count(), 1);
        assert!(once.contains(&format!(
            "| Fun | 6 | Climbing again |\n{}\n## Reflections",
            extra
        )));
        assert_eq!(parse_life_map(&once), sample_map());
        assert_eq!(update_life_map_file(&once, &sample_map()), once);
    }

    #[test]
    fn test_update_keeps_extra_row_before_domains() {
        let doc = format!(
            "{}\n{}\n| Legend | 0 | unrated |\n| Career | 1 | x |\n| Fun | 2 | y |\n\nafter\n",
            TABLE_HEADER, TABLE_SEPARATOR
        );

        let once = update_life_map_file(&doc, &sample_map());
        assert!(once.contains(&format!(
            "{}\n| Legend | 0 | unrated |\n| Career | 9 | Promoted |\n",
            TABLE_SEPARATOR
        )));
        assert!(once.ends_with("| Fun | 6 | Climbing again |\n\nafter\n"));
        assert_eq!(update_life_map_file(&once, &sample_map()), once);
    }
}
