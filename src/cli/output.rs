//! Output formatting utilities

use crate::application::ScoreReport;
use crate::domain::{ChartRow, DailyReview, EnergyPoint, FrictionAction, LifeMap, WeeklyReview};
use crate::infrastructure::ReviewEntry;
use std::fmt::Write;

const BAR_WIDTH: usize = 10;
const LABEL_WIDTH: usize = 14;

/// Format a list of review entries for display
pub fn format_review_list(entries: &[ReviewEntry]) -> String {
    if entries.is_empty() {
        return "No reviews found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let _ = writeln!(output, "{}  {}", entry.date.format("%Y-%m-%d"), entry.filename);
    }
    output
}

/// `##########` style bar for a 0-10 value
fn bar(value: i32) -> String {
    let filled = value.clamp(0, BAR_WIDTH as i32) as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// One line per domain: label, bar, score
pub fn format_chart_rows(rows: &[ChartRow]) -> String {
    let mut output = String::new();
    for row in rows {
        let score = row.score.unwrap_or(0);
        let value = match row.score {
            Some(score) if score > 0 => score.to_string(),
            _ => "-".to_string(),
        };
        let _ = writeln!(
            output,
            "{:<width$} {} {:>2}",
            row.domain,
            bar(score),
            value,
            width = LABEL_WIDTH
        );
    }
    output
}

/// Score view with window header, or the empty-state message
pub fn format_score_report(report: &ScoreReport) -> String {
    let window = &report.window;
    if report.show_empty_state {
        return format!(
            "No reviews between {} and {} yet.\nStart one with 'lifereview open daily'.\n",
            window.from, window.to
        );
    }

    let mut output = format!(
        "Domain scores {} to {} ({} review{})\n\n",
        window.from,
        window.to,
        report.review_count,
        if report.review_count == 1 { "" } else { "s" }
    );
    output.push_str(&format_chart_rows(&report.rows));
    if report.all_unrated {
        output.push_str("\nNo domain ratings or energy levels recorded in this window.\n");
    }
    output
}

/// Energy levels oldest first
pub fn format_energy_trend(points: &[EnergyPoint]) -> String {
    if points.is_empty() {
        return "No energy levels recorded".to_string();
    }

    let mut output = String::new();
    for point in points {
        let _ = writeln!(
            output,
            "{:<10}  {} {:>2}",
            point.date.as_deref().unwrap_or("?"),
            bar(i32::from(point.energy)),
            point.energy
        );
    }
    output
}

fn push_line(output: &mut String, label: &str, value: Option<impl std::fmt::Display>) {
    if let Some(value) = value {
        let _ = writeln!(output, "{}: {}", label, value);
    }
}

/// Text block: first line after the label, continuation lines indented
fn push_block(output: &mut String, label: &str, value: Option<&str>) {
    let Some(value) = value else {
        return;
    };
    let mut lines = value.lines();
    let _ = writeln!(output, "{}: {}", label, lines.next().unwrap_or(""));
    for line in lines {
        let _ = writeln!(output, "  {}", line);
    }
}

pub fn format_daily_review(review: &DailyReview) -> String {
    let mut output = format!("Daily review ({})\n\n", review.file_path);

    push_line(&mut output, "Date", review.date.as_deref());
    push_line(&mut output, "Energy", review.energy_level.map(|e| format!("{}/10", e)));
    push_block(&mut output, "Energy factors", review.energy_factors.as_deref());
    push_block(&mut output, "Meaningful win", review.meaningful_win.as_deref());
    push_block(&mut output, "Friction", review.friction_point.as_deref());
    push_line(
        &mut output,
        "Friction action",
        review.friction_action.map(|action| match action {
            FrictionAction::Address => "needs action",
            FrictionAction::LettingGo => "just needs acknowledgment",
        }),
    );
    push_block(&mut output, "Letting go of", review.thing_to_let_go.as_deref());
    push_block(&mut output, "Tomorrow's priority", review.tomorrow_priority.as_deref());
    push_block(&mut output, "Notes", review.notes.as_deref());
    push_line(
        &mut output,
        "Time to complete",
        review.completion_time_minutes.map(|m| format!("{} minutes", m)),
    );

    if let Some(ratings) = review.domain_ratings {
        output.push_str("\nRatings:\n");
        for (domain, rating) in ratings.iter() {
            let _ = writeln!(
                output,
                "  {:<width$} {}",
                domain.label(),
                if *rating > 0 { rating.to_string() } else { "-".to_string() },
                width = LABEL_WIDTH
            );
        }
    }

    output
}

pub fn format_weekly_review(review: &WeeklyReview) -> String {
    let mut output = format!("Weekly review ({})\n\n", review.file_path);

    push_line(&mut output, "Week of", review.week_start.as_deref());
    push_line(&mut output, "Week number", review.week_number);
    push_block(&mut output, "Moved the needle", review.moved_needle.as_deref());
    push_block(
        &mut output,
        "Noise disguised as work",
        review.noise_disguised_as_work.as_deref(),
    );
    push_block(&mut output, "Time leaks", review.time_leaks.as_deref());
    push_block(&mut output, "Strategic insight", review.strategic_insight.as_deref());
    push_block(&mut output, "Adjustment", review.adjustment_for_next_week.as_deref());
    push_block(&mut output, "Notes", review.notes.as_deref());
    push_line(&mut output, "Duration", review.duration.map(|m| format!("{} minutes", m)));

    output
}

/// Life map as aligned rows with bars and assessments
pub fn format_life_map(map: &LifeMap) -> String {
    let mut output = String::new();
    for (domain, entry) in map.domains.iter() {
        let score = if entry.score > 0 {
            entry.score.to_string()
        } else {
            "-".to_string()
        };
        let _ = write!(
            output,
            "{:<width$} {} {:>2}",
            domain.label(),
            bar(entry.score),
            score,
            width = LABEL_WIDTH
        );
        if !entry.assessment.is_empty() {
            let _ = write!(output, "  {}", entry.assessment);
        }
        output.push('\n');
    }
    output
}
