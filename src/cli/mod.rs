//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, LifemapAction};
pub use output::{
    format_chart_rows, format_daily_review, format_energy_trend, format_life_map,
    format_review_list, format_score_report, format_weekly_review,
};
