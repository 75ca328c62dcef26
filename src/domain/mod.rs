//! Domain layer - Review codecs and score aggregation
//!
//! Everything here is pure: text in, records out. No I/O.

pub mod aggregate;
pub mod daily;
pub mod life_domain;
pub mod life_map;
pub mod review_kind;
pub mod text;
pub mod weekly;

pub use aggregate::{
    aggregate_domain_scores, combine_aggregated_with_derived, convert_to_chart_data,
    derive_domains_from_energy, energy_trend_data, is_data_empty, life_map_chart_data,
    parse_review_date, should_show_empty_state, ChartRow, DomainScoreSet, EnergyPoint,
};
pub use daily::{parse_daily_review, serialize_daily_review, DailyReview, FrictionAction};
pub use life_domain::{DomainValues, LifeDomain};
pub use life_map::{
    new_life_map_document, parse_life_map, serialize_life_map, table_cell, update_life_map_file,
    LifeMap, LifeMapEntry,
};
pub use review_kind::ReviewKind;
pub use weekly::{parse_weekly_review, serialize_weekly_review, WeeklyReview};
