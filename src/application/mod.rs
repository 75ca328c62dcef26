//! Application layer - Use cases and orchestration

pub mod dashboard;
pub mod init;
pub mod life_map;
pub mod manage_config;
pub mod open_review;
pub mod reviews;

pub use dashboard::{DashboardService, DateWindow, ScoreReport};
pub use life_map::LifeMapService;
pub use manage_config::ConfigService;
pub use open_review::OpenReviewService;
pub use reviews::ReviewService;
