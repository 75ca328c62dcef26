//! Error types for lifereview

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lifereview
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Not a lifereview directory: {0}")]
    NotReviewDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Invalid score: {0}")]
    InvalidScore(String),

    #[error("Review not found: {0}")]
    ReviewNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReviewError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ReviewError::NotReviewDirectory(_) => 2,
            ReviewError::InvalidDate(_) => 3,
            ReviewError::ReviewNotFound(_) => 4,
            ReviewError::UnknownDomain(_) | ReviewError::InvalidScore(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ReviewError::NotReviewDirectory(path) => {
                format!(
                    "Not a lifereview directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'lifereview init' in this directory to start a journal\n\
                    • Navigate to an existing lifereview directory\n\
                    • Set LIFEREVIEW_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            ReviewError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Dates use the YYYY-MM-DD format.\n\
                    Example: lifereview scores --from 2025-01-01 --to 2025-01-31",
                    input
                )
            }
            ReviewError::UnknownDomain(name) => {
                format!(
                    "Unknown domain: '{}'\n\n\
                    Valid domains: career, relationships, health, meaning, finances, fun",
                    name
                )
            }
            ReviewError::InvalidScore(score) => {
                format!(
                    "Invalid score: '{}'\n\n\
                    Scores are whole numbers from 0 to 10 (0 = not rated).",
                    score
                )
            }
            ReviewError::ReviewNotFound(name) => {
                format!(
                    "No review found: {}\n\n\
                    Suggestions:\n\
                    • Use 'lifereview list' to see existing reviews\n\
                    • Create one with 'lifereview open daily'",
                    name
                )
            }
            ReviewError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: lifereview config editor 'vim'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ReviewError
pub type Result<T> = std::result::Result<T, ReviewError>;
