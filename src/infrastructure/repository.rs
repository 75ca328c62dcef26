//! File system repository
//!
//! The only place that touches review files on disk. Everything it returns
//! is raw text; parsing belongs to the domain layer.

use crate::domain::ReviewKind;
use crate::error::{ReviewError, Result};
use crate::infrastructure::config::{Config, META_DIR};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Relative path of the life map document
pub const LIFE_MAP_FILE: &str = "life-map.md";

/// A review file with the date its name stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    /// Path relative to the journal root (forward slashes)
    pub filename: String,
    pub date: NaiveDate,
}

impl ReviewEntry {
    pub fn new(filename: String, date: NaiveDate) -> Self {
        ReviewEntry { filename, date }
    }
}

/// Abstract repository for journal operations
pub trait ReviewRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .lifereview/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .lifereview/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .lifereview directory exists
    fn is_initialized(&self) -> bool;

    /// Create the .lifereview directory and review folders
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of ReviewRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Find the journal root: LIFEREVIEW_ROOT first, then walk up from the
    /// current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("LIFEREVIEW_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_meta_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(ReviewError::Config(format!(
                "LIFEREVIEW_ROOT is set to '{}' but no {} directory found. \
                Run 'lifereview init' in that directory or unset LIFEREVIEW_ROOT.",
                path.display(),
                META_DIR
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .lifereview is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_meta_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| ReviewError::NotReviewDirectory(start.to_path_buf()))
    }

    fn has_meta_dir(path: &Path) -> bool {
        path.join(META_DIR).is_dir()
    }
}

impl ReviewRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_meta_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(ReviewError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(self.root.join(META_DIR))?;
        for kind in [ReviewKind::Daily, ReviewKind::Weekly] {
            fs::create_dir_all(self.root.join(kind.dir()))?;
        }
        Ok(())
    }
}

// File operations (filesystem-specific, not part of the trait)
impl FileSystemRepository {
    pub fn file_exists(&self, filename: &str) -> bool {
        self.root.join(filename).exists()
    }

    /// Read a file relative to the root; `None` when it does not exist
    pub fn read_file(&self, filename: &str) -> Result<Option<String>> {
        let path = self.root.join(filename);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path).map(Some).map_err(ReviewError::Io)
    }

    /// Write a file, creating parent directories as needed
    pub fn write_file(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, content)?;
        info!(file = filename, bytes = content.len(), "wrote file");
        Ok(())
    }

    /// Write through a temp file in the same directory, then rename into place
    pub fn write_file_atomic(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_name = format!(
            "{}.lifereview-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("review.md"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);
        fs::write(&tmp_path, content)?;

        // rename does not replace existing files on Windows
        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }
        fs::rename(&tmp_path, &path)?;

        info!(file = filename, bytes = content.len(), "replaced file");
        Ok(())
    }

    /// Review files of `kind` within the inclusive date range, newest first
    pub fn list_reviews(
        &self,
        kind: ReviewKind,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Result<Vec<ReviewEntry>> {
        let dir = self.root.join(kind.dir());
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "review directory missing");
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ReviewError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !name.ends_with(".md") {
                continue;
            }
            match kind.date_from_filename(name) {
                Some(date) => {
                    entries.push(ReviewEntry::new(format!("{}/{}", kind.dir(), name), date))
                }
                None => warn!(file = name, "skipping review file with unrecognized name"),
            }
        }

        if let Some(from_date) = from {
            entries.retain(|e| e.date >= kind.period_start(from_date));
        }
        if let Some(to_date) = to {
            entries.retain(|e| e.date <= to_date);
        }

        entries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.filename.cmp(&b.filename)));

        if let Some(n) = limit {
            entries.truncate(n);
        }

        debug!(kind = kind.dir(), count = entries.len(), "listed reviews");
        Ok(entries)
    }
}
