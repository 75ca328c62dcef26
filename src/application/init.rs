//! Initialize journal use case

use crate::domain::{new_life_map_document, LifeMap};
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, ReviewRepository, LIFE_MAP_FILE};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new review journal at the specified path.
///
/// An existing `life-map.md` is left alone so a journal can be started in a
/// directory that already holds a hand-written life map.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    if !repo.file_exists(LIFE_MAP_FILE) {
        repo.write_file(LIFE_MAP_FILE, &new_life_map_document(&LifeMap::default()))?;
    }

    info!(root = %path.display(), "initialized journal");
    Ok(repo)
}
