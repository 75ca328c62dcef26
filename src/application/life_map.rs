//! Life map use cases

use crate::domain::{
    life_map_chart_data, parse_life_map, table_cell, update_life_map_file, ChartRow, LifeDomain,
    LifeMap, LifeMapEntry,
};
use crate::error::{ReviewError, Result};
use crate::infrastructure::{FileSystemRepository, LIFE_MAP_FILE};
use tracing::info;

/// Service for reading and editing `life-map.md`
pub struct LifeMapService {
    repository: FileSystemRepository,
}

impl LifeMapService {
    pub fn new(repository: FileSystemRepository) -> Self {
        LifeMapService { repository }
    }

    /// Current life map; a missing file reads as all domains unrated
    pub fn show(&self) -> Result<LifeMap> {
        Ok(parse_life_map(&self.content()?))
    }

    /// Chart rows for the current life map
    pub fn chart(&self) -> Result<Vec<ChartRow>> {
        Ok(life_map_chart_data(&self.content()?))
    }

    /// Change one domain and splice the table back into the document.
    ///
    /// When `assessment` is `None` the existing assessment is kept.
    pub fn set(
        &self,
        domain: &str,
        score: &str,
        assessment: Option<&str>,
    ) -> Result<LifeMapEntry> {
        let domain = domain
            .parse::<LifeDomain>()
            .map_err(|_| ReviewError::UnknownDomain(domain.to_string()))?;
        let score = parse_score(score)?;

        let original = self.content()?;
        let mut map = parse_life_map(&original);

        let assessment = match assessment {
            Some(text) => table_cell(text),
            None => table_cell(&map.get(domain).assessment),
        };
        let entry = LifeMapEntry::new(score, assessment);
        map.set(domain, entry.clone());

        let updated = update_life_map_file(&original, &map);
        self.repository.write_file_atomic(LIFE_MAP_FILE, &updated)?;

        info!(domain = domain.key(), score, "updated life map");
        Ok(entry)
    }

    fn content(&self) -> Result<String> {
        Ok(self.repository.read_file(LIFE_MAP_FILE)?.unwrap_or_default())
    }
}

fn parse_score(value: &str) -> Result<i32> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|score| (0..=10).contains(score))
        .ok_or_else(|| ReviewError::InvalidScore(value.to_string()))
}
