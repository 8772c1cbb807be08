//! Monster catalog loader.

use std::path::Path;

use battle_core::MonsterDefinition;
use serde::Deserialize;

use crate::formats::MonsterRecord;
use crate::loaders::{LoadResult, read_file};

/// Monster catalog structure for RON files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MonsterCatalog {
    pub monsters: Vec<MonsterRecord>,
}

/// Loader for monster definitions, including gold and item drops.
pub struct MonsterLoader;

impl MonsterLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<MonsterDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<MonsterDefinition>> {
        let catalog: MonsterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster catalog RON: {}", e))?;

        Ok(catalog
            .monsters
            .into_iter()
            .map(MonsterRecord::into_definition)
            .collect())
    }
}
