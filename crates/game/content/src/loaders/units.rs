//! Unit catalog loader.

use std::path::Path;

use battle_core::UnitDefinition;
use serde::Deserialize;

use crate::formats::UnitRecord;
use crate::loaders::{LoadResult, read_file};

/// Unit catalog structure for RON files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UnitCatalog {
    pub units: Vec<UnitRecord>,
}

/// Loader for the player unit catalog.
pub struct UnitLoader;

impl UnitLoader {
    /// Load unit definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<UnitDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse unit definitions from a RON string.
    pub fn parse(content: &str) -> LoadResult<Vec<UnitDefinition>> {
        let catalog: UnitCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog RON: {}", e))?;

        Ok(catalog
            .units
            .into_iter()
            .map(UnitRecord::into_definition)
            .collect())
    }
}
