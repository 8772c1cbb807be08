//! Stage layout loader.

use std::path::Path;

use battle_core::StageDefinition;
use serde::Deserialize;

use crate::formats::StageRecord;
use crate::loaders::{LoadResult, read_file};

/// Stage list structure for RON files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StageCatalog {
    pub stages: Vec<StageRecord>,
}

/// Loader for stage layouts.
///
/// Placement coordinates are 1-based in the files and come out 0-based.
/// Monster ids are not checked here; unknown ones are skipped when the stage
/// is loaded into a battle.
pub struct StageLoader;

impl StageLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<StageDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<StageDefinition>> {
        let catalog: StageCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stage list RON: {}", e))?;

        Ok(catalog
            .stages
            .into_iter()
            .map(StageRecord::into_definition)
            .collect())
    }
}
