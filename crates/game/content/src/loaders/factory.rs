//! Content factory for loading a battle data directory.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, MonsterDefinition, StageDefinition, UnitDefinition};

use crate::loaders::{ConfigLoader, LoadResult, MonsterLoader, StageLoader, UnitLoader};

/// Everything a data directory defines, in file order.
#[derive(Clone, Debug, Default)]
pub struct Content {
    pub config: BattleConfig,
    pub units: Vec<UnitDefinition>,
    pub monsters: Vec<MonsterDefinition>,
    pub stages: Vec<StageDefinition>,
}

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── units.ron
/// ├── monsters.ron
/// └── stages.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    ///
    /// A missing file is not an error: the default configuration applies.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!("no config.toml in {}, using defaults", self.data_dir.display());
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the player unit catalog from `units.ron`.
    pub fn load_units(&self) -> LoadResult<Vec<UnitDefinition>> {
        let path = self.data_dir.join("units.ron");
        UnitLoader::load(&path)
    }

    /// Load the monster catalog from `monsters.ron`.
    pub fn load_monsters(&self) -> LoadResult<Vec<MonsterDefinition>> {
        let path = self.data_dir.join("monsters.ron");
        MonsterLoader::load(&path)
    }

    /// Load stage layouts from `stages.ron`.
    pub fn load_stages(&self) -> LoadResult<Vec<StageDefinition>> {
        let path = self.data_dir.join("stages.ron");
        StageLoader::load(&path)
    }

    /// Load every content file in the directory.
    pub fn load_all(&self) -> LoadResult<Content> {
        let content = Content {
            config: self.load_config()?,
            units: self.load_units()?,
            monsters: self.load_monsters()?,
            stages: self.load_stages()?,
        };

        tracing::info!(
            "loaded {} units, {} monsters, {} stages from {}",
            content.units.len(),
            content.monsters.len(),
            content.stages.len(),
            self.data_dir.display()
        );
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/battle-data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/battle-data"));
    }
}
