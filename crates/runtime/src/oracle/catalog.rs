//! [`DefinitionOracle`] backed by in-memory maps.
use std::collections::HashMap;

use battle_content::Content;
use battle_core::{DefinitionOracle, MonsterDefinition, StageDefinition, UnitDefinition};

/// Unit, monster, and stage definitions keyed by id.
///
/// When two definitions share an id the later one wins.
#[derive(Clone, Debug, Default)]
pub struct CatalogOracle {
    units: HashMap<String, UnitDefinition>,
    monsters: HashMap<String, MonsterDefinition>,
    stages: HashMap<String, StageDefinition>,
}

impl CatalogOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a loaded content directory.
    pub fn from_content(content: &Content) -> Self {
        let mut catalog = Self::new();
        content
            .units
            .iter()
            .cloned()
            .for_each(|unit| catalog.add_unit(unit));
        content
            .monsters
            .iter()
            .cloned()
            .for_each(|monster| catalog.add_monster(monster));
        content
            .stages
            .iter()
            .cloned()
            .for_each(|stage| catalog.add_stage(stage));
        catalog
    }

    pub fn add_unit(&mut self, definition: UnitDefinition) {
        self.units.insert(definition.id.clone(), definition);
    }

    pub fn add_monster(&mut self, definition: MonsterDefinition) {
        self.monsters.insert(definition.id().to_string(), definition);
    }

    pub fn add_stage(&mut self, definition: StageDefinition) {
        self.stages.insert(definition.id.clone(), definition);
    }

    /// Stage ids in ascending order.
    pub fn stage_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.stages.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl DefinitionOracle for CatalogOracle {
    fn unit(&self, id: &str) -> Option<&UnitDefinition> {
        self.units.get(id)
    }

    fn monster(&self, id: &str) -> Option<&MonsterDefinition> {
        self.monsters.get(id)
    }

    fn stage(&self, id: &str) -> Option<&StageDefinition> {
        self.stages.get(id)
    }
}
