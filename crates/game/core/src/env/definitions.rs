/// Stats shared by player units and monsters.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitDefinition {
    pub id: String,
    pub name: String,
    pub attack: u32,
    /// Milliseconds between two attacks, before the configured floor applies.
    pub attack_interval_ms: u64,
    pub health: u32,
    pub armor: u32,
}

/// Monster definition: unit stats plus what defeating it yields.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterDefinition {
    pub unit: UnitDefinition,
    pub gold: u32,
    /// Item identifier dropped on defeat.
    pub drop: Option<String>,
}

impl MonsterDefinition {
    pub fn id(&self) -> &str {
        &self.unit.id
    }
}
