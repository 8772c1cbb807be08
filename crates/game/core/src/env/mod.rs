//! Traits describing read-only battle content.
//!
//! Oracles expose unit, monster, and stage definitions loaded by an external
//! collaborator. The core treats them as immutable lookup tables keyed by
//! identifier and never caches their contents in [`crate::state::BattleState`]
//! beyond the stats copied into each spawned combatant.
mod definitions;
mod stage;

pub use definitions::{MonsterDefinition, UnitDefinition};
pub use stage::{Placement, StageDefinition};

/// Lookup access to the definition catalog.
pub trait DefinitionOracle: Send + Sync {
    /// Player unit definition by identifier.
    fn unit(&self, id: &str) -> Option<&UnitDefinition>;

    /// Monster definition by identifier.
    fn monster(&self, id: &str) -> Option<&MonsterDefinition>;

    /// Stage definition by identifier.
    fn stage(&self, id: &str) -> Option<&StageDefinition>;
}
