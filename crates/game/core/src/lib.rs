//! Deterministic combat rules for the grid auto-battler.
//!
//! `battle-core` defines the canonical rules (combatants, targeting, the
//! per-frame tick, outcome detection) and exposes pure APIs reused by the
//! content loaders, the runtime, and tests. All frame-by-frame mutation flows
//! through [`engine::BattleEngine`]; the tick path performs no fallible
//! operation.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod outcome;
pub mod state;
pub mod targeting;

#[cfg(test)]
mod testing;

pub use combat::{CombatEvent, CombatObserver, MIN_DAMAGE, calculate_damage, tick_roster};
pub use config::BattleConfig;
pub use engine::{BattleEngine, FrameReport};
pub use env::{DefinitionOracle, MonsterDefinition, Placement, StageDefinition, UnitDefinition};
pub use error::{CoreError, ErrorSeverity};
pub use outcome::{Outcome, Rewards, evaluate, is_defeat, is_victory};
pub use state::{
    BattleState, Combatant, CombatantId, CombatantView, GridPosition, HealthMeter, Millis,
    PlacementError, Roster, Side, StageLoad,
};
pub use targeting::{
    ColumnOnlyStrategy, ColumnOrRowStrategy, TargetingPolicy, TargetingStrategy, select_target,
};
