pub mod combatant;
pub mod common;
pub mod roster;

pub use combatant::{Combatant, CombatantView};
pub use common::{CombatantId, GridPosition, HealthMeter, Millis, Side};
pub use roster::Roster;
