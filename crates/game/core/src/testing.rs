//! Fixtures shared by unit tests.

use crate::config::BattleConfig;
use crate::env::UnitDefinition;
use crate::state::{Combatant, CombatantId, GridPosition, Side};

pub(crate) fn definition(attack: u32, interval_ms: u64, health: u32, armor: u32) -> UnitDefinition {
    UnitDefinition {
        id: "fixture".into(),
        name: "Fixture".into(),
        attack,
        attack_interval_ms: interval_ms,
        health,
        armor,
    }
}

pub(crate) fn fighter(
    id: u32,
    side: Side,
    column: u32,
    row: u32,
    definition: UnitDefinition,
) -> Combatant {
    Combatant::spawn(
        CombatantId(id),
        side,
        &definition,
        GridPosition::new(column, row),
        &BattleConfig::default(),
    )
}

pub(crate) fn combatant(id: u32, side: Side, column: u32, row: u32) -> Combatant {
    fighter(id, side, column, row, definition(5, 1000, 20, 0))
}
