//! Column-only targeting strategy.
//!
//! The stricter lane rule: attackers only reach defenders in their own column.

use crate::state::Combatant;
use crate::targeting::TargetingStrategy;
use crate::targeting::utils::{live_candidates, row_offset};

/// Target the nearest live defender in the attacker's column.
///
/// Ties on row distance go to the lower row index.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnOnlyStrategy;

impl TargetingStrategy for ColumnOnlyStrategy {
    fn select_target(&self, attacker: &Combatant, defenders: &[Combatant]) -> Option<usize> {
        live_candidates(defenders)
            .filter(|(_, defender)| defender.column() == attacker.column())
            .min_by_key(|(_, defender)| (row_offset(attacker, defender), defender.row()))
            .map(|(index, _)| index)
    }

    fn name(&self) -> &'static str {
        "Column Only"
    }

    fn description(&self) -> &'static str {
        "Targets the nearest defender in the attacker's own column"
    }
}
