//! Common utilities for targeting strategies.

use crate::state::Combatant;

/// Axis along which an attacker and a defender line up.
///
/// Ordered so that `Column` ranks ahead of `Row` when sorting candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Alignment {
    Column,
    Row,
}

/// Returns how `defender` lines up with `attacker`, preferring the column axis.
pub fn alignment(attacker: &Combatant, defender: &Combatant) -> Option<Alignment> {
    if attacker.column() == defender.column() {
        Some(Alignment::Column)
    } else if attacker.row() == defender.row() {
        Some(Alignment::Row)
    } else {
        None
    }
}

/// Distance measured along the shared axis.
pub fn axis_distance(attacker: &Combatant, defender: &Combatant, alignment: Alignment) -> u32 {
    match alignment {
        Alignment::Column => row_offset(attacker, defender),
        Alignment::Row => column_offset(attacker, defender),
    }
}

pub fn column_offset(attacker: &Combatant, defender: &Combatant) -> u32 {
    attacker.column().abs_diff(defender.column())
}

pub fn row_offset(attacker: &Combatant, defender: &Combatant) -> u32 {
    attacker.row().abs_diff(defender.row())
}

/// Iterates live defenders together with their roster index.
pub fn live_candidates(defenders: &[Combatant]) -> impl Iterator<Item = (usize, &Combatant)> {
    defenders
        .iter()
        .enumerate()
        .filter(|(_, defender)| defender.is_alive())
}
