//! Column-or-row targeting strategy.
//!
//! Attackers reach any live defender that shares their column or their row.

use crate::state::Combatant;
use crate::targeting::TargetingStrategy;
use crate::targeting::utils::{alignment, axis_distance, column_offset, live_candidates};

/// Target the closest defender lined up on either axis.
///
/// **Ranking** (smaller wins, applied in order):
/// 1. Distance along the shared axis
/// 2. Column alignment before row alignment
/// 3. Horizontal offset
/// 4. Column index, then row index
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnOrRowStrategy;

impl TargetingStrategy for ColumnOrRowStrategy {
    fn select_target(&self, attacker: &Combatant, defenders: &[Combatant]) -> Option<usize> {
        live_candidates(defenders)
            .filter_map(|(index, defender)| {
                let axis = alignment(attacker, defender)?;
                let rank = (
                    axis_distance(attacker, defender, axis),
                    axis,
                    column_offset(attacker, defender),
                    defender.column(),
                    defender.row(),
                );
                Some((rank, index))
            })
            .min_by_key(|(rank, _)| *rank)
            .map(|(_, index)| index)
    }

    fn name(&self) -> &'static str {
        "Column or Row"
    }

    fn description(&self) -> &'static str {
        "Targets the nearest defender sharing the attacker's column or row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GridPosition, Side};
    use crate::testing::combatant;

    fn select(attacker: &Combatant, defenders: &[Combatant]) -> Option<GridPosition> {
        ColumnOrRowStrategy
            .select_target(attacker, defenders)
            .map(|index| defenders[index].position())
    }

    #[test]
    fn smaller_axis_distance_wins_regardless_of_axis() {
        let attacker = combatant(1, Side::Player, 2, 0);
        let defenders = vec![
            combatant(10, Side::Enemy, 0, 0),
            combatant(11, Side::Enemy, 2, 1),
        ];

        assert_eq!(select(&attacker, &defenders), Some(GridPosition::new(2, 1)));
    }

    #[test]
    fn row_alignment_reaches_across_columns() {
        let attacker = combatant(1, Side::Player, 0, 1);
        let defenders = vec![
            combatant(10, Side::Enemy, 4, 1),
            combatant(11, Side::Enemy, 3, 0),
        ];

        assert_eq!(select(&attacker, &defenders), Some(GridPosition::new(4, 1)));
    }

    #[test]
    fn column_alignment_beats_row_alignment_at_equal_distance() {
        let attacker = combatant(1, Side::Player, 2, 0);
        let defenders = vec![
            combatant(10, Side::Enemy, 3, 0),
            combatant(11, Side::Enemy, 2, 1),
        ];

        assert_eq!(select(&attacker, &defenders), Some(GridPosition::new(2, 1)));
    }

    #[test]
    fn equal_row_distance_falls_back_to_lower_column() {
        let attacker = combatant(1, Side::Player, 2, 0);
        let defenders = vec![
            combatant(10, Side::Enemy, 4, 0),
            combatant(11, Side::Enemy, 1, 0),
            combatant(12, Side::Enemy, 3, 0),
        ];

        assert_eq!(select(&attacker, &defenders), Some(GridPosition::new(1, 0)));
    }

    #[test]
    fn ignores_dead_and_unaligned_defenders() {
        let attacker = combatant(1, Side::Player, 2, 0);
        let mut dead = combatant(10, Side::Enemy, 2, 1);
        dead.take_damage(u32::MAX);
        let defenders = vec![dead, combatant(11, Side::Enemy, 4, 1)];

        assert_eq!(select(&attacker, &defenders), None);
    }

    #[test]
    fn selection_is_deterministic() {
        let attacker = combatant(1, Side::Enemy, 1, 1);
        let defenders = vec![
            combatant(10, Side::Player, 1, 0),
            combatant(11, Side::Player, 0, 1),
            combatant(12, Side::Player, 2, 1),
            combatant(13, Side::Player, 3, 1),
        ];

        let first = ColumnOrRowStrategy.select_target(&attacker, &defenders);
        let second = ColumnOrRowStrategy.select_target(&attacker, &defenders);
        assert_eq!(first, second);
        assert_eq!(first.map(|i| defenders[i].id.0), Some(10));
    }
}
