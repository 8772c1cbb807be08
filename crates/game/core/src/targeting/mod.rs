//! Target selection for attackers.
//!
//! Targeting is a pluggable [`TargetingStrategy`]. Two rules ship with the
//! crate and are chosen through [`TargetingPolicy`] in the battle config:
//! - [`ColumnOrRowStrategy`]: reach along either axis, nearest first
//! - [`ColumnOnlyStrategy`]: reach only along the attacker's column

pub mod strategies;
pub mod strategy;
pub mod utils;

pub use strategies::{ColumnOnlyStrategy, ColumnOrRowStrategy};
pub use strategy::TargetingStrategy;
pub use utils::Alignment;

use crate::state::{Combatant, Roster};

/// Configuration-selectable targeting rule.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetingPolicy {
    #[default]
    ColumnOrRow,
    ColumnOnly,
}

impl TargetingPolicy {
    /// Returns the strategy implementing this policy.
    pub fn strategy(self) -> &'static dyn TargetingStrategy {
        match self {
            TargetingPolicy::ColumnOrRow => &ColumnOrRowStrategy,
            TargetingPolicy::ColumnOnly => &ColumnOnlyStrategy,
        }
    }
}

impl TargetingStrategy for TargetingPolicy {
    fn select_target(&self, attacker: &Combatant, defenders: &[Combatant]) -> Option<usize> {
        self.strategy().select_target(attacker, defenders)
    }

    fn name(&self) -> &'static str {
        self.strategy().name()
    }

    fn description(&self) -> &'static str {
        self.strategy().description()
    }
}

/// Resolves `attacker`'s target in `defenders` and returns the combatant.
pub fn select_target<'a, S>(
    strategy: &S,
    attacker: &Combatant,
    defenders: &'a Roster,
) -> Option<&'a Combatant>
where
    S: TargetingStrategy + ?Sized,
{
    let index = strategy.select_target(attacker, defenders.as_slice())?;
    defenders.as_slice().get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GridPosition, Side};
    use crate::testing::combatant;
    use strum::IntoEnumIterator;

    #[test]
    fn policies_parse_from_config_strings() {
        assert_eq!(
            "column_only".parse::<TargetingPolicy>().ok(),
            Some(TargetingPolicy::ColumnOnly)
        );
        assert_eq!(TargetingPolicy::ColumnOrRow.to_string(), "column_or_row");
        assert!("diagonal".parse::<TargetingPolicy>().is_err());
    }

    #[test]
    fn policies_disagree_on_row_only_targets() {
        let attacker = combatant(1, Side::Player, 0, 0);
        let mut defenders = Roster::new(Side::Enemy);
        defenders.insert(combatant(10, Side::Enemy, 3, 0)).unwrap();

        let reach = select_target(&TargetingPolicy::ColumnOrRow, &attacker, &defenders);
        let lane = select_target(&TargetingPolicy::ColumnOnly, &attacker, &defenders);

        assert_eq!(reach.map(|c| c.position()), Some(GridPosition::new(3, 0)));
        assert!(lane.is_none());
    }

    #[test]
    fn every_policy_has_a_name() {
        for policy in TargetingPolicy::iter() {
            assert!(!policy.name().is_empty());
        }
    }
}
