//! Victory and defeat detection.
//!
//! Predicates here are stateless and read only liveness; nothing caches their
//! result between frames.

use crate::env::DefinitionOracle;
use crate::state::Roster;

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    pub const fn is_victory(self) -> bool {
        matches!(self, Outcome::Victory)
    }
}

/// True when the enemy roster has members and none of them is alive.
pub fn is_victory(enemies: &Roster) -> bool {
    is_wiped_out(enemies)
}

/// True when the player roster has members and none of them is alive.
pub fn is_defeat(players: &Roster) -> bool {
    is_wiped_out(players)
}

/// Checks both rosters, victory first.
///
/// A frame that eliminates both sides resolves as [`Outcome::Victory`].
pub fn evaluate(enemies: &Roster, players: &Roster) -> Option<Outcome> {
    if is_victory(enemies) {
        Some(Outcome::Victory)
    } else if is_defeat(players) {
        Some(Outcome::Defeat)
    } else {
        None
    }
}

// An empty roster is never wiped out: no side wins before the other has units.
fn is_wiped_out(roster: &Roster) -> bool {
    !roster.is_empty() && roster.iter().all(|member| !member.is_alive())
}

/// Loot granted for clearing a stage.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rewards {
    pub gold: u64,
    /// Item identifiers, in stage placement order.
    pub drops: Vec<String>,
}

impl Rewards {
    /// Totals gold and drops over the monsters that make up `enemies`.
    ///
    /// Only combatants actually spawned count, so placements skipped while
    /// loading the stage contribute nothing.
    pub fn for_roster<O>(enemies: &Roster, oracle: &O) -> Self
    where
        O: DefinitionOracle + ?Sized,
    {
        enemies
            .iter()
            .filter_map(|enemy| oracle.monster(&enemy.key))
            .fold(Rewards::default(), |mut rewards, monster| {
                rewards.gold += u64::from(monster.gold);
                if let Some(drop) = &monster.drop {
                    rewards.drops.push(drop.clone());
                }
                rewards
            })
    }
}
