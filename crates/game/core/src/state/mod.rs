//! Authoritative battle state representation.
//!
//! [`BattleState`] owns both rosters and the combatant id allocator. Runtime
//! layers hold one value per battle and hand it to the engine by reference;
//! nothing in this crate keeps state of its own.
pub mod error;
pub mod types;

pub use error::PlacementError;
pub use types::{
    Combatant, CombatantId, CombatantView, GridPosition, HealthMeter, Millis, Roster, Side,
};

use crate::config::BattleConfig;
use crate::env::{DefinitionOracle, StageDefinition, UnitDefinition};

/// Canonical snapshot of one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// Sequential combatant id allocator (monotonically increasing, never reused).
    next_id: u32,
    pub enemies: Roster,
    pub players: Roster,
}

impl BattleState {
    /// Creates a state with two empty rosters.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            enemies: Roster::new(Side::Enemy),
            players: Roster::new(Side::Player),
        }
    }

    /// Builds the enemy roster for `stage`.
    ///
    /// Placements that reference unknown monsters or collide with an earlier
    /// placement are skipped and reported in [`StageLoad::skipped`].
    pub fn from_stage<O>(stage: &StageDefinition, oracle: &O, config: &BattleConfig) -> StageLoad
    where
        O: DefinitionOracle + ?Sized,
    {
        let mut state = Self::new();
        let mut skipped = Vec::new();

        for placement in &stage.placements {
            let Some(monster) = oracle.monster(&placement.monster) else {
                skipped.push(PlacementError::UnknownDefinition {
                    side: Side::Enemy,
                    key: placement.monster.clone(),
                });
                continue;
            };
            if let Err(error) =
                state.spawn(Side::Enemy, &monster.unit, placement.position, config)
            {
                skipped.push(error);
            }
        }

        StageLoad { state, skipped }
    }

    /// Allocates the next combatant id.
    pub fn allocate_id(&mut self) -> CombatantId {
        let id = CombatantId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn roster(&self, side: Side) -> &Roster {
        match side {
            Side::Enemy => &self.enemies,
            Side::Player => &self.players,
        }
    }

    pub fn roster_mut(&mut self, side: Side) -> &mut Roster {
        match side {
            Side::Enemy => &mut self.enemies,
            Side::Player => &mut self.players,
        }
    }

    /// Spawns a combatant on `side` and returns its id.
    ///
    /// The position is clamped to the board before the occupancy check, and an
    /// id is only consumed when the placement succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Occupied`] if the clamped cell is taken.
    pub fn spawn(
        &mut self,
        side: Side,
        definition: &UnitDefinition,
        position: GridPosition,
        config: &BattleConfig,
    ) -> Result<CombatantId, PlacementError> {
        let position = position.clamped(config.columns, config.rows);
        if let Some(occupant) = self.roster(side).at(position) {
            return Err(PlacementError::Occupied {
                side,
                position,
                occupant: occupant.id,
            });
        }

        let id = self.allocate_id();
        let combatant = Combatant::spawn(id, side, definition, position, config);
        self.roster_mut(side).insert(combatant)
    }

    /// Finds a combatant on either side.
    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.enemies.get(id).or_else(|| self.players.get(id))
    }

    /// Revives every combatant on both sides without touching composition.
    pub fn revive_all(&mut self) {
        self.enemies.revive_all();
        self.players.revive_all();
    }
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of building a battle from a stage definition.
#[derive(Clone, Debug)]
pub struct StageLoad {
    pub state: BattleState,
    /// Placements that could not be applied, in stage order.
    pub skipped: Vec<PlacementError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MonsterDefinition, Placement};
    use std::collections::HashMap;

    struct TestOracle {
        monsters: HashMap<String, MonsterDefinition>,
    }

    impl DefinitionOracle for TestOracle {
        fn unit(&self, _id: &str) -> Option<&UnitDefinition> {
            None
        }

        fn monster(&self, id: &str) -> Option<&MonsterDefinition> {
            self.monsters.get(id)
        }

        fn stage(&self, _id: &str) -> Option<&StageDefinition> {
            None
        }
    }

    fn oracle() -> TestOracle {
        let goblin = MonsterDefinition {
            unit: UnitDefinition {
                id: "goblin".into(),
                name: "Goblin".into(),
                attack: 4,
                attack_interval_ms: 900,
                health: 15,
                armor: 1,
            },
            gold: 5,
            drop: None,
        };
        TestOracle {
            monsters: HashMap::from([("goblin".to_string(), goblin)]),
        }
    }

    fn stage(placements: Vec<Placement>) -> StageDefinition {
        StageDefinition {
            id: "1".into(),
            name: "Test".into(),
            placements,
        }
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut state = BattleState::new();
        let a = state.allocate_id();
        let b = state.allocate_id();
        assert!(b > a);
    }

    #[test]
    fn from_stage_skips_unknown_monsters_and_keeps_the_rest() {
        let stage = stage(vec![
            Placement::new("goblin", GridPosition::new(0, 0)),
            Placement::new("dragon", GridPosition::new(1, 0)),
            Placement::new("goblin", GridPosition::new(2, 1)),
        ]);

        let load = BattleState::from_stage(&stage, &oracle(), &BattleConfig::default());

        assert_eq!(load.state.enemies.len(), 2);
        assert!(load.state.players.is_empty());
        assert_eq!(
            load.skipped,
            vec![PlacementError::UnknownDefinition {
                side: Side::Enemy,
                key: "dragon".into()
            }]
        );
    }

    #[test]
    fn from_stage_skips_duplicate_cells() {
        let stage = stage(vec![
            Placement::new("goblin", GridPosition::new(3, 1)),
            Placement::new("goblin", GridPosition::new(3, 1)),
        ]);

        let load = BattleState::from_stage(&stage, &oracle(), &BattleConfig::default());

        assert_eq!(load.state.enemies.len(), 1);
        assert!(matches!(
            load.skipped.as_slice(),
            [PlacementError::Occupied { .. }]
        ));
    }

    #[test]
    fn spawn_clamps_before_checking_occupancy() {
        let config = BattleConfig::default();
        let goblin = oracle().monsters["goblin"].unit.clone();
        let mut state = BattleState::new();

        state
            .spawn(Side::Player, &goblin, GridPosition::new(4, 1), &config)
            .unwrap();
        let result = state.spawn(Side::Player, &goblin, GridPosition::new(40, 9), &config);

        assert!(matches!(result, Err(PlacementError::Occupied { .. })));
    }
}
