//! Combatant instances and their mutable combat state.

use crate::config::BattleConfig;
use crate::env::UnitDefinition;

use super::common::{CombatantId, GridPosition, HealthMeter, Millis, Side};

/// One unit or monster placed on the grid.
///
/// Stats are fixed at spawn. Health, liveness, and the attack timer change
/// only through the combat tick and through [`Combatant::revive`]; the
/// placement never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub side: Side,
    /// Definition identifier this combatant was spawned from.
    pub key: String,
    pub name: String,
    pub attack: u32,
    pub attack_interval: Millis,
    pub armor: u32,
    position: GridPosition,
    health: HealthMeter,
    alive: bool,
    since_last_attack: Millis,
}

impl Combatant {
    /// Spawns a combatant from a definition at `position`.
    ///
    /// The position is clamped to the configured board, the attack interval is
    /// raised to the configured floor, and maximum health to at least 1.
    pub fn spawn(
        id: CombatantId,
        side: Side,
        definition: &UnitDefinition,
        position: GridPosition,
        config: &BattleConfig,
    ) -> Self {
        let interval = Millis(definition.attack_interval_ms).max(config.min_attack_interval());

        Self {
            id,
            side,
            key: definition.id.clone(),
            name: definition.name.clone(),
            attack: definition.attack,
            attack_interval: interval,
            armor: definition.armor,
            position: position.clamped(config.columns, config.rows),
            health: HealthMeter::full(definition.health),
            alive: true,
            since_last_attack: Millis::ZERO,
        }
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn row(&self) -> u32 {
        self.position.row
    }

    pub fn health(&self) -> u32 {
        self.health.current
    }

    pub fn max_health(&self) -> u32 {
        self.health.maximum
    }

    pub fn health_meter(&self) -> HealthMeter {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Time accumulated since this combatant last swung.
    pub fn since_last_attack(&self) -> Millis {
        self.since_last_attack
    }

    /// Returns true once the accumulated time covers the attack interval.
    pub fn is_ready(&self) -> bool {
        self.since_last_attack >= self.attack_interval
    }

    /// Restores spawn values: full health, alive, timer at zero.
    pub fn revive(&mut self) {
        self.health.current = self.health.maximum;
        self.alive = true;
        self.since_last_attack = Millis::ZERO;
    }

    /// Snapshot of the fields a presentation layer renders.
    pub fn view(&self) -> CombatantView {
        CombatantView {
            id: self.id,
            side: self.side,
            name: self.name.clone(),
            position: self.position,
            health: self.health.current,
            max_health: self.health.maximum,
            alive: self.alive,
        }
    }

    pub(crate) fn accumulate(&mut self, elapsed: Millis) {
        self.since_last_attack = self.since_last_attack.saturating_add(elapsed);
    }

    pub(crate) fn reset_attack_timer(&mut self) {
        self.since_last_attack = Millis::ZERO;
    }

    /// Applies damage, flooring health at zero. Returns true if this hit was lethal.
    pub(crate) fn take_damage(&mut self, damage: u32) -> bool {
        if !self.alive {
            return false;
        }
        self.health.current = crate::combat::apply_damage(self.health.current, damage);
        if self.health.is_empty() {
            self.alive = false;
            return true;
        }
        false
    }
}

/// Read-only view of a combatant for rendering health indicators.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantView {
    pub id: CombatantId,
    pub side: Side,
    pub name: String,
    pub position: GridPosition,
    pub health: u32,
    pub max_health: u32,
    pub alive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(interval_ms: u64, health: u32) -> UnitDefinition {
        UnitDefinition {
            id: "knight".into(),
            name: "Knight".into(),
            attack: 10,
            attack_interval_ms: interval_ms,
            health,
            armor: 2,
        }
    }

    #[test]
    fn spawns_at_full_health_with_idle_timer() {
        let config = BattleConfig::default();
        let unit = Combatant::spawn(
            CombatantId(1),
            Side::Player,
            &definition(1000, 40),
            GridPosition::new(1, 1),
            &config,
        );

        assert_eq!(unit.health(), 40);
        assert_eq!(unit.max_health(), 40);
        assert!(unit.is_alive());
        assert_eq!(unit.since_last_attack(), Millis::ZERO);
        assert_eq!(unit.attack_interval, Millis(1000));
    }

    #[test]
    fn spawn_clamps_interval_and_position() {
        let config = BattleConfig::default();
        let unit = Combatant::spawn(
            CombatantId(1),
            Side::Enemy,
            &definition(0, 40),
            GridPosition::new(12, 5),
            &config,
        );

        assert_eq!(unit.attack_interval, config.min_attack_interval());
        assert_eq!(unit.position(), GridPosition::new(4, 1));
    }

    #[test]
    fn zero_interval_with_zero_floor_is_not_ready_without_elapsed_time() {
        let config = BattleConfig {
            min_attack_interval_ms: 0,
            ..BattleConfig::default()
        };
        let mut unit = Combatant::spawn(
            CombatantId(1),
            Side::Player,
            &definition(0, 40),
            GridPosition::ORIGIN,
            &config,
        );

        assert_eq!(unit.attack_interval, Millis(1));
        unit.accumulate(Millis::ZERO);
        assert!(!unit.is_ready());
        unit.accumulate(Millis(1));
        assert!(unit.is_ready());
    }

    #[test]
    fn lethal_damage_clears_liveness_exactly_once() {
        let config = BattleConfig::default();
        let mut unit = Combatant::spawn(
            CombatantId(1),
            Side::Enemy,
            &definition(1000, 5),
            GridPosition::ORIGIN,
            &config,
        );

        assert!(!unit.take_damage(3));
        assert_eq!(unit.health(), 2);
        assert!(unit.take_damage(9));
        assert_eq!(unit.health(), 0);
        assert!(!unit.is_alive());
        assert!(!unit.take_damage(1));
    }

    #[test]
    fn revive_restores_spawn_values() {
        let config = BattleConfig::default();
        let mut unit = Combatant::spawn(
            CombatantId(1),
            Side::Player,
            &definition(1000, 5),
            GridPosition::ORIGIN,
            &config,
        );
        unit.accumulate(Millis(700));
        unit.take_damage(5);

        unit.revive();

        assert_eq!(unit.health(), 5);
        assert!(unit.is_alive());
        assert_eq!(unit.since_last_attack(), Millis::ZERO);
    }
}
