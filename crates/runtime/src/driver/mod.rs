//! Battle lifecycle state machine.
//!
//! [`SimulationDriver`] owns one stage's [`BattleState`] and moves it through
//! `Idle -> Running -> Resolved -> Idle`. It is synchronous and never touches
//! a channel; the simulation worker feeds it commands and frames and
//! publishes whatever it returns.

mod errors;

pub use errors::{DriverError, StartError};

use std::sync::Arc;

use battle_core::{
    BattleConfig, BattleEngine, BattleState, CombatantId, CombatantView, CoreError,
    DefinitionOracle, FrameReport, GridPosition, Millis, Outcome, PlacementError, Rewards, Side,
    StageDefinition, StageLoad,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Battle lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Placement is open and no time passes.
    Idle,
    /// Frames advance combat.
    Running,
    /// A side was eliminated. Only `reset` leaves this phase.
    Resolved { outcome: Outcome },
}

impl Phase {
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Phase::Resolved { outcome } => Some(outcome),
            _ => None,
        }
    }
}

/// What to do with one player cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementAction {
    /// Put the unit with this definition id on the cell.
    Place(String),
    /// Empty the cell.
    Clear,
}

/// A request to change the player layout while idle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementCommand {
    pub position: GridPosition,
    pub action: PlacementAction,
}

impl PlacementCommand {
    pub fn place(position: GridPosition, unit: impl Into<String>) -> Self {
        Self {
            position,
            action: PlacementAction::Place(unit.into()),
        }
    }

    pub fn clear(position: GridPosition) -> Self {
        Self {
            position,
            action: PlacementAction::Clear,
        }
    }
}

/// The effect an accepted [`PlacementCommand`] had on the player roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementChange {
    Placed {
        id: CombatantId,
        unit: String,
        position: GridPosition,
        /// Combatant that previously held the cell.
        replaced: Option<CombatantId>,
    },
    Cleared {
        position: GridPosition,
        /// `None` when the cell was already empty.
        removed: Option<CombatantId>,
    },
}

/// Read-only copy of everything a presentation layer shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub stage: String,
    pub phase: Phase,
    pub enemies: Vec<CombatantView>,
    pub players: Vec<CombatantView>,
}

/// Terminal result of a battle as reported to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub outcome: Outcome,
    pub victory: bool,
    /// Present on victory only.
    pub rewards: Option<Rewards>,
}

/// Drives one stage through its lifecycle.
pub struct SimulationDriver {
    config: BattleConfig,
    oracle: Arc<dyn DefinitionOracle>,
    stage: String,
    state: BattleState,
    phase: Phase,
    last_frame: Option<Millis>,
    rewards: Rewards,
}

impl SimulationDriver {
    /// Loads `stage` into a fresh battle in the `Idle` phase.
    ///
    /// Placements that cannot be applied are logged and skipped; the stage
    /// still loads.
    pub fn new(
        config: BattleConfig,
        oracle: Arc<dyn DefinitionOracle>,
        stage: &StageDefinition,
    ) -> Self {
        let StageLoad { state, skipped } =
            BattleState::from_stage(stage, oracle.as_ref(), &config);
        for error in &skipped {
            warn!(
                stage = %stage.id,
                severity = error.severity().as_str(),
                code = error.error_code(),
                "skipping stage placement: {}",
                error
            );
        }

        let rewards = Rewards::for_roster(&state.enemies, oracle.as_ref());
        info!(
            "stage {} ({}) loaded with {} enemies, {} skipped",
            stage.id,
            stage.name,
            state.enemies.len(),
            skipped.len()
        );

        Self {
            config,
            oracle,
            stage: stage.id.clone(),
            state,
            phase: Phase::Idle,
            last_frame: None,
            rewards,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running)
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn stage_id(&self) -> &str {
        &self.stage
    }

    /// Applies a placement command to the player side.
    ///
    /// The position is clamped to the board. Placing onto an occupied cell
    /// replaces its occupant.
    ///
    /// # Errors
    ///
    /// - [`DriverError::NotIdle`] outside the `Idle` phase
    /// - [`DriverError::Placement`] when the unit id is unknown
    pub fn place(&mut self, command: PlacementCommand) -> Result<PlacementChange, DriverError> {
        self.require_idle("place")?;
        let position = command
            .position
            .clamped(self.config.columns, self.config.rows);

        match command.action {
            PlacementAction::Clear => {
                let removed = self.state.players.remove_at(position).map(|c| c.id);
                debug!("cleared player cell {} ({:?})", position, removed);
                Ok(PlacementChange::Cleared { position, removed })
            }
            PlacementAction::Place(unit) => {
                let definition =
                    self.oracle
                        .unit(&unit)
                        .ok_or_else(|| PlacementError::UnknownDefinition {
                            side: Side::Player,
                            key: unit.clone(),
                        })?;

                let replaced = self.state.players.remove_at(position).map(|c| c.id);
                let id = self
                    .state
                    .spawn(Side::Player, definition, position, &self.config)?;
                debug!("placed {} as {} at {}", unit, id, position);

                Ok(PlacementChange::Placed {
                    id,
                    unit,
                    position,
                    replaced,
                })
            }
        }
    }

    /// `Idle -> Running`.
    ///
    /// # Errors
    ///
    /// - [`DriverError::NotIdle`] outside the `Idle` phase
    /// - [`StartError::NoLivePlayers`] when no live player unit is placed
    pub fn start(&mut self) -> Result<(), DriverError> {
        self.require_idle("start")?;
        if self.state.players.live_count() == 0 {
            return Err(StartError::NoLivePlayers.into());
        }

        self.phase = Phase::Running;
        self.last_frame = None;
        info!(
            "battle {} started: {} players vs {} enemies",
            self.stage,
            self.state.players.live_count(),
            self.state.enemies.live_count()
        );
        Ok(())
    }

    /// Advances combat to `timestamp`.
    ///
    /// Returns `None` unless running. The first frame after `start` only
    /// records the baseline; a timestamp earlier than the previous one counts
    /// as no time passing.
    pub fn on_frame(&mut self, timestamp: Millis) -> Option<FrameReport> {
        if !self.is_running() {
            return None;
        }

        let elapsed = match self.last_frame.replace(timestamp) {
            Some(previous) => timestamp.saturating_sub(previous),
            None => Millis::ZERO,
        };

        let strategy = self.config.targeting.strategy();
        let report = BattleEngine::new(&mut self.state, strategy).advance(elapsed);

        if let Some(outcome) = report.outcome {
            self.phase = Phase::Resolved { outcome };
            self.last_frame = None;
            info!("battle {} resolved: {}", self.stage, outcome);
        }
        Some(report)
    }

    /// Revives every combatant and returns to `Idle`.
    ///
    /// Composition and positions are untouched. Accepted while `Idle` as an
    /// idempotent revive.
    ///
    /// # Errors
    ///
    /// [`DriverError::NotIdle`] while running.
    pub fn reset(&mut self) -> Result<Vec<CombatantView>, DriverError> {
        if self.is_running() {
            return Err(DriverError::NotIdle {
                operation: "reset",
                phase: self.phase,
            });
        }

        self.state.revive_all();
        self.phase = Phase::Idle;
        self.last_frame = None;

        let mut revived = self.state.enemies.views();
        revived.extend(self.state.players.views());
        Ok(revived)
    }

    /// The terminal result, once resolved.
    pub fn resolution(&self) -> Option<Resolution> {
        let outcome = self.phase.outcome()?;
        Some(Resolution {
            outcome,
            victory: outcome.is_victory(),
            rewards: outcome.is_victory().then(|| self.rewards.clone()),
        })
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            stage: self.stage.clone(),
            phase: self.phase,
            enemies: self.state.enemies.views(),
            players: self.state.players.views(),
        }
    }

    fn require_idle(&self, operation: &'static str) -> Result<(), DriverError> {
        match self.phase {
            Phase::Idle => Ok(()),
            phase => Err(DriverError::NotIdle { operation, phase }),
        }
    }
}
