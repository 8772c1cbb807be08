//! Simulation worker that owns the authoritative battle.
//!
//! Receives commands from [`crate::RuntimeHandle`], advances the
//! [`SimulationDriver`] on frames from a [`FrameSource`], and publishes the
//! results to the [`EventBus`].

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use battle_core::{CoreError, Millis};

use crate::api::{Result, RuntimeError};
use crate::driver::{BattleSnapshot, Phase, PlacementChange, PlacementCommand, SimulationDriver};
use crate::events::{CombatRecord, Event, EventBus, LifecycleEvent};
use crate::scheduler::FrameSource;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Change the player layout (idle only).
    Place {
        command: PlacementCommand,
        reply: oneshot::Sender<Result<PlacementChange>>,
    },
    /// Leave `Idle` and start consuming frames.
    Start { reply: oneshot::Sender<Result<()>> },
    /// Revive everyone and return to `Idle`.
    Reset { reply: oneshot::Sender<Result<()>> },
    /// Query the current battle (read-only).
    Snapshot {
        reply: oneshot::Sender<BattleSnapshot>,
    },
}

/// Background task that processes battle commands and frames.
///
/// Commands and frames are multiplexed on one task, so a frame always runs to
/// completion before the next command is observed.
pub struct SimulationWorker {
    driver: SimulationDriver,
    frames: Box<dyn FrameSource>,
    frames_exhausted: bool,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        driver: SimulationDriver,
        frames: Box<dyn FrameSource>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            driver,
            frames,
            frames_exhausted: false,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Returns once every command sender is dropped.
    pub async fn run(mut self) {
        loop {
            let wants_frames = self.driver.is_running() && !self.frames_exhausted;

            tokio::select! {
                biased;

                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                frame = self.frames.next_frame(), if wants_frames => match frame {
                    Some(timestamp) => self.handle_frame(timestamp),
                    None => {
                        warn!("frame source exhausted while the battle is running");
                        self.frames_exhausted = true;
                    }
                },
            }
        }

        debug!("simulation worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Place { command, reply } => {
                let result = self.handle_place(command);
                if reply.send(result).is_err() {
                    debug!("Place reply channel closed (caller dropped)");
                }
            }
            Command::Start { reply } => {
                let result = self.handle_start();
                if reply.send(result).is_err() {
                    debug!("Start reply channel closed (caller dropped)");
                }
            }
            Command::Reset { reply } => {
                let result = self.handle_reset();
                if reply.send(result).is_err() {
                    debug!("Reset reply channel closed (caller dropped)");
                }
            }
            Command::Snapshot { reply } => {
                if reply.send(self.driver.snapshot()).is_err() {
                    debug!("Snapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_place(&mut self, command: PlacementCommand) -> Result<PlacementChange> {
        let change = self.driver.place(command).map_err(|error| {
            warn!(
                severity = error.severity().as_str(),
                code = error.error_code(),
                "placement rejected: {}",
                error
            );
            RuntimeError::from(error)
        })?;

        self.publish_lifecycle(LifecycleEvent::Placement(change.clone()));
        Ok(change)
    }

    fn handle_start(&mut self) -> Result<()> {
        let from = self.driver.phase();
        self.driver.start().map_err(|error| {
            warn!(
                severity = error.severity().as_str(),
                code = error.error_code(),
                "start rejected: {}",
                error
            );
            RuntimeError::from(error)
        })?;

        self.frames_exhausted = false;
        self.publish_phase_change(from);
        Ok(())
    }

    fn handle_reset(&mut self) -> Result<()> {
        let from = self.driver.phase();
        let combatants = self.driver.reset().map_err(|error| {
            warn!(
                severity = error.severity().as_str(),
                code = error.error_code(),
                "reset rejected: {}",
                error
            );
            RuntimeError::from(error)
        })?;

        info!("battle {} reset", self.driver.stage_id());
        self.publish_lifecycle(LifecycleEvent::Revived { combatants });
        self.publish_phase_change(from);
        Ok(())
    }

    fn handle_frame(&mut self, timestamp: Millis) {
        let from = self.driver.phase();
        let Some(report) = self.driver.on_frame(timestamp) else {
            return;
        };

        debug!(
            "frame at {} advanced {} with {} events",
            timestamp,
            report.elapsed,
            report.events.len()
        );
        for event in report.events {
            self.event_bus.publish(Event::Combat(CombatRecord {
                at: timestamp,
                event,
            }));
        }

        if let Some(resolution) = self.driver.resolution() {
            self.publish_phase_change(from);
            self.publish_lifecycle(LifecycleEvent::Resolved(resolution));
        }
    }

    fn publish_phase_change(&self, from: Phase) {
        let to = self.driver.phase();
        if from != to {
            self.publish_lifecycle(LifecycleEvent::PhaseChanged { from, to });
        }
    }

    fn publish_lifecycle(&self, event: LifecycleEvent) {
        self.event_bus.publish(Event::Lifecycle(event));
    }
}
