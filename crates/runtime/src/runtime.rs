//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive a battle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use battle_core::{BattleConfig, DefinitionOracle};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::driver::SimulationDriver;
use crate::events::{Event, EventBus, Topic};
use crate::scheduler::{FrameSource, IntervalFrames};
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Period of the default [`IntervalFrames`] source, used when the builder
    /// is not given a frame source.
    pub frame_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            frame_interval: Duration::from_millis(16),
        }
    }
}

/// Main runtime that orchestrates one battle
///
/// Runtime owns the worker; [`RuntimeHandle`] provides a cloneable façade for
/// clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to events from one topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every handle clone is dropped, so clients must
    /// release theirs first.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: Option<Arc<dyn DefinitionOracle>>,
    stage: Option<String>,
    frames: Option<Box<dyn FrameSource>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: None,
            stage: None,
            frames: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required definition catalog
    pub fn catalog(mut self, catalog: impl DefinitionOracle + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Set the stage to load (required)
    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    /// Set the frame source (optional)
    ///
    /// Defaults to [`IntervalFrames`] at [`RuntimeConfig::frame_interval`].
    pub fn frames(mut self, frames: impl FrameSource + 'static) -> Self {
        self.frames = Some(Box::new(frames));
        self
    }

    /// Build the runtime and spawn its worker
    ///
    /// Must be called from within a tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        let catalog = self.catalog.ok_or(RuntimeError::MissingCatalog)?;
        let stage_id = self.stage.ok_or(RuntimeError::MissingStage)?;
        let stage = catalog
            .stage(&stage_id)
            .ok_or_else(|| RuntimeError::UnknownStage {
                stage: stage_id.clone(),
            })?
            .clone();

        let driver = SimulationDriver::new(self.config.battle.clone(), catalog, &stage);
        let frames: Box<dyn FrameSource> = match self.frames {
            Some(frames) => frames,
            None => Box::new(IntervalFrames::new(self.config.frame_interval)),
        };

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let sim_worker = SimulationWorker::new(driver, frames, command_rx, event_bus);
        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            sim_worker_handle,
        })
    }
}
