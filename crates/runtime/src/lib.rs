//! Runtime orchestration for the grid auto-battler.
//!
//! This crate wires together the battle lifecycle driver, frame scheduling,
//! content-backed oracles, and the simulation worker into a cohesive runtime
//! API. Consumers embed [`Runtime`] to run a stage, subscribe to events, and
//! arrange the player side through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`driver`] is the synchronous `Idle -> Running -> Resolved` state machine
//! - [`scheduler`] supplies frame timestamps
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`oracle`] adapts loaded content to the core's lookup trait
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod driver;
pub mod events;
pub mod oracle;
pub mod runtime;
pub mod scheduler;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use driver::{
    BattleSnapshot, DriverError, Phase, PlacementAction, PlacementChange, PlacementCommand,
    Resolution, SimulationDriver, StartError,
};
pub use events::{CombatRecord, Event, EventBus, LifecycleEvent, Topic};
pub use oracle::CatalogOracle;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use scheduler::{FrameSource, IntervalFrames, ScriptedFrames};
