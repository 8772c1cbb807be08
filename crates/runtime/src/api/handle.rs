//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! arranging the player layout, starting and resetting the battle, or
//! streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::GridPosition;

use super::errors::{Result, RuntimeError};
use crate::driver::{BattleSnapshot, PlacementChange, PlacementCommand};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Apply a placement command to the player side.
    pub async fn place(&self, command: PlacementCommand) -> Result<PlacementChange> {
        self.request(|reply| Command::Place { command, reply })
            .await?
    }

    /// Put `unit` on the player cell at `position`.
    pub async fn place_unit(
        &self,
        position: GridPosition,
        unit: impl Into<String>,
    ) -> Result<PlacementChange> {
        self.place(PlacementCommand::place(position, unit)).await
    }

    /// Empty the player cell at `position`.
    pub async fn clear(&self, position: GridPosition) -> Result<PlacementChange> {
        self.place(PlacementCommand::clear(position)).await
    }

    /// Start the battle. Frames are consumed from here until it resolves.
    pub async fn start(&self) -> Result<()> {
        self.request(|reply| Command::Start { reply }).await?
    }

    /// Revive every combatant and return to the placement phase.
    pub async fn reset(&self) -> Result<()> {
        self.request(|reply| Command::Reset { reply }).await?
    }

    /// Query the current battle (read-only snapshot)
    pub async fn snapshot(&self) -> Result<BattleSnapshot> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Combat` - hits, idle swings and defeats
    /// - `Topic::Lifecycle` - phase changes, placements, revives and the result
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use battle_runtime::{Event, LifecycleEvent, Topic};
    ///
    /// let mut lifecycle = handle.subscribe(Topic::Lifecycle);
    /// while let Ok(Event::Lifecycle(event)) = lifecycle.recv().await {
    ///     if let LifecycleEvent::Resolved(resolution) = event {
    ///         println!("victory: {}", resolution.victory);
    ///     }
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
