//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{CombatRecord, LifecycleEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Hits, idle swings and defeats
    Combat,
    /// Phase changes, placements, revives and the final result
    Lifecycle,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Combat(CombatRecord),
    Lifecycle(LifecycleEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Combat(_) => Topic::Combat,
            Event::Lifecycle(_) => Topic::Lifecycle,
        }
    }
}

/// One broadcast sender per topic.
struct Channels {
    combat: broadcast::Sender<Event>,
    lifecycle: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Combat => &self.combat,
            Topic::Lifecycle => &self.lifecycle,
        }
    }
}

/// Topic-based event bus
///
/// Channels are created up front for every topic and never change, so
/// publishing and subscribing need no lock.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let channels = Channels {
            combat: broadcast::channel(capacity).0,
            lifecycle: broadcast::channel(capacity).0,
        };

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic
    ///
    /// Best-effort: an event nobody listens to is dropped.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Phase;

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut lifecycle = bus.subscribe(Topic::Lifecycle);
        let mut combat = bus.subscribe(Topic::Combat);

        bus.publish(Event::Lifecycle(LifecycleEvent::PhaseChanged {
            from: Phase::Idle,
            to: Phase::Running,
        }));

        assert_eq!(lifecycle.recv().await.unwrap().topic(), Topic::Lifecycle);
        assert!(combat.try_recv().is_err());
    }

    #[tokio::test]
    async fn every_topic_has_a_live_channel() {
        let bus = EventBus::with_capacity(4);
        let mut receivers = bus.subscribe_multiple(&[Topic::Combat, Topic::Lifecycle]);

        bus.publish(Event::Combat(CombatRecord {
            at: battle_core::Millis(16),
            event: battle_core::CombatEvent::Idle {
                attacker: battle_core::CombatantId(1),
            },
        }));
        bus.publish(Event::Lifecycle(LifecycleEvent::Revived {
            combatants: Vec::new(),
        }));

        for topic in [Topic::Combat, Topic::Lifecycle] {
            let receiver = receivers.get_mut(&topic).unwrap();
            assert_eq!(receiver.recv().await.unwrap().topic(), topic);
        }
    }

    #[test]
    fn publishing_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(Event::Lifecycle(LifecycleEvent::Revived {
            combatants: Vec::new(),
        }));
    }
}
