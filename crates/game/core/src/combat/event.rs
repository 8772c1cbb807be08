//! State-change records emitted by the combat tick.
//!
//! The tick never touches a presentation surface. It reports what changed
//! through a [`CombatObserver`], and the runtime forwards those records to
//! whoever renders health bars.

use crate::state::{CombatantId, Side};

/// One observable change produced while ticking a roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    /// An attack landed; carries the target's health after the hit.
    Hit {
        attacker: CombatantId,
        target: CombatantId,
        target_side: Side,
        damage: u32,
        health: u32,
        max_health: u32,
        alive: bool,
    },

    /// A hit brought the target to zero health.
    Defeated {
        target: CombatantId,
        side: Side,
        by: CombatantId,
    },

    /// An attacker's timer elapsed with nothing in reach; the swing was spent.
    Idle { attacker: CombatantId },
}

/// Receives combat records as they happen.
pub trait CombatObserver {
    fn observe(&mut self, event: CombatEvent);
}

impl CombatObserver for Vec<CombatEvent> {
    fn observe(&mut self, event: CombatEvent) {
        self.push(event);
    }
}

/// Discards every record.
impl CombatObserver for () {
    fn observe(&mut self, _event: CombatEvent) {}
}
