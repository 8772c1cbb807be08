//! Event types for different topics.

use battle_core::{CombatEvent, CombatantView, Millis};
use serde::{Deserialize, Serialize};

use crate::driver::{Phase, PlacementChange, Resolution};

/// One combat change, stamped with the frame that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRecord {
    /// Frame timestamp as delivered by the frame source.
    pub at: Millis,
    pub event: CombatEvent,
}

/// Events related to the battle lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    PhaseChanged { from: Phase, to: Phase },

    /// The player layout changed while idle.
    Placement(PlacementChange),

    /// A reset restored these combatants to full health.
    Revived { combatants: Vec<CombatantView> },

    /// The battle reached a terminal outcome.
    Resolved(Resolution),
}
