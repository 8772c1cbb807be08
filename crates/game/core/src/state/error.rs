//! Placement errors.
//!
//! Raised while building rosters from stage data or player commands. Stage
//! loading treats every variant as skippable.

use crate::error::{CoreError, ErrorSeverity};
use crate::state::{CombatantId, GridPosition, Side};

/// Errors that occur while placing a combatant on the board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementError {
    /// Placement references a definition that is not in the catalog.
    #[error("unknown {side} definition '{key}'")]
    UnknownDefinition { side: Side, key: String },

    /// The target cell already holds a combatant.
    #[error("cell {position} on the {side} side is already occupied by {occupant}")]
    Occupied {
        side: Side,
        position: GridPosition,
        occupant: CombatantId,
    },

    /// A combatant was handed to the opposing side's roster.
    #[error("combatant {id} belongs to the {found} side but the roster holds {expected}")]
    WrongSide {
        id: CombatantId,
        expected: Side,
        found: Side,
    },
}

impl CoreError for PlacementError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownDefinition { .. } | Self::Occupied { .. } => ErrorSeverity::Configuration,
            Self::WrongSide { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownDefinition { .. } => "PLACEMENT_UNKNOWN_DEFINITION",
            Self::Occupied { .. } => "PLACEMENT_OCCUPIED",
            Self::WrongSide { .. } => "PLACEMENT_WRONG_SIDE",
        }
    }
}
