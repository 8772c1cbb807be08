//! Transition guard failures for [`super::SimulationDriver`].

use battle_core::{CoreError, ErrorSeverity, PlacementError};
use thiserror::Error;

use super::Phase;

/// Why a battle could not leave `Idle`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("no live player combatant is placed")]
    NoLivePlayers,
}

impl CoreError for StartError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Precondition
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoLivePlayers => "START_NO_LIVE_PLAYERS",
        }
    }
}

/// Rejected driver operations. The driver state is unchanged in every case.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error("cannot {operation} while the battle is {phase}")]
    NotIdle {
        operation: &'static str,
        phase: Phase,
    },

    #[error(transparent)]
    Start(#[from] StartError),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

impl CoreError for DriverError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotIdle { .. } => ErrorSeverity::Precondition,
            Self::Start(error) => error.severity(),
            Self::Placement(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotIdle { .. } => "DRIVER_NOT_IDLE",
            Self::Start(error) => error.error_code(),
            Self::Placement(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::Side;

    #[test]
    fn severity_labels_follow_the_wrapped_error() {
        let not_idle = DriverError::NotIdle {
            operation: "place",
            phase: Phase::Running,
        };
        let unknown = DriverError::from(PlacementError::UnknownDefinition {
            side: Side::Player,
            key: "ghost".into(),
        });
        let start = DriverError::from(StartError::NoLivePlayers);

        assert_eq!(not_idle.severity().as_str(), "precondition");
        assert_eq!(unknown.severity().as_str(), "configuration");
        assert_eq!(start.severity().as_str(), "precondition");
        assert_eq!(start.error_code(), "START_NO_LIVE_PLAYERS");
    }
}
