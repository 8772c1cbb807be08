//! Unified error types surfaced by the runtime API.
//!
//! Wraps driver rejections and worker coordination failures so clients can
//! bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use battle_core::{CoreError, ErrorSeverity};

use crate::driver::DriverError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("stage '{stage}' is not in the catalog")]
    UnknownStage { stage: String },

    #[error("runtime requires a definition catalog before building")]
    MissingCatalog,

    #[error("runtime requires a stage id before building")]
    MissingStage,

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl RuntimeError {
    /// The driver rejection behind this error, if any.
    pub fn as_driver(&self) -> Option<&DriverError> {
        match self {
            RuntimeError::Driver(error) => Some(error),
            _ => None,
        }
    }
}

impl CoreError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Driver(error) => error.severity(),
            Self::UnknownStage { .. } | Self::MissingCatalog | Self::MissingStage => {
                ErrorSeverity::Configuration
            }
            Self::CommandChannelClosed | Self::ReplyChannelClosed(_) | Self::WorkerJoin(_) => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Driver(error) => error.error_code(),
            Self::UnknownStage { .. } => "RUNTIME_UNKNOWN_STAGE",
            Self::MissingCatalog => "RUNTIME_MISSING_CATALOG",
            Self::MissingStage => "RUNTIME_MISSING_STAGE",
            Self::CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
            Self::ReplyChannelClosed(_) => "RUNTIME_REPLY_CHANNEL_CLOSED",
            Self::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
        }
    }
}
