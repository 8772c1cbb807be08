//! Common error infrastructure for battle-core.
//!
//! The tick path never fails. Every fallible operation sits at the edges:
//! placing combatants, building a roster from a stage, and the driver's
//! transition guards. Those errors share the classification defined here.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Configuration**: bad content data; the offending entry is skipped
/// - **Precondition**: a request made in the wrong state; rejected, state unchanged
/// - **Internal**: unexpected state inconsistency that should be investigated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Content references something that does not exist or conflicts.
    ///
    /// Examples: unknown monster id in a stage, two placements on one cell
    Configuration,

    /// Request rejected because the battle is not in the required state.
    ///
    /// Examples: starting with no live player units, placing while running
    Precondition,

    /// Unexpected state inconsistency.
    ///
    /// Examples: a combatant inserted into the opposing side's roster
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Precondition => "precondition",
            Self::Internal => "internal",
        }
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
