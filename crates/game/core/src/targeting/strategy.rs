//! Targeting strategy trait.

use crate::state::Combatant;

/// Rule for choosing which defender an attacker swings at.
///
/// Implementations must be pure and deterministic: the same attacker and
/// defender slice always produce the same answer. Defenders that are not
/// alive are never eligible.
pub trait TargetingStrategy: Send + Sync {
    /// Returns the index into `defenders` of the chosen target.
    ///
    /// Returns `None` if no live defender is eligible.
    fn select_target(&self, attacker: &Combatant, defenders: &[Combatant]) -> Option<usize>;

    /// Returns the strategy name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Returns an optional description of the strategy's behavior.
    fn description(&self) -> &'static str {
        "No description available"
    }
}
