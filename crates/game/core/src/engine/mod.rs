//! Frame stepping for a battle.
//!
//! The [`BattleEngine`] is the only place a frame's worth of combat is
//! applied to a [`BattleState`]. It runs the tick for both sides in a fixed
//! order and then evaluates the outcome.

use crate::combat::{CombatEvent, CombatObserver, tick_roster};
use crate::outcome::{Outcome, evaluate};
use crate::state::{BattleState, Millis};
use crate::targeting::TargetingStrategy;

/// Everything one frame produced.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameReport {
    pub elapsed: Millis,
    /// Combat records in the order they happened.
    pub events: Vec<CombatEvent>,
    /// Terminal result, if this frame ended the battle.
    pub outcome: Option<Outcome>,
}

/// Applies frames to a borrowed battle state.
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
    strategy: &'a dyn TargetingStrategy,
}

impl<'a> BattleEngine<'a> {
    /// Creates an engine over `state` that targets with `strategy`.
    pub fn new(state: &'a mut BattleState, strategy: &'a dyn TargetingStrategy) -> Self {
        Self { state, strategy }
    }

    /// Runs one frame and collects its records.
    pub fn advance(&mut self, elapsed: Millis) -> FrameReport {
        let mut events = Vec::new();
        let outcome = self.advance_with(elapsed, &mut events);
        FrameReport {
            elapsed,
            events,
            outcome,
        }
    }

    /// Runs one frame, streaming records into `observer`.
    ///
    /// Enemies attack first, then players, then both rosters are evaluated.
    pub fn advance_with<O>(&mut self, elapsed: Millis, observer: &mut O) -> Option<Outcome>
    where
        O: CombatObserver + ?Sized,
    {
        let BattleState {
            enemies, players, ..
        } = &mut *self.state;

        tick_roster(enemies, players, elapsed, self.strategy, observer);
        tick_roster(players, enemies, elapsed, self.strategy, observer);

        evaluate(enemies, players)
    }

    /// Read-only access to the state being advanced.
    pub fn state(&self) -> &BattleState {
        self.state
    }
}
