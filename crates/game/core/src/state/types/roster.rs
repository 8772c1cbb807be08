//! Ordered collection of one side's combatants.

use crate::state::PlacementError;

use super::combatant::{Combatant, CombatantView};
use super::common::{CombatantId, GridPosition, Side};

/// All combatants fighting for one side, in placement order.
///
/// Each cell holds at most one combatant. Defeated combatants stay in the
/// roster so their slot renders as fallen until the next reset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    side: Side,
    members: Vec<Combatant>,
}

impl Roster {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            members: Vec::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[Combatant] {
        &self.members
    }

    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.members.iter().find(|member| member.id == id)
    }

    /// Returns the combatant occupying `position`, if any.
    pub fn at(&self, position: GridPosition) -> Option<&Combatant> {
        self.members
            .iter()
            .find(|member| member.position() == position)
    }

    pub fn live(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter().filter(|member| member.is_alive())
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// Adds a combatant to the roster.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::WrongSide`] if the combatant belongs to the
    /// other side, or [`PlacementError::Occupied`] if its cell is taken.
    pub fn insert(&mut self, combatant: Combatant) -> Result<CombatantId, PlacementError> {
        if combatant.side != self.side {
            return Err(PlacementError::WrongSide {
                id: combatant.id,
                expected: self.side,
                found: combatant.side,
            });
        }
        if let Some(occupant) = self.at(combatant.position()) {
            return Err(PlacementError::Occupied {
                side: self.side,
                position: combatant.position(),
                occupant: occupant.id,
            });
        }

        let id = combatant.id;
        self.members.push(combatant);
        Ok(id)
    }

    /// Removes and returns the combatant at `position`.
    ///
    /// Callers must only do this between runs; combat never removes members.
    pub fn remove_at(&mut self, position: GridPosition) -> Option<Combatant> {
        let index = self
            .members
            .iter()
            .position(|member| member.position() == position)?;
        Some(self.members.remove(index))
    }

    /// Revives every member in place.
    pub fn revive_all(&mut self) {
        for member in &mut self.members {
            member.revive();
        }
    }

    pub fn views(&self) -> Vec<CombatantView> {
        self.members.iter().map(Combatant::view).collect()
    }

    pub(crate) fn members_mut(&mut self) -> &mut [Combatant] {
        &mut self.members
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Combatant;
    type IntoIter = std::slice::Iter<'a, Combatant>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
