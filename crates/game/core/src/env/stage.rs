use crate::state::GridPosition;

/// Where one monster stands when a stage loads.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Monster definition identifier.
    pub monster: String,
    /// Zero-based cell on the enemy side.
    pub position: GridPosition,
}

impl Placement {
    pub fn new(monster: impl Into<String>, position: GridPosition) -> Self {
        Self {
            monster: monster.into(),
            position,
        }
    }
}

/// Fixed enemy composition for one stage.
///
/// Immutable once loaded; resetting a battle revives the roster built from it
/// rather than rebuilding.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageDefinition {
    pub id: String,
    pub name: String,
    pub placements: Vec<Placement>,
}
