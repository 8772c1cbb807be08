use std::fmt;

/// Unique identifier for a combatant within one battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which of the two rosters a combatant belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    Enemy,
    Player,
}

impl Side {
    /// The side this one fights against.
    pub const fn opponent(self) -> Self {
        match self {
            Side::Enemy => Side::Player,
            Side::Player => Side::Enemy,
        }
    }
}

/// Cell coordinates on one side of the board, zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    pub column: u32,
    pub row: u32,
}

impl GridPosition {
    pub const ORIGIN: Self = Self { column: 0, row: 0 };

    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Clamps the coordinates into a `columns` × `rows` board.
    pub fn clamped(self, columns: u32, rows: u32) -> Self {
        Self {
            column: self.column.min(columns.saturating_sub(1)),
            row: self.row.min(rows.saturating_sub(1)),
        }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Simulated duration in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    pub const fn saturating_add(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_add(rhs.0))
    }

    pub const fn saturating_sub(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_sub(rhs.0))
    }
}

impl From<u64> for Millis {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Integer health meter tracked per combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthMeter {
    pub current: u32,
    pub maximum: u32,
}

impl HealthMeter {
    /// Creates a full meter. The maximum is raised to at least 1.
    pub fn full(maximum: u32) -> Self {
        let maximum = maximum.max(1);
        Self {
            current: maximum,
            maximum,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_positions_into_board() {
        assert_eq!(
            GridPosition::new(9, 7).clamped(5, 2),
            GridPosition::new(4, 1)
        );
        assert_eq!(
            GridPosition::new(3, 0).clamped(5, 2),
            GridPosition::new(3, 0)
        );
    }

    #[test]
    fn side_round_trips_through_strings() {
        assert_eq!(Side::Enemy.to_string(), "enemy");
        assert_eq!("player".parse::<Side>().ok(), Some(Side::Player));
        assert_eq!(Side::Player.opponent(), Side::Enemy);
    }

    #[test]
    fn health_meter_never_has_zero_maximum() {
        let meter = HealthMeter::full(0);
        assert_eq!(meter.maximum, 1);
        assert_eq!(meter.current, 1);
    }
}
