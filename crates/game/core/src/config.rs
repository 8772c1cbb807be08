use crate::state::Millis;
use crate::targeting::TargetingPolicy;

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Number of grid columns on each side of the board.
    pub columns: u32,
    /// Number of grid rows on each side of the board.
    pub rows: u32,
    /// Floor applied to every combatant's attack interval.
    ///
    /// Keeps a zero or negative interval in the data from turning into an
    /// attack on every frame. Never below [`Self::MIN_ATTACK_INTERVAL_FLOOR_MS`].
    pub min_attack_interval_ms: u64,
    /// Which targeting rule attackers use to pick a defender.
    pub targeting: TargetingPolicy,
}

impl BattleConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_COLUMNS: u32 = 5;
    pub const DEFAULT_ROWS: u32 = 2;
    pub const DEFAULT_MIN_ATTACK_INTERVAL_MS: u64 = 100;
    /// Lowest accepted value for `min_attack_interval_ms`.
    pub const MIN_ATTACK_INTERVAL_FLOOR_MS: u64 = 1;

    pub fn new() -> Self {
        Self {
            columns: Self::DEFAULT_COLUMNS,
            rows: Self::DEFAULT_ROWS,
            min_attack_interval_ms: Self::DEFAULT_MIN_ATTACK_INTERVAL_MS,
            targeting: TargetingPolicy::default(),
        }
    }

    /// Overrides the board size. Both dimensions are raised to at least 1.
    #[must_use]
    pub fn with_board(mut self, columns: u32, rows: u32) -> Self {
        self.columns = columns.max(1);
        self.rows = rows.max(1);
        self
    }

    #[must_use]
    pub fn with_targeting(mut self, targeting: TargetingPolicy) -> Self {
        self.targeting = targeting;
        self
    }

    /// Overrides the attack-interval floor, raised to at least 1 ms.
    #[must_use]
    pub fn with_min_attack_interval(mut self, interval: Millis) -> Self {
        self.min_attack_interval_ms = interval.as_u64().max(Self::MIN_ATTACK_INTERVAL_FLOOR_MS);
        self
    }

    /// The effective floor. A zero stored in the public field still reads as 1 ms.
    pub fn min_attack_interval(&self) -> Millis {
        Millis(
            self.min_attack_interval_ms
                .max(Self::MIN_ATTACK_INTERVAL_FLOOR_MS),
        )
    }

    /// Number of cells available to one side.
    pub fn cells_per_side(&self) -> usize {
        (self.columns.max(1) as usize) * (self.rows.max(1) as usize)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
