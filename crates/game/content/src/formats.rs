//! On-disk record formats.
//!
//! Records mirror the tabular source data and are deliberately forgiving:
//! numeric fields accept integers, floats, or numeric strings, and anything
//! missing or malformed becomes `0`. Conversion into `battle-core` types
//! happens in the loaders.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use battle_core::{GridPosition, MonsterDefinition, Placement, StageDefinition, UnitDefinition};

/// One row of `units.ron`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UnitRecord {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub attack: u32,
    /// Milliseconds between attacks.
    #[serde(deserialize_with = "lenient_u64")]
    pub attack_interval: u64,
    #[serde(deserialize_with = "lenient_u32")]
    pub health: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub armor: u32,
}

impl UnitRecord {
    pub fn into_definition(self) -> UnitDefinition {
        let name = if self.name.is_empty() {
            self.id.clone()
        } else {
            self.name
        };
        UnitDefinition {
            id: self.id,
            name,
            attack: self.attack,
            attack_interval_ms: self.attack_interval,
            health: self.health,
            armor: self.armor,
        }
    }
}

/// One row of `monsters.ron`: unit stats plus rewards.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MonsterRecord {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub attack: u32,
    #[serde(deserialize_with = "lenient_u64")]
    pub attack_interval: u64,
    #[serde(deserialize_with = "lenient_u32")]
    pub health: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub armor: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub gold: u32,
    pub drop: Option<String>,
}

impl MonsterRecord {
    pub fn into_definition(self) -> MonsterDefinition {
        let unit = UnitRecord {
            id: self.id,
            name: self.name,
            attack: self.attack,
            attack_interval: self.attack_interval,
            health: self.health,
            armor: self.armor,
        }
        .into_definition();

        MonsterDefinition {
            unit,
            gold: self.gold,
            drop: self.drop.filter(|drop| !drop.trim().is_empty()),
        }
    }
}

/// One monster placement inside a stage, 1-based like the source tables.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlacementRecord {
    pub monster: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub column: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub row: u32,
}

impl PlacementRecord {
    /// Converts to a zero-based placement. A `0` coordinate stays at `0`.
    pub fn into_placement(self) -> Placement {
        Placement::new(
            self.monster,
            GridPosition::new(self.column.saturating_sub(1), self.row.saturating_sub(1)),
        )
    }
}

/// One row of `stages.ron`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct StageRecord {
    pub id: String,
    pub name: String,
    pub placements: Vec<PlacementRecord>,
}

impl StageRecord {
    pub fn into_definition(self) -> StageDefinition {
        StageDefinition {
            id: self.id,
            name: self.name,
            placements: self
                .placements
                .into_iter()
                .map(PlacementRecord::into_placement)
                .collect(),
        }
    }
}

// ============================================================================
// Lenient numeric fields
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawNumber {
    fn to_u64(&self) -> u64 {
        match self {
            RawNumber::Integer(value) => (*value).max(0) as u64,
            RawNumber::Float(value) => float_to_u64(*value),
            RawNumber::Text(text) => {
                let text = text.trim();
                if let Ok(value) = text.parse::<i64>() {
                    value.max(0) as u64
                } else if let Ok(value) = text.parse::<f64>() {
                    float_to_u64(value)
                } else {
                    tracing::warn!("non-numeric value {:?} in content data, using 0", text);
                    0
                }
            }
            RawNumber::Other(_) => {
                tracing::warn!("malformed numeric field in content data, using 0");
                0
            }
        }
    }
}

fn float_to_u64(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    }
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawNumber::deserialize(deserializer)?.to_u64())
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_u64(deserializer)?;
    Ok(value.min(u64::from(u32::MAX)) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_accept_many_spellings() {
        let record: UnitRecord = ron::from_str(
            r#"(id: "archer", name: "Archer", attack: "8", attack_interval: 1250.7, health: 30, armor: -2)"#,
        )
        .unwrap();

        assert_eq!(record.attack, 8);
        assert_eq!(record.attack_interval, 1250);
        assert_eq!(record.health, 30);
        assert_eq!(record.armor, 0);
    }

    #[test]
    fn malformed_or_missing_numbers_become_zero() {
        let record: UnitRecord =
            ron::from_str(r#"(id: "dummy", attack: "lots", health: [1, 2])"#).unwrap();

        assert_eq!(record.attack, 0);
        assert_eq!(record.health, 0);
        assert_eq!(record.armor, 0);
        assert_eq!(record.attack_interval, 0);
        assert_eq!(record.into_definition().name, "dummy");
    }

    #[test]
    fn placements_convert_to_zero_based() {
        let record: PlacementRecord =
            ron::from_str(r#"(monster: "slime", column: 3, row: 2)"#).unwrap();
        let placement = record.into_placement();

        assert_eq!(placement.position, GridPosition::new(2, 1));
    }

    #[test]
    fn blank_drop_is_no_drop() {
        let record: MonsterRecord =
            ron::from_str(r#"(id: "bat", gold: 2, drop: Some("  "))"#).unwrap();
        assert_eq!(record.into_definition().drop, None);
    }
}
