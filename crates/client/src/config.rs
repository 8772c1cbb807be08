//! Client configuration read from the environment.

use std::env;
use std::path::PathBuf;

use battle_core::{GridPosition, TargetingPolicy};

/// One player unit to place before the battle starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutEntry {
    pub unit: String,
    /// Zero-based; the environment value is 1-based like the stage files.
    pub position: GridPosition,
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `units.ron`, `monsters.ron`, `stages.ron`.
    pub content_dir: PathBuf,
    /// Stage to run. Defaults to the first stage id in sort order.
    pub stage: Option<String>,
    pub layout: Vec<LayoutEntry>,
    pub frame_ms: u64,
    /// Overrides the targeting rule from `config.toml`.
    pub targeting: Option<TargetingPolicy>,
    /// Print the result as JSON instead of text.
    pub json: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            stage: None,
            layout: Vec::new(),
            frame_ms: 16,
            targeting: None,
            json: false,
        }
    }
}

impl ClientConfig {
    /// Reads `BATTLE_*` variables, keeping defaults for anything unset or
    /// unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("BATTLE_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }

        if let Ok(stage) = env::var("BATTLE_STAGE")
            && !stage.trim().is_empty()
        {
            config.stage = Some(stage.trim().to_string());
        }

        if let Ok(layout) = env::var("BATTLE_LAYOUT") {
            config.layout = parse_layout(&layout);
        }

        if let Some(frame_ms) = read_env::<u64>("BATTLE_FRAME_MS") {
            config.frame_ms = frame_ms.max(1);
        }

        if let Ok(targeting) = env::var("BATTLE_TARGETING") {
            match targeting.trim().parse::<TargetingPolicy>() {
                Ok(policy) => config.targeting = Some(policy),
                Err(_) => tracing::warn!("ignoring unknown BATTLE_TARGETING '{}'", targeting),
            }
        }

        if let Some(json) = read_env::<bool>("BATTLE_JSON") {
            config.json = json;
        }

        config
    }
}

/// Parses `unit@column,row;unit@column,row`. Malformed entries are skipped.
pub fn parse_layout(raw: &str) -> Vec<LayoutEntry> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let parsed = parse_entry(entry);
            if parsed.is_none() {
                tracing::warn!("skipping malformed layout entry '{}'", entry);
            }
            parsed
        })
        .collect()
}

fn parse_entry(entry: &str) -> Option<LayoutEntry> {
    let (unit, cell) = entry.split_once('@')?;
    let (column, row) = cell.split_once(',')?;
    let unit = unit.trim();
    if unit.is_empty() {
        return None;
    }

    let column: u32 = column.trim().parse().ok()?;
    let row: u32 = row.trim().parse().ok()?;
    Some(LayoutEntry {
        unit: unit.to_string(),
        position: GridPosition::new(column.saturating_sub(1), row.saturating_sub(1)),
    })
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_one_based() {
        let layout = parse_layout("knight@1,1; archer @ 3,2 ;");

        assert_eq!(
            layout,
            vec![
                LayoutEntry {
                    unit: "knight".into(),
                    position: GridPosition::new(0, 0),
                },
                LayoutEntry {
                    unit: "archer".into(),
                    position: GridPosition::new(2, 1),
                },
            ]
        );
    }

    #[test]
    fn malformed_entries_are_dropped() {
        let layout = parse_layout("knight;@1,1;mage@x,2;cleric@2,2");

        assert_eq!(layout.len(), 1);
        assert_eq!(layout[0].unit, "cleric");
    }
}
