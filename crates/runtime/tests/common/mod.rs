#![allow(dead_code)]

use battle_core::{GridPosition, MonsterDefinition, Placement, StageDefinition, UnitDefinition};
use battle_runtime::CatalogOracle;

pub fn unit(id: &str, attack: u32, interval_ms: u64, health: u32, armor: u32) -> UnitDefinition {
    UnitDefinition {
        id: id.into(),
        name: id.to_uppercase(),
        attack,
        attack_interval_ms: interval_ms,
        health,
        armor,
    }
}

pub fn monster(unit: UnitDefinition, gold: u32, drop: Option<&str>) -> MonsterDefinition {
    MonsterDefinition {
        unit,
        gold,
        drop: drop.map(str::to_string),
    }
}

/// Stage "lane": one slime (column 2, row 0) with armor 3 and 10 health,
/// plus a placement naming an unknown monster.
///
/// Players: "knight" hits for 10 every 1000 ms; "squire" never lands a
/// meaningful blow.
pub fn catalog() -> CatalogOracle {
    let mut catalog = CatalogOracle::new();
    catalog.add_unit(unit("knight", 10, 1000, 50, 0));
    catalog.add_unit(unit("squire", 1, 1000, 5, 0));

    catalog.add_monster(monster(unit("slime", 0, 1000, 10, 3), 7, Some("jelly")));
    catalog.add_monster(monster(unit("brute", 100, 500, 500, 50), 40, None));

    catalog.add_stage(StageDefinition {
        id: "lane".into(),
        name: "Single Lane".into(),
        placements: vec![
            Placement::new("slime", GridPosition::new(2, 0)),
            Placement::new("phantom", GridPosition::new(0, 0)),
        ],
    });
    catalog.add_stage(StageDefinition {
        id: "wall".into(),
        name: "Brute Wall".into(),
        placements: vec![Placement::new("brute", GridPosition::new(2, 1))],
    });
    catalog
}
