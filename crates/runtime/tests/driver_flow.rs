mod common;

use std::sync::Arc;

use battle_core::{BattleConfig, DefinitionOracle, GridPosition, Millis, Outcome, PlacementError};
use battle_runtime::{
    DriverError, Phase, PlacementChange, PlacementCommand, SimulationDriver, StartError,
};

fn driver(stage: &str) -> SimulationDriver {
    let catalog = common::catalog();
    let stage = catalog.stage(stage).unwrap().clone();
    SimulationDriver::new(BattleConfig::default(), Arc::new(catalog), &stage)
}

fn knight_at(driver: &mut SimulationDriver, column: u32, row: u32) -> PlacementChange {
    driver
        .place(PlacementCommand::place(GridPosition::new(column, row), "knight"))
        .unwrap()
}

#[test]
fn unknown_stage_monsters_are_skipped() {
    let driver = driver("lane");

    assert_eq!(driver.phase(), Phase::Idle);
    assert_eq!(driver.state().enemies.len(), 1);
    assert!(driver.state().players.is_empty());
}

#[test]
fn start_requires_a_live_player() {
    let mut driver = driver("lane");

    assert_eq!(
        driver.start(),
        Err(DriverError::Start(StartError::NoLivePlayers))
    );
    assert_eq!(driver.phase(), Phase::Idle);
}

#[test]
fn unknown_units_are_rejected() {
    let mut driver = driver("lane");

    let err = driver
        .place(PlacementCommand::place(GridPosition::new(0, 0), "dragon"))
        .unwrap_err();

    assert!(matches!(
        err,
        DriverError::Placement(PlacementError::UnknownDefinition { .. })
    ));
    assert!(driver.state().players.is_empty());
}

#[test]
fn placing_on_an_occupied_cell_replaces_the_occupant() {
    let mut driver = driver("lane");
    let first = knight_at(&mut driver, 1, 1);
    let PlacementChange::Placed { id: first_id, .. } = first else {
        panic!("expected a placement, got {first:?}");
    };

    let second = driver
        .place(PlacementCommand::place(GridPosition::new(1, 1), "squire"))
        .unwrap();

    assert!(matches!(
        second,
        PlacementChange::Placed { replaced: Some(id), .. } if id == first_id
    ));
    assert_eq!(driver.state().players.len(), 1);
    assert_eq!(driver.state().players.as_slice()[0].key, "squire");
}

#[test]
fn clearing_an_empty_cell_is_a_no_op() {
    let mut driver = driver("lane");

    let change = driver
        .place(PlacementCommand::clear(GridPosition::new(4, 1)))
        .unwrap();

    assert_eq!(
        change,
        PlacementChange::Cleared {
            position: GridPosition::new(4, 1),
            removed: None,
        }
    );
}

#[test]
fn out_of_board_placements_are_clamped() {
    let mut driver = driver("lane");

    let change = knight_at(&mut driver, 40, 9);

    assert!(matches!(
        change,
        PlacementChange::Placed { position, .. } if position == GridPosition::new(4, 1)
    ));
}

#[test]
fn single_lane_battle_resolves_in_victory() {
    let mut driver = driver("lane");
    knight_at(&mut driver, 2, 1);
    driver.start().unwrap();

    // Baseline frame: no time passes.
    let baseline = driver.on_frame(Millis(5_000)).unwrap();
    assert_eq!(baseline.elapsed, Millis::ZERO);
    assert!(baseline.events.is_empty());

    driver.on_frame(Millis(6_000)).unwrap();
    assert_eq!(driver.state().enemies.as_slice()[0].health(), 3);
    assert_eq!(driver.phase(), Phase::Running);

    let report = driver.on_frame(Millis(7_000)).unwrap();
    assert_eq!(report.outcome, Some(Outcome::Victory));
    assert_eq!(
        driver.phase(),
        Phase::Resolved {
            outcome: Outcome::Victory
        }
    );

    let resolution = driver.resolution().unwrap();
    assert!(resolution.victory);
    let rewards = resolution.rewards.unwrap();
    assert_eq!(rewards.gold, 7);
    assert_eq!(rewards.drops, vec!["jelly".to_string()]);

    // Frames after resolution are ignored.
    assert!(driver.on_frame(Millis(8_000)).is_none());
}

#[test]
fn timestamps_going_backwards_do_not_advance_combat() {
    let mut driver = driver("lane");
    knight_at(&mut driver, 2, 1);
    driver.start().unwrap();

    driver.on_frame(Millis(2_000)).unwrap();
    let report = driver.on_frame(Millis(500)).unwrap();

    assert_eq!(report.elapsed, Millis::ZERO);
    assert_eq!(driver.state().enemies.as_slice()[0].health(), 10);
}

#[test]
fn defeat_carries_no_rewards() {
    let mut driver = driver("wall");
    driver
        .place(PlacementCommand::place(GridPosition::new(2, 0), "squire"))
        .unwrap();
    driver.start().unwrap();

    driver.on_frame(Millis(0));
    let report = driver.on_frame(Millis(500)).unwrap();

    assert_eq!(report.outcome, Some(Outcome::Defeat));
    let resolution = driver.resolution().unwrap();
    assert!(!resolution.victory);
    assert_eq!(resolution.rewards, None);
}

#[test]
fn placement_and_reset_are_rejected_while_running() {
    let mut driver = driver("lane");
    knight_at(&mut driver, 2, 1);
    driver.start().unwrap();

    assert!(matches!(
        driver.place(PlacementCommand::clear(GridPosition::new(2, 1))),
        Err(DriverError::NotIdle { phase: Phase::Running, .. })
    ));
    assert!(matches!(
        driver.reset(),
        Err(DriverError::NotIdle { operation: "reset", .. })
    ));
    assert!(matches!(driver.start(), Err(DriverError::NotIdle { .. })));
    assert_eq!(driver.state().players.len(), 1);
}

#[test]
fn reset_revives_without_changing_composition() {
    let mut driver = driver("lane");
    knight_at(&mut driver, 2, 1);
    driver.start().unwrap();
    driver.on_frame(Millis(0));
    driver.on_frame(Millis(1_000));
    driver.on_frame(Millis(2_000));
    assert!(driver.resolution().is_some());

    let before = driver.snapshot();
    let revived = driver.reset().unwrap();

    assert_eq!(driver.phase(), Phase::Idle);
    assert_eq!(revived.len(), 2);
    assert!(revived.iter().all(|view| view.alive && view.health == view.max_health));

    let after = driver.snapshot();
    let positions = |views: &[battle_core::CombatantView]| {
        views.iter().map(|v| (v.id, v.position)).collect::<Vec<_>>()
    };
    assert_eq!(positions(&before.enemies), positions(&after.enemies));
    assert_eq!(positions(&before.players), positions(&after.players));

    // Placement is open again and the battle can be replayed.
    knight_at(&mut driver, 0, 1);
    driver.start().unwrap();
}

#[test]
fn reset_while_idle_is_accepted() {
    let mut driver = driver("lane");
    knight_at(&mut driver, 2, 1);

    assert!(driver.reset().is_ok());
    assert_eq!(driver.phase(), Phase::Idle);
}
