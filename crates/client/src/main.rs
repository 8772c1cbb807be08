//! Auto-battle client binary.
//!
//! Loads a content directory, places the player layout from the environment,
//! runs one stage to completion and reports the result.
//!
//! # Examples
//!
//! ```bash
//! BATTLE_STAGE=1 BATTLE_LAYOUT="knight@3,1;archer@3,2" cargo run -p battle-client
//! ```

mod config;

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::broadcast::error::RecvError;

use battle_content::ContentFactory;
use battle_core::CombatEvent;
use battle_runtime::{
    CatalogOracle, CombatRecord, Event, LifecycleEvent, Resolution, Runtime, RuntimeConfig, Topic,
};

use config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = ClientConfig::from_env();
    tracing::info!("Starting auto-battle client");
    tracing::debug!("Client config: {:?}", config);

    // 1. Load content
    let content = ContentFactory::new(&config.content_dir)
        .load_all()
        .with_context(|| format!("loading content from {}", config.content_dir.display()))?;

    let mut battle = content.config.clone();
    if let Some(targeting) = config.targeting {
        battle = battle.with_targeting(targeting);
    }
    tracing::info!("Targeting: {}", battle.targeting);

    let catalog = CatalogOracle::from_content(&content);
    let stage = match &config.stage {
        Some(stage) => stage.clone(),
        None => catalog
            .stage_ids()
            .first()
            .map(|id| id.to_string())
            .context("content defines no stages")?,
    };

    // 2. Build runtime
    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            battle,
            frame_interval: Duration::from_millis(config.frame_ms),
            ..RuntimeConfig::default()
        })
        .catalog(catalog)
        .stage(&stage)
        .build()
        .await?;

    let handle = runtime.handle();
    let mut lifecycle = handle.subscribe(Topic::Lifecycle);
    let mut combat = handle.subscribe(Topic::Combat);

    // 3. Place the player layout
    for entry in &config.layout {
        match handle.place_unit(entry.position, entry.unit.as_str()).await {
            Ok(change) => tracing::info!("Placed {}: {:?}", entry.unit, change),
            Err(e) => tracing::warn!("Could not place {} at {}: {}", entry.unit, entry.position, e),
        }
    }

    // 4. Run to resolution
    handle
        .start()
        .await
        .with_context(|| format!("starting stage {}", stage))?;

    let resolution = loop {
        tokio::select! {
            event = combat.recv() => match event {
                Ok(Event::Combat(record)) => log_combat(&record),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Dropped {} combat events", skipped);
                }
                Err(RecvError::Closed) => anyhow::bail!("combat stream closed"),
            },
            event = lifecycle.recv() => match event {
                Ok(Event::Lifecycle(LifecycleEvent::Resolved(resolution))) => break resolution,
                Ok(event) => tracing::debug!("Lifecycle: {:?}", event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Dropped {} lifecycle events", skipped);
                }
                Err(RecvError::Closed) => anyhow::bail!("lifecycle stream closed"),
            },
        }
    };

    while let Ok(Event::Combat(record)) = combat.try_recv() {
        log_combat(&record);
    }

    report(&stage, &resolution, config.json)?;

    drop(combat);
    drop(lifecycle);
    drop(handle);
    runtime.shutdown().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}

/// Logs to stderr, filtered by `RUST_LOG` with `info` as the baseline.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn log_combat(record: &CombatRecord) {
    match &record.event {
        CombatEvent::Hit {
            attacker,
            target,
            target_side,
            damage,
            health,
            max_health,
            ..
        } => tracing::info!(
            "[{}] {} hits {} {} for {} ({}/{})",
            record.at,
            attacker,
            target_side,
            target,
            damage,
            health,
            max_health
        ),
        CombatEvent::Defeated { target, side, by } => {
            tracing::info!("[{}] {} {} defeated by {}", record.at, side, target, by)
        }
        CombatEvent::Idle { attacker } => {
            tracing::debug!("[{}] {} has nothing in reach", record.at, attacker)
        }
    }
}

fn report(stage: &str, resolution: &Resolution, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(resolution)?);
        return Ok(());
    }

    println!("Stage {}: {}", stage, resolution.outcome);
    if let Some(rewards) = &resolution.rewards {
        println!("  gold: {}", rewards.gold);
        if !rewards.drops.is_empty() {
            println!("  drops: {}", rewards.drops.join(", "));
        }
    }
    Ok(())
}
