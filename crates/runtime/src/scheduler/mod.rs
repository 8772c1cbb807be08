//! Frame scheduling.
//!
//! A [`FrameSource`] hands the simulation worker one timestamp per frame. The
//! worker only polls it while the battle is running, so leaving `Running`
//! stops further frames without telling the source anything.

mod interval;
mod scripted;

pub use interval::IntervalFrames;
pub use scripted::ScriptedFrames;

use async_trait::async_trait;
use battle_core::Millis;

/// Yields frame timestamps in milliseconds.
#[async_trait]
pub trait FrameSource: Send {
    /// Waits for the next frame. `None` means the source is exhausted.
    async fn next_frame(&mut self) -> Option<Millis>;
}

