use std::time::Duration;

use async_trait::async_trait;
use battle_core::Millis;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use super::FrameSource;

/// Wall-clock frames on a fixed period.
///
/// Timestamps are milliseconds since the source was created. Ticks missed
/// while the battle was not running are skipped, not replayed.
pub struct IntervalFrames {
    origin: Instant,
    interval: Interval,
}

impl IntervalFrames {
    /// Must be called from within a tokio runtime.
    pub fn new(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self {
            origin: Instant::now(),
            interval,
        }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

#[async_trait]
impl FrameSource for IntervalFrames {
    async fn next_frame(&mut self) -> Option<Millis> {
        let tick = self.interval.tick().await;
        let since_origin = tick.saturating_duration_since(self.origin).as_millis();
        Some(Millis(u64::try_from(since_origin).unwrap_or(u64::MAX)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn timestamps_follow_the_period() {
        let mut frames = IntervalFrames::new(Duration::from_millis(20));

        let first = frames.next_frame().await.unwrap();
        let second = frames.next_frame().await.unwrap();
        let third = frames.next_frame().await.unwrap();

        assert_eq!(first, Millis(0));
        assert_eq!(second, Millis(20));
        assert_eq!(third, Millis(40));
    }
}
