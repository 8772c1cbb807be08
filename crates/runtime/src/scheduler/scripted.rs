use std::collections::VecDeque;

use async_trait::async_trait;
use battle_core::Millis;

use super::FrameSource;

/// A fixed list of timestamps, for deterministic runs.
#[derive(Clone, Debug, Default)]
pub struct ScriptedFrames {
    frames: VecDeque<Millis>,
}

impl ScriptedFrames {
    pub fn new(frames: impl IntoIterator<Item = Millis>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// `count` frames `step` apart, starting at zero.
    pub fn uniform(step: Millis, count: usize) -> Self {
        Self::new((0..count as u64).map(|i| Millis(i.saturating_mul(step.as_u64()))))
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

#[async_trait]
impl FrameSource for ScriptedFrames {
    async fn next_frame(&mut self) -> Option<Millis> {
        // Let command senders in between frames.
        tokio::task::yield_now().await;
        self.frames.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn yields_in_order_then_exhausts() {
        let mut frames = ScriptedFrames::uniform(Millis(250), 3);

        assert_eq!(frames.next_frame().await, Some(Millis(0)));
        assert_eq!(frames.next_frame().await, Some(Millis(250)));
        assert_eq!(frames.next_frame().await, Some(Millis(500)));
        assert_eq!(frames.next_frame().await, None);
        assert_eq!(frames.remaining(), 0);
    }
}
