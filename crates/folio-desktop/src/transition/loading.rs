//! Loading bar progress

use super::ease_out_cubic;

/// Progress added per tick
pub const LOADING_STEP: f32 = 0.07;
/// Interval between ticks in milliseconds
pub const LOADING_TICK_MS: f64 = 100.0;

/// Loading bar that fills in fixed steps once started
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingProgress {
    start_ms: f64,
}

impl LoadingProgress {
    /// Start filling at `start_ms`
    pub fn new(start_ms: f64) -> Self {
        Self { start_ms }
    }

    /// Ticks elapsed since start
    fn ticks(&self, now_ms: f64) -> u32 {
        let elapsed = (now_ms - self.start_ms).max(0.0);
        (elapsed / LOADING_TICK_MS).floor() as u32
    }

    /// Current progress in `[0, 1]`
    pub fn progress(&self, now_ms: f64) -> f32 {
        (self.ticks(now_ms) as f32 * LOADING_STEP).min(1.0)
    }

    /// Progress as drawn by the bar, which eases between ticks
    pub fn eased(&self, now_ms: f64) -> f32 {
        ease_out_cubic(self.progress(now_ms))
    }

    #[inline]
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}
