//! Simulation clock.
//!
//! Tweens advance by [`WorldTime::delta`] each frame. A single frame never
//! advances the clock by more than [`WorldTime::max_delta`], so a stalled
//! window (dragged, minimized) resumes its animations instead of jumping to
//! their end.
use bevy_ecs::prelude::Resource;

/// Longest step a single frame may take, in seconds.
pub const DEFAULT_MAX_DELTA: f32 = 0.25;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since start.
    pub elapsed: f32,
    /// Scaled seconds of the current frame.
    pub delta: f32,
    pub time_scale: f32,
    pub max_delta: f32,
    /// Frames simulated so far.
    pub frames: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            max_delta: DEFAULT_MAX_DELTA,
            frames: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta.max(0.0);
        self
    }
}
