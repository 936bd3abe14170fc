//! Time update.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance the clock by the raw frame delta `dt`, in seconds.
///
/// Negative deltas count as zero. The delta is capped at `max_delta` before
/// `time_scale` is applied.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let step = dt.clamp(0.0, wt.max_delta);
    if step < dt {
        log::debug!("Long frame ({:.3}s) capped to {:.3}s", dt, step);
    }
    let scaled = step * wt.time_scale;
    wt.elapsed += scaled;
    wt.delta = scaled;
    wt.frames += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with(time: WorldTime) -> World {
        let mut world = World::new();
        world.insert_resource(time);
        world
    }

    #[test]
    fn test_update_applies_time_scale() {
        let mut world = world_with(WorldTime::default().with_time_scale(2.0));
        update_world_time(&mut world, 0.125);
        update_world_time(&mut world, 0.25);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta, 0.5);
        assert_eq!(wt.elapsed, 0.75);
        assert_eq!(wt.frames, 2);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut world = world_with(WorldTime::default());
        update_world_time(&mut world, -1.0);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta, 0.0);
        assert_eq!(wt.elapsed, 0.0);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut world = world_with(WorldTime::default().with_max_delta(0.5));
        update_world_time(&mut world, 4.0);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta, 0.5);
        assert_eq!(wt.elapsed, 0.5);
    }
}
