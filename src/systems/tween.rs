//! Tween animation system.
//!
//! [`tween_system`] advances every [`Tween`] entity by the frame delta from
//! [`WorldTime`](crate::resources::worldtime::WorldTime), then writes the eased
//! value into the target element:
//! - `Y` into [`MapPosition`](crate::components::mapposition::MapPosition)
//! - `Rotation` into [`Rotation`](crate::components::rotation::Rotation)
//! - `BackgroundColor` into [`BackgroundColor`](crate::components::backgroundcolor::BackgroundColor)
//!
//! Tweens are applied in ascending [`Tween::serial`] order, so when two tweens
//! drive the same property in the same frame the one started last wins.
//! Finished tweens, and tweens whose target is gone, are despawned.

use crate::components::backgroundcolor::BackgroundColor;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::tween::{Easing, LoopMode, Tween, TweenProperty};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use raylib::prelude::Color;
use std::f32::consts::PI;

/// Gamma used by the ARGB evaluator to move channels into linear light.
const GAMMA: f32 = 2.2;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::SineInOut => 0.5 - 0.5 * (PI * t).cos(),
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn channel_to_linear(c: u8) -> f32 {
    (c as f32 / 255.0).powf(GAMMA)
}

fn channel_from_linear(v: f32) -> u8 {
    (v.clamp(0.0, 1.0).powf(1.0 / GAMMA) * 255.0).round() as u8
}

/// Blend two colors the way the platform ARGB evaluator does.
///
/// Alpha is blended directly. Red, green and blue are converted to linear
/// light, blended, and converted back, which keeps the midpoint of a
/// blue-to-orange fade from turning muddy.
pub(crate) fn lerp_argb(a: Color, b: Color, t: f32) -> Color {
    let alpha = lerp_f32(a.a as f32, b.a as f32, t).round().clamp(0.0, 255.0) as u8;
    let mix = |x: u8, y: u8| {
        channel_from_linear(lerp_f32(channel_to_linear(x), channel_to_linear(y), t))
    };
    Color::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b), alpha)
}

/// Spend the start delay.
///
/// Returns `None` while the tween is still waiting, otherwise the part of `dt`
/// left over for playback this frame.
pub(crate) fn consume_delay(delay: &mut f32, dt: f32) -> Option<f32> {
    if *delay <= 0.0 {
        return Some(dt);
    }
    *delay -= dt;
    if *delay > 0.0 {
        None
    } else {
        let rest = -*delay;
        *delay = 0.0;
        Some(rest)
    }
}

/// Advance tween time by `dt` and handle looping/completion.
pub(crate) fn advance(time: &mut f32, duration: f32, playing: &mut bool, mode: LoopMode, dt: f32) {
    if duration <= 0.0 {
        *time = 0.0;
        if mode == LoopMode::Once {
            *playing = false;
        }
        return;
    }

    *time += dt;
    if *time < duration {
        return;
    }
    match mode {
        LoopMode::Once => {
            *playing = false;
            *time = duration;
        }
        // Keep the overshoot so long-running spins do not drift.
        LoopMode::Loop => *time = time.rem_euclid(duration),
    }
}

/// A sampled property value, ready to be written into its target.
#[derive(Clone, Copy, Debug)]
pub(crate) enum TweenValue {
    Y(f32),
    Rotation(f32),
    BackgroundColor(Color),
}

/// Evaluate a property at eased progress `t`.
pub(crate) fn sample(property: TweenProperty, t: f32) -> TweenValue {
    match property {
        TweenProperty::Y { from, to } => TweenValue::Y(lerp_f32(from, to, t)),
        TweenProperty::Rotation { from, to } => TweenValue::Rotation(lerp_f32(from, to, t)),
        TweenProperty::BackgroundColor { from, to } => {
            TweenValue::BackgroundColor(lerp_argb(from, to, t))
        }
    }
}

/// Advance all tweens and write their values into the targets.
pub fn tween_system(
    world_time: Res<WorldTime>,
    mut commands: Commands,
    mut tweens: Query<(Entity, &mut Tween)>,
    mut positions: Query<&mut MapPosition>,
    mut rotations: Query<&mut Rotation>,
    mut colors: Query<&mut BackgroundColor>,
) {
    let dt = world_time.delta.max(0.0);
    let mut active: Vec<(Entity, Mut<Tween>)> = tweens.iter_mut().collect();
    active.sort_by_key(|(_, tw)| tw.serial);

    for (entity, mut tw) in active {
        let Some(step) = consume_delay(&mut tw.delay, dt) else {
            continue;
        };
        let duration = tw.duration;
        let loop_mode = tw.loop_mode;
        let mut t = tw.time;
        let mut playing = tw.playing;
        advance(&mut t, duration, &mut playing, loop_mode, step);
        tw.time = t;
        tw.playing = playing;

        let progress = if duration > 0.0 { tw.time / duration } else { 1.0 };
        let value = sample(tw.property, ease(tw.easing, progress));
        let target = tw.target;
        let applied = match value {
            TweenValue::Y(y) => positions.get_mut(target).map(|mut mp| mp.pos.y = y).is_ok(),
            TweenValue::Rotation(degrees) => rotations
                .get_mut(target)
                .map(|mut rot| rot.degrees = degrees)
                .is_ok(),
            TweenValue::BackgroundColor(color) => colors
                .get_mut(target)
                .map(|mut bg| bg.color = color)
                .is_ok(),
        };

        if !applied {
            log::debug!("Tween {:?} lost its target {:?}; despawning", entity, target);
            commands.entity(entity).despawn();
        } else if !tw.playing {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    const ALL_EASINGS: [Easing; 3] = [Easing::Linear, Easing::QuadIn, Easing::SineInOut];

    // ==================== EASING FUNCTION TESTS ====================

    #[test]
    fn test_ease_all_types_at_endpoints() {
        for easing in ALL_EASINGS {
            assert!(
                approx_eq(ease(easing, 0.0), 0.0),
                "{:?} at t=0.0 should be 0.0",
                easing
            );
            assert!(
                approx_eq(ease(easing, 1.0), 1.0),
                "{:?} at t=1.0 should be 1.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range_input() {
        for easing in ALL_EASINGS {
            assert!(approx_eq(ease(easing, -0.5), 0.0), "{:?} below 0", easing);
            assert!(approx_eq(ease(easing, 1.5), 1.0), "{:?} above 1", easing);
        }
    }

    #[test]
    fn test_quad_in_accelerates() {
        assert!(approx_eq(ease(Easing::QuadIn, 0.5), 0.25));
        // Second half covers more distance than the first.
        let first = ease(Easing::QuadIn, 0.5) - ease(Easing::QuadIn, 0.0);
        let second = ease(Easing::QuadIn, 1.0) - ease(Easing::QuadIn, 0.5);
        assert!(second > first);
    }

    #[test]
    fn test_sine_in_out_is_symmetric() {
        assert!(approx_eq(ease(Easing::SineInOut, 0.5), 0.5));
        let a = ease(Easing::SineInOut, 0.25);
        let b = ease(Easing::SineInOut, 0.75);
        assert!(approx_eq(a + b, 1.0));
        assert!(a < 0.25);
    }

    #[test]
    fn test_ease_is_monotonic() {
        for easing in ALL_EASINGS {
            let mut last = 0.0;
            for i in 1..=100 {
                let v = ease(easing, i as f32 / 100.0);
                assert!(v + EPSILON >= last, "{:?} decreased at step {}", easing, i);
                last = v;
            }
        }
    }

    // ==================== COLOR TESTS ====================

    #[test]
    fn test_lerp_argb_endpoints() {
        let a = Color::new(30, 122, 199, 255);
        let b = Color::new(236, 129, 0, 255);
        let start = lerp_argb(a, b, 0.0);
        let end = lerp_argb(a, b, 1.0);
        assert_eq!((start.r, start.g, start.b, start.a), (30, 122, 199, 255));
        assert_eq!((end.r, end.g, end.b, end.a), (236, 129, 0, 255));
    }

    #[test]
    fn test_lerp_argb_midpoint_is_brighter_than_naive() {
        let black = Color::new(0, 0, 0, 255);
        let white = Color::new(255, 255, 255, 255);
        let mid = lerp_argb(black, white, 0.5);
        // 0.5^(1/2.2) * 255 ≈ 186, well above the naive 128.
        assert!(mid.r > 180 && mid.r < 192, "got {}", mid.r);
        assert_eq!(mid.r, mid.g);
        assert_eq!(mid.g, mid.b);
    }

    #[test]
    fn test_lerp_argb_alpha_is_linear() {
        let a = Color::new(0, 0, 0, 0);
        let b = Color::new(0, 0, 0, 200);
        assert_eq!(lerp_argb(a, b, 0.5).a, 100);
    }

    // ==================== TIME TESTS ====================

    #[test]
    fn test_consume_delay() {
        let mut delay = 1.0;
        assert!(consume_delay(&mut delay, 0.4).is_none());
        assert!(approx_eq(delay, 0.6));
        let rest = consume_delay(&mut delay, 1.0).unwrap();
        assert!(approx_eq(rest, 0.4));
        assert!(approx_eq(delay, 0.0));
        assert!(approx_eq(consume_delay(&mut delay, 0.25).unwrap(), 0.25));
    }

    #[test]
    fn test_advance_once_clamps_and_stops() {
        let (mut time, mut playing) = (0.0, true);
        advance(&mut time, 1.0, &mut playing, LoopMode::Once, 0.6);
        assert!(playing);
        advance(&mut time, 1.0, &mut playing, LoopMode::Once, 0.6);
        assert!(!playing);
        assert!(approx_eq(time, 1.0));
    }

    #[test]
    fn test_advance_loop_keeps_overshoot() {
        let (mut time, mut playing) = (0.0, true);
        advance(&mut time, 9.0, &mut playing, LoopMode::Loop, 10.0);
        assert!(playing);
        assert!(approx_eq(time, 1.0));
    }

    #[test]
    fn test_advance_zero_duration_finishes_immediately() {
        let (mut time, mut playing) = (0.0, true);
        advance(&mut time, 0.0, &mut playing, LoopMode::Once, 0.1);
        assert!(!playing);
        assert!(approx_eq(time, 0.0));
    }

    #[test]
    fn test_sample_properties() {
        match sample(TweenProperty::Y { from: 10.0, to: 20.0 }, 0.5) {
            TweenValue::Y(y) => assert!(approx_eq(y, 15.0)),
            other => panic!("unexpected {:?}", other),
        }
        match sample(
            TweenProperty::Rotation {
                from: 0.0,
                to: 360.0,
            },
            0.25,
        ) {
            TweenValue::Rotation(r) => assert!(approx_eq(r, 90.0)),
            other => panic!("unexpected {:?}", other),
        }
    }

    // ==================== SYSTEM TESTS ====================

    fn run_once(world: &mut World, dt: f32) {
        world.resource_mut::<WorldTime>().delta = dt;
        let mut schedule = Schedule::default();
        schedule.add_systems(tween_system);
        schedule.run(world);
    }

    #[test]
    fn test_system_writes_position_and_despawns_when_done() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let target = world.spawn(MapPosition::new(0.0, 0.0)).id();
        let tween = world
            .spawn(Tween::new(target, TweenProperty::Y { from: 0.0, to: 100.0 }, 1.0))
            .id();

        run_once(&mut world, 0.5);
        assert!(approx_eq(world.get::<MapPosition>(target).unwrap().pos.y, 50.0));
        assert!(world.get_entity(tween).is_ok());

        run_once(&mut world, 0.6);
        assert!(approx_eq(world.get::<MapPosition>(target).unwrap().pos.y, 100.0));
        assert!(world.get_entity(tween).is_err());
    }

    #[test]
    fn test_system_respects_delay() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let target = world.spawn(Rotation::default()).id();
        world.spawn(
            Tween::new(
                target,
                TweenProperty::Rotation {
                    from: 0.0,
                    to: 100.0,
                },
                1.0,
            )
            .with_delay(1.0),
        );

        run_once(&mut world, 0.5);
        assert!(approx_eq(world.get::<Rotation>(target).unwrap().degrees, 0.0));
        run_once(&mut world, 0.75);
        assert!(approx_eq(world.get::<Rotation>(target).unwrap().degrees, 25.0));
    }

    #[test]
    fn test_eased_spin_lags_linear_turn() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let target = world.spawn(Rotation::default()).id();
        world.spawn(
            Tween::new(
                target,
                TweenProperty::Rotation {
                    from: 0.0,
                    to: 360.0,
                },
                9.0,
            )
            .with_easing(Easing::SineInOut)
            .with_loop_mode(LoopMode::Loop),
        );

        run_once(&mut world, 2.25);
        let degrees = world.get::<Rotation>(target).unwrap().degrees;
        // A quarter of the cycle: 360 * (0.5 - 0.5 * cos(PI / 4)).
        assert!((degrees - 52.72).abs() < 0.01, "rotation was {}", degrees);

        // One full cycle later the turn starts over from the same point.
        run_once(&mut world, 9.0);
        let again = world.get::<Rotation>(target).unwrap().degrees;
        assert!((again - degrees).abs() < 0.05, "rotation was {}", again);
    }

    #[test]
    fn test_later_serial_wins_the_frame() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let target = world.spawn(MapPosition::new(0.0, 0.0)).id();
        // Spawned out of order on purpose; serial decides.
        world.spawn(
            Tween::new(target, TweenProperty::Y { from: 0.0, to: -100.0 }, 1.0).with_serial(2),
        );
        world.spawn(
            Tween::new(target, TweenProperty::Y { from: 0.0, to: 100.0 }, 1.0).with_serial(1),
        );

        run_once(&mut world, 0.5);
        assert!(approx_eq(world.get::<MapPosition>(target).unwrap().pos.y, -50.0));
    }

    #[test]
    fn test_tween_without_target_is_despawned() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let target = world.spawn_empty().id();
        let tween = world
            .spawn(Tween::new(target, TweenProperty::Y { from: 0.0, to: 1.0 }, 1.0))
            .id();
        run_once(&mut world, 0.1);
        assert!(world.get_entity(tween).is_err());
    }
}
