//! Tween component for animated property interpolation.
//!
//! Every running tween is an entity of its own carrying a [`Tween`]. The tween
//! targets a scene element and drives exactly one of its properties:
//! - [`TweenProperty::Y`] – vertical position in [`MapPosition`](super::mapposition::MapPosition)
//! - [`TweenProperty::Rotation`] – [`Rotation`](super::rotation::Rotation)
//! - [`TweenProperty::BackgroundColor`] – [`BackgroundColor`](super::backgroundcolor::BackgroundColor)
//!
//! Each tween supports multiple [`Easing`] functions and [`LoopMode`] settings.
//! Tweens are normally created in groups, see [`crate::tweengroup`].
//! See [`crate::systems::tween`] for the update system.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Color;

/// Determines how a tween behaves when it reaches the end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopMode {
    /// Play once and stop.
    Once,
    /// Restart from the beginning when finished, forever.
    Loop,
}

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Slow start and end following half a cosine wave.
    SineInOut,
}

/// The property a tween writes, with its start and end values.
#[derive(Copy, Clone, Debug)]
pub enum TweenProperty {
    /// Vertical position, in the parent element's coordinates.
    Y { from: f32, to: f32 },
    /// Rotation angle in degrees.
    Rotation { from: f32, to: f32 },
    /// Background color, blended with the ARGB evaluator.
    BackgroundColor { from: Color, to: Color },
}

/// Property discriminant, used to find tweens fighting over the same property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Y,
    Rotation,
    BackgroundColor,
}

impl TweenProperty {
    pub fn kind(&self) -> PropertyKind {
        match self {
            TweenProperty::Y { .. } => PropertyKind::Y,
            TweenProperty::Rotation { .. } => PropertyKind::Rotation,
            TweenProperty::BackgroundColor { .. } => PropertyKind::BackgroundColor,
        }
    }
}

/// A running property animation.
///
/// The tween waits `delay` seconds, then interpolates its [`TweenProperty`]
/// over `duration` seconds using `easing` and `loop_mode`, writing the value
/// into the `target` entity every frame.
#[derive(Component, Clone, Debug)]
pub struct Tween {
    /// Scene element whose property is animated.
    pub target: Entity,
    /// Property and its start/end values.
    pub property: TweenProperty,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Behavior when the tween ends.
    pub loop_mode: LoopMode,
    /// Seconds left before playback starts.
    pub delay: f32,
    /// Current time within the tween.
    pub time: f32,
    /// Whether the tween is still playing.
    pub playing: bool,
    /// Spawn order. Higher serials are applied later within a frame.
    pub serial: u64,
}

impl Tween {
    pub fn new(target: Entity, property: TweenProperty, duration: f32) -> Self {
        Tween {
            target,
            property,
            duration,
            easing: Easing::Linear,
            loop_mode: LoopMode::Once,
            delay: 0.0,
            time: 0.0,
            playing: true,
            serial: 0,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }
    pub fn with_serial(mut self, serial: u64) -> Self {
        self.serial = serial;
        self
    }

    /// True once the start delay has elapsed.
    pub fn started(&self) -> bool {
        self.delay <= 0.0
    }

    /// True when the tween never finishes on its own.
    pub fn is_endless(&self) -> bool {
        self.loop_mode != LoopMode::Once
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_tween_new_defaults() {
        let mut world = World::new();
        let target = world.spawn_empty().id();
        let tw = Tween::new(target, TweenProperty::Y { from: 0.0, to: 10.0 }, 3.0);

        assert_eq!(tw.target, target);
        assert!(approx_eq(tw.duration, 3.0));
        assert_eq!(tw.easing, Easing::Linear);
        assert_eq!(tw.loop_mode, LoopMode::Once);
        assert!(approx_eq(tw.delay, 0.0));
        assert!(approx_eq(tw.time, 0.0));
        assert!(tw.playing);
        assert!(tw.started());
        assert!(!tw.is_endless());
    }

    #[test]
    fn test_tween_builder_chaining() {
        let mut world = World::new();
        let target = world.spawn_empty().id();
        let tw = Tween::new(
            target,
            TweenProperty::Rotation {
                from: 0.0,
                to: 360.0,
            },
            9.0,
        )
        .with_easing(Easing::SineInOut)
        .with_loop_mode(LoopMode::Loop)
        .with_delay(1.5)
        .with_serial(7);

        assert_eq!(tw.easing, Easing::SineInOut);
        assert_eq!(tw.loop_mode, LoopMode::Loop);
        assert!(approx_eq(tw.delay, 1.5));
        assert_eq!(tw.serial, 7);
        assert!(!tw.started());
        assert!(tw.is_endless());
    }

    #[test]
    fn test_negative_delay_is_clamped() {
        let mut world = World::new();
        let target = world.spawn_empty().id();
        let tw = Tween::new(target, TweenProperty::Y { from: 0.0, to: 1.0 }, 1.0)
            .with_delay(-2.0);
        assert!(approx_eq(tw.delay, 0.0));
        assert!(tw.started());
    }

    #[test]
    fn test_property_kind() {
        let y = TweenProperty::Y { from: 0.0, to: 1.0 };
        let rot = TweenProperty::Rotation { from: 0.0, to: 1.0 };
        let color = TweenProperty::BackgroundColor {
            from: Color::new(0, 0, 0, 255),
            to: Color::new(255, 255, 255, 255),
        };
        assert_eq!(y.kind(), PropertyKind::Y);
        assert_eq!(rot.kind(), PropertyKind::Rotation);
        assert_eq!(color.kind(), PropertyKind::BackgroundColor);
        assert_ne!(y.kind(), rot.kind());
    }
}
