//! Scene setup.
//!
//! [`setup`] inserts the scene resources, spawns the four elements and
//! registers the observers. [`simulation_schedule`] builds the part of the
//! frame that does not need a window, so tests can drive it headless.
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::backgroundcolor::BackgroundColor;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::sceneelement::SceneElement;
use crate::events::activation::scene_activated_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::palette::{BRIGHT_SUN, SEA, SUN_REFLECTION, SkyPalette, color_from_argb};
use crate::resources::sceneelements::SceneElements;
use crate::resources::screensize::ScreenSize;
use crate::resources::suntoggle::SunToggle;
use crate::resources::tweenserial::TweenSerial;
use crate::resources::worldtime::WorldTime;
use crate::systems::layout::{compute_layout, layout_system};
use crate::systems::tween::tween_system;

/// Prepare `world` for the scene. [`ScreenSize`] should be inserted first;
/// without it the elements are laid out on an empty screen until the first
/// resize.
pub fn setup(world: &mut World) {
    if !world.contains_resource::<WorldTime>() {
        world.insert_resource(WorldTime::default());
    }
    if !world.contains_resource::<ScreenSize>() {
        world.insert_resource(ScreenSize { w: 0, h: 0 });
    }
    world.insert_resource(SunToggle::default());
    world.insert_resource(TweenSerial::default());
    world.insert_resource(SkyPalette::from_theme());

    let elements = spawn_scene(world);
    info!("Scene ready: {:?}", elements);

    world.spawn(Observer::new(scene_activated_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Observers must exist before anything can trigger.
    world.flush();
}

/// Spawn sky, sun, sea and reflection in their day state.
pub fn spawn_scene(world: &mut World) -> SceneElements {
    let screen = *world.resource::<ScreenSize>();
    let palette = *world.resource::<SkyPalette>();

    let mut spawn = |element: SceneElement, color: BackgroundColor| {
        let layout = compute_layout(element, screen);
        world
            .spawn((
                element,
                layout,
                MapPosition::new(layout.left, layout.top),
                Rotation::default(),
                color,
            ))
            .id()
    };

    let elements = SceneElements {
        sky: spawn(SceneElement::Sky, palette.day.into()),
        sun: spawn(SceneElement::Sun, color_from_argb(BRIGHT_SUN).into()),
        sea: spawn(SceneElement::Sea, color_from_argb(SEA).into()),
        reflection: spawn(
            SceneElement::Reflection,
            color_from_argb(SUN_REFLECTION).into(),
        ),
    };
    world.insert_resource(elements);
    elements
}

/// Layout, then tweens, so a resize never overwrites a fresh tween value.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(layout_system);
    schedule.add_systems(tween_system.after(layout_system));
    schedule
}
