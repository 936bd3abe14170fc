//! Sunset and sunrise sequences.
//!
//! Each sequence is built from a fresh [`GeometrySnapshot`] taken when the
//! scene is activated, so a relayout between activations is picked up.
//!
//! Sunset (forward):
//! - sun falls from its layout top to the bottom edge of the sky, accelerating
//! - sky fades day → sunset, then sunset → night once the first fade is done
//! - the sun starts spinning, one eased turn every 9 s, forever
//! - the reflection sinks from its layout top to the bottom of the sea
//!
//! Sunrise (reverse) mirrors the movement but starts the sky fade from the day
//! color again (day → sunset → day) and adds no spin. A spin started by an
//! earlier sunset keeps running.

use bevy_ecs::prelude::Entity;

use crate::components::layoutbox::LayoutBox;
use crate::components::tween::{Easing, LoopMode, TweenProperty};
use crate::resources::palette::SkyPalette;
use crate::resources::sceneelements::SceneElements;
use crate::resources::suntoggle::Sequence;
use crate::tweengroup::{TweenGroup, TweenSpec};

/// Sun and reflection movement.
pub const TRAVEL_SECS: f32 = 3.0;
/// First sky fade (day → sunset).
pub const DUSK_FADE_SECS: f32 = 3.0;
/// Second sky fade, chained after the first.
pub const FINAL_FADE_SECS: f32 = 1.5;
/// One full turn of the sun.
pub const SPIN_SECS: f32 = 9.0;

/// Layout measurements read at activation time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometrySnapshot {
    /// Sun layout top, in sky coordinates.
    pub sun_top: f32,
    /// Sky layout top, in scene coordinates.
    pub sky_top: f32,
    pub sky_height: f32,
    /// Reflection layout top, in sea coordinates.
    pub reflection_top: f32,
    pub sea_height: f32,
}

impl GeometrySnapshot {
    /// Read the current layout of the four elements.
    ///
    /// Returns `None` if any element has no layout yet.
    pub fn capture(
        elements: &SceneElements,
        layout_of: impl Fn(Entity) -> Option<LayoutBox>,
    ) -> Option<Self> {
        let sun = layout_of(elements.sun)?;
        let sky = layout_of(elements.sky)?;
        let reflection = layout_of(elements.reflection)?;
        let sea = layout_of(elements.sea)?;
        Some(Self {
            sun_top: sun.top,
            sky_top: sky.top,
            sky_height: sky.height,
            reflection_top: reflection.top,
            sea_height: sea.height,
        })
    }
}

/// Build the tween group for `sequence`.
pub fn build_group(
    sequence: Sequence,
    geometry: &GeometrySnapshot,
    palette: &SkyPalette,
    elements: &SceneElements,
) -> Result<TweenGroup, String> {
    match sequence {
        Sequence::Sunset => sunset_group(geometry, palette, elements),
        Sequence::Sunrise => sunrise_group(geometry, palette, elements),
    }
}

pub fn sunset_group(
    geometry: &GeometrySnapshot,
    palette: &SkyPalette,
    elements: &SceneElements,
) -> Result<TweenGroup, String> {
    let mut group = TweenGroup::new();

    let dusk = group.add(
        TweenSpec::new(
            elements.sky,
            TweenProperty::BackgroundColor {
                from: palette.day,
                to: palette.sunset,
            },
            DUSK_FADE_SECS,
        )
        .with_easing(Easing::SineInOut),
    );
    group.add(
        TweenSpec::new(
            elements.sun,
            TweenProperty::Y {
                from: geometry.sun_top,
                to: geometry.sky_height,
            },
            TRAVEL_SECS,
        )
        .with_easing(Easing::QuadIn),
    );
    group.add(
        TweenSpec::new(
            elements.reflection,
            TweenProperty::Y {
                from: geometry.reflection_top,
                to: geometry.sea_height,
            },
            TRAVEL_SECS,
        )
        .with_easing(Easing::SineInOut),
    );
    group.add(
        TweenSpec::new(
            elements.sun,
            TweenProperty::Rotation {
                from: 0.0,
                to: 360.0,
            },
            SPIN_SECS,
        )
        .with_easing(Easing::SineInOut)
        .with_loop_mode(LoopMode::Loop),
    );
    group.add_after(
        dusk,
        TweenSpec::new(
            elements.sky,
            TweenProperty::BackgroundColor {
                from: palette.sunset,
                to: palette.night,
            },
            FINAL_FADE_SECS,
        )
        .with_easing(Easing::SineInOut),
    )?;

    Ok(group)
}

pub fn sunrise_group(
    geometry: &GeometrySnapshot,
    palette: &SkyPalette,
    elements: &SceneElements,
) -> Result<TweenGroup, String> {
    let mut group = TweenGroup::new();

    // Starts from the day color, not from night.
    let dusk = group.add(
        TweenSpec::new(
            elements.sky,
            TweenProperty::BackgroundColor {
                from: palette.day,
                to: palette.sunset,
            },
            DUSK_FADE_SECS,
        )
        .with_easing(Easing::SineInOut),
    );
    group.add(
        TweenSpec::new(
            elements.sun,
            TweenProperty::Y {
                from: geometry.sky_top,
                to: geometry.sun_top,
            },
            TRAVEL_SECS,
        )
        .with_easing(Easing::QuadIn),
    );
    group.add(
        TweenSpec::new(
            elements.reflection,
            TweenProperty::Y {
                from: geometry.sea_height,
                to: geometry.reflection_top,
            },
            TRAVEL_SECS,
        )
        .with_easing(Easing::SineInOut),
    );
    group.add_after(
        dusk,
        TweenSpec::new(
            elements.sky,
            TweenProperty::BackgroundColor {
                from: palette.sunset,
                to: palette.day,
            },
            FINAL_FADE_SECS,
        )
        .with_easing(Easing::SineInOut),
    )?;

    Ok(group)
}
