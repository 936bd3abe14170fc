use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::backgroundcolor::BackgroundColor;
use crate::components::layoutbox::LayoutBox;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::tween::Tween;
use crate::resources::debugmode::DebugMode;
use crate::resources::palette::{SUN_RAYS, color_from_argb};
use crate::resources::sceneelements::SceneElements;
use crate::resources::suntoggle::SunToggle;

/// Number of corners of the corona drawn behind the sun.
const CORONA_SIDES: i32 = 12;
/// Corona radius relative to the sun radius.
const CORONA_SCALE: f32 = 1.18;

/// Everything the renderer needs about one element this frame.
#[derive(Clone, Copy)]
struct Drawable {
    layout: LayoutBox,
    pos: Vector2,
    rotation: Rotation,
    color: Color,
}

/// Draw the scene: sky, sun clipped to the sky, sea, reflection clipped to
/// the sea, then the debug overlay if enabled.
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    elements: Option<Res<SceneElements>>,
    query: Query<(&LayoutBox, &MapPosition, &Rotation, &BackgroundColor)>,
    tweens: Query<&Tween>,
    toggle: Res<SunToggle>,
    debug: Option<Res<DebugMode>>,
) {
    let fetch = |entity: Entity| {
        query
            .get(entity)
            .ok()
            .map(|(layout, pos, rot, bg)| Drawable {
                layout: *layout,
                pos: pos.pos,
                rotation: *rot,
                color: bg.color,
            })
    };
    let scene = elements.as_ref().and_then(|e| {
        Some((fetch(e.sky)?, fetch(e.sun)?, fetch(e.sea)?, fetch(e.reflection)?))
    });

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    let Some((sky, sun, sea, reflection)) = scene else {
        return;
    };

    d.draw_rectangle(
        sky.pos.x as i32,
        sky.pos.y as i32,
        sky.layout.width as i32,
        sky.layout.height as i32,
        sky.color,
    );
    {
        let mut clip = d.begin_scissor_mode(
            sky.pos.x as i32,
            sky.pos.y as i32,
            sky.layout.width as i32,
            sky.layout.height as i32,
        );
        draw_sun(&mut clip, sky.pos, sun);
    }

    d.draw_rectangle(
        sea.pos.x as i32,
        sea.pos.y as i32,
        sea.layout.width as i32,
        sea.layout.height as i32,
        sea.color,
    );
    {
        let mut clip = d.begin_scissor_mode(
            sea.pos.x as i32,
            sea.pos.y as i32,
            sea.layout.width as i32,
            sea.layout.height as i32,
        );
        let radius = reflection.layout.width / 2.0;
        let center = Vector2 {
            x: sea.pos.x + reflection.pos.x + radius,
            y: sea.pos.y + reflection.pos.y + radius,
        };
        clip.draw_circle_v(center, radius, reflection.color);
    }

    if debug.is_some() {
        let lines = [
            format!(
                "{} {} | FPS: {} (F11 to hide)",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                d.get_fps()
            ),
            format!(
                "Activations: {} | {} | next: {:?}",
                toggle.activations(),
                if toggle.shows_night() { "night" } else { "day" },
                toggle.next()
            ),
            tween_summary(tweens.iter()),
            format!(
                "Sun y: {:.1} (layout {:.1}) rotation: {:.1}",
                sun.pos.y,
                sun.layout.top,
                sun.rotation.normalized()
            ),
            format!(
                "Sky: #{:02X}{:02X}{:02X}",
                sky.color.r, sky.color.g, sky.color.b
            ),
        ];
        for (i, line) in lines.iter().enumerate() {
            d.draw_text(line, 10, 10 + 20 * i as i32, 10, Color::WHITE);
        }
    }
}

/// Overlay line counting live tweens and those still in their start delay.
fn tween_summary<'a>(tweens: impl Iterator<Item = &'a Tween>) -> String {
    let (mut running, mut waiting) = (0, 0);
    for tween in tweens {
        running += 1;
        if !tween.started() {
            waiting += 1;
        }
    }
    format!("Running tweens: {} ({} waiting)", running, waiting)
}

/// The sun is a disc over a rotating polygon, so its spin is visible.
fn draw_sun<D: RaylibDraw>(d: &mut D, parent: Vector2, sun: Drawable) {
    let radius = sun.layout.width / 2.0;
    let center = Vector2 {
        x: parent.x + sun.pos.x + radius,
        y: parent.y + sun.pos.y + radius,
    };
    d.draw_poly(
        center,
        CORONA_SIDES,
        radius * CORONA_SCALE,
        sun.rotation.normalized(),
        color_from_argb(SUN_RAYS),
    );
    d.draw_circle_v(center, radius, sun.color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tween::TweenProperty;

    #[test]
    fn test_tween_summary_counts_waiting() {
        let mut world = World::new();
        let target = world.spawn_empty().id();
        let fade = |delay| {
            Tween::new(target, TweenProperty::Y { from: 0.0, to: 1.0 }, 1.5).with_delay(delay)
        };
        let tweens = [fade(0.0), fade(3.0), fade(1.5)];
        assert_eq!(
            tween_summary(tweens.iter()),
            "Running tweens: 3 (2 waiting)"
        );
        assert_eq!(tween_summary(std::iter::empty()), "Running tweens: 0 (0 waiting)");
    }
}
