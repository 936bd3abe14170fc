//! Layout pass.
//!
//! The sky takes the top 61% of the screen and the sea the rest. The sun is
//! centered in the sky; its reflection sits as far below the horizon as the
//! sun's lower edge sits above it. Sun and reflection boxes are expressed in
//! their parent's coordinates.
//!
//! [`layout_system`] re-measures whenever [`ScreenSize`] changes. Animated
//! positions are carried over with [`remap_y`], which maps the parent's top,
//! the element's layout top and the parent's height onto their new values.
//! The endpoints of running `Y` tweens are remapped the same way. A sun that
//! has set stays below the horizon after a resize, and a sun in the middle of
//! its fall keeps its relative place.
use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::layoutbox::LayoutBox;
use crate::components::mapposition::MapPosition;
use crate::components::sceneelement::SceneElement;
use crate::components::tween::{Tween, TweenProperty};
use crate::resources::screensize::ScreenSize;

/// Share of the screen height given to the sky.
pub const SKY_WEIGHT: f32 = 0.61;
/// Sun diameter relative to the smaller sky dimension.
pub const SUN_SCALE: f32 = 0.25;

fn sun_size(width: f32, sky_height: f32) -> f32 {
    width.min(sky_height) * SUN_SCALE
}

/// Layout of `element` on a screen of the given size.
pub fn compute_layout(element: SceneElement, screen: ScreenSize) -> LayoutBox {
    let w = screen.w.max(0) as f32;
    let h = screen.h.max(0) as f32;
    let sky_h = (h * SKY_WEIGHT).round();
    let sea_h = h - sky_h;
    let size = sun_size(w, sky_h);
    let centered_left = (w - size) / 2.0;
    match element {
        SceneElement::Sky => LayoutBox::new(0.0, 0.0, w, sky_h),
        SceneElement::Sea => LayoutBox::new(0.0, sky_h, w, sea_h),
        SceneElement::Sun => LayoutBox::new(centered_left, (sky_h - size) / 2.0, size, size),
        SceneElement::Reflection => {
            let sun_bottom = (sky_h - size) / 2.0 + size;
            LayoutBox::new(centered_left, sky_h - sun_bottom, size, size)
        }
    }
}

/// Carry a `y` position across a relayout.
///
/// Piecewise linear: `[0, old_top]` maps onto `[0, new_top]` and
/// `[old_top, old_extent]` onto `[new_top, new_extent]`, where the extent is
/// the parent's height. Degenerate ranges fall back to keeping the offset
/// from the layout top.
pub fn remap_y(y: f32, old_top: f32, old_extent: f32, new_top: f32, new_extent: f32) -> f32 {
    let offset = y - old_top;
    if y <= old_top {
        if old_top > 0.0 {
            y / old_top * new_top
        } else {
            new_top + offset
        }
    } else if old_extent > old_top {
        new_top + offset * (new_extent - new_top) / (old_extent - old_top)
    } else {
        new_top + offset
    }
}

/// How one element's `y` moves from the old layout to the new one.
#[derive(Clone, Copy, Debug)]
struct Relayout {
    old_top: f32,
    /// Parent height before the resize, when known.
    old_extent: Option<f32>,
    new_top: f32,
    new_extent: f32,
}

impl Relayout {
    fn apply(&self, y: f32) -> f32 {
        match self.old_extent {
            Some(old_extent) => {
                remap_y(y, self.old_top, old_extent, self.new_top, self.new_extent)
            }
            None => self.new_top + (y - self.old_top),
        }
    }
}

/// Re-layout the scene when the screen size changes.
pub fn layout_system(
    screen: Res<ScreenSize>,
    mut query: Query<(Entity, &SceneElement, &mut LayoutBox, &mut MapPosition)>,
    mut tweens: Query<&mut Tween>,
) {
    if !screen.is_changed() {
        return;
    }
    if screen.is_empty() {
        log::debug!("Screen is empty; keeping the previous layout");
        return;
    }
    log::debug!("Laying out scene for {}x{}", screen.w, screen.h);

    let previous: SmallVec<[(SceneElement, LayoutBox); 4]> =
        query.iter().map(|(_, e, layout, _)| (*e, *layout)).collect();
    let previous_height = |element: SceneElement| {
        previous
            .iter()
            .find(|(e, _)| *e == element)
            .map(|(_, layout)| layout.height)
    };

    let mut moves: SmallVec<[(Entity, Relayout); 4]> = SmallVec::new();
    for (entity, element, mut layout, mut position) in query.iter_mut() {
        let new_layout = compute_layout(*element, *screen);
        let relayout = match element.parent() {
            Some(parent) => Relayout {
                old_top: layout.top,
                old_extent: previous_height(parent),
                new_top: new_layout.top,
                new_extent: compute_layout(parent, *screen).height,
            },
            None => Relayout {
                old_top: layout.top,
                old_extent: None,
                new_top: new_layout.top,
                new_extent: new_layout.height,
            },
        };
        position.pos.x = new_layout.left;
        position.pos.y = relayout.apply(position.pos.y);
        *layout = new_layout;
        moves.push((entity, relayout));
    }

    for mut tween in tweens.iter_mut() {
        let Some((_, relayout)) = moves.iter().find(|(e, _)| *e == tween.target) else {
            continue;
        };
        if let TweenProperty::Y { from, to } = &mut tween.property {
            *from = relayout.apply(*from);
            *to = relayout.apply(*to);
        }
    }
}
