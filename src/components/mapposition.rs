use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Current drawn position of an element's top-left corner, in its parent's
/// coordinates. Tweens on the `y` property write `pos.y`.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition {
            pos: Vector2 { x, y },
        }
    }
}
