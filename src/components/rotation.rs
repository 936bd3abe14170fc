use bevy_ecs::prelude::Component;

/// Rotation of an element around its center, in degrees.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    /// Angle folded into `[0, 360)`.
    pub fn normalized(&self) -> f32 {
        self.degrees.rem_euclid(360.0)
    }
}
