//! Framebuffer size in pixels.
//!
//! The main loop replaces this resource only when the window really changed
//! size; [`layout_system`](crate::systems::layout::layout_system) reacts to
//! that change.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}

impl ScreenSize {
    /// A minimized window reports a zero-sized framebuffer.
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}
