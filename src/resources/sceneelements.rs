//! Handles to the four scene element entities.
//!
//! Inserted by [`crate::game::spawn_scene`] once the elements exist. Systems
//! and observers that animate the scene take it as `Option<Res<_>>`; while it is
//! absent nothing can be animated.
use bevy_ecs::prelude::{Entity, Resource};

#[derive(Resource, Clone, Copy, Debug)]
pub struct SceneElements {
    pub sky: Entity,
    pub sun: Entity,
    pub sea: Entity,
    pub reflection: Entity,
}

