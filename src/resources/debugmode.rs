//! Debug toggle resource.
//!
//! The mere presence of this resource enables the diagnostics overlay (FPS,
//! toggle direction, running tweens). Remove it to hide the overlay.
use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render system draws the debug overlay.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
