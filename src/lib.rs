//! Sunset scene library.
//!
//! This module exposes the scene's ECS components, resources, systems, and
//! events, plus the tween group and sequence builders, for use in integration
//! tests and by the binary.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod sequencer;
pub mod systems;
pub mod tweengroup;
