//! Scene systems.
//!
//! This module groups the ECS systems that read input, lay out the scene,
//! advance animations and draw.
//!
//! Submodules overview
//! - [`input`] – turn taps and the debug key into events
//! - [`layout`] – measure sky, sun, sea and reflection for the screen size
//! - [`render`] – draw the scene and the debug overlay using Raylib
//! - [`time`] – update simulation time and delta
//! - [`tween`] – animate position, rotation and color over time

pub mod input;
pub mod layout;
pub mod render;
pub mod time;
pub mod tween;
