//! ECS components for entities.
//!
//! Scene elements (sky, sun, sea, reflection) carry layout, position, rotation
//! and color components. Running animations are separate entities carrying a
//! [`tween::Tween`] that points at the element it drives.
//!
//! Submodules overview:
//! - [`backgroundcolor`] – fill color of an element
//! - [`layoutbox`] – measured layout position and size
//! - [`mapposition`] – current (possibly animated) position
//! - [`rotation`] – rotation angle in degrees
//! - [`sceneelement`] – which of the four scene elements an entity is
//! - [`tween`] – animated interpolation of position, rotation and color

pub mod backgroundcolor;
pub mod layoutbox;
pub mod mapposition;
pub mod rotation;
pub mod sceneelement;
pub mod tween;
