//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems and observers: timing, screen size, the toggle state,
//! the palette and handles to the scene elements.
//!
//! Overview
//! - `debugmode` – presence toggles the diagnostics overlay
//! - `palette` – fixed theme colors and the resolved [`palette::SkyPalette`]
//! - `sceneconfig` – window settings loaded from INI
//! - `sceneelements` – entity handles of sky, sun, sea and reflection
//! - `screensize` – current framebuffer dimensions in pixels
//! - `suntoggle` – which sequence the next activation plays
//! - `tweenserial` – spawn order counter for last-writer-wins
//! - `worldtime` – simulation time and delta
pub mod debugmode;
pub mod palette;
pub mod sceneconfig;
pub mod sceneelements;
pub mod screensize;
pub mod suntoggle;
pub mod tweenserial;
pub mod worldtime;
